//! Summarize timing samples from a text file
//!
//! Usage: cargo run -p bench-stats --example summarize -- <samples.txt> [thresholds.toml]
//!
//! The samples file holds whitespace-separated numbers in milliseconds.

use anyhow::{bail, Context, Result};
use bench_stats::{Config, Statistics};
use std::env;
use std::fs;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let Some(samples_path) = args.get(1) else {
        bail!("Usage: summarize <samples.txt> [thresholds.toml]");
    };

    let content = fs::read_to_string(samples_path)
        .with_context(|| format!("Failed to read samples file: {}", samples_path))?;
    let samples = content
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid sample: {}", token))
        })
        .collect::<Result<Vec<f64>>>()?;

    let config = match args.get(2) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let stats = Statistics::from_samples(&samples)?;
    let (lower, upper) = stats.confidence_interval();

    println!("Samples:   {}", stats.len());
    println!("Min / Max: {:.4}ms / {:.4}ms", stats.min, stats.max);
    println!("Mean:      {:.4}ms ± {:.2}%", stats.mean, stats.rme);
    println!("95% CI:    [{:.4}, {:.4}]ms", lower, upper);
    println!("SD / SEM:  {:.4}ms / {:.4}ms", stats.sd, stats.sem);
    println!("AAD / MAD: {:.4}ms / {:.4}ms", stats.aad, stats.mad);
    println!(
        "p50 {:.4}  p75 {:.4}  p99 {:.4}  p995 {:.4}  p999 {:.4}",
        stats.p50, stats.p75, stats.p99, stats.p995, stats.p999
    );

    let failures = config.thresholds.evaluate(&stats);
    if failures.is_empty() {
        println!("\n✓ All thresholds passed");
    } else {
        println!("\nThreshold Violations:");
        for failure in &failures {
            println!("  • {}", failure);
        }
        bail!("{} threshold(s) exceeded", failures.len());
    }

    Ok(())
}
