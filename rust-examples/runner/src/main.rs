//! Playground runner
//!
//! Replays the selected lessons and writes their transcripts to stdout,
//! either as text or as a JSON array. Logs go to stderr and follow
//! `RUST_LOG` (default `warn`).
//!
//! ```text
//! playground --lesson collections
//! PLAYGROUND_FORMAT=json playground --lesson generics
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

mod config;

use config::{OutputFormat, RunnerConfig};

fn main() -> Result<()> {
    let config = RunnerConfig::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if config.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    log::info!("replaying lessons: {}", config.lesson.as_str());
    let transcripts = config.lesson.transcripts();
    log::debug!("{} transcripts recorded", transcripts.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => {
            for transcript in &transcripts {
                writeln!(out, "{transcript}").context("writing transcript")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &transcripts)
                .context("serializing transcripts")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
