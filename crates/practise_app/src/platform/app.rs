use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use log::LevelFilter;
use practise_core::{fibonacci, sorted_counts, total_tokens, word_count, WhitespaceWordCounter};
use practise_harness::{fixed_cases, random_cases, run};
use practise_logging::{practise_debug, practise_info, practise_warn};

use super::config::{load_config, PractiseConfig};
use super::logging::{self, LogDestination};
use crate::cli::{Cli, Command};

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.log_level.into()
    };
    let destination = match &config.log_file {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    logging::initialize(level, destination);
    practise_debug!("Effective config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let passed = execute(&cli.command, &config, &mut out)?;
    out.flush().context("flushing stdout")?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs one subcommand, writing its output to `out`.
///
/// Returns `false` only when the word count harness reports a failure.
fn execute(
    command: &Command,
    config: &PractiseConfig,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    match command {
        Command::Fib { count } => {
            let count = count.unwrap_or(config.fib_count);
            practise_info!("Printing {} Fibonacci numbers", count);
            for value in fibonacci().take(count) {
                writeln!(out, "{value}")?;
            }
            Ok(true)
        }
        Command::Wordcount { text, json } => {
            let text = text.join(" ");
            let counts = word_count(&text);
            practise_info!(
                "Counted {} tokens, {} distinct",
                total_tokens(&counts),
                counts.len()
            );
            if *json {
                let sorted: serde_json::Map<String, serde_json::Value> = sorted_counts(&counts)
                    .into_iter()
                    .map(|(token, count)| (token.to_string(), count.into()))
                    .collect();
                serde_json::to_writer(&mut *out, &sorted).context("serializing word counts")?;
                writeln!(out)?;
            } else {
                for (token, count) in sorted_counts(&counts) {
                    writeln!(out, "{token}: {count}")?;
                }
            }
            Ok(true)
        }
        Command::WcTest {
            seed,
            random_cases: random,
            json,
        } => {
            let seed = seed.unwrap_or(config.seed);
            let random = random.unwrap_or(config.random_cases);
            let mut cases = fixed_cases();
            cases.extend(random_cases(seed, random));
            practise_info!(
                "Running word count harness: {} cases (seed {:#x})",
                cases.len(),
                seed
            );

            let report = run(&WhitespaceWordCounter, &cases);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &report)
                    .context("serializing harness report")?;
                writeln!(out)?;
            } else {
                write!(out, "{report}")?;
            }

            let failed = report.failures().count();
            if failed > 0 {
                practise_warn!("{} of {} cases failed", failed, report.cases.len());
            }
            Ok(report.passed())
        }
    }
}
