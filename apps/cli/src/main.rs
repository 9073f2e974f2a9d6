//! `studio-cam-detector` reports whether a camera is on.
//!
//! One-shot by default; `--watch` polls until killed and runs the
//! `--on-command` / `--off-command` templates on every transition.

mod cli;
mod duration;
mod error;
mod output;

use std::io::IsTerminal;
use std::process::ExitCode;

use camwatch_detect::{
    platform::PlatformProvider, render_device_list, Device, DeviceEnumerator, Selector,
};
use camwatch_watch::{ActionExecutor, Watcher};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays scriptable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if let Some(tip) = e.tip() {
                eprintln!("{tip}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let provider = PlatformProvider::new();
    let selector = cli.selector();

    if cli.list {
        let devices = provider.enumerate()?;
        for line in render_device_list(&devices, cli.video_only) {
            println!("{line}");
        }
        return Ok(());
    }

    let (devices, target) = locate_target(&provider, &selector)?;

    if cli.watch {
        let actions = ActionExecutor::new(cli.on_command.clone(), cli.off_command.clone());
        Watcher::new(provider, selector, actions, cli.interval)
            .run(&devices, |change| println!("{change}"));
    }

    if cli.has_actions() {
        tracing::warn!("--on-command/--off-command are only used with --watch");
    }

    println!("{}", output::status_line(&target, cli.quiet));
    Ok(())
}

/// Startup snapshot: fails with exit 2 if enumeration fails, exit 1 if the
/// target isn't in it. Applies to watch mode too; only later polls retry.
fn locate_target<P: DeviceEnumerator>(
    provider: &P,
    selector: &Selector,
) -> Result<(Vec<Device>, Device), CliError> {
    let devices = provider.enumerate()?;
    let target = selector
        .find(&devices)
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            selector: selector.clone(),
        })?;

    Ok((devices, target))
}
