//! External commands as units of work
//!
//! Used by the `runtimer` binary: each invocation spawns the command, discards its
//! stdout and waits for it to exit. A spawn failure or non-zero exit status is a
//! work failure and aborts the measurement.

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

use crate::clock::Clock;
use crate::runner::{Measurement, TrialRunner};

/// Run `command` once to completion
pub fn run_once(command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        bail!("Empty command");
    };

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .with_context(|| format!("Failed to spawn `{}`", program))?;

    if !status.success() {
        bail!("Command `{}` failed: {}", command.join(" "), status);
    }
    Ok(())
}

/// Measure `command` with `runner`
pub fn measure_command<C: Clock>(
    runner: &TrialRunner<C>,
    command: &[String],
) -> Result<Measurement> {
    if command.is_empty() {
        bail!("Must specify a command. Usage: runtimer [OPTIONS] -- COMMAND [ARGS...]");
    }
    tracing::info!(command = %command.join(" "), "timing command");
    runner.try_measure(|| run_once(command))
}
