use super::{CommandOutcome, CommandRunner, Invocation};
use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

fn command(invocation: &Invocation) -> Command {
    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    command
}

impl CommandRunner for SystemRunner {
    fn succeeds(&self, invocation: &Invocation) -> bool {
        command(invocation)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn spawn_detached(&self, invocation: &Invocation) -> io::Result<()> {
        // Own process group so the daemon survives our exit and terminal signals.
        let child = command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()?;
        // Never waited on; the daemon keeps running after we exit.
        tracing::debug!(pid = child.id(), program = %invocation.program, "spawned");
        Ok(())
    }

    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutcome> {
        let output = command(invocation).output()?;
        Ok(CommandOutcome {
            success: output.status.success(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
