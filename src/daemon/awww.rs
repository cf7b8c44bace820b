use super::{CommandRunner, Invocation};
use crate::config::Transition;
use crate::{Error, Result};
use std::path::Path;
use std::thread;
use std::time::Duration;

pub const DAEMON_PROGRAM: &str = "awww-daemon";
pub const CLIENT_PROGRAM: &str = "awww";
pub const LAUNCH_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonState {
    AlreadyRunning,
    Started,
}

/// Talks to the awww wallpaper daemon through its command line client.
pub struct Awww<R> {
    runner: R,
    grace: Duration,
}

impl<R: CommandRunner> Awww<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            grace: LAUNCH_GRACE,
        }
    }

    /// How long to wait after launching the daemon before talking to it.
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn is_running(&self) -> bool {
        self.runner
            .succeeds(&Invocation::new("pgrep").arg("-x").arg(DAEMON_PROGRAM))
    }

    /// Launches the daemon if no process by that name exists. There is no
    /// readiness handshake: after a launch we only sleep for the grace period.
    pub fn ensure_running(&self) -> Result<DaemonState> {
        if self.is_running() {
            tracing::debug!("{DAEMON_PROGRAM} already running");
            return Ok(DaemonState::AlreadyRunning);
        }

        tracing::info!("starting {DAEMON_PROGRAM}");
        self.runner
            .spawn_detached(&Invocation::new(DAEMON_PROGRAM))
            .map_err(Error::DaemonLaunchFailed)?;

        if !self.grace.is_zero() {
            thread::sleep(self.grace);
        }
        Ok(DaemonState::Started)
    }

    pub fn set_image(&self, path: &Path, transition: &Transition) -> Result<()> {
        let invocation = Invocation::new(CLIENT_PROGRAM)
            .arg("img")
            .arg(path)
            .arg("--transition-type")
            .arg(&transition.kind)
            .arg("--transition-duration")
            .arg(transition.duration.to_string());

        let outcome = self
            .runner
            .run(&invocation)
            .map_err(|err| Error::WallpaperSetFailed(err.to_string()))?;

        if !outcome.success {
            let reason = if outcome.stderr.is_empty() {
                outcome.status
            } else {
                outcome.stderr
            };
            return Err(Error::WallpaperSetFailed(reason));
        }

        tracing::info!(path = %path.display(), "wallpaper set");
        Ok(())
    }

    /// Makes sure the daemon is up, then hands it `path`.
    pub fn dispatch(&self, path: &Path, transition: &Transition) -> Result<DaemonState> {
        let state = self.ensure_running()?;
        self.set_image(path, transition)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daemon::fake::FakeRunner;
    use std::ffi::OsString;

    fn args(invocation: &Invocation) -> Vec<OsString> {
        invocation.args.clone()
    }

    #[test]
    fn running_daemon_is_not_relaunched() {
        let awww = Awww::new(FakeRunner::running()).with_grace(Duration::ZERO);
        let state = awww
            .dispatch(Path::new("/walls/a.png"), &Transition::default())
            .unwrap();

        assert_eq!(state, DaemonState::AlreadyRunning);
        assert_eq!(awww.runner().programs(), ["pgrep", "awww"]);
    }

    #[test]
    fn stopped_daemon_is_launched_first() {
        let awww = Awww::new(FakeRunner::default()).with_grace(Duration::ZERO);
        let state = awww
            .dispatch(Path::new("/walls/a.png"), &Transition::default())
            .unwrap();

        assert_eq!(state, DaemonState::Started);
        assert_eq!(awww.runner().programs(), ["pgrep", "awww-daemon", "awww"]);
        let probe = awww.runner().calls.borrow()[0].clone();
        assert_eq!(args(&probe), ["-x", "awww-daemon"]);
    }

    #[test]
    fn set_image_passes_path_and_transition() {
        let awww = Awww::new(FakeRunner::running()).with_grace(Duration::ZERO);
        let transition = Transition {
            kind: "wipe".to_string(),
            duration: 4,
        };
        awww.set_image(Path::new("/walls/nature/a b.jpg"), &transition)
            .unwrap();

        let call = awww.runner().last().unwrap();
        assert_eq!(call.program, "awww");
        assert_eq!(
            args(&call),
            [
                "img",
                "/walls/nature/a b.jpg",
                "--transition-type",
                "wipe",
                "--transition-duration",
                "4"
            ]
        );
    }

    #[test]
    fn launch_failure_is_reported() {
        let runner = FakeRunner {
            launch_error: true,
            ..FakeRunner::default()
        };
        let awww = Awww::new(runner).with_grace(Duration::ZERO);
        let err = awww
            .dispatch(Path::new("/walls/a.png"), &Transition::default())
            .unwrap_err();

        assert!(matches!(err, Error::DaemonLaunchFailed(_)));
        assert!(!awww.runner().programs().contains(&"awww".to_string()));
    }

    #[test]
    fn failed_set_surfaces_stderr() {
        let runner = FakeRunner {
            set_stderr: Some("image decode failed".to_string()),
            ..FakeRunner::running()
        };
        let awww = Awww::new(runner).with_grace(Duration::ZERO);
        let err = awww
            .set_image(Path::new("/walls/a.png"), &Transition::default())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to set wallpaper: image decode failed"
        );
    }

    #[test]
    fn failed_set_without_stderr_uses_status() {
        let runner = FakeRunner {
            set_stderr: Some(String::new()),
            ..FakeRunner::running()
        };
        let awww = Awww::new(runner).with_grace(Duration::ZERO);
        let err = awww
            .set_image(Path::new("/walls/a.png"), &Transition::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to set wallpaper: exit status: 1");
    }
}
