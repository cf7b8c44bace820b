use std::path::{Path, PathBuf};

pub const WALLPAPERS_ENV: &str = "SWWWITCH_WALLPAPERS";
pub const TRANSITION_TYPE_ENV: &str = "SWWWITCH_TRANSITION_TYPE";
pub const TRANSITION_DURATION_ENV: &str = "SWWWITCH_TRANSITION_DURATION";

/// Transition settings handed through to the daemon unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub kind: String,
    /// Seconds.
    pub duration: u32,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            kind: default_transition_type(),
            duration: default_transition_duration(),
        }
    }
}

/// Settings for a single invocation, resolved once at startup from
/// defaults, then environment overrides, then command line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperConfig {
    pub wallpapers_dir: PathBuf,
    pub transition: Transition,
}

fn default_transition_type() -> String {
    "fade".to_string()
}

fn default_transition_duration() -> u32 {
    1
}

fn default_wallpapers_dir(home: Option<&Path>) -> PathBuf {
    home.unwrap_or_else(|| Path::new(""))
        .join("Pictures")
        .join("wallpapers")
}

impl WallpaperConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(dirs::home_dir().as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolves the configuration against an arbitrary variable source.
    /// Empty values count as unset.
    pub fn from_lookup<F>(home: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let wallpapers_dir = get(WALLPAPERS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_wallpapers_dir(home));
        let kind = get(TRANSITION_TYPE_ENV).unwrap_or_else(default_transition_type);
        let duration = get(TRANSITION_DURATION_ENV)
            .and_then(|raw| match raw.trim().parse::<u32>() {
                Ok(duration) => Some(duration),
                Err(err) => {
                    tracing::debug!(
                        value = %raw,
                        error = %err,
                        "ignoring {TRANSITION_DURATION_ENV}, using default"
                    );
                    None
                }
            })
            .unwrap_or_else(default_transition_duration);

        Self {
            wallpapers_dir,
            transition: Transition { kind, duration },
        }
    }

    /// Replaces the wallpapers root when `dir` is given and non-empty.
    pub fn with_dir_override(mut self, dir: Option<&Path>) -> Self {
        if let Some(dir) = dir.filter(|dir| !dir.as_os_str().is_empty()) {
            self.wallpapers_dir = dir.to_path_buf();
        }
        self
    }
}
