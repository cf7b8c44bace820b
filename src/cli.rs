//! Command line definitions.

use crate::router::Intent;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const HELP_FOOTER: &str = "\
Environment Variables:
  SWWWITCH_WALLPAPERS           Wallpapers directory (default: ~/Pictures/wallpapers)
  SWWWITCH_TRANSITION_TYPE      Transition type (default: fade)
  SWWWITCH_TRANSITION_DURATION  Transition duration in seconds (default: 1)
  SWWWITCH_LOG                  Log filter, e.g. debug (default: warn)

Examples:
  swwwitch --list                    # List all categories
  swwwitch --random                  # Random wallpaper from all categories
  swwwitch --random nature           # Random wallpaper from nature category
  swwwitch --set ~/Pictures/bg.jpg   # Set specific wallpaper
  swwwitch nature                    # Shorthand for --random nature

Directory Structure:
  Your wallpapers directory should contain subdirectories (categories):

  ~/Pictures/wallpapers/
  ├── nature/
  │   ├── mountain1.jpg
  │   └── forest2.png
  ├── abstract/
  │   └── colors.jpg
  └── minimal/
      └── simple.png
";

#[derive(Debug, Parser)]
#[command(name = "swwwitch")]
#[command(
    about = "Wallpaper switcher for awww",
    override_usage = "swwwitch [OPTION] [CATEGORY/FILE]",
    after_help = HELP_FOOTER,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    #[arg(short, long, help = "List available categories")]
    pub list: bool,
    #[arg(
        short,
        long,
        help = "Set random wallpaper from category (or all if no category)"
    )]
    pub random: bool,
    #[arg(short, long, value_name = "FILE", help = "Set specific wallpaper file")]
    pub set: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "CAT",
        help = "Set random wallpaper from specific category"
    )]
    pub category: Option<String>,
    #[arg(short, long, value_name = "DIR", help = "Use custom wallpapers directory")]
    pub dir: Option<PathBuf>,
    #[arg(short = 'v', long, help = "Show version")]
    pub version: bool,
    #[arg(short, long, help = "Show this help")]
    pub help: bool,
    #[arg(value_name = "CATEGORY/FILE")]
    pub target: Option<String>,
}

impl Args {
    /// Picks the one thing this run does. Flags win over each other in the
    /// order version, help, list, set, category, random; a lone positional
    /// argument is inferred last.
    pub fn intent(&self) -> Intent {
        let set = self.set.as_ref().filter(|path| !path.as_os_str().is_empty());
        let category = self.category.as_ref().filter(|name| !name.is_empty());

        if self.version {
            Intent::ShowVersion
        } else if self.help {
            Intent::ShowHelp
        } else if self.list {
            Intent::ListCategories
        } else if let Some(path) = set {
            Intent::SetFile(path.clone())
        } else if let Some(name) = category {
            Intent::RandomInCategory(name.clone())
        } else if self.random {
            match &self.target {
                Some(name) => Intent::RandomInCategory(name.clone()),
                None => Intent::RandomInAll,
            }
        } else {
            match &self.target {
                Some(arg) => Intent::Infer(arg.clone()),
                None => Intent::ShowHelp,
            }
        }
    }
}

pub fn help_text() -> String {
    Args::command().render_help().to_string()
}

pub fn version_text() -> String {
    format!("swwwitch v{}", env!("CARGO_PKG_VERSION"))
}
