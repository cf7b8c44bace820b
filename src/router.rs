use crate::config::WallpaperConfig;
use crate::daemon::{Awww, CommandRunner, DaemonState};
use crate::selector::{self, Category};
use crate::{Error, Result, cli};
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a single run of the tool does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowVersion,
    ShowHelp,
    ListCategories,
    SetFile(PathBuf),
    RandomInCategory(String),
    RandomInAll,
    /// A bare positional argument: a file path or a category name.
    Infer(String),
}

pub struct Router<'a, R, G> {
    config: &'a WallpaperConfig,
    daemon: &'a Awww<R>,
    rng: G,
}

impl<'a, R: CommandRunner, G: Rng> Router<'a, R, G> {
    pub fn new(config: &'a WallpaperConfig, daemon: &'a Awww<R>, rng: G) -> Self {
        Self {
            config,
            daemon,
            rng,
        }
    }

    pub fn run<W: Write>(&mut self, intent: Intent, out: &mut W) -> Result<()> {
        tracing::debug!(?intent, root = %self.root().display(), "routing");
        match intent {
            Intent::ShowVersion => writeln!(out, "{}", cli::version_text())?,
            Intent::ShowHelp => write!(out, "{}", cli::help_text())?,
            Intent::ListCategories => self.list(out)?,
            Intent::SetFile(path) => self.set_file(&path, out)?,
            Intent::RandomInCategory(name) => self.random_in_category(&name, out)?,
            Intent::RandomInAll => self.random_in_all(out)?,
            Intent::Infer(arg) => self.infer(&arg, out)?,
        }
        Ok(())
    }

    fn root(&self) -> &Path {
        &self.config.wallpapers_dir
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let categories = selector::list_categories(self.root())?;
        let root = self.root().display();

        writeln!(out, "Available wallpaper categories in {root}:")?;
        if categories.is_empty() {
            writeln!(out, "  (no categories found)")?;
            writeln!(out)?;
            writeln!(
                out,
                "Create subdirectories in {root} to organize your wallpapers by category."
            )?;
        }
        for Category { name, count } in categories {
            writeln!(out, "  {name} ({count} wallpapers)")?;
        }
        Ok(())
    }

    fn set_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<()> {
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        if self.daemon.ensure_running()? == DaemonState::Started {
            writeln!(out, "Starting awww daemon...")?;
        }
        self.daemon.set_image(path, &self.config.transition)?;
        writeln!(out, "✓ Wallpaper set to: {}", path.display())?;
        Ok(())
    }

    fn random_in_category<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let dir = selector::resolve_category(self.root(), name)?;
        let wallpapers = selector::find_wallpapers(&dir);
        let picked = selector::pick_random(&wallpapers, &mut self.rng)
            .map_err(|_| Error::NoWallpapersFound(Some(format!("category '{name}'"))))?;

        self.set_file(picked, out)?;
        writeln!(out, "Category: {name}")?;
        Ok(())
    }

    fn random_in_all<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let root = self.config.wallpapers_dir.as_path();
        if !root.is_dir() {
            return Err(Error::DirectoryNotFound(root.to_path_buf()));
        }

        let wallpapers = selector::find_wallpapers(root);
        let picked = selector::pick_random(&wallpapers, &mut self.rng)
            .map_err(|_| Error::NoWallpapersFound(Some(root.display().to_string())))?;

        self.set_file(picked, out)?;
        if let Some(category) = selector::category_of(root, picked) {
            writeln!(out, "Category: {}", category.display())?;
        }
        Ok(())
    }

    fn infer<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        let as_path = Path::new(arg);
        if as_path.is_file() {
            return self.set_file(as_path, out);
        }
        if self.root().join(arg).is_dir() {
            return self.random_in_category(arg, out);
        }
        Err(Error::UnknownArgument(arg.to_string()))
    }
}
