use clap::Parser;
use tracing_subscriber::EnvFilter;

use swwwitch::{Awww, Router, SystemRunner, WallpaperConfig, cli::Args};

const LOG_ENV: &str = "SWWWITCH_LOG";

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        eprintln!("Use 'swwwitch --help' for usage information");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = WallpaperConfig::from_env().with_dir_override(args.dir.as_deref());
    tracing::debug!(?config, "resolved configuration");

    let daemon = Awww::new(SystemRunner);
    let mut router = Router::new(&config, &daemon, rand::rng());
    router.run(args.intent(), &mut std::io::stdout().lock())?;
    Ok(())
}
