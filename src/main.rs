mod app;
mod cli;
mod completion;
mod config;
mod consts;
mod error;
mod logging;
mod notes;
mod prompts;
mod repl;
mod session;
mod utils;

use clap::Parser;
use tracing::debug;

use cli::Cli;
use config::Config;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init(cli.debug);
    if let Some(path) = &config.source {
        debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
