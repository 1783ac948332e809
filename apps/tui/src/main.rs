use clap::Parser;
use color_eyre::Result;
use std::time::Instant;
use surf_gems::app::App;
use surf_gems::cli::CliArgs;
use surf_gems::config::init_app_config;
use surf_gems::spots::SpotRepository;
use surf_gems::{event, logging, terminal};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config();

    let headless = args.headless || !is_terminal();
    if headless {
        logging::init_stderr_logging(&config)?;
    } else {
        logging::init_file_logging(&config)?;
    }
    debug!(?config, "configuration loaded");

    let repository = SpotRepository::load_or_bundled(config.spots_file.as_deref())?;
    info!(spots = repository.len(), "spot data loaded");

    let mut app = App::new(repository, config, Instant::now());

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup(true, true);

    if let Err(e) = &result {
        error!("application error: {e}");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
