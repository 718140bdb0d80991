use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toggl_api::TogglApi;
use toggl_cli::commands::{
    add, clients, edit, ls, now, projects, rm, start, stop, tasks, web, workspaces,
};
use toggl_cli::{Cli, Commands, Config, default_config_path};

/// Load configuration, seeding a commented template on first run.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if config_path.is_none() {
        if let Some(default_path) = default_config_path().filter(|path| !path.exists()) {
            Config::write_default(&default_path)
                .context("failed to write default configuration")?;
            bail!(
                "no configuration found; a template has been created at {} - edit it and try again",
                default_path.display()
            );
        }
    }

    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn api_client(config: &Config) -> Result<TogglApi> {
    if !config.has_credentials() {
        bail!("no API credentials configured; edit the config file first");
    }
    let api = TogglApi::new(&config.api_url, &config.username, &config.password)
        .context("failed to build API client")?;
    Ok(api)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;

    // The web command only shells out to a browser; no API client needed.
    if matches!(command, Commands::Web) {
        return web::run(&config);
    }

    let api = api_client(&config)?;
    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Ls(args) => runtime.block_on(ls::run(&mut stdout, &api, &config, args))?,
        Commands::Now(args) => runtime.block_on(now::run(&mut stdout, &api, &config, args))?,
        Commands::Add(args) => runtime.block_on(add::run(&mut stdout, &api, &config, args))?,
        Commands::Start(args) => runtime.block_on(start::run(&mut stdout, &api, &config, args))?,
        Commands::Stop(args) => runtime.block_on(stop::run(&mut stdout, &api, &config, args))?,
        Commands::Edit(args) => runtime.block_on(edit::run(&mut stdout, &api, &config, args))?,
        Commands::Rm(args) => runtime.block_on(rm::run(&mut stdout, &api, args))?,
        Commands::Projects { action } => {
            runtime.block_on(projects::run(&mut stdout, &api, &config, action))?;
        }
        Commands::Clients { action } => {
            runtime.block_on(clients::run(&mut stdout, &api, action))?;
        }
        Commands::Workspaces { action } => {
            runtime.block_on(workspaces::run(&mut stdout, &api, action))?;
        }
        Commands::Tasks { action } => {
            runtime.block_on(tasks::run(&mut stdout, &api, &config, action))?;
        }
        Commands::Web => unreachable!("handled above"),
    }

    Ok(())
}
