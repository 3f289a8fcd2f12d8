//! rtimesheet library root.
//! Exposes the CLI parser, the high-level run() function, and the timesheet
//! logic used by the commands.

pub mod api;
pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::action::ActionKind;
use std::path::PathBuf;

/// Settings resolved once per invocation and handed to every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub cfg: Config,
    pub config_path: Option<PathBuf>,
    pub color: bool,
    pub clock_check: bool,
}

impl Context {
    pub fn new(cli: &Cli, cfg: Config) -> Self {
        let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
        let clock_check = cfg.clock_check && !cli.no_clock_check;
        Self {
            cfg,
            config_path: cli.config.clone(),
            color,
            clock_check,
        }
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Ls { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::In { time } => cli::commands::punch::handle(ActionKind::In, time.as_deref(), ctx),
        Commands::Out { time } => {
            cli::commands::punch::handle(ActionKind::Out, time.as_deref(), ctx)
        }
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, ctx),
        Commands::Key { .. } => cli::commands::key::handle(&cli.command, ctx),
        Commands::Version => cli::commands::version::handle(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &cfg.log_level)?;

    let ctx = Context::new(&cli, cfg);
    ui::messages::set_color(ctx.color);

    dispatch(&cli, &ctx)
}
