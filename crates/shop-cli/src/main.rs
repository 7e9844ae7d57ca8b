//! Storefront client CLI.

use clap::{ColorChoice, Parser};
use shop_cli::cli::{AccountCommand, Cli, Command, ConfigCommand, LogFormatArg, LogLevelArg};
use shop_cli::commands::{
    load_settings, run_add_to_cart, run_cart, run_deactivate, run_select, save_settings,
};
use shop_cli::logging::{LogConfig, LogFormat, init_logging};
use shop_cli::summary::{print_settings, print_state};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let (settings, settings_path) = load_settings(&cli);
    let result = match &cli.command {
        Command::Select(args) => run_select(&settings, args).await,
        Command::AddToCart(args) => run_add_to_cart(&settings, args).await,
        Command::Cart(command) => run_cart(&settings, command).await,
        Command::Account(AccountCommand::Deactivate) => run_deactivate(&settings).await,
        Command::Config(ConfigCommand::Show) => {
            print_settings(&settings, &settings_path);
            std::process::exit(0);
        }
        Command::Config(ConfigCommand::Save) => {
            let code = match save_settings(&settings, &settings_path) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            };
            std::process::exit(code);
        }
    };

    let exit_code = match result {
        Ok(state) => {
            print_state(&state);
            if state.notice.as_ref().is_some_and(|n| n.is_error()) {
                1
            } else {
                0
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
