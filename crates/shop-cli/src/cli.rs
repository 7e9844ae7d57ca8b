//! CLI argument definitions for the storefront client.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "shop",
    version,
    about = "Storefront client - resolve product options, manage the cart and account",
    long_about = "Drive the storefront pages against a running shop server.\n\n\
                  Option picks are clicked in order exactly as on the product page;\n\
                  each click queries the server for the matching variants."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: settings.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Shop base URL (overrides the settings file).
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Cookie header sent with every request.
    ///
    /// Cart and account actions need the `csrftoken` cookie.
    #[arg(long = "cookie", value_name = "COOKIE", global = true)]
    pub cookie: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Click option values on a product page and show the resulting state.
    Select(SelectArgs),

    /// Click option values, then add the selected variant to the cart.
    AddToCart(AddToCartArgs),

    /// Update or delete a cart item.
    #[command(subcommand)]
    Cart(CartCommand),

    /// Customer account actions.
    #[command(subcommand)]
    Account(AccountCommand),

    /// Show or save the effective settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Parser)]
pub struct SelectArgs {
    /// Product page catalog (JSON with product_id and option groups).
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: PathBuf,

    /// Option value to click, as TYPE=VALUE. Repeat in click order.
    #[arg(long = "pick", value_name = "TYPE=VALUE", value_parser = parse_pick)]
    pub picks: Vec<Pick>,
}

#[derive(Parser)]
pub struct AddToCartArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Number of items to add.
    #[arg(long = "quantity", default_value_t = 1)]
    pub quantity: u32,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Set the quantity of a cart item.
    Update {
        /// Product variant id of the cart item.
        #[arg(long = "variant")]
        variant: u64,

        /// New item quantity.
        #[arg(long = "quantity")]
        quantity: u32,
    },

    /// Remove an item from the cart.
    Delete {
        /// Product variant id of the cart item.
        #[arg(long = "variant")]
        variant: u64,
    },
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Deactivate the signed-in customer account.
    Deactivate,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings.
    Show,

    /// Write the effective settings (including flag overrides) to the settings file.
    Save,
}

/// One option value click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub option_type: String,
    pub value: String,
}

/// Parse a `TYPE=VALUE` pick.
pub fn parse_pick(raw: &str) -> Result<Pick, String> {
    let (option_type, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected TYPE=VALUE, got '{raw}'"))?;
    let option_type = option_type.trim();
    let value = value.trim();
    if option_type.is_empty() || value.is_empty() {
        return Err(format!("expected TYPE=VALUE, got '{raw}'"));
    }
    Ok(Pick {
        option_type: option_type.to_string(),
        value: value.to_string(),
    })
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
