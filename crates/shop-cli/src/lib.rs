//! CLI library components for the storefront client.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
