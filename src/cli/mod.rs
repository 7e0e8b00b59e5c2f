//! CLI module for linestore - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
