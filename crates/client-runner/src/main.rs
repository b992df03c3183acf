//! Storymaker client - command-line front end
//!
//! This crate is the *composition root*: it reads configuration, picks the
//! transport, and hands one `Api` to every command.

mod cli;
mod commands;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    commands::run(cli::Cli::parse()).await
}
