pub mod elapsed;
pub mod init;
pub mod normalize;
pub mod session;
pub mod sum;

use crate::{
    libs::{
        config::{Config, WeekConfig},
        messages::Message,
    },
    msg_error,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show how typed text is turned into HH:MM")]
    Normalize(normalize::NormalizeArgs),
    #[command(about = "Time worked between an in time and an out time")]
    Elapsed(elapsed::ElapsedArgs),
    #[command(about = "Summarize a week from DAY=IN-OUT entries")]
    Sum(sum::SumArgs),
    #[command(about = "Enter the week's times interactively")]
    Session,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Normalize(args) => normalize::cmd(args),
            Commands::Elapsed(args) => elapsed::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Session => session::cmd(),
        }
    }
}

/// Week settings from the config file; a broken file falls back to defaults.
pub fn week_config() -> WeekConfig {
    match Config::read() {
        Ok(config) => config.week_or_default(),
        Err(e) => {
            msg_error!(Message::ConfigReadFailed(e.to_string()));
            WeekConfig::default()
        }
    }
}
