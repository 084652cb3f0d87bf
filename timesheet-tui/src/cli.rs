use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "timesheet-tui")]
#[command(about = "Terminal form for recording timesheet entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the hosted store configured in config.toml
    Run,
    /// Run in dev mode with seeded in-memory reference data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
