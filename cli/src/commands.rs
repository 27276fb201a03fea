pub mod compute;
pub mod sources;

use calcul_common::models::source_kind::SourceKind;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "calcul")]
#[command(about = "Scales a reading from a pluggable data source.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
pub enum Commands {
    /// Wire the database source to the calculator and print the result
    #[default]
    #[command(aliases = ["p", "dao"])]
    Primary,
    /// Wire the web service source to the calculator and print the result
    #[command(aliases = ["s", "dao2"])]
    Secondary,
    /// List the data sources that can be wired
    #[command(alias = "l")]
    Sources,
}

impl Commands {
    /// The source a computing command wires, `None` for listing.
    pub fn source_kind(&self) -> Option<SourceKind> {
        match self {
            Commands::Primary => Some(SourceKind::Primary),
            Commands::Secondary => Some(SourceKind::Secondary),
            Commands::Sources => None,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
