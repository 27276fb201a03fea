mod commands;
mod terminal;

use calcul_common::config::Config;
use commands::{CommandLine, compute, sources};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let command = commands.command.unwrap_or_default();
    match command.source_kind() {
        Some(source) => compute::compute(&Config::new(source)),
        None => {
            sources::sources();
            Ok(())
        }
    }
}
