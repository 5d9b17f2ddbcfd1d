mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, interactive};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    if cfg.no_color {
        colored::control::set_override(false);
    }

    logging::init_logging()?;
    print::banner(&cfg);

    match commands.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            interactive::interactive(&cfg);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { candidates } => {
            if check::check(candidates, &cfg)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
