pub mod check;
pub mod interactive;

use clap::{ArgAction, Parser, Subcommand};
use dotquad_common::config::Config;

#[derive(Parser)]
#[command(name = "dotquad", version)]
#[command(about = "A strict dotted-decimal IPv4 address validator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Less output; repeat (-qq) to print only the verdicts
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Don't print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show why a candidate was rejected
    #[arg(short, long, global = true)]
    pub explain: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate addresses typed at a prompt (default)
    #[command(alias = "i")]
    Interactive,
    /// Validate the given candidates, or every line of stdin if none are given
    #[command(alias = "c")]
    Check {
        #[arg(allow_hyphen_values = true)]
        candidates: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            no_color: self.no_color,
            quiet: self.quiet,
            explain: self.explain,
        }
    }
}
