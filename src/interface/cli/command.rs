//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::config::MAX_HELP_WIDTH;

#[derive(Debug, Parser)]
#[command(name = "cli-demo")]
#[command(about = "Interactive menu-driven demo for the command line")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Extra JSON config file, merged after the standard locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum width of the help text
    #[arg(long)]
    width: Option<usize>,

    /// Only print the help of the most derived demo
    #[arg(long)]
    no_include: bool,

    /// Read responses line by line from a file instead of the terminal
    #[arg(long)]
    script: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the effective merged config
    Config,
}

/// 대화형 세션 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config: Option<PathBuf>,
    pub width: Option<usize>,
    pub no_include: bool,
    pub script: Option<PathBuf>,
}

pub enum CliAction {
    Interactive(SessionOptions),
    InspectConfig { config: Option<PathBuf> },
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            Some(Commands::Config) => Ok(CliAction::InspectConfig {
                config: self.config,
            }),
            None => {
                if let Some(width) = self.width
                    && !(1..=MAX_HELP_WIDTH).contains(&width)
                {
                    return Err(format!("--width must be between 1 and {MAX_HELP_WIDTH}"));
                }

                Ok(CliAction::Interactive(SessionOptions {
                    config: self.config,
                    width: self.width,
                    no_include: self.no_include,
                    script: self.script,
                }))
            }
        }
    }
}
