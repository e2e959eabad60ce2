use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "license-recognizer",
    about = "Recognize open-source licenses from declared names and LICENSE files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.license-recognizer/config.toml, fallback ~/.config/license-recognizer/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exit with code 1 when any input is unrecognized
    #[arg(long, global = true)]
    pub strict: bool,

    /// Only print summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve license names exactly as a manifest declares them
    Name {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },
    /// Classify license documents; `-` reads standard input
    Text {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// List every license in the catalog
    List,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_command() {
        let cli = Cli::parse_from(["license-recognizer", "name", "MIT", "Apache-2.0", "--strict"]);
        assert!(cli.strict);
        match cli.command {
            Command::Name { names } => assert_eq!(names, vec!["MIT", "Apache-2.0"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_command_with_report() {
        let cli = Cli::parse_from(["license-recognizer", "--report", "json", "-vv", "text", "LICENSE"]);
        assert!(matches!(cli.report, ReportFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Text { ref files } if files == &[PathBuf::from("LICENSE")]));
    }

    #[test]
    fn test_name_requires_argument() {
        assert!(Cli::try_parse_from(["license-recognizer", "name"]).is_err());
    }
}
