pub mod commands;
pub mod console;
pub mod shell;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-rag", version, about = "Upload, search and match resumes against a ResumeRAG backend")]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default.toml + config/local.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored resumes
    List {
        /// Only show resumes whose name contains this text (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Upload a resume (PDF, DOC or DOCX)
    Upload {
        path: PathBuf,
    },
    /// Delete a stored resume
    Delete {
        filename: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the extracted text of a resume
    View {
        filename: String,
    },
    /// Score stored resumes against a job description
    Match {
        /// Job description text
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        description: Option<String>,
        /// Read the job description from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Interactive session
    Shell,
    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delete_with_yes() {
        let cli = Cli::parse_from(["resume-rag", "delete", "a.pdf", "--yes"]);
        match cli.command {
            Commands::Delete { filename, yes } => {
                assert_eq!(filename, "a.pdf");
                assert!(yes);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_match_requires_input() {
        assert!(Cli::try_parse_from(["resume-rag", "match"]).is_err());
        assert!(Cli::try_parse_from(["resume-rag", "match", "python dev"]).is_ok());
        assert!(Cli::try_parse_from(["resume-rag", "match", "--file", "jd.txt"]).is_ok());
    }

    #[test]
    fn test_global_base_url() {
        let cli = Cli::parse_from(["resume-rag", "list", "--base-url", "http://localhost:8000"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
    }
}
