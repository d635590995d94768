//! CLI interface for the CV generator

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-tailor")]
#[command(about = "Personal CV and website generator with job description tailoring")]
#[command(
    long_about = "Generate a LaTeX CV and static website pages from a JSON profile, optionally reordered by keyword relevance against a job description"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the CV data file
    #[arg(short, long, global = true, default_value = "cv-data.json")]
    pub data: PathBuf,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "cv-config.json")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the LaTeX CV and website pages
    Generate {
        /// Output directory for generated files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Skip LaTeX CV generation
        #[arg(long)]
        no_latex: bool,

        /// Skip website page generation
        #[arg(long)]
        no_html: bool,

        /// Compile the generated CV to PDF
        #[arg(long)]
        pdf: bool,
    },

    /// Generate a CV tailored to a job description
    Tailor {
        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output file for the tailored CV
        #[arg(short, long, default_value = "CV_tailored.tex")]
        output: PathBuf,

        /// Maximum number of experience entries to include
        #[arg(long)]
        max_experience: Option<usize>,

        /// Maximum number of projects to include
        #[arg(long)]
        max_projects: Option<usize>,

        /// Compile the tailored CV to PDF
        #[arg(long)]
        pdf: bool,
    },

    /// Publication list maintenance
    Publications {
        #[command(subcommand)]
        action: PublicationsAction,
    },

    /// Watch the data and config files and regenerate on change
    Watch {
        /// Output directory for generated files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Poll interval in seconds
        #[arg(short, long, default_value_t = 2)]
        interval: u64,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum PublicationsAction {
    /// Merge a fetched publication records file into the CV data
    Merge {
        /// Path to the records file (JSON list)
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate a file extension against an allowed set
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("file has no extension".to_string()),
    }
}
