use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ConfigError;

/// clean-dest - Removes destination-tree build outputs that no longer
/// correspond to any source file
#[derive(Parser, Debug)]
#[command(name = "clean-dest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source root to scan for current input files
    #[arg(value_name = "SRC_ROOT")]
    pub src_root: Option<String>,

    /// Destination root holding the build outputs to prune
    #[arg(value_name = "DEST_ROOT")]
    pub dest_root: Option<String>,

    /// Override the base "everything under destination" glob pattern
    #[arg(short, long, value_name = "GLOB")]
    pub base_pattern: Option<String>,

    /// Path to a TOML file map (extension -> expected output templates)
    #[arg(short = 'm', long, value_name = "PATH")]
    pub file_map: Option<String>,

    /// Delete permanently instead of moving entries to the trash
    #[arg(short, long)]
    pub permanent: bool,

    /// Show what would be removed without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output the removal report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Fold the CLI arguments over a loaded configuration.
    ///
    /// CLI values win; absent arguments keep the file's (or default) values.
    pub fn apply_to(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(src_root) = &self.src_root {
            config.clean.src_root = src_root.clone();
        }
        if let Some(dest_root) = &self.dest_root {
            config.clean.dest_root = dest_root.clone();
        }
        if let Some(base_pattern) = &self.base_pattern {
            config.clean.base_pattern = Some(base_pattern.clone());
        }
        if let Some(file_map) = &self.file_map {
            config.clean.file_map_path = Some(file_map.clone());
        }
        if self.permanent {
            config.clean.permanent = true;
        }
        if self.dry_run {
            config.clean.dry_run = true;
        }
        if self.verbose > 0 {
            config.clean.verbose = true;
        }
        config.validate()
    }
}
