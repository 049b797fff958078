use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};

/// How the qualified game ids are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One game id per line (default)
    Text,
    /// JSON array of game ids
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "qualified_games")]
#[command(version)]
#[command(about = "Find games where enough players reached a True Shooting cutoff", long_about = None)]
pub struct Cli {
    /// Shot records file (.json for a JSON array, CSV otherwise)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum True Shooting percentage for a player to qualify
    #[arg(short, long, default_value_t = 0.0)]
    pub cutoff: f64,

    /// Qualifying players a game needs
    #[arg(short, long = "players", default_value_t = 1)]
    pub player_count: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn validated_cutoff(&self) -> Result<f64> {
        if self.cutoff.is_finite() && self.cutoff >= 0.0 {
            Ok(self.cutoff)
        } else {
            Err(Error::InvalidCutoff(self.cutoff))
        }
    }
}
