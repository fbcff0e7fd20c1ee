//! Command-line configuration for the capture replay tool
//!
//! This module handles command-line argument parsing and validation using clap.
use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The SSE capture to replay. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Size in bytes of the chunks the capture is cut into before parsing.
    /// 0 parses the whole capture as a single chunk.
    /// Without --buffered, records straddling a chunk boundary are misparsed.
    #[arg(short = 'c', long, env = "EVENTFOLD_CHUNK_SIZE", default_value_t = 0)]
    pub chunk_size: usize,

    /// Re-frame chunks on record boundaries before parsing.
    #[arg(short = 'b', long, default_value_t = false)]
    pub buffered: bool,

    /// Pretty-print each emitted item.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Config {
    pub fn validate(self) -> Result<Self, anyhow::Error> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(anyhow!(
                    "Capture file '{}' does not exist",
                    input.display()
                ));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["eventfold"]).unwrap();
        assert_eq!(config.input, None);
        assert_eq!(config.chunk_size, 0);
        assert!(!config.buffered);
        assert!(!config.pretty);
    }

    #[test]
    fn test_flags() {
        let config =
            Config::try_parse_from(["eventfold", "capture.sse", "-c", "16", "--buffered"]).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("capture.sse")));
        assert_eq!(config.chunk_size, 16);
        assert!(config.buffered);
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let config = Config::try_parse_from(["eventfold", "/definitely/not/here.sse"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_stdin() {
        let config = Config::try_parse_from(["eventfold"]).unwrap();
        assert!(config.validate().is_ok());
    }
}
