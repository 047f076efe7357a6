//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// A personal portfolio in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable the particle backdrop behind the hero section
    #[arg(long)]
    pub no_particles: bool,

    /// Animation frame rate, overriding the config file
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    pub write_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["folio", "--no-particles", "--fps", "30", "-c", "x.toml"]);
        assert!(args.no_particles);
        assert_eq!(args.fps, Some(30));
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
        assert!(!args.write_config);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["folio"]);
        assert!(!args.no_particles);
        assert_eq!(args.fps, None);
        assert_eq!(args.config, None);
    }
}
