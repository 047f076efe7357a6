mod app;
mod cli;
mod layout;
mod logging;
mod sections;

use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use folio_config::{Config, ConfigError};

use crate::app::App;
use crate::cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let (mut config, load_error) = match Config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if args.no_particles {
        config.display.particles = false;
    }
    if let Some(fps) = args.fps {
        config.display.fps = fps;
    }

    if args.write_config {
        let path = write_config(args.config, &config, load_error)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let log_path = logging::init(&config.log);
    if let Some(e) = load_error {
        log::warn!("{e}; falling back to default configuration");
    }
    if let Some(path) = log_path {
        log::debug!("logging to {}", path.display());
    }

    let terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableMouseCapture) {
        log::warn!("mouse capture unavailable: {e}");
    }
    let result = App::new(&config).run(terminal);
    let released = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;
    released?;
    Ok(())
}

/// Save `config` to `path` or the default location.
///
/// A file that failed to load is left alone, so its settings are never
/// replaced by defaults.
fn write_config(
    path: Option<PathBuf>,
    config: &Config,
    load_error: Option<ConfigError>,
) -> color_eyre::Result<PathBuf> {
    if let Some(e) = load_error {
        return Err(e.into());
    }
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    config.save_to(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_config_keeps_unreadable_file() {
        let dir = scratch_dir("write-bad");
        let path = dir.join("config.toml");
        let original = "[email]\nservice_id = \"my_private_service\"\n\n[display]\nfps = \"fast\"\n";
        fs::write(&path, original).unwrap();

        let load_error = Config::load(Some(&path)).err();
        assert!(load_error.is_some());

        let result = write_config(Some(path.clone()), &Config::default(), load_error);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_config_saves_loaded_config() {
        let dir = scratch_dir("write-ok");
        let path = dir.join("config.toml");
        let mut config = Config::default();
        config.display.fps = 24;

        let written = write_config(Some(path.clone()), &config, None).unwrap();
        assert_eq!(written, path);
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
        fs::remove_dir_all(&dir).ok();
    }
}
