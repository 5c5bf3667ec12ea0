//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{FolioConfig, Settings};
use crate::content::Content;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "A personal portfolio in the terminal")]
#[command(
    long_about = "Scroll through a single-page portfolio. The navigation bar follows the section in view; \
                  number keys or mouse clicks jump between sections."
)]
pub struct Cli {
    /// JSON file to load portfolio content from instead of the built-in data
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Config file (defaults to $CONFIG_DIR/folio/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Jump to a section after startup, e.g. `projects`
    #[arg(long, value_name = "ID")]
    pub section: Option<String>,

    /// Disable entrance transitions, smooth scrolling and scene motion
    #[arg(long)]
    pub reduced_motion: bool,
}

impl Cli {
    pub fn load_content(&self) -> Result<Content> {
        match &self.content {
            Some(path) => Content::load(path),
            None => Ok(Content::default()),
        }
    }

    /// Config file settings with command-line overrides applied.
    pub fn load_settings(&self) -> Result<Settings> {
        let mut config = FolioConfig::load(self.config.as_deref())?;
        config.ui.reduced_motion |= self.reduced_motion;
        config.into_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "folio",
            "--content",
            "me.json",
            "--config",
            "folio.toml",
            "--section",
            "projects",
            "--reduced-motion",
        ]);
        assert_eq!(cli.content, Some(PathBuf::from("me.json")));
        assert_eq!(cli.config, Some(PathBuf::from("folio.toml")));
        assert_eq!(cli.section.as_deref(), Some("projects"));
        assert!(cli.reduced_motion);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["folio"]);
        assert!(cli.content.is_none());
        assert!(cli.section.is_none());
        assert!(!cli.reduced_motion);
        assert!(!cli.load_content().unwrap().nav.is_empty());
    }

    #[test]
    fn test_reduced_motion_flag_overrides_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nreduced_motion = false\nsmooth_scroll_ms = 900").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from(["folio", "--config", &path, "--reduced-motion"]);
        let settings = cli.load_settings().unwrap();
        assert!(settings.reduced_motion);
        assert!(settings.smooth_scroll.is_zero());

        let cli = Cli::parse_from(["folio", "--config", &path]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.smooth_scroll.as_millis(), 900);
    }

    #[test]
    fn test_missing_content_file_is_an_error() {
        let cli = Cli::parse_from(["folio", "--content", "/nonexistent/folio.json"]);
        assert!(cli.load_content().is_err());
    }
}
