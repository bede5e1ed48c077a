//! Application settings, read from `~/.scripture-slides/config.toml`.
//!
//! The file is created with commented defaults on first run. Top-level keys
//! cover the common options; an optional `[layout]` table exposes the rest of
//! [LayoutConfig] (canvas size, margins, theme colours, attribution).

use crate::config::LayoutConfig;
use crate::error::SlidesError;
use crate::esv::DEFAULT_ENDPOINT;
use crate::font::FontFamily;
use crate::units::Pt;
use serde::Deserialize;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".scripture-slides";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "scripture-slides.log";
const PLACEHOLDER_KEY: &str = "your-esv-api-key-here";

/// Written on first run
pub const DEFAULT_CONFIG: &str = r##"# Bible API settings
api_endpoint = "https://api.esv.org/v3/passage/text/"  # API endpoint URL
api_key = "your-esv-api-key-here"  # ESV API key from https://api.esv.org

# Output settings
output_directory = "./output"  # Output directory for PDFs
output_type = "pdf"

# PDF appearance
font = "Helvetica"  # Built-in font (can also use "Times-Roman", "Courier")
font_size = 64      # Body size in points; every other size scales with it

# Behavior
auto_open = false
include_section_headings = true
combine_passages = true

# Slide geometry and colours
# [layout]
# canvas_width = 1920
# canvas_height = 1080
# margin_left = 150
# margin_right = 150
# margin_top = 150
# margin_bottom = 120
# poetry_indent_unit = 2
# attribution = "ESV"
#
# [layout.theme]
# background = "#000000"
# text = "#FFFFFF"
# verse_number = "#FFFFFF"
"##;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_endpoint: String,
    pub api_key: String,
    pub output_directory: PathBuf,
    pub output_type: String,
    pub font: FontFamily,
    pub font_size: Pt,
    pub auto_open: bool,
    pub include_section_headings: bool,
    pub combine_passages: bool,
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            output_directory: PathBuf::from("./output"),
            output_type: "pdf".to_string(),
            font: FontFamily::Helvetica,
            font_size: Pt(64.0),
            auto_open: false,
            include_section_headings: true,
            combine_passages: true,
            layout: LayoutConfig::default(),
        }
    }
}

/// The outcome of looking for the settings file
#[derive(Debug)]
pub enum Loaded {
    Ready(Settings),
    /// No file existed; a default one was written here and needs an API key
    Created(PathBuf),
}

fn config_dir() -> Result<PathBuf, SlidesError> {
    let home = dirs::home_dir()
        .ok_or_else(|| SlidesError::Settings("can't locate the home directory".to_string()))?;
    Ok(home.join(CONFIG_DIR))
}

/// `~/.scripture-slides/config.toml`
pub fn config_path() -> Result<PathBuf, SlidesError> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// `~/.scripture-slides/scripture-slides.log`
pub fn log_path() -> Result<PathBuf, SlidesError> {
    Ok(config_dir()?.join(LOG_FILE))
}

/// Open the log file for appending, creating it and its directory as needed
pub fn open_log(path: &Path) -> Result<File, SlidesError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

impl Settings {
    /// Read the settings at `path`, or write the default file there if there isn't one
    pub fn load_or_init(path: &Path) -> Result<Loaded, SlidesError> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("created default config file at {}", path.display());
            return Ok(Loaded::Created(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let settings = Settings::from_toml_str(&text, path)?;
        log::info!("loaded config file {}", path.display());
        Ok(Loaded::Ready(settings))
    }

    pub fn from_toml_str(text: &str, path: &Path) -> Result<Settings, SlidesError> {
        toml::from_str(text).map_err(|source| SlidesError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the settings can be used to fetch and render passages
    pub fn validate(&self, path: &Path) -> Result<(), SlidesError> {
        let key = self.api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_KEY {
            return Err(SlidesError::Settings(format!(
                "ESV API key not found in config, please add your key to {} \
                 (get a free key at https://api.esv.org)",
                path.display()
            )));
        }
        if !self.output_type.eq_ignore_ascii_case("pdf") {
            return Err(SlidesError::Settings(format!(
                "unsupported output_type `{}` (only `pdf` is available)",
                self.output_type
            )));
        }
        Ok(())
    }

    /// The layout configuration: the `[layout]` table with the top-level font
    /// and heading options applied over it
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            font_family: self.font,
            body_font_size: self.font_size,
            include_headings: self.include_section_headings,
            ..self.layout.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses_to_defaults() {
        let settings = Settings::from_toml_str(DEFAULT_CONFIG, Path::new("config.toml")).unwrap();
        assert_eq!(
            settings,
            Settings {
                api_key: PLACEHOLDER_KEY.to_string(),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn placeholder_key_is_rejected() {
        let path = Path::new("config.toml");
        let settings = Settings::from_toml_str(DEFAULT_CONFIG, path).unwrap();
        assert!(matches!(settings.validate(path), Err(SlidesError::Settings(_))));

        let empty = Settings::default();
        assert!(empty.validate(path).is_err());

        let ready = Settings {
            api_key: "0123abcd".to_string(),
            ..Settings::default()
        };
        assert!(ready.validate(path).is_ok());
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let err = Settings::from_toml_str("font_size = [", Path::new("/tmp/x/config.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("/tmp/x/config.toml"));
    }

    #[test]
    fn top_level_keys_override_the_layout_table() {
        let settings = Settings::from_toml_str(
            r#"
            font = "Courier"
            font_size = 48
            include_section_headings = false

            [layout]
            font_family = "Times-Roman"
            canvas_width = 1280
            canvas_height = 720
            "#,
            Path::new("config.toml"),
        )
        .unwrap();

        let layout = settings.layout_config();
        assert_eq!(layout.font_family, FontFamily::Courier);
        assert_eq!(layout.body_font_size, Pt(48.0));
        assert!(!layout.include_headings);
        assert_eq!((layout.canvas_width, layout.canvas_height), (Pt(1280.0), Pt(720.0)));
        assert_eq!(layout.margin_bottom, Pt(120.0));
    }

    #[test]
    fn first_run_writes_the_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);

        let created = Settings::load_or_init(&path).unwrap();
        assert!(matches!(created, Loaded::Created(ref p) if p == &path));
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        let loaded = Settings::load_or_init(&path).unwrap();
        assert!(matches!(loaded, Loaded::Ready(settings) if settings.api_key == PLACEHOLDER_KEY));
    }

    #[test]
    fn log_file_is_appended_to() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(LOG_FILE);

        writeln!(open_log(&path).unwrap(), "first").unwrap();
        writeln!(open_log(&path).unwrap(), "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
