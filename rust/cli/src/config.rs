use pokerview_engine::layout::LayoutKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "POKERVIEW_CONFIG";
pub const ASSETS_DIR_ENV: &str = "POKERVIEW_ASSETS_DIR";
pub const LAYOUT_ENV: &str = "POKERVIEW_LAYOUT";
pub const FONT_SIZE_ENV: &str = "POKERVIEW_FONT_SIZE";
pub const JPEG_QUALITY_ENV: &str = "POKERVIEW_JPEG_QUALITY";
pub const OUTBOX_DIR_ENV: &str = "POKERVIEW_OUTBOX_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub layout: LayoutKind,
    pub font_size: f32,
    pub jpeg_quality: u8,
    pub outbox_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub assets_dir: ValueSource,
    pub layout: ValueSource,
    pub font_size: ValueSource,
    pub jpeg_quality: ValueSource,
    pub outbox_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            assets_dir: ValueSource::Default,
            layout: ValueSource::Default,
            font_size: ValueSource::Default,
            jpeg_quality: ValueSource::Default,
            outbox_dir: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            layout: LayoutKind::Eight,
            font_size: 24.0,
            jpeg_quality: 85,
            outbox_dir: PathBuf::from("outbox"),
        }
    }
}

/// Command-line flags that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub assets_dir: Option<PathBuf>,
    pub layout: Option<LayoutKind>,
    pub outbox_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ConfigError::Parse(e) => write!(f, "invalid TOML: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let path = PathBuf::from(path);
        let s = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.assets_dir {
            cfg.assets_dir = v;
            sources.assets_dir = ValueSource::File;
        }
        if let Some(v) = f.layout {
            cfg.layout = v;
            sources.layout = ValueSource::File;
        }
        if let Some(v) = f.font_size {
            cfg.font_size = v;
            sources.font_size = ValueSource::File;
        }
        if let Some(v) = f.jpeg_quality {
            cfg.jpeg_quality = v;
            sources.jpeg_quality = ValueSource::File;
        }
        if let Some(v) = f.outbox_dir {
            cfg.outbox_dir = v;
            sources.outbox_dir = ValueSource::File;
        }
    }

    if let Ok(dir) = std::env::var(ASSETS_DIR_ENV)
        && !dir.is_empty()
    {
        cfg.assets_dir = PathBuf::from(dir);
        sources.assets_dir = ValueSource::Env;
    }
    if let Ok(layout) = std::env::var(LAYOUT_ENV)
        && !layout.is_empty()
    {
        cfg.layout = layout
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid layout: {}", e)))?;
        sources.layout = ValueSource::Env;
    }
    if let Ok(size) = std::env::var(FONT_SIZE_ENV)
        && !size.is_empty()
    {
        cfg.font_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid font size".into()))?;
        sources.font_size = ValueSource::Env;
    }
    if let Ok(quality) = std::env::var(JPEG_QUALITY_ENV)
        && !quality.is_empty()
    {
        cfg.jpeg_quality = quality
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid JPEG quality".into()))?;
        sources.jpeg_quality = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var(OUTBOX_DIR_ENV)
        && !dir.is_empty()
    {
        cfg.outbox_dir = PathBuf::from(dir);
        sources.outbox_dir = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Resolves the layered configuration and applies command-line flags on top.
pub fn resolve(overrides: Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = load_with_sources()?;
    if let Some(dir) = overrides.assets_dir {
        resolved.config.assets_dir = dir;
        resolved.sources.assets_dir = ValueSource::Cli;
    }
    if let Some(layout) = overrides.layout {
        resolved.config.layout = layout;
        resolved.sources.layout = ValueSource::Cli;
    }
    if let Some(dir) = overrides.outbox_dir {
        resolved.config.outbox_dir = dir;
        resolved.sources.outbox_dir = ValueSource::Cli;
    }
    Ok(resolved)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    assets_dir: Option<PathBuf>,
    #[serde(default)]
    layout: Option<LayoutKind>,
    #[serde(default)]
    font_size: Option<f32>,
    #[serde(default)]
    jpeg_quality: Option<u8>,
    #[serde(default)]
    outbox_dir: Option<PathBuf>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(cfg.font_size.is_finite() && cfg.font_size > 0.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: font_size must be >0".into(),
        ));
    }
    if !(1..=100).contains(&cfg.jpeg_quality) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: jpeg_quality must be within 1..=100".into(),
        ));
    }
    Ok(())
}
