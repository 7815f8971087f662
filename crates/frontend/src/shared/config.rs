use anyhow::{ensure, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub storefront: BrandingConfig,
    pub header: HeaderConfig,
    pub ticker: TickerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrandingConfig {
    pub name: String,
    pub wordmark: Wordmark,
    pub announcement: String,
    pub announcement_note: String,
    pub copyright_year: u16,
}

/// Two halves of the logo, joined by an ampersand.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Wordmark {
    pub lead: String,
    pub tail: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HeaderConfig {
    /// Vertical offset (px) past which the header switches to its compact style
    pub scroll_threshold: f64,
    /// Categories shown in the desktop nav
    pub nav_limit: usize,
    /// Static count on the bag icon; there is no cart behind it
    pub bag_count: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TickerConfig {
    /// Copies of the brand list laid end to end
    pub repeat: usize,
    pub duration_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storefront]
name = "Void & Vessel"
announcement = "Free Worldwide Shipping Over $250"
announcement_note = "Duties & Taxes Included"
copyright_year = 2024

[storefront.wordmark]
lead = "VOID"
tail = "VESSEL"

[header]
scroll_threshold = 50.0
nav_limit = 4
bag_count = 2

[ticker]
repeat = 4
duration_secs = 20

[logging]
level = "debug"
"#;

/// Load the storefront configuration.
///
/// The browser has no config file to read, so this parses the embedded
/// document; callers fall back to [`StorefrontConfig::default`] on error.
pub fn load_config() -> anyhow::Result<StorefrontConfig> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<StorefrontConfig> {
    let config: StorefrontConfig =
        toml::from_str(contents).context("storefront config is not valid TOML")?;
    config.validate()?;
    Ok(config)
}

impl StorefrontConfig {
    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.header.scroll_threshold.is_finite() && self.header.scroll_threshold >= 0.0,
            "header.scroll_threshold must be a non-negative number, got {}",
            self.header.scroll_threshold
        );
        ensure!(
            self.ticker.repeat >= 2,
            "ticker.repeat must be at least 2 for a seamless loop, got {}",
            self.ticker.repeat
        );
        ensure!(self.ticker.duration_secs > 0, "ticker.duration_secs must be positive");
        ensure!(
            self.logging.level.parse::<log::Level>().is_ok(),
            "logging.level `{}` is not a log level",
            self.logging.level
        );
        Ok(())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storefront: BrandingConfig {
                name: "Void & Vessel".into(),
                wordmark: Wordmark {
                    lead: "VOID".into(),
                    tail: "VESSEL".into(),
                },
                announcement: "Free Worldwide Shipping Over $250".into(),
                announcement_note: "Duties & Taxes Included".into(),
                copyright_year: 2024,
            },
            header: HeaderConfig {
                scroll_threshold: 50.0,
                nav_limit: 4,
                bag_count: 2,
            },
            ticker: TickerConfig {
                repeat: 4,
                duration_secs: 20,
            },
            logging: LoggingConfig {
                level: "debug".into(),
            },
        }
    }
}
