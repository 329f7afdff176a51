use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

// site behavior configuration
//
// every tunable constant used by the controllers lives here so that a page can override
// them from an inline json block; anything left out keeps the default
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub blog: BlogConfig,
    pub lightbox: LightboxConfig,

    // tracing level handed to the logger at startup
    pub log_level: LogLevel,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // hover opens dropdowns only when the viewport is wider than this
    pub hover_breakpoint: f64,

    // time between the pointer leaving a dropdown and the dropdown closing,
    // giving the pointer a chance to come back
    pub close_delay_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // header is styled as scrolled strictly above this offset
    pub threshold: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct BlogConfig {
    // category value that matches every card
    pub all_category: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct LightboxConfig {
    // must match the css transition on .lightbox
    pub hide_delay_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            blog: BlogConfig::default(),
            lightbox: LightboxConfig::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            hover_breakpoint: 968.0,
            close_delay_ms: 250,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig { threshold: 50.0 }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        BlogConfig {
            all_category: String::from("all"),
        }
    }
}

impl Default for LightboxConfig {
    fn default() -> Self {
        LightboxConfig { hide_delay_ms: 300 }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

// parse the inline configuration block, if the page has one
//
// a broken block should not take the whole page down with it, so we fall back to the
// defaults and complain in the log instead
#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: Option<&str>) -> SiteConfig {
    let Some(doc) = doc.map(str::trim).filter(|doc| !doc.is_empty()) else {
        debug!("no inline config, using defaults");
        return SiteConfig::default();
    };

    match serde_json::from_str(doc) {
        Ok(config) => {
            debug!("successfully parsed inline config");
            config
        }
        Err(err) => {
            warn!("failed to parse inline config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}
