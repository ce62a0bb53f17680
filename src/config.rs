use log::Level;
use once_cell::sync::Lazy;
use serde::Deserialize;

const BUNDLED: &str = include_str!("../assets/landing.json");

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TypedConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub erase_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypedConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "SEO-friendly articles, instantly.".to_string(),
                "Polished product copy and social posts.".to_string(),
                "Editable drafts — save hours every week.".to_string(),
            ],
            type_ms: 40,
            erase_ms: 20,
            hold_ms: 900,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: 900 }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParallaxConfig {
    pub translate_x: f64,
    pub translate_y: f64,
    pub tilt_deg: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            translate_x: 10.0,
            translate_y: 8.0,
            tilt_deg: 1.2,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub light_neon_1: String,
    pub light_neon_2: String,
    pub light_background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_neon_1: "#2563eb".to_string(),
            light_neon_2: "#7c3aed".to_string(),
            light_background: "linear-gradient(180deg,#f7fbff,#eef6ff)".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub distance_px: u32,
    pub duration_ms: u32,
    pub easing: String,
    pub interval_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            distance_px: 30,
            duration_ms: 700,
            easing: "cubic-bezier(.2,.9,.2,1)".to_string(),
            interval_ms: 80,
        }
    }
}

/// Tuning for the decorative parts of the landing page.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LandingConfig {
    pub typed: TypedConfig,
    pub counter: CounterConfig,
    pub parallax: ParallaxConfig,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
}

impl LandingConfig {
    /// Parses a config document. Missing sections and fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

static CONFIG: Lazy<LandingConfig> = Lazy::new(|| match LandingConfig::from_json(BUNDLED) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Bundled landing config is invalid, using defaults: {}", e);
        LandingConfig::default()
    }
});

pub fn get_config() -> &'static LandingConfig {
    &CONFIG
}
