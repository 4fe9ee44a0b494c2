//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FOLIO_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use folio_scene::QualityTier;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Content catalog configuration
    #[serde(default)]
    pub content: ContentConfig,
    /// Orbit configuration
    #[serde(default)]
    pub orbit: OrbitConfig,
    /// Preloader scene configuration
    #[serde(default)]
    pub preloader: PreloaderConfig,
    /// Accessibility configuration
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FOLIO_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // FOLIO_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("FOLIO_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            width: 1280,
            height: 800,
            vsync: true,
        }
    }
}

/// Content catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Path to the RON catalog file
    pub catalog_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            catalog_path: "content/catalog.ron".to_string(),
        }
    }
}

/// Orbit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Global multiplier on ring angular velocity
    pub speed_multiplier: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
        }
    }
}

/// Preloader scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreloaderConfig {
    /// Play the preloader at startup
    pub enabled: bool,
    /// Particle seed; fixed so reruns produce the same fields
    pub seed: u64,
    /// Quality tier override: "auto", "low", "medium", or "high"
    pub force_tier: String,
    /// Reported device memory in GiB, used by the tier heuristic
    pub memory_gb: f32,
    /// Treat the primary pointer as coarse (touch)
    pub coarse_pointer: bool,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: 7,
            force_tier: "auto".to_string(),
            memory_gb: 8.0,
            coarse_pointer: false,
        }
    }
}

impl PreloaderConfig {
    /// The forced tier, or `None` for "auto". Unknown strings fall back to
    /// auto with a warning.
    pub fn forced_tier(&self) -> Option<QualityTier> {
        match self.force_tier.to_ascii_lowercase().as_str() {
            "auto" => None,
            "low" => Some(QualityTier::Low),
            "medium" => Some(QualityTier::Medium),
            "high" => Some(QualityTier::High),
            other => {
                log::warn!("unknown force_tier '{}', using auto", other);
                None
            }
        }
    }
}

/// Accessibility configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    /// Suppress all decorative motion, sampled once at startup
    pub reduced_motion: bool,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log per-frame timings
    pub show_timings: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_timings: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.orbit.speed_multiplier, 1.0);
        assert!(config.preloader.enabled);
        assert!(!config.accessibility.reduced_motion);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("catalog_path"));
        assert!(toml.contains("force_tier"));
    }

    #[test]
    fn test_forced_tier_parsing() {
        let mut preloader = PreloaderConfig::default();
        assert_eq!(preloader.forced_tier(), None);

        preloader.force_tier = "LOW".to_string();
        assert_eq!(preloader.forced_tier(), Some(QualityTier::Low));
        preloader.force_tier = "high".to_string();
        assert_eq!(preloader.forced_tier(), Some(QualityTier::High));
        preloader.force_tier = "ultra".to_string();
        assert_eq!(preloader.forced_tier(), None);
    }
}
