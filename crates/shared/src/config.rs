//! Engine configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Reconciliation configuration.
    #[serde(default)]
    pub reconciliation: ReconciliationConfig,
    /// Audit configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Reconciliation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconciliationConfig {
    /// Maximum absolute variance still considered reconciled.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> Decimal {
    // One cent: absorbs presentation rounding, nothing more.
    Decimal::new(1, 2)
}

/// Audit configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Actor recorded on engine-initiated audit entries.
    #[serde(default = "default_actor")]
    pub actor: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            actor: default_actor(),
        }
    }
}

fn default_actor() -> String {
    "system".to_string()
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CLOSEBOOKS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
