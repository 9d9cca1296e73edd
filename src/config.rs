use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::verification::{ScheduleStep, VerificationSchedule};

/// Main configuration structure for OnboardFlow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OnboardFlowConfig {
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Scripted verification timeline settings
    pub verification: VerificationConfig,
    /// Notification surface settings
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of plain text
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Schedule steps, delays measured from the start of the run
    pub steps: Vec<VerificationStepConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationStepConfig {
    pub delay_ms: u64,
    pub verified_count: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Default toast display duration
    pub display_duration_ms: u64,
}

impl Default for OnboardFlowConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
            verification: VerificationConfig {
                steps: vec![
                    VerificationStepConfig {
                        delay_ms: 1000,
                        verified_count: 2,
                    },
                    VerificationStepConfig {
                        delay_ms: 3000,
                        verified_count: 3,
                    },
                    VerificationStepConfig {
                        delay_ms: 4500,
                        verified_count: 4,
                    },
                    VerificationStepConfig {
                        delay_ms: 6000,
                        verified_count: 5,
                    },
                ],
            },
            notifications: NotificationConfig {
                display_duration_ms: 4000,
            },
        }
    }
}

impl VerificationConfig {
    pub fn schedule(&self) -> VerificationSchedule {
        VerificationSchedule::new(
            self.steps
                .iter()
                .map(|step| ScheduleStep {
                    delay: Duration::from_millis(step.delay_ms),
                    verified_count: step.verified_count,
                })
                .collect(),
        )
    }
}

impl OnboardFlowConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. onboardflow.toml in the working directory
    /// 3. Environment variables (prefixed with ONBOARDFLOW_)
    pub fn load() -> Result<Self> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&OnboardFlowConfig::default())?);

        if Path::new("onboardflow.toml").exists() {
            builder = builder.add_source(File::with_name("onboardflow"));
        }

        builder = builder.add_source(
            Environment::with_prefix("ONBOARDFLOW")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
