//! Limits applied by the ring signature scheme.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default upper bound on the number of ring members.
pub const DEFAULT_MAX_RING_SIZE: usize = 1024;

/// Ring signature configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Largest ring accepted by generation and verification.
    pub max_ring_size: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            max_ring_size: DEFAULT_MAX_RING_SIZE,
        }
    }
}

impl RingConfig {
    /// Loads configuration from `.env` file, TOML file, and environment variables.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `CRYPTONOTE_` prefix (e.g., `CRYPTONOTE_MAX_RING_SIZE=16`)
    /// 2. TOML configuration file (if exists)
    /// 3. Built-in defaults
    ///
    /// The TOML file path can be set via `CRYPTONOTE_CONFIG_PATH`. If not set,
    /// defaults to `./config/cryptonote.toml`. A missing file is silently skipped.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if a source is malformed or the merged
    /// values fail [`RingConfig::validate`].
    pub fn from_env() -> Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::Figment;

        // Attempt to load .env file (silently ignore if it doesn't exist)
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("CRYPTONOTE_CONFIG_PATH")
            .unwrap_or_else(|_| "config/cryptonote.toml".to_string());

        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("CRYPTONOTE_"))
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configured limits.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `max_ring_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_ring_size == 0 {
            return Err(Error::InvalidConfig(
                "max_ring_size cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Accepts ring sizes in `1..=max_ring_size`.
    pub(crate) fn check_ring_size(&self, size: usize) -> Result<()> {
        if size == 0 {
            tracing::debug!("rejecting empty ring");
            return Err(Error::RingSizeMismatch {
                expected: 1,
                actual: 0,
            });
        }
        if size > self.max_ring_size {
            tracing::debug!(
                ring_size = size,
                max_ring_size = self.max_ring_size,
                "ring exceeds configured limit"
            );
            return Err(Error::RingSizeMismatch {
                expected: self.max_ring_size,
                actual: size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|_jail| {
            let config = RingConfig::from_env().unwrap();
            assert_eq!(config, RingConfig::default());
            assert_eq!(config.max_ring_size, DEFAULT_MAX_RING_SIZE);
            Ok(())
        });
    }

    #[test]
    fn toml_file_then_environment() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/cryptonote.toml", "max_ring_size = 16")?;
            assert_eq!(RingConfig::from_env().unwrap().max_ring_size, 16);

            jail.set_env("CRYPTONOTE_MAX_RING_SIZE", 32);
            assert_eq!(RingConfig::from_env().unwrap().max_ring_size, 32);
            Ok(())
        });
    }

    #[test]
    fn custom_config_path() {
        Jail::expect_with(|jail| {
            jail.create_file("ring.toml", "max_ring_size = 7")?;
            jail.set_env("CRYPTONOTE_CONFIG_PATH", "ring.toml");
            assert_eq!(RingConfig::from_env().unwrap().max_ring_size, 7);
            Ok(())
        });
    }

    #[test]
    fn zero_ring_size_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("CRYPTONOTE_MAX_RING_SIZE", 0);
            assert!(matches!(
                RingConfig::from_env(),
                Err(Error::InvalidConfig(_))
            ));
            Ok(())
        });

        assert!(RingConfig { max_ring_size: 0 }.validate().is_err());
    }

    #[test]
    fn check_ring_size_bounds() {
        let config = RingConfig { max_ring_size: 3 };
        assert!(config.check_ring_size(1).is_ok());
        assert!(config.check_ring_size(3).is_ok());
        assert_eq!(
            config.check_ring_size(4),
            Err(Error::RingSizeMismatch {
                expected: 3,
                actual: 4
            })
        );
        assert!(config.check_ring_size(0).is_err());
    }
}
