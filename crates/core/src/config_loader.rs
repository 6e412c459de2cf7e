use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `config/Config.toml`, `RAE_` environment
    /// variables, and `config/Config.json`, on top of built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads configuration with a specific TOML file in place of the default one.
    ///
    /// Missing files are skipped, so every source is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let config: AppConfig = Self::figment(path.as_ref()).extract()?;

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("RAE_").split("__"))
            .merge(Json::file("config/Config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_files() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load().expect("load");
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.signals.sharpe_window, 60);
            assert_eq!(config.data.benchmark, "SPY");
            Ok(())
        });
    }

    #[test]
    fn toml_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/Config.toml",
                r#"
                [signals]
                volatility_window = 20

                [data]
                benchmark = "QQQ"
                "#,
            )?;

            let config = ConfigLoader::load().expect("load");
            assert_eq!(config.signals.volatility_window, 20);
            assert_eq!(config.signals.volume_window, 30);
            assert_eq!(config.data.benchmark, "QQQ");
            Ok(())
        });
    }

    #[test]
    fn json_overrides_defaults_and_toml() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/Config.toml", "[data]\nbenchmark = \"IWM\"\n")?;
            jail.create_file(
                "config/Config.json",
                r#"{"signals": {"sharpe_window": 10}, "data": {"benchmark": "QQQ"}}"#,
            )?;

            let config = ConfigLoader::load().expect("load");
            assert_eq!(config.signals.sharpe_window, 10);
            assert_eq!(config.signals.volatility_window, 30);
            assert_eq!(config.data.benchmark, "QQQ");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[report]\nsparkline_days = 90\n")?;
            jail.set_env("RAE_REPORT__SPARKLINE_DAYS", "30");
            jail.set_env("RAE_DATA__LOOKBACK_DAYS", "730");

            let config = ConfigLoader::load_from("custom.toml").expect("load");
            assert_eq!(config.report.sparkline_days, 30);
            assert_eq!(config.data.lookback_days, 730);
            Ok(())
        });
    }
}
