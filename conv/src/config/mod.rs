use std::path::Path;

use radix_conv::Settings;
use serde::Deserialize;

pub mod setup;

/// Name of the optional config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "conv.toml";

/// Prefix for environment variables that override configuration.
pub const ENV_PREFIX: &str = "CONV_";

#[derive(Debug, Deserialize)]
pub struct CConfig {
    /// Settings active before the first directive.
    #[serde(default)]
    pub defaults: Settings,
    /// Overrides color auto-detection for standard output.
    pub color: Option<bool>,
    #[serde(default)]
    pub log: log4rs::config::RawConfig,
}

/// Loads the layered configuration.
///
/// `explicit` is a config file that must exist, as passed on the command line.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<CConfig> {
    use setup::{Builder, Env, File, TomlText};

    let default_config = include_str!("../../assets/default_config.toml");

    let mut builder = Builder::new()
        .add_layer(TomlText::new(default_config))
        .add_layer(File::new(LOCAL_CONFIG).required(false));

    if let Some(path) = explicit {
        builder = builder.add_layer(File::new(path));
    }

    builder.add_layer(Env::prefixed(ENV_PREFIX)).build()
}

#[cfg(test)]
mod test {
    use radix_conv::{Case, OutputOrder, Radix};

    use super::setup::{Builder, TomlText};
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config: CConfig = Builder::new()
            .add_layer(TomlText::new(include_str!("../../assets/default_config.toml")))
            .build()
            .expect("built-in config must deserialize");

        assert_eq!(config.defaults, Settings::default());
        assert_eq!(config.color, None);
    }

    #[test]
    fn overrides_apply_per_key() {
        let config: CConfig = Builder::new()
            .add_layer(TomlText::new(include_str!("../../assets/default_config.toml")))
            .add_layer(TomlText::new("color = true\n[defaults]\nto_base = 16\ncase = \"upper\""))
            .build()
            .expect("valid override");

        assert_eq!(config.color, Some(true));
        assert_eq!(config.defaults.from_base, Radix::DECIMAL);
        assert_eq!(config.defaults.to_base, Radix::HEX);
        assert_eq!(config.defaults.case, Case::Upper);
        assert_eq!(config.defaults.order, OutputOrder::BackToFront);
    }

    #[test]
    fn invalid_defaults_are_rejected() {
        Builder::new()
            .add_layer(TomlText::new("[defaults]\nfrom_base = 1"))
            .build::<CConfig>()
            .expect_err("base 1 is invalid");

        Builder::new()
            .add_layer(TomlText::new("[defaults]\norder = \"up\""))
            .build::<CConfig>()
            .expect_err("unknown order");
    }
}
