//! Defines a `"default"` [`PatternEncoder`].
//!
//! Log lines share the terminal with conversion output, so by default they
//! are short and carry no timestamp.

use log4rs::config::Deserialize;
use log4rs::encode::Encode;
use log4rs::encode::pattern::PatternEncoder;

#[derive(Debug, Default, serde::Deserialize)]
pub struct DefaultPatternConfig {
    #[serde(default)]
    time: bool,
}

pub struct DefaultPatternDeserializer;

impl Deserialize for DefaultPatternDeserializer {
    type Trait = dyn Encode;
    type Config = DefaultPatternConfig;

    fn deserialize(
        &self,
        config: Self::Config,
        _deserializers: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<Self::Trait>> {
        let pattern = if config.time {
            "[{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t}] {m}{n}"
        } else {
            "[{h({l:<5})} {t}] {m}{n}"
        };

        Ok(Box::new(PatternEncoder::new(pattern)))
    }
}
