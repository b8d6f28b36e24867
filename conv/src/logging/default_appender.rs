//! Provides a buffered stderr logger.
//!
//! Every record is encoded into a stack buffer and written to stderr in one
//! go, so log lines don't interleave with the conversion output mid-line.
//!
//! This appender type is available as `"default"` in the configuration.

use std::io::{self, Write as _};

use arrayvec::ArrayVec;
use log::Record;
use log4rs::append::Append;
use log4rs::config::{Deserialize, Deserializers};
use log4rs::encode::{self, Encode, EncoderConfig, Style};

use super::WRITE_BUF_SIZE;

#[derive(Debug)]
pub struct DefaultAppender {
    encoder: Box<dyn Encode>,
    color: bool,
}

impl Append for DefaultAppender {
    fn append(&self, record: &Record<'_>) -> anyhow::Result<()> {
        let mut writer = StderrWriter {
            color: self.color,
            buf: ArrayVec::new_const(),
        };
        self.encoder.encode(&mut writer, record)?;
        Ok(writer.flush()?)
    }

    fn flush(&self) {
        _ = io::stderr().flush();
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct DefaultAppenderConfig {
    color: Option<bool>,
    encoder: EncoderConfig,
}

pub struct DefaultAppenderDeserializer;

impl Deserialize for DefaultAppenderDeserializer {
    type Trait = dyn Append;
    type Config = DefaultAppenderConfig;

    fn deserialize(
        &self,
        config: Self::Config,
        deserializers: &Deserializers,
    ) -> anyhow::Result<Box<Self::Trait>> {
        let encoder = deserializers.deserialize(&config.encoder.kind, config.encoder.config)?;
        let color = utils::term::use_color(config.color, &io::stderr());

        Ok(Box::new(DefaultAppender { encoder, color }))
    }
}

/// Stack-buffered writer.
///
/// If a write exceeds the remaining capacity, the buffer is flushed to stderr
/// first.
#[derive(Debug)]
struct StderrWriter {
    color: bool,
    buf: ArrayVec<u8, WRITE_BUF_SIZE>,
}

impl io::Write for StderrWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_all(buf)?;
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.buf.remaining_capacity() < buf.len() {
            self.flush()?;
        }

        if buf.len() > self.buf.capacity() {
            io::stderr().write_all(buf)
        } else {
            self.buf.write_all(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(&self.buf)?;
        self.buf.clear();
        stderr.flush()
    }
}

impl encode::Write for StderrWriter {
    fn set_style(&mut self, style: &Style) -> io::Result<()> {
        use log4rs::encode::Color;
        use utils::term::style::*;

        if !self.color {
            return Ok(());
        }

        let intense = style.intense == Some(true);
        let escape = match (style.text, intense) {
            (None, false) => RESET,
            (None, true) => BOLD,
            (Some(Color::Black), false) => BLACK,
            (Some(Color::Black), true) => BOLD_BLACK,
            (Some(Color::Red), false) => RED,
            (Some(Color::Red), true) => BOLD_RED,
            (Some(Color::Green), false) => GREEN,
            (Some(Color::Green), true) => BOLD_GREEN,
            (Some(Color::Yellow), false) => YELLOW,
            (Some(Color::Yellow), true) => BOLD_YELLOW,
            (Some(Color::Blue), false) => BLUE,
            (Some(Color::Blue), true) => BOLD_BLUE,
            (Some(Color::Magenta), false) => MAGENTA,
            (Some(Color::Magenta), true) => BOLD_MAGENTA,
            (Some(Color::Cyan), false) => CYAN,
            (Some(Color::Cyan), true) => BOLD_CYAN,
            (Some(Color::White), false) => WHITE,
            (Some(Color::White), true) => BOLD_WHITE,
        };

        self.write_all(RESET.as_bytes())?;
        self.write_all(escape.as_bytes())
    }
}
