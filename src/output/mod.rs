pub(crate) mod memory;
pub(crate) mod ola;
pub(crate) mod ws281x;

use std::ops::{Deref, DerefMut};

use crate::color::{Color, BLACK};
use crate::config::{LightConfig, OutputKind};
use crate::error::LightError;

/// A strip of pixels that all show the same color.
///
/// `fill` only touches the in-memory buffer; nothing reaches the LEDs until
/// `show` is called.
pub trait PixelSink {
    fn fill(&mut self, color: Color);
    fn show(&mut self) -> Result<(), LightError>;

    /// Gives back whatever OS handles the sink holds.
    fn release(&mut self) {}
}

pub fn open_output(config: &LightConfig) -> Result<Box<dyn PixelSink>, LightError> {
    let sink: Box<dyn PixelSink> = match config.output {
        OutputKind::Ws281x => ws281x::open(config)?,
        OutputKind::Ola => Box::new(ola::OlaOutput::new(config)?),
        OutputKind::DryRun => Box::new(memory::MemorySink::new(config.pixel_count)),
    };

    log::debug!(
        "Opened {:?} output with {} pixels",
        config.output,
        config.pixel_count
    );
    Ok(sink)
}

/// Owns a sink for the lifetime of one render and releases it on every exit
/// path. With `blank_on_release` the strip is switched off first.
pub struct SinkGuard {
    sink: Box<dyn PixelSink>,
    blank_on_release: bool,
}

impl SinkGuard {
    pub fn new(sink: Box<dyn PixelSink>, blank_on_release: bool) -> SinkGuard {
        SinkGuard {
            sink,
            blank_on_release,
        }
    }
}

impl Deref for SinkGuard {
    type Target = dyn PixelSink;

    fn deref(&self) -> &Self::Target {
        self.sink.as_ref()
    }
}

impl DerefMut for SinkGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sink.as_mut()
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        if self.blank_on_release {
            self.sink.fill(BLACK);
            if let Err(err) = self.sink.show() {
                log::warn!("Could not switch the strip off: {err}");
            }
        }

        self.sink.release();
    }
}
