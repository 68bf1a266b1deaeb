use crate::config::LightConfig;
use crate::error::LightError;
use crate::output::PixelSink;
#[cfg(feature = "ws281x")]
use crate::color::{Color, PixelOrder};

#[cfg(feature = "ws281x")]
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType};

#[cfg(feature = "ws281x")]
const PERMISSION_HINT: &str = "driving the strip needs /dev/mem access, run as root (sudo)";
#[cfg(feature = "ws281x")]
const FREQUENCY_HZ: u32 = 800_000;

/// Lays out already ordered channel bytes as an rpi_ws281x LED word.
///
/// The driver keeps each LED as little-endian 0x00RRGGBB and, for an RGB
/// strip type, sends the R, G and B bytes in that order. Writing our own
/// arranged bytes into those slots puts any channel order on the wire.
#[cfg_attr(not(feature = "ws281x"), allow(dead_code))]
fn raw_word(values: [u8; 3]) -> [u8; 4] {
    [values[2], values[1], values[0], 0]
}

/// WS2812B strip on a Raspberry Pi GPIO pin, driven through rpi_ws281x.
#[cfg(feature = "ws281x")]
pub struct Ws281xStrip {
    controller: Controller,
    pixel_order: PixelOrder,
}

#[cfg(feature = "ws281x")]
impl Ws281xStrip {
    pub fn new(config: &LightConfig) -> Result<Self, LightError> {
        let channel = ChannelBuilder::new()
            .pin(config.pin as i32)
            .count(config.pixel_count as i32)
            .strip_type(StripType::Ws2811Rgb)
            .brightness(config.brightness_u8())
            .build();

        let controller = ControllerBuilder::new()
            .freq(FREQUENCY_HZ)
            .dma(config.dma as i32)
            .channel(0, channel)
            .build()
            .map_err(|err| {
                LightError::HardwareInit(format!(
                    "cannot open GPIO {}: {:?}; {}",
                    config.pin, err, PERMISSION_HINT
                ))
            })?;

        log::debug!(
            "rpi_ws281x ready on GPIO {} with {} pixels, DMA {}",
            config.pin,
            config.pixel_count,
            config.dma
        );

        Ok(Ws281xStrip {
            controller,
            pixel_order: config.pixel_order,
        })
    }
}

#[cfg(feature = "ws281x")]
impl PixelSink for Ws281xStrip {
    fn fill(&mut self, color: Color) {
        let word = raw_word(self.pixel_order.arrange(color));
        for led in self.controller.leds_mut(0) {
            *led = word;
        }
    }

    fn show(&mut self) -> Result<(), LightError> {
        self.controller
            .render()
            .map_err(|err| LightError::Output(format!("render failed: {:?}", err)))?;
        self.controller
            .wait()
            .map_err(|err| LightError::Output(format!("wait failed: {:?}", err)))
    }

    fn release(&mut self) {
        // DMA and PWM are torn down when the controller drops.
        log::debug!("Releasing GPIO strip");
    }
}

#[cfg(feature = "ws281x")]
pub fn open(config: &LightConfig) -> Result<Box<dyn PixelSink>, LightError> {
    Ok(Box::new(Ws281xStrip::new(config)?))
}

#[cfg(not(feature = "ws281x"))]
pub fn open(config: &LightConfig) -> Result<Box<dyn PixelSink>, LightError> {
    Err(LightError::HardwareInit(format!(
        "GPIO {} requested but this build has no ws281x support; \
         rebuild with `--features ws281x` or use --dry-run",
        config.pin
    )))
}
