use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::color::PixelOrder;
use crate::error::LightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    Ws281x,
    Ola,
    DryRun,
}

/// What to do when the requested effect name is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownEffectPolicy {
    /// Report the error and leave the strip alone.
    Reject,
    /// Report the error and show the color as a static effect.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OlaConfig {
    pub address: SocketAddr,
    pub universe: u16,
    /// First DMX channel of the strip, zero based.
    pub start_channel: usize,
}

impl Default for OlaConfig {
    fn default() -> Self {
        OlaConfig {
            address: SocketAddr::from((Ipv4Addr::LOCALHOST, 7770)),
            universe: 0,
            start_channel: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    pub output: OutputKind,
    /// GPIO pin driving the strip. Must support PWM.
    pub pin: u8,
    pub pixel_count: usize,
    /// Global brightness cap applied by the output, 0.0 to 1.0.
    pub brightness: f64,
    pub pixel_order: PixelOrder,
    pub dma: u8,
    /// Leave the strip lit after the effect instead of blanking it.
    pub persist_after_effect: bool,
    pub unknown_effect: UnknownEffectPolicy,
    pub ola: OlaConfig,
}

impl Default for LightConfig {
    fn default() -> Self {
        LightConfig {
            output: OutputKind::Ws281x,
            pin: 18,
            pixel_count: 50,
            brightness: 0.5,
            pixel_order: PixelOrder::Grb,
            dma: 10,
            persist_after_effect: false,
            unknown_effect: UnknownEffectPolicy::Reject,
            ola: OlaConfig::default(),
        }
    }
}

impl LightConfig {
    /// Reads a TOML, JSON or YAML file, picked by extension.
    pub fn load(path: &Path) -> Result<LightConfig, LightError> {
        let config = LightConfig::from_config_file(path)
            .map_err(|err| LightError::Config(format!("{}: {}", path.display(), err)))?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LightError> {
        if self.pixel_count == 0 {
            return Err(LightError::Config("pixel_count must be at least 1".into()));
        }

        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(LightError::Config(format!(
                "brightness must be between 0.0 and 1.0, got {}",
                self.brightness
            )));
        }

        Ok(())
    }

    /// The brightness cap as the 0-255 value LED drivers expect.
    pub fn brightness_u8(&self) -> u8 {
        (self.brightness.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ledpulse-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_a_50_pixel_grb_strip() {
        let config = LightConfig::default();
        assert_eq!(config.pixel_count, 50);
        assert_eq!(config.pin, 18);
        assert_eq!(config.pixel_order, PixelOrder::Grb);
        assert_eq!(config.brightness_u8(), 128);
        assert!(!config.persist_after_effect);
        assert_eq!(config.unknown_effect, UnknownEffectPolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let path = write_temp(
            "partial.toml",
            r#"
output = "ola"
pixel_order = "rgb"
persist_after_effect = true
unknown_effect = "fallback"

[ola]
universe = 2
"#,
        );

        let config = LightConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.output, OutputKind::Ola);
        assert_eq!(config.pixel_order, PixelOrder::Rgb);
        assert!(config.persist_after_effect);
        assert_eq!(config.unknown_effect, UnknownEffectPolicy::Fallback);
        assert_eq!(config.ola.universe, 2);
        assert_eq!(config.ola.address, OlaConfig::default().address);
        assert_eq!(config.pixel_count, 50);
    }

    #[test]
    fn rejects_out_of_range_brightness() {
        let path = write_temp("bright.toml", "brightness = 1.5\n");
        let result = LightConfig::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(LightError::Config(_))));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = LightConfig::load(Path::new("/nonexistent/ledpulse.toml"));
        assert!(matches!(result, Err(LightError::Config(_))));
    }
}
