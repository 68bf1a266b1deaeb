use std::fmt;

use crate::color::ColorError;

#[derive(Debug, Clone, PartialEq)]
pub enum LightError {
    InvalidColor(ColorError),
    /// Effect name outside static, pulse, strobe and fade.
    UnknownEffect(String),
    /// The LED output could not be acquired. Nothing was written.
    HardwareInit(String),
    /// The LED output failed while frames were being shown.
    Output(String),
    Config(String),
}

impl LightError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LightError::HardwareInit(_) | LightError::Output(_) => 1,
            LightError::InvalidColor(_) | LightError::UnknownEffect(_) | LightError::Config(_) => 2,
        }
    }
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightError::InvalidColor(err) => write!(f, "{}", err),
            LightError::UnknownEffect(name) => write!(
                f,
                "unknown effect '{}' (expected one of: static, pulse, strobe, fade)",
                name
            ),
            LightError::HardwareInit(msg) => {
                write!(f, "cannot initialize LED output: {}", msg)
            }
            LightError::Output(msg) => write!(f, "LED output failed: {}", msg),
            LightError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for LightError {}

impl From<ColorError> for LightError {
    fn from(err: ColorError) -> Self {
        LightError::InvalidColor(err)
    }
}
