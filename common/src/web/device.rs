//! # Device Profile Model
//!
//! The accessibility audit renders the page as one of two emulated
//! devices. The profile fixes the viewport and user-agent string; any
//! other device name is a usage error.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::web::viewport::Viewport;

const MOBILE_USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15";
const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Emulated device used when rendering the audited page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceProfile {
    #[default]
    Mobile,
    Desktop,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[error("unknown device profile: {0} (expected mobile or desktop)")]
    Unknown(String),
}

impl DeviceProfile {
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Mobile => Viewport {
                width: 375,
                height: 667,
            },
            Self::Desktop => Viewport {
                width: 1280,
                height: 800,
            },
        }
    }

    pub fn user_agent(&self) -> &'static str {
        match self {
            Self::Mobile => MOBILE_USER_AGENT,
            Self::Desktop => DESKTOP_USER_AGENT,
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl FromStr for DeviceProfile {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            _ => Err(DeviceError::Unknown(s.to_owned())),
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => f.write_str("mobile"),
            Self::Desktop => f.write_str("desktop"),
        }
    }
}
