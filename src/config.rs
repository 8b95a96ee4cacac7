//! Configuration enums for the simulation core.
//!
//! All numeric inputs to the core clamp rather than fail, so the only
//! surfaced failure class is a configuration contract violation: an
//! unrecognized enum name arriving from a CLI flag or an instrumentation
//! client. Those are rejected here, at the boundary, before they can reach
//! the stepping loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing configuration values at the boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognized light type '{0}' (expected 'white' or 'colored')")]
    UnknownLightType(String),

    #[error("unrecognized view mode '{0}' (expected 'beam' or 'photon')")]
    UnknownViewMode(String),

    #[error("unrecognized head mode '{0}' (expected 'brain' or 'no-brain')")]
    UnknownHeadMode(String),

    #[error("unrecognized channel '{0}' (expected 'red', 'green', or 'blue')")]
    UnknownChannel(String),
}

/// Kind of light emitted by the single-bulb flashlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightType {
    /// Broad-spectrum light; photons are created across the visible band.
    White,
    /// Monochromatic light at the configured flashlight wavelength.
    Colored,
}

/// Visualization mode: a continuous beam or discrete photons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Continuous-intensity view; perceived color follows the configuration
    /// directly.
    Beam,
    /// Discrete-particle view; perceived color follows the most recent
    /// photon to reach the eye.
    Photon,
}

/// Whether the observer's brain is drawn. Display-only; no effect on the
/// physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadMode {
    Brain,
    NoBrain,
}

/// One of the three independent light paths in the RGB configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightType::White => write!(f, "white"),
            LightType::Colored => write!(f, "colored"),
        }
    }
}

impl FromStr for LightType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(LightType::White),
            "colored" => Ok(LightType::Colored),
            other => Err(ConfigError::UnknownLightType(other.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Beam => write!(f, "beam"),
            ViewMode::Photon => write!(f, "photon"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beam" => Ok(ViewMode::Beam),
            "photon" => Ok(ViewMode::Photon),
            other => Err(ConfigError::UnknownViewMode(other.to_string())),
        }
    }
}

impl fmt::Display for HeadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadMode::Brain => write!(f, "brain"),
            HeadMode::NoBrain => write!(f, "no-brain"),
        }
    }
}

impl FromStr for HeadMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brain" => Ok(HeadMode::Brain),
            "no-brain" => Ok(HeadMode::NoBrain),
            other => Err(ConfigError::UnknownHeadMode(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

impl FromStr for Channel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(ConfigError::UnknownChannel(other.to_string())),
        }
    }
}

impl Channel {
    /// All three channels, in red/green/blue order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_display_parse() {
        for light in [LightType::White, LightType::Colored] {
            assert_eq!(light.to_string().parse::<LightType>().unwrap(), light);
        }
        for mode in [ViewMode::Beam, ViewMode::Photon] {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
        for head in [HeadMode::Brain, HeadMode::NoBrain] {
            assert_eq!(head.to_string().parse::<HeadMode>().unwrap(), head);
        }
        for channel in Channel::ALL {
            assert_eq!(channel.to_string().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn test_unrecognized_values_rejected() {
        assert_eq!(
            "sepia".parse::<LightType>(),
            Err(ConfigError::UnknownLightType("sepia".to_string()))
        );
        assert_eq!(
            "wave".parse::<ViewMode>(),
            Err(ConfigError::UnknownViewMode("wave".to_string()))
        );
        assert_eq!(
            "Brain".parse::<HeadMode>(),
            Err(ConfigError::UnknownHeadMode("Brain".to_string()))
        );
        assert_eq!(
            "cyan".parse::<Channel>(),
            Err(ConfigError::UnknownChannel("cyan".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&HeadMode::NoBrain).unwrap();
        assert_eq!(json, "\"no-brain\"");
        let json = serde_json::to_string(&LightType::Colored).unwrap();
        assert_eq!(json, "\"colored\"");
    }
}
