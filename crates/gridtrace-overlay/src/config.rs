//! Overlay configuration, validation, and error types.
//!
//! [`OverlayConfig`] carries every setting of the overlay service.
//! [`validate()`](OverlayConfig::validate) checks it once at construction;
//! the service never re-reads it.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use gridtrace_outline::CoordinateMapper;
use indexmap::IndexSet;

use crate::color::Rgba;

/// Largest accepted discovery radius, in sections.
pub const MAX_DISCOVERY_RADIUS: u32 = 64;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`OverlayConfig::validate()`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The marker set label is empty or whitespace.
    EmptyLabel,
    /// The refresh interval is zero.
    ZeroInterval,
    /// The section shift does not fit a `u32` scale factor.
    InvalidShift {
        /// The configured shift.
        bits: u32,
    },
    /// The discovery radius exceeds [`MAX_DISCOVERY_RADIUS`].
    RadiusTooLarge {
        /// The configured radius.
        radius: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "marker set label must not be empty"),
            Self::ZeroInterval => write!(f, "refresh interval must be non-zero"),
            Self::InvalidShift { bits } => {
                write!(f, "section shift {bits} is invalid, must be < 32")
            }
            Self::RadiusTooLarge { radius } => {
                write!(
                    f,
                    "discovery radius {radius} exceeds maximum of {MAX_DISCOVERY_RADIUS}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

// ── OverlayConfig ──────────────────────────────────────────────────

/// Settings for [`VisualizerService`](crate::service::VisualizerService).
#[derive(Clone, Debug)]
pub struct OverlayConfig {
    /// Marker set label shown in the map UI. Default: `"Grid Regions"`.
    pub label: String,
    /// Whether the marker set starts hidden. Default: `true`.
    pub default_hidden: bool,
    /// Map ids that never get a marker set. Default: empty.
    pub disabled_maps: IndexSet<String>,
    /// Spawn region colour as `rrggbbaa` hex. Default: `"1e90ff1a"`.
    ///
    /// Text that does not parse falls back to the default.
    pub spawn_color: String,
    /// Time between refreshes. Default: 5 s.
    pub refresh_interval: Duration,
    /// Sections around each point of interest to reveal. Default: 4.
    pub discovery_radius: u32,
    /// log2 of the section size in blocks. Default: 8.
    pub section_shift: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            label: "Grid Regions".to_string(),
            default_hidden: true,
            disabled_maps: IndexSet::new(),
            spawn_color: Rgba::DEFAULT_SPAWN_HEX.to_string(),
            refresh_interval: Duration::from_secs(5),
            discovery_radius: 4,
            section_shift: 8,
        }
    }
}

impl OverlayConfig {
    /// Check every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.discovery_radius > MAX_DISCOVERY_RADIUS {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.discovery_radius,
            });
        }
        self.mapper()?;
        Ok(())
    }

    /// Mapper from section coordinates to block coordinates.
    pub fn mapper(&self) -> Result<CoordinateMapper, ConfigError> {
        CoordinateMapper::from_shift(self.section_shift).map_err(|_| ConfigError::InvalidShift {
            bits: self.section_shift,
        })
    }

    /// The spawn colour, or the default if the text does not parse.
    pub fn spawn_rgba(&self) -> Rgba {
        match Rgba::from_hex(&self.spawn_color) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("{e}; using default spawn colour {}", Rgba::DEFAULT_SPAWN_HEX);
                Rgba::DEFAULT_SPAWN
            }
        }
    }
}
