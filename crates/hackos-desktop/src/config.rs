//! Desktop configuration
//!
//! Every field has a default, so hosts only send what they override:
//!
//! ```json
//! { "viewport": { "width": 1920, "height": 1080 }, "seed": 42 }
//! ```

use hackos_terminal::{DelayRange, TerminalConfig};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::Size;

/// Window placement and sizing rules
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDefaults {
    /// Position of the first cascaded window on both axes
    pub cascade_origin: f32,
    /// Offset added per already-open window
    pub cascade_step: f32,
    /// Stacking pool start; the first window gets `z_base + 1`
    pub z_base: u32,
    /// Smallest size a resize can produce
    pub min_size: Size,
    /// Height of the taskbar strip; also the bottom drag allowance
    pub taskbar_height: f32,
    /// Horizontal allowance kept on screen while dragging
    pub min_visible_width: f32,
    /// Distance from the right/bottom edge that counts as a resize handle
    pub resize_threshold: f32,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            cascade_origin: 50.0,
            cascade_step: 30.0,
            z_base: 100,
            min_size: Size::new(300.0, 200.0),
            taskbar_height: 44.0,
            min_visible_width: 200.0,
            resize_threshold: 10.0,
        }
    }
}

/// Configuration for a [`crate::DesktopShell`]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub window: WindowDefaults,
    /// Initial viewport; hosts update it on resize
    pub viewport: Size,
    pub clock_period_ms: f64,
    /// Delay before the welcome terminal opens
    pub welcome_delay_ms: f64,
    /// Delay between password cracker panel rounds
    pub cracker_interval_ms: DelayRange,
    /// Offset for the clock and every printed date
    pub utc_offset_minutes: i32,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
    pub terminal: TerminalConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            window: WindowDefaults::default(),
            viewport: Size::new(1280.0, 800.0),
            clock_period_ms: 1000.0,
            welcome_delay_ms: 1000.0,
            cracker_interval_ms: DelayRange::new(300.0, 700.0),
            utc_offset_minutes: 0,
            seed: None,
            terminal: TerminalConfig::default(),
        }
    }
}

/// Host-dependent settings a JSON config spelled out
///
/// Hosts fill in whatever is left unset from their environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplicitSettings {
    pub utc_offset: bool,
    pub viewport: bool,
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::from_host_json(json).map(|(config, _)| config)
    }

    /// Parse a host config, reporting which host-dependent keys it sets
    ///
    /// An empty or blank string yields the defaults with nothing explicit.
    pub fn from_host_json(json: &str) -> Result<(Self, ExplicitSettings), Error> {
        if json.trim().is_empty() {
            return Ok((Self::default(), ExplicitSettings::default()));
        }
        let value: serde_json::Value = serde_json::from_str(json)?;
        let explicit = ExplicitSettings {
            utc_offset: value.get("utc_offset_minutes").is_some(),
            viewport: value.get("viewport").is_some(),
        };
        let mut config: DesktopConfig = serde_json::from_value(value)?;
        config.terminal.utc_offset_minutes = config.utc_offset_minutes;
        Ok((config, explicit))
    }
}
