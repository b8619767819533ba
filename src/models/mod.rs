//! Shared data types passed between the host collaborators and the
//! render pipeline.

use crossterm::style::Color;

/// A battery telemetry reading from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Charge as a fraction in [0.0, 1.0]. Out-of-range values are
    /// classified as unknown, never rejected.
    pub charge: f32,
}

/// Discrete battery charge bucket. Classification is total: every
/// reading (including an absent one) maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Unknown,
    Empty,
    Quarter,
    ThreeQuarters,
    Full,
}

/// The host's working-directory descriptor for the active pane.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // the system host never emits the legacy form
pub enum CwdDescriptor {
    /// Older plain-string form the host no longer supports. Triggers
    /// a one-time warning and contributes nothing to the line.
    Legacy(String),
    /// Structured form: the reporting host and the directory path.
    Uri { host: String, path: String },
}

/// An active background/foreground pair supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
}
