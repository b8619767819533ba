//! Battery cell: total classification of an optional charge fraction
//! into five fixed indicators. Never fails the tick.

use crate::constants::{BATTERY_ICONS, BATTERY_UNKNOWN};
use crate::models::{BatteryLevel, BatteryReading};

/// Classify a reading into a charge bucket. Absent telemetry or a
/// fraction outside [0.0, 1.0] is Unknown.
pub fn classify(reading: Option<BatteryReading>) -> BatteryLevel {
    let Some(reading) = reading else {
        return BatteryLevel::Unknown;
    };
    let charge = reading.charge;
    if !(0.0..=1.0).contains(&charge) {
        BatteryLevel::Unknown
    } else if charge <= 0.25 {
        BatteryLevel::Empty
    } else if charge <= 0.50 {
        BatteryLevel::Quarter
    } else if charge <= 0.75 {
        BatteryLevel::ThreeQuarters
    } else {
        BatteryLevel::Full
    }
}

pub fn indicator(level: BatteryLevel) -> &'static str {
    match level {
        BatteryLevel::Unknown => BATTERY_UNKNOWN,
        BatteryLevel::Empty => BATTERY_ICONS[0],
        BatteryLevel::Quarter => BATTERY_ICONS[1],
        BatteryLevel::ThreeQuarters => BATTERY_ICONS[2],
        BatteryLevel::Full => BATTERY_ICONS[3],
    }
}

/// The cell's rendered text for the current reading.
pub fn render(reading: Option<BatteryReading>) -> String {
    indicator(classify(reading)).to_string()
}
