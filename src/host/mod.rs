//! Host collaborators supplying the data the cells render.
//!
//! The [`Host`] trait is the narrow contract against the surrounding
//! terminal session; [`SystemHost`] implements it for a real session
//! on this machine. Every method is best-effort: absent data is
//! `None`, never an error.

use crate::constants::{MODE_ENV_VAR, WORKSPACE_ENV_VAR};
use crate::models::{BatteryReading, CwdDescriptor, Palette};

pub trait Host {
    /// Name of the active input mode, if one is engaged.
    fn active_mode(&self) -> Option<String>;

    /// Battery telemetry for the primary power source.
    fn battery(&self) -> Option<BatteryReading>;

    /// Working-directory descriptor for the active pane.
    fn cwd(&self) -> Option<CwdDescriptor>;

    /// Name of the active workspace.
    fn workspace(&self) -> Option<String>;

    /// Active background/foreground pair, if the host exposes one.
    fn palette(&self) -> Option<Palette>;

    /// The local machine's hostname, used when the cwd descriptor
    /// reports an empty host.
    fn local_hostname(&self) -> Option<String>;
}

/// Host implementation backed by the operating system: sysfs battery
/// telemetry, the process environment, and the local hostname.
pub struct SystemHost;

impl SystemHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SystemHost {
    fn active_mode(&self) -> Option<String> {
        nonempty_env(MODE_ENV_VAR)
    }

    fn battery(&self) -> Option<BatteryReading> {
        read_battery_reading()
    }

    fn cwd(&self) -> Option<CwdDescriptor> {
        let path = std::env::current_dir().ok()?;
        Some(CwdDescriptor::Uri {
            host: self.local_hostname().unwrap_or_default(),
            path: path.to_string_lossy().into_owned(),
        })
    }

    fn workspace(&self) -> Option<String> {
        nonempty_env(WORKSPACE_ENV_VAR)
    }

    fn palette(&self) -> Option<Palette> {
        // A plain terminal does not expose its palette; the fallback
        // theme from configuration applies.
        None
    }

    fn local_hostname(&self) -> Option<String> {
        sysinfo::System::host_name()
    }
}

fn nonempty_env(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Read the first battery's charge from /sys/class/power_supply.
/// Returns None on non-Linux hosts or machines without a battery.
fn read_battery_reading() -> Option<BatteryReading> {
    let ps_dir = std::fs::read_dir("/sys/class/power_supply").ok()?;

    for entry in ps_dir.flatten() {
        let path = entry.path();
        let ps_type = std::fs::read_to_string(path.join("type"))
            .unwrap_or_default()
            .trim()
            .to_string();

        if ps_type != "Battery" {
            continue;
        }

        // capacity is a percentage 0-100
        if let Some(percent) = std::fs::read_to_string(path.join("capacity"))
            .ok()
            .and_then(|s| s.trim().parse::<f32>().ok())
        {
            return Some(BatteryReading {
                charge: percent / 100.0,
            });
        }
    }

    None
}
