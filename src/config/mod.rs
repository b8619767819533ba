//! Effective configuration: built-in defaults deep-merged with user
//! overrides from `~/.config/pennant/config.toml`.
//!
//! The merged raw `toml::Value` is kept alongside the typed view so
//! that re-applying overrides rebuilds a fresh `Config` without
//! mutating shared state, and so that unrecognized keys survive the
//! merge even though the typed view ignores them.

mod merge;

pub use merge::deep_merge;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml::Value;
use tracing::warn;

use crate::alias::AliasRule;
use crate::constants::*;

/// The effective configuration. Immutable once built; `apply` returns
/// a new value rather than mutating in place.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fully merged raw value, unrecognized keys included.
    value: Value,
    /// Refresh interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Theme and separator settings.
    pub ui: UiConfig,
    /// Per-cell settings.
    pub cells: CellsConfig,
}

/// Serde view of the recognized configuration surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RootView {
    refresh_interval_ms: Option<u64>,
    ui: UiConfig,
    cells: CellsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Glyph appended after every cell.
    pub separator: String,
    /// Fallback theme used when the host supplies no palette.
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

/// User-supplied fallback theme, hex color strings like "#16161E".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub bg: Option<String>,
    pub fg: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellsConfig {
    pub mode: ModeCellConfig,
    pub battery: CellToggle,
    pub hostname: CellToggle,
    pub cwd: CwdCellConfig,
    pub workspace: CellToggle,
    pub kube: KubeCellConfig,
    pub clock: ClockCellConfig,
}

/// A cell with no options beyond its enabled flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellToggle {
    pub enabled: bool,
}

impl Default for CellToggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeCellConfig {
    pub enabled: bool,
    /// Indicator shown in bold when no mode is engaged.
    pub icon: String,
}

impl Default for ModeCellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            icon: HOME_MODE_INDICATOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CwdCellConfig {
    pub enabled: bool,
    /// Replace the home-directory prefix with `~` before aliasing.
    pub elide_home: bool,
    /// Literal rewrite rules applied in order.
    pub aliases: Vec<AliasRule>,
}

impl Default for CwdCellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            elide_home: true,
            aliases: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KubeCellConfig {
    pub enabled: bool,
    /// Path to the cluster-context lookup binary. Unset means the
    /// cell contributes nothing.
    pub binary: Option<String>,
}

impl Default for KubeCellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            binary: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockCellConfig {
    pub enabled: bool,
    /// strftime format string.
    pub format: String,
}

impl Default for ClockCellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: DEFAULT_CLOCK_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Pure built-in defaults.
    pub fn defaults() -> Self {
        let view = RootView::default();
        let value =
            Value::try_from(&view).unwrap_or_else(|_| Value::Table(toml::map::Map::new()));
        Self::assemble(value, view)
    }

    /// Load config from the given path (or the default location),
    /// layering file values over defaults. A missing file yields pure
    /// defaults; a malformed file warns and yields pure defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path: PathBuf = path
            .map(Path::to_path_buf)
            .unwrap_or_else(config_file_path);
        let config = Self::defaults();

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return config, // No config file — use defaults
        };

        match content.parse::<Value>() {
            Ok(overrides) => config.apply(&overrides),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                config
            }
        }
    }

    /// Re-apply overrides, returning a new merged Config. The receiver
    /// is left untouched.
    pub fn apply(&self, overrides: &Value) -> Self {
        let merged = deep_merge(self.value.clone(), overrides);
        let view: RootView = match merged.clone().try_into() {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "configuration has invalid types, using defaults");
                RootView::default()
            }
        };
        Self::assemble(merged, view)
    }

    fn assemble(value: Value, view: RootView) -> Self {
        Self {
            value,
            refresh_interval_ms: view
                .refresh_interval_ms
                .unwrap_or(DEFAULT_REFRESH_MS)
                .max(MIN_REFRESH_MS),
            ui: view.ui,
            cells: view.cells,
        }
    }
}
