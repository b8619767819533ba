//! Application-wide constants.
//!
//! Centralizes all magic numbers, glyphs, and configuration defaults
//! so they are not scattered across the codebase.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Minimum allowed refresh interval (ms) to prevent excessive CPU usage.
pub const MIN_REFRESH_MS: u64 = 100;
/// Default refresh interval (ms).
pub const DEFAULT_REFRESH_MS: u64 = 1000;

// ── Configuration merge ───────────────────────────────────────────
/// Maximum recursion depth for the config deep-merge. Nesting beyond
/// this is left untouched rather than recursed into.
pub const MAX_MERGE_DEPTH: usize = 100;

// ── Glyphs ────────────────────────────────────────────────────────
/// Separator appended after every cell.
pub const DEFAULT_SEPARATOR: &str = "  ";
/// Indicator shown by the mode cell when no key table is engaged.
pub const HOME_MODE_INDICATOR: &str = "⌂";
/// Prefix for the cluster-context cell.
pub const KUBE_GLYPH: &str = "⎈";
/// Prefix for the workspace cell.
pub const WORKSPACE_GLYPH: &str = "◫";
/// Marker that replaces the home-directory prefix in cwd display.
pub const HOME_MARKER: &str = "~";
/// Battery level indicators: empty, quarter, three-quarters, full.
pub const BATTERY_ICONS: &[&str] = &["▁", "▂", "▆", "█"];
/// Indicator when battery telemetry is absent or out of range.
pub const BATTERY_UNKNOWN: &str = "·";

// ── Clock ─────────────────────────────────────────────────────────
/// Default strftime format for the clock cell.
pub const DEFAULT_CLOCK_FORMAT: &str = "%H:%M";

// ── Theme ─────────────────────────────────────────────────────────
/// Built-in fallback background (hex) when neither the host palette
/// nor a configured theme is available.
pub const BUILTIN_THEME_BG: &str = "#16161E";
/// Built-in fallback foreground (hex).
pub const BUILTIN_THEME_FG: &str = "#DCDCEB";

// ── Environment ───────────────────────────────────────────────────
/// Env var the session's multiplexer or shell exports to name the
/// active input mode.
pub const MODE_ENV_VAR: &str = "PENNANT_MODE";
/// Env var naming the active workspace.
pub const WORKSPACE_ENV_VAR: &str = "PENNANT_WORKSPACE";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/pennant/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("pennant")
}

/// Returns `~/.config/pennant/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
