//! Segment providers, one per information source, plus the fixed
//! declaration order the status line renders in.

pub mod battery;
pub mod clock;
pub mod hostcwd;
pub mod kube;
pub mod mode;

use crate::config::CellsConfig;
use crate::constants::WORKSPACE_GLYPH;

/// Every cell the status line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Mode,
    Battery,
    Hostname,
    Cwd,
    Workspace,
    Kube,
    Clock,
}

/// Fixed declaration order. Cells appear in the output in exactly
/// this order regardless of how long any provider takes.
pub const CELL_ORDER: &[CellKind] = &[
    CellKind::Mode,
    CellKind::Battery,
    CellKind::Hostname,
    CellKind::Cwd,
    CellKind::Workspace,
    CellKind::Kube,
    CellKind::Clock,
];

impl CellKind {
    pub fn enabled(self, cells: &CellsConfig) -> bool {
        match self {
            CellKind::Mode => cells.mode.enabled,
            CellKind::Battery => cells.battery.enabled,
            CellKind::Hostname => cells.hostname.enabled,
            CellKind::Cwd => cells.cwd.enabled,
            CellKind::Workspace => cells.workspace.enabled,
            CellKind::Kube => cells.kube.enabled,
            CellKind::Clock => cells.clock.enabled,
        }
    }
}

/// Workspace cell: glyph-prefixed workspace name, nothing when the
/// host reports none.
pub fn workspace_text(name: Option<&str>) -> Option<String> {
    let name = name?.trim();
    if name.is_empty() {
        None
    } else {
        Some(format!("{} {}", WORKSPACE_GLYPH, name))
    }
}
