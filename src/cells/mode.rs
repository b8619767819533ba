//! Mode cell: the active input mode's name, or a bold "home"
//! indicator when no key table is engaged.

use crate::config::ModeCellConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeCell {
    pub text: String,
    /// Emphasize the default indicator.
    pub bold: bool,
}

pub fn render(active: Option<&str>, cfg: &ModeCellConfig) -> ModeCell {
    match active {
        Some(mode) => ModeCell {
            text: mode.to_string(),
            bold: false,
        },
        None => ModeCell {
            text: cfg.icon.clone(),
            bold: true,
        },
    }
}
