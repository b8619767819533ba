//! Per-tick render orchestration.
//!
//! One pass: resolve the theme, walk the fixed cell order, invoke each
//! enabled provider, accumulate styled cells, hand the sequence to the
//! output sink. A failed or empty provider degrades to an absent cell;
//! nothing here aborts the tick.

use anyhow::Result;
use tracing::warn;

use crate::cells::{self, CellKind, CELL_ORDER};
use crate::config::Config;
use crate::constants::home_dir;
use crate::host::Host;
use crate::models::CwdDescriptor;
use crate::ui::{FormatItem, LineBuilder, Theme};

/// Accepts one tick's drawn sequence and paints it. The orchestrator
/// has no knowledge of the rendering surface beyond this call.
pub trait Sink {
    fn paint(&mut self, items: &[FormatItem]) -> Result<()>;
}

/// Drives one render per refresh tick. The only state carried across
/// ticks is the configuration and the one-time warning flags.
pub struct Orchestrator {
    config: Config,
    palette_warned: bool,
    legacy_cwd_warned: bool,
}

impl Orchestrator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            palette_warned: false,
            legacy_cwd_warned: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One refresh tick: Idle → Rendering → Idle.
    pub fn render_tick(&mut self, host: &dyn Host, sink: &mut dyn Sink) -> Result<()> {
        let (theme, fallback_used) = Theme::resolve(host.palette(), &self.config.ui.theme);
        if fallback_used && !self.palette_warned {
            warn!("host supplied no active palette, using fallback theme");
            self.palette_warned = true;
        }

        let cells_cfg = &self.config.cells;
        let separator = self.config.ui.separator.clone();

        // The hostname and cwd cells share one descriptor fetch.
        let cwd_desc = if cells_cfg.hostname.enabled || cells_cfg.cwd.enabled {
            host.cwd()
        } else {
            None
        };
        if matches!(cwd_desc, Some(CwdDescriptor::Legacy(_))) && !self.legacy_cwd_warned {
            warn!("host reported an unsupported legacy working-directory string");
            self.legacy_cwd_warned = true;
        }

        let home = home_dir().to_string_lossy().into_owned();
        let mut line = LineBuilder::new();

        for kind in CELL_ORDER {
            if !kind.enabled(cells_cfg) {
                continue;
            }
            let (text, bold) = match kind {
                CellKind::Mode => {
                    let cell =
                        cells::mode::render(host.active_mode().as_deref(), &cells_cfg.mode);
                    (Some(cell.text), cell.bold)
                }
                CellKind::Battery => (Some(cells::battery::render(host.battery())), false),
                CellKind::Hostname => (
                    cwd_desc.as_ref().and_then(|d| {
                        cells::hostcwd::hostname_text(d, host.local_hostname().as_deref())
                    }),
                    false,
                ),
                CellKind::Cwd => (
                    cwd_desc
                        .as_ref()
                        .and_then(|d| cells::hostcwd::cwd_text(d, &cells_cfg.cwd, &home)),
                    false,
                ),
                CellKind::Workspace => {
                    (cells::workspace_text(host.workspace().as_deref()), false)
                }
                CellKind::Kube => (
                    cells::kube::current_context(cells_cfg.kube.binary.as_deref()),
                    false,
                ),
                CellKind::Clock => (Some(cells::clock::render(&cells_cfg.clock.format)), false),
            };

            if let Some(text) = text {
                if !text.is_empty() {
                    let attrs: &[&str] = if bold { &["bold"] } else { &[] };
                    line.push(theme.bg, theme.fg, &format!("{}{}", text, separator), attrs);
                }
            }
        }

        sink.paint(line.draw())?;
        line.clear();
        Ok(())
    }
}
