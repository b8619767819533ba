//! Application runtime: owns the host, the orchestrator, and the
//! stdout sink, and drives the tick loop.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute, queue};

use crate::config::Config;
use crate::host::SystemHost;
use crate::render::{Orchestrator, Sink};
use crate::ui::FormatItem;

/// Paints the drawn sequence to a terminal with ANSI styling,
/// redrawing the line in place on each tick.
pub struct AnsiSink<W: Write> {
    out: W,
}

impl AnsiSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sink for AnsiSink<W> {
    fn paint(&mut self, items: &[FormatItem]) -> Result<()> {
        queue!(self.out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for item in items {
            match item {
                FormatItem::Attribute(a) => queue!(self.out, SetAttribute(*a))?,
                FormatItem::Background(c) => queue!(self.out, SetBackgroundColor(*c))?,
                FormatItem::Foreground(c) => queue!(self.out, SetForegroundColor(*c))?,
                FormatItem::Text(t) => queue!(self.out, Print(t))?,
                FormatItem::Reset => {
                    queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

pub struct App {
    orchestrator: Orchestrator,
    host: SystemHost,
    once: bool,
}

impl App {
    pub fn new(config: Config, once: bool) -> Self {
        Self {
            orchestrator: Orchestrator::new(config),
            host: SystemHost::new(),
            once,
        }
    }

    /// Run the tick loop. Returns when interrupted, or after a single
    /// render in `--once` mode.
    pub async fn run(&mut self) -> Result<()> {
        let mut sink = AnsiSink::stdout();

        if self.once {
            self.orchestrator.render_tick(&self.host, &mut sink)?;
            println!();
            return Ok(());
        }

        let mut stdout = io::stdout();
        execute!(stdout, cursor::Hide)?;

        let interval_ms = self.orchestrator.config().refresh_interval_ms;
        let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.orchestrator.render_tick(&self.host, &mut sink)?;
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        execute!(stdout, cursor::Show)?;
        println!();
        Ok(())
    }
}
