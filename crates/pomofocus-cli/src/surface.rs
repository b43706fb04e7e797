//! Terminal render surface.
//!
//! On a TTY the timer line is redrawn in place; otherwise (pipes, tests) each
//! frame is written as its own line.

use std::io::{IsTerminal, Write};

use pomofocus_core::error::Result;
use pomofocus_core::storage::{NotificationsConfig, UiConfig};
use pomofocus_core::{Config, Notification, RenderSurface, Snapshot, Task};

const CLEAR_LINE: &str = "\r\x1b[2K";

pub struct TerminalSurface<W: Write> {
    out: W,
    live: bool,
    ui: UiConfig,
    notifications: NotificationsConfig,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout(config: &Config) -> Self {
        let out = std::io::stdout();
        let live = out.is_terminal();
        Self::new(out, live, config)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, live: bool, config: &Config) -> Self {
        Self {
            out,
            live,
            ui: config.ui.clone(),
            notifications: config.notifications.clone(),
        }
    }

    /// Leave the in-place line and print a closing summary.
    pub fn finish(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.live {
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "Session ended: {} focus interval(s) completed.",
            snapshot.completed_focus_count
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn begin_block(&mut self) -> Result<()> {
        if self.live {
            write!(self.out, "{CLEAR_LINE}")?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn draw_timer(&mut self, snapshot: &Snapshot) -> Result<()> {
        let line = timer_line(snapshot, &self.ui);
        if self.live {
            write!(self.out, "{CLEAR_LINE}{line}")?;
        } else {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn draw_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        if !self.ui.show_tasks {
            return Ok(());
        }
        self.begin_block()?;
        writeln!(self.out, "Tasks:")?;
        if tasks.is_empty() {
            writeln!(self.out, "  No tasks yet. Add one to get started!")?;
        }
        for task in tasks {
            let mark = if task.completed { 'x' } else { ' ' };
            writeln!(self.out, "  [{mark}] {:>3}  {}", task.id, task.text)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn alert(&mut self, notification: &Notification) -> Result<()> {
        if !self.notifications.enabled {
            return Ok(());
        }
        self.begin_block()?;
        let bell = if self.notifications.bell { "\x07" } else { "" };
        writeln!(self.out, "🔔 {}{bell}", notification.message)?;
        self.out.flush()?;
        Ok(())
    }
}

fn timer_line(snapshot: &Snapshot, ui: &UiConfig) -> String {
    let state = if snapshot.is_running { "running" } else { "paused" };
    let pct = (snapshot.progress_fraction * 100.0).round() as u32;
    let bar = if ui.progress_bar {
        format!(" {}", progress_bar(snapshot.progress_fraction, ui.progress_bar_width))
    } else {
        String::new()
    };
    format!(
        "[{}] {}{bar} {pct:>3}%  {state}  🍅 {}",
        snapshot.mode_label, snapshot.clock, snapshot.completed_focus_count
    )
}

fn progress_bar(fraction: f64, width: u32) -> String {
    let width = width as usize;
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
