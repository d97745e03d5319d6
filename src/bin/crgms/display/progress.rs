use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

/// Numbered pipeline steps, drawn on stderr only when interactive.
pub struct Progress {
    interactive: bool,
    total: u8,
    done: u8,
    started: Instant,
    running: Option<(ProgressBar, Instant)>,
}

impl Progress {
    pub fn new(interactive: bool, total: u8) -> Self {
        Self {
            interactive,
            total,
            done: 0,
            started: Instant::now(),
            running: None,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.stop_spinner();
        if !self.interactive {
            return;
        }

        let style = ProgressStyle::with_template("  {spinner:.yellow} {prefix:.dim} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(TICKS);

        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_prefix(format!("[{}/{}]", self.done + 1, self.total))
            .with_message(description.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        self.running = Some((bar, Instant::now()));
    }

    pub fn complete_step(&mut self, description: &str, details: &[String]) {
        self.done = self.done.saturating_add(1);
        let Some((bar, since)) = self.running.take() else {
            return;
        };
        bar.finish_and_clear();

        let mut err = io::stderr().lock();
        let _ = writeln!(
            err,
            "  \x1b[32m✓\x1b[0m \x1b[2m[{}/{}]\x1b[0m {:<38} {:>6.2}s",
            self.done,
            self.total,
            description,
            since.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(err, "        \x1b[2m└ {detail}\x1b[0m");
        }
    }

    pub fn finish(mut self) {
        self.stop_spinner();
        if !self.interactive {
            return;
        }

        let mut err = io::stderr().lock();
        let _ = writeln!(err);
        let _ = writeln!(
            err,
            "  \x1b[32m●\x1b[0m Done: {} step(s) in {:.2}s",
            self.done,
            self.started.elapsed().as_secs_f64()
        );
        let _ = writeln!(err);
    }

    fn stop_spinner(&mut self) {
        if let Some((bar, _)) = self.running.take() {
            bar.finish_and_clear();
        }
    }
}
