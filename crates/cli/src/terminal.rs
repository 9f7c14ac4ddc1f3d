//! Terminal implementations of the prompt capabilities.

use std::io::{self, BufRead, Write};

use saber_simples_storefront::prompts::{Confirm, Notice, NoticeLevel, Notifier};

/// Asks yes/no questions on stdin, or answers yes by itself with `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirm {
    assume_yes: bool,
}

impl TerminalConfirm {
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{message}");

        if self.assume_yes {
            let _ = writeln!(out, "[s/N] s");
            return true;
        }

        let _ = write!(out, "[s/N] ");
        let _ = out.flush();
        drop(out);

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read answer, assuming no");
                false
            }
        }
    }
}

/// Accepts Portuguese and English affirmatives.
fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

/// Prints notices to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: &Notice) {
        let marker = match notice.level {
            NoticeLevel::Info => "i",
            NoticeLevel::Success => "+",
            NoticeLevel::Warning => "!",
        };
        let _ = writeln!(io::stdout().lock(), "[{marker}] {}", notice.message);
    }
}
