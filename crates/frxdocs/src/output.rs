//! Status lines for the terminal.

use std::fmt::Display;

use console::{Style, Term};

/// Writes styled status lines to stderr so stdout stays clean.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    failure: Style,
    label: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            failure: Style::new().red().bold(),
            label: Style::new().dim(),
        }
    }

    fn line(&self, text: impl Display) {
        // Losing a status line is not worth failing the command over.
        let _ = self.term.write_line(&text.to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    /// `label: value`, with the label dimmed.
    pub(crate) fn field(&self, label: &str, value: &str) {
        self.line(format_args!("  {} {value}", self.label.apply_to(format!("{label}:"))));
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(self.ok.apply_to(msg));
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(self.failure.apply_to(msg));
    }
}
