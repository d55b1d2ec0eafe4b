use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so the rendered tree on stdout stays clean. Steps of
/// unknown length, such as waiting on the package manager, show an
/// indicatif spinner that is cleared by the next message.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_pending(&self, message: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_error("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_pending_step_is_cleared_by_next_message() {
        let reporter = StderrProgressReporter::default();
        reporter.report_pending("Waiting");
        assert!(reporter.spinner.borrow().is_some());

        reporter.report("Done waiting");
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_pending_step_replaces_previous_spinner() {
        let reporter = StderrProgressReporter::new();
        reporter.report_pending("First");
        reporter.report_pending("Second");

        let spinner = reporter.spinner.borrow();
        assert_eq!(spinner.as_ref().unwrap().message(), "Second");
    }
}
