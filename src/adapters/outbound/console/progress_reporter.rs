use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream::Stderr};

/// StderrProgressReporter adapter for reporting diagnostics to stderr
///
/// Writes to stderr so diagnostics never interleave with a manifest
/// printed to stdout. Warnings are yellow and completions green when
/// stderr supports colour.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.if_supports_color(Stderr, |text| text.yellow()));
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message.if_supports_color(Stderr, |text| text.green()));
    }
}
