use tracing::Level;

use crate::diagnostics::DiagnosticSink;

/// Records every diagnostic so tests can assert on them.
#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: Vec<(Level, String)>
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.at_level(Level::WARN)
    }

    pub fn infos(&self) -> Vec<&str> {
        self.at_level(Level::INFO)
    }

    fn at_level(&self, level: Level) -> Vec<&str> {
        self.messages.iter()
            .filter(|(message_level, _)| *message_level == level)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl DiagnosticSink for CapturingSink {
    fn warn(&mut self, message: &str) {
        self.messages.push((Level::WARN, message.to_string()));
    }

    fn info(&mut self, message: &str) {
        self.messages.push((Level::INFO, message.to_string()));
    }
}
