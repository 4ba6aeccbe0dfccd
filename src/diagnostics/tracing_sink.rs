use tracing::{info, warn};

use crate::diagnostics::DiagnosticSink;

/// Forwards diagnostics to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, message: &str) {
        warn!("{message}");
    }

    fn info(&mut self, message: &str) {
        info!("{message}");
    }
}
