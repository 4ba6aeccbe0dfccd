#[cfg(test)]
mod capture;
mod tracing_sink;

#[cfg(test)]
pub use capture::CapturingSink;
pub use tracing_sink::TracingSink;

/// Destination for the human-facing messages produced while processing trades.
pub trait DiagnosticSink {
    fn warn(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn warn(&mut self, message: &str) {
        (**self).warn(message)
    }

    fn info(&mut self, message: &str) {
        (**self).info(message)
    }
}
