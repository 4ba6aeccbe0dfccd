use std::io::Read;

use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::engine::errors::ProcessorError;
use crate::engine::parser::parse;
use crate::engine::persister::persist;
use crate::reader::read_lines;
use crate::storage::TradeStore;

/// Runs the read, parse and persist stages over a trade source.
pub struct TradeProcessor<S, D> {
    store: S,
    sink: D
}

impl<S: TradeStore, D: DiagnosticSink> TradeProcessor<S, D> {
    pub fn new(store: S, sink: D) -> Self {
        Self {
            store,
            sink
        }
    }

    /// Reads every line of `source`, then parses them all, then stores the accepted trades.
    ///
    /// Malformed lines are reported through the sink and skipped.
    ///
    /// # Errors
    /// - `ProcessorError::Read` if the source cannot be read. Nothing is stored.
    /// - `ProcessorError::Storage` if the store fails. The batch is rolled back.
    pub fn process<R: Read>(&mut self, source: R) -> Result<usize, ProcessorError> {
        let lines = read_lines(source)?;
        debug!("Read {} lines", lines.len());

        let trades = parse(&lines, &mut self.sink);
        debug!("Accepted {} of {} lines", trades.len(), lines.len());

        let processed = persist(trades, &mut self.store, &mut self.sink)?;

        Ok(processed)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
