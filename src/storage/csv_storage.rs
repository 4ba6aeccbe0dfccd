use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use tracing::{debug, warn};

use crate::models::TradeRecord;
use crate::storage::{StorageError, TRADE_COLUMNS, TradeStore, check_columns};

/// Durable trade store backed by a single CSV file.
///
/// Inserts are staged in memory. On commit the current file plus the staged rows
/// are written to a sibling staging file which then replaces the target, so
/// readers only ever see whole batches.
pub struct CsvTradeStore {
    path: PathBuf,
    pending: Option<Writer<Vec<u8>>>
}

impl CsvTradeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pending: None
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".staging");
        PathBuf::from(name)
    }

    fn has_rows(&self) -> Result<bool, StorageError> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.len() > 0),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error.into())
        }
    }

    fn write_staged(&self, staging_path: &Path, staged: &[u8]) -> Result<(), StorageError> {
        {
            let mut staging = File::create(staging_path)?;

            match fs::read(&self.path) {
                Ok(existing) => {
                    staging.write_all(&existing)?;

                    //NOTE: A store edited by hand may lack the final terminator, new rows must not join its last row
                    if existing.last().is_some_and(|byte| *byte != b'\n') {
                        staging.write_all(b"\n")?;
                    }
                }
                Err(error) if error.kind() == ErrorKind::NotFound => {}
                Err(error) => return Err(error.into())
            }

            staging.write_all(staged)?;
            staging.sync_all()?;
        }

        fs::rename(staging_path, &self.path)?;

        Ok(())
    }
}

impl TradeStore for CsvTradeStore {
    fn begin(&mut self) -> Result<(), StorageError> {
        if self.pending.is_some() {
            return Err(StorageError::TransactionInProgress);
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        if !self.has_rows()? {
            writer.write_record(TRADE_COLUMNS)?;
        }

        self.pending = Some(writer);
        debug!("Began trade batch on {}", self.path.display());

        Ok(())
    }

    fn insert(&mut self, trade: &TradeRecord) -> Result<(), StorageError> {
        let writer = self.pending.as_mut().ok_or(StorageError::NoTransaction)?;
        check_columns(trade)?;
        writer.serialize(trade)?;

        Ok(())
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        let writer = self.pending.take().ok_or(StorageError::NoTransaction)?;
        let staged = writer.into_inner().map_err(|error| StorageError::Io(error.into_error()))?;
        let staging_path = self.staging_path();

        let result = self.write_staged(&staging_path, &staged);

        match &result {
            Ok(()) => debug!("Committed trade batch to {}", self.path.display()),
            Err(_) => match fs::remove_file(&staging_path) {
                Ok(()) => {}
                Err(error) if error.kind() == ErrorKind::NotFound => {}
                Err(error) => warn!("Could not remove staging file {}: {error}", staging_path.display())
            }
        }

        result
    }

    fn rollback(&mut self) -> Result<(), StorageError> {
        self.pending.take().ok_or(StorageError::NoTransaction)?;
        debug!("Rolled back trade batch on {}", self.path.display());

        Ok(())
    }
}
