//! Helpers for asserting over log records in tests.

use std::sync::{Mutex, PoisonError};

use log::{Level, Log, Metadata, Record};

/// A log record captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// A [`Log`] implementation that keeps every record it receives.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use usergate::{UserGate, test_util::RecordingSink};
/// let sink = RecordingSink::default();
/// let _outcome = UserGate::with_sink(&sink).check(None);
/// assert_eq!(sink.records().len(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Recorded>>,
}

impl RecordingSink {
    /// Snapshot of the records received so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<Recorded> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        self.records().into_iter().map(|r| r.level).collect()
    }
}

impl Log for RecordingSink {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Recorded {
                level: record.level(),
                target: record.target().to_owned(),
                message: record.args().to_string(),
            });
    }

    fn flush(&self) {}
}
