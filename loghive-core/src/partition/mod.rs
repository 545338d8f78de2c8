//! Partitioner
//!
//! Dynamic partitioning by status code, done as a stable group-by: every
//! record moves into the partition for its own status, in arrival order.

use crate::record::LogRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Records sharing one status code, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub status: u16,
    pub records: Vec<LogRecord>,
}

impl Partition {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export file stem, e.g. `partition_404`.
    pub fn artifact_name(&self) -> String {
        format!("partition_{}", self.status)
    }
}

/// Group records by status. Consumes the records, so none can be duplicated.
pub fn partition_by_status<I>(records: I) -> BTreeMap<u16, Partition>
where
    I: IntoIterator<Item = LogRecord>,
{
    let mut partitions: BTreeMap<u16, Partition> = BTreeMap::new();
    for record in records {
        partitions
            .entry(record.status)
            .or_insert_with(|| Partition::new(record.status))
            .records
            .push(record);
    }
    partitions
}
