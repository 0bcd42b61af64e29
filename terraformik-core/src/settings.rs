//! Provisioning policy defaults

use std::time::Duration;

/// Default provisioned read capacity units for the lock table
pub const DEFAULT_READ_CAPACITY: i64 = 5;

/// Default provisioned write capacity units for the lock table
pub const DEFAULT_WRITE_CAPACITY: i64 = 5;

/// Default time budget for the table to become active (25 polls x 20 seconds)
pub const DEFAULT_TABLE_WAIT_SECS: u64 = 500;

/// Server-side encryption algorithm applied by default to the state bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseAlgorithm {
    Aes256,
}

impl SseAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SseAlgorithm::Aes256 => "AES256",
        }
    }
}

/// Policy knobs for backend provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionSettings {
    /// Suffix appended to `{app}-{env}` for the bucket name
    pub bucket_suffix: String,

    /// Suffix appended to `{app}-{env}` for the table name
    pub table_suffix: String,

    /// Hash key attribute of the lock table
    pub lock_key: String,

    /// Provisioned read capacity units (default: 5)
    pub read_capacity: i64,

    /// Provisioned write capacity units (default: 5)
    pub write_capacity: i64,

    /// Default bucket encryption (default: AES256)
    pub sse_algorithm: SseAlgorithm,

    /// Upper bound on waiting for the lock table to become active
    pub table_wait: Duration,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            bucket_suffix: "terraformik-state".to_string(),
            table_suffix: "terraformik-locks".to_string(),
            lock_key: "LockID".to_string(),
            read_capacity: DEFAULT_READ_CAPACITY,
            write_capacity: DEFAULT_WRITE_CAPACITY,
            sse_algorithm: SseAlgorithm::Aes256,
            table_wait: Duration::from_secs(DEFAULT_TABLE_WAIT_SECS),
        }
    }
}

impl ProvisionSettings {
    /// Override the lock table throughput
    pub fn with_throughput(mut self, read_capacity: i64, write_capacity: i64) -> Self {
        self.read_capacity = read_capacity;
        self.write_capacity = write_capacity;
        self
    }
}
