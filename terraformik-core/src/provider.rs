//! Provider - Traits abstracting the remote calls made while provisioning
//!
//! A provider implements the object-storage and key-value-table calls for a
//! specific cloud (currently AWS). Each method is one remote call; sequencing
//! and error reporting live in [`crate::provision`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::resource::LockTableSpec;
use crate::settings::SseAlgorithm;

/// One remote step of the provisioning run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateBucket,
    EnableVersioning,
    EnableEncryption,
    CreateTable,
    WaitForTable,
}

impl Step {
    /// Human-readable description used in progress output
    pub fn description(&self) -> &'static str {
        match self {
            Step::CreateBucket => "Creating S3 bucket",
            Step::EnableVersioning => "Enabling versioning",
            Step::EnableEncryption => "Enabling server-side encryption",
            Step::CreateTable => "Creating DynamoDB table",
            Step::WaitForTable => "Waiting for table to become active",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error returned by a provider call
///
/// `message` carries the provider-supplied error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{resource}] {step} failed: {message}")]
pub struct ProviderError {
    pub resource: String,
    pub step: Step,
    pub message: String,
}

impl ProviderError {
    pub fn new(resource: impl Into<String>, step: Step, message: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            step,
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Object-storage calls needed for the state bucket
#[async_trait]
pub trait BucketApi: Send + Sync {
    /// Create the bucket in `region`
    async fn create_bucket(&self, name: &str, region: &str) -> ProviderResult<()>;

    /// Turn on object versioning
    async fn enable_versioning(&self, name: &str) -> ProviderResult<()>;

    /// Set the default server-side encryption rule
    async fn enable_encryption(&self, name: &str, algorithm: SseAlgorithm) -> ProviderResult<()>;
}

/// Key-value-table calls needed for the lock table
#[async_trait]
pub trait LockTableApi: Send + Sync {
    /// Issue the create-table call
    async fn create_table(&self, spec: &LockTableSpec) -> ProviderResult<()>;

    /// Block until the table reports active, or `max_wait` elapses
    async fn wait_until_active(&self, name: &str, max_wait: Duration) -> ProviderResult<()>;
}

/// Receiver for provisioning progress events
pub trait Progress: Send + Sync {
    /// A remote step is about to run
    fn step_started(&self, resource: &str, step: Step);

    /// A remote step completed
    fn step_succeeded(&self, resource: &str, step: Step);

    /// All steps for a resource completed
    fn resource_ready(&self, resource: &str);

    /// A step failed; no further steps run for this resource
    fn resource_failed(&self, error: &ProviderError);
}

/// Progress sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn step_started(&self, _resource: &str, _step: Step) {}
    fn step_succeeded(&self, _resource: &str, _step: Step) {}
    fn resource_ready(&self, _resource: &str) {}
    fn resource_failed(&self, _error: &ProviderError) {}
}
