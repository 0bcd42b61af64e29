//! Terraformik Core
//!
//! Provisioning of a Terraform remote state backend: a versioned, encrypted
//! object-storage bucket for state files and a key-value table for state locks.
//!
//! # Overview
//!
//! - **request**: validation of the app name and environment
//! - **naming**: derivation of the bucket and table names
//! - **provider**: traits for the remote calls, implemented per cloud
//! - **provision**: the bucket and lock-table provisioners
//! - **pipeline**: runs both provisioners and aggregates the outcome
//!
//! # Example
//!
//! ```ignore
//! use terraformik_core::{pipeline, ProvisionSettings};
//!
//! let outcome = pipeline::run(
//!     "shop", "staging", "eu-west-1",
//!     &ProvisionSettings::default(),
//!     &buckets, &tables, &progress,
//! ).await;
//! std::process::exit(outcome.exit_code());
//! ```

pub mod naming;
pub mod pipeline;
pub mod provider;
pub mod provision;
pub mod request;
pub mod resource;
pub mod settings;

#[cfg(test)]
mod mock;

pub use naming::BackendNames;
pub use pipeline::ProvisionOutcome;
pub use provider::{BucketApi, LockTableApi, Progress, ProviderError, ProviderResult, Step};
pub use request::{AppName, Environment, ProvisioningRequest, ValidationError};
pub use resource::{BackendPlan, BucketSpec, LockTableSpec, Throughput};
pub use settings::{ProvisionSettings, SseAlgorithm};
