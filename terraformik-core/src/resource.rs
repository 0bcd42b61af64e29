//! Desired shape of the two backend resources

use std::fmt;

use crate::naming::BackendNames;
use crate::request::ProvisioningRequest;
use crate::settings::{ProvisionSettings, SseAlgorithm};

/// The state bucket to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSpec {
    pub name: String,
    pub region: String,
    pub encryption: SseAlgorithm,
}

/// Provisioned throughput for the lock table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

/// The lock table to create
///
/// The table has a single string hash key; no sort key, no secondary indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockTableSpec {
    pub name: String,
    pub hash_key: String,
    pub throughput: Throughput,
}

/// Both resources for one provisioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPlan {
    pub bucket: BucketSpec,
    pub table: LockTableSpec,
}

impl BackendPlan {
    pub fn new(request: &ProvisioningRequest, settings: &ProvisionSettings) -> Self {
        let names = BackendNames::derive_with(&request.app_name, request.environment, settings);
        Self {
            bucket: BucketSpec {
                name: names.bucket,
                region: request.region.clone(),
                encryption: settings.sse_algorithm,
            },
            table: LockTableSpec {
                name: names.table,
                hash_key: settings.lock_key.clone(),
                throughput: Throughput {
                    read_capacity_units: settings.read_capacity,
                    write_capacity_units: settings.write_capacity,
                },
            },
        }
    }

    pub fn names(&self) -> BackendNames {
        BackendNames {
            bucket: self.bucket.name.clone(),
            table: self.table.name.clone(),
        }
    }
}

impl fmt::Display for BackendPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "s3 bucket {}", self.bucket.name)?;
        writeln!(f, "    region      = {}", self.bucket.region)?;
        writeln!(f, "    versioning  = Enabled")?;
        writeln!(f, "    encryption  = {}", self.bucket.encryption.as_str())?;
        writeln!(f, "dynamodb table {}", self.table.name)?;
        writeln!(f, "    hash_key    = {} (S)", self.table.hash_key)?;
        write!(
            f,
            "    throughput  = {} read / {} write",
            self.table.throughput.read_capacity_units, self.table.throughput.write_capacity_units
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_request() {
        let request = ProvisioningRequest::new("shop", "staging", "eu-west-1").unwrap();
        let plan = BackendPlan::new(&request, &ProvisionSettings::default());

        assert_eq!(plan.bucket.name, "shop-staging-terraformik-state");
        assert_eq!(plan.bucket.region, "eu-west-1");
        assert_eq!(plan.bucket.encryption, SseAlgorithm::Aes256);

        assert_eq!(plan.table.name, "shop-staging-terraformik-locks");
        assert_eq!(plan.table.hash_key, "LockID");
        assert_eq!(
            plan.table.throughput,
            Throughput {
                read_capacity_units: 5,
                write_capacity_units: 5
            }
        );
    }

    #[test]
    fn test_plan_display() {
        let request = ProvisioningRequest::new("acme", "prod", "us-east-1").unwrap();
        let plan = BackendPlan::new(&request, &ProvisionSettings::default().with_throughput(1, 2));
        let rendered = plan.to_string();

        assert!(rendered.contains("s3 bucket acme-prod-terraformik-state"));
        assert!(rendered.contains("versioning  = Enabled"));
        assert!(rendered.contains("encryption  = AES256"));
        assert!(rendered.contains("dynamodb table acme-prod-terraformik-locks"));
        assert!(rendered.contains("throughput  = 1 read / 2 write"));
    }
}
