//! Resource name derivation

use crate::request::{AppName, Environment};
use crate::settings::ProvisionSettings;

/// Names of the two backend resources for one app/environment pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendNames {
    pub bucket: String,
    pub table: String,
}

impl BackendNames {
    /// Derive names with the default suffixes
    ///
    /// `acme` + `prod` gives `acme-prod-terraformik-state` and
    /// `acme-prod-terraformik-locks`.
    pub fn derive(app_name: &AppName, environment: Environment) -> Self {
        Self::derive_with(app_name, environment, &ProvisionSettings::default())
    }

    /// Derive names with the suffixes from `settings`
    pub fn derive_with(
        app_name: &AppName,
        environment: Environment,
        settings: &ProvisionSettings,
    ) -> Self {
        let prefix = format!("{}-{}", app_name, environment);
        Self {
            bucket: format!("{}-{}", prefix, settings.bucket_suffix),
            table: format!("{}-{}", prefix, settings.table_suffix),
        }
    }

    /// Render the Terraform `backend "s3"` block for these resources
    pub fn terraform_backend_block(&self, region: &str, state_key: &str) -> String {
        format!(
            r#"terraform {{
  backend "s3" {{
    bucket         = "{}"
    key            = "{}"
    region         = "{}"
    dynamodb_table = "{}"
    encrypt        = true
  }}
}}
"#,
            self.bucket, state_key, region, self.table
        )
    }
}
