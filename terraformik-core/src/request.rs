//! Provisioning request and input validation

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static APP_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("app name pattern is valid"));

/// Errors raised while validating user input
///
/// These are detected locally, before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The application name contains characters outside `[a-z0-9-]`
    #[error(
        "App name must contain only lowercase letters, numbers, and hyphens (got {0:?})"
    )]
    InvalidAppName(String),

    /// The environment is not one of the supported environments
    #[error("Environment must be one of: {} (got {got:?})", Environment::NAMES.join(", "))]
    InvalidEnvironment { got: String },
}

/// A validated application name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_app_name(s)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// Accepted environment names, in display order
    pub const NAMES: [&'static str; 3] = ["dev", "staging", "prod"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_environment(s)
    }
}

/// Validate an application name
///
/// The whole string must match `[a-z0-9-]+`; the empty string is rejected.
pub fn validate_app_name(name: &str) -> Result<AppName, ValidationError> {
    if APP_NAME_PATTERN.is_match(name) {
        Ok(AppName(name.to_string()))
    } else {
        Err(ValidationError::InvalidAppName(name.to_string()))
    }
}

/// Validate an environment name
///
/// Matching is exact: no trimming, no case folding.
pub fn validate_environment(env: &str) -> Result<Environment, ValidationError> {
    match env {
        "dev" => Ok(Environment::Dev),
        "staging" => Ok(Environment::Staging),
        "prod" => Ok(Environment::Prod),
        other => Err(ValidationError::InvalidEnvironment {
            got: other.to_string(),
        }),
    }
}

/// A fully validated provisioning request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningRequest {
    pub app_name: AppName,
    pub environment: Environment,
    pub region: String,
}

impl ProvisioningRequest {
    /// Validate raw inputs into a request
    ///
    /// The app name is checked first, then the environment.
    pub fn new(
        app_name: &str,
        environment: &str,
        region: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let app_name = validate_app_name(app_name)?;
        let environment = validate_environment(environment)?;
        Ok(Self {
            app_name,
            environment,
            region: region.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_app_names_are_returned_unchanged() {
        for name in ["myapp", "shop", "a", "my-app-2", "123", "-", "a--b"] {
            let app = validate_app_name(name).unwrap();
            assert_eq!(app.as_str(), name);
        }
    }

    #[test]
    fn test_invalid_app_names_are_rejected() {
        for name in ["", "Shop", "Shop!", "my_app", "my app", " myapp", "myapp\n", "app.name"] {
            assert_eq!(
                validate_app_name(name),
                Err(ValidationError::InvalidAppName(name.to_string())),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_environments() {
        assert_eq!(validate_environment("dev"), Ok(Environment::Dev));
        assert_eq!(validate_environment("staging"), Ok(Environment::Staging));
        assert_eq!(validate_environment("prod"), Ok(Environment::Prod));
    }

    #[test]
    fn test_environment_roundtrips_through_display() {
        for name in Environment::NAMES {
            let env: Environment = name.parse().unwrap();
            assert_eq!(env.to_string(), name);
        }
    }

    #[test]
    fn test_invalid_environments_are_rejected() {
        for env in ["", "Dev", "PROD", "production", "test", " dev"] {
            assert!(validate_environment(env).is_err(), "{env:?} should be rejected");
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = validate_environment("qa").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment must be one of: dev, staging, prod (got \"qa\")"
        );

        let err = validate_app_name("Shop!").unwrap_err();
        assert!(err.to_string().starts_with(
            "App name must contain only lowercase letters, numbers, and hyphens"
        ));
    }

    #[test]
    fn test_request_checks_app_name_before_environment() {
        let err = ProvisioningRequest::new("Bad_Name", "nope", "us-east-1").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAppName(_)));
    }

    #[test]
    fn test_request_new() {
        let request = ProvisioningRequest::new("shop", "staging", "eu-west-1").unwrap();
        assert_eq!(request.app_name.as_str(), "shop");
        assert_eq!(request.environment, Environment::Staging);
        assert_eq!(request.region, "eu-west-1");
    }
}
