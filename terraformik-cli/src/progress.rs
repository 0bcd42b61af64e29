//! Console output for provisioning progress

use colored::Colorize;
use terraformik_core::provider::{Progress, ProviderError, Step};

/// Prints each step to stdout as it runs
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn step_started(&self, resource: &str, step: Step) {
        println!("{}", started_line(resource, step).cyan());
    }

    fn step_succeeded(&self, _resource: &str, step: Step) {
        println!("  {} {}", "✓".green(), step.description());
    }

    fn resource_ready(&self, resource: &str) {
        println!(
            "{}",
            format!("Successfully created and configured {}", resource).green()
        );
    }

    fn resource_failed(&self, error: &ProviderError) {
        println!("  {} {}", "✗".red(), failure_line(error));
        println!(
            "{}",
            format!("Error provisioning {}: {}", error.resource, error.message).red()
        );
    }
}

fn failure_line(error: &ProviderError) -> String {
    format!(
        "{} {} - {}",
        error.step.description(),
        error.resource,
        error.message
    )
}

fn started_line(resource: &str, step: Step) -> String {
    match step {
        Step::CreateBucket | Step::CreateTable => {
            format!("{} {}...", step.description(), resource)
        }
        _ => format!("{}...", step.description()),
    }
}
