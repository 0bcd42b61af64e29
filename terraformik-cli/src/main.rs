mod progress;

use clap::Parser;
use colored::Colorize;

use terraformik_core::pipeline::{self, ProvisionOutcome};
use terraformik_core::request::ProvisioningRequest;
use terraformik_core::resource::BackendPlan;
use terraformik_core::settings::{DEFAULT_READ_CAPACITY, DEFAULT_WRITE_CAPACITY, ProvisionSettings};
use terraformik_provider_aws::AwsProvider;

use crate::progress::ConsoleProgress;

/// State object key suggested in the printed backend block
const STATE_KEY: &str = "terraform.tfstate";

#[derive(Parser, Debug)]
#[command(name = "terraformik")]
#[command(
    about = "Provision an S3 bucket and DynamoDB lock table for a Terraform backend",
    long_about = None
)]
struct Cli {
    /// Application name (lowercase letters, numbers, and hyphens only)
    #[arg(short, long, default_value = "myapp")]
    app_name: String,

    /// Environment name (dev, staging, prod)
    #[arg(short, long, default_value = "dev")]
    environment: String,

    /// AWS region
    #[arg(short, long, default_value = "us-east-1")]
    region: String,

    /// Provisioned read capacity units for the lock table
    #[arg(long, default_value_t = DEFAULT_READ_CAPACITY, value_parser = clap::value_parser!(i64).range(1..))]
    read_capacity: i64,

    /// Provisioned write capacity units for the lock table
    #[arg(long, default_value_t = DEFAULT_WRITE_CAPACITY, value_parser = clap::value_parser!(i64).range(1..))]
    write_capacity: i64,

    /// Show what would be created without calling AWS
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> ProvisionSettings {
        ProvisionSettings::default().with_throughput(self.read_capacity, self.write_capacity)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let code = run(&cli).await;
    std::process::exit(code);
}

fn init_logger(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(verbose)),
    )
    .init();
}

/// Provisioning failures are already printed by `ConsoleProgress`; the
/// logger only adds detail when asked to.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

async fn run(cli: &Cli) -> i32 {
    // Both inputs are checked before any AWS client exists
    let request = match ProvisioningRequest::new(&cli.app_name, &cli.environment, &cli.region) {
        Ok(request) => request,
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            return ProvisionOutcome::ValidationFailed(e).exit_code();
        }
    };

    let settings = cli.settings();
    let plan = BackendPlan::new(&request, &settings);

    if cli.dry_run {
        print_plan(&plan);
        return 0;
    }

    log::debug!("loading AWS configuration for {}", request.region);
    let provider = AwsProvider::new(&request.region).await;

    let outcome =
        pipeline::provision(&request, &settings, &provider, &provider, &ConsoleProgress).await;
    report(&request, &plan, &outcome);
    outcome.exit_code()
}

fn print_plan(plan: &BackendPlan) {
    println!("{}", "Provisioning Plan:".cyan().bold());
    println!();
    for line in plan.to_string().lines() {
        if line.starts_with(' ') {
            println!("  {}", line);
        } else {
            println!("  {} {}", "+".green().bold(), line.bold());
        }
    }
    println!();
    println!("{}", "Dry run: no resources were created.".yellow());
}

fn summary_line(request: &ProvisioningRequest, outcome: &ProvisionOutcome) -> String {
    if outcome.is_success() {
        format!(
            "Provisioning completed successfully for {} in {} environment!",
            request.app_name, request.environment
        )
    } else {
        format!(
            "Provisioning failed ({}). Please check the errors above.",
            outcome
        )
    }
}

fn report(request: &ProvisioningRequest, plan: &BackendPlan, outcome: &ProvisionOutcome) {
    let summary = summary_line(request, outcome);
    println!();
    if outcome.is_success() {
        println!("{}", summary.green().bold());
        println!();
        println!("{}", "Backend configuration:".cyan().bold());
        print!(
            "{}",
            plan.names()
                .terraform_backend_block(&request.region, STATE_KEY)
        );
    } else {
        println!("{}", summary.red().bold());
    }
}
