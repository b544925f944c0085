use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

mod addr;
mod alloc;
mod config;
mod config_loader;
mod orchestrator;
mod report;

/// VLSM subnet planning utility for IPv4 address blocks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the plan configuration YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory for the generated plan files
    #[arg(short, long, default_value = "plan_output")]
    output: PathBuf,

    /// Validate the configuration and exit without planning
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting vlsmplan");
    info!("Configuration file: {:?}", args.config);

    let plan_config = config_loader::load_config(&args.config)?;

    if args.check {
        info!("Configuration is valid");
        return Ok(());
    }

    let plan = orchestrator::generate_plan(&plan_config)
        .wrap_err("Subnet plan generation failed")?;

    // Placement trouble is advisory: the plan is still emitted for the
    // requests that fit
    if !plan.diagnostics.is_empty() {
        warn!(
            "{} request(s) could not be placed in {}/{}; see the report for details",
            plan.diagnostics.len(),
            plan.base_network,
            plan.base_prefix
        );
    }

    fs::create_dir_all(&args.output)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", args.output.display()))?;
    orchestrator::write_plan_files(&plan, &args.output)?;

    println!("{}", report::render_plan(&plan));
    info!("Plan written to {:?}", args.output);

    Ok(())
}
