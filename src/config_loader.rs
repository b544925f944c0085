use crate::config::PlanConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse a plan configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<PlanConfig> {
    info!("Loading plan configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Cannot open configuration file {:?}", config_path))?;

    let config: PlanConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Cannot parse configuration file {:?}", config_path))?;

    // Validate the configuration before handing it to the allocator
    config.validate()?;

    info!(
        "Loaded plan: base {}/{}, {} subnet request(s), {} link(s)",
        config.network.base_address,
        config.network.prefix,
        config.subnets.len(),
        config.links
    );

    Ok(config)
}
