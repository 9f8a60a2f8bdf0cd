use ecskit_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    debug!(
        config_file = config_path.unwrap_or("default"),
        log_level = %config.logging.level,
        default_subnet = %config.ecs.default_subnet,
        "Configuration loaded"
    );

    Ok(config)
}
