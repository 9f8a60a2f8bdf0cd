use anyhow::{bail, Context};
use ecskit_domain::{parse_subnet, ClientSubnet, Config, RecordType};
use ecskit_infrastructure::dns::forwarding::MessageBuilder;
use std::path::Path;
use tracing::info;

/// Writes a wire-format query to `out`. Without an explicit subnet the
/// configured `ecs.default_subnet` is used.
pub fn build_query(
    config: &Config,
    domain: &str,
    record_type: &str,
    subnet: Option<&str>,
    out: &Path,
) -> anyhow::Result<String> {
    let record_type: RecordType = record_type.parse().map_err(anyhow::Error::msg)?;
    if !record_type.is_queryable() {
        bail!("{} cannot be used as a query type", record_type);
    }

    let subnet: Option<ClientSubnet> = match subnet {
        Some(s) => parse_subnet(s)?,
        None => config.ecs.subnet()?,
    };

    let (id, bytes) =
        MessageBuilder::build_query_with_subnet(domain, &record_type, subnet.as_ref())?;

    std::fs::write(out, &bytes)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    info!(
        id = id,
        domain = domain,
        record_type = %record_type,
        file = %out.display(),
        "Query written"
    );

    let subnet = subnet.map_or_else(|| "-".to_string(), |s| s.to_string());
    Ok(format!(
        "id: {} {} {} subnet: {} ({} bytes)",
        id,
        domain,
        record_type,
        subnet,
        bytes.len()
    ))
}
