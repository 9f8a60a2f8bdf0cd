use anyhow::Context;
use ecskit_infrastructure::dns::ecs::{extract_a, format_subnet};
use ecskit_infrastructure::dns::forwarding::ResponseParser;
use hickory_proto::rr::RData;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

/// Decodes a wire-format message from `path` and renders its A records and
/// client subnet.
pub fn inspect(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response = ResponseParser::parse(&bytes)?;

    info!(
        file = %path.display(),
        bytes = bytes.len(),
        "Message decoded"
    );

    let mut out = String::new();
    write!(
        out,
        "id: {} rcode: {}",
        response.message.id(),
        ResponseParser::rcode_to_status(response.rcode)
    )?;
    if response.is_nodata() {
        out.push_str(" (NODATA)");
    }
    if response.truncated {
        out.push_str(" (truncated)");
    }
    out.push('\n');

    for record in extract_a(Some(&response.message)) {
        if let RData::A(a) = record.data() {
            writeln!(out, "{} {} A {}", record.name(), record.ttl(), a.0)?;
        }
    }

    let subnet = format_subnet(Some(&response.message));
    let subnet = if subnet.is_empty() { "-" } else { subnet.as_str() };
    write!(out, "subnet: {}", subnet)?;

    Ok(out)
}
