use ecskit_domain::parse_subnet as parse;

/// Renders `address/netmask family=N` for a subnet string, or `no subnet`
/// for empty input.
pub fn parse_subnet(input: &str) -> anyhow::Result<String> {
    let rendered = match parse(input)? {
        Some(subnet) => format!("{} family={}", subnet, subnet.family().as_u16()),
        None => "no subnet".to_string(),
    };

    Ok(rendered)
}
