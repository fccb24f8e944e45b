use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The issue footer must carry the ticket placeholder
    let footer = table
        .get("issue")
        .and_then(|issue| issue.get("footer"))
        .and_then(|footer| footer.as_str())
        .unwrap_or_default();
    if !footer.contains("{{TICKET}}") {
        panic!("default_config.toml: issue.footer must contain {{{{TICKET}}}}");
    }
}
