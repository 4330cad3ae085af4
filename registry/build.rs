use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const STATUS_CODES_TOML: &str = "status_codes.toml";
const STATUS_TABLE_GENERATED_FILE: &str = "status_table.rs";

const MIN_CODE: u16 = 100;
const MAX_CODE: u16 = 599;

fn main() {
    generate_status_table();
}

#[derive(Deserialize)]
struct StatusConfig {
    status: Vec<StatusRecord>,
}

#[derive(Deserialize)]
struct StatusRecord {
    name: String,
    code: u16,
    origin: String,
    description: String,
}

/// A record that passed validation, with its `Origin` variant resolved.
struct ValidatedRecord<'a> {
    record: &'a StatusRecord,
    origin_variant: &'static str,
}

fn generate_status_table() {
    // Read configuration file
    let config_path = PathBuf::from(STATUS_CODES_TOML);
    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {STATUS_CODES_TOML}: {e}"));

    let config: StatusConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Failed to parse {STATUS_CODES_TOML}: {e}"));

    let validated = validate_records(&config.status);

    let code = generate_rust_code(&validated);

    // Write to OUT_DIR
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let dest_path = out_dir.join(STATUS_TABLE_GENERATED_FILE);
    fs::write(&dest_path, code)
        .unwrap_or_else(|e| panic!("Failed to write {STATUS_TABLE_GENERATED_FILE}: {e}"));

    // Rebuild if data changes
    println!("cargo:rerun-if-changed={STATUS_CODES_TOML}");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Map an origin tag from the data file to its `Origin` variant.
fn origin_variant(origin: &str) -> Option<&'static str> {
    match origin {
        "iana" => Some("Iana"),
        "unofficial" => Some("Unofficial"),
        "nginx" => Some("Nginx"),
        "microsoft" => Some("Microsoft"),
        "twitter" => Some("Twitter"),
        "arcgis" => Some("ArcGis"),
        "cloudflare" => Some("Cloudflare"),
        _ => None,
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Validate records before any code is emitted
fn validate_records(records: &[StatusRecord]) -> Vec<ValidatedRecord<'_>> {
    if records.is_empty() {
        panic!("{STATUS_CODES_TOML} defines no status codes");
    }

    let mut seen = HashSet::with_capacity(records.len());
    let mut validated = Vec::with_capacity(records.len());

    for record in records {
        if !is_valid_name(&record.name) {
            panic!(
                "Invalid status name '{}': expected UPPER_SNAKE_CASE",
                record.name
            );
        }

        if !seen.insert(record.name.as_str()) {
            panic!(
                "Duplicate status name '{}': names must be unique",
                record.name
            );
        }

        if !(MIN_CODE..=MAX_CODE).contains(&record.code) {
            panic!(
                "Status '{}' has code {} outside {MIN_CODE}..={MAX_CODE}",
                record.name, record.code
            );
        }

        if record.description.trim().is_empty() {
            panic!("Status '{}' has an empty description", record.name);
        }

        let origin_variant = origin_variant(&record.origin).unwrap_or_else(|| {
            panic!(
                "Status '{}' has unknown origin '{}'",
                record.name, record.origin
            )
        });

        validated.push(ValidatedRecord {
            record,
            origin_variant,
        });
    }

    validated
}

/// Generate the static table and the per-name constants
fn generate_rust_code(records: &[ValidatedRecord<'_>]) -> String {
    let mut code = String::new();

    // Header
    code.push_str("// Generated by build.rs - DO NOT EDIT\n");
    code.push_str("// Source: status_codes.toml\n\n");

    // STATUS_TABLE in file order; from_const rejects a bad code at compile time
    code.push_str("/// Every registered status, in data file order.\n");
    code.push_str(&format!(
        "pub static STATUS_TABLE: [StatusEntry; {}] = [\n",
        records.len()
    ));
    for ValidatedRecord {
        record,
        origin_variant,
    } in records
    {
        code.push_str(&format!(
            "    StatusEntry {{ name: {:?}, status: HttpStatusCode::from_const({}), origin: Origin::{}, description: {:?} }},\n",
            record.name, record.code, origin_variant, record.description
        ));
    }
    code.push_str("];\n\n");

    // names module with one constant per status
    code.push_str("/// Named constants, one per registered status.\n");
    code.push_str("pub mod names {\n");
    for ValidatedRecord { record, .. } in records {
        code.push_str(&format!("    #[doc = {:?}]\n", record.description));
        code.push_str(&format!(
            "    pub const {}: u16 = {};\n",
            record.name, record.code
        ));
    }
    code.push_str("}\n");

    code
}
