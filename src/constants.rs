//! Common constants used throughout apigen.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["apigen.json", "apigen.yml", "apigen.yaml"];

/// API definition read when the configuration does not name one
pub const DEFAULT_INPUT: &str = "api.json";

/// Services passed to templates when the configuration does not list any
pub const DEFAULT_SERVICES: [&str; 2] = ["auth", "payments"];

/// Default tasks as (template, output, format) triples
pub const DEFAULT_TASKS: [(&str, &str, bool); 3] = [
    ("templates/consoleweb.rs.j2", "satellite/console/consoleweb/api.rs", true),
    ("templates/consoleapi.rs.j2", "satellite/console/consoleweb/consoleapi/api.rs", true),
    ("templates/web.ts.j2", "web/satellite/src/api/api.ts", false),
];
