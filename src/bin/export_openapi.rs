//! Export the OpenAPI specification as JSON to stdout.
//!
//! Run via: `cargo run --bin export_openapi > openapi.json`
//!
//! Uses the same builder as the `/doc` route, so the exported document is
//! byte-for-byte what the server would serve.

use my_api::routes::docs::build_openapi;

fn main() {
    let json =
        serde_json::to_string_pretty(&build_openapi()).expect("Failed to serialize OpenAPI spec");
    println!("{json}");
}
