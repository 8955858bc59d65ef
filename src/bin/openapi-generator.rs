//! Print the aggregated OpenAPI document as pretty JSON on stdout.

use games_catalog_back::services::documentation::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let doc = ApiDoc::openapi();
    println!("{}", doc.to_pretty_json().unwrap());
}
