use salvo::oapi::OpenApi;
use salvo::prelude::*;

use super::create_docs_router;

/// Swagger UI page. Loads a pinned swagger-ui-dist build and points it at
/// the document endpoint. Served inline so the exact `/ui` path answers 200
/// instead of a trailing-slash redirect.
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>My API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: '/doc',
        dom_id: '#swagger-ui',
      });
    };
  </script>
</body>
</html>
"#;

/// Build the OpenAPI document served at `/doc`.
///
/// The generator stamps its own `openapi` version on the document; the
/// published contract is OpenAPI 3.0.0, so the field is pinned after
/// serialization.
pub fn build_openapi() -> serde_json::Value {
    let router = create_docs_router();
    let doc = OpenApi::new("My API", "1.0.0").merge_router(&router);
    let mut json = serde_json::to_value(&doc).expect("Failed to serialize OpenAPI spec");
    json["openapi"] = serde_json::Value::String("3.0.0".to_string());
    json
}

/// Serve the OpenAPI document as JSON.
///
/// The source route table never changes after startup, so rebuilding per
/// request is only a serialization cost.
#[handler]
pub async fn openapi_doc(res: &mut Response) {
    res.render(Json(build_openapi()));
}

/// Serve the Swagger UI page at `/ui`.
#[handler]
pub async fn swagger_ui_page(res: &mut Response) {
    res.render(Text::Html(SWAGGER_UI_HTML));
}

#[cfg(test)]
#[path = "docs_tests.rs"]
mod docs_tests;
