use salvo::prelude::*;

/// Liveness probe. Uses `#[handler]` so it stays out of the OpenAPI document.
#[handler]
pub async fn health_check(res: &mut Response) {
    res.status_code(StatusCode::OK);
    res.render(Text::Plain("OK"));
}
