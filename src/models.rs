use salvo::oapi::ToSchema;
use serde::Serialize;

/// Response body for `GET /users/<id>`.
///
/// Instances are built fresh per response; the declaration itself is the
/// single source for both serialization and the OpenAPI component schema.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[salvo(schema(name = "User"))]
pub struct User {
    #[salvo(schema(example = "123"))]
    pub id: String,
    #[salvo(schema(example = "John Doe"))]
    pub name: String,
    #[salvo(schema(example = 42))]
    pub age: u32,
}
