use salvo::oapi::ToSchema;
use salvo::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::User;

/// Minimum number of characters a user id must have.
pub(crate) const MIN_ID_CHARS: usize = 3;

const USER_NAME: &str = "Ultra-man";
const USER_AGE: u32 = 20;

#[derive(Debug, PartialEq, Error)]
pub(crate) enum ParamError {
    #[error("`{field}` must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("`{field}` is missing")]
    Missing { field: &'static str },
}

impl ParamError {
    fn field(&self) -> &'static str {
        match self {
            ParamError::TooShort { field, .. } => field,
            ParamError::Missing { field } => field,
        }
    }

    fn constraint(&self) -> &'static str {
        match self {
            ParamError::TooShort { .. } => "min_length",
            ParamError::Missing { .. } => "required",
        }
    }
}

/// Machine-readable body rendered for every 400 validation failure.
#[derive(Serialize, ToSchema)]
#[salvo(schema(name = "ValidationError"))]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: &'static str,
    pub message: String,
}

impl From<&ParamError> for ValidationError {
    fn from(err: &ParamError) -> Self {
        ValidationError {
            field: err.field(),
            constraint: err.constraint(),
            message: err.to_string(),
        }
    }
}

/// Check that a raw `id` path parameter satisfies the schema constraints.
///
/// Length is counted in characters, not bytes, so multibyte ids are not
/// rejected early.
pub(crate) fn validate_user_id(raw: &str) -> Result<(), ParamError> {
    if raw.chars().count() < MIN_ID_CHARS {
        return Err(ParamError::TooShort {
            field: "id",
            min: MIN_ID_CHARS,
        });
    }
    Ok(())
}

/// Retrieve a user by id
#[endpoint(
    tags("users"),
    parameters(
        ("id" = String, description = "User ID, at least 3 characters", example = "1212121")
    ),
    responses(
        (status_code = 200, body = User, description = "Retrieve the user"),
        (status_code = 400, body = ValidationError, description = "Invalid user ID")
    )
)]
pub async fn get_user(req: &mut Request, res: &mut Response) {
    let id = match req.param::<String>("id") {
        Some(id) => id,
        None => {
            let err = ParamError::Missing { field: "id" };
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ValidationError::from(&err)));
            return;
        }
    };

    if let Err(err) = validate_user_id(&id) {
        debug!("rejecting user id {id:?}: {err}");
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(ValidationError::from(&err)));
        return;
    }

    // The id is echoed; name and age are fixed demo values.
    res.render(Json(User {
        id,
        name: USER_NAME.to_string(),
        age: USER_AGE,
    }));
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod users_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_min_length_is_accepted() {
        assert_eq!(validate_user_id("abc"), Ok(()));
    }

    #[test]
    fn test_longer_than_min_length_is_accepted() {
        assert_eq!(validate_user_id("1212121"), Ok(()));
    }

    #[test]
    fn test_two_characters_are_rejected() {
        assert_eq!(
            validate_user_id("ab"),
            Err(ParamError::TooShort {
                field: "id",
                min: MIN_ID_CHARS
            })
        );
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert_eq!(
            validate_user_id(""),
            Err(ParamError::TooShort {
                field: "id",
                min: MIN_ID_CHARS
            })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Three characters, six bytes.
        assert_eq!(validate_user_id("åäö"), Ok(()));
        // Two characters, four bytes.
        assert_eq!(
            validate_user_id("åä"),
            Err(ParamError::TooShort {
                field: "id",
                min: MIN_ID_CHARS
            })
        );
    }

    #[test]
    fn test_validation_error_body_names_field_and_constraint() {
        let err = ParamError::TooShort {
            field: "id",
            min: MIN_ID_CHARS,
        };
        let body = ValidationError::from(&err);
        assert_eq!(body.field, "id");
        assert_eq!(body.constraint, "min_length");
        assert!(body.message.contains("at least 3"));
    }
}
