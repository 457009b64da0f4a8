//! Shared helpers for the API layer.
//!
//! Covers the two intake concerns every JSON endpoint has: unwrapping the
//! body extraction with the right error for each failure mode, and turning a
//! failed schema check into the structured field list of the error contract.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use crate::errors::{FieldError, ServiceError, ServiceResult};

/// Rejects a body extraction whose request declared the wrong content type.
///
/// Kept separate from [`json_body`] so update handlers can apply it before
/// their existence check.
pub fn require_json_content_type<T>(body: &Result<Json<T>, JsonRejection>) -> ServiceResult<()> {
    if matches!(body, Err(JsonRejection::MissingJsonContentType(_))) {
        return Err(ServiceError::unsupported_media_type(
            "Content-Type must be application/json",
        ));
    }
    Ok(())
}

/// Unwraps an extracted JSON body.
///
/// A missing or wrong `Content-Type` outranks everything else; a body that
/// does not parse, or parses to something other than the expected object
/// shape, is reported as bad data.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ServiceResult<T> {
    require_json_content_type(&body)?;

    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::JsonDataError(_)) => Err(ServiceError::bad_data(
            "Body of request contained bad or no data",
        )),
        Err(JsonRejection::JsonSyntaxError(_)) => {
            Err(ServiceError::bad_data("Request body is not valid JSON"))
        }
        Err(rejection) => Err(ServiceError::bad_data(rejection.body_text())),
    }
}

/// Runs the schema check on a payload, collecting every missing or invalid
/// field into the structured error list.
pub fn validate_payload<T: Validate>(payload: &T) -> ServiceResult<()> {
    payload.validate().map_err(|errors| {
        ServiceError::validation_fields(
            "Invalid Account: missing or invalid fields",
            validation_errors_to_field_errors(errors),
        )
    })
}

/// Converts validator errors into per-field messages.
pub fn validation_errors_to_field_errors(errors: validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountData;

    #[test]
    fn schema_failures_list_every_field() {
        let payload: AccountData = serde_json::from_value(serde_json::json!({})).unwrap();

        let err = validate_payload(&payload).unwrap_err();
        match err {
            ServiceError::Validation { fields, .. } => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert!(names.contains(&"name"));
                assert!(names.contains(&"email"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn field_messages_come_from_the_schema() {
        let payload: AccountData =
            serde_json::from_value(serde_json::json!({"name": "", "email": "a@b.c"})).unwrap();

        let fields =
            validation_errors_to_field_errors(payload.validate().unwrap_err());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "name");
        assert_eq!(fields[0].message, "Name must not be empty");
    }

    #[test]
    fn valid_payload_passes() {
        let payload: AccountData = serde_json::from_value(serde_json::json!({
            "name": "Kim",
            "email": "kim@example.com"
        }))
        .unwrap();

        assert!(validate_payload(&payload).is_ok());
    }
}
