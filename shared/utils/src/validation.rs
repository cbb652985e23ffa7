use crate::error::{ApiError, ApiResult};
use validator::{Validate, ValidationErrors};

/// Validates an insert payload at the API boundary, translating the
/// field-level errors into one [`ApiError::Validation`].
pub fn validate_model<T: Validate>(model: &T) -> ApiResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(ApiError::validation("payload", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match error.message.as_deref() {
                Some(message) => message.to_string(),
                None => match &*error.code {
                    "email" => format!("Invalid email format for field '{}'", field),
                    "length" => format!("Length validation failed for field '{}'", field),
                    "range" => format!("Value out of range for field '{}'", field),
                    code => format!("Validation failed for field '{}': {}", field, code),
                },
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn valid_payload_passes() {
        let payload = Payload {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
        };
        assert!(validate_model(&payload).is_ok());
    }

    #[test]
    fn invalid_payload_becomes_validation_error() {
        let payload = Payload {
            name: String::new(),
            email: "nope".to_string(),
        };
        let error = validate_model(&payload).unwrap_err();
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);
    }

    #[test]
    fn custom_messages_surface_in_output() {
        let payload = Payload {
            name: String::new(),
            email: "visitor@example.com".to_string(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(format_validation_errors(&errors).contains("Name is required"));
    }
}
