//! Request handlers for the video proxy actions.

pub mod actions;
pub mod download;
pub mod info;
pub mod search;

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;
use vidfetch_core::AppError;

/// Deserialize and validate an action body that already parsed as JSON.
/// Both failure modes become 400s with field-level detail.
pub(crate) fn parse_body<T>(payload: Value, schema_name: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_value(payload).map_err(|e| AppError::Validation {
        message: format!("Request body does not match the {} schema", schema_name),
        details: serde_json::json!({ "message": e.to_string() }),
    })?;

    request.validate().map_err(|e| AppError::Validation {
        message: "Validation failed".to_string(),
        details: serde_json::to_value(&e).unwrap_or(Value::Null),
    })?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidfetch_core::models::{LookupRequest, SearchRequest};

    #[test]
    fn test_parse_body_applies_defaults() {
        let request: SearchRequest =
            parse_body(serde_json::json!({"keyword": "rust"}), "search").expect("valid");
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 20);
    }

    #[test]
    fn test_parse_body_missing_field_names_it() {
        let err = parse_body::<SearchRequest>(serde_json::json!({}), "search").unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert!(details["message"].as_str().unwrap_or("").contains("keyword"));
            }
            _ => panic!("Expected Validation variant"),
        }
    }

    #[test]
    fn test_parse_body_invalid_url_has_field_details() {
        let err = parse_body::<LookupRequest>(serde_json::json!({"url": "not-a-url"}), "lookup")
            .unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert!(details.get("url").is_some());
            }
            _ => panic!("Expected Validation variant"),
        }
    }
}
