use serde_json::{Map, Value};

use crate::data_types::{DishCreated, DishInput, FieldErrors, FieldName};
use crate::errors::SubmitError;

pub mod dish_api;

/// Remote endpoint that stores dishes.
#[allow(async_fn_in_trait)]
pub trait DishApi {
    async fn create_dish(&self, dish: &DishInput) -> Result<DishCreated, SubmitError>;
}

/// Reads a failure body into per-field messages.
///
/// Anything other than a JSON object yields `None`. Keys that are not form
/// fields are dropped, non-string values are shown as their JSON text.
pub fn parse_field_errors(body: &str) -> Option<FieldErrors> {
    let object = serde_json::from_str::<Map<String, Value>>(body).ok()?;

    let mut field_errors = FieldErrors::new();
    for (key, value) in object {
        let Ok(field) = key.parse::<FieldName>() else {
            log::debug!("Ignoring error for unknown field '{}'", key);
            continue;
        };
        let message = match value {
            Value::String(message) => message,
            other => other.to_string(),
        };
        field_errors.insert(field, message);
    }

    Some(field_errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_messages_are_kept_verbatim() {
        let errors = parse_field_errors(r#"{"name": "already exists"}"#).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FieldName::Name], "already exists");
    }

    #[test]
    fn numbers_and_unknown_keys() {
        let errors =
            parse_field_errors(r#"{"no_of_slices": 0, "diameter": "too big", "colour": "red"}"#)
                .unwrap();
        assert_eq!(errors[&FieldName::NoOfSlices], "0");
        assert_eq!(errors[&FieldName::Diameter], "too big");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_object_is_structured_but_empty() {
        assert_eq!(parse_field_errors("{}"), Some(FieldErrors::new()));
    }

    #[test]
    fn unstructured_bodies_give_no_field_errors() {
        assert_eq!(parse_field_errors(""), None);
        assert_eq!(parse_field_errors("Internal Server Error"), None);
        assert_eq!(parse_field_errors(r#"["name"]"#), None);
        assert_eq!(parse_field_errors("null"), None);
    }
}
