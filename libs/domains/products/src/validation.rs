//! Structural validation of raw product payloads.

use crate::error::{ProductError, ProductResult};
use crate::models::ProductInput;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// Check that `payload` describes a complete product.
///
/// The payload must be a JSON object with a non-empty string `name`, string
/// `description` and `category`, a numeric `price` and a boolean `inStock`.
/// Unknown keys, including `id`, are ignored.
pub fn validate(payload: &Value) -> ProductResult<ProductInput> {
    if !payload.is_object() {
        return Err(ProductError::Validation(format!(
            "expected a JSON object, got {}",
            kind(payload)
        )));
    }

    let input = ProductInput::deserialize(payload)
        .map_err(|e| ProductError::Validation(e.to_string()))?;
    input
        .validate()
        .map_err(|e| ProductError::Validation(e.to_string()))?;

    Ok(input)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5,
            "category": "Stationery",
            "inStock": true
        })
    }

    #[test]
    fn test_valid_payload() {
        let input = validate(&valid()).unwrap();
        assert_eq!(input.name, "Pen");
        assert_eq!(input.price, 1.5);
        assert!(input.in_stock);
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let mut payload = valid();
        payload["price"] = json!(2);
        assert_eq!(validate(&payload).unwrap().price, 2.0);
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut payload = valid();
        payload["id"] = json!("client-chosen");
        payload["color"] = json!("blue");
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn test_non_object_payloads_are_rejected() {
        for payload in [json!(null), json!([valid()]), json!("Pen"), json!(3)] {
            assert!(matches!(
                validate(&payload),
                Err(ProductError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut payload = valid();
        payload["name"] = json!("");
        assert!(matches!(
            validate(&payload),
            Err(ProductError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_or_mistyped_fields_are_rejected() {
        let cases = [
            ("name", json!(null)),
            ("description", json!(5)),
            ("price", json!("1.5")),
            ("category", json!(false)),
            ("inStock", json!("yes")),
        ];

        for (field, bad) in cases {
            let mut mistyped = valid();
            mistyped[field] = bad;
            assert!(validate(&mistyped).is_err(), "mistyped {field}");

            let mut missing = valid();
            missing.as_object_mut().unwrap().remove(field);
            assert!(validate(&missing).is_err(), "missing {field}");
        }
    }
}
