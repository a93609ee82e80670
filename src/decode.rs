//! Portfolio Decoder
//!
//! Strict decoding of the portfolio JSON payload. Every field is required;
//! any missing or mistyped field rejects the whole payload.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::models::{Category, Item, Portfolio};

type Object = Map<String, Value>;

const ROOT: &str = "response";

/// Decode a raw response body
pub fn decode_portfolio_str(body: &str) -> Result<Portfolio, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DecodeError::Syntax(e.to_string()))?;
    decode_portfolio(&value)
}

/// Decode an already parsed JSON value
pub fn decode_portfolio(value: &Value) -> Result<Portfolio, DecodeError> {
    let root = as_object(value, ROOT)?;

    let categories = array_field(root, ROOT, "categories")?
        .iter()
        .enumerate()
        .map(|(i, v)| decode_category(v, &format!("categories[{}]", i)))
        .collect::<Result<Vec<_>, _>>()?;

    let items = array_field(root, ROOT, "items")?
        .iter()
        .enumerate()
        .map(|(i, v)| decode_item(v, &format!("items[{}]", i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Portfolio { categories, items })
}

fn decode_category(value: &Value, at: &str) -> Result<Category, DecodeError> {
    let obj = as_object(value, at)?;
    Ok(Category {
        id: int_field(obj, at, "id")?,
        label: string_field(obj, at, "label")?,
    })
}

fn decode_item(value: &Value, at: &str) -> Result<Item, DecodeError> {
    let obj = as_object(value, at)?;
    Ok(Item {
        id: int_field(obj, at, "id")?,
        title: string_field(obj, at, "title")?,
        category_id: int_field(obj, at, "categoryId")?,
        image_url: string_field(obj, at, "imageUrl")?,
        link_url: string_field(obj, at, "linkUrl")?,
        description: string_field(obj, at, "description")?,
        overlay_color: string_field(obj, at, "overlayColor")?,
    })
}

// ========================
// Field Helpers
// ========================

fn as_object<'a>(value: &'a Value, at: &str) -> Result<&'a Object, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::WrongType {
        at: at.to_string(),
        expected: "object",
    })
}

fn field<'a>(
    obj: &'a Object,
    at: &str,
    name: &'static str,
    expected: &'static str,
) -> Result<&'a Value, DecodeError> {
    obj.get(name).ok_or_else(|| DecodeError::MissingField {
        at: at.to_string(),
        field: name,
        expected,
    })
}

fn wrong_type(at: &str, name: &str, expected: &'static str) -> DecodeError {
    DecodeError::WrongType {
        at: format!("{}.{}", at, name),
        expected,
    }
}

fn int_field(obj: &Object, at: &str, name: &'static str) -> Result<i64, DecodeError> {
    field(obj, at, name, "integer")?
        .as_i64()
        .ok_or_else(|| wrong_type(at, name, "integer"))
}

fn string_field(obj: &Object, at: &str, name: &'static str) -> Result<String, DecodeError> {
    field(obj, at, name, "string")?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| wrong_type(at, name, "string"))
}

fn array_field<'a>(
    obj: &'a Object,
    at: &str,
    name: &'static str,
) -> Result<&'a Vec<Value>, DecodeError> {
    field(obj, at, name, "array")?
        .as_array()
        .ok_or_else(|| wrong_type(at, name, "array"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use proptest::prelude::*;

    const CATEGORY_FIELDS: [(&str, &str); 2] = [("id", "integer"), ("label", "string")];
    const ITEM_FIELDS: [(&str, &str); 7] = [
        ("id", "integer"),
        ("title", "string"),
        ("categoryId", "integer"),
        ("imageUrl", "string"),
        ("linkUrl", "string"),
        ("description", "string"),
        ("overlayColor", "string"),
    ];

    fn make_payload() -> Value {
        json!({
            "categories": [
                { "id": 1, "label": "Web" },
                { "id": 2, "label": "Print" }
            ],
            "items": [
                {
                    "id": 10,
                    "title": "Landing page",
                    "categoryId": 1,
                    "imageUrl": "https://example.com/landing.png",
                    "linkUrl": "https://example.com/landing",
                    "description": "A landing page",
                    "overlayColor": "#ff5733"
                },
                {
                    "id": 11,
                    "title": "Poster",
                    "categoryId": 2,
                    "imageUrl": "https://example.com/poster.png",
                    "linkUrl": "https://example.com/poster",
                    "description": "A poster",
                    "overlayColor": "rgba(0, 0, 0, 0.5)"
                }
            ]
        })
    }

    #[test]
    fn test_decode_valid_payload() {
        let portfolio = decode_portfolio(&make_payload()).unwrap();

        assert_eq!(portfolio.categories, vec![Category::new(1, "Web"), Category::new(2, "Print")]);
        assert_eq!(portfolio.items.len(), 2);
        let poster = &portfolio.items[1];
        assert_eq!(poster.id, 11);
        assert_eq!(poster.category_id, 2);
        assert_eq!(poster.image_url, "https://example.com/poster.png");
        assert_eq!(poster.link_url, "https://example.com/poster");
        assert_eq!(poster.overlay_color, "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_decode_canonical_serialization() {
        let mut item = Item::new(4, "Logo", 3);
        item.image_url = "logo.png".to_string();
        item.link_url = "https://example.com/logo".to_string();
        item.description = "Brand mark".to_string();
        item.overlay_color = "teal".to_string();
        let original = Portfolio::new(vec![Category::new(3, "Branding")], vec![item]);

        let body = serde_json::to_string(&original).unwrap();
        assert_eq!(decode_portfolio_str(&body).unwrap(), original);
    }

    // ──────────────────── strategies ────────────────────

    fn arb_category() -> impl Strategy<Value = Category> {
        (any::<i64>(), any::<String>()).prop_map(|(id, label)| Category { id, label })
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            any::<i64>(),
            any::<String>(),
            any::<i64>(),
            any::<String>(),
            any::<String>(),
            any::<String>(),
            any::<String>(),
        )
            .prop_map(
                |(id, title, category_id, image_url, link_url, description, overlay_color)| Item {
                    id,
                    title,
                    category_id,
                    image_url,
                    link_url,
                    description,
                    overlay_color,
                },
            )
    }

    fn arb_portfolio() -> impl Strategy<Value = Portfolio> {
        (
            prop::collection::vec(arb_category(), 0..8),
            prop::collection::vec(arb_item(), 0..8),
        )
            .prop_map(|(categories, items)| Portfolio { categories, items })
    }

    proptest! {
        #[test]
        fn decode_accepts_any_serialized_portfolio(portfolio in arb_portfolio()) {
            let body = serde_json::to_string(&portfolio).unwrap();
            prop_assert_eq!(decode_portfolio_str(&body).unwrap(), portfolio);
        }
    }

    #[test]
    fn test_decode_empty_lists() {
        let portfolio = decode_portfolio(&json!({ "categories": [], "items": [] })).unwrap();
        assert_eq!(portfolio, Portfolio::default());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let mut payload = make_payload();
        payload["categories"][0]["slug"] = json!("web");
        payload["version"] = json!(2);
        assert!(decode_portfolio(&payload).is_ok());
    }

    #[test]
    fn test_missing_category_field_fails() {
        for (name, expected) in CATEGORY_FIELDS {
            let mut payload = make_payload();
            payload["categories"][1].as_object_mut().unwrap().remove(name);

            let err = decode_portfolio(&payload).unwrap_err();
            assert_eq!(
                err,
                DecodeError::MissingField { at: "categories[1]".to_string(), field: name, expected }
            );
            assert!(err.to_string().contains(expected));
        }
    }

    #[test]
    fn test_missing_item_field_fails() {
        for (name, expected) in ITEM_FIELDS {
            let mut payload = make_payload();
            payload["items"][0].as_object_mut().unwrap().remove(name);

            let err = decode_portfolio(&payload).unwrap_err();
            assert_eq!(
                err,
                DecodeError::MissingField { at: "items[0]".to_string(), field: name, expected }
            );
            assert!(err.to_string().contains(expected));
        }
    }

    #[test]
    fn test_mistyped_fields_name_expected_type() {
        let mut payload = make_payload();
        payload["items"][1]["categoryId"] = json!("2");
        let err = decode_portfolio(&payload).unwrap_err();
        assert_eq!(
            err,
            DecodeError::WrongType { at: "items[1].categoryId".to_string(), expected: "integer" }
        );

        let mut payload = make_payload();
        payload["categories"][0]["label"] = Value::Null;
        let err = decode_portfolio(&payload).unwrap_err();
        assert_eq!(err.to_string(), "categories[0].label: expected string");

        let mut payload = make_payload();
        payload["items"][0]["id"] = json!(1.5);
        assert!(matches!(
            decode_portfolio(&payload),
            Err(DecodeError::WrongType { expected: "integer", .. })
        ));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            decode_portfolio(&json!([])).unwrap_err(),
            DecodeError::WrongType { at: "response".to_string(), expected: "object" }
        );
        assert_eq!(
            decode_portfolio(&json!({ "categories": {}, "items": [] })).unwrap_err(),
            DecodeError::WrongType { at: "response.categories".to_string(), expected: "array" }
        );
        assert_eq!(
            decode_portfolio(&json!({ "categories": [] })).unwrap_err(),
            DecodeError::MissingField {
                at: "response".to_string(),
                field: "items",
                expected: "array"
            }
        );
        assert_eq!(
            decode_portfolio(&json!({ "categories": [], "items": [42] })).unwrap_err(),
            DecodeError::WrongType { at: "items[0]".to_string(), expected: "object" }
        );
    }

    #[test]
    fn test_invalid_json_body() {
        assert!(matches!(decode_portfolio_str("<html>"), Err(DecodeError::Syntax(_))));
    }
}
