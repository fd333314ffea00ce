use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::models::{NewCard, Rank, Suit};

pub const NOT_AN_OBJECT: &str = "Body must be a JSON object.";

/// Validator for card payloads.
pub struct Validator;

impl Validator {
    /// Collect every violation in an untrusted payload. Empty means valid.
    ///
    /// Anything other than a JSON object yields a single violation and no
    /// field checks. Field checks are independent, so both can be reported.
    pub fn validate(payload: &Value) -> Vec<String> {
        let Some(fields) = payload.as_object() else {
            return vec![NOT_AN_OBJECT.to_string()];
        };

        let mut errors = Vec::new();
        if Self::suit_field(fields).is_none() {
            errors.push(format!(
                "suit is required and must be one of: {}",
                Self::join(Suit::ALL.iter().map(Suit::as_str))
            ));
        }
        if Self::value_field(fields).is_none() {
            errors.push(format!(
                "value is required and must be one of: {}",
                Self::join(Rank::ALL.iter().map(Rank::as_str))
            ));
        }
        errors
    }

    /// Validate and convert into a typed [`NewCard`].
    pub fn parse(payload: &Value) -> Result<NewCard, ApiError> {
        let errors = Self::validate(payload);
        if !errors.is_empty() {
            return Err(ApiError::ValidationFailed(errors));
        }

        // validate() guarantees both lookups succeed
        payload
            .as_object()
            .and_then(|fields| {
                Some(NewCard {
                    suit: Self::suit_field(fields)?,
                    value: Self::value_field(fields)?,
                })
            })
            .ok_or_else(|| ApiError::ValidationFailed(vec![NOT_AN_OBJECT.to_string()]))
    }

    fn suit_field(fields: &Map<String, Value>) -> Option<Suit> {
        fields.get("suit")?.as_str()?.parse().ok()
    }

    fn value_field(fields: &Map<String, Value>) -> Option<Rank> {
        fields.get("value")?.as_str()?.parse().ok()
    }

    fn join<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
        tokens.collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload() {
        assert!(Validator::validate(&json!({ "suit": "Hearts", "value": "Q" })).is_empty());
        assert!(Validator::validate(&json!({ "suit": "Spades", "value": "10", "extra": 1 }))
            .is_empty());
    }

    #[test]
    fn test_empty_object_reports_both_fields() {
        let errors = Validator::validate(&json!({}));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            "suit is required and must be one of: Hearts, Diamonds, Clubs, Spades"
        );
        assert_eq!(
            errors[1],
            "value is required and must be one of: A, 2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, K"
        );
    }

    #[test]
    fn test_out_of_set_value() {
        let errors = Validator::validate(&json!({ "suit": "Hearts", "value": "1" }));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("value is required"));
    }

    #[test]
    fn test_non_object_payloads() {
        for payload in [
            Value::Null,
            json!(42),
            json!("Hearts"),
            json!(true),
            json!([{ "suit": "Hearts", "value": "A" }]),
        ] {
            assert_eq!(Validator::validate(&payload), vec![NOT_AN_OBJECT.to_string()]);
        }
    }

    #[test]
    fn test_wrong_types_and_empty_strings() {
        let errors = Validator::validate(&json!({ "suit": 1, "value": ["A"] }));
        assert_eq!(errors.len(), 2);

        let errors = Validator::validate(&json!({ "suit": "", "value": null }));
        assert_eq!(errors.len(), 2);

        let errors = Validator::validate(&json!({ "suit": "hearts", "value": "A" }));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("suit is required"));
    }

    #[test]
    fn test_parse_returns_typed_card() {
        let card = Validator::parse(&json!({ "suit": "Diamonds", "value": "K" })).unwrap();
        assert_eq!(
            card,
            NewCard {
                suit: Suit::Diamonds,
                value: Rank::King
            }
        );

        match Validator::parse(&json!({})) {
            Err(ApiError::ValidationFailed(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}
