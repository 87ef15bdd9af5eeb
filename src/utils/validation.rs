use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub const MISSING_CODE: &str = "value_error.missing";
pub const MISSING_MESSAGE: &str = "field required";
pub const NOT_A_STRING_CODE: &str = "type_error.str";
pub const NOT_A_STRING_MESSAGE: &str = "str type expected";

/// A single field-level failure as reported to clients.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn validate_string(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(_) => Ok(()),
        _ => Err(ValidationError::new(NOT_A_STRING_CODE)
            .with_message(Cow::from(NOT_A_STRING_MESSAGE))),
    }
}

/// Extracts the string out of a raw field that already passed
/// [`validate_string`].
pub fn into_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

/// Flattens `validator`'s error map into a list, ordered by the position of
/// each field in `order`. Fields missing from `order` go last.
pub fn into_field_errors(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let mut ranked: Vec<(usize, FieldError)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            let rank = order
                .iter()
                .position(|known| *known == field)
                .unwrap_or(order.len());

            errors.iter().map(move |error| {
                (
                    rank,
                    FieldError {
                        loc: vec![field.clone()],
                        msg: error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| error.code.to_string()),
                        kind: error.code.to_string(),
                    },
                )
            })
        })
        .collect();

    ranked.sort_by(|(a, a_error), (b, b_error)| {
        a.cmp(b).then_with(|| a_error.loc.cmp(&b_error.loc))
    });
    ranked.into_iter().map(|(_, error)| error).collect()
}
