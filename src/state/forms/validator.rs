//! Field-level validation rules

use super::field::FieldName;

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_PHONE: &str = "Phone number should be 10 digits";
pub const INVALID_ZIP: &str = "ZIP Code should be 6 digits";
pub const REQUIRED: &str = "This field is required";

/// Validate a single field value.
///
/// Returns the error message to show, or `None` when the value is valid.
/// Pure: the result depends only on the arguments.
pub fn validate(field: FieldName, value: &str) -> Option<&'static str> {
    let valid = match field {
        FieldName::Email => value.contains('@') && value.contains('.'),
        FieldName::Phone => is_digits_of_len(value, 10),
        FieldName::Zip => is_digits_of_len(value, 6),
        _ => !value.trim().is_empty(),
    };

    if valid {
        None
    } else {
        Some(match field {
            FieldName::Email => INVALID_EMAIL,
            FieldName::Phone => INVALID_PHONE,
            FieldName::Zip => INVALID_ZIP,
            _ => REQUIRED,
        })
    }
}

fn is_digits_of_len(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
