//! Form field names and the form data record

use super::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight named fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Address1,
    Address2,
    City,
    State,
    Zip,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address1,
        FieldName::Address2,
        FieldName::City,
        FieldName::State,
        FieldName::Zip,
    ];

    /// Wire name, as used in the persisted JSON record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address1 => "Address Line 1",
            Self::Address2 => "Address Line 2",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "ZIP Code",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// The values entered into the form.
///
/// Missing keys in persisted JSON fall back to empty strings and unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl FormData {
    /// Get the value of a field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Address1 => &self.address1,
            FieldName::Address2 => &self.address2,
            FieldName::City => &self.city,
            FieldName::State => &self.state,
            FieldName::Zip => &self.zip,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Address1 => &mut self.address1,
            FieldName::Address2 => &mut self.address2,
            FieldName::City => &mut self.city,
            FieldName::State => &mut self.state,
            FieldName::Zip => &mut self.zip,
        };
        *slot = value;
    }

    /// Labelled `Label: value` lines for every field, in display order
    pub fn summary_lines(&self) -> Vec<String> {
        FieldName::ALL
            .iter()
            .map(|field| format!("{}: {}", field.label(), self.get(*field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_known_names() {
            for field in FieldName::ALL {
                assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
            }
        }

        #[test]
        fn test_parse_unknown_name_is_error() {
            let err = "country".parse::<FieldName>().unwrap_err();
            assert!(matches!(err, FormError::UnknownField(ref n) if n == "country"));
        }

        #[test]
        fn test_parse_is_case_sensitive() {
            assert!("Email".parse::<FieldName>().is_err());
        }

        #[test]
        fn test_display_matches_wire_name() {
            assert_eq!(FieldName::Address1.to_string(), "address1");
            assert_eq!(FieldName::Zip.to_string(), "zip");
        }

        #[test]
        fn test_labels() {
            assert_eq!(FieldName::Address2.label(), "Address Line 2");
            assert_eq!(FieldName::Zip.label(), "ZIP Code");
        }
    }

    mod form_data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all_empty() {
            let data = FormData::default();
            for field in FieldName::ALL {
                assert_eq!(data.get(field), "");
            }
        }

        #[test]
        fn test_set_only_touches_one_field() {
            let mut data = FormData::default();
            data.set(FieldName::City, "Springfield".to_string());
            assert_eq!(data.city, "Springfield");
            assert_eq!(data.state, "");
        }

        #[test]
        fn test_serializes_exactly_eight_fields() {
            let json = serde_json::to_value(FormData::default()).unwrap();
            let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
            assert_eq!(keys.len(), 8);
            for field in FieldName::ALL {
                assert!(json.get(field.as_str()).is_some());
            }
        }

        #[test]
        fn test_deserialize_fills_missing_fields() {
            let data: FormData = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
            assert_eq!(
                data,
                FormData {
                    name: "Alice".to_string(),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn test_deserialize_ignores_unknown_fields() {
            let data: FormData =
                serde_json::from_str(r#"{"zip": "123456", "country": "NZ"}"#).unwrap();
            assert_eq!(data.zip, "123456");
        }

        #[test]
        fn test_summary_lines_in_display_order() {
            let mut data = FormData::default();
            data.set(FieldName::Name, "Alice".to_string());
            let lines = data.summary_lines();
            assert_eq!(lines.len(), 8);
            assert_eq!(lines[0], "Name: Alice");
            assert_eq!(lines[7], "ZIP Code: ");
        }
    }
}
