//! Step-wise form session: current step, values, errors and the submitted flag

use super::error::FormError;
use super::field::{FieldName, FormData};
use super::validator::validate;
use std::collections::BTreeMap;

/// One of the three sequential screens of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Personal,
    Address,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Personal, Step::Address, Step::Confirmation];

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Address => 2,
            Self::Confirmation => 3,
        }
    }

    pub fn from_number(number: u8) -> Result<Self, FormError> {
        match number {
            1 => Ok(Self::Personal),
            2 => Ok(Self::Address),
            3 => Ok(Self::Confirmation),
            n => Err(FormError::InvalidStep(n)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Address => "Address Information",
            Self::Confirmation => "Confirmation",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Address),
            Self::Address => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Address => Some(Self::Personal),
            Self::Confirmation => Some(Self::Address),
        }
    }

    /// Fields that must pass validation before leaving this step.
    /// `address2` is optional and never appears here.
    pub fn validated_fields(&self) -> &'static [FieldName] {
        match self {
            Self::Personal => &[FieldName::Name, FieldName::Email, FieldName::Phone],
            Self::Address => &[
                FieldName::Address1,
                FieldName::City,
                FieldName::State,
                FieldName::Zip,
            ],
            Self::Confirmation => &[],
        }
    }

    /// Editable fields shown on this step
    pub fn displayed_fields(&self) -> &'static [FieldName] {
        match self {
            Self::Personal => &[FieldName::Name, FieldName::Email, FieldName::Phone],
            Self::Address => &[
                FieldName::Address1,
                FieldName::Address2,
                FieldName::City,
                FieldName::State,
                FieldName::Zip,
            ],
            Self::Confirmation => &[],
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = FormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

/// Per-field validation messages. A missing entry or an empty message means
/// the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Record the validation outcome for one field
    pub fn set(&mut self, field: FieldName, error: Option<&str>) {
        match error {
            Some(message) => {
                self.0.insert(field, message.to_string());
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Number of fields currently in error
    pub fn len(&self) -> usize {
        self.0.values().filter(|message| !message.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session was finalized by this call
    Submitted,
    /// The session had already been submitted; nothing changed
    AlreadySubmitted,
    /// Step 3 failed validation; errors were populated
    Invalid,
}

/// The aggregate form state.
///
/// Once `submitted` is set the session is terminal: edits and navigation are
/// ignored and report `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    pub step: Step,
    pub data: FormData,
    pub errors: ErrorMap,
    pub submitted: bool,
}

impl FormSession {
    /// Start a session on step 1 with the given values
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    /// Update one field and re-validate only that field.
    /// Returns false if the session is already submitted.
    pub fn set_field(&mut self, field: FieldName, value: String) -> bool {
        if self.submitted {
            return false;
        }
        let error = validate(field, &value);
        self.data.set(field, value);
        self.errors.set(field, error);
        true
    }

    /// Jump straight to a step without validating the current one
    pub fn go_to_step(&mut self, target: Step) -> bool {
        if self.submitted {
            return false;
        }
        self.step = target;
        self.errors.clear();
        true
    }

    /// Move to the next step if the current one validates.
    /// Returns true iff the step changed.
    pub fn advance_step(&mut self) -> bool {
        if self.submitted || !self.is_step_valid(self.step) {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                self.errors.clear();
                true
            }
            None => false,
        }
    }

    /// Move to the previous step. No-op on step 1.
    pub fn retreat_step(&mut self) -> bool {
        if self.submitted {
            return false;
        }
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                self.errors.clear();
                true
            }
            None => false,
        }
    }

    /// Validate the confirmation step and finalize.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        // Step 3 has no required fields, so this currently always passes.
        if !self.is_step_valid(Step::Confirmation) {
            return SubmitOutcome::Invalid;
        }
        self.submitted = true;
        SubmitOutcome::Submitted
    }

    /// Validate every field of `step`, replacing the error map with the result
    pub fn is_step_valid(&mut self, step: Step) -> bool {
        let mut errors = ErrorMap::default();
        for field in step.validated_fields() {
            errors.set(*field, validate(*field, self.data.get(*field)));
        }
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }
}
