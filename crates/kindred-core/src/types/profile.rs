//! Member profile display records
//!
//! Profile fields are transient display data, recomputed each render from
//! the source profile. The page owns the profile; components only read it.

use serde::{Deserialize, Serialize};

use super::status::StatusTag;

/// A profile field value: either a scalar displayable or an ordered tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

/// A single labeled row in a profile section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileField {
    pub label: String,
    pub value: FieldValue,
}

impl ProfileField {
    /// Create a scalar text field.
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    /// Create a tag-list field. Tag order is preserved as given.
    pub fn tags(label: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            label: label.into(),
            value: FieldValue::Tags(tags),
        }
    }
}

/// A titled group of profile fields, rendered as one collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSectionData {
    pub title: String,
    pub fields: Vec<ProfileField>,
}

impl ProfileSectionData {
    pub fn new(title: impl Into<String>, fields: Vec<ProfileField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// A member profile as the profile page displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub age: u8,
    pub location: String,
    /// One-line self description shown under the name
    pub headline: String,
    pub verification: StatusTag,
    pub sections: Vec<ProfileSectionData>,
}

/// Open/collapsed state of a collapsible section.
///
/// Owned by the section component instance; one section's state never
/// affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Open,
    Collapsed,
}

impl SectionState {
    /// Initial state from a caller-supplied default.
    pub fn from_open(open: bool) -> Self {
        if open {
            SectionState::Open
        } else {
            SectionState::Collapsed
        }
    }

    /// Flip between open and collapsed.
    pub fn toggle(&mut self) {
        *self = match self {
            SectionState::Open => SectionState::Collapsed,
            SectionState::Collapsed => SectionState::Open,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SectionState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let mut state = SectionState::from_open(false);
        assert!(!state.is_open());

        state.toggle();
        assert!(state.is_open());

        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn test_even_toggles_return_to_start() {
        let mut state = SectionState::Open;
        for _ in 0..4 {
            state.toggle();
        }
        assert_eq!(state, SectionState::Open);
    }

    #[test]
    fn test_field_constructors() {
        let field = ProfileField::text("Occupation", "Architect");
        assert_eq!(field.value, FieldValue::Text("Architect".to_string()));

        let field = ProfileField::tags(
            "Interests",
            vec!["hiking".to_string(), "jazz".to_string()],
        );
        match field.value {
            FieldValue::Tags(tags) => assert_eq!(tags, vec!["hiking", "jazz"]),
            FieldValue::Text(_) => panic!("expected tags"),
        }
    }
}
