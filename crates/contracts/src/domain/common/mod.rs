//! Common types shared by all domain entities

use serde::{Deserialize, Serialize};

/// Identifier of a persisted row (serial primary key on the backend).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a dropdown. `id` is set when the option represents a
/// persisted row; in that case `value` carries the identifier as a string.
/// Options for external catalogs (states, cities) and static literals keep
/// `id` empty and use the domain code as `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl SelectOption {
    pub fn entity(id: RecordId, label: impl Into<String>) -> Self {
        Self {
            value: id.as_string(),
            label: label.into(),
            id: Some(id),
        }
    }

    pub fn plain(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_round_trip() {
        let id = RecordId(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(RecordId::from_string("42"), Ok(id));
    }

    #[test]
    fn test_record_id_rejects_garbage() {
        assert!(RecordId::from_string("abc").is_err());
        assert!(RecordId::from_string("").is_err());
    }

    #[test]
    fn test_entity_option_value_is_the_id() {
        let opt = SelectOption::entity(RecordId(7), "BSc");
        assert_eq!(opt.value, "7");
        assert_eq!(opt.id, Some(RecordId(7)));
    }

    #[test]
    fn test_plain_option_has_no_id() {
        let opt = SelectOption::plain("MH", "Maharashtra");
        assert_eq!(opt.id, None);
    }
}
