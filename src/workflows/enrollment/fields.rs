use serde::{Deserialize, Serialize};

/// Selector entry that switches the enroll form to free-text input.
pub const OTHER_FIELD_OPTION: &str = "Other (type manually)";

const SUGGESTED_FIELDS: [&str; 18] = [
    "AI",
    "AI in Cybersecurity",
    "Cybersecurity",
    "AI in HR",
    "AI in BA",
    "AI in Stock Exchange",
    "AI in Graphic Design",
    "AI in Video & Image Editing",
    "Computer Skills",
    "AI in Smart & Sustainable Agriculture",
    "AI Models Development",
    "Data Entry",
    "Interior Design",
    "UAT",
    "Python",
    "Data Analysis",
    "AI in Organizations & Institutes Development",
    "Digital Transformation Using AI",
];

pub const fn suggested_fields() -> &'static [&'static str] {
    &SUGGESTED_FIELDS
}

/// Suggestions followed by the "Other" entry, in selector order.
pub fn field_options() -> Vec<&'static str> {
    SUGGESTED_FIELDS
        .iter()
        .copied()
        .chain(std::iter::once(OTHER_FIELD_OPTION))
        .collect()
}

/// How the enroll form picked a field of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldOfStudyChoice {
    Suggested(String),
    Other(String),
}

impl FieldOfStudyChoice {
    /// Maps a selector value to a choice. Picking the "Other" entry uses the
    /// free-text value instead.
    pub fn from_selection(selected: &str, typed: &str) -> Self {
        if selected == OTHER_FIELD_OPTION {
            Self::Other(typed.to_string())
        } else if SUGGESTED_FIELDS.iter().any(|field| *field == selected) {
            Self::Suggested(selected.to_string())
        } else {
            Self::Other(selected.to_string())
        }
    }

    pub fn into_field(self) -> String {
        match self {
            Self::Suggested(field) | Self::Other(field) => field,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Suggested(field) | Self::Other(field) => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_end_with_other_entry() {
        let options = field_options();
        assert_eq!(options.len(), suggested_fields().len() + 1);
        assert_eq!(options.first(), Some(&"AI"));
        assert_eq!(options.last(), Some(&OTHER_FIELD_OPTION));
    }

    #[test]
    fn other_selection_uses_typed_value() {
        let choice = FieldOfStudyChoice::from_selection(OTHER_FIELD_OPTION, "Robotics");
        assert_eq!(choice, FieldOfStudyChoice::Other("Robotics".to_string()));
        assert_eq!(choice.into_field(), "Robotics");

        let choice = FieldOfStudyChoice::from_selection("Python", "ignored");
        assert_eq!(choice.as_str(), "Python");
        assert!(matches!(choice, FieldOfStudyChoice::Suggested(_)));
    }
}
