use serde::{Deserialize, Serialize};

pub const DEFAULT_EDUCATION_LEVELS: &[&str] = &["High School", "Bachelor", "Master", "PhD"];
pub const DEFAULT_SKILL_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced", "Expert"];

/// Selectable values for the form's select inputs. Loaded once per form mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    #[serde(default)]
    pub education_levels: Vec<String>,
    #[serde(default)]
    pub skill_levels: Vec<String>,
}

impl OptionSet {
    /// The fixed set used whenever `/api/options` cannot be used.
    pub fn fallback() -> Self {
        Self {
            education_levels: DEFAULT_EDUCATION_LEVELS.iter().map(|s| s.to_string()).collect(),
            skill_levels: DEFAULT_SKILL_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let options: OptionSet =
            serde_json::from_str(r#"{"educationLevels": ["Diploma"], "careers": ["Doctor"]}"#)
                .unwrap();
        assert_eq!(options.education_levels, vec!["Diploma"]);
        assert!(options.skill_levels.is_empty());
    }

    #[test]
    fn test_fallback_values_in_order() {
        let options = OptionSet::fallback();
        assert_eq!(
            options.education_levels,
            vec!["High School", "Bachelor", "Master", "PhD"]
        );
        assert_eq!(
            options.skill_levels,
            vec!["Beginner", "Intermediate", "Advanced", "Expert"]
        );
    }
}
