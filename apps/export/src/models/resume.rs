use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::lenient;

/// Menu section ids carrying this prefix are user-defined sections.
pub const CUSTOM_SECTION_PREFIX: &str = "custom-";

/// Icon used for a custom section whose `icon` key is missing.
pub const DEFAULT_SECTION_ICON: &str = "➕";

/// The full résumé record as exported by the editor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "lenient::object")]
    pub basic: BasicInfo,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub skill_content: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub menu_sections: Vec<MenuSection>,
    #[serde(default, deserialize_with = "lenient::seq_map")]
    pub custom_data: HashMap<String, Vec<CustomItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomField {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: Option<String>,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::flag")]
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub gpa: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::flag")]
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub position: Option<String>,
    /// Free-form range as typed by the user; rendered without reformatting.
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub details: Option<String>,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::flag")]
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::flag")]
    pub visible: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuSection {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub enabled: bool,
}

impl MenuSection {
    /// True for enabled, user-defined sections. Built-in sections are rendered
    /// by their own fixed pass and are ignored here.
    pub fn is_renderable_custom(&self) -> bool {
        self.enabled
            && self
                .id
                .as_deref()
                .is_some_and(|id| id.starts_with(CUSTOM_SECTION_PREFIX))
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_SECTION_ICON)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::flag")]
    pub visible: bool,
}

impl ResumeRecord {
    /// Decodes a record from raw JSON text.
    ///
    /// Malformed JSON is an [`AppError::Parse`]; a well-formed document whose
    /// root is not an object is an [`AppError::InvalidRecord`]. Field-level
    /// type mismatches never fail, they degrade to empty values.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(AppError::InvalidRecord(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Items stored for a custom section, or an empty slice.
    pub fn custom_items(&self, section_id: &str) -> &[CustomItem] {
        self.custom_data
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Returns the text when it is present and non-empty.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Returns the text, or `""` when absent.
pub fn or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let record = ResumeRecord::from_json("{}").unwrap();
        assert!(record.basic.name.is_none());
        assert!(record.education.is_empty());
        assert!(record.skill_content.is_none());
        assert!(record.custom_data.is_empty());
    }

    #[test]
    fn test_visible_defaults_to_true_when_absent() {
        let record =
            ResumeRecord::from_json(r#"{"experience": [{"company": "Acme"}]}"#).unwrap();
        assert!(record.experience[0].visible);
    }

    #[test]
    fn test_visible_false_and_null_hide_entry() {
        let record = ResumeRecord::from_json(
            r#"{"projects": [{"name": "a", "visible": false}, {"name": "b", "visible": null}]}"#,
        )
        .unwrap();
        assert!(!record.projects[0].visible);
        assert!(!record.projects[1].visible);
    }

    #[test]
    fn test_enabled_defaults_to_false() {
        let record =
            ResumeRecord::from_json(r#"{"menuSections": [{"id": "custom-1"}]}"#).unwrap();
        assert!(!record.menu_sections[0].enabled);
        assert!(!record.menu_sections[0].is_renderable_custom());
    }

    #[test]
    fn test_custom_prefix_required() {
        let record = ResumeRecord::from_json(
            r#"{"menuSections": [
                {"id": "custom-awards", "enabled": true},
                {"id": "education", "enabled": true},
                {"enabled": true}
            ]}"#,
        )
        .unwrap();
        assert!(record.menu_sections[0].is_renderable_custom());
        assert!(!record.menu_sections[1].is_renderable_custom());
        assert!(!record.menu_sections[2].is_renderable_custom());
    }

    #[test]
    fn test_icon_default_only_when_missing() {
        let record = ResumeRecord::from_json(
            r#"{"menuSections": [{"id": "custom-a"}, {"id": "custom-b", "icon": ""}]}"#,
        )
        .unwrap();
        assert_eq!(record.menu_sections[0].icon(), "➕");
        assert_eq!(record.menu_sections[1].icon(), "");
    }

    #[test]
    fn test_numeric_gpa_is_kept_as_text() {
        let record =
            ResumeRecord::from_json(r#"{"education": [{"school": "MIT", "gpa": 3.8}]}"#).unwrap();
        assert_eq!(record.education[0].gpa.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_wrong_shapes_degrade_instead_of_failing() {
        let record = ResumeRecord::from_json(
            r#"{"basic": "nobody", "education": {"school": "x"}, "customData": [1, 2],
                "experience": [null, {"company": "Acme"}]}"#,
        )
        .unwrap();
        assert!(record.basic.name.is_none());
        assert!(record.education.is_empty());
        assert!(record.custom_data.is_empty());
        assert_eq!(record.experience.len(), 1);
    }

    #[test]
    fn test_custom_items_lookup() {
        let record = ResumeRecord::from_json(
            r#"{"customData": {"custom-1": [{"title": "Award"}], "custom-2": "junk"}}"#,
        )
        .unwrap();
        assert_eq!(record.custom_items("custom-1").len(), 1);
        assert!(record.custom_items("custom-2").is_empty());
        assert!(record.custom_items("custom-3").is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ResumeRecord::from_json("{\"basic\": ").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_non_object_root_is_invalid_record() {
        let err = ResumeRecord::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, AppError::InvalidRecord(_)));
    }

    #[test]
    fn test_present_filters_empty_text() {
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("a".to_string())), Some("a"));
        assert_eq!(present(&None), None);
        assert_eq!(or_empty(&None), "");
    }
}
