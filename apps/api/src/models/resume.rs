use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed résumé as produced by the résumé parser.
///
/// Education, experience and project entries are loose records; the scorer
/// only reads their textual form and the `duration` field of experience.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Value>,
    #[serde(default)]
    pub experience: Vec<Value>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Value>,
    #[serde(default)]
    pub raw_text: String,
}

impl ResumeData {
    pub fn has_name(&self) -> bool {
        is_present(&self.name)
    }

    pub fn has_email(&self) -> bool {
        is_present(&self.email)
    }

    pub fn has_phone(&self) -> bool {
        is_present(&self.phone)
    }
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}
