//! Transient per-tool form fields and their defaults.

use crate::profile::StudentProfile;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub subject: String,
    pub topic: String,
    pub query: String,
    /// Chapter text for summaries, source material for quick views.
    pub chapter_content: String,
    pub score: u32,
    pub difficulty: String,
    pub exam_duration: String,
    pub writing_type: String,
    pub writing_tone: String,
    pub study_hours: String,
    pub recent_scores: String,
    pub room_type: String,
    pub mood: String,
    pub stress_level: String,
}

impl FormState {
    /// Fresh form as shown when a tool is opened.
    pub fn for_profile(profile: &StudentProfile) -> Self {
        Self {
            subject: profile.primary_subject().to_string(),
            ..Self::default()
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            subject: "General".to_string(),
            topic: String::new(),
            query: String::new(),
            chapter_content: String::new(),
            score: 0,
            difficulty: "Medium".to_string(),
            exam_duration: "45".to_string(),
            writing_type: "Essay".to_string(),
            writing_tone: "Formal".to_string(),
            study_hours: "2".to_string(),
            recent_scores: String::new(),
            room_type: "Lo-Fi Study Beats".to_string(),
            mood: "Stressed".to_string(),
            stress_level: "7".to_string(),
        }
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn or_default(value: &str, fallback: &str) -> String {
    if is_blank(value) {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
