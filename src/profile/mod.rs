//! Student profile and the enumerations that drive personalization.
//!
//! The profile is owned by the session. Everything downstream (variable
//! dispatch, system instructions) reads an immutable snapshot of it.

pub mod rewards;
pub mod suggestions;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use rewards::{DailyChallenge, Reward, RewardError};
pub use suggestions::{suggest, Suggestion};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningPace {
    Slow,
    Medium,
    Fast,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Interactive,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    General,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Tamil,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    #[serde(default)]
    pub dyslexia_friendly: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub class_number: String,
    pub subjects: Vec<String>,
    pub learning_pace: LearningPace,
    #[serde(default)]
    pub weak_subjects: Vec<String>,
    #[serde(default)]
    pub strong_subjects: Vec<String>,
    pub learning_style: LearningStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<String>,
    #[serde(default)]
    pub accessibility: Accessibility,
    pub region: Region,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub stars: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            class_number: "8".to_string(),
            subjects: ["Math", "Physics", "Chemistry", "Biology", "English", "History"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            learning_pace: LearningPace::Medium,
            weak_subjects: vec!["Physics".to_string()],
            strong_subjects: vec!["Math".to_string(), "English".to_string()],
            learning_style: LearningStyle::Visual,
            primary_goal: None,
            accessibility: Accessibility::default(),
            region: Region::TamilNadu,
            xp: 1250,
            stars: 45,
            avatar: None,
        }
    }
}

impl StudentProfile {
    pub fn level_group(&self) -> ClassLevelGroup {
        ClassLevelGroup::from_class(&self.class_number)
    }

    /// Subject preselected in forms: the first one the student takes.
    pub fn primary_subject(&self) -> &str {
        self.subjects.first().map(String::as_str).unwrap_or("General")
    }

    pub fn apply_onboarding(&mut self, answers: OnboardingAnswers) {
        if let Some(style) = answers.learning_style {
            self.learning_style = style;
        }
        if let Some(goal) = answers.primary_goal {
            self.primary_goal = Some(goal);
        }
        if let Some(pace) = answers.learning_pace {
            self.learning_pace = pace;
        }
    }
}

/// Choices collected by the three onboarding questions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    pub learning_style: Option<LearningStyle>,
    pub primary_goal: Option<String>,
    pub learning_pace: Option<LearningPace>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassLevelGroup {
    Primary,
    Middle,
    High,
}

impl ClassLevelGroup {
    /// Buckets a class label by its leading number. Labels without one land
    /// in `High`.
    pub fn from_class(class_number: &str) -> Self {
        let digits: String = class_number
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        match digits.parse::<u32>() {
            Ok(n) if n <= 5 => ClassLevelGroup::Primary,
            Ok(n) if n <= 8 => ClassLevelGroup::Middle,
            _ => ClassLevelGroup::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassLevelGroup::Primary => "Primary (1-5)",
            ClassLevelGroup::Middle => "Middle (6-8)",
            ClassLevelGroup::High => "High (9-12)",
        }
    }

    pub fn study_session(&self) -> &'static str {
        match self {
            ClassLevelGroup::Primary => "30 min study + 10 min break",
            ClassLevelGroup::Middle => "45 min study + 15 min break",
            ClassLevelGroup::High => "60 min study + 15 min break",
        }
    }

    pub fn welcome(&self) -> &'static str {
        match self {
            ClassLevelGroup::Primary => "Hi Friend! Ready to play and learn? 🌟",
            ClassLevelGroup::Middle => "Welcome back! Ready to explore new topics? 🚀",
            ClassLevelGroup::High => "Academic Dashboard - Exam Prep Mode 🎯",
        }
    }
}

impl LearningPace {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningPace::Slow => "SLOW",
            LearningPace::Medium => "MEDIUM",
            LearningPace::Fast => "FAST",
        }
    }
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Reading,
        LearningStyle::Interactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "VISUAL",
            LearningStyle::Auditory => "AUDITORY",
            LearningStyle::Reading => "READING",
            LearningStyle::Interactive => "INTERACTIVE",
        }
    }
}

impl Region {
    pub const ALL: [Region; 2] = [Region::TamilNadu, Region::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::TamilNadu => "Tamil Nadu",
            Region::General => "General",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Tamil];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Language::default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "tamil" | "ta" => Ok(Language::Tamil),
            _ => Err(ProfileError::UnknownLanguage(s.to_string())),
        }
    }
}

impl FromStr for LearningStyle {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LearningStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileError::InvalidValue {
                field: "learning style",
                value: s.to_string(),
            })
    }
}

impl FromStr for Region {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], " ");
        Region::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ProfileError::InvalidValue {
                field: "region",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_level_groups() {
        assert_eq!(ClassLevelGroup::from_class("3"), ClassLevelGroup::Primary);
        assert_eq!(ClassLevelGroup::from_class("5"), ClassLevelGroup::Primary);
        assert_eq!(ClassLevelGroup::from_class("6"), ClassLevelGroup::Middle);
        assert_eq!(ClassLevelGroup::from_class("8"), ClassLevelGroup::Middle);
        assert_eq!(ClassLevelGroup::from_class("12"), ClassLevelGroup::High);
        assert_eq!(ClassLevelGroup::from_class("10th"), ClassLevelGroup::High);
        assert_eq!(ClassLevelGroup::from_class("Kindergarten"), ClassLevelGroup::High);
    }

    #[test]
    fn test_profile_json_uses_camel_case_keys() {
        let json = r#"{
            "name": "Priya",
            "classNumber": "4",
            "subjects": ["Math"],
            "learningPace": "SLOW",
            "learningStyle": "AUDITORY",
            "accessibility": {"dyslexiaFriendly": true, "highContrast": false},
            "region": "Tamil Nadu",
            "xp": 10,
            "stars": 2
        }"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.learning_pace, LearningPace::Slow);
        assert_eq!(profile.learning_style, LearningStyle::Auditory);
        assert_eq!(profile.region, Region::TamilNadu);
        assert!(profile.accessibility.dyslexia_friendly);
        assert!(profile.weak_subjects.is_empty());
        assert_eq!(profile.level_group(), ClassLevelGroup::Primary);
    }

    #[test]
    fn test_onboarding_only_overrides_answered_fields() {
        let mut profile = StudentProfile::default();
        profile.apply_onboarding(OnboardingAnswers {
            learning_style: Some(LearningStyle::Interactive),
            primary_goal: Some("Toppers".to_string()),
            learning_pace: None,
        });
        assert_eq!(profile.learning_style, LearningStyle::Interactive);
        assert_eq!(profile.primary_goal.as_deref(), Some("Toppers"));
        assert_eq!(profile.learning_pace, LearningPace::Medium);
    }

    #[test]
    fn test_parse_enumerations() {
        assert_eq!("tamil".parse::<Language>(), Ok(Language::Tamil));
        assert!("french".parse::<Language>().is_err());
        assert_eq!("tamil_nadu".parse::<Region>(), Ok(Region::TamilNadu));
        assert_eq!("reading".parse::<LearningStyle>(), Ok(LearningStyle::Reading));
    }

    #[test]
    fn test_primary_subject_falls_back() {
        let mut profile = StudentProfile::default();
        assert_eq!(profile.primary_subject(), "Math");
        profile.subjects.clear();
        assert_eq!(profile.primary_subject(), "General");
    }
}
