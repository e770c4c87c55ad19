//! Picks a tool to recommend from the student's learning style.

use super::{LearningStyle, StudentProfile};
use crate::tools::ToolId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: &'static str,
    pub message: String,
    pub tool: ToolId,
}

pub fn suggest(profile: &StudentProfile) -> Suggestion {
    match profile.learning_style {
        LearningStyle::Visual => Suggestion {
            title: "Visualize Your Success",
            message: format!(
                "Since you love visual learning, try creating a diagram for {}.",
                profile
                    .weak_subjects
                    .first()
                    .map(String::as_str)
                    .unwrap_or("Physics")
            ),
            tool: ToolId::VisualDiagrams,
        },
        LearningStyle::Auditory => Suggestion {
            title: "Listen & Learn",
            message: "Turn your notes into a podcast while you relax.".to_string(),
            tool: ToolId::AudioNotes,
        },
        LearningStyle::Interactive => Suggestion {
            title: "Challenge Yourself",
            message: "Ready to beat your high score? Take a quick quiz!".to_string(),
            tool: ToolId::InteractiveQuiz,
        },
        LearningStyle::Reading => Suggestion {
            title: "Smart Summary",
            message: "Get a quick revision summary for your next exam.".to_string(),
            tool: ToolId::LessonSummary,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_mentions_weak_subject() {
        let mut profile = StudentProfile::default();
        profile.weak_subjects = vec!["Chemistry".to_string()];
        let suggestion = suggest(&profile);
        assert_eq!(suggestion.tool, ToolId::VisualDiagrams);
        assert!(suggestion.message.ends_with("diagram for Chemistry."));
    }

    #[test]
    fn test_every_style_maps_to_a_template_tool() {
        for style in LearningStyle::ALL {
            let profile = StudentProfile {
                learning_style: style,
                ..StudentProfile::default()
            };
            assert!(!suggest(&profile).tool.is_conversational());
        }
    }
}
