//! Closed catalog of learning tools.
//!
//! A [`ToolId`] is the stable key the rest of the crate dispatches on: the
//! template registry, the variable builder and the daily challenge all refer
//! to tools through it. Display metadata (name, icon, category) lives here so
//! the CLI can list the catalog, nothing more.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tool identifier: {0}")]
pub struct UnknownTool(pub String);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    AiTutor,
    WritingAssistant,
    ScorePredictor,
    DoubtSolver,
    LessonSummary,
    StudyScheduler,
    ExamGenerator,
    PerformanceAnalysis,
    Simplifier,
    Motivator,
    PdfNotes,
    VideoLessons,
    PracticeExercises,
    VisualDiagrams,
    AudioNotes,
    QuickSummaries,
    AudioOverview,
    VideoOverview,
    MindMap,
    ReportGenerator,
    FlashcardGenerator,
    InteractiveQuiz,
    VirtualLab,
    #[serde(rename = "ar_3d_model")]
    Ar3dModel,
    GamifiedJourney,
    RealWorldVideo,
    StudyBuddy,
    DoubtCommunity,
    VirtualStudyRoom,
    PtsPlatform,
    WellnessCoach,
    ExamRelief,
    BreakZone,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    AdvancedAi,
    LearningTools,
    StudyMaterials,
    QuickViews,
    InteractiveLearning,
    Social,
    Wellness,
}

impl ToolCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::AdvancedAi => "Advanced AI",
            ToolCategory::LearningTools => "Learning Tools",
            ToolCategory::StudyMaterials => "Study Materials",
            ToolCategory::QuickViews => "Quick Views",
            ToolCategory::InteractiveLearning => "Interactive Learning",
            ToolCategory::Social => "Social",
            ToolCategory::Wellness => "Wellness",
        }
    }
}

impl ToolId {
    pub const ALL: [ToolId; 33] = [
        ToolId::AiTutor,
        ToolId::WritingAssistant,
        ToolId::ScorePredictor,
        ToolId::DoubtSolver,
        ToolId::LessonSummary,
        ToolId::StudyScheduler,
        ToolId::ExamGenerator,
        ToolId::PerformanceAnalysis,
        ToolId::Simplifier,
        ToolId::Motivator,
        ToolId::PdfNotes,
        ToolId::VideoLessons,
        ToolId::PracticeExercises,
        ToolId::VisualDiagrams,
        ToolId::AudioNotes,
        ToolId::QuickSummaries,
        ToolId::AudioOverview,
        ToolId::VideoOverview,
        ToolId::MindMap,
        ToolId::ReportGenerator,
        ToolId::FlashcardGenerator,
        ToolId::InteractiveQuiz,
        ToolId::VirtualLab,
        ToolId::Ar3dModel,
        ToolId::GamifiedJourney,
        ToolId::RealWorldVideo,
        ToolId::StudyBuddy,
        ToolId::DoubtCommunity,
        ToolId::VirtualStudyRoom,
        ToolId::PtsPlatform,
        ToolId::WellnessCoach,
        ToolId::ExamRelief,
        ToolId::BreakZone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::AiTutor => "ai_tutor",
            ToolId::WritingAssistant => "writing_assistant",
            ToolId::ScorePredictor => "score_predictor",
            ToolId::DoubtSolver => "doubt_solver",
            ToolId::LessonSummary => "lesson_summary",
            ToolId::StudyScheduler => "study_scheduler",
            ToolId::ExamGenerator => "exam_generator",
            ToolId::PerformanceAnalysis => "performance_analysis",
            ToolId::Simplifier => "simplifier",
            ToolId::Motivator => "motivator",
            ToolId::PdfNotes => "pdf_notes",
            ToolId::VideoLessons => "video_lessons",
            ToolId::PracticeExercises => "practice_exercises",
            ToolId::VisualDiagrams => "visual_diagrams",
            ToolId::AudioNotes => "audio_notes",
            ToolId::QuickSummaries => "quick_summaries",
            ToolId::AudioOverview => "audio_overview",
            ToolId::VideoOverview => "video_overview",
            ToolId::MindMap => "mind_map",
            ToolId::ReportGenerator => "report_generator",
            ToolId::FlashcardGenerator => "flashcard_generator",
            ToolId::InteractiveQuiz => "interactive_quiz",
            ToolId::VirtualLab => "virtual_lab",
            ToolId::Ar3dModel => "ar_3d_model",
            ToolId::GamifiedJourney => "gamified_journey",
            ToolId::RealWorldVideo => "real_world_video",
            ToolId::StudyBuddy => "study_buddy",
            ToolId::DoubtCommunity => "doubt_community",
            ToolId::VirtualStudyRoom => "virtual_study_room",
            ToolId::PtsPlatform => "pts_platform",
            ToolId::WellnessCoach => "wellness_coach",
            ToolId::ExamRelief => "exam_relief",
            ToolId::BreakZone => "break_zone",
        }
    }

    /// The tutor is chat-driven; every other tool goes through a template.
    pub fn is_conversational(&self) -> bool {
        matches!(self, ToolId::AiTutor)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolId::AiTutor => "AI Personal Tutor",
            ToolId::WritingAssistant => "Writing Assistant",
            ToolId::ScorePredictor => "Score Predictor",
            ToolId::DoubtSolver => "Doubt Solver",
            ToolId::LessonSummary => "Lesson Summarizer",
            ToolId::StudyScheduler => "Study Planner",
            ToolId::ExamGenerator => "Exam Creator",
            ToolId::PerformanceAnalysis => "Performance Analyst",
            ToolId::Simplifier => "Topic Simplifier",
            ToolId::Motivator => "Motivational Coach",
            ToolId::PdfNotes => "PDF Notes",
            ToolId::VideoLessons => "Video Lessons",
            ToolId::PracticeExercises => "Practice Exercises",
            ToolId::VisualDiagrams => "Visual Diagrams",
            ToolId::AudioNotes => "Audio Notes",
            ToolId::QuickSummaries => "Quick Summaries",
            ToolId::AudioOverview => "Audio Overview",
            ToolId::VideoOverview => "Video Overview",
            ToolId::MindMap => "Mind Map",
            ToolId::ReportGenerator => "Reports",
            ToolId::FlashcardGenerator => "Flashcards",
            ToolId::InteractiveQuiz => "Interactive Quiz",
            ToolId::VirtualLab => "Virtual Lab",
            ToolId::Ar3dModel => "3D Models",
            ToolId::GamifiedJourney => "Level Up Journey",
            ToolId::RealWorldVideo => "Real World App",
            ToolId::StudyBuddy => "Study Buddy Match",
            ToolId::DoubtCommunity => "Community Q&A",
            ToolId::VirtualStudyRoom => "Virtual Focus Room",
            ToolId::PtsPlatform => "Parent Connect",
            ToolId::WellnessCoach => "Mindfulness & Breath",
            ToolId::ExamRelief => "Exam Anxiety Relief",
            ToolId::BreakZone => "Smart Break Planner",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolId::AiTutor => "🤖",
            ToolId::WritingAssistant => "✍️",
            ToolId::ScorePredictor => "🔮",
            ToolId::DoubtSolver => "❓",
            ToolId::LessonSummary => "📚",
            ToolId::StudyScheduler => "📅",
            ToolId::ExamGenerator => "📝",
            ToolId::PerformanceAnalysis => "📊",
            ToolId::Simplifier => "💡",
            ToolId::Motivator => "🦁",
            ToolId::PdfNotes => "📄",
            ToolId::VideoLessons => "▶️",
            ToolId::PracticeExercises => "✍️",
            ToolId::VisualDiagrams => "🖼️",
            ToolId::AudioNotes => "🎧",
            ToolId::QuickSummaries => "⚡",
            ToolId::AudioOverview => "🎙️",
            ToolId::VideoOverview => "📹",
            ToolId::MindMap => "🧠",
            ToolId::ReportGenerator => "📑",
            ToolId::FlashcardGenerator => "📇",
            ToolId::InteractiveQuiz => "🧩",
            ToolId::VirtualLab => "🧪",
            ToolId::Ar3dModel => "🧊",
            ToolId::GamifiedJourney => "🎮",
            ToolId::RealWorldVideo => "🌍",
            ToolId::StudyBuddy => "👥",
            ToolId::DoubtCommunity => "🙋",
            ToolId::VirtualStudyRoom => "🎧",
            ToolId::PtsPlatform => "👨‍👩‍👧",
            ToolId::WellnessCoach => "🧘",
            ToolId::ExamRelief => "😌",
            ToolId::BreakZone => "☕",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            ToolId::AiTutor | ToolId::WritingAssistant | ToolId::ScorePredictor => {
                ToolCategory::AdvancedAi
            }
            ToolId::DoubtSolver
            | ToolId::LessonSummary
            | ToolId::StudyScheduler
            | ToolId::ExamGenerator
            | ToolId::PerformanceAnalysis
            | ToolId::Simplifier => ToolCategory::LearningTools,
            ToolId::PdfNotes
            | ToolId::VideoLessons
            | ToolId::PracticeExercises
            | ToolId::VisualDiagrams
            | ToolId::AudioNotes
            | ToolId::QuickSummaries => ToolCategory::StudyMaterials,
            ToolId::AudioOverview
            | ToolId::VideoOverview
            | ToolId::MindMap
            | ToolId::ReportGenerator
            | ToolId::FlashcardGenerator
            | ToolId::InteractiveQuiz => ToolCategory::QuickViews,
            ToolId::VirtualLab
            | ToolId::Ar3dModel
            | ToolId::GamifiedJourney
            | ToolId::RealWorldVideo => ToolCategory::InteractiveLearning,
            ToolId::StudyBuddy
            | ToolId::DoubtCommunity
            | ToolId::VirtualStudyRoom
            | ToolId::PtsPlatform => ToolCategory::Social,
            ToolId::Motivator | ToolId::WellnessCoach | ToolId::ExamRelief | ToolId::BreakZone => {
                ToolCategory::Wellness
            }
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ToolId::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == wanted)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique_and_round_trip() {
        let keys: HashSet<_> = ToolId::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(keys.len(), ToolId::ALL.len());

        for tool in ToolId::ALL {
            assert_eq!(tool.as_str().parse::<ToolId>(), Ok(tool));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_dashes() {
        assert_eq!("Doubt-Solver".parse::<ToolId>(), Ok(ToolId::DoubtSolver));
        assert!("homework_helper".parse::<ToolId>().is_err());
    }

    #[test]
    fn test_serde_uses_stable_keys() {
        let json = serde_json::to_string(&ToolId::Ar3dModel).unwrap();
        assert_eq!(json, "\"ar_3d_model\"");
        let back: ToolId = serde_json::from_str("\"interactive_quiz\"").unwrap();
        assert_eq!(back, ToolId::InteractiveQuiz);
    }

    #[test]
    fn test_only_tutor_is_conversational() {
        let chat: Vec<_> = ToolId::ALL.iter().filter(|t| t.is_conversational()).collect();
        assert_eq!(chat, vec![&ToolId::AiTutor]);
    }
}
