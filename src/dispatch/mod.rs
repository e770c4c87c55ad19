//! Variable-construction dispatch: form state + profile → template variables.
//!
//! Every tool maps to exactly one [`Overlay`]. Each map starts from the same
//! common base and the overlay adds or overrides tool-specific keys. Tools
//! with nothing special (the study materials) use [`Overlay::Common`].

pub mod form;

use crate::profile::StudentProfile;
use crate::templates::{TemplateRegistry, VariableMap};
use crate::tools::ToolId;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

pub use form::FormState;

const COMMON_KEYS: &[&str] = &["CLASS_NUMBER", "SUBJECT", "STUDENT_NAME", "LEARNING_PACE", "TOPIC"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Variable builder for {tool} does not supply: {}", .missing.join(", "))]
    MissingKeys { tool: ToolId, missing: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Common,
    Question,
    Chapter,
    Schedule,
    Exam,
    Simplify,
    Performance,
    Writing,
    Prediction,
    SourceMaterial,
    Experience,
    Social,
    Community,
    StudyRoom,
    Mood,
    Relief,
    Break,
}

impl Overlay {
    pub fn for_tool(tool: ToolId) -> Self {
        match tool {
            ToolId::DoubtSolver => Overlay::Question,
            ToolId::LessonSummary => Overlay::Chapter,
            ToolId::StudyScheduler => Overlay::Schedule,
            ToolId::ExamGenerator => Overlay::Exam,
            ToolId::Simplifier => Overlay::Simplify,
            ToolId::PerformanceAnalysis => Overlay::Performance,
            ToolId::WritingAssistant => Overlay::Writing,
            ToolId::ScorePredictor => Overlay::Prediction,
            ToolId::AudioOverview
            | ToolId::VideoOverview
            | ToolId::MindMap
            | ToolId::ReportGenerator
            | ToolId::FlashcardGenerator
            | ToolId::InteractiveQuiz => Overlay::SourceMaterial,
            ToolId::VirtualLab
            | ToolId::Ar3dModel
            | ToolId::GamifiedJourney
            | ToolId::RealWorldVideo => Overlay::Experience,
            ToolId::StudyBuddy | ToolId::PtsPlatform => Overlay::Social,
            ToolId::DoubtCommunity => Overlay::Community,
            ToolId::VirtualStudyRoom => Overlay::StudyRoom,
            ToolId::WellnessCoach | ToolId::Motivator => Overlay::Mood,
            ToolId::ExamRelief => Overlay::Relief,
            ToolId::BreakZone => Overlay::Break,
            ToolId::AiTutor
            | ToolId::PdfNotes
            | ToolId::VideoLessons
            | ToolId::PracticeExercises
            | ToolId::VisualDiagrams
            | ToolId::AudioNotes
            | ToolId::QuickSummaries => Overlay::Common,
        }
    }

    fn extra_keys(&self) -> &'static [&'static str] {
        match self {
            Overlay::Common
            | Overlay::Simplify
            | Overlay::Experience
            | Overlay::Social => &[],
            Overlay::Question => &["STUDENT_QUESTION"],
            Overlay::Chapter => &["CHAPTER_NAME", "FULL_CHAPTER_CONTENT"],
            Overlay::Schedule => &["SUBJECT_LIST", "DATE", "HOURS", "SESSION_LENGTH"],
            Overlay::Exam => &["CHAPTER_NAME", "DIFFICULTY", "NUMBER_OF_QUESTIONS", "EXAM_DURATION"],
            Overlay::Performance => &["SCORE", "TOTAL_MARKS"],
            Overlay::Writing => &["WRITING_TYPE", "TONE", "WORD_COUNT"],
            Overlay::Prediction => &["RECENT_SCORES", "STUDY_HOURS", "SUBJECT_DIFFICULTY"],
            Overlay::SourceMaterial => &["SOURCE_MATERIAL"],
            Overlay::Community => &["STUDENT_QUESTION"],
            Overlay::StudyRoom => &["ROOM_TYPE"],
            Overlay::Mood => &["MOOD", "STRESS_LEVEL"],
            Overlay::Relief => &["STRESS_LEVEL"],
            Overlay::Break => &["MOOD", "STUDY_HOURS"],
        }
    }

    /// Every key this overlay guarantees, common base included.
    pub fn provided_keys(&self) -> Vec<&'static str> {
        COMMON_KEYS
            .iter()
            .chain(self.extra_keys())
            .copied()
            .collect()
    }
}

/// Builds the variable map for `tool` as of `today`.
pub fn build_variables(
    tool: ToolId,
    form: &FormState,
    profile: &StudentProfile,
    today: NaiveDate,
) -> VariableMap {
    let mut vars = VariableMap::new();
    let mut set = |key: &str, value: String| {
        vars.insert(key.to_string(), value);
    };

    set("CLASS_NUMBER", profile.class_number.clone());
    set("SUBJECT", form.subject.clone());
    set("STUDENT_NAME", profile.name.clone());
    set("LEARNING_PACE", profile.learning_pace.as_str().to_string());
    set("TOPIC", form::or_default(&form.topic, "General"));

    match Overlay::for_tool(tool) {
        Overlay::Common => {}
        Overlay::Question => {
            set("STUDENT_QUESTION", form.query.clone());
        }
        Overlay::Chapter => {
            set("CHAPTER_NAME", form.topic.clone());
            set("FULL_CHAPTER_CONTENT", form.chapter_content.clone());
        }
        Overlay::Schedule => {
            let exam_date = today + Duration::days(7);
            set("SUBJECT_LIST", profile.subjects.join(", "));
            set("DATE", exam_date.format("%-m/%-d/%Y").to_string());
            set("HOURS", "3".to_string());
            set("SESSION_LENGTH", profile.level_group().study_session().to_string());
        }
        Overlay::Exam => {
            set("CHAPTER_NAME", form.topic.clone());
            set("DIFFICULTY", form.difficulty.clone());
            set("NUMBER_OF_QUESTIONS", "5".to_string());
            set("EXAM_DURATION", form.exam_duration.clone());
        }
        Overlay::Simplify => {
            let topic = if form::is_blank(&form.topic) {
                form::or_default(&form.query, "General")
            } else {
                form.topic.clone()
            };
            set("TOPIC", topic);
        }
        Overlay::Performance => {
            set("SCORE", form.score.to_string());
            set("TOTAL_MARKS", "100".to_string());
        }
        Overlay::Writing => {
            set("WRITING_TYPE", form.writing_type.clone());
            set("TONE", form.writing_tone.clone());
            set("WORD_COUNT", "300".to_string());
        }
        Overlay::Prediction => {
            set("RECENT_SCORES", form.recent_scores.clone());
            set("STUDY_HOURS", form.study_hours.clone());
            set("SUBJECT_DIFFICULTY", form.difficulty.clone());
        }
        Overlay::SourceMaterial => {
            set("TOPIC", form::or_default(&form.topic, "General Topic"));
            set(
                "SOURCE_MATERIAL",
                form::or_default(
                    &form.chapter_content,
                    "No specific source provided, please generate based on the topic.",
                ),
            );
        }
        Overlay::Experience => {
            set("TOPIC", form::or_default(&form.topic, "General"));
        }
        Overlay::Social => {
            set("TOPIC", form::or_default(&form.topic, "General Studies"));
        }
        Overlay::Community => {
            set("STUDENT_QUESTION", form.query.clone());
            set("TOPIC", form::or_default(&form.topic, "General"));
        }
        Overlay::StudyRoom => {
            set("ROOM_TYPE", form.room_type.clone());
            set("TOPIC", form::or_default(&form.topic, "Focus Session"));
        }
        Overlay::Mood => {
            set("MOOD", form.mood.clone());
            set("STRESS_LEVEL", form.stress_level.clone());
            set("TOPIC", form::or_default(&form.topic, "School"));
        }
        Overlay::Relief => {
            set("TOPIC", form::or_default(&form.topic, "Upcoming Exam"));
            set("STRESS_LEVEL", form.stress_level.clone());
        }
        Overlay::Break => {
            set("MOOD", form.mood.clone());
            set("STUDY_HOURS", form.study_hours.clone());
        }
    }

    vars
}

/// Tool → (template, overlay) table, checked for completeness on construction.
#[derive(Debug, Clone)]
pub struct ToolTable {
    registry: TemplateRegistry,
}

impl ToolTable {
    pub fn new(registry: TemplateRegistry) -> Result<Self, DispatchError> {
        for template in registry.iter() {
            let provided = Overlay::for_tool(template.tool()).provided_keys();
            let missing: Vec<String> = template
                .placeholders()
                .into_iter()
                .filter(|name| !provided.contains(name))
                .map(str::to_string)
                .collect();

            if !missing.is_empty() {
                return Err(DispatchError::MissingKeys {
                    tool: template.tool(),
                    missing,
                });
            }
        }

        Ok(Self { registry })
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }
}
