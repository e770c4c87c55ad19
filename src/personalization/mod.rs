//! System-instruction builder.
//!
//! Turns a profile snapshot and a response language into the text that
//! steers the model's tone, format and language. The hydrated user prompt is
//! never touched here.

use crate::profile::{Language, LearningStyle, Region, StudentProfile};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRole {
    /// Single-shot tool generations.
    Tutor,
    /// The chat tutor.
    ConversationalTutor,
}

impl BaseRole {
    pub fn describe(&self, profile: &StudentProfile) -> String {
        match self {
            BaseRole::Tutor => {
                "You are EduBot, a helpful, encouraging, and safe AI tutor for students K-12."
                    .to_string()
            }
            BaseRole::ConversationalTutor => format!(
                "You are EduBot, a personalized AI Tutor for {}. Be conversational and Socratic.",
                profile.name
            ),
        }
    }
}

pub const FORMATTING_DIRECTIVE: &str = "Formatting: Use Markdown. Be concise but thorough.";

pub const BILINGUAL_EXAMPLE: &str = "\"Photosynthesis (ஒளிச்சேர்க்கை)\"";

pub fn style_clause(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => "The student is a VISUAL learner. ALWAYS include text-based diagrams (ASCII art), flowcharts using arrows (->), and vivid visual descriptions. Use spatial metaphors.",
        LearningStyle::Auditory => "The student is an AUDITORY learner. Write in a conversational, podcast-like style. Use rhymes, mnemonics, and sound-based analogies. Encourage them to read the answer aloud.",
        LearningStyle::Interactive => "The student is an INTERACTIVE learner. Gamify the content. Use 'Try this' challenges, ask questions back to them, and break concepts into steps they can act on.",
        LearningStyle::Reading => "The student prefers READING/WRITING. Use structured lists, clear definitions, and detailed text explanations. Suggest note-taking strategies.",
    }
}

/// Tamil responses get Tamil Nadu examples even for a general-region profile.
pub fn cultural_clause(region: Region, language: Language) -> &'static str {
    if language == Language::Tamil || region == Region::TamilNadu {
        "CULTURAL CONTEXT: Tamil Nadu, India. Use local examples (e.g., Chennai, Madurai, Kaveri river), references to Thirukkural if relevant, and local food/names (Idli, Dosa, Raja, Priya) to make examples relatable."
    } else {
        "CULTURAL CONTEXT: General Indian context. Use relatable examples for an Indian student."
    }
}

pub fn accessibility_clause(profile: &StudentProfile) -> Option<&'static str> {
    profile.accessibility.dyslexia_friendly.then_some(
        "ACCESSIBILITY: The student uses Dyslexia-friendly mode. Use short, clear sentences. Avoid dense paragraphs. Use bullet points and extra spacing. Avoid complex sentence structures.",
    )
}

pub fn language_directive(language: Language) -> String {
    match language {
        Language::English => "Respond in English.".to_string(),
        Language::Tamil => format!(
            "IMPORTANT: Provide the response in Tamil. However, keep technical terms, scientific names, and key concepts in English (or English with Tamil explanation). Example: {BILINGUAL_EXAMPLE}."
        ),
    }
}

pub fn build_system_instruction(
    base_role: BaseRole,
    profile: &StudentProfile,
    language: Language,
) -> String {
    let mut adaptations = vec![
        style_clause(profile.learning_style),
        cultural_clause(profile.region, language),
    ];
    if let Some(clause) = accessibility_clause(profile) {
        adaptations.push(clause);
    }

    let mut out = base_role.describe(profile);
    out.push_str("\n\nSTUDENT PROFILE:\n");
    let _ = writeln!(out, "- Name: {}", profile.name);
    let _ = writeln!(out, "- Class: {}", profile.class_number);
    let _ = writeln!(out, "- Learning Style: {}", profile.learning_style.as_str());
    let _ = writeln!(out, "- Pace: {}", profile.learning_pace.as_str());

    out.push_str("\nADAPTATION INSTRUCTIONS:\n");
    for (index, clause) in adaptations.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, clause);
    }

    let _ = writeln!(out, "\nResponse Language: {}.", language.as_str());
    out.push_str(&language_directive(language));
    out.push_str("\n\n");
    out.push_str(FORMATTING_DIRECTIVE);
    out
}
