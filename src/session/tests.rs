use super::*;
use crate::llm::{LLMError, ModelBackend, ModelRequest, Role};
use crate::profile::{LearningPace, LearningStyle};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Notify;

#[derive(Default)]
struct EchoBackend {
    seen: Mutex<Vec<ModelRequest>>,
}

#[async_trait]
impl ModelBackend for EchoBackend {
    async fn generate(&self, request: &ModelRequest) -> Result<Option<String>, LLMError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(Some(format!("reply #{}", self.seen.lock().unwrap().len())))
    }
}

/// Blocks inside `generate` until released.
#[derive(Default)]
struct GatedBackend {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl ModelBackend for GatedBackend {
    async fn generate(&self, _request: &ModelRequest) -> Result<Option<String>, LLMError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Some("done".to_string()))
    }
}

fn session_with(backend: Arc<dyn ModelBackend>) -> Session {
    let tools = ToolTable::new(TemplateRegistry::new()).unwrap();
    Session::new(
        tools,
        ModelAdapter::new(backend, "test-model"),
        StudentProfile::default(),
        Language::English,
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()
}

#[tokio::test]
async fn generate_sends_hydrated_prompt() {
    let backend = Arc::new(EchoBackend::default());
    let session = session_with(backend.clone());
    let form = FormState {
        subject: "Physics".to_string(),
        query: "Why does ice float?".to_string(),
        ..FormState::for_profile(&session.profile().await)
    };

    let generation = session
        .generate_on(ToolId::DoubtSolver, &form, today())
        .await
        .unwrap();

    assert_eq!(generation.text, "reply #1");
    assert!(!generation.challenge_completed);
    assert!(generation.prompt.contains("Why does ice float?"));
    assert!(!session.is_busy());

    let seen = backend.seen.lock().unwrap();
    assert_eq!(seen[0].contents[0].parts[0].text.as_deref(), Some(generation.prompt.as_str()));
}

#[tokio::test]
async fn conversational_tool_has_no_template() {
    let session = session_with(Arc::new(EchoBackend::default()));
    let err = session
        .generate_on(ToolId::AiTutor, &FormState::default(), today())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SessionError::Template(TemplateError::NotFound { tool: ToolId::AiTutor })
    ));
    assert!(!session.is_busy());
}

#[tokio::test]
async fn challenge_completion_and_reward_claim() {
    let session = session_with(Arc::new(EchoBackend::default()));

    assert!(matches!(
        session.claim_reward().await,
        Err(SessionError::Reward(RewardError::NotCompleted { .. }))
    ));

    let generation = session
        .generate_on(ToolId::InteractiveQuiz, &FormState::default(), today())
        .await
        .unwrap();
    assert!(generation.challenge_completed);
    assert!(session.challenge().await.completed);

    let reward = session.claim_reward().await.unwrap();
    assert_eq!(reward, Reward { xp: 500, stars: 25 });

    let profile = session.profile().await;
    assert_eq!(profile.xp, 1750);
    assert_eq!(profile.stars, 70);

    assert!(matches!(
        session.claim_reward().await,
        Err(SessionError::Reward(RewardError::AlreadyClaimed { .. }))
    ));
}

#[tokio::test]
async fn second_submission_while_busy_is_rejected() {
    let backend = Arc::new(GatedBackend::default());
    let session = Arc::new(session_with(backend.clone()));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            session
                .generate_on(ToolId::MindMap, &FormState::default(), today())
                .await
        })
    };

    backend.entered.notified().await;
    assert!(session.is_busy());

    let second = session
        .generate_on(ToolId::MindMap, &FormState::default(), today())
        .await;
    assert!(matches!(second, Err(SessionError::Busy)));
    assert!(matches!(session.chat("hello").await, Err(SessionError::Busy)));

    backend.release.notify_one();
    let first = first.await.unwrap().unwrap();
    assert_eq!(first.text, "done");
    assert!(!session.is_busy());
}

#[tokio::test]
async fn chat_records_turns_and_replays_them() {
    let backend = Arc::new(EchoBackend::default());
    let session = session_with(backend.clone());

    assert_eq!(session.chat("Hi").await.unwrap(), "reply #1");
    assert_eq!(session.chat("Why does ice float?").await.unwrap(), "reply #2");

    let history = session.history().await;
    let contents: Vec<_> = history.iter().map(|m| (m.role, m.content.as_str())).collect();
    assert_eq!(
        contents,
        vec![
            (Role::User, "Hi"),
            (Role::Model, "reply #1"),
            (Role::User, "Why does ice float?"),
            (Role::Model, "reply #2"),
        ]
    );

    let seen = backend.seen.lock().unwrap();
    assert_eq!(seen[1].contents.len(), 3);

    drop(seen);
    session.clear_history().await;
    assert!(session.history().await.is_empty());
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let session = session_with(Arc::new(EchoBackend::default()));
    assert!(matches!(session.chat("   ").await, Err(SessionError::EmptyMessage)));
    assert!(session.history().await.is_empty());
}

#[tokio::test]
async fn preview_follows_language_and_profile_edits() {
    let session = session_with(Arc::new(EchoBackend::default()));
    session.set_language(Language::Tamil).await;
    session
        .update_profile(|profile| profile.name = "Priya".to_string())
        .await;

    let preview = session
        .preview_on(ToolId::Simplifier, &FormState::default(), today())
        .await
        .unwrap();

    assert!(preview.system_instruction.contains("- Name: Priya"));
    assert!(preview.system_instruction.contains("Response Language: Tamil."));
    assert!(preview.prompt.contains("**What is General?**"));
    assert!(preview.unresolved.is_empty());
}

#[tokio::test]
async fn onboarding_changes_the_suggestion() {
    let session = session_with(Arc::new(EchoBackend::default()));
    assert_eq!(session.suggestion().await.tool, ToolId::VisualDiagrams);

    session
        .complete_onboarding(OnboardingAnswers {
            learning_style: Some(LearningStyle::Auditory),
            primary_goal: Some("Board exams".to_string()),
            learning_pace: Some(LearningPace::Fast),
        })
        .await;

    let profile = session.profile().await;
    assert_eq!(profile.learning_pace, LearningPace::Fast);
    assert_eq!(profile.primary_goal.as_deref(), Some("Board exams"));
    assert_eq!(session.suggestion().await.tool, ToolId::AudioNotes);
}
