use super::*;
use std::sync::Mutex;

enum Reply {
    Text(&'static str),
    Empty,
    Fail,
}

struct FakeBackend {
    reply: Reply,
    seen: Mutex<Vec<ModelRequest>>,
}

impl FakeBackend {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last(&self) -> ModelRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ModelBackend for FakeBackend {
    async fn generate(&self, request: &ModelRequest) -> Result<Option<String>, LLMError> {
        self.seen.lock().unwrap().push(request.clone());
        match self.reply {
            Reply::Text(text) => Ok(Some(text.to_string())),
            Reply::Empty => Ok(None),
            Reply::Fail => Err(LLMError::Connection("connection refused".to_string())),
        }
    }
}

fn adapter(backend: Arc<FakeBackend>) -> ModelAdapter {
    ModelAdapter::new(backend, DEFAULT_MODEL)
}

#[tokio::test]
async fn education_response_returns_model_text() {
    let backend = FakeBackend::new(Reply::Text("Ice is less dense than water."));
    let text = adapter(backend.clone())
        .generate_education_response("Why does ice float?", &StudentProfile::default(), Language::English)
        .await;

    assert_eq!(text, "Ice is less dense than water.");
    let request = backend.last();
    assert_eq!(request.model, DEFAULT_MODEL);
    assert_eq!(request.contents, vec![Content::user("Why does ice float?")]);
    assert!(request
        .system_instruction
        .starts_with("You are EduBot, a helpful, encouraging, and safe AI tutor"));
    assert_eq!(
        request.generation_config,
        Some(GenerationConfig {
            thinking_config: Some(ThinkingConfig { thinking_budget: 0 })
        })
    );
}

#[tokio::test]
async fn education_response_falls_back_on_transport_error() {
    let backend = FakeBackend::new(Reply::Fail);
    let text = adapter(backend)
        .generate_education_response("anything", &StudentProfile::default(), Language::Tamil)
        .await;
    assert_eq!(text, FAILED_EDUCATION_RESPONSE);
}

#[tokio::test]
async fn education_response_apologizes_when_empty() {
    let backend = FakeBackend::new(Reply::Empty);
    let text = adapter(backend)
        .generate_education_response("anything", &StudentProfile::default(), Language::English)
        .await;
    assert_eq!(text, EMPTY_EDUCATION_RESPONSE);
}

#[tokio::test]
async fn chat_replays_history_then_new_message() {
    let backend = FakeBackend::new(Reply::Text("What do you think happens to density?"));
    let history = vec![
        ChatMessage::user("Hi"),
        ChatMessage::model("Hello Alex! What shall we explore?"),
    ];

    let text = adapter(backend.clone())
        .generate_chat_response(&history, "Why does ice float?", &StudentProfile::default(), Language::English)
        .await;

    assert_eq!(text, "What do you think happens to density?");
    assert_eq!(history.len(), 2);

    let request = backend.last();
    assert_eq!(
        request.contents,
        vec![
            Content::user("Hi"),
            Content::model("Hello Alex! What shall we explore?"),
            Content::user("Why does ice float?"),
        ]
    );
    assert!(request.generation_config.is_none());
    assert!(request
        .system_instruction
        .starts_with("You are EduBot, a personalized AI Tutor for Alex."));
}

#[test]
fn chat_fallbacks() {
    let failing = adapter(FakeBackend::new(Reply::Fail));
    let empty = adapter(FakeBackend::new(Reply::Empty));
    let profile = StudentProfile::default();

    let failed = tokio_test::block_on(failing.generate_chat_response(&[], "hi", &profile, Language::English));
    let silent = tokio_test::block_on(empty.generate_chat_response(&[], "hi", &profile, Language::English));

    assert_eq!(failed, FAILED_CHAT_RESPONSE);
    assert_eq!(silent, EMPTY_CHAT_RESPONSE);
}

#[test]
fn chat_message_roles_serialize_lowercase() {
    let message = ChatMessage::model("ok");
    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value["role"], "model");
    assert_eq!(value["content"], "ok");
}
