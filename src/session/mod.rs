//! Session coordinator: form → variables → prompt → model → text.
//!
//! A session owns the student profile, the response language, the chat
//! history and today's challenge. Each generate or chat action works on a
//! snapshot of that state and only one action may be in flight at a time.

use crate::config::Config;
use crate::dispatch::{build_variables, DispatchError, FormState, ToolTable};
use crate::llm::{ChatMessage, GeminiClient, LLMError, ModelAdapter};
use crate::personalization::{build_system_instruction, BaseRole};
use crate::profile::{
    suggest, DailyChallenge, Language, OnboardingAnswers, Reward, RewardError, StudentProfile,
    Suggestion,
};
use crate::templates::{TemplateError, TemplateRegistry};
use crate::tools::ToolId;
use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Another request is already in progress")]
    Busy,
    #[error("Message is empty")]
    EmptyMessage,
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Reward(#[from] RewardError),
    #[error(transparent)]
    Model(#[from] LLMError),
}

/// What would be sent for a tool, without calling the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub tool: ToolId,
    pub system_instruction: String,
    pub prompt: String,
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub request_id: Uuid,
    pub tool: ToolId,
    pub prompt: String,
    pub text: String,
    pub challenge_completed: bool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::Busy)?;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct Session {
    tools: ToolTable,
    adapter: ModelAdapter,
    profile: RwLock<StudentProfile>,
    language: RwLock<Language>,
    history: RwLock<Vec<ChatMessage>>,
    challenge: RwLock<DailyChallenge>,
    busy: AtomicBool,
}

impl Session {
    pub fn new(
        tools: ToolTable,
        adapter: ModelAdapter,
        profile: StudentProfile,
        language: Language,
    ) -> Self {
        Self {
            tools,
            adapter,
            profile: RwLock::new(profile),
            language: RwLock::new(language),
            history: RwLock::new(Vec::new()),
            challenge: RwLock::new(DailyChallenge::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Session backed by the Gemini REST API.
    pub fn from_config(config: &Config, profile: StudentProfile) -> Result<Self, SessionError> {
        let tools = ToolTable::new(TemplateRegistry::new())?;
        let backend = Arc::new(GeminiClient::new(config)?);
        let adapter = ModelAdapter::new(backend, config.model.clone());
        Ok(Self::new(tools, adapter, profile, config.default_language))
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn profile(&self) -> StudentProfile {
        self.profile.read().await.clone()
    }

    pub async fn language(&self) -> Language {
        *self.language.read().await
    }

    pub async fn set_language(&self, language: Language) {
        *self.language.write().await = language;
        info!(language = %language, "Response language changed");
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.read().await.clone()
    }

    pub async fn clear_history(&self) {
        self.history.write().await.clear();
    }

    pub async fn challenge(&self) -> DailyChallenge {
        self.challenge.read().await.clone()
    }

    pub async fn update_profile<F>(&self, edit: F)
    where
        F: FnOnce(&mut StudentProfile),
    {
        let mut profile = self.profile.write().await;
        edit(&mut *profile);
        debug!(name = %profile.name, class = %profile.class_number, "Profile updated");
    }

    pub async fn complete_onboarding(&self, answers: OnboardingAnswers) {
        self.update_profile(|profile| profile.apply_onboarding(answers))
            .await;
    }

    pub async fn suggestion(&self) -> Suggestion {
        suggest(&*self.profile.read().await)
    }

    pub async fn claim_reward(&self) -> Result<Reward, SessionError> {
        let mut challenge = self.challenge.write().await;
        let mut profile = self.profile.write().await;
        let reward = challenge.claim(&mut *profile)?;
        info!(xp = reward.xp, stars = reward.stars, total_xp = profile.xp, "Reward claimed");
        Ok(reward)
    }

    pub async fn preview(&self, tool: ToolId, form: &FormState) -> Result<Preview, SessionError> {
        self.preview_on(tool, form, Local::now().date_naive()).await
    }

    pub async fn preview_on(
        &self,
        tool: ToolId,
        form: &FormState,
        today: NaiveDate,
    ) -> Result<Preview, SessionError> {
        let profile = self.profile().await;
        let language = self.language().await;
        let template = self.tools.registry().get(tool)?;

        let vars = build_variables(tool, form, &profile, today);
        let hydrated = template.hydrate(&vars);

        Ok(Preview {
            tool,
            system_instruction: build_system_instruction(BaseRole::Tutor, &profile, language),
            prompt: hydrated.text,
            unresolved: hydrated.unresolved,
        })
    }

    pub async fn generate(
        &self,
        tool: ToolId,
        form: &FormState,
    ) -> Result<Generation, SessionError> {
        self.generate_on(tool, form, Local::now().date_naive()).await
    }

    /// Runs one tool as of `today`.
    pub async fn generate_on(
        &self,
        tool: ToolId,
        form: &FormState,
        today: NaiveDate,
    ) -> Result<Generation, SessionError> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let profile = self.profile().await;
        let language = self.language().await;
        let template = self.tools.registry().get(tool)?;

        let vars = build_variables(tool, form, &profile, today);
        let hydrated = template.hydrate(&vars);
        for name in &hydrated.unresolved {
            warn!(%request_id, %tool, placeholder = %name, "Unresolved placeholder left in prompt");
        }

        info!(%request_id, %tool, language = %language, "Generating");
        let text = self
            .adapter
            .generate_education_response(&hydrated.text, &profile, language)
            .await;

        let challenge_completed = self.challenge.write().await.record_use(tool);
        if challenge_completed {
            info!(%request_id, %tool, "Daily challenge completed");
        }

        info!(
            %request_id,
            %tool,
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = text.len(),
            "Generation finished"
        );

        Ok(Generation {
            request_id,
            tool,
            prompt: hydrated.text,
            text,
            challenge_completed,
        })
    }

    /// Sends `message` to the chat tutor and records both turns.
    pub async fn chat(&self, message: &str) -> Result<String, SessionError> {
        if message.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let profile = self.profile().await;
        let language = self.language().await;
        let history = self.history().await;

        info!(%request_id, turns = history.len(), "Chat turn");
        let reply = self
            .adapter
            .generate_chat_response(&history, message, &profile, language)
            .await;

        let mut stored = self.history.write().await;
        stored.push(ChatMessage::user(message));
        stored.push(ChatMessage::model(reply.clone()));

        debug!(
            %request_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chat turn finished"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests;
