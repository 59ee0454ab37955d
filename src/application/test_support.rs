//! In-memory port doubles shared by the workflow service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::application::ports::outbound::{
    AuthorizationPort, CharacterStorePort, ChatPort, ConfirmationPort, Decision, ExperienceBlock,
    TemplatePort, WarningPort,
};
use crate::domain::entities::Participant;
use crate::domain::value_objects::{ParticipantId, RewardSkip, UserId};

/// Install a log subscriber writing to the test harness output.
///
/// Tests share one process, so later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reward_experience=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Fixed answer to the game-master check.
pub struct FixedAuthorization(pub bool);

impl AuthorizationPort for FixedAuthorization {
    fn is_game_master(&self) -> bool {
        self.0
    }
}

/// Renders `"<template_id>|<data>"` and records the identifiers rendered.
#[derive(Default)]
pub struct RecordingTemplates {
    pub rendered: Mutex<Vec<String>>,
    pub fail: bool,
}

#[async_trait]
impl TemplatePort for RecordingTemplates {
    async fn render(&self, template_id: &str, data: serde_json::Value) -> Result<String> {
        if self.fail {
            return Err(anyhow!("template {} missing", template_id));
        }
        self.rendered.lock().unwrap().push(template_id.to_string());
        Ok(format!("{template_id}|{data}"))
    }
}

/// Records every whisper; optionally fails all sends.
#[derive(Default)]
pub struct RecordingChat {
    pub sent: Mutex<Vec<(Vec<UserId>, String)>>,
    pub fail: bool,
}

#[async_trait]
impl ChatPort for RecordingChat {
    async fn send_private_message(&self, recipients: &[UserId], content: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("recipient mailbox unavailable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipients.to_vec(), content.to_string()));
        Ok(())
    }
}

/// Character store over a hash map, recording every update.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<ParticipantId, ExperienceBlock>>,
    pub updates: Mutex<Vec<(ParticipantId, u32)>>,
}

impl InMemoryStore {
    pub fn with_record(self, participant: &Participant, current: u32, threshold: u32) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(participant.id, ExperienceBlock { current, threshold });
        self
    }

    pub fn record(&self, id: ParticipantId) -> Option<ExperienceBlock> {
        self.records.lock().unwrap().get(&id).copied()
    }
}

#[async_trait]
impl CharacterStorePort for InMemoryStore {
    async fn experience(&self, participant: &Participant) -> Result<ExperienceBlock> {
        self.records
            .lock()
            .unwrap()
            .get(&participant.id)
            .copied()
            .ok_or_else(|| anyhow!("no character record for {}", participant.name))
    }

    async fn update_experience(&self, participant: &Participant, new_total: u32) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let block = records
            .get_mut(&participant.id)
            .ok_or_else(|| anyhow!("no character record for {}", participant.name))?;
        block.current = new_total;
        self.updates
            .lock()
            .unwrap()
            .push((participant.id, new_total));
        Ok(())
    }
}

/// Resolves every dialog with a scripted decision.
pub struct ScriptedConfirmation {
    pub decision: Decision,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmation {
    pub fn new(decision: Decision) -> Self {
        Self {
            decision,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfirmationPort for ScriptedConfirmation {
    async fn request(&self, prompt_markup: &str) -> Decision {
        self.prompts.lock().unwrap().push(prompt_markup.to_string());
        self.decision
    }
}

/// Records surfaced warnings.
#[derive(Default)]
pub struct RecordingWarnings {
    pub warned: Mutex<Vec<RewardSkip>>,
}

impl WarningPort for RecordingWarnings {
    fn warn(&self, skip: RewardSkip) {
        self.warned.lock().unwrap().push(skip);
    }
}
