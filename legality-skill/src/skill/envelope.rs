//! Voice platform request and response envelopes.
//!
//! Only the fields the skill reads or writes are modelled; everything else
//! in the platform's JSON is ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};

/// Incoming request envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    pub request: SkillRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    #[serde(default, rename = "new")]
    pub is_new: bool,
}

/// The request body, discriminated by its `type` field
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    pub intent: Intent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl SkillRequest {
    /// The platform's name for this request type
    pub fn type_name(&self) -> &'static str {
        match self {
            SkillRequest::LaunchRequest(_) => "LaunchRequest",
            SkillRequest::IntentRequest(_) => "IntentRequest",
            SkillRequest::SessionEndedRequest(_) => "SessionEndedRequest",
            SkillRequest::Unknown => "Unknown",
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        match self {
            SkillRequest::LaunchRequest(r) => r.request_id.as_deref(),
            SkillRequest::IntentRequest(r) => r.request_id.as_deref(),
            SkillRequest::SessionEndedRequest(r) => r.request_id.as_deref(),
            SkillRequest::Unknown => None,
        }
    }

    pub fn locale(&self) -> Option<&str> {
        match self {
            SkillRequest::LaunchRequest(r) => r.locale.as_deref(),
            SkillRequest::IntentRequest(r) => r.locale.as_deref(),
            SkillRequest::SessionEndedRequest(r) => r.locale.as_deref(),
            SkillRequest::Unknown => None,
        }
    }

    pub fn intent(&self) -> Option<&Intent> {
        match self {
            SkillRequest::IntentRequest(r) => Some(&r.intent),
            _ => None,
        }
    }
}

/// Intents the skill knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum IntentName {
    #[strum(serialize = "CardLegalityIntent")]
    CardLegality,
    #[strum(serialize = "AMAZON.HelpIntent")]
    Help,
    #[strum(serialize = "AMAZON.CancelIntent")]
    Cancel,
    #[strum(serialize = "AMAZON.StopIntent")]
    Stop,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}

impl Intent {
    /// Known intent, if the name is one the skill handles
    pub fn known_name(&self) -> Option<IntentName> {
        self.name.parse().ok()
    }

    /// Value of a filled slot; blank values count as unfilled
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Outgoing response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeechType {
    PlainText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: SpeechType,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: SpeechType::PlainText,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}
