//! Speech response construction.

use super::envelope::{OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope};

const RESPONSE_VERSION: &str = "1.0";

/// What the skill says back, before it is wrapped in the platform envelope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechResponse {
    pub speech_text: Option<String>,
    pub reprompt_text: Option<String>,
    pub should_end_session: Option<bool>,
}

impl SpeechResponse {
    /// Speak and end the session
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speech_text: Some(text.into()),
            reprompt_text: None,
            should_end_session: Some(true),
        }
    }

    /// Speak and keep the session open, re-prompting with `reprompt`
    pub fn ask(text: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech_text: Some(text.into()),
            reprompt_text: Some(reprompt.into()),
            should_end_session: Some(false),
        }
    }

    /// Nothing to say; used when the platform has already closed the session
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn into_envelope(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: self.speech_text.map(OutputSpeech::plain_text),
                reprompt: self.reprompt_text.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain_text(text),
                }),
                should_end_session: self.should_end_session,
            },
        }
    }
}
