//! Request handlers, tried in order until one matches.

use strum::Display;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::i18n::I18n;
use crate::legality::{Utterance, compose};
use crate::scryfall::{CardLookup, LookupOutcome};

use super::envelope::{Intent, IntentName, SkillRequest};
use super::response::SpeechResponse;

pub const CARD_NAME_SLOT: &str = "cardname";
pub const GAME_FORMAT_SLOT: &str = "gameformat";

/// Everything a handler needs for one request
pub struct HandlerContext<'a> {
    pub lookup: &'a dyn CardLookup,
    pub i18n: &'a I18n,
    pub locale: &'a str,
}

impl HandlerContext<'_> {
    pub fn message(&self, key: &str) -> String {
        self.i18n.get(self.locale, key, None)
    }

    pub fn message_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.i18n.format(self.locale, key, args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkillHandler {
    Launch,
    CardLegality,
    Help,
    CancelAndStop,
    SessionEnded,
    IntentReflector,
}

impl SkillHandler {
    /// Dispatch order. The reflector accepts any intent, so it must stay last.
    pub const CHAIN: [SkillHandler; 6] = [
        SkillHandler::Launch,
        SkillHandler::CardLegality,
        SkillHandler::Help,
        SkillHandler::CancelAndStop,
        SkillHandler::SessionEnded,
        SkillHandler::IntentReflector,
    ];

    pub fn matches(&self, request: &SkillRequest) -> bool {
        let intent_name = request.intent().and_then(Intent::known_name);

        match self {
            SkillHandler::Launch => matches!(request, SkillRequest::LaunchRequest(_)),
            SkillHandler::CardLegality => intent_name == Some(IntentName::CardLegality),
            SkillHandler::Help => intent_name == Some(IntentName::Help),
            SkillHandler::CancelAndStop => {
                matches!(intent_name, Some(IntentName::Cancel | IntentName::Stop))
            }
            SkillHandler::SessionEnded => matches!(request, SkillRequest::SessionEndedRequest(_)),
            SkillHandler::IntentReflector => request.intent().is_some(),
        }
    }

    pub async fn handle(
        &self,
        request: &SkillRequest,
        ctx: &HandlerContext<'_>,
    ) -> ServiceResult<SpeechResponse> {
        match self {
            SkillHandler::Launch => {
                let welcome = ctx.message("skill-welcome");
                Ok(SpeechResponse::ask(welcome.clone(), welcome))
            }
            SkillHandler::CardLegality => handle_card_legality(request, ctx).await,
            SkillHandler::Help => {
                let help = ctx.message("skill-help");
                Ok(SpeechResponse::ask(help.clone(), help))
            }
            SkillHandler::CancelAndStop => Ok(SpeechResponse::speak(ctx.message("skill-goodbye"))),
            SkillHandler::SessionEnded => {
                if let SkillRequest::SessionEndedRequest(ended) = request {
                    info!(reason = ?ended.reason, "Session ended");
                }
                Ok(SpeechResponse::empty())
            }
            SkillHandler::IntentReflector => {
                let name = request.intent().map(|intent| intent.name.as_str()).unwrap_or_default();
                Ok(SpeechResponse::speak(
                    ctx.message_with("skill-reflector", &[("intent", name)]),
                ))
            }
        }
    }
}

async fn handle_card_legality(
    request: &SkillRequest,
    ctx: &HandlerContext<'_>,
) -> ServiceResult<SpeechResponse> {
    let intent = request
        .intent()
        .ok_or_else(|| ServiceError::UnhandledRequest {
            request_type: request.type_name().to_string(),
        })?;
    let card_name = intent
        .slot_value(CARD_NAME_SLOT)
        .ok_or_else(|| ServiceError::MissingSlot {
            slot: CARD_NAME_SLOT.to_string(),
        })?;
    let game_format = intent.slot_value(GAME_FORMAT_SLOT);

    info!(card = %card_name, format = ?game_format, "Card legality requested");

    let outcome = ctx.lookup.resolve_card(card_name).await?;
    if let LookupOutcome::Error(error) = &outcome {
        debug!(card = %card_name, code = ?error.code, details = %error.details, "Card not found");
    }

    let speech = match compose(&outcome, game_format) {
        Utterance::Spoken(text) => text,
        Utterance::UnrecognizedFormat { format } => {
            info!(format = %format, "Requested format not in card legalities");
            ctx.message_with("skill-unknown-format", &[("format", &format)])
        }
    };

    Ok(SpeechResponse::ask(speech, ctx.message("skill-reprompt")))
}
