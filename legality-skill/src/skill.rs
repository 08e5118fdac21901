//! Voice skill request handling.
//!
//! A request is offered to each handler in `SkillHandler::CHAIN` until one
//! matches. Any error from the chain, including no handler matching, is
//! logged and answered with a spoken apology that keeps the session open.

mod envelope;
mod handlers;
mod response;

pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use response::SpeechResponse;

use std::sync::Arc;
use tracing::{debug, error};

use crate::error::{ServiceError, ServiceResult, format_error_chain_ref};
use crate::i18n::{DEFAULT_LOCALE, I18n};
use crate::scryfall::CardLookup;

use envelope::SkillRequest;
use handlers::{HandlerContext, SkillHandler};

/// Stateless request handler; one instance serves every request
pub struct Skill {
    lookup: Arc<dyn CardLookup>,
    i18n: Arc<I18n>,
}

impl Skill {
    pub fn new(lookup: Arc<dyn CardLookup>, i18n: Arc<I18n>) -> Self {
        Self { lookup, i18n }
    }

    /// Answer one request envelope. Never fails: errors become an apology.
    pub async fn handle(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let request = &envelope.request;
        let locale = request.locale().unwrap_or(DEFAULT_LOCALE);

        debug!(
            request_type = request.type_name(),
            request_id = ?request.request_id(),
            session_id = ?envelope.session.as_ref().map(|s| s.session_id.as_str()),
            new_session = envelope.session.as_ref().is_some_and(|s| s.is_new),
            version = ?envelope.version,
            "Handling skill request"
        );

        let ctx = HandlerContext {
            lookup: self.lookup.as_ref(),
            i18n: &self.i18n,
            locale,
        };

        let response = match self.dispatch(request, &ctx).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_type = request.type_name(),
                    error = %format_error_chain_ref(&e),
                    "Error handled"
                );
                self.apology(locale)
            }
        };

        response.into_envelope()
    }

    /// The generic "please try again" answer, session left open
    pub fn apology(&self, locale: &str) -> SpeechResponse {
        let apology = self.i18n.get(locale, "skill-apology", None);
        SpeechResponse::ask(apology.clone(), apology)
    }

    async fn dispatch(
        &self,
        request: &SkillRequest,
        ctx: &HandlerContext<'_>,
    ) -> ServiceResult<SpeechResponse> {
        let handler = SkillHandler::CHAIN
            .into_iter()
            .find(|handler| handler.matches(request))
            .ok_or_else(|| ServiceError::UnhandledRequest {
                request_type: request.type_name().to_string(),
            })?;

        debug!(handler = %handler, "Dispatching request");
        handler.handle(request, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legality::{LegalityMap, LegalityStatus};
    use crate::scryfall::{CardRecord, ErrorRecord, LookupError, LookupOutcome};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Card database stand-in that records the names it was asked for
    struct FakeLookup {
        cards: Vec<CardRecord>,
        fail: bool,
        requests: Mutex<Vec<String>>,
    }

    impl FakeLookup {
        fn with_cards(cards: Vec<CardRecord>) -> Self {
            Self {
                cards,
                fail: false,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                cards: Vec::new(),
                fail: true,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CardLookup for FakeLookup {
        async fn resolve_card(&self, fuzzy_name: &str) -> Result<LookupOutcome, LookupError> {
            self.requests.lock().unwrap().push(fuzzy_name.to_string());
            if self.fail {
                return Err(LookupError::ApiError {
                    status: 500,
                    message: "database exploded".to_string(),
                });
            }
            let found = self
                .cards
                .iter()
                .find(|card| card.name.eq_ignore_ascii_case(fuzzy_name));
            Ok(match found {
                Some(card) => LookupOutcome::Card(card.clone()),
                None => LookupOutcome::Error(ErrorRecord {
                    details: "No card found.".to_string(),
                    code: Some("not_found".to_string()),
                }),
            })
        }
    }

    fn card(name: &str, entries: &[(&str, &str)]) -> CardRecord {
        let legalities: LegalityMap = entries
            .iter()
            .map(|(format, status)| (*format, LegalityStatus::from(*status)))
            .collect();
        CardRecord {
            name: name.to_string(),
            legalities,
        }
    }

    fn skill_with(lookup: FakeLookup) -> (Skill, Arc<FakeLookup>) {
        let lookup = Arc::new(lookup);
        let skill = Skill::new(lookup.clone(), Arc::new(I18n::new()));
        (skill, lookup)
    }

    fn default_skill() -> Skill {
        skill_with(FakeLookup::with_cards(vec![
            card(
                "Bolt",
                &[
                    ("standard", "legal"),
                    ("modern", "legal"),
                    ("pioneer", "banned"),
                ],
            ),
            card("Lotus", &[("modern", "restricted")]),
        ]))
        .0
    }

    fn intent_request(name: &str, slots: serde_json::Value) -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "session": { "sessionId": "session-1", "new": false },
            "request": {
                "type": "IntentRequest",
                "requestId": "request-1",
                "locale": "en-US",
                "intent": { "name": name, "slots": slots }
            }
        }))
        .unwrap()
    }

    fn legality_request(card_name: Option<&str>, format: Option<&str>) -> RequestEnvelope {
        let mut slots = serde_json::Map::new();
        let mut slot = |slot_name: &str, value: Option<&str>| {
            let mut body = json!({ "name": slot_name });
            if let Some(value) = value {
                body["value"] = json!(value);
            }
            slots.insert(slot_name.to_string(), body);
        };
        slot("cardname", card_name);
        slot("gameformat", format);
        intent_request("CardLegalityIntent", serde_json::Value::Object(slots))
    }

    fn request_of_type(request_type: &str) -> RequestEnvelope {
        serde_json::from_value(json!({
            "request": { "type": request_type, "locale": "en-US" }
        }))
        .unwrap()
    }

    fn speech(envelope: &ResponseEnvelope) -> &str {
        envelope
            .response
            .output_speech
            .as_ref()
            .map(|speech| speech.text.as_str())
            .unwrap_or_default()
    }

    fn reprompt(envelope: &ResponseEnvelope) -> Option<&str> {
        envelope
            .response
            .reprompt
            .as_ref()
            .map(|reprompt| reprompt.output_speech.text.as_str())
    }

    const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";
    const REPROMPT: &str = "Any more card you want to know about?";

    #[tokio::test]
    async fn test_all_formats_answer() {
        let response = default_skill().handle(&legality_request(Some("Bolt"), None)).await;

        assert_eq!(
            speech(&response),
            "Bolt Is legal in standard and modern. Is banned in pioneer."
        );
        assert_eq!(reprompt(&response), Some(REPROMPT));
        assert_eq!(response.response.should_end_session, Some(false));
    }

    #[tokio::test]
    async fn test_single_format_answer() {
        let response = default_skill()
            .handle(&legality_request(Some("Lotus"), Some("modern")))
            .await;

        assert_eq!(speech(&response), "Lotus is restricted in modern");
        assert_eq!(reprompt(&response), Some(REPROMPT));
    }

    #[tokio::test]
    async fn test_unresolved_card_speaks_error_details() {
        let (skill, lookup) = skill_with(FakeLookup::with_cards(Vec::new()));
        let response = skill.handle(&legality_request(Some("Nothing"), None)).await;

        assert_eq!(speech(&response), "No card found.");
        assert_eq!(reprompt(&response), Some(REPROMPT));
        assert_eq!(*lookup.requests.lock().unwrap(), vec!["Nothing".to_string()]);
    }

    #[tokio::test]
    async fn test_unrecognized_format_message() {
        let response = default_skill()
            .handle(&legality_request(Some("Lotus"), Some("tiny leaders")))
            .await;

        assert_eq!(
            speech(&response),
            "Sorry, I don't know the format tiny leaders."
        );
        assert_eq!(reprompt(&response), Some(REPROMPT));
        assert_eq!(response.response.should_end_session, Some(false));
    }

    #[tokio::test]
    async fn test_lookup_failure_becomes_apology() {
        let (skill, _) = skill_with(FakeLookup::failing());
        let response = skill.handle(&legality_request(Some("Bolt"), None)).await;

        assert_eq!(speech(&response), APOLOGY);
        assert_eq!(reprompt(&response), Some(APOLOGY));
        assert_eq!(response.response.should_end_session, Some(false));
    }

    #[tokio::test]
    async fn test_missing_card_name_becomes_apology() {
        let (skill, lookup) = skill_with(FakeLookup::with_cards(Vec::new()));
        let response = skill.handle(&legality_request(None, Some("modern"))).await;

        assert_eq!(speech(&response), APOLOGY);
        assert!(lookup.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_launch_request() {
        let response = default_skill().handle(&request_of_type("LaunchRequest")).await;

        let welcome =
            "Hello! Which card do you want to know if is legal or not in Magic: The Gathering?";
        assert_eq!(speech(&response), welcome);
        assert_eq!(reprompt(&response), Some(welcome));
    }

    #[tokio::test]
    async fn test_help_intent() {
        let response = default_skill()
            .handle(&intent_request("AMAZON.HelpIntent", json!({})))
            .await;

        assert!(speech(&response).starts_with("You can ask if a Magic card is legal"));
        assert_eq!(reprompt(&response), Some(speech(&response)));
    }

    #[tokio::test]
    async fn test_cancel_and_stop_end_session() {
        for name in ["AMAZON.CancelIntent", "AMAZON.StopIntent"] {
            let response = default_skill().handle(&intent_request(name, json!({}))).await;

            assert_eq!(speech(&response), "Goodbye!");
            assert_eq!(reprompt(&response), None);
            assert_eq!(response.response.should_end_session, Some(true));
        }
    }

    #[tokio::test]
    async fn test_session_ended_is_silent() {
        let response = default_skill()
            .handle(&request_of_type("SessionEndedRequest"))
            .await;

        assert!(response.response.output_speech.is_none());
        assert!(response.response.reprompt.is_none());
        assert!(response.response.should_end_session.is_none());
    }

    #[tokio::test]
    async fn test_unknown_intent_is_reflected() {
        let response = default_skill()
            .handle(&intent_request("AMAZON.FallbackIntent", json!({})))
            .await;

        assert_eq!(speech(&response), "You just triggered AMAZON.FallbackIntent");
        assert_eq!(response.response.should_end_session, Some(true));
    }

    #[tokio::test]
    async fn test_unknown_request_type_becomes_apology() {
        let response = default_skill()
            .handle(&request_of_type("CanFulfillIntentRequest"))
            .await;

        assert_eq!(speech(&response), APOLOGY);
    }

    #[test]
    fn test_reflector_is_last_in_chain() {
        assert_eq!(
            SkillHandler::CHAIN.last(),
            Some(&SkillHandler::IntentReflector)
        );

        // Every real intent is claimed before the reflector sees it
        for name in [
            "CardLegalityIntent",
            "AMAZON.HelpIntent",
            "AMAZON.CancelIntent",
            "AMAZON.StopIntent",
        ] {
            let envelope = intent_request(name, json!({}));
            let first = SkillHandler::CHAIN
                .into_iter()
                .find(|handler| handler.matches(&envelope.request));
            assert_ne!(first, Some(SkillHandler::IntentReflector), "intent {name}");
        }
    }
}
