use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "en";

/// Spoken-message catalogue using Fluent
pub struct I18n {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    default_locale: String,
}

impl I18n {
    /// Create a new catalogue with embedded English messages
    pub fn new() -> Self {
        let mut i18n = Self {
            bundles: HashMap::new(),
            default_locale: DEFAULT_LOCALE.to_string(),
        };

        i18n.load_embedded_en();

        i18n
    }

    /// Add a locale with translations
    pub fn add_locale(&mut self, locale: &str, content: &str) -> Result<(), String> {
        let lang_id: LanguageIdentifier = locale
            .parse()
            .map_err(|e| format!("Invalid locale '{}': {}", locale, e))?;

        let resource = FluentResource::try_new(content.to_string())
            .map_err(|(_, errors)| format!("Failed to parse Fluent resource: {:?}", errors))?;

        let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
        // Output is spoken, so no Unicode bidi isolation marks around arguments
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| format!("Failed to add resource to bundle: {:?}", errors))?;

        self.bundles.insert(locale.to_string(), bundle);

        debug!(locale = %locale, "Loaded translations");

        Ok(())
    }

    /// Get a translated message
    ///
    /// Tries the exact locale ("en-GB"), then its language ("en"), then the
    /// default locale, then falls back to the key itself.
    pub fn get(&self, locale: &str, key: &str, args: Option<&FluentArgs>) -> String {
        let language = locale.split(['-', '_']).next().unwrap_or(locale);

        self.try_get(locale, key, args)
            .or_else(|| self.try_get(language, key, args))
            .or_else(|| self.try_get(&self.default_locale, key, args))
            .unwrap_or_else(|| key.to_string())
    }

    /// Try to get a translation from a specific locale
    fn try_get(&self, locale: &str, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = vec![];
        let result = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            warn!(key = %key, errors = ?errors, "Fluent formatting errors");
        }

        Some(result.to_string())
    }

    /// Get a translated message with arguments
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (k, v) in args {
            fluent_args.set(*k, *v);
        }
        self.get(locale, key, Some(&fluent_args))
    }

    /// Load embedded English messages
    fn load_embedded_en(&mut self) {
        let en_translations = r#"
# Card Legality Skill - English Messages

skill-welcome = Hello! Which card do you want to know if is legal or not in Magic: The Gathering?
skill-help = You can ask if a Magic card is legal in any format! You can ask only the card name and I'll tell you that card's state in all formats. Or ask for the card and a specific format.
skill-reprompt = Any more card you want to know about?
skill-goodbye = Goodbye!
skill-apology = Sorry, I had trouble doing what you asked. Please try again.
skill-unknown-format = Sorry, I don't know the format { $format }.
skill-reflector = You just triggered { $intent }
"#;

        if let Err(e) = self.add_locale(DEFAULT_LOCALE, en_translations) {
            warn!(error = %e, "Failed to load embedded English messages");
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}
