// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n").field("locale", &self.locale).finish()
    }
}

impl I18n {
    pub fn new() -> Self {
        let locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Arguments are paths and numbers; bidi isolation marks would leak into them.
        bundle.set_use_isolating(false);

        let file_name = format!("{DEFAULT_LOCALE}.ftl");
        match Asset::get(&file_name) {
            Some(content) => {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let resource = match FluentResource::try_new(source) {
                    Ok(resource) => resource,
                    Err((partial, errors)) => {
                        tracing::warn!(file = %file_name, ?errors, "message catalog has syntax errors");
                        partial
                    }
                };
                if let Err(errors) = bundle.add_resource(resource) {
                    tracing::warn!(file = %file_name, ?errors, "duplicate message ids in catalog");
                }
            }
            None => tracing::warn!(file = %file_name, "message catalog not embedded"),
        }

        Self { bundle, locale }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Formats `key` with named arguments (e.g. `("path", ...)`).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(value.clone()));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) {
            let mut errors = vec![];
            let value = self.bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
            tracing::debug!(key, ?errors, "message formatted with errors");
        }
        format!("MISSING: {key}")
    }
}
