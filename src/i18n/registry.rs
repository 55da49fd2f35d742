//! Locale registry: Single source of truth for all supported locales.
//!
//! Each entry bundles the locale metadata with its interface strings and its
//! pre-translated onboarding template. The registry is built once on first
//! access with `OnceLock` and is immutable thereafter.

use crate::i18n::strings::{
    UiStrings, ENGLISH_STRINGS, FRENCH_STRINGS, GERMAN_STRINGS, JAPANESE_STRINGS,
    SPANISH_STRINGS,
};
use crate::i18n::templates::{
    Template, ENGLISH_TEMPLATE, FRENCH_TEMPLATE, GERMAN_TEMPLATE, JAPANESE_TEMPLATE,
    SPANISH_TEMPLATE,
};
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the authoring language (exactly one is)
    pub is_canonical: bool,

    /// Interface labels
    pub strings: &'static UiStrings,

    /// Pre-translated onboarding template
    pub template: Template,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    canonical: usize,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry::new(default_locales()))
    }

    fn new(locales: Vec<LocaleConfig>) -> Self {
        let canonical = locales
            .iter()
            .position(|locale| locale.is_canonical)
            .unwrap_or(0);
        Self { locales, canonical }
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in selector order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The authoring locale (English).
    pub fn canonical(&self) -> &LocaleConfig {
        &self.locales[self.canonical]
    }
}

/// Default locale configurations.
///
/// English is canonical and listed first; the remaining order is the order of
/// the locale selector.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            strings: &ENGLISH_STRINGS,
            template: ENGLISH_TEMPLATE.build(),
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            strings: &SPANISH_STRINGS,
            template: SPANISH_TEMPLATE.build(),
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
            strings: &FRENCH_STRINGS,
            template: FRENCH_TEMPLATE.build(),
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_canonical: false,
            strings: &GERMAN_STRINGS,
            template: GERMAN_TEMPLATE.build(),
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_canonical: false,
            strings: &JAPANESE_STRINGS,
            template: JAPANESE_TEMPLATE.build(),
        },
    ]
}
