//! Locale type: validated handle onto a registry entry.

use crate::i18n::strings::UiStrings;
use crate::i18n::templates::Template;
use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated locale.
///
/// Only codes present in the registry can be turned into a
/// `Locale`, so every accessor below can rely on the registry entry existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Locale code (e.g., "en", "fr")
    code: &'static str,
}

impl Locale {
    /// The authoring locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const SPANISH: Locale = Locale { code: "es" };

    pub const FRENCH: Locale = Locale { code: "fr" };

    pub const GERMAN: Locale = Locale { code: "de" };

    pub const JAPANESE: Locale = Locale { code: "ja" };

    /// Create a Locale from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the registry
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the canonical (authoring) locale.
    pub fn canonical() -> Locale {
        Locale {
            code: LocaleRegistry::get().canonical().code,
        }
    }

    /// All locales offered by the locale selector.
    pub fn supported() -> Vec<Locale> {
        LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// Falls back to the canonical entry, which is unreachable for values
    /// built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        let registry = LocaleRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.canonical())
    }

    /// English name of the language (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Human-readable label used in the locale selector and export titles.
    pub fn label(&self) -> &'static str {
        self.native_name()
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Interface labels for this locale.
    pub fn strings(&self) -> &'static UiStrings {
        self.config().strings
    }

    /// Pre-translated onboarding template for this locale.
    pub fn template(&self) -> &'static Template {
        &self.config().template
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
