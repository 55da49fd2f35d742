//! Internationalization (i18n) module: the static locale data store.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales
//! - `locale`: Validated `Locale` handle onto a registry entry
//! - `strings`: Localized interface labels
//! - `templates`: Pre-translated onboarding templates
//! - `validator`: Checks that a translated welcome note kept its links and placeholders
//! - `metrics`: Translation cache and API counters
//!
//! # Example
//!
//! ```rust,ignore
//! use global_onboard::i18n::Locale;
//!
//! let french = Locale::from_code("fr")?;
//! let tasks = &french.template().tasks;
//! let heading = french.strings().section_checklist;
//! ```

mod locale;
mod metrics;
mod registry;
mod strings;
mod templates;
mod validator;

pub use locale::Locale;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::UiStrings;
pub use templates::{Task, Template};
pub use validator::{TranslationValidator, ValidationReport};
