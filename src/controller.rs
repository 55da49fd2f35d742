//! Preview controller: the authoring state and everything derived from it.
//!
//! The controller never performs I/O itself. When the welcome note or the
//! selected locale changes and a translation is needed, it hands back a
//! [`PendingTranslation`] carrying a ticket. The caller fetches the
//! translation however it likes and reports the outcome with
//! [`PreviewController::complete`]. Every change to the note or locale
//! bumps the ticket counter, so a completion for an older ticket is
//! discarded and can never overwrite newer state.

use crate::export::{self, ExportDocument};
use crate::i18n::{Locale, Task, Template, TranslationMetrics, UiStrings};
use crate::qa::{self, Comparison};
use crate::translation::{TranslationError, Translator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Welcome note shown before the author writes their own.
pub const DEFAULT_WELCOME: &str =
    "Welcome to the team! Use this space to celebrate new hires and explain how their work matters.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Task index {index} out of range (checklist has {len} tasks)")]
    TaskIndexOutOfRange { index: usize, len: usize },
}

/// Which layout the employee panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Single,
    Qa,
}

/// Editable field of a checklist task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
}

/// Last translation obtained for a locale, valid while `source` is still the
/// live welcome note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeCacheEntry {
    pub source: String,
    pub value: String,
}

/// A translation the caller must fetch on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub ticket: u64,
    pub locale: Locale,
    pub source: String,
}

/// What [`PreviewController::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Translation cached and published
    Applied,
    /// Failure recorded; the English note is displayed
    Failed,
    /// The ticket was superseded; nothing changed
    Discarded,
}

#[derive(Debug, Clone)]
pub struct PreviewController {
    company_name: String,
    role: String,
    tasks: Vec<Task>,
    welcome_note: String,
    selected_locale: Locale,
    translated_welcome: String,
    is_translating: bool,
    translation_error: bool,
    view_mode: ViewMode,
    welcome_cache: HashMap<Locale, WelcomeCacheEntry>,
    ticket: u64,
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewController {
    /// Start from the English template and the default welcome note.
    pub fn new() -> Self {
        let english = Locale::canonical().template();
        Self {
            company_name: english.company_name.clone(),
            role: english.role.clone(),
            tasks: english.tasks.clone(),
            welcome_note: DEFAULT_WELCOME.to_string(),
            selected_locale: Locale::canonical(),
            translated_welcome: DEFAULT_WELCOME.to_string(),
            is_translating: false,
            translation_error: false,
            view_mode: ViewMode::Single,
            welcome_cache: HashMap::new(),
            ticket: 0,
        }
    }

    // ==================== Authoring State ====================

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn welcome_note(&self) -> &str {
        &self.welcome_note
    }

    pub fn selected_locale(&self) -> Locale {
        self.selected_locale
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_translating(&self) -> bool {
        self.is_translating
    }

    pub fn translation_error(&self) -> bool {
        self.translation_error
    }

    pub fn cached_translation(&self, locale: Locale) -> Option<&WelcomeCacheEntry> {
        self.welcome_cache.get(&locale)
    }

    pub fn set_company_name(&mut self, company_name: impl Into<String>) {
        self.company_name = company_name.into();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn update_task(
        &mut self,
        index: usize,
        field: TaskField,
        value: impl Into<String>,
    ) -> Result<(), ControllerError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(ControllerError::TaskIndexOutOfRange { index, len })?;

        match field {
            TaskField::Title => task.title = value.into(),
            TaskField::Description => task.description = value.into(),
        }
        Ok(())
    }

    /// Replace the welcome note.
    ///
    /// Returns the translation to fetch, if the change requires one.
    pub fn set_welcome_note(&mut self, note: impl Into<String>) -> Option<PendingTranslation> {
        let note = note.into();
        if note == self.welcome_note {
            return None;
        }
        self.welcome_note = note;
        self.react()
    }

    /// Switch the preview locale.
    ///
    /// Returns the translation to fetch, if the change requires one.
    pub fn select_locale(&mut self, locale: Locale) -> Option<PendingTranslation> {
        if locale == self.selected_locale {
            return None;
        }
        self.selected_locale = locale;
        self.react()
    }

    /// Switch between single preview and QA view. Authoring state is untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // ==================== Translation Flow ====================

    /// Whether the welcome note needs translating for the current locale.
    pub fn should_translate(&self) -> bool {
        !self.selected_locale.is_canonical() && !self.welcome_note.trim().is_empty()
    }

    /// React to a welcome note or locale change.
    ///
    /// Any outstanding request is cancelled first. A cache entry whose source
    /// matches the live note is reused without a network call.
    fn react(&mut self) -> Option<PendingTranslation> {
        self.ticket += 1;
        self.is_translating = false;

        if !self.should_translate() {
            return None;
        }

        let metrics = TranslationMetrics::global();
        let locale = self.selected_locale;
        if let Some(cached) = self.welcome_cache.get(&locale) {
            if cached.source == self.welcome_note {
                debug!("Welcome note cache hit for {}", locale.code());
                metrics.record_cache_hit();
                self.translated_welcome = cached.value.clone();
                self.translation_error = false;
                return None;
            }
        }

        debug!("Welcome note cache miss for {}", locale.code());
        metrics.record_cache_miss();
        self.is_translating = true;
        self.translation_error = false;

        Some(PendingTranslation {
            ticket: self.ticket,
            locale,
            source: self.welcome_note.clone(),
        })
    }

    /// Report the outcome of a translation fetch.
    pub fn complete(
        &mut self,
        pending: &PendingTranslation,
        result: Result<String, TranslationError>,
    ) -> Completion {
        if pending.ticket != self.ticket {
            debug!(
                "Discarding stale {} translation (ticket {} superseded by {})",
                pending.locale.code(),
                pending.ticket,
                self.ticket
            );
            TranslationMetrics::global().record_stale_discard();
            return Completion::Discarded;
        }

        self.is_translating = false;
        match result {
            Ok(value) => {
                info!("Welcome note translated to {}", pending.locale.code());
                self.welcome_cache.insert(
                    pending.locale,
                    WelcomeCacheEntry {
                        source: pending.source.clone(),
                        value: value.clone(),
                    },
                );
                self.translated_welcome = value;
                Completion::Applied
            }
            Err(e) => {
                warn!(
                    "Showing English welcome note for {}: {}",
                    pending.locale.code(),
                    e
                );
                self.translation_error = true;
                self.translated_welcome = pending.source.clone();
                Completion::Failed
            }
        }
    }

    /// Fetch and apply a pending translation in place.
    ///
    /// Holds `&mut self` across the fetch, so nothing can supersede the ticket
    /// meanwhile; callers that need concurrent edits fetch themselves and call
    /// [`complete`](Self::complete).
    pub async fn resolve(
        &mut self,
        translator: &dyn Translator,
        pending: PendingTranslation,
    ) -> Completion {
        let result = translator.translate(&pending.source, pending.locale).await;
        self.complete(&pending, result)
    }

    // ==================== Derived Preview ====================

    /// Welcome note as shown in the employee preview.
    pub fn preview_welcome(&self) -> &str {
        if self.should_translate() && !self.translation_error {
            &self.translated_welcome
        } else {
            &self.welcome_note
        }
    }

    /// Status line under the welcome note, if any.
    pub fn preview_status(&self) -> Option<&'static str> {
        if !self.should_translate() {
            return None;
        }
        let strings = self.preview_strings();
        if self.is_translating {
            Some(strings.status_translating)
        } else if self.translation_error {
            Some(strings.status_translation_error)
        } else {
            None
        }
    }

    /// Interface labels for the employee preview.
    pub fn preview_strings(&self) -> &'static UiStrings {
        self.selected_locale.strings()
    }

    /// Template shown in the employee preview: the live edits for English,
    /// the shipped translation otherwise.
    pub fn preview_template(&self) -> Cow<'_, Template> {
        if self.selected_locale.is_canonical() {
            Cow::Owned(Template {
                company_name: self.company_name.clone(),
                role: self.role.clone(),
                tasks: self.tasks.clone(),
            })
        } else {
            Cow::Borrowed(self.selected_locale.template())
        }
    }

    /// English/localized task pairs for the QA view; empty for English.
    pub fn qa_comparisons(&self) -> Vec<Comparison> {
        if self.selected_locale.is_canonical() {
            return Vec::new();
        }
        qa::compare_tasks(
            &self.tasks,
            &Locale::canonical().template().tasks,
            &self.selected_locale.template().tasks,
        )
    }

    /// Onboarding pack for the current preview.
    pub fn export_pack(&self) -> ExportDocument {
        let welcome = if self.selected_locale.is_canonical() {
            self.welcome_note.as_str()
        } else {
            self.preview_welcome()
        };
        export::build_pack(self.selected_locale, &self.preview_template(), welcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Translator that tags the text with the locale and counts calls.
    struct CountingTranslator {
        calls: AtomicUsize,
    }

    impl CountingTranslator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(&self, text: &str, target: Locale) -> Result<String, TranslationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("[{}] {}", target.code(), text))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _target: Locale) -> Result<String, TranslationError> {
            Err(TranslationError::Api {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    /// Switch locale and resolve any fetch it triggers.
    async fn preview(controller: &mut PreviewController, translator: &dyn Translator, locale: Locale) {
        if let Some(pending) = controller.select_locale(locale) {
            controller.resolve(translator, pending).await;
        }
    }

    fn failure() -> Result<String, TranslationError> {
        Err(TranslationError::EmptyResponse)
    }

    // ==================== Initial State ====================

    #[test]
    fn test_new_uses_english_template() {
        let controller = PreviewController::new();
        let english = Locale::ENGLISH.template();

        assert_eq!(controller.company_name(), english.company_name);
        assert_eq!(controller.role(), english.role);
        assert_eq!(controller.tasks(), english.tasks.as_slice());
        assert_eq!(controller.welcome_note(), DEFAULT_WELCOME);
        assert_eq!(controller.selected_locale(), Locale::ENGLISH);
        assert_eq!(controller.view_mode(), ViewMode::Single);
        assert!(!controller.should_translate());
        assert_eq!(controller.preview_welcome(), DEFAULT_WELCOME);
    }

    // ==================== Trigger Conditions ====================

    #[test]
    fn test_english_never_requests_translation() {
        let mut controller = PreviewController::new();
        assert!(controller.set_welcome_note("Hello there").is_none());
        assert!(!controller.is_translating());
        assert_eq!(controller.preview_welcome(), "Hello there");
    }

    #[test]
    fn test_blank_note_never_requests_translation() {
        let mut controller = PreviewController::new();
        controller.set_welcome_note("   \n ");
        assert!(controller.select_locale(Locale::FRENCH).is_none());
        assert!(!controller.is_translating());
        assert_eq!(controller.preview_welcome(), "   \n ");
        assert_eq!(controller.preview_status(), None);
    }

    #[test]
    fn test_locale_change_requests_translation() {
        let mut controller = PreviewController::new();
        let pending = controller
            .select_locale(Locale::GERMAN)
            .expect("translation needed");

        assert_eq!(pending.locale, Locale::GERMAN);
        assert_eq!(pending.source, DEFAULT_WELCOME);
        assert!(controller.is_translating());
        assert_eq!(
            controller.preview_status(),
            Some(Locale::GERMAN.strings().status_translating)
        );
    }

    #[test]
    fn test_reselecting_same_locale_is_a_no_op() {
        let mut controller = PreviewController::new();
        let first = controller.select_locale(Locale::SPANISH);
        assert!(first.is_some());
        assert!(controller.select_locale(Locale::SPANISH).is_none());
        assert!(controller.is_translating());
    }

    #[test]
    fn test_company_role_and_task_edits_do_not_trigger() {
        let mut controller = PreviewController::new();
        let pending = controller.select_locale(Locale::FRENCH).expect("pending");
        controller.set_company_name("Contoso");
        controller.set_role("Engineer");
        controller
            .update_task(0, TaskField::Title, "New title")
            .expect("index valid");

        // Still the current ticket
        assert_eq!(
            controller.complete(&pending, Ok("Bienvenue".to_string())),
            Completion::Applied
        );
    }

    // ==================== Cache ====================

    #[tokio::test]
    async fn test_second_preview_is_served_from_cache() {
        let translator = CountingTranslator::new();
        let mut controller = PreviewController::new();

        preview(&mut controller, &translator, Locale::FRENCH).await;
        assert_eq!(translator.calls(), 1);
        assert_eq!(controller.preview_welcome(), format!("[fr] {}", DEFAULT_WELCOME));

        preview(&mut controller, &translator, Locale::ENGLISH).await;
        preview(&mut controller, &translator, Locale::FRENCH).await;

        assert_eq!(translator.calls(), 1);
        assert!(!controller.is_translating());
        assert_eq!(controller.preview_welcome(), format!("[fr] {}", DEFAULT_WELCOME));
    }

    #[tokio::test]
    async fn test_every_locale_is_fetched_at_most_once() {
        let translator = CountingTranslator::new();
        let mut controller = PreviewController::new();
        let targets: Vec<_> = Locale::supported()
            .into_iter()
            .filter(|l| !l.is_canonical())
            .collect();

        for _ in 0..2 {
            for locale in &targets {
                preview(&mut controller, &translator, *locale).await;
                preview(&mut controller, &translator, Locale::ENGLISH).await;
            }
        }

        assert_eq!(translator.calls(), targets.len());
    }

    #[tokio::test]
    async fn test_note_edit_invalidates_every_locale() {
        let translator = CountingTranslator::new();
        let mut controller = PreviewController::new();

        preview(&mut controller, &translator, Locale::SPANISH).await;
        preview(&mut controller, &translator, Locale::GERMAN).await;
        assert_eq!(translator.calls(), 2);

        // Edit while previewing German: German refetches immediately
        let pending = controller
            .set_welcome_note("Glad you're here!")
            .expect("edited note needs translating");
        controller.resolve(&translator, pending).await;
        assert_eq!(translator.calls(), 3);
        assert_eq!(controller.preview_welcome(), "[de] Glad you're here!");

        // Spanish was cached for the old note and must refetch too
        preview(&mut controller, &translator, Locale::SPANISH).await;
        assert_eq!(translator.calls(), 4);
        assert_eq!(controller.preview_welcome(), "[es] Glad you're here!");
    }

    #[tokio::test]
    async fn test_reverting_note_reuses_cache() {
        let translator = CountingTranslator::new();
        let mut controller = PreviewController::new();
        preview(&mut controller, &translator, Locale::JAPANESE).await;

        controller.select_locale(Locale::ENGLISH);
        controller.set_welcome_note("Something else");
        controller.set_welcome_note(DEFAULT_WELCOME);
        preview(&mut controller, &translator, Locale::JAPANESE).await;

        assert_eq!(translator.calls(), 1);
    }

    // ==================== Failure ====================

    #[tokio::test]
    async fn test_failure_shows_original_english_exactly() {
        let mut controller = PreviewController::new();
        let note = "  Welcome, {first_name}! 🎉  ";
        controller.set_welcome_note(note);

        preview(&mut controller, &FailingTranslator, Locale::GERMAN).await;

        assert!(controller.translation_error());
        assert!(!controller.is_translating());
        assert_eq!(controller.preview_welcome(), note);
        assert_eq!(
            controller.preview_status(),
            Some(Locale::GERMAN.strings().status_translation_error)
        );
        assert!(controller.cached_translation(Locale::GERMAN).is_none());
    }

    #[tokio::test]
    async fn test_blank_translation_falls_back_to_english() {
        use crate::config::Config;
        use crate::translation::OpenAiTranslator;
        use wiremock::{
            matchers::{method, path},
            Mock, MockServer, ResponseTemplate,
        };

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": "   \n" } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            openai_api_key: "test-openai-key".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_api_url: format!("{}/v1/chat/completions", mock_server.uri()),
            translation_max_tokens: 1000,
            translation_timeout_secs: 5,
            api_key: None,
            port: 8080,
        };
        let translator = OpenAiTranslator::new(reqwest::Client::new(), &config);
        let mut controller = PreviewController::new();

        let pending = controller
            .select_locale(Locale::FRENCH)
            .expect("French needs a translation");
        let completion = controller.resolve(&translator, pending).await;

        assert_eq!(completion, Completion::Failed);
        assert!(controller.translation_error());
        assert_eq!(controller.preview_welcome(), DEFAULT_WELCOME);
        assert_eq!(
            controller.preview_status(),
            Some(Locale::FRENCH.strings().status_translation_error)
        );
        assert!(controller.cached_translation(Locale::FRENCH).is_none());
    }

    #[tokio::test]
    async fn test_failure_is_retried_on_reselect() {
        let translator = CountingTranslator::new();
        let mut controller = PreviewController::new();

        preview(&mut controller, &FailingTranslator, Locale::FRENCH).await;
        assert!(controller.translation_error());

        preview(&mut controller, &translator, Locale::ENGLISH).await;
        preview(&mut controller, &translator, Locale::FRENCH).await;

        assert_eq!(translator.calls(), 1);
        assert!(!controller.translation_error());
        assert_eq!(controller.preview_welcome(), format!("[fr] {}", DEFAULT_WELCOME));
    }

    #[tokio::test]
    async fn test_cache_hit_clears_previous_error() {
        let translator = CountingTranslator::new();
        let mut controller = PreviewController::new();

        preview(&mut controller, &translator, Locale::SPANISH).await;
        preview(&mut controller, &FailingTranslator, Locale::FRENCH).await;
        assert!(controller.translation_error());

        preview(&mut controller, &translator, Locale::SPANISH).await;
        assert!(!controller.translation_error());
        assert_eq!(controller.preview_welcome(), format!("[es] {}", DEFAULT_WELCOME));
    }

    // ==================== Cancellation ====================

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = PreviewController::new();
        let french = controller.select_locale(Locale::FRENCH).expect("pending");
        let german = controller.select_locale(Locale::GERMAN).expect("pending");

        assert_eq!(
            controller.complete(&french, Ok("Bienvenue".to_string())),
            Completion::Discarded
        );
        assert!(controller.is_translating());
        assert!(controller.cached_translation(Locale::FRENCH).is_none());

        assert_eq!(
            controller.complete(&german, Ok("Willkommen".to_string())),
            Completion::Applied
        );
        assert_eq!(controller.preview_welcome(), "Willkommen");
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut controller = PreviewController::new();
        let first = controller.select_locale(Locale::FRENCH).expect("pending");
        let second = controller
            .set_welcome_note("Updated note")
            .expect("pending");

        assert_eq!(controller.complete(&first, failure()), Completion::Discarded);
        assert!(!controller.translation_error());

        controller.complete(&second, Ok("Note mise à jour".to_string()));
        assert_eq!(controller.preview_welcome(), "Note mise à jour");
    }

    #[test]
    fn test_switching_to_english_cancels_in_flight_request() {
        let mut controller = PreviewController::new();
        let pending = controller.select_locale(Locale::JAPANESE).expect("pending");

        assert!(controller.select_locale(Locale::ENGLISH).is_none());
        assert!(!controller.is_translating());
        assert_eq!(
            controller.complete(&pending, Ok("ようこそ".to_string())),
            Completion::Discarded
        );
        assert_eq!(controller.preview_welcome(), DEFAULT_WELCOME);
    }

    #[test]
    fn test_late_completion_after_switch_back_is_discarded() {
        let mut controller = PreviewController::new();
        let first = controller.select_locale(Locale::FRENCH).expect("pending");
        controller.select_locale(Locale::ENGLISH);
        let second = controller.select_locale(Locale::FRENCH).expect("pending");

        assert_ne!(first.ticket, second.ticket);
        assert_eq!(
            controller.complete(&first, Ok("old".to_string())),
            Completion::Discarded
        );
        assert_eq!(
            controller.complete(&second, Ok("new".to_string())),
            Completion::Applied
        );
        assert_eq!(controller.preview_welcome(), "new");
    }

    // ==================== Tasks and View Mode ====================

    #[test]
    fn test_update_task_fields() {
        let mut controller = PreviewController::new();
        controller
            .update_task(1, TaskField::Title, "Create accounts")
            .expect("index valid");
        controller
            .update_task(1, TaskField::Description, "")
            .expect("index valid");

        assert_eq!(controller.tasks()[1].title, "Create accounts");
        assert_eq!(controller.tasks()[1].description, "");
        assert_eq!(controller.tasks()[1].id, "accounts");
    }

    #[test]
    fn test_update_task_out_of_range() {
        let mut controller = PreviewController::new();
        let err = controller
            .update_task(99, TaskField::Title, "x")
            .unwrap_err();
        assert_eq!(err, ControllerError::TaskIndexOutOfRange { index: 99, len: 4 });
    }

    #[test]
    fn test_view_mode_switch_preserves_authoring_state() {
        let mut controller = PreviewController::new();
        controller.set_company_name("Contoso");
        controller.set_welcome_note("Hi!");
        controller.select_locale(Locale::SPANISH);
        let before = (
            controller.company_name().to_string(),
            controller.role().to_string(),
            controller.tasks().to_vec(),
            controller.welcome_note().to_string(),
        );

        for mode in [ViewMode::Qa, ViewMode::Single, ViewMode::Qa] {
            controller.set_view_mode(mode);
            let after = (
                controller.company_name().to_string(),
                controller.role().to_string(),
                controller.tasks().to_vec(),
                controller.welcome_note().to_string(),
            );
            assert_eq!(before, after);
        }
        assert_eq!(controller.view_mode(), ViewMode::Qa);
    }

    // ==================== Derived Template and QA ====================

    #[test]
    fn test_preview_template_follows_locale() {
        let mut controller = PreviewController::new();
        controller.set_company_name("Contoso");

        assert_eq!(controller.preview_template().company_name, "Contoso");

        controller.select_locale(Locale::FRENCH);
        assert_eq!(
            controller.preview_template().into_owned(),
            *Locale::FRENCH.template()
        );
    }

    #[test]
    fn test_qa_comparisons_empty_for_english() {
        assert!(PreviewController::new().qa_comparisons().is_empty());
    }

    #[test]
    fn test_qa_comparisons_use_live_edits() {
        let mut controller = PreviewController::new();
        controller.select_locale(Locale::GERMAN);

        let comparisons = controller.qa_comparisons();
        assert_eq!(comparisons.len(), 4);
        let welcome_call = &comparisons[0];
        assert_eq!(welcome_call.id, "welcome-call");
        assert!(welcome_call.needs_review);

        // A longer English title brings the ratio under the threshold
        controller
            .update_task(0, TaskField::Title, "Join the team welcome call with your manager")
            .expect("index valid");
        let comparisons = controller.qa_comparisons();
        assert!(comparisons[0].title_ratio <= qa::LENGTH_ALERT_RATIO);
    }

    // ==================== Export ====================

    #[test]
    fn test_export_english_uses_live_form() {
        let mut controller = PreviewController::new();
        controller.set_company_name("Contoso");
        controller.set_welcome_note("Hello new hire");

        let doc = controller.export_pack();
        assert_eq!(doc.file_name, "onboarding-pack-en.doc");
        assert!(doc.body.contains("Contoso"));
        assert!(doc.body.contains("<p>Hello new hire</p>"));
    }

    #[test]
    fn test_export_localized_uses_translation_and_template() {
        let mut controller = PreviewController::new();
        let pending = controller.select_locale(Locale::SPANISH).expect("pending");
        controller.complete(&pending, Ok("¡Bienvenida al equipo!".to_string()));

        let doc = controller.export_pack();
        assert_eq!(doc.file_name, "onboarding-pack-es.doc");
        assert!(doc.body.contains("¡Bienvenida al equipo!"));
        assert!(doc.body.contains("Configura tus cuentas"));
    }

    #[test]
    fn test_export_after_failure_uses_english_note() {
        let mut controller = PreviewController::new();
        let pending = controller.select_locale(Locale::GERMAN).expect("pending");
        controller.complete(&pending, failure());

        let doc = controller.export_pack();
        assert!(doc.body.contains(DEFAULT_WELCOME));
        assert!(doc.body.contains("Richten Sie Ihre Konten ein"));
    }

    #[test]
    fn test_serde_view_mode() {
        assert_eq!(serde_json::to_string(&ViewMode::Qa).unwrap(), "\"qa\"");
        let mode: ViewMode = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(mode, ViewMode::Single);
    }
}
