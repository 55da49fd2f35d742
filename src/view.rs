//! View renderer: controller state in, one of two layouts out.
//!
//! Rendering is pure; the returned [`View`] is what the HTTP API and the
//! `preview` binary serialize.

use crate::controller::{PreviewController, ViewMode};
use crate::i18n::{Locale, Task};
use crate::qa;
use serde::Serialize;

/// Shown in the QA view while the canonical locale is selected.
pub const QA_ENGLISH_NOTICE: &str =
    "Choose a non-English locale to compare translations side-by-side.";

/// Badge on QA rows flagged for review.
pub const REVIEW_BADGE: &str = "Longer than English";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum View {
    Single(SinglePreview),
    Qa(QaPreview),
}

/// Section headings of the employee preview, in the preview locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewLabels {
    pub panel_title: &'static str,
    pub app_title: &'static str,
    pub company_name: &'static str,
    pub welcome_note: &'static str,
    pub checklist: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SinglePreview {
    pub locale: Locale,
    pub locale_label: &'static str,
    pub labels: PreviewLabels,
    pub company_name: String,
    pub role: String,
    pub welcome_note: String,
    /// "Translating..." or the translation-error notice
    pub status: Option<&'static str>,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub company_name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub id: String,
    pub english_title: String,
    pub english_description: String,
    pub target_title: String,
    pub target_description: String,
    pub title_ratio: f64,
    pub description_ratio: f64,
    pub needs_review: bool,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaPreview {
    pub locale: Locale,
    pub locale_label: &'static str,
    /// Set instead of the comparison when English is selected
    pub notice: Option<&'static str>,
    pub english: Option<Header>,
    pub localized: Option<Header>,
    pub health: Option<String>,
    pub issues: usize,
    pub rows: Vec<ComparisonRow>,
}

/// Render the layout selected by the controller's view mode.
pub fn render(controller: &PreviewController) -> View {
    match controller.view_mode() {
        ViewMode::Single => View::Single(render_single(controller)),
        ViewMode::Qa => View::Qa(render_qa(controller)),
    }
}

pub fn render_single(controller: &PreviewController) -> SinglePreview {
    let locale = controller.selected_locale();
    let strings = controller.preview_strings();
    let template = controller.preview_template();

    SinglePreview {
        locale,
        locale_label: locale.label(),
        labels: PreviewLabels {
            panel_title: strings.employee_panel_title,
            app_title: strings.app_title,
            company_name: strings.field_company_name,
            welcome_note: strings.section_welcome_note,
            checklist: strings.section_checklist,
        },
        company_name: template.company_name.clone(),
        role: template.role.clone(),
        welcome_note: controller.preview_welcome().to_string(),
        status: controller.preview_status(),
        tasks: template.tasks.clone(),
    }
}

pub fn render_qa(controller: &PreviewController) -> QaPreview {
    let locale = controller.selected_locale();

    if locale.is_canonical() {
        return QaPreview {
            locale,
            locale_label: locale.label(),
            notice: Some(QA_ENGLISH_NOTICE),
            english: None,
            localized: None,
            health: None,
            issues: 0,
            rows: Vec::new(),
        };
    }

    let comparisons = controller.qa_comparisons();
    let template = controller.preview_template();
    let rows = comparisons
        .iter()
        .map(|c| ComparisonRow {
            id: c.id.clone(),
            english_title: c.english_title().to_string(),
            english_description: c.english_description().to_string(),
            target_title: c.target.title.clone(),
            target_description: c.target.description.clone(),
            title_ratio: c.title_ratio,
            description_ratio: c.description_ratio,
            needs_review: c.needs_review,
            badge: c.needs_review.then_some(REVIEW_BADGE),
        })
        .collect();

    QaPreview {
        locale,
        locale_label: locale.label(),
        notice: None,
        english: Some(Header {
            company_name: controller.company_name().to_string(),
            role: controller.role().to_string(),
        }),
        localized: Some(Header {
            company_name: template.company_name.clone(),
            role: template.role.clone(),
        }),
        health: Some(qa::health_summary(locale.label(), &comparisons)),
        issues: qa::review_count(&comparisons),
        rows,
    }
}
