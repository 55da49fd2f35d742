//! Side-by-side QA comparison of English and localized checklists.
//!
//! The check is a length-inflation heuristic: a localized title or
//! description more than 1.5x the length of its English source is flagged
//! for review. It says nothing about whether the translation is correct.

use crate::i18n::Task;
use serde::Serialize;
use std::collections::HashMap;

/// Localized text longer than this multiple of the English text needs review.
pub const LENGTH_ALERT_RATIO: f64 = 1.5;

/// Shown when no English task shares the localized task's id.
pub const MISSING_TITLE: &str = "Untitled task";
pub const MISSING_DESCRIPTION: &str = "No description available.";

/// One localized task paired with its English source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub id: String,
    /// `None` when neither the live edits nor the English template have this id
    pub english: Option<Task>,
    pub target: Task,
    pub title_ratio: f64,
    pub description_ratio: f64,
    pub needs_review: bool,
}

impl Comparison {
    pub fn english_title(&self) -> &str {
        self.english
            .as_ref()
            .map(|task| task.title.as_str())
            .unwrap_or(MISSING_TITLE)
    }

    pub fn english_description(&self) -> &str {
        self.english
            .as_ref()
            .map(|task| task.description.as_str())
            .unwrap_or(MISSING_DESCRIPTION)
    }
}

/// Ratio of localized to English length, in characters.
///
/// Defined as 1 when the English text is empty.
pub fn length_ratio(target: &str, english: &str) -> f64 {
    let english_len = english.chars().count();
    if english_len == 0 {
        return 1.0;
    }
    target.chars().count() as f64 / english_len as f64
}

/// Pair every localized task with its English counterpart and flag inflated ones.
///
/// English tasks are looked up by id in `live` (the author's current edits)
/// first, then in `fallback` (the shipped English template). Output order
/// follows `localized`.
pub fn compare_tasks(live: &[Task], fallback: &[Task], localized: &[Task]) -> Vec<Comparison> {
    let live_by_id: HashMap<&str, &Task> =
        live.iter().map(|task| (task.id.as_str(), task)).collect();
    let fallback_by_id: HashMap<&str, &Task> =
        fallback.iter().map(|task| (task.id.as_str(), task)).collect();

    localized
        .iter()
        .map(|target| {
            let english = live_by_id
                .get(target.id.as_str())
                .or_else(|| fallback_by_id.get(target.id.as_str()))
                .map(|task| (*task).clone());

            let (title_ratio, description_ratio) = match &english {
                Some(source) => (
                    length_ratio(&target.title, &source.title),
                    length_ratio(&target.description, &source.description),
                ),
                None => (1.0, 1.0),
            };

            Comparison {
                id: target.id.clone(),
                english,
                target: target.clone(),
                title_ratio,
                description_ratio,
                needs_review: title_ratio > LENGTH_ALERT_RATIO
                    || description_ratio > LENGTH_ALERT_RATIO,
            }
        })
        .collect()
}

/// Number of comparisons flagged for review.
pub fn review_count(comparisons: &[Comparison]) -> usize {
    comparisons.iter().filter(|c| c.needs_review).count()
}

/// One-line localization health summary for the QA view.
pub fn health_summary(locale_label: &str, comparisons: &[Comparison]) -> String {
    match review_count(comparisons) {
        0 => format!("{}: All tasks fit within English length.", locale_label),
        1 => format!(
            "{}: 1 task needs review because translations are longer than English.",
            locale_label
        ),
        n => format!(
            "{}: {} tasks need review because translations are longer than English.",
            locale_label, n
        ),
    }
}
