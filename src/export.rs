//! Onboarding pack export.
//!
//! The pack is a small HTML document served with the Word MIME type, which
//! word processors open directly.

use crate::i18n::{Locale, Template};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONTENT_TYPE: &str = "application/msword";

/// A downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

impl ExportDocument {
    /// `Content-Disposition` header value offering the document as a download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    /// Write the document into `dir` under its file name, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body)?;
        Ok(path)
    }
}

/// File name for a locale's pack, e.g. `onboarding-pack-fr.doc`.
pub fn file_name(locale: Locale) -> String {
    format!("onboarding-pack-{}.doc", locale.code())
}

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the onboarding pack for `template` and `welcome` in `locale`.
pub fn build_pack(locale: Locale, template: &Template, welcome: &str) -> ExportDocument {
    let label = escape_html(locale.label());

    let tasks: String = template
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            format!(
                "<p><strong>Task {}: {}</strong><br/>{}</p>",
                i + 1,
                escape_html(&task.title),
                escape_html(&task.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8" />
    <title>Onboarding Pack - {label}</title>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.5; color: #0f172a; }}
      h1 {{ font-size: 24px; margin-bottom: 0; }}
      h2 {{ font-size: 18px; margin-top: 24px; }}
      p {{ font-size: 14px; }}
    </style>
  </head>
  <body>
    <h1>Onboarding Pack - {label}</h1>
    <p><strong>Locale:</strong> {code}</p>
    <p><strong>Company:</strong> {company}</p>
    <p><strong>Role:</strong> {role}</p>
    <h2>Welcome Note</h2>
    <p>{welcome}</p>
    <h2>Onboarding Checklist</h2>
{tasks}
  </body>
</html>
"#,
        label = label,
        code = locale.code(),
        company = escape_html(&template.company_name),
        role = escape_html(&template.role),
        welcome = escape_html(welcome),
        tasks = tasks,
    );

    ExportDocument {
        file_name: file_name(locale),
        content_type: CONTENT_TYPE,
        body,
    }
}
