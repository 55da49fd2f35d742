//! Preview binary - renders the employee preview for one locale without the HTTP server
//!
//! Usage:
//!   cargo run --bin preview -- fr                    # Single preview in French
//!   cargo run --bin preview -- de --qa               # QA comparison against English
//!   cargo run --bin preview -- ja --export packs/    # Also write the onboarding pack
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - OPENAI_API_URL
//! - TRANSLATION_MAX_TOKENS (defaults to 1000)
//! - TRANSLATION_TIMEOUT_SECS (defaults to 20)

use anyhow::{bail, Context, Result};
use global_onboard::{
    config::Config,
    controller::{Completion, PreviewController, ViewMode},
    i18n::{Locale, TranslationMetrics},
    translation::OpenAiTranslator,
    view,
};
use std::path::PathBuf;
use tracing::{info, warn};

struct Args {
    locale: Locale,
    qa: bool,
    export_dir: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut locale = None;
        let mut qa = false;
        let mut export_dir = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--qa" => qa = true,
                "--export" => {
                    let dir = args.next().context("--export requires a directory")?;
                    export_dir = Some(PathBuf::from(dir));
                }
                flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
                code => {
                    if locale.is_some() {
                        bail!("Unexpected argument: {}", code);
                    }
                    locale = Some(Locale::from_code(code)?);
                }
            }
        }

        let Some(locale) = locale else {
            bail!("Usage: preview <locale> [--qa] [--export <dir>]");
        };

        Ok(Self {
            locale,
            qa,
            export_dir,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("global_onboard=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse()?;

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let translator = OpenAiTranslator::from_config(&config)?;

    let mut controller = PreviewController::new();
    if args.qa {
        controller.set_view_mode(ViewMode::Qa);
    }

    if let Some(pending) = controller.select_locale(args.locale) {
        info!("Translating welcome note into {}...", args.locale.name());
        if controller.resolve(&translator, pending).await == Completion::Failed {
            warn!("Translation failed, showing the English welcome note");
        }
    }

    let rendered = view::render(&controller);
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    if let Some(dir) = args.export_dir {
        let document = controller.export_pack();
        let path = document
            .write_to(&dir)
            .with_context(|| format!("Failed to write pack to {}", dir.display()))?;
        info!("Saved onboarding pack to {}", path.display());
    }

    let report = TranslationMetrics::global().report();
    info!(
        "Translation calls: {} ({} failed), cache hit rate {:.0}%",
        report.api_calls,
        report.api_failures,
        report.cache_hit_rate
    );

    Ok(())
}
