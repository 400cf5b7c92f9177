use std::io::Read;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use predictor::config::Config;
use predictor::form::FormPage;
use predictor::results::{Platform, RenderState, ResultsAction, ResultsView};
use predictor::state::Session;

/// Prints the results page to stdout.
struct TerminalPlatform;

impl Platform for TerminalPlatform {
    fn print(&self, view: Option<&ResultsView>) {
        if let Some(view) = view {
            println!("{view}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting predictor v{}", env!("CARGO_PKG_VERSION"));
    info!("Prediction service: {}", config.api_base_url);

    let mut session = Session::new(config)?;

    let mut form = session.open_form().await;
    if let Some(banner) = form.banner() {
        warn!("{banner}");
    }
    info!(
        "Education levels: {:?}; skill levels: {:?}",
        form.options().education_levels,
        form.options().skill_levels
    );

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read profile JSON from stdin")?;
    apply_profile(&mut form, &input)?;

    if let Err(e) = form.submit(&mut session.store).await {
        bail!("{}", form.banner().map(str::to_string).unwrap_or_else(|| e.to_string()));
    }

    let mut renderer = session.results_renderer();
    match renderer.mount(&session.store).await {
        RenderState::Displaying { .. } => {
            renderer.handle(ResultsAction::Print, &TerminalPlatform);
            Ok(())
        }
        RenderState::Error(message) => bail!(message),
        RenderState::Loading => bail!("Results did not finish loading"),
    }
}

/// Feeds a JSON object of wire-named fields through the form's setters,
/// the same way individual inputs would.
fn apply_profile(form: &mut FormPage, input: &str) -> Result<()> {
    let fields: serde_json::Map<String, Value> =
        serde_json::from_str(input).context("Profile must be a JSON object")?;
    let controller = form.controller_mut();

    for (name, value) in fields {
        if let Some(score) = value.as_u64() {
            if controller.set_slider_by_name(&name, score.min(u8::MAX as u64) as u8).is_ok() {
                continue;
            }
        }
        let text = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        if let Err(e) = controller.set_field_by_name(&name, text) {
            warn!("Ignoring profile entry: {e}");
        }
    }
    Ok(())
}
