use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api_client::{HttpPredictionApi, PredictionApi};
use crate::config::Config;
use crate::form::FormPage;
use crate::results::ResultsRenderer;
use crate::store::ResultStore;

/// One browsing session: the explicit context shared by the form and the
/// results page. The result store is the only state that crosses pages.
pub struct Session {
    pub config: Config,
    /// Pluggable backend. Default: `HttpPredictionApi` against `config.api_base_url`.
    pub api: Arc<dyn PredictionApi>,
    pub store: ResultStore,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        let api = HttpPredictionApi::new(config.api_base_url.clone(), config.probe_timeout)
            .context("Failed to build HTTP client")?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    pub fn with_api(config: Config, api: Arc<dyn PredictionApi>) -> Self {
        Self {
            config,
            api,
            store: ResultStore::new(),
        }
    }

    /// Mounts a fresh form (options load on every mount).
    pub async fn open_form(&self) -> FormPage {
        FormPage::mount(Arc::clone(&self.api)).await
    }

    pub fn results_renderer(&self) -> ResultsRenderer {
        ResultsRenderer::new(self.config.reveal_timings())
    }

    /// Ends the session, dropping any stored prediction.
    pub fn end(&mut self) {
        self.store.end_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::test_support::FakeApi;
    use crate::api_client::RawResponse;
    use crate::models::ProfileField;
    use crate::results::RenderState;
    use crate::routes::Route;

    fn prediction(primary: &str, probability: u32) -> RawResponse {
        RawResponse::new(
            200,
            format!(
                r#"{{"primaryPrediction":"{primary}","recommendations":[{{"career":"{primary}","probability":{probability}}}]}}"#
            ),
        )
    }

    fn fill(form: &mut FormPage, education: &str) {
        let c = form.controller_mut();
        c.set_field(ProfileField::Education, education);
        for field in [
            ProfileField::TechnicalSkills,
            ProfileField::CommunicationSkills,
            ProfileField::AnalyticalThinking,
            ProfileField::Creativity,
            ProfileField::Leadership,
        ] {
            c.set_field(field, "Advanced");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_to_results_handoff() {
        let api = Arc::new(
            FakeApi::healthy()
                .queue_prediction(Ok(prediction("Graphic Designer", 74)))
                .queue_prediction(Ok(prediction("Financial Analyst", 66))),
        );
        let mut session = Session::with_api(Config::default(), api);

        let mut form = session.open_form().await;
        fill(&mut form, "Bachelor");
        assert_eq!(form.submit(&mut session.store).await, Ok(Route::Results));

        // Navigate back and submit a second profile from a new form mount.
        let mut form = session.open_form().await;
        fill(&mut form, "Master");
        form.submit(&mut session.store).await.unwrap();

        let state = session.results_renderer().mount(&session.store).await;
        let view = state.view().unwrap();
        assert_eq!(view.headline.primary_prediction, "Financial Analyst");
        assert_eq!(view.cards.len(), 1);
        assert!(view.profile.as_ref().unwrap().headline.starts_with("Master"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ended_session_has_no_results() {
        let api = Arc::new(FakeApi::healthy().queue_prediction(Ok(prediction("Doctor", 90))));
        let mut session = Session::with_api(Config::default(), api);
        let mut form = session.open_form().await;
        fill(&mut form, "PhD");
        form.submit(&mut session.store).await.unwrap();

        session.end();
        let state = session.results_renderer().mount(&session.store).await;
        assert!(matches!(state, RenderState::Error(_)));
    }
}
