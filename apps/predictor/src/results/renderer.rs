//! Results page state machine.
//!
//! Loading → {Error | Displaying}. Inside Displaying, `revealed` flips after a
//! short delay and only gates entrance animation. Both delays are cosmetic;
//! the view is fully derived before the first one starts.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::results::view::ResultsView;
use crate::routes::Route;
use crate::store::ResultStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimings {
    pub loading: Duration,
    pub reveal: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            loading: Duration::from_millis(1200),
            reveal: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Loading,
    /// Terminal for this mount; the page offers a way back to the form.
    Error(String),
    Displaying {
        view: Arc<ResultsView>,
        revealed: bool,
    },
}

impl RenderState {
    pub fn view(&self) -> Option<&ResultsView> {
        match self {
            RenderState::Displaying { view, .. } => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    BackToForm,
    ToggleSaved,
    Print,
    Share,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Navigate(Route),
    Saved(bool),
    Printed,
    Unavailable(&'static str),
}

/// Host hooks the results page needs from its platform.
pub trait Platform {
    /// Opens the platform print dialog for the current page.
    fn print(&self, view: Option<&ResultsView>);
}

pub struct ResultsRenderer {
    timings: RevealTimings,
    state: watch::Sender<RenderState>,
    saved: bool,
}

impl ResultsRenderer {
    pub fn new(timings: RevealTimings) -> Self {
        let (state, _) = watch::channel(RenderState::Loading);
        Self {
            timings,
            state,
            saved: false,
        }
    }

    /// Follows state changes, e.g. to drive entrance animation.
    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> RenderState {
        self.state.borrow().clone()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Reads the store once and walks the state machine to its end state.
    pub async fn mount(&self, store: &ResultStore) -> RenderState {
        self.state.send_replace(RenderState::Loading);

        let stored = match store.read() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Cannot show results: {e}");
                self.state.send_replace(RenderState::Error(e.to_string()));
                return self.state();
            }
        };

        let view = Arc::new(ResultsView::build(&stored));
        debug!(
            "Prepared results view with {} recommendations",
            view.cards.len()
        );

        tokio::time::sleep(self.timings.loading).await;
        self.state.send_replace(RenderState::Displaying {
            view: Arc::clone(&view),
            revealed: false,
        });

        tokio::time::sleep(self.timings.reveal).await;
        self.state.send_replace(RenderState::Displaying {
            view,
            revealed: true,
        });
        info!("Results displayed");
        self.state()
    }

    /// User actions. None of them touch the result store.
    pub fn handle(&mut self, action: ResultsAction, platform: &dyn Platform) -> ActionOutcome {
        match action {
            ResultsAction::BackToForm => ActionOutcome::Navigate(Route::Form),
            ResultsAction::ToggleSaved => {
                self.saved = !self.saved;
                ActionOutcome::Saved(self.saved)
            }
            ResultsAction::Print => {
                let state = self.state();
                platform.print(state.view());
                ActionOutcome::Printed
            }
            ResultsAction::Share => {
                ActionOutcome::Unavailable("Share feature would be implemented here")
            }
            ResultsAction::Contact => {
                ActionOutcome::Unavailable("Contact feature would be implemented here")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PredictionResult, ProfileDraft, Recommendation};
    use crate::store::{SessionStorage, PREDICTION_RESULT_KEY};
    use std::cell::RefCell;
    use tokio::time::Instant;

    #[derive(Default)]
    struct RecordingPlatform {
        printed: RefCell<Vec<Option<String>>>,
    }

    impl Platform for RecordingPlatform {
        fn print(&self, view: Option<&ResultsView>) {
            self.printed
                .borrow_mut()
                .push(view.map(|v| v.headline.primary_prediction.clone()));
        }
    }

    fn result(pairs: &[(&str, f64)]) -> PredictionResult {
        PredictionResult {
            primary_prediction: pairs[0].0.to_string(),
            recommendations: pairs
                .iter()
                .map(|(career, probability)| Recommendation {
                    career: career.to_string(),
                    probability: *probability,
                })
                .collect(),
            model_details: None,
            request_id: None,
        }
    }

    fn populated_store() -> ResultStore {
        let mut store = ResultStore::new();
        store
            .write(
                &result(&[("Software Engineer", 92.0), ("Data Scientist", 61.0)]),
                &ProfileDraft::default(),
            )
            .unwrap();
        store
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_store_goes_straight_to_error() {
        let renderer = ResultsRenderer::new(RevealTimings::default());
        let started = Instant::now();

        let state = renderer.mount(&ResultStore::new()).await;

        assert_eq!(
            state,
            RenderState::Error(
                "No prediction results found. Please complete the prediction form first."
                    .to_string()
            )
        );
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_corrupt_entry_is_error_not_displaying() {
        let mut storage = SessionStorage::default();
        storage.set(PREDICTION_RESULT_KEY, "[1, 2".to_string());
        let renderer = ResultsRenderer::new(RevealTimings::default());

        let state = renderer.mount(&ResultStore::from_storage(storage)).await;
        assert!(matches!(state, RenderState::Error(ref m) if m.starts_with("Failed to load prediction results")));
        assert!(state.view().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_staged_reveal_follows_delays() {
        let renderer = ResultsRenderer::new(RevealTimings::default());
        let mut rx = renderer.subscribe();
        let store = populated_store();
        let started = Instant::now();

        let observe = async {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let stage = match &*rx.borrow_and_update() {
                    RenderState::Loading => "loading",
                    RenderState::Error(_) => "error",
                    RenderState::Displaying { revealed: false, .. } => "displaying",
                    RenderState::Displaying { revealed: true, .. } => "revealed",
                };
                seen.push((stage, started.elapsed().as_millis()));
                if stage == "revealed" {
                    break;
                }
            }
            seen
        };

        let (final_state, seen) = tokio::join!(renderer.mount(&store), observe);

        assert_eq!(
            seen,
            vec![("loading", 0), ("displaying", 1200), ("revealed", 1500)]
        );
        let view = final_state.view().unwrap();
        assert_eq!(view.chart.labels(), vec!["Software Engineer", "Data Scientist"]);
        assert_eq!(view.chart.total(), 153.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reflects_only_latest_submission() {
        let mut store = populated_store();
        let second = ProfileDraft {
            education: "Master".to_string(),
            ..ProfileDraft::default()
        };
        store.write(&result(&[("Teacher", 55.0)]), &second).unwrap();

        let renderer = ResultsRenderer::new(RevealTimings::default());
        let state = renderer.mount(&store).await;
        let view = state.view().unwrap();

        assert_eq!(view.headline.primary_prediction, "Teacher");
        assert_eq!(view.chart.labels(), vec!["Teacher"]);
        assert!(view
            .profile
            .as_ref()
            .unwrap()
            .headline
            .starts_with("Master"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_actions() {
        let store = populated_store();
        let mut renderer = ResultsRenderer::new(RevealTimings::default());
        renderer.mount(&store).await;
        let platform = RecordingPlatform::default();

        assert_eq!(
            renderer.handle(ResultsAction::BackToForm, &platform),
            ActionOutcome::Navigate(Route::Form)
        );
        assert_eq!(
            renderer.handle(ResultsAction::ToggleSaved, &platform),
            ActionOutcome::Saved(true)
        );
        assert_eq!(
            renderer.handle(ResultsAction::ToggleSaved, &platform),
            ActionOutcome::Saved(false)
        );
        assert_eq!(
            renderer.handle(ResultsAction::Print, &platform),
            ActionOutcome::Printed
        );
        assert!(matches!(
            renderer.handle(ResultsAction::Share, &platform),
            ActionOutcome::Unavailable(_)
        ));
        assert!(matches!(
            renderer.handle(ResultsAction::Contact, &platform),
            ActionOutcome::Unavailable(_)
        ));

        assert_eq!(
            platform.printed.borrow().as_slice(),
            &[Some("Software Engineer".to_string())]
        );
        assert!(!store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_form_available_from_error() {
        let mut renderer = ResultsRenderer::new(RevealTimings::default());
        renderer.mount(&ResultStore::new()).await;
        assert_eq!(
            renderer.handle(ResultsAction::BackToForm, &RecordingPlatform::default()),
            ActionOutcome::Navigate(Route::Form)
        );
    }
}
