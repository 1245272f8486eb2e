use dioxus::prelude::*;

use super::{fetch_experiment, ApiError, ExperimentDetail};
use crate::POLL_INTERVAL_MS;

#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentState {
    pub detail: Option<ExperimentDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// False once the experiment finished or the poller gave up.
    pub polling: bool,
}

impl Default for ExperimentState {
    fn default() -> Self {
        Self {
            detail: None,
            loading: true,
            error: None,
            polling: true,
        }
    }
}

impl ExperimentState {
    /// Fold one fetch into the state. Returns whether to poll again.
    ///
    /// A retryable error keeps the last detail on screen next to the error.
    pub fn apply(&mut self, result: Result<ExperimentDetail, ApiError>) -> bool {
        self.loading = false;
        match result {
            Ok(detail) => {
                let live = detail.status.is_live();
                self.detail = Some(detail);
                self.error = None;
                self.polling = live;
            }
            Err(e) => {
                self.polling = e.is_retryable();
                self.error = Some(e.to_string());
            }
        }
        self.polling
    }
}

/// Polls one experiment until it stops running.
///
/// The poller restarts from scratch when `name` changes; the previous loop is
/// cancelled together with its resource.
pub fn use_experiment(name: String) -> Signal<ExperimentState> {
    let mut state = use_signal(ExperimentState::default);

    let _poller = use_resource(use_reactive!(|(name,)| async move {
        state.set(ExperimentState::default());

        loop {
            let result = fetch_experiment(&name).await;
            if let Err(e) = &result {
                tracing::error!("Failed to fetch experiment {}: {}", name, e);
            }

            if !state.write().apply(result) {
                tracing::info!("Stopped polling experiment {}", name);
                break;
            }

            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    }));

    state
}
