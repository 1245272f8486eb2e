use dioxus::prelude::*;

use super::{fetch_experiments, ExperimentSummary};

#[derive(Clone, Debug)]
pub struct ExperimentsState {
    pub experiments: Vec<ExperimentSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ExperimentsState {
    fn default() -> Self {
        Self {
            experiments: vec![],
            loading: true,
            error: None,
        }
    }
}

pub fn use_experiments() -> Signal<ExperimentsState> {
    let mut state = use_signal(ExperimentsState::default);

    let _resource = use_resource(move || async move {
        match fetch_experiments().await {
            Ok(mut experiments) => {
                // Newest first; experiments without a timestamp sink to the bottom
                experiments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                let mut s = state.write();
                s.experiments = experiments;
                s.loading = false;
            }
            Err(e) => {
                tracing::error!("Failed to fetch experiments: {}", e);
                let mut s = state.write();
                s.error = Some(e.to_string());
                s.loading = false;
            }
        }
    });

    state
}
