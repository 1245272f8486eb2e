use dioxus::prelude::*;

use super::{fetch_marketplace, MarketplaceSnapshot};

#[derive(Clone, Debug)]
pub struct MarketplaceState {
    pub snapshot: MarketplaceSnapshot,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for MarketplaceState {
    fn default() -> Self {
        Self {
            snapshot: MarketplaceSnapshot::default(),
            loading: true,
            error: None,
        }
    }
}

pub fn use_marketplace() -> Signal<MarketplaceState> {
    let mut state = use_signal(MarketplaceState::default);

    let _resource = use_resource(move || async move {
        match fetch_marketplace().await {
            Ok(snapshot) => {
                tracing::info!(
                    customers = snapshot.customers.len(),
                    businesses = snapshot.businesses.len(),
                    messages = snapshot.messages.len(),
                    "loaded marketplace snapshot"
                );
                let mut s = state.write();
                s.snapshot = snapshot;
                s.loading = false;
            }
            Err(e) => {
                tracing::error!("Failed to fetch marketplace: {}", e);
                let mut s = state.write();
                s.error = Some(e.to_string());
                s.loading = false;
            }
        }
    });

    state
}
