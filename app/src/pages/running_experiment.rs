use dioxus::prelude::*;

use crate::components::{StatCard, StatusBadge};
use crate::hooks::use_experiment;
use crate::route::ExperimentName;

#[component]
pub fn RunningExperiment(name: ExperimentName) -> Element {
    let name = name.into_inner();
    let experiment = use_experiment(name.clone());
    let state = experiment.read();

    rsx! {
        div { class: "px-8 py-6",
            div { class: "mb-6 flex items-center gap-3",
                h2 { class: "font-mono text-2xl font-bold text-gray-900", "{name}" }
                if let Some(detail) = &state.detail {
                    StatusBadge { status: detail.status }
                }
                if state.polling && !state.loading {
                    span { class: "text-xs text-gray-400", "auto-refreshing" }
                }
            }

            if state.loading {
                p { class: "py-12 text-center text-gray-500", "Loading experiment..." }
            }

            if let Some(error) = &state.error {
                div { class: "mb-6 rounded-lg border border-red-200 bg-red-50 p-4 text-red-700",
                    "Error: {error}"
                }
            }

            if let Some(detail) = &state.detail {
                div { class: "grid grid-cols-2 gap-4 md:grid-cols-3",
                    StatCard { label: "Customers", value: detail.customers.to_string() }
                    StatCard { label: "Businesses", value: detail.businesses.to_string() }
                    StatCard { label: "Actions", value: detail.actions.to_string() }
                    StatCard { label: "Messages", value: detail.messages.to_string() }
                    StatCard { label: "Searches", value: detail.searches.to_string() }
                    StatCard { label: "Payments", value: detail.payments.to_string() }
                }

                if let Some(failure) = &detail.error {
                    div { class: "mt-6 rounded-lg border border-red-200 bg-red-50 p-4",
                        h3 { class: "mb-2 font-semibold text-red-700", "Experiment failed" }
                        pre { class: "whitespace-pre-wrap text-sm text-red-600", "{failure}" }
                    }
                }
            }
        }
    }
}
