use dioxus::prelude::*;

use crate::components::StatusBadge;
use crate::hooks::use_experiments;
use crate::route::Route;

#[component]
pub fn Dashboard() -> Element {
    let experiments = use_experiments();
    let state = experiments.read();

    rsx! {
        div { class: "px-8 py-6",
            h2 { class: "mb-6 text-2xl font-bold text-gray-900", "Experiments" }

            div { class: "rounded-lg border border-gray-200 bg-white",
                if state.loading {
                    div { class: "py-12 text-center",
                        div { class: "mx-auto mb-4 h-8 w-8 animate-spin rounded-full border-2 border-brand-500 border-t-transparent" }
                        p { class: "text-gray-500", "Loading experiments..." }
                    }
                } else if let Some(error) = &state.error {
                    div { class: "py-12 text-center",
                        p { class: "text-red-600", "Error: {error}" }
                    }
                } else if state.experiments.is_empty() {
                    div { class: "py-12 text-center",
                        p { class: "text-gray-500", "No experiments yet." }
                    }
                } else {
                    // Header
                    div { class: "grid grid-cols-6 gap-4 border-b border-gray-200 px-4 py-3 text-sm text-gray-500",
                        div { class: "col-span-2", "Name" }
                        div { "Status" }
                        div { class: "text-right", "Customers" }
                        div { class: "text-right", "Businesses" }
                        div { class: "text-right", "Created" }
                    }

                    div { class: "divide-y divide-gray-100",
                        for experiment in state.experiments.iter() {
                            div {
                                key: "{experiment.name}",
                                class: "grid grid-cols-6 items-center gap-4 px-4 py-3",
                                div { class: "col-span-2 truncate font-mono text-sm",
                                    Link {
                                        to: Route::experiment(experiment.name.clone()),
                                        class: "text-brand-600 hover:underline",
                                        "{experiment.name}"
                                    }
                                }
                                div { StatusBadge { status: experiment.status } }
                                div { class: "text-right font-mono text-gray-700", "{experiment.customers}" }
                                div { class: "text-right font-mono text-gray-700", "{experiment.businesses}" }
                                div { class: "text-right text-sm text-gray-500",
                                    {format_timestamp(experiment.created_at.as_deref())}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `2025-10-01T12:00:00.123Z` -> `2025-10-01 12:00:00`.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(timestamp) = timestamp else {
        return "-".to_string();
    };
    let trimmed = timestamp.trim_end_matches('Z');
    let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
    trimmed.replacen('T', " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_drop_fraction_and_zone() {
        assert_eq!(format_timestamp(Some("2025-10-01T12:00:00.123Z")), "2025-10-01 12:00:00");
        assert_eq!(format_timestamp(Some("2025-10-01T12:00:00Z")), "2025-10-01 12:00:00");
    }

    #[test]
    fn missing_timestamp_is_dash() {
        assert_eq!(format_timestamp(None), "-");
    }
}
