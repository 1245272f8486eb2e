use dioxus::prelude::*;

use crate::hooks::ExperimentStatus;

#[component]
pub fn StatusBadge(status: ExperimentStatus) -> Element {
    let badge_class = status.badge_class();
    let label = status.label();

    rsx! {
        span { class: "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium {badge_class}",
            if status.is_live() {
                span { class: "mr-1 h-1.5 w-1.5 animate-pulse rounded-full bg-brand-500" }
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_badge_pulses() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: ExperimentStatus::Running }
        });
        assert!(html.contains("Running"), "{html}");
        assert!(html.contains("animate-pulse"), "{html}");
    }

    #[test]
    fn finished_badge_is_static() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: ExperimentStatus::Failed }
        });
        assert!(html.contains("Failed"), "{html}");
        assert!(html.contains("text-red-700"), "{html}");
        assert!(!html.contains("animate-pulse"), "{html}");
    }
}
