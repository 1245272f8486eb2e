use dioxus::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "rounded-lg border border-gray-200 bg-white p-4",
            p { class: "text-sm text-gray-500", "{label}" }
            p { class: "mt-1 font-mono text-2xl font-semibold text-gray-900", "{value}" }
        }
    }
}
