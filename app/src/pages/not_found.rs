use dioxus::prelude::*;

use crate::components::back_link_target;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No route for /{}", path);

    rsx! {
        div { class: "px-8 py-16 text-center",
            h1 { class: "mb-4 text-2xl font-bold text-gray-900", "404 - Page Not Found" }
            p { class: "mb-6 text-gray-500", "The page \"/{path}\" could not be found." }
            Link {
                to: back_link_target(),
                class: "text-sm font-medium text-brand-600 hover:text-brand-700 hover:underline",
                "← Back to Dashboard"
            }
        }
    }
}
