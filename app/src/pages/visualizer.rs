use dioxus::prelude::*;

use crate::hooks::{use_marketplace, AgentSummary, MessageSummary};

const PREVIEW_CHARS: usize = 280;

#[component]
pub fn Visualizer() -> Element {
    let marketplace = use_marketplace();
    let state = marketplace.read();
    let snapshot = &state.snapshot;
    let message_count = snapshot.messages.len();

    rsx! {
        div { class: "px-8 py-6",
            if state.loading {
                p { class: "py-12 text-center text-gray-500", "Loading marketplace..." }
            } else if let Some(error) = &state.error {
                p { class: "py-12 text-center text-red-600", "Error: {error}" }
            } else {
                if let Some(experiment) = &snapshot.experiment {
                    p { class: "mb-4 text-sm text-gray-500",
                        "Experiment "
                        span { class: "font-mono text-gray-700", "{experiment}" }
                    }
                }

                div { class: "grid gap-6 md:grid-cols-4",
                    AgentColumn { title: "Customers", agents: snapshot.customers.clone() }

                    div { class: "md:col-span-2 rounded-lg border border-gray-200 bg-white p-4",
                        h3 { class: "mb-3 font-semibold text-gray-900", "Messages ({message_count})" }
                        if snapshot.messages.is_empty() {
                            p { class: "text-sm text-gray-500", "No messages exchanged yet." }
                        }
                        div { class: "space-y-3",
                            for (i, message) in snapshot.messages.iter().enumerate() {
                                MessageRow { key: "{i}", message: message.clone() }
                            }
                        }
                    }

                    AgentColumn { title: "Businesses", agents: snapshot.businesses.clone() }
                }
            }
        }
    }
}

#[component]
fn AgentColumn(title: &'static str, agents: Vec<AgentSummary>) -> Element {
    let count = agents.len();

    rsx! {
        div { class: "rounded-lg border border-gray-200 bg-white p-4",
            h3 { class: "mb-3 font-semibold text-gray-900", "{title} ({count})" }
            ul { class: "space-y-1 text-sm",
                for agent in agents.iter() {
                    li { key: "{agent.id}", class: "truncate text-gray-700", title: "{agent.id}", "{agent.name}" }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: MessageSummary) -> Element {
    let preview = preview(&message.content, PREVIEW_CHARS);

    rsx! {
        div { class: "rounded border border-gray-100 p-2 text-sm",
            div { class: "mb-1 text-xs text-gray-500",
                span { class: "font-medium text-gray-700", "{message.from_agent}" }
                " → "
                span { class: "font-medium text-gray-700", "{message.to_agent}" }
            }
            p { class: "whitespace-pre-wrap text-gray-800", "{preview}" }
        }
    }
}

/// First `max_chars` characters of `content`, with an ellipsis if cut.
fn preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_are_untouched() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn long_messages_cut_on_char_boundary() {
        assert_eq!(preview("héllo wörld", 4), "héll…");
    }

    #[test]
    fn agent_column_lists_names() {
        let agents = vec![
            AgentSummary { id: "c1".into(), name: "Alice".into() },
            AgentSummary { id: "c2".into(), name: "Bob".into() },
        ];
        let html = dioxus_ssr::render_element(rsx! {
            AgentColumn { title: "Customers", agents }
        });

        assert!(html.contains("Customers (2)"), "{html}");
        assert!(html.contains("Alice"), "{html}");
        assert!(html.contains("Bob"), "{html}");
    }
}
