use dioxus::prelude::*;

use crate::core::session::BoardSession;
use crate::core::state::Action;
use crate::editor::dispatch;

#[component]
pub fn MetricsPanel(session: Signal<BoardSession>) -> Element {
    let mut draft = use_signal(String::new);

    let names: Vec<String> = session
        .read()
        .state()
        .metrics
        .iter()
        .map(|metric| metric.name.clone())
        .collect();

    let add_metric = move |_: MouseEvent| {
        let name = draft();
        let accepted = !name.is_empty() && !session.read().state().has_metric(&name);
        dispatch(session, Action::AddMetric(name));
        // Rejected names stay in the field so they can be corrected.
        if accepted {
            draft.set(String::new());
        }
    };

    rsx! {
        section { class: "board-card board-metrics",
            div { class: "board-card__header",
                h2 { "Metrics" }
                if !names.is_empty() {
                    span { class: "board-card__meta", "{names.len()} defined" }
                }
            }

            div { class: "board-metrics__add",
                input {
                    class: "field",
                    value: "{draft}",
                    placeholder: "New metric name",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: add_metric,
                    "Add metric"
                }
            }

            if names.is_empty() {
                p { class: "board-card__placeholder", "Metrics become the axes of the chart." }
            } else {
                ul { class: "board-metrics__list",
                    for name in names.into_iter() {
                        {render_metric_row(session, name)}
                    }
                }
            }
        }
    }
}

fn render_metric_row(session: Signal<BoardSession>, name: String) -> Element {
    let remove_name = name.clone();

    rsx! {
        li { key: "{name}", class: "board-metrics__item",
            span { class: "board-metrics__name", "{name}" }
            button {
                r#type: "button",
                class: "button button--danger",
                onclick: move |_| dispatch(session, Action::RemoveMetric(remove_name.clone())),
                "Remove"
            }
        }
    }
}
