use dioxus::prelude::*;

use crate::core::format::{score_input_value, series_label};
use crate::core::model::{DataSet, DataSetId, MetricValue};
use crate::core::session::BoardSession;
use crate::core::state::{Action, EntryField};
use crate::editor::dispatch;

#[component]
pub fn DataSetEditor(session: Signal<BoardSession>) -> Element {
    let EditorSnapshot {
        options,
        active,
        metrics,
        can_remove,
    } = EditorSnapshot::capture(&session.read());
    let active_id = active.as_ref().map(|ds| ds.id);
    let removable = active_id.filter(|_| can_remove);

    let on_select = move |evt: FormEvent| {
        if let Ok(raw) = evt.value().parse::<u64>() {
            dispatch(session, Action::SelectDataSet(DataSetId(raw)));
        }
    };

    rsx! {
        section { class: "board-card board-editor",
            div { class: "board-card__header",
                h2 { "Edit member" }
            }

            if options.is_empty() {
                p { class: "board-card__placeholder", "Add a member to start scoring." }
            } else {
                div { class: "board-editor__toolbar",
                    select {
                        class: "field",
                        onchange: on_select,
                        for (id, label) in options.iter() {
                            option {
                                key: "{id}",
                                value: "{id}",
                                selected: active_id == Some(*id),
                                "{label}"
                            }
                        }
                    }
                    if let Some(id) = removable {
                        {render_remove_button(session, id)}
                    }
                }

                if let Some(active) = active {
                    {render_active(session, active, metrics)}
                }
            }
        }
    }
}

struct EditorSnapshot {
    options: Vec<(DataSetId, String)>,
    active: Option<DataSet>,
    metrics: Vec<String>,
    can_remove: bool,
}

impl EditorSnapshot {
    fn capture(session: &BoardSession) -> Self {
        let state = session.state();
        Self {
            options: state
                .data_sets
                .iter()
                .map(|ds| (ds.id, series_label(&ds.name).to_string()))
                .collect(),
            active: state.active_data_set().cloned(),
            metrics: state.metrics.iter().map(|m| m.name.clone()).collect(),
            // Keep at least one member on the board from this form.
            can_remove: state.data_sets.len() > 1,
        }
    }
}

fn render_remove_button(session: Signal<BoardSession>, id: DataSetId) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button button--danger",
            onclick: move |_| dispatch(session, Action::RemoveDataSet(id)),
            "Remove member"
        }
    }
}

fn render_active(session: Signal<BoardSession>, active: DataSet, metrics: Vec<String>) -> Element {
    let id = active.id;
    let name = active.name.clone();

    rsx! {
        div { class: "board-editor__form",
            label { class: "board-editor__label",
                "Name"
                input {
                    class: "field",
                    value: "{name}",
                    placeholder: "Name",
                    oninput: move |evt: FormEvent| {
                        dispatch(session, Action::RenameDataSet { id, name: evt.value() })
                    },
                }
            }

            for metric in metrics.into_iter() {
                {render_metric_fields(session, id, metric.clone(), active.values.get(&metric).cloned().unwrap_or_default())}
            }
        }
    }
}

fn render_metric_fields(
    session: Signal<BoardSession>,
    id: DataSetId,
    metric: String,
    entry: MetricValue,
) -> Element {
    let score_metric = metric.clone();
    let comment_metric = metric.clone();
    let score = score_input_value(entry.value);
    let comment = entry.comment;

    rsx! {
        div { key: "{metric}", class: "board-editor__metric",
            span { class: "board-editor__label", "{metric}" }
            input {
                class: "field",
                r#type: "number",
                min: "0",
                max: "10",
                step: "any",
                value: "{score}",
                oninput: move |evt: FormEvent| {
                    dispatch(
                        session,
                        Action::SetMetricValue {
                            id,
                            metric: score_metric.clone(),
                            input: evt.value(),
                            field: EntryField::Score,
                        },
                    )
                },
            }
            textarea {
                class: "field field--comment",
                placeholder: "Notes on {metric}…",
                value: "{comment}",
                oninput: move |evt: FormEvent| {
                    dispatch(
                        session,
                        Action::SetMetricValue {
                            id,
                            metric: comment_metric.clone(),
                            input: evt.value(),
                            field: EntryField::Comment,
                        },
                    )
                },
            }
        }
    }
}
