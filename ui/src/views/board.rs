use dioxus::prelude::*;

use crate::core::session::BoardSession;
use crate::core::state::Action;
use crate::editor::{dispatch, DataSetEditor, ExportPanel, MetricsPanel};
use crate::radar::RadarChart;

#[component]
pub fn Board() -> Element {
    let session = use_signal(BoardSession::open_default);

    let (rows, series) = {
        let current = session.read();
        (current.chart_rows(), current.chart_series())
    };

    rsx! {
        main { class: "page page-board",
            section { class: "board-card board-chart",
                div { class: "board-card__header",
                    h1 { "Evaluation radar" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| dispatch(session, Action::AddDataSet),
                        "Add member"
                    }
                }
                RadarChart { rows, series }
            }

            MetricsPanel { session }
            DataSetEditor { session }
            ExportPanel { session }
        }
    }
}
