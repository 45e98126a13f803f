//! Form panels that edit the board through a shared [`BoardSession`] signal.

mod data_sets;
pub use data_sets::DataSetEditor;

mod metrics;
pub use metrics::MetricsPanel;

mod export;
pub use export::{build_csv, build_json, ExportError, ExportPanel};

use dioxus::prelude::*;
use tracing::error;

use crate::core::session::BoardSession;
use crate::core::state::Action;

/// Apply `action`; a failed save is logged and the edit is kept in memory.
pub fn dispatch(mut session: Signal<BoardSession>, action: Action) {
    if let Err(err) = session.write().dispatch(action) {
        error!(%err, "board change not saved");
    }
}
