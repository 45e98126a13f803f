use std::borrow::Cow;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use std::path::PathBuf;

use dioxus::prelude::*;
use serde::Serialize;
use thiserror::Error;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{error, info};

use crate::core::format::format_score;
use crate::core::model::{DataSet, Metric};
use crate::core::session::BoardSession;
use crate::core::state::EditorState;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not encode board: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("no export directory available")]
    NoExportDir,
    #[error("{0}")]
    Browser(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportKind {
    Json,
    Csv,
}

impl ExportKind {
    fn slug(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

#[component]
pub fn ExportPanel(session: Signal<BoardSession>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let data_set_count = session.read().state().data_sets.len();

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "board-card__meta board-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "board-card__meta board-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let run_export = move |kind: ExportKind| {
        let mut status_signal = status;
        let state = session.read().state().clone();
        match perform_export(&state, kind) {
            Ok(message) => {
                info!(kind = kind.slug(), "board exported");
                status_signal.set(ExportStatus::Done(message));
            }
            Err(err) => {
                error!(kind = kind.slug(), %err, "board export failed");
                status_signal.set(ExportStatus::Error(err.to_string()));
            }
        }
    };

    rsx! {
        section { class: "board-card board-export",
            div { class: "board-card__header",
                h2 { "Export" }
            }

            if data_set_count == 0 {
                p { class: "board-card__placeholder", "Exports unlock once a member is on the board." }
            } else {
                div { class: "board-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| run_export(ExportKind::Json),
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| run_export(ExportKind::Csv),
                        "Export CSV"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn perform_export(state: &EditorState, kind: ExportKind) -> Result<String, ExportError> {
    let body = match kind {
        ExportKind::Json => build_json(state)?,
        ExportKind::Csv => build_csv(state),
    };
    let filename = export_filename(kind, OffsetDateTime::now_utc());
    match deliver(&filename, kind, body.into_bytes())? {
        Some(path) => Ok(format!("Saved to {}", path.display())),
        None => Ok(format!("{filename} download started")),
    }
}

/// `radarboard-<kind>-<YYYYMMDD_HHMMSS>.<ext>`, stamped in UTC.
fn export_filename(kind: ExportKind, at: OffsetDateTime) -> String {
    let stamp = at
        .format(format_description!("[year][month][day]_[hour][minute][second]"))
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("radarboard-{}-{stamp}.{}", kind.slug(), kind.slug())
}

#[derive(Serialize)]
struct BoardExport<'a> {
    metrics: &'a [Metric],
    #[serde(rename = "dataSets")]
    data_sets: &'a [DataSet],
}

/// Both collections in their persisted shape, pretty printed.
pub fn build_json(state: &EditorState) -> Result<String, ExportError> {
    let export = BoardExport {
        metrics: &state.metrics,
        data_sets: &state.data_sets,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// One row per data set per registered metric.
pub fn build_csv(state: &EditorState) -> String {
    let mut csv = String::from("data_set,metric,score,comment\n");
    for data_set in &state.data_sets {
        for metric in &state.metrics {
            let fields = [
                escape_csv(&data_set.name),
                escape_csv(&metric.name),
                Cow::Owned(format_score(data_set.score(&metric.name))),
                escape_csv(data_set.comment(&metric.name)),
            ];
            csv.push_str(&fields.join(","));
            csv.push('\n');
        }
    }
    csv
}

/// RFC 4180 quoting for a single field.
fn escape_csv(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Hands the file to the browser as a download. Nothing lands on disk here,
/// so there is no path to report.
#[cfg(target_arch = "wasm32")]
fn deliver(filename: &str, kind: ExportKind, bytes: Vec<u8>) -> Result<Option<PathBuf>, ExportError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let payload = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()).buffer());
    let props = BlobPropertyBag::new();
    props.set_type(kind.mime());
    let blob = Blob::new_with_u8_array_sequence_and_options(&payload, &props)
        .map_err(|_| ExportError::Browser("could not build export blob"))?;
    let href = Url::create_object_url_with_blob(&blob)
        .map_err(|_| ExportError::Browser("could not create object URL"))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ExportError::Browser("no document to attach the download to"))?;
    let body = document
        .body()
        .ok_or(ExportError::Browser("document has no body"))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into().ok())
        .ok_or(ExportError::Browser("could not create download link"))?;

    link.set_href(&href);
    link.set_download(filename);
    link.style().set_property("display", "none").ok();
    body.append_child(&link).ok();
    link.click();
    link.remove();
    Url::revoke_object_url(&href).ok();

    Ok(None)
}

/// Writes the file under `<data dir>/exports` and reports where it went.
#[cfg(not(target_arch = "wasm32"))]
fn deliver(filename: &str, _kind: ExportKind, bytes: Vec<u8>) -> Result<Option<PathBuf>, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "Radarboard", "Radarboard")
        .ok_or(ExportError::NoExportDir)?;
    write_export(&dirs.data_dir().join("exports"), filename, &bytes).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DataSetId;
    use crate::core::state::{reduce, Action, EntryField};
    use serde_json::json;
    use time::macros::datetime;

    fn sample_board() -> EditorState {
        [
            Action::AddMetric("Speed".into()),
            Action::AddMetric("Focus".into()),
            Action::AddDataSet,
            Action::RenameDataSet {
                id: DataSetId(1),
                name: "Doe, Jane".into(),
            },
            Action::SetMetricValue {
                id: DataSetId(1),
                metric: "Speed".into(),
                input: "7.5".into(),
                field: EntryField::Score,
            },
            Action::SetMetricValue {
                id: DataSetId(1),
                metric: "Focus".into(),
                input: "said \"later\"".into(),
                field: EntryField::Comment,
            },
        ]
        .into_iter()
        .fold(EditorState::default(), reduce)
    }

    #[test]
    fn csv_lists_every_metric_per_data_set() {
        let csv = build_csv(&sample_board());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "data_set,metric,score,comment",
                "\"Doe, Jane\",Speed,7.5,",
                "\"Doe, Jane\",Focus,0,\"said \"\"later\"\"\"",
            ]
        );
    }

    #[test]
    fn json_matches_persisted_shape() {
        let exported: serde_json::Value =
            serde_json::from_str(&build_json(&sample_board()).unwrap()).unwrap();
        assert_eq!(exported["metrics"], json!([{ "name": "Speed" }, { "name": "Focus" }]));
        assert_eq!(exported["dataSets"][0]["name"], json!("Doe, Jane"));
        assert_eq!(
            exported["dataSets"][0]["values"]["Speed"],
            json!({ "value": 7.5, "comment": "" })
        );
    }

    #[test]
    fn filenames_carry_kind_and_utc_stamp() {
        let at = datetime!(2024-03-07 09:05:01 UTC);
        assert_eq!(
            export_filename(ExportKind::Json, at),
            "radarboard-json-20240307_090501.json"
        );
        assert_eq!(
            export_filename(ExportKind::Csv, at),
            "radarboard-csv-20240307_090501.csv"
        );
    }

    #[test]
    fn csv_fields_quote_only_when_needed() {
        assert!(matches!(escape_csv("Speed"), Cow::Borrowed("Speed")));
        assert_eq!(escape_csv("line\r\nbreak"), "\"line\r\nbreak\"");
        assert_eq!(escape_csv(""), "");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_exports_land_in_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let csv = build_csv(&sample_board());
        let path = write_export(&target, "board.csv", csv.as_bytes()).unwrap();
        assert_eq!(path, target.join("board.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), csv);
    }
}
