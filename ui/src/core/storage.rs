//! Local persistence for the board.
//!
//! Two slots hold whole-collection JSON snapshots:
//! - `"metrics"`  → `[{ "name" }]`
//! - `"dataSets"` → `[{ "id", "name", "color", "values" }]`
//!
//! Browser builds write to `window.localStorage`; native builds keep one file
//! per slot under the platform data directory. Slots are rewritten in full on
//! every save; there is no schema version.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use super::model::{DataSet, Metric};
use super::platform::Platform;
use super::state::EditorState;

pub const METRICS_KEY: &str = "metrics";
pub const DATA_SETS_KEY: &str = "dataSets";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend rejected write to `{key}`: {reason}")]
    Rejected { key: String, reason: String },
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode board state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Opaque string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Volatile store. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Result<Self, StorageError> {
            let window =
                web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
            let storage = window
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("cannot read `{key}`")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected {
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{KeyValueStore, StorageError};

    /// One `<key>.json` file per slot inside `root`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        root: PathBuf,
    }

    impl FileStore {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        /// Store rooted in the platform data directory.
        pub fn in_data_dir() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "Radarboard", "Radarboard")
                .ok_or_else(|| StorageError::Unavailable("no data directory".into()))?;
            Ok(Self::new(dirs.data_dir().join("board")))
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        fn slot_path(&self, key: &str) -> PathBuf {
            self.root.join(format!("{key}.json"))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.slot_path(key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.root)?;
            fs::write(self.slot_path(key), value)?;
            Ok(())
        }
    }
}

/// Store for the running platform, falling back to memory when the real
/// backend cannot be opened.
pub fn default_store() -> Box<dyn KeyValueStore> {
    let platform = Platform::current();

    #[cfg(target_arch = "wasm32")]
    let opened = LocalStorage::open().map(|store| Box::new(store) as Box<dyn KeyValueStore>);

    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStore::in_data_dir().map(|store| {
        info!(root = %store.root().display(), "board files");
        Box::new(store) as Box<dyn KeyValueStore>
    });

    match opened {
        Ok(store) => store,
        Err(err) => {
            warn!(?platform, %err, "persistent storage unavailable; board will not survive restart");
            Box::new(MemoryStore::new())
        }
    }
}

/// Read both slots. Missing, unreadable or malformed slots start empty.
pub fn load_state(store: &dyn KeyValueStore) -> EditorState {
    let metrics: Vec<Metric> = load_slot(store, METRICS_KEY);
    let data_sets: Vec<DataSet> = load_slot(store, DATA_SETS_KEY);
    info!(
        metrics = metrics.len(),
        data_sets = data_sets.len(),
        "board loaded"
    );
    EditorState::from_parts(metrics, data_sets)
}

fn load_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key, %err, "slot unreadable; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(key, %err, "slot unparsable; starting empty");
            Vec::new()
        }
    }
}

/// Write both collections in full.
pub fn save_state(store: &dyn KeyValueStore, state: &EditorState) -> Result<(), StorageError> {
    let metrics = serde_json::to_string(&state.metrics)?;
    let data_sets = serde_json::to_string(&state.data_sets)?;
    store.set(METRICS_KEY, &metrics)?;
    store.set(DATA_SETS_KEY, &data_sets)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DataSetId;
    use crate::core::state::{parse_score, reduce, Action, EntryField};
    use serde_json::json;

    #[test]
    fn empty_store_loads_empty_state() {
        let store = MemoryStore::new();
        assert_eq!(load_state(&store), EditorState::default());
    }

    #[test]
    fn malformed_slots_are_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(METRICS_KEY, "{not json").unwrap();
        store.set(DATA_SETS_KEY, r#"{"id": 1}"#).unwrap();
        assert_eq!(load_state(&store), EditorState::default());
    }

    #[test]
    fn one_bad_slot_does_not_discard_the_other() {
        let store = MemoryStore::new();
        store.set(METRICS_KEY, r#"[{"name":"Speed"}]"#).unwrap();
        store.set(DATA_SETS_KEY, "garbage").unwrap();
        let state = load_state(&store);
        assert_eq!(state.metrics, vec![Metric::new("Speed")]);
        assert!(state.data_sets.is_empty());
    }

    #[test]
    fn save_writes_both_slots_in_persisted_shape() {
        let state = [
            Action::AddMetric("Speed".into()),
            Action::AddDataSet,
            Action::SetMetricValue {
                id: DataSetId(1),
                metric: "Speed".into(),
                input: "7.5".into(),
                field: EntryField::Score,
            },
        ]
        .into_iter()
        .fold(EditorState::default(), reduce);

        let store = MemoryStore::new();
        save_state(&store, &state).unwrap();

        let metrics: serde_json::Value =
            serde_json::from_str(&store.get(METRICS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(metrics, json!([{ "name": "Speed" }]));

        let data_sets: serde_json::Value =
            serde_json::from_str(&store.get(DATA_SETS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(
            data_sets,
            json!([{
                "id": 1,
                "name": "Member",
                "color": { "stroke": "#FF0000", "fill": "#FFCCCC" },
                "values": { "Speed": { "value": 7.5, "comment": "" } }
            }])
        );
    }

    #[test]
    fn full_precision_scores_reload_bit_for_bit() {
        let inputs = [
            "1.0715660391465826e-75",
            "-1.603964615428183e143",
            "1.7546217903306627",
            "9.999999999999998",
        ];
        let mut actions = vec![Action::AddDataSet];
        for (index, input) in inputs.iter().enumerate() {
            let metric = format!("m{index}");
            actions.push(Action::AddMetric(metric.clone()));
            actions.push(Action::SetMetricValue {
                id: DataSetId(1),
                metric,
                input: (*input).into(),
                field: EntryField::Score,
            });
        }
        let state = actions.into_iter().fold(EditorState::default(), reduce);

        let store = MemoryStore::new();
        save_state(&store, &state).unwrap();
        let reloaded = load_state(&store);

        for (index, input) in inputs.iter().enumerate() {
            let metric = format!("m{index}");
            assert_eq!(
                reloaded.data_sets[0].score(&metric).to_bits(),
                parse_score(input).to_bits(),
                "{input}"
            );
        }
        assert_eq!(reloaded.data_sets, state.data_sets);
    }

    #[test]
    fn legacy_bare_number_boards_load() {
        let store = MemoryStore::new();
        store.set(METRICS_KEY, r#"[{"name":"Speed"}]"#).unwrap();
        store
            .set(
                DATA_SETS_KEY,
                r##"[{"id":4,"name":"Ann","color":{"stroke":"#0000FF","fill":"#CCCCFF"},"values":{"Speed":6}}]"##,
            )
            .unwrap();
        let state = load_state(&store);
        assert_eq!(state.active, Some(DataSetId(4)));
        assert_eq!(state.data_sets[0].score("Speed"), 6.0);
        assert_eq!(state.data_sets[0].comment("Speed"), "");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trips_slots() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get(METRICS_KEY).unwrap(), None);
        store.set(METRICS_KEY, "[]").unwrap();
        assert_eq!(store.get(METRICS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("metrics.json").exists());
    }
}
