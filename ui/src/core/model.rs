//! Board data model: metrics, data sets and the per-metric scores they carry.
//!
//! Shapes mirror the persisted layout:
//! - `metrics`  → `[{ "name": .. }]`
//! - `dataSets` → `[{ "id", "name", "color": { "stroke", "fill" }, "values": { <metric>: .. } }]`
//!
//! Stored values are always written in the extended `{ value, comment }` form;
//! older boards that stored a bare number per metric still load.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Display name given to freshly added data sets.
pub const DEFAULT_DATA_SET_NAME: &str = "Member";

/// A named axis of evaluation shared by every data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Identifier of a data set. Derived from the current maximum, so it is only
/// unique within one board and may be reused after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSetId(pub u64);

impl DataSetId {
    pub const FIRST: DataSetId = DataSetId(1);

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for DataSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stroke/fill pair assigned once when a data set is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    pub stroke: String,
    pub fill: String,
}

/// Score (and optional comment) for one metric on one data set.
///
/// The score is not range-checked here; the editor widget limits input to
/// 0–10 but anything stored is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricValue {
    pub value: f64,
    pub comment: String,
}

impl MetricValue {
    pub fn score(value: f64) -> Self {
        Self {
            value,
            comment: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredMetricValue {
    Bare(Option<f64>),
    Extended {
        #[serde(default)]
        value: Option<f64>,
        #[serde(default)]
        comment: Option<String>,
    },
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StoredMetricValue::deserialize(deserializer)? {
            StoredMetricValue::Bare(value) => MetricValue::score(value.unwrap_or(0.0)),
            StoredMetricValue::Extended { value, comment } => MetricValue {
                value: value.unwrap_or(0.0),
                comment: comment.unwrap_or_default(),
            },
        })
    }
}

/// One subject being evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub id: DataSetId,
    pub name: String,
    pub color: ColorAssignment,
    #[serde(default)]
    pub values: BTreeMap<String, MetricValue>,
}

impl DataSet {
    /// Fresh data set with a default entry for each of `metrics`.
    pub fn new(id: DataSetId, color: ColorAssignment, metrics: &[Metric]) -> Self {
        let values = metrics
            .iter()
            .map(|metric| (metric.name.clone(), MetricValue::default()))
            .collect();
        Self {
            id,
            name: DEFAULT_DATA_SET_NAME.to_string(),
            color,
            values,
        }
    }

    /// Score for `metric`, or `0` when the entry is missing.
    pub fn score(&self, metric: &str) -> f64 {
        self.values.get(metric).map(|v| v.value).unwrap_or(0.0)
    }

    pub fn comment(&self, metric: &str) -> &str {
        self.values
            .get(metric)
            .map(|v| v.comment.as_str())
            .unwrap_or("")
    }
}
