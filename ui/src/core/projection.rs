//! Chart projection: folds metrics and data sets into radar-chart rows.
//!
//! One row per metric (registry order), one column per data set keyed by its
//! display name. Two data sets sharing a name share a column; the later one
//! wins and the column keeps the position of its first occurrence.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::model::{ColorAssignment, DataSet, Metric};

/// Key carrying the metric label in a serialized row.
pub const LABEL_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartColumn {
    pub series: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub metric: String,
    pub columns: Vec<ChartColumn>,
}

impl ChartRow {
    pub fn value(&self, series: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|column| column.series == series)
            .map(|column| column.value)
    }

    fn insert(&mut self, series: &str, value: f64) {
        match self.columns.iter_mut().find(|column| column.series == series) {
            Some(column) => column.value = value,
            None => self.columns.push(ChartColumn {
                series: series.to_string(),
                value,
            }),
        }
    }
}

/// Flat record `{ "name": <metric>, <series>: <value>, .. }`. A series that
/// is itself called `name` replaces the label, as it would in a plain object.
impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shadowed = self.value(LABEL_KEY);
        let mut map = serializer.serialize_map(None)?;
        match shadowed {
            Some(value) => map.serialize_entry(LABEL_KEY, &value)?,
            None => map.serialize_entry(LABEL_KEY, &self.metric)?,
        }
        for column in self.columns.iter().filter(|c| c.series != LABEL_KEY) {
            map.serialize_entry(&column.series, &column.value)?;
        }
        map.end()
    }
}

/// Drawing descriptor for one data set.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub key: String,
    pub color: ColorAssignment,
}

pub fn project(metrics: &[Metric], data_sets: &[DataSet]) -> Vec<ChartRow> {
    metrics
        .iter()
        .map(|metric| {
            let mut row = ChartRow {
                metric: metric.name.clone(),
                columns: Vec::with_capacity(data_sets.len()),
            };
            for data_set in data_sets {
                row.insert(&data_set.name, data_set.score(&metric.name));
            }
            row
        })
        .collect()
}

/// Series in collection order; duplicates are kept so every data set is drawn.
pub fn series(data_sets: &[DataSet]) -> Vec<ChartSeries> {
    data_sets
        .iter()
        .map(|ds| ChartSeries {
            key: ds.name.clone(),
            color: ds.color.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DataSetId;
    use crate::core::state::{reduce, Action, EditorState, EntryField};
    use serde_json::json;

    fn board(actions: Vec<Action>) -> EditorState {
        actions.into_iter().fold(EditorState::default(), reduce)
    }

    #[test]
    fn single_metric_single_default_data_set() {
        let state = board(vec![Action::AddMetric("Speed".into()), Action::AddDataSet]);
        let rows = project(&state.metrics, &state.data_sets);
        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            json!([{ "name": "Speed", "Member": 0.0 }])
        );
    }

    #[test]
    fn rows_follow_registry_order_and_missing_values_are_zero() {
        let mut state = board(vec![
            Action::AddMetric("Speed".into()),
            Action::AddMetric("Focus".into()),
            Action::AddDataSet,
            Action::RenameDataSet {
                id: DataSetId(1),
                name: "Ann".into(),
            },
            Action::SetMetricValue {
                id: DataSetId(1),
                metric: "Focus".into(),
                input: "8".into(),
                field: EntryField::Score,
            },
        ]);
        state.data_sets[0].values.remove("Speed");

        let rows = project(&state.metrics, &state.data_sets);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].metric, "Speed");
        assert_eq!(rows[0].value("Ann"), Some(0.0));
        assert_eq!(rows[1].metric, "Focus");
        assert_eq!(rows[1].value("Ann"), Some(8.0));
    }

    #[test]
    fn duplicate_names_collapse_into_one_column() {
        let state = board(vec![
            Action::AddMetric("Speed".into()),
            Action::AddDataSet,
            Action::AddDataSet,
            Action::AddDataSet,
            Action::RenameDataSet {
                id: DataSetId(3),
                name: "Solo".into(),
            },
            Action::SetMetricValue {
                id: DataSetId(1),
                metric: "Speed".into(),
                input: "2".into(),
                field: EntryField::Score,
            },
            Action::SetMetricValue {
                id: DataSetId(2),
                metric: "Speed".into(),
                input: "9".into(),
                field: EntryField::Score,
            },
        ]);
        let rows = project(&state.metrics, &state.data_sets);
        let keys: Vec<_> = rows[0].columns.iter().map(|c| c.series.as_str()).collect();
        assert_eq!(keys, ["Member", "Solo"]);
        assert_eq!(rows[0].value("Member"), Some(9.0));
        assert_eq!(series(&state.data_sets).len(), 3);
    }

    #[test]
    fn series_named_like_the_label_key_shadows_it() {
        let state = board(vec![
            Action::AddMetric("Speed".into()),
            Action::AddDataSet,
            Action::RenameDataSet {
                id: DataSetId(1),
                name: LABEL_KEY.into(),
            },
        ]);
        let rows = project(&state.metrics, &state.data_sets);
        assert_eq!(serde_json::to_value(&rows).unwrap(), json!([{ "name": 0.0 }]));
    }

    #[test]
    fn no_metrics_means_no_rows() {
        let state = board(vec![Action::AddDataSet]);
        assert!(project(&state.metrics, &state.data_sets).is_empty());
    }
}
