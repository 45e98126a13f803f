//! Board state and the reducer that applies user actions to it.
//!
//! Every action is total: unknown ids, unknown metrics and malformed numbers
//! are absorbed (no-op or coerced to `0`) rather than reported.
//!
//! INVARIANT: after any sequence of metric actions, each data set holds
//! exactly one entry per registered metric.
//! INVARIANT: `active` names an existing data set whenever the collection is
//! non-empty, and is `None` otherwise.

use super::model::{DataSet, DataSetId, Metric, MetricValue};
use super::palette;

/// Which half of a metric entry an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Score,
    Comment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddMetric(String),
    RemoveMetric(String),
    AddDataSet,
    RemoveDataSet(DataSetId),
    RenameDataSet {
        id: DataSetId,
        name: String,
    },
    /// Raw widget input; scores are parsed, comments stored verbatim.
    SetMetricValue {
        id: DataSetId,
        metric: String,
        input: String,
        field: EntryField,
    },
    SelectDataSet(DataSetId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub metrics: Vec<Metric>,
    pub data_sets: Vec<DataSet>,
    pub active: Option<DataSetId>,
}

/// Apply `action` to `state`, returning the next state.
pub fn reduce(mut state: EditorState, action: Action) -> EditorState {
    match action {
        Action::AddMetric(name) => state.add_metric(name),
        Action::RemoveMetric(name) => state.remove_metric(&name),
        Action::AddDataSet => {
            state.add_data_set();
        }
        Action::RemoveDataSet(id) => state.remove_data_set(id),
        Action::RenameDataSet { id, name } => state.rename_data_set(id, name),
        Action::SetMetricValue {
            id,
            metric,
            input,
            field,
        } => state.set_metric_value(id, &metric, input, field),
        Action::SelectDataSet(id) => state.select(id),
    }
    state.normalize_selection();
    state
}

impl EditorState {
    /// Build a state from persisted collections; selection starts at the first data set.
    pub fn from_parts(metrics: Vec<Metric>, data_sets: Vec<DataSet>) -> Self {
        let mut state = Self {
            metrics,
            data_sets,
            active: None,
        };
        state.normalize_selection();
        state
    }

    pub fn has_metric(&self, name: &str) -> bool {
        self.metrics.iter().any(|metric| metric.name == name)
    }

    pub fn data_set(&self, id: DataSetId) -> Option<&DataSet> {
        self.data_sets.iter().find(|ds| ds.id == id)
    }

    pub fn active_data_set(&self) -> Option<&DataSet> {
        self.active.and_then(|id| self.data_set(id))
    }

    /// `max(id) + 1`, or `1` for an empty collection.
    pub fn next_id(&self) -> DataSetId {
        self.data_sets
            .iter()
            .map(|ds| ds.id)
            .max()
            .map(DataSetId::next)
            .unwrap_or(DataSetId::FIRST)
    }

    fn data_set_mut(&mut self, id: DataSetId) -> Option<&mut DataSet> {
        self.data_sets.iter_mut().find(|ds| ds.id == id)
    }

    fn add_metric(&mut self, name: String) {
        if name.is_empty() || self.has_metric(&name) {
            return;
        }
        for data_set in &mut self.data_sets {
            data_set
                .values
                .insert(name.clone(), MetricValue::default());
        }
        self.metrics.push(Metric { name });
    }

    fn remove_metric(&mut self, name: &str) {
        self.metrics.retain(|metric| metric.name != name);
        for data_set in &mut self.data_sets {
            data_set.values.remove(name);
        }
    }

    fn add_data_set(&mut self) -> DataSetId {
        let id = self.next_id();
        let color = palette::color_for_index(self.data_sets.len());
        self.data_sets.push(DataSet::new(id, color, &self.metrics));
        self.active = Some(id);
        id
    }

    fn remove_data_set(&mut self, id: DataSetId) {
        self.data_sets.retain(|ds| ds.id != id);
    }

    fn rename_data_set(&mut self, id: DataSetId, name: String) {
        if let Some(data_set) = self.data_set_mut(id) {
            data_set.name = name;
        }
    }

    fn set_metric_value(&mut self, id: DataSetId, metric: &str, input: String, field: EntryField) {
        let Some(data_set) = self.data_set_mut(id) else {
            return;
        };
        let entry = data_set.values.entry(metric.to_string()).or_default();
        match field {
            EntryField::Comment => entry.comment = input,
            EntryField::Score => entry.value = parse_score(&input),
        }
    }

    fn select(&mut self, id: DataSetId) {
        if self.data_set(id).is_some() {
            self.active = Some(id);
        }
    }

    fn normalize_selection(&mut self) {
        let still_present = self.active.is_some_and(|id| self.data_set(id).is_some());
        if !still_present {
            self.active = self.data_sets.first().map(|ds| ds.id);
        }
    }
}

/// Parse score input. Anything that is not a finite number becomes `0`.
pub fn parse_score(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
