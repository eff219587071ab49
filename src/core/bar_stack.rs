use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Data of one series taking part in a bar stack, keyed by stringified time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSeries {
    data: IndexMap<String, f64>,
}

impl StackSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes samples under [`DataPoint::stack_key`]. Later duplicates win.
    pub fn from_points(points: &[DataPoint]) -> Self {
        let mut data = IndexMap::with_capacity(points.len());
        for point in points {
            data.insert(point.stack_key(), point.value);
        }
        Self { data }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.data.insert(name.into(), value);
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.data.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<(String, f64)> for StackSeries {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Sum of the lower stack layers at `key`.
///
/// Only siblings before `stack_index` count; layer 0 is the base. Missing
/// entries and non-numeric values add nothing.
pub fn stack_offset(siblings: &[StackSeries], stack_index: usize, key: &str) -> f64 {
    siblings
        .iter()
        .take(stack_index)
        .filter_map(|sibling| sibling.value(key))
        .filter(|value| value.is_finite())
        .fold(0.0, |offset, value| offset + value)
}

/// Value at the top edge of a bar.
///
/// Without an offset bars never reach below zero: negative bars hang from the
/// zero line. Stacked positive bars sit on the offset, stacked negative bars
/// hang from it.
pub fn reference_value(value: f64, offset: f64) -> f64 {
    if offset != 0.0 && value.is_finite() {
        if value >= 0.0 { value + offset } else { offset }
    } else if value >= 0.0 {
        value
    } else {
        0.0
    }
}
