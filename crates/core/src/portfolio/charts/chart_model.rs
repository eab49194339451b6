//! Chart series models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single labeled, colored slice or bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub id: usize,
    pub value: Decimal,
    pub label: String,
    /// Color for visualization (hex code)
    pub color: String,
}

impl ChartPoint {
    pub fn new(id: usize, value: Decimal, label: impl Into<String>, color: &str) -> Self {
        Self {
            id,
            value,
            label: label.into(),
            color: color.to_string(),
        }
    }
}

/// Ordered chart data. Insertion order is render order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point whose id is its position in the series.
    pub fn push(&mut self, value: Decimal, label: impl Into<String>, color: &str) {
        let id = self.points.len();
        self.points.push(ChartPoint::new(id, value, label, color));
    }

    pub fn push_point(&mut self, point: ChartPoint) {
        self.points.push(point);
    }

    /// An empty series means the renderer shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChartPoint> {
        self.points.iter()
    }

    /// First point carrying `label`, if any.
    pub fn get(&self, label: &str) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.label == label)
    }

    pub fn total(&self) -> Decimal {
        self.points.iter().map(|p| p.value).sum()
    }
}

impl<'a> IntoIterator for &'a ChartSeries {
    type Item = &'a ChartPoint;
    type IntoIter = std::slice::Iter<'a, ChartPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
