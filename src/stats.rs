use crate::series::Series;
use serde::Serialize;

/// Summary shown under the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesStats {
    pub count: usize,
    pub max: f64,
    pub mean: f64,
}

impl SeriesStats {
    pub fn max_label(&self) -> String {
        format!("{:.1}", self.max)
    }

    pub fn mean_label(&self) -> String {
        format!("{:.1}", self.mean)
    }
}

/// Returns `None` for an empty series; the page shows no stats then.
pub fn build_stats(series: &Series) -> Option<SeriesStats> {
    let points = series.points();
    if points.is_empty() {
        return None;
    }

    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for point in points {
        max = max.max(point.value);
        sum += point.value;
    }

    Some(SeriesStats {
        count: points.len(),
        max,
        mean: sum / points.len() as f64,
    })
}
