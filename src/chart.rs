use crate::series::{DataPoint, Series};
use crate::ui::escape_html;
use std::fmt::Write;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const PADDING_X: f64 = 48.0;
const PADDING_Y: f64 = 36.0;
const TOP: f64 = 24.0;
const TICKS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    /// Unknown or missing values fall back to the line chart.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("bar") => ChartKind::Bar,
            _ => ChartKind::Line,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

/// Renders the chart card body: a placeholder for an empty series, an SVG plot otherwise.
pub fn render_chart(series: &Series, kind: ChartKind) -> String {
    if series.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let points = series.points();
    let scale = Scale::for_points(points, kind);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{} chart">"#,
        kind.as_str()
    );

    for tick in 0..=TICKS {
        let value = scale.min + scale.range() * tick as f64 / TICKS as f64;
        let y = scale.y(value);
        let _ = write!(
            svg,
            r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" />"#,
            WIDTH - PADDING_X
        );
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            PADDING_X - 10.0,
            y + 4.0,
            format_axis_value(value)
        );
    }

    let _ = write!(
        svg,
        r#"<line class="chart-axis" x1="{PADDING_X}" y1="{:.2}" x2="{:.2}" y2="{:.2}" />"#,
        scale.y(0.0),
        WIDTH - PADDING_X,
        scale.y(0.0)
    );

    match kind {
        ChartKind::Line => render_line(&mut svg, points, &scale),
        ChartKind::Bar => render_bars(&mut svg, points, &scale),
    }

    let label_every = if points.len() > 8 { 2 } else { 1 };
    for (index, point) in points.iter().enumerate() {
        if index % label_every != 0 {
            continue;
        }
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            scale.x(index),
            HEIGHT - PADDING_Y + 18.0,
            escape_html(&point.date)
        );
    }

    svg.push_str("</svg>");
    svg
}

fn render_line(svg: &mut String, points: &[DataPoint], scale: &Scale) {
    let path = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command} {:.2} {:.2}", scale.x(index), scale.y(point.value))
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(svg, r#"<path class="chart-line" d="{path}" />"#);

    for (index, point) in points.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<g class="chart-point"><circle cx="{:.2}" cy="{:.2}" r="4" />{}</g>"#,
            scale.x(index),
            scale.y(point.value),
            tooltip(point)
        );
    }
}

fn render_bars(svg: &mut String, points: &[DataPoint], scale: &Scale) {
    let bar_width = (scale.slot() * 0.6).max(2.0);
    let baseline = scale.y(0.0);
    for (index, point) in points.iter().enumerate() {
        let top = scale.y(point.value);
        let (y, height) = if top < baseline {
            (top, baseline - top)
        } else {
            (baseline, top - baseline)
        };
        let _ = write!(
            svg,
            r#"<g class="chart-bar"><rect x="{:.2}" y="{y:.2}" width="{bar_width:.2}" height="{:.2}" rx="4" />{}</g>"#,
            scale.x(index) - bar_width / 2.0,
            height.max(1.0),
            tooltip(point)
        );
    }
}

fn tooltip(point: &DataPoint) -> String {
    format!(
        "<title>{}\nValue: {}</title>",
        escape_html(&point.date),
        format_value(point.value)
    )
}

/// Integral values print without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

struct Scale {
    min: f64,
    max: f64,
    count: usize,
    kind: ChartKind,
}

impl Scale {
    fn for_points(points: &[DataPoint], kind: ChartKind) -> Self {
        let mut min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min).min(0.0);
        let mut max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max).max(0.0);
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        Self {
            min,
            max,
            count: points.len(),
            kind,
        }
    }

    fn range(&self) -> f64 {
        self.max - self.min
    }

    fn slot(&self) -> f64 {
        (WIDTH - PADDING_X * 2.0) / self.count.max(1) as f64
    }

    fn x(&self, index: usize) -> f64 {
        match self.kind {
            ChartKind::Bar => PADDING_X + self.slot() * (index as f64 + 0.5),
            ChartKind::Line if self.count > 1 => {
                PADDING_X + index as f64 * (WIDTH - PADDING_X * 2.0) / (self.count - 1) as f64
            }
            ChartKind::Line => WIDTH / 2.0,
        }
    }

    fn y(&self, value: f64) -> f64 {
        let scale = (HEIGHT - TOP - PADDING_Y) / self.range();
        HEIGHT - PADDING_Y - (value - self.min) * scale
    }
}

const EMPTY_PLACEHOLDER: &str = r#"<div class="chart-empty">
  <p class="chart-empty-title">No data yet</p>
  <p class="chart-empty-hint">Add your first value to see the magic happen!</p>
</div>"#;
