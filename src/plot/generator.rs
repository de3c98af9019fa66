//! SVG line chart generation.
//!
//! Hand-written SVG with no plotting backend: a plot area with grid and
//! axes, one polyline per series, optional dashed mean lines, a legend and
//! an annotation box.

use crate::utils::error::PlotError;
use log::info;

pub const BLUE: &str = "rgb(31, 119, 180)";
pub const RED: &str = "rgb(214, 39, 40)";

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;
const MIN_WIDTH: usize = 200;
const MIN_HEIGHT: usize = 150;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub x_label: String,
    pub y_label: String,
    /// Text box drawn in the top-left of the plot area; `\n` splits lines
    pub annotation: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "TCP Throughput".to_string(),
            width: 1000,
            height: 600,
            x_label: "Time (seconds)".to_string(),
            y_label: "Throughput (Mbps)".to_string(),
            annotation: None,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        self.annotation = Some(text.into());
        self
    }
}

/// Horizontal reference line drawn dashed in the series color
#[derive(Debug, Clone)]
pub struct MeanLine {
    pub value: f64,
    pub label: String,
}

/// One line on the chart
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub label: String,
    pub color: String,
    pub points: Vec<(f64, f64)>,
    pub mean: Option<MeanLine>,
}

impl PlotSeries {
    pub fn new(label: impl Into<String>, color: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            points,
            mean: None,
        }
    }

    pub fn with_mean(mut self, value: f64, label: impl Into<String>) -> Self {
        self.mean = Some(MeanLine {
            value,
            label: label.into(),
        });
        self
    }
}

/// Data-space bounds mapped onto the plot area
struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        self.left + (x - self.x_min) / (self.x_max - self.x_min) * self.plot_w
    }

    fn py(&self, y: f64) -> f64 {
        self.top + self.plot_h - (y - self.y_min) / (self.y_max - self.y_min) * self.plot_h
    }
}

/// Generate an SVG line chart
///
/// **Public** - main entry point for chart rendering
///
/// # Errors
/// * `PlotError::EmptySeries` - no series has any points
/// * `PlotError::InvalidDimensions` - canvas too small for axes and legend
pub fn generate_line_chart(series: &[PlotSeries], config: &PlotConfig) -> Result<String, PlotError> {
    if config.width < MIN_WIDTH || config.height < MIN_HEIGHT {
        return Err(PlotError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }

    let drawn: Vec<&PlotSeries> = series.iter().filter(|s| !s.points.is_empty()).collect();
    if drawn.is_empty() {
        return Err(PlotError::EmptySeries);
    }

    let frame = compute_frame(&drawn, config);
    let mut svg = String::new();
    let (width, height) = (config.width, config.height);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    ));
    svg.push_str(&format!(r#"<rect width="{}" height="{}" fill="white"/>"#, width, height));
    svg.push_str(&format!(
        r#"<text x="{}" y="30" font-size="16" text-anchor="middle" font-family="sans-serif">{}</text>"#,
        width / 2,
        escape_xml(&config.title)
    ));

    render_grid(&mut svg, &frame);
    render_axis_labels(&mut svg, &frame, config);

    for s in &drawn {
        render_series(&mut svg, &frame, s);
    }

    render_legend(&mut svg, &frame, &drawn);

    if let Some(text) = &config.annotation {
        render_annotation(&mut svg, &frame, text);
    }

    svg.push_str("</svg>");

    info!("Chart '{}' generated ({} series, {} bytes)", config.title, drawn.len(), svg.len());
    Ok(svg)
}

fn compute_frame(series: &[&PlotSeries], config: &PlotConfig) -> Frame {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    // Rates and delays are non-negative; anchor the y axis at zero
    let mut y_min: f64 = 0.0;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if let Some(mean) = &s.mean {
            y_max = y_max.max(mean.value);
        }
    }

    if x_max <= x_min {
        x_min -= 0.5;
        x_max += 0.5;
    }
    if y_max <= y_min {
        y_max = y_min + 1.0;
    } else {
        y_max += (y_max - y_min) * 0.05;
    }

    Frame {
        x_min,
        x_max,
        y_min,
        y_max,
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        plot_w: config.width as f64 - MARGIN_LEFT - MARGIN_RIGHT,
        plot_h: config.height as f64 - MARGIN_TOP - MARGIN_BOTTOM,
    }
}

fn render_grid(out: &mut String, f: &Frame) {
    let bottom = f.top + f.plot_h;
    let right = f.left + f.plot_w;

    for i in 0..=TICKS {
        let frac = i as f64 / TICKS as f64;

        let x_val = f.x_min + frac * (f.x_max - f.x_min);
        let x = f.px(x_val);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="rgb(220, 220, 220)" stroke-dasharray="4 3"/>"#,
            x, f.top, x, bottom
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle" font-family="sans-serif">{}</text>"#,
            x,
            bottom + 16.0,
            format_tick(x_val)
        ));

        let y_val = f.y_min + frac * (f.y_max - f.y_min);
        let y = f.py(y_val);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="rgb(220, 220, 220)" stroke-dasharray="4 3"/>"#,
            f.left, y, right, y
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end" font-family="sans-serif">{}</text>"#,
            f.left - 6.0,
            y + 4.0,
            format_tick(y_val)
        ));
    }

    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        f.left, f.top, f.plot_w, f.plot_h
    ));
}

fn render_axis_labels(out: &mut String, f: &Frame, config: &PlotConfig) {
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="13" text-anchor="middle" font-family="sans-serif">{}</text>"#,
        f.left + f.plot_w / 2.0,
        config.height as f64 - 15.0,
        escape_xml(&config.x_label)
    ));

    let cy = f.top + f.plot_h / 2.0;
    out.push_str(&format!(
        r#"<text x="20" y="{:.2}" font-size="13" text-anchor="middle" font-family="sans-serif" transform="rotate(-90 20 {:.2})">{}</text>"#,
        cy,
        cy,
        escape_xml(&config.y_label)
    ));
}

fn render_series(out: &mut String, f: &Frame, series: &PlotSeries) {
    let points: Vec<String> = series
        .points
        .iter()
        .map(|&(x, y)| format!("{:.2},{:.2}", f.px(x), f.py(y)))
        .collect();

    out.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        points.join(" "),
        series.color
    ));

    if let Some(mean) = &series.mean {
        let y = f.py(mean.value);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-dasharray="8 4" stroke-opacity="0.7"/>"#,
            f.left,
            y,
            f.left + f.plot_w,
            y,
            series.color
        ));
    }
}

fn render_legend(out: &mut String, f: &Frame, series: &[&PlotSeries]) {
    let mut entries: Vec<(&str, &str, bool)> = Vec::new();
    for s in series {
        entries.push((s.label.as_str(), s.color.as_str(), false));
        if let Some(mean) = &s.mean {
            entries.push((mean.label.as_str(), s.color.as_str(), true));
        }
    }

    let x = f.left + f.plot_w - 220.0;
    let mut y = f.top + 12.0;

    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="210" height="{}" fill="white" fill-opacity="0.8" stroke="rgb(200, 200, 200)"/>"#,
        x - 6.0,
        f.top + 2.0,
        entries.len() * 18 + 6
    ));

    for (label, color, dashed) in entries {
        let dash = if dashed { r#" stroke-dasharray="6 3""# } else { "" };
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2"{}/>"#,
            x,
            y + 4.0,
            x + 24.0,
            y + 4.0,
            color,
            dash
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" font-family="sans-serif">{}</text>"#,
            x + 30.0,
            y + 8.0,
            escape_xml(label)
        ));
        y += 18.0;
    }
}

fn render_annotation(out: &mut String, f: &Frame, text: &str) {
    let lines: Vec<&str> = text.lines().collect();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let x = f.left + 10.0;
    let y = f.top + 10.0;

    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{}" fill="white" fill-opacity="0.7" stroke="rgb(200, 200, 200)"/>"#,
        x,
        y,
        longest as f64 * 7.0 + 16.0,
        lines.len() * 16 + 10
    ));

    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12" font-family="sans-serif">{}</text>"#,
            x + 8.0,
            y + 18.0 + i as f64 * 16.0,
            escape_xml(line)
        ));
    }
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
