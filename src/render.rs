use super::{min_and_max, RenderError, Series};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed look of the RTT chart.
/// The figure is 10 x 5 units, each unit `px_per_unit` pixels wide.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub figsize: (u32, u32),
    pub px_per_unit: u32,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub line_color: RGBColor,
    pub line_width: u32,
    pub marker_size: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub title_font: u32,
    pub label_font: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            figsize: (10, 5),
            px_per_unit: 100,
            title: "RTT vs Time",
            x_desc: "Time (s)",
            y_desc: "RTT (ms)",
            line_color: RGBColor(31, 119, 180),
            line_width: 1,
            marker_size: 2,
            margin: 15,
            x_label_area: 45,
            y_label_area: 70,
            title_font: 22,
            label_font: 15,
        }
    }
}

impl ChartStyle {
    /// size of the whole figure in pixels
    pub fn pixels(&self) -> (u32, u32) {
        (
            self.figsize.0 * self.px_per_unit,
            self.figsize.1 * self.px_per_unit,
        )
    }
}

/// Destination of the rendered chart
pub trait ChartSink {
    fn render(&self, series: &Series, style: &ChartStyle) -> Result<(), RenderError>;
}

/// Pick the sink from the optional output path:
/// no path opens the viewer, a path writes a file.
pub fn sink_for(output: Option<PathBuf>) -> Result<Box<dyn ChartSink>, RenderError> {
    match output {
        Some(p) => Ok(Box::new(FileSink::new(p)?)),
        None => Ok(Box::new(ViewerSink)),
    }
}

/// Shows the chart in a native window and blocks until it is closed
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerSink;

impl ChartSink for ViewerSink {
    fn render(&self, series: &Series, style: &ChartStyle) -> Result<(), RenderError> {
        super::viewer::show(series.clone(), style.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Svg,
    Png,
}

/// Writes the chart to an svg or png file, chosen by extension
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: FileFormat,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Result<FileSink, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let format = match ext.as_deref() {
            Some("svg") => FileFormat::Svg,
            Some("png") => FileFormat::Png,
            _ => return Err(RenderError::UnsupportedFormat(path.display().to_string())),
        };
        Ok(FileSink { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }
}

impl ChartSink for FileSink {
    fn render(&self, series: &Series, style: &ChartStyle) -> Result<(), RenderError> {
        finite_points(series)?;
        let size = style.pixels();
        match self.format {
            FileFormat::Svg => {
                let root = SVGBackend::new(&self.path, size).into_drawing_area();
                draw_chart(&root, series, style)?;
            }
            FileFormat::Png => {
                let root = BitMapBackend::new(&self.path, size).into_drawing_area();
                draw_chart(&root, series, style)?;
            }
        }
        info!("chart written to {}", self.path.display());
        Ok(())
    }
}

/// draws the chart into an RGB buffer of `size` pixels
pub fn render_rgb(
    series: &Series,
    style: &ChartStyle,
    size: (u32, u32),
) -> Result<Vec<u8>, RenderError> {
    let mut buf = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, size).into_drawing_area();
        draw_chart(&root, series, style)?;
    }
    Ok(buf)
}

/// plots the RTT time series as a line with circle markers on any backend
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &Series,
    style: &ChartStyle,
) -> Result<(), RenderError> {
    let finite = finite_points(series)?;
    let (xmin, xmax) = axis_range(finite.iter().map(|p| p.0))?;
    let (ymin, ymax) = axis_range(finite.iter().map(|p| p.1))?;

    root.fill(&WHITE).map_err(backend)?;
    let mut chart = ChartBuilder::on(root)
        .caption(style.title, ("sans-serif", style.title_font))
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)
        .map_err(backend)?;
    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05).stroke_width(1))
        .bold_line_style(BLACK.mix(0.2).stroke_width(1))
        .label_style(("sans-serif", style.label_font))
        .x_desc(style.x_desc)
        .y_desc(style.y_desc)
        .draw()
        .map_err(backend)?;

    // non finite samples break the line
    let points: Vec<(f64, f64)> = series.iter().collect();
    for chunk in points.split(|p| !is_finite(p)) {
        if chunk.len() < 2 {
            continue;
        }
        let line = LineSeries::new(
            chunk.iter().copied(),
            style.line_color.stroke_width(style.line_width),
        );
        chart.draw_series(line).map_err(backend)?;
    }
    let markers = finite
        .iter()
        .map(|&p| Circle::new(p, style.marker_size, style.line_color.filled()));
    chart.draw_series(markers).map_err(backend)?;

    root.present().map_err(backend)?;
    Ok(())
}

fn is_finite(p: &(f64, f64)) -> bool {
    p.0.is_finite() && p.1.is_finite()
}

/// the plottable samples, EmptySeries when there is none
fn finite_points(series: &Series) -> Result<Vec<(f64, f64)>, RenderError> {
    let finite: Vec<(f64, f64)> = series.iter().filter(is_finite).collect();
    if finite.is_empty() {
        return Err(RenderError::EmptySeries);
    }
    Ok(finite)
}

/// data bounds padded by 5% on each side.
/// Equal values are padded by 1, or by 5% of their magnitude when larger.
/// Bounds whose span overflows f64 cannot be drawn and give a Range error.
fn axis_range<I: Iterator<Item = f64>>(values: I) -> Result<(f64, f64), RenderError> {
    let values: Vec<f64> = values.collect();
    let (min, max) = min_and_max(&values[..]).unwrap_or((0., 0.));
    let span = max - min;
    let margin = if span == 0. {
        (min.abs() / 20.).max(1.)
    } else {
        span / 20.
    };
    let (lo, hi) = (min - margin, max + margin);
    if (hi - lo).is_finite() && hi > lo {
        return Ok((lo, hi));
    }
    if span.is_finite() && span > 0. {
        return Ok((min, max));
    }
    Err(RenderError::Range { min, max })
}

fn backend<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Backend(e.to_string())
}
