use super::render::{render_rgb, ChartStyle};
use super::{RenderError, Series};
use eframe::egui;
use tracing::{debug, error};

/// Native window showing the chart, redrawn at the window size
struct RttViewer {
    series: Series,
    style: ChartStyle,
    texture: Option<egui::TextureHandle>,
    rendered_size: (u32, u32),
    failure: Option<String>,
}

/// Opens the viewer and blocks until the user closes it.
/// The chart is drawn once before the window opens so that drawing errors
/// are returned to the caller instead of showing an empty window.
pub(crate) fn show(series: Series, style: ChartStyle) -> Result<(), RenderError> {
    let (width, height) = style.pixels();
    render_rgb(&series, &style, (width, height))?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(style.title)
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([400.0, 250.0]),
        ..Default::default()
    };
    debug!("opening the viewer at {}x{}", width, height);
    eframe::run_native(
        style.title,
        options,
        Box::new(move |_cc| Ok(Box::new(RttViewer::new(series, style)))),
    )
    .map_err(|e| RenderError::Viewer(e.to_string()))
}

impl RttViewer {
    fn new(series: Series, style: ChartStyle) -> Self {
        RttViewer {
            series,
            style,
            texture: None,
            rendered_size: (0, 0),
            failure: None,
        }
    }

    fn redraw(&mut self, ctx: &egui::Context, size: (u32, u32)) {
        self.rendered_size = size;
        match render_rgb(&self.series, &self.style, size) {
            Ok(buf) => {
                let image = egui::ColorImage::from_rgb([size.0 as usize, size.1 as usize], &buf);
                match &mut self.texture {
                    Some(t) => t.set(image, egui::TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ctx.load_texture("rtt-chart", image, egui::TextureOptions::LINEAR))
                    }
                }
                self.failure = None;
            }
            Err(e) => {
                error!("could not redraw the chart at {}x{}: {}", size.0, size.1, e);
                self.failure = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for RttViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let ppp = ctx.pixels_per_point();
            let available = ui.available_size();
            let size = (
                (available.x * ppp).round().max(1.) as u32,
                (available.y * ppp).round().max(1.) as u32,
            );
            if size != self.rendered_size {
                self.redraw(ctx, size);
            }
            if let Some(msg) = &self.failure {
                ui.colored_label(egui::Color32::RED, msg);
            } else if let Some(texture) = &self.texture {
                let (w, h) = self.rendered_size;
                ui.image((texture.id(), egui::vec2(w as f32 / ppp, h as f32 / ppp)));
            }
        });
    }
}
