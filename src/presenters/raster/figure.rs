use std::time::Instant;

use image::RgbImage;
use tracing::{debug, info};

use crate::core::actions::generate_pixel_buffer::normalize::Normalize;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_by_name;
use crate::core::util::nice_ticks::{integer_ticks, nice_ticks};
use crate::error::InvalidParameter;
use crate::presenters::raster::canvas::{Canvas, Rect};
use crate::presenters::raster::heatmap::render_heatmap;

pub const DEFAULT_DPI: u32 = 300;
/// 600 dpi already asks for a 6000x4200 canvas at the default figure size.
pub const MAX_DPI: u32 = 600;
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (10.0, 7.0);
pub const DEFAULT_COLOUR_MAP: &str = "magma";

pub const X_LABEL: &str = "Re";
pub const Y_LABEL: &str = "Im";
pub const COLOUR_BAR_LABEL: &str = "Escape iteration";

const POINTS_PER_INCH: f64 = 72.0;

// subplot box as fractions of the canvas
const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;

const COLOUR_BAR_FRACTION: f64 = 0.15;
const COLOUR_BAR_PAD: f64 = 0.05;
const COLOUR_BAR_ASPECT: f64 = 20.0;

const AXIS_MAX_TICKS: usize = 7;
const COLOUR_BAR_MAX_TICKS: usize = 6;

// sizes in points
const FRAME_WIDTH: f64 = 0.8;
const TICK_LENGTH: f64 = 3.5;
const TICK_PAD: f64 = 3.5;
const LABEL_PAD: f64 = 4.0;
const TITLE_PAD: f64 = 6.0;
const LABEL_FONT: f64 = 10.0;
const TITLE_FONT: f64 = 12.0;

const TIGHT_PAD_INCHES: f64 = 0.1;

const BACKGROUND: Colour = Colour::WHITE;
const INK: Colour = Colour::BLACK;

/// How a field is turned into a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    pub colour_map: String,
    pub extent: ComplexRect,
    pub title: Option<String>,
    pub dpi: u32,
    /// Width and height in inches.
    pub figure_size: (f64, f64),
}

impl RasterOptions {
    #[must_use]
    pub fn new(extent: ComplexRect) -> Self {
        Self {
            colour_map: DEFAULT_COLOUR_MAP.to_string(),
            extent,
            title: None,
            dpi: DEFAULT_DPI,
            figure_size: DEFAULT_FIGURE_SIZE,
        }
    }

    #[must_use]
    pub fn with_colour_map(mut self, name: impl Into<String>) -> Self {
        self.colour_map = name.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}

/// A finished, tightly cropped plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    image: RgbImage,
    dpi: u32,
}

impl Figure {
    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[must_use]
    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

/// Converts point sizes to whole pixels at a given dpi.
#[derive(Debug, Copy, Clone)]
struct Metrics {
    dpi: f64,
}

impl Metrics {
    fn px(&self, points: f64) -> i64 {
        (points * self.dpi / POINTS_PER_INCH).round().max(1.0) as i64
    }

    fn font_scale(&self, points: f64) -> i64 {
        (points * self.dpi / POINTS_PER_INCH / 8.0).round().max(1.0) as i64
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Layout {
    plot: Rect,
    colour_bar: Rect,
}

/// Places the plot with equal axis scaling inside the subplot box, leaving room
/// on the right for the colour bar.
fn layout(canvas_width: f64, canvas_height: f64, extent: ComplexRect) -> Layout {
    let axes_x = SUBPLOT_LEFT * canvas_width;
    let axes_y = (1.0 - SUBPLOT_TOP) * canvas_height;
    let axes_width = (SUBPLOT_RIGHT - SUBPLOT_LEFT) * canvas_width;
    let axes_height = (SUBPLOT_TOP - SUBPLOT_BOTTOM) * canvas_height;

    let available_width = axes_width * (1.0 - COLOUR_BAR_FRACTION - COLOUR_BAR_PAD);
    let aspect = extent.width() / extent.height();

    let (plot_width, plot_height) = if available_width / axes_height > aspect {
        (axes_height * aspect, axes_height)
    } else {
        (available_width, available_width / aspect)
    };

    let plot = Rect {
        x: (axes_x + (available_width - plot_width) / 2.0).round() as i64,
        y: (axes_y + (axes_height - plot_height) / 2.0).round() as i64,
        width: (plot_width.round() as i64).max(1),
        height: (plot_height.round() as i64).max(1),
    };

    let colour_bar = Rect {
        x: plot.right() + (COLOUR_BAR_PAD * axes_width).round() as i64,
        y: plot.y,
        width: ((plot.height as f64 / COLOUR_BAR_ASPECT).round() as i64).max(1),
        height: plot.height,
    };

    Layout { plot, colour_bar }
}

/// Renders `field` as a heat map with axes, colour bar and optional title.
///
/// The colour map name and dpi are checked before anything is drawn. Colour
/// limits span the field's own minimum and maximum.
pub fn rasterize(field: &EscapeField, options: &RasterOptions) -> Result<Figure, InvalidParameter> {
    check_dpi(options.dpi)?;
    let colour_map = colour_map_by_name(&options.colour_map)?;

    let dpi = options.dpi as f64;
    let (inches_wide, inches_high) = options.figure_size;
    let canvas_size = Resolution::new(
        (inches_wide * dpi).round() as usize,
        (inches_high * dpi).round() as usize,
    )?;
    let canvas_width = u32::try_from(canvas_size.width()).map_err(|_| too_large(canvas_size))?;
    let canvas_height = u32::try_from(canvas_size.height()).map_err(|_| too_large(canvas_size))?;

    let layout = layout(canvas_width as f64, canvas_height as f64, options.extent);
    let plot_size = Resolution::new(layout.plot.width as usize, layout.plot.height as usize)?;
    let norm = Normalize::from_field(field);
    let metrics = Metrics { dpi };

    debug!(
        canvas_width,
        canvas_height,
        plot_width = plot_size.width(),
        plot_height = plot_size.height(),
        colour_map = colour_map.display_name(),
        "laying out figure"
    );

    let start = Instant::now();
    let mut canvas = Canvas::new(canvas_width, canvas_height, BACKGROUND);

    let heatmap = render_heatmap(field, &colour_map, norm, plot_size)?;
    canvas.draw_image(&heatmap, layout.plot.x, layout.plot.y);
    canvas.frame_rect(layout.plot, metrics.px(FRAME_WIDTH), INK);

    draw_x_axis(&mut canvas, layout.plot, options.extent, metrics);
    draw_y_axis(&mut canvas, layout.plot, options.extent, metrics);
    draw_colour_bar(&mut canvas, layout.colour_bar, &colour_map, norm, metrics);
    if let Some(title) = &options.title {
        draw_title(&mut canvas, layout.plot, title, metrics);
    }

    let padding = (TIGHT_PAD_INCHES * dpi).round() as i64;
    let image = canvas.into_cropped(BACKGROUND, padding);

    info!(
        width = image.width(),
        height = image.height(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendered figure"
    );

    Ok(Figure {
        image,
        dpi: options.dpi,
    })
}

/// Accepts `1..=MAX_DPI`.
pub fn check_dpi(dpi: u32) -> Result<(), InvalidParameter> {
    match dpi {
        0 => Err(InvalidParameter::ZeroDpi),
        dpi if dpi > MAX_DPI => Err(InvalidParameter::DpiTooLarge { dpi, max: MAX_DPI }),
        _ => Ok(()),
    }
}

fn too_large(size: Resolution) -> InvalidParameter {
    InvalidParameter::InvalidResolution {
        width: size.width(),
        height: size.height(),
    }
}

fn draw_x_axis(canvas: &mut Canvas, plot: Rect, extent: ComplexRect, metrics: Metrics) {
    let frame = metrics.px(FRAME_WIDTH);
    let tick_length = metrics.px(TICK_LENGTH);
    let scale = metrics.font_scale(LABEL_FONT);
    let text_height = Canvas::text_height(scale);

    let tick_top = plot.bottom() + frame;
    let label_top = tick_top + tick_length + metrics.px(TICK_PAD);

    let ticks = nice_ticks(extent.xmin(), extent.xmax(), AXIS_MAX_TICKS);
    for (value, label) in ticks.values.iter().zip(ticks.labels()) {
        let x = plot.x + ((value - extent.xmin()) / extent.width() * plot.width as f64).round() as i64;

        canvas.fill_rect(
            Rect {
                x: x - frame / 2,
                y: tick_top,
                width: frame,
                height: tick_length,
            },
            INK,
        );
        canvas.draw_text(&label, x - Canvas::text_width(&label, scale) / 2, label_top, scale, INK);
    }

    let axis_label_top = label_top + text_height + metrics.px(LABEL_PAD);
    let centre = plot.x + plot.width / 2;
    canvas.draw_text(
        X_LABEL,
        centre - Canvas::text_width(X_LABEL, scale) / 2,
        axis_label_top,
        scale,
        INK,
    );
}

fn draw_y_axis(canvas: &mut Canvas, plot: Rect, extent: ComplexRect, metrics: Metrics) {
    let frame = metrics.px(FRAME_WIDTH);
    let tick_length = metrics.px(TICK_LENGTH);
    let scale = metrics.font_scale(LABEL_FONT);
    let text_height = Canvas::text_height(scale);

    let tick_left = plot.x - frame - tick_length;
    let label_right = tick_left - metrics.px(TICK_PAD);
    let mut widest = 0;

    let ticks = nice_ticks(extent.ymin(), extent.ymax(), AXIS_MAX_TICKS);
    for (value, label) in ticks.values.iter().zip(ticks.labels()) {
        let y = plot.bottom() - ((value - extent.ymin()) / extent.height() * plot.height as f64).round() as i64;
        let label_width = Canvas::text_width(&label, scale);
        widest = widest.max(label_width);

        canvas.fill_rect(
            Rect {
                x: tick_left,
                y: y - frame / 2,
                width: tick_length,
                height: frame,
            },
            INK,
        );
        canvas.draw_text(&label, label_right - label_width, y - text_height / 2, scale, INK);
    }

    let axis_label_left = label_right - widest - metrics.px(LABEL_PAD) - text_height;
    let centre = plot.y + plot.height / 2;
    canvas.draw_text_vertical(
        Y_LABEL,
        axis_label_left,
        centre + Canvas::text_width(Y_LABEL, scale) / 2,
        scale,
        INK,
    );
}

fn draw_colour_bar<CMap: ColourMap + ?Sized>(
    canvas: &mut Canvas,
    bar: Rect,
    colour_map: &CMap,
    norm: Normalize,
    metrics: Metrics,
) {
    let frame = metrics.px(FRAME_WIDTH);
    let tick_length = metrics.px(TICK_LENGTH);
    let scale = metrics.font_scale(LABEL_FONT);
    let text_height = Canvas::text_height(scale);

    for row in 0..bar.height {
        let t = 1.0 - (row as f64 + 0.5) / bar.height as f64;
        let stripe = Rect {
            x: bar.x,
            y: bar.y + row,
            width: bar.width,
            height: 1,
        };
        canvas.fill_rect(stripe, colour_map.map(t));
    }
    canvas.frame_rect(bar, frame, INK);

    let span = norm.vmax() - norm.vmin();
    let tick_left = bar.right() + frame;
    let label_left = tick_left + tick_length + metrics.px(TICK_PAD);
    let mut widest = 0;

    let ticks = integer_ticks(norm.vmin(), norm.vmax(), COLOUR_BAR_MAX_TICKS);
    for (value, label) in ticks.values.iter().zip(ticks.labels()) {
        let y = if span > 0.0 {
            bar.bottom() - ((value - norm.vmin()) / span * bar.height as f64).round() as i64
        } else {
            bar.y + bar.height / 2
        };
        widest = widest.max(Canvas::text_width(&label, scale));

        canvas.fill_rect(
            Rect {
                x: tick_left,
                y: y - frame / 2,
                width: tick_length,
                height: frame,
            },
            INK,
        );
        canvas.draw_text(&label, label_left, y - text_height / 2, scale, INK);
    }

    let axis_label_left = label_left + widest + metrics.px(LABEL_PAD);
    let centre = bar.y + bar.height / 2;
    canvas.draw_text_vertical(
        COLOUR_BAR_LABEL,
        axis_label_left,
        centre + Canvas::text_width(COLOUR_BAR_LABEL, scale) / 2,
        scale,
        INK,
    );
}

fn draw_title(canvas: &mut Canvas, plot: Rect, title: &str, metrics: Metrics) {
    let scale = metrics.font_scale(TITLE_FONT);
    let top = plot.y - metrics.px(FRAME_WIDTH) - metrics.px(TITLE_PAD) - Canvas::text_height(scale);
    let left = plot.x + plot.width / 2 - Canvas::text_width(title, scale) / 2;

    canvas.draw_text(title, left, top, scale, INK);
}
