use image::RgbImage;
use image::imageops::{self, FilterType};
use pixels::Pixels;
use pixels::SurfaceTexture;
use tracing::info;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::controllers::ports::display_presenter::DisplayPresenterPort;
use crate::error::Error;
use crate::presenters::raster::figure::Figure;

const WINDOW_TITLE: &str = "Mandelbrot set";
const MAX_WINDOW_SIZE: (u32, u32) = (1600, 1000);

/// Shows a figure in a fixed-size window until it is closed.
///
/// Figures larger than 1600x1000 are scaled down to fit.
#[derive(Debug, Default)]
pub struct PixelsPresenter {}

impl PixelsPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl DisplayPresenterPort for PixelsPresenter {
    fn display(&self, figure: &Figure) -> Result<(), Error> {
        let image = fit_within(figure.image(), MAX_WINDOW_SIZE);
        let (width, height) = image.dimensions();

        let event_loop = EventLoop::new().map_err(display_error)?;
        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(display_error)?;

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(width, height, surface_texture).map_err(display_error)?;
        copy_rgb_into_rgba(&image, pixels.frame_mut());

        info!(width, height, "showing figure");

        let mut failure: Option<String> = None;
        window.request_redraw();

        event_loop
            .run(|event, elwt| {
                let Event::WindowEvent { event, window_id } = event else {
                    return;
                };
                if window_id != window.id() {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            failure = Some(err.to_string());
                            elwt.exit();
                        }
                        window.request_redraw();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = pixels.render() {
                            failure = Some(err.to_string());
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
            })
            .map_err(display_error)?;

        match failure {
            Some(reason) => Err(Error::Display { reason }),
            None => Ok(()),
        }
    }
}

fn display_error(err: impl std::fmt::Display) -> Error {
    Error::Display {
        reason: err.to_string(),
    }
}

/// Scales `image` down, keeping its aspect, until it fits in `max`.
fn fit_within(image: &RgbImage, (max_width, max_height): (u32, u32)) -> RgbImage {
    let (width, height) = image.dimensions();
    let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);

    if scale >= 1.0 {
        return image.clone();
    }

    let fitted_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let fitted_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);

    imageops::resize(image, fitted_width, fitted_height, FilterType::Triangle)
}

fn copy_rgb_into_rgba(image: &RgbImage, frame: &mut [u8]) {
    for (src_pixel, dst_pixel) in image.as_raw().chunks_exact(3).zip(frame.chunks_exact_mut(4)) {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[2];
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_small_figure_keeps_its_size() {
        let image = RgbImage::from_pixel(300, 200, Rgb([1, 2, 3]));

        assert_eq!(fit_within(&image, MAX_WINDOW_SIZE).dimensions(), (300, 200));
    }

    #[test]
    fn test_large_figure_scales_down_with_aspect() {
        // default figure at 300 dpi, cropped
        let image = RgbImage::new(2800, 1960);

        let fitted = fit_within(&image, (1600, 1000));

        assert_eq!(fitted.dimensions(), (1429, 1000));
    }

    #[test]
    fn test_copy_fills_opaque_rgba() {
        let image = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        let mut frame = vec![0u8; 8];

        copy_rgb_into_rgba(&image, &mut frame);

        assert_eq!(frame, vec![10, 20, 30, 255, 10, 20, 30, 255]);
    }
}
