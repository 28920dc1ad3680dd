//! Frame rendering and display mapping.
//!
//! The tracer only answers per-pixel color queries. This module drives it
//! over a whole screen:
//! - Row-by-row rendering in raster order with a progress callback
//! - Parallel row rendering with rayon
//! - Upscaling the traced screen onto a larger canvas
//! - Clamping unclamped colors to 8-bit display values

use std::path::Path;
use std::time::Instant;

use image::{ImageResult, Rgba, RgbaImage};
use phong_math::Color;
use rayon::prelude::*;

use crate::intersect::RootPolicy;
use crate::tracer::RayTracer;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of traced pixels across
    pub screen_width: u32,
    /// Number of traced pixels down
    pub screen_height: u32,
    /// Output canvas width (each traced pixel covers width/screen_width columns)
    pub width: u32,
    /// Output canvas height
    pub height: u32,
    /// Which quadratic root counts as a hit
    pub root_policy: RootPolicy,
    /// Trace rows in parallel
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 256,
            screen_height: 256,
            width: 512,
            height: 512,
            root_policy: RootPolicy::Nearest,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// Set the traced resolution.
    pub fn with_screen(mut self, screen_width: u32, screen_height: u32) -> Self {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        self
    }

    /// Set the output canvas size.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_root_policy(mut self, root_policy: RootPolicy) -> Self {
        self.root_policy = root_policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA.
///
/// Each channel is clamped to [0, 1], scaled to 255 and floored. NaN maps
/// to 0.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)).floor() as u8;
    let g = (255.0 * clamp_01(color.y)).floor() as u8;
    let b = (255.0 * clamp_01(color.z)).floor() as u8;
    [r, g, b, 255]
}

/// Simple image buffer of unclamped traced colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

/// Number of pixels in a `width` x `height` image, computed without u32
/// overflow.
#[inline]
pub fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_count(width, height)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes at traced resolution.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Map onto a `width` x `height` canvas.
    ///
    /// Each traced pixel becomes a solid block; canvas sizes that are
    /// multiples of the traced size give uniform blocks.
    pub fn to_rgba_image(&self, width: u32, height: u32) -> RgbaImage {
        if self.width == 0 || self.height == 0 {
            return RgbaImage::new(width, height);
        }

        RgbaImage::from_fn(width, height, |cx, cy| {
            let x = (cx as u64 * self.width as u64 / width as u64) as u32;
            let y = (cy as u64 * self.height as u64 / height as u64) as u32;
            Rgba(color_to_rgba(self.get(x, y)))
        })
    }

    /// Write the image as a PNG at canvas size.
    pub fn save_png<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> ImageResult<()> {
        self.to_rgba_image(width, height).save(path)
    }
}

/// Trace one row of pixels into `row`.
fn render_row(tracer: &RayTracer, j: u32, row: &mut [Color]) {
    let camera = tracer.camera();
    for (i, pixel) in row.iter_mut().enumerate() {
        *pixel = tracer.trace_ray(&camera.get_ray(i as u32, j));
    }
}

/// Render the full screen in raster order, one row at a time.
///
/// `on_row` is called after each finished row with the row index and its
/// pixels, so a caller can display progress.
pub fn render(tracer: &RayTracer, mut on_row: Option<&mut dyn FnMut(u32, &[Color])>) -> ImageBuffer {
    let start = Instant::now();
    let mut image = ImageBuffer::new(tracer.screen_width, tracer.screen_height);
    let row_len = tracer.screen_width as usize;

    if row_len > 0 {
        for (j, row) in image.pixels.chunks_mut(row_len).enumerate() {
            let j = j as u32;
            render_row(tracer, j, row);
            log::debug!("Finished row {}/{}", j + 1, tracer.screen_height);

            if let Some(callback) = on_row.as_deref_mut() {
                callback(j, row);
            }
        }
    }

    log::info!(
        "Rendered {}x{} in {:?}",
        image.width,
        image.height,
        start.elapsed()
    );
    image
}

/// Render the full screen with rows traced in parallel.
pub fn render_parallel(tracer: &RayTracer) -> ImageBuffer {
    let start = Instant::now();
    let mut image = ImageBuffer::new(tracer.screen_width, tracer.screen_height);
    let row_len = tracer.screen_width as usize;

    if row_len > 0 {
        image
            .pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(j, row)| render_row(tracer, j as u32, row));
    }

    log::info!(
        "Rendered {}x{} in {:?} ({} threads)",
        image.width,
        image.height,
        start.elapsed(),
        rayon::current_num_threads()
    );
    image
}

/// Render a scene with the given configuration.
///
/// The tracer's screen size and root policy are taken from `config`.
pub fn render_frame(tracer: &mut RayTracer, config: &RenderConfig) -> ImageBuffer {
    tracer.screen_width = config.screen_width;
    tracer.screen_height = config.screen_height;
    tracer.root_policy = config.root_policy;

    log::info!(
        "Rendering {}x{} ({} spheres, {} lights)",
        config.screen_width,
        config.screen_height,
        tracer.scene().sphere_count(),
        tracer.scene().light_count()
    );

    if config.parallel {
        render_parallel(tracer)
    } else {
        render(tracer, None)
    }
}
