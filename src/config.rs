use crate::error::{RenderError, Result};
use crate::renderer::core::math::MAX_COORDINATE;
use crate::renderer::core::rasterizer::RasterStrategy;
use crate::renderer::output::ImageFormat;

pub const IMAGE_WIDTH: usize = 320;
pub const IMAGE_HEIGHT: usize = 240;
pub const FRAMES: usize = 50;
pub const TRIANGLE_COUNT: usize = 100;
pub const TRIANGLE_SIZE: f32 = 0.5;
pub const TRIANGLE_SPEED: f32 = 5.0;
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Parámetros de arranque de la animación. No cambian durante la ejecución.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    pub triangle_count: usize,
    /// Tamaño de cada triángulo relativo al lienzo, en (0, 1].
    pub triangle_size: f32,
    /// Velocidad máxima por componente, en píxeles por fotograma.
    pub triangle_speed: f32,
    pub strategy: RasterStrategy,
    pub seed: u64,
    pub format: ImageFormat,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            frames: FRAMES,
            triangle_count: TRIANGLE_COUNT,
            triangle_size: TRIANGLE_SIZE,
            triangle_speed: TRIANGLE_SPEED,
            strategy: RasterStrategy::default(),
            seed: DEFAULT_SEED,
            format: ImageFormat::Bmp,
        }
    }
}

impl AnimationConfig {
    pub fn with_canvas(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_triangle_count(mut self, count: usize) -> Self {
        self.triangle_count = count;
        self
    }

    pub fn with_triangle_size(mut self, size: f32) -> Self {
        self.triangle_size = size;
        self
    }

    pub fn with_triangle_speed(mut self, speed: f32) -> Self {
        self.triangle_speed = speed;
        self
    }

    pub fn with_strategy(mut self, strategy: RasterStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "lienzo vacío: {}x{}",
                self.width, self.height
            )));
        }
        let max = MAX_COORDINATE as usize;
        if self.width > max || self.height > max {
            return Err(RenderError::CanvasTooLarge {
                width: self.width,
                height: self.height,
                max,
            });
        }
        if self.frames == 0 {
            return Err(RenderError::InvalidConfig("se necesita al menos un fotograma".into()));
        }
        if !(self.triangle_size > 0.0 && self.triangle_size <= 1.0) {
            return Err(RenderError::InvalidConfig(format!(
                "tamaño de triángulo fuera de (0, 1]: {}",
                self.triangle_size
            )));
        }
        if !self.triangle_speed.is_finite() || self.triangle_speed < 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "velocidad inválida: {}",
                self.triangle_speed
            )));
        }
        Ok(())
    }
}
