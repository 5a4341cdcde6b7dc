use crate::error::{RenderError, Result};
use crate::renderer::core::math::{Color, MAX_COORDINATE};

/// Rejilla de colores de tamaño fijo, origen arriba a la izquierda, orden por filas.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl Framebuffer {
    /// Crea un framebuffer negro.
    ///
    /// Falla con `CanvasTooLarge` si alguna dimensión supera `MAX_COORDINATE`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let max = MAX_COORDINATE as usize;
        if width > max || height > max {
            return Err(RenderError::CanvasTooLarge { width, height, max });
        }
        Ok(Self {
            width,
            height,
            data: vec![Color::BLACK; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// Vuelve a negro, al inicio de cada fotograma.
    pub fn reset(&mut self) {
        self.clear(Color::BLACK);
    }

    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.data[self.index_of(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index_of(x, y);
        self.data[index] = color;
    }

    /// Escritura por índice plano (`y * width + x`).
    #[inline]
    pub fn set_index(&mut self, index: usize, color: Color) {
        self.data[index] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.data
    }
}
