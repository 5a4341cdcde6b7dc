use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{RenderError, Result};
use crate::renderer::core::framebuffer::Framebuffer;
use crate::renderer::core::math::Color;

pub mod bmp;
pub mod png;

/// Formato de los fotogramas exportados.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    #[default]
    Bmp,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bmp" => Ok(ImageFormat::Bmp),
            "png" => Ok(ImageFormat::Png),
            other => Err(RenderError::InvalidConfig(format!("formato desconocido: {}", other))),
        }
    }
}

/// Canal flotante a byte: `c * 255` truncado, saturando fuera de [0, 1].
#[inline]
pub fn quantize(channel: f32) -> u8 {
    (channel * 255.0) as u8
}

#[inline]
pub fn to_rgb(color: &Color) -> [u8; 3] {
    [quantize(color.r()), quantize(color.g()), quantize(color.b())]
}

/// Nombre del fotograma con cuatro dígitos: `0007.bmp`.
pub fn frame_file_name(frame: usize, format: ImageFormat) -> String {
    format!("{:04}.{}", frame, format.extension())
}

/// Guarda un fotograma en `dir` y devuelve la ruta escrita.
pub fn save_frame(framebuffer: &Framebuffer, dir: &Path, frame: usize, format: ImageFormat) -> Result<PathBuf> {
    let path = dir.join(frame_file_name(frame, format));
    match format {
        ImageFormat::Bmp => bmp::save(framebuffer, &path)?,
        ImageFormat::Png => png::save(framebuffer, &path)?,
    }
    Ok(path)
}
