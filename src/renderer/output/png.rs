use std::path::Path;

use rayon::prelude::*;

use super::to_rgb;
use crate::error::Result;
use crate::renderer::core::framebuffer::Framebuffer;

/// Bytes RGB de 8 bits, filas de arriba abajo.
pub fn rgb_bytes(framebuffer: &Framebuffer) -> Vec<u8> {
    framebuffer.pixels().par_iter().flat_map_iter(to_rgb).collect()
}

/// Guarda el framebuffer como PNG RGB con el crate `image`.
pub fn save<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> Result<()> {
    image::save_buffer_with_format(
        path,
        &rgb_bytes(framebuffer),
        framebuffer.width() as u32,
        framebuffer.height() as u32,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}
