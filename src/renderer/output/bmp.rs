//! BMP sin compresión de 32 bits por píxel: B, G, R y un byte de relleno,
//! filas de abajo arriba.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;

use super::to_rgb;
use crate::error::Result;
use crate::renderer::core::framebuffer::Framebuffer;

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const BYTES_PER_PIXEL: u32 = 4;

/// Codifica el framebuffer completo en memoria.
pub fn encode(framebuffer: &Framebuffer) -> Vec<u8> {
    let width = framebuffer.width() as u32;
    let height = framebuffer.height() as u32;
    let data_size = width * height * BYTES_PER_PIXEL;
    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let file_size = data_offset + data_size;

    let mut out = Vec::with_capacity(file_size as usize);

    // Cabecera de archivo
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data_offset.to_le_bytes());

    // Cabecera de información
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planos
    out.extend_from_slice(&32u16.to_le_bytes()); // bits por píxel
    out.extend_from_slice(&0u32.to_le_bytes()); // sin compresión
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 16]); // resolución y paleta

    out.extend_from_slice(&pixel_data(framebuffer));
    out
}

fn pixel_data(framebuffer: &Framebuffer) -> Vec<u8> {
    let row_bytes = framebuffer.width() * BYTES_PER_PIXEL as usize;
    let mut data = vec![0u8; row_bytes * framebuffer.height()];
    if data.is_empty() {
        return data;
    }

    data.par_chunks_mut(row_bytes)
        .zip(framebuffer.pixels().par_chunks(framebuffer.width()).rev())
        .for_each(|(out, row)| {
            for (bytes, color) in out.chunks_exact_mut(4).zip(row) {
                let [r, g, b] = to_rgb(color);
                bytes.copy_from_slice(&[b, g, r, 0]);
            }
        });

    data
}

pub fn write<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> Result<()> {
    writer.write_all(&encode(framebuffer))?;
    writer.flush()?;
    Ok(())
}

pub fn save<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> Result<()> {
    let file = File::create(path)?;
    write(framebuffer, BufWriter::new(file))
}
