use crate::renderer::core::framebuffer::Framebuffer;
use crate::renderer::core::rasterizer::{RasterStrategy, Rasterizer};
use crate::renderer::geometry::TriangleBatch;

/// Pinta el lote en orden: cada triángulo sobrescribe a los anteriores.
pub fn render(batch: &TriangleBatch, framebuffer: &mut Framebuffer, strategy: RasterStrategy) {
    render_with(&Rasterizer::new(strategy), batch, framebuffer);
}

/// Igual que `render` con un rasterizador ya configurado.
pub fn render_with(rasterizer: &Rasterizer, batch: &TriangleBatch, framebuffer: &mut Framebuffer) {
    log::trace!(
        "Rasterizando {} triángulos en {}x{} ({:?})",
        batch.len(),
        framebuffer.width(),
        framebuffer.height(),
        rasterizer
    );

    for triangle in batch {
        rasterizer.rasterize(triangle, framebuffer);
    }
}
