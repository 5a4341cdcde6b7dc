use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::renderer::core::edge::{
    get_optimal_edge_backend, is_inside, EdgeBackend, EdgeSetup, ScanBounds, LANES,
};
use crate::renderer::core::framebuffer::Framebuffer;
use crate::renderer::core::math::Color;
use crate::renderer::geometry::Triangle;

/// Orden de barrido / variante del rasterizador.
///
/// Las tres variantes colorean exactamente el mismo conjunto de píxeles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RasterStrategy {
    /// Filas de izquierda a derecha, de arriba abajo.
    RowMajor,
    /// Filas alternas izquierda→derecha / derecha→izquierda.
    Boustrophedon,
    /// Bloques de `LANES` píxeles evaluados a la vez.
    #[default]
    Vectorized,
}

impl RasterStrategy {
    pub const ALL: [RasterStrategy; 3] = [
        RasterStrategy::RowMajor,
        RasterStrategy::Boustrophedon,
        RasterStrategy::Vectorized,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RasterStrategy::RowMajor => "row-major",
            RasterStrategy::Boustrophedon => "boustrophedon",
            RasterStrategy::Vectorized => "vectorized",
        }
    }
}

impl fmt::Display for RasterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RasterStrategy {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row-major" | "rowmajor" | "scalar" => Ok(RasterStrategy::RowMajor),
            "boustrophedon" | "snake" => Ok(RasterStrategy::Boustrophedon),
            "vectorized" | "simd" => Ok(RasterStrategy::Vectorized),
            other => Err(RenderError::InvalidConfig(format!("estrategia desconocida: {}", other))),
        }
    }
}

/// Rasterizador de triángulos de color sólido.
///
/// Convención de relleno: el píxel (x, y) se muestrea en su centro y se barre
/// la caja `[min, max)` de los vértices truncados, recortada al lienzo. El píxel
/// está dentro si las tres aristas son `>= 0` o las tres `<= 0`, de modo que los
/// puntos sobre una arista cuentan como interiores y el sentido de giro da igual.
#[derive(Clone, Copy)]
pub struct Rasterizer {
    strategy: RasterStrategy,
    backend: &'static dyn EdgeBackend,
}

impl fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rasterizer({}, {})", self.strategy, self.backend.name())
    }
}

impl Rasterizer {
    pub fn new(strategy: RasterStrategy) -> Self {
        Self::with_backend(strategy, get_optimal_edge_backend())
    }

    /// Fija el evaluador por lotes usado por la variante vectorizada.
    pub fn with_backend(strategy: RasterStrategy, backend: &'static dyn EdgeBackend) -> Self {
        Self { strategy, backend }
    }

    pub fn strategy(&self) -> RasterStrategy {
        self.strategy
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Pinta los píxeles interiores de `triangle`; los exteriores no se tocan.
    pub fn rasterize(&self, triangle: &Triangle, framebuffer: &mut Framebuffer) {
        let Some(bounds) = ScanBounds::new(&triangle.vertices, framebuffer.width(), framebuffer.height()) else {
            return;
        };
        let setup = EdgeSetup::new(&triangle.vertices, &bounds);

        match self.strategy {
            RasterStrategy::RowMajor => rasterize_row_major(&setup, &bounds, triangle.color, framebuffer),
            RasterStrategy::Boustrophedon => rasterize_boustrophedon(&setup, &bounds, triangle.color, framebuffer),
            RasterStrategy::Vectorized => {
                rasterize_vectorized(self.backend, &setup, &bounds, triangle.color, framebuffer)
            }
        }
    }
}

#[inline]
fn advance(edges: &mut [i32; 3], step: &[i32; 3]) {
    edges[0] += step[0];
    edges[1] += step[1];
    edges[2] += step[2];
}

#[inline]
fn retreat(edges: &mut [i32; 3], step: &[i32; 3]) {
    edges[0] -= step[0];
    edges[1] -= step[1];
    edges[2] -= step[2];
}

fn rasterize_row_major(setup: &EdgeSetup, bounds: &ScanBounds, color: Color, framebuffer: &mut Framebuffer) {
    let mut row = setup.origin;

    for y in bounds.min_y..bounds.max_y {
        let mut edges = row;
        let mut index = framebuffer.index_of(bounds.min_x, y);

        for _ in bounds.min_x..bounds.max_x {
            if is_inside(edges[0], edges[1], edges[2]) {
                framebuffer.set_index(index, color);
            }
            advance(&mut edges, &setup.step_x);
            index += 1;
        }

        advance(&mut row, &setup.step_y);
    }
}

// Recorrido en serpiente: al final de cada fila se baja en la misma columna
fn rasterize_boustrophedon(setup: &EdgeSetup, bounds: &ScanBounds, color: Color, framebuffer: &mut Framebuffer) {
    let width = bounds.width();
    let mut edges = setup.origin;

    for (row, y) in (bounds.min_y..bounds.max_y).enumerate() {
        let left_to_right = row % 2 == 0;

        for step in 0..width {
            let x = if left_to_right { bounds.min_x + step } else { bounds.max_x - 1 - step };

            if is_inside(edges[0], edges[1], edges[2]) {
                framebuffer.set(x, y, color);
            }

            if step + 1 < width {
                if left_to_right {
                    advance(&mut edges, &setup.step_x);
                } else {
                    retreat(&mut edges, &setup.step_x);
                }
            }
        }

        advance(&mut edges, &setup.step_y);
    }
}

fn rasterize_vectorized(
    backend: &dyn EdgeBackend,
    setup: &EdgeSetup,
    bounds: &ScanBounds,
    color: Color,
    framebuffer: &mut Framebuffer,
) {
    let offsets = setup.lane_offsets();
    let chunk_step = setup.step_x.map(|step| step * LANES as i32);
    let mut row = setup.origin;

    for y in bounds.min_y..bounds.max_y {
        let mut edges = row;
        let row_start = framebuffer.index_of(0, y);
        let mut x = bounds.min_x;

        while x < bounds.max_x {
            // Carriles de relleno más allá de max_x quedan fuera de la máscara
            let valid = (bounds.max_x - x).min(LANES);
            let lane_limit = if valid == LANES { u32::MAX } else { (1u32 << valid) - 1 };
            let mut mask = backend.inside_mask(edges, &offsets) & lane_limit;

            while mask != 0 {
                let lane = mask.trailing_zeros() as usize;
                framebuffer.set_index(row_start + x + lane, color);
                mask &= mask - 1;
            }

            advance(&mut edges, &chunk_step);
            x += LANES;
        }

        advance(&mut row, &setup.step_y);
    }
}
