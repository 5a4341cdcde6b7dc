use std::sync::OnceLock;

use crate::renderer::core::math::Point2i;

/// Ancho de carril del evaluador por lotes.
pub const LANES: usize = 8;

/// Función de arista: doble del área con signo del triángulo (a, b, p).
///
/// El signo indica el lado de la recta dirigida a→b en el que cae `p`.
#[inline]
pub fn edge_function(a: Point2i, b: Point2i, p: Point2i) -> i32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Prueba de pertenencia independiente del sentido de giro.
///
/// Un valor cero cuenta como `>= 0` y como `<= 0` a la vez.
#[inline]
pub fn is_inside(e0: i32, e1: i32, e2: i32) -> bool {
    (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0)
}

/// Misma prueba que `is_inside` con el truco de bits de signo de los carriles.
///
/// `e0 | e1 | e2` tiene el bit de signo activo si alguna arista es negativa y
/// `-e0 | -e1 | -e2` si alguna es positiva; el píxel queda fuera sólo si
/// ocurren ambas cosas. Requiere valores distintos de `i32::MIN`.
#[inline]
pub fn sign_combined_inside(e0: i32, e1: i32, e2: i32) -> bool {
    let any_negative = e0 | e1 | e2;
    let any_positive = e0.wrapping_neg() | e1.wrapping_neg() | e2.wrapping_neg();
    (any_negative & any_positive) >= 0
}

/// Rectángulo de barrido `[min_x, max_x) x [min_y, max_y)` ya recortado al lienzo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanBounds {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl ScanBounds {
    /// Caja envolvente de los tres vértices recortada a `width x height`.
    ///
    /// Devuelve `None` si el rectángulo resultante es vacío.
    pub fn new(vertices: &[Point2i; 3], width: usize, height: usize) -> Option<Self> {
        let [a, b, c] = vertices;
        let clamp = |v: i32, limit: usize| v.clamp(0, limit as i32) as usize;

        let bounds = Self {
            min_x: clamp(a.x.min(b.x).min(c.x), width),
            min_y: clamp(a.y.min(b.y).min(c.y), height),
            max_x: clamp(a.x.max(b.x).max(c.x), width),
            max_y: clamp(a.y.max(b.y).max(c.y), height),
        };

        if bounds.min_x < bounds.max_x && bounds.min_y < bounds.max_y {
            Some(bounds)
        } else {
            None
        }
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y
    }
}

/// Estado incremental de las tres aristas AB, BC y CA.
///
/// Los valores se muestrean en el centro del píxel (x + ½, y + ½). Para seguir en
/// enteros se evalúa la función de arista con coordenadas duplicadas, así que
/// cada valor es el doble del de la función en el centro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSetup {
    /// Valores en el primer píxel barrido `(min_x, min_y)`.
    pub origin: [i32; 3],
    /// Incremento por paso de un píxel hacia la derecha.
    pub step_x: [i32; 3],
    /// Incremento por paso de una fila hacia abajo.
    pub step_y: [i32; 3],
}

impl EdgeSetup {
    pub fn new(vertices: &[Point2i; 3], bounds: &ScanBounds) -> Self {
        let [a, b, c] = *vertices;
        let edges = [(a, b), (b, c), (c, a)];
        let sample = Point2i::new(bounds.min_x as i32 * 2 + 1, bounds.min_y as i32 * 2 + 1);

        let mut origin = [0; 3];
        let mut step_x = [0; 3];
        let mut step_y = [0; 3];
        for (i, (from, to)) in edges.into_iter().enumerate() {
            // Origen duplicado y misma dirección: (2p + 1 - 2a) x (b - a)
            let start = Point2i::new(from.x * 2, from.y * 2);
            let end = Point2i::new(from.x + to.x, from.y + to.y);
            origin[i] = edge_function(start, end, sample);
            step_x[i] = 2 * (to.y - from.y);
            step_y[i] = -2 * (to.x - from.x);
        }

        Self { origin, step_x, step_y }
    }

    /// Desplazamientos por carril `0·Δx, 1·Δx, …, 7·Δx` de cada arista.
    pub fn lane_offsets(&self) -> LaneOffsets {
        let mut offsets = [[0; LANES]; 3];
        for (edge, lanes) in offsets.iter_mut().enumerate() {
            for (lane, value) in lanes.iter_mut().enumerate() {
                *value = self.step_x[edge] * lane as i32;
            }
        }
        LaneOffsets(offsets)
    }
}

/// Desplazamientos precalculados de cada carril, uno por arista.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(align(32))]
pub struct LaneOffsets(pub [[i32; LANES]; 3]);

/// Evaluador por lotes de funciones de arista sobre `LANES` píxeles consecutivos.
pub trait EdgeBackend: Send + Sync {
    /// Máscara de carriles dentro del triángulo: bit `i` activo si el píxel
    /// `i` del bloque pasa la prueba. `edges` son los valores en el carril 0.
    fn inside_mask(&self, edges: [i32; 3], offsets: &LaneOffsets) -> u32;

    fn name(&self) -> &'static str;
}

// Backends soportados
pub struct CpuEdgeBackend;
pub use crate::renderer::core::edge_simd::SimdEdgeBackend;

fn select_edge_backend() -> Box<dyn EdgeBackend> {
    #[cfg(feature = "simd")]
    if let Some(backend) = SimdEdgeBackend::detect() {
        return Box::new(backend);
    }

    Box::new(CpuEdgeBackend)
}

/// Selecciona una vez el mejor backend disponible y lo comparte.
pub fn get_optimal_edge_backend() -> &'static dyn EdgeBackend {
    static BACKEND: OnceLock<Box<dyn EdgeBackend>> = OnceLock::new();
    let backend = BACKEND.get_or_init(|| {
        let backend = select_edge_backend();
        log::info!("Backend de aristas: {}", backend.name());
        backend
    });
    &**backend
}
