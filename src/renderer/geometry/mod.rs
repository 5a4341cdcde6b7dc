use crate::renderer::core::math::{Color, Point2i, Vector3};

/// Triángulo de color sólido en coordenadas de píxel.
///
/// El orden de los vértices puede ser horario o antihorario.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2i; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(a: Point2i, b: Point2i, c: Point2i, color: Color) -> Self {
        Self { vertices: [a, b, c], color }
    }

    /// Trunca los vértices flotantes a píxeles.
    pub fn from_points(points: &[Vector3<f32>; 3], color: Color) -> Self {
        Self {
            vertices: points.map(|p| Point2i::from_vector(&p)),
            color,
        }
    }

    /// Mismo triángulo con el sentido de giro invertido (A, C, B).
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(a, c, b, self.color)
    }
}

/// Secuencia ordenada de triángulos: el orden de inserción es el orden de pintado.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleBatch {
    triangles: Vec<Triangle>,
}

impl TriangleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { triangles: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }
}

impl From<Vec<Triangle>> for TriangleBatch {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

impl FromIterator<Triangle> for TriangleBatch {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self { triangles: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a TriangleBatch {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

pub mod scene;
pub use scene::{Scene, SceneGenerator};
