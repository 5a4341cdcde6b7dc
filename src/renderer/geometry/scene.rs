use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AnimationConfig;
use crate::error::{RenderError, Result};
use crate::renderer::core::math::{Color, Vector3};
use crate::renderer::geometry::{Triangle, TriangleBatch};

/// Estado flotante de la animación: tres vértices y una velocidad por vértice,
/// un color por triángulo.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    points: Vec<Vector3<f32>>,
    velocities: Vec<Vector3<f32>>,
    colors: Vec<Color>,
}

impl Scene {
    pub fn new(points: Vec<Vector3<f32>>, velocities: Vec<Vector3<f32>>, colors: Vec<Color>) -> Result<Self> {
        if points.len() != colors.len() * 3 {
            return Err(RenderError::InvalidScene(format!(
                "{} vértices para {} colores",
                points.len(),
                colors.len()
            )));
        }
        if velocities.len() != points.len() {
            return Err(RenderError::InvalidScene(format!(
                "{} velocidades para {} vértices",
                velocities.len(),
                points.len()
            )));
        }
        Ok(Self { points, velocities, colors })
    }

    pub fn triangle_count(&self) -> usize {
        self.colors.len()
    }

    pub fn points(&self) -> &[Vector3<f32>] {
        &self.points
    }

    pub fn velocities(&self) -> &[Vector3<f32>] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Avanza un fotograma: cada vértice se mueve según su velocidad y rebota
    /// en los bordes `[0, width] x [0, height]` invirtiendo esa componente.
    pub fn step(&mut self, width: f32, height: f32) {
        for (point, velocity) in self.points.iter_mut().zip(self.velocities.iter_mut()) {
            *point += *velocity;

            if point.x > width {
                point.x = width - (point.x - width);
                velocity.x = -velocity.x;
            } else if point.x < 0.0 {
                point.x = point.x.abs();
                velocity.x = -velocity.x;
            }

            if point.y > height {
                point.y = height - (point.y - height);
                velocity.y = -velocity.y;
            } else if point.y < 0.0 {
                point.y = point.y.abs();
                velocity.y = -velocity.y;
            }
        }
    }

    /// Rellena `batch` con los triángulos truncados del fotograma actual.
    pub fn fill_batch(&self, batch: &mut TriangleBatch) {
        batch.clear();
        for (points, color) in self.points.chunks_exact(3).zip(&self.colors) {
            batch.push(Triangle::from_points(&[points[0], points[1], points[2]], *color));
        }
    }

    pub fn to_batch(&self) -> TriangleBatch {
        let mut batch = TriangleBatch::with_capacity(self.triangle_count());
        self.fill_batch(&mut batch);
        batch
    }
}

/// Generador de escenas con semilla explícita.
pub struct SceneGenerator {
    rng: StdRng,
}

impl SceneGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Número uniforme en [0, 1)
    pub fn random_number(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    pub fn random_vector3(&mut self, x: f32, y: f32, z: f32) -> Vector3<f32> {
        Vector3::new(self.random_number() * x, self.random_number() * y, self.random_number() * z)
    }

    fn random_sign(&mut self) -> f32 {
        if self.rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    /// Triángulos aleatorios de tamaño `triangle_size` relativo al lienzo,
    /// repartidos por todo el lienzo, con una velocidad y un color por triángulo.
    pub fn generate(&mut self, config: &AnimationConfig) -> Scene {
        let width = config.width as f32;
        let height = config.height as f32;
        let size = config.triangle_size;
        let speed = config.triangle_speed;
        let count = config.triangle_count;

        let mut points = Vec::with_capacity(count * 3);
        let mut velocities = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            let corners = [
                self.random_vector3(width * size, height * size, 0.0),
                self.random_vector3(width * size, height * size, 0.0),
                self.random_vector3(width * size, height * size, 0.0),
            ];
            let offset = Vector3::new(
                self.random_number() * width * (1.0 - size),
                self.random_number() * height * (1.0 - size),
                0.0,
            );
            points.extend(corners.map(|corner| corner + offset));

            let mut velocity = self.random_vector3(speed, speed, 0.0);
            velocity.x *= self.random_sign();
            velocity.y *= self.random_sign();
            velocities.extend([velocity; 3]);

            colors.push(self.random_vector3(1.0, 1.0, 1.0));
        }

        Scene { points, velocities, colors }
    }
}
