use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::config::AnimationConfig;
use crate::error::Result;
use crate::renderer::core::framebuffer::Framebuffer;
use crate::renderer::core::pipeline;
use crate::renderer::core::rasterizer::Rasterizer;
use crate::renderer::geometry::{Scene, SceneGenerator, TriangleBatch};
use crate::renderer::output;

/// Bucle de fotogramas: limpiar, rasterizar, exportar y avanzar la física.
pub struct Animation {
    config: AnimationConfig,
    scene: Scene,
    batch: TriangleBatch,
    framebuffer: Framebuffer,
    rasterizer: Rasterizer,
}

impl Animation {
    pub fn new(config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        let scene = SceneGenerator::new(config.seed).generate(&config);
        Self::with_scene(config, scene)
    }

    /// Anima una escena ya construida.
    pub fn with_scene(config: AnimationConfig, scene: Scene) -> Result<Self> {
        config.validate()?;
        let framebuffer = Framebuffer::new(config.width, config.height)?;
        let rasterizer = Rasterizer::new(config.strategy);
        log::debug!(
            "Animación de {} triángulos en {}x{} con {:?}",
            scene.triangle_count(),
            config.width,
            config.height,
            rasterizer
        );

        Ok(Self {
            batch: TriangleBatch::with_capacity(scene.triangle_count()),
            config,
            scene,
            framebuffer,
            rasterizer,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Pinta el estado actual de la escena sobre un lienzo negro.
    pub fn render_frame(&mut self) -> &Framebuffer {
        self.framebuffer.reset();
        self.scene.fill_batch(&mut self.batch);
        pipeline::render_with(&self.rasterizer, &self.batch, &mut self.framebuffer);
        &self.framebuffer
    }

    pub fn advance(&mut self) {
        self.scene.step(self.config.width as f32, self.config.height as f32);
    }

    /// Genera todos los fotogramas en `output_dir` (`0000.bmp`, `0001.bmp`, ...).
    ///
    /// Se detiene entre fotogramas si `stop` se activa. Devuelve los fotogramas escritos.
    pub fn run(&mut self, output_dir: &Path, stop: &AtomicBool) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir)?;
        let mut written = Vec::with_capacity(self.config.frames);

        for frame in 0..self.config.frames {
            if stop.load(Ordering::Relaxed) {
                log::warn!("Animación detenida tras {} fotogramas", frame);
                break;
            }

            let start = Instant::now();
            self.render_frame();
            let elapsed = start.elapsed();
            log::info!("Fotograma {} generado en {} ms", frame, elapsed.as_millis());

            let path = output::save_frame(&self.framebuffer, output_dir, frame, self.config.format)?;
            log::debug!("Fotograma {} guardado en {}", frame, path.display());
            written.push(path);

            self.advance();
        }

        Ok(written)
    }
}
