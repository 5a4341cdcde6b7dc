// Rasterizador de triángulos por software
// Exportación de módulos

pub mod config;
pub mod error;

pub mod renderer {
    pub mod core {
        pub mod edge;
        pub mod edge_cpu;
        pub mod edge_simd;
        pub mod framebuffer;
        pub mod math;
        pub mod pipeline;
        pub mod rasterizer;
    }

    pub mod animation;
    pub mod geometry;
    pub mod output;
}

pub use config::AnimationConfig;
pub use error::{RenderError, Result};
pub use renderer::animation::Animation;
pub use renderer::core::framebuffer::Framebuffer;
pub use renderer::core::math::{Color, Point2i, Vector3};
pub use renderer::core::pipeline::render;
pub use renderer::core::rasterizer::{RasterStrategy, Rasterizer};
pub use renderer::geometry::{Triangle, TriangleBatch};

/// Inicializa la librería y configura el logger
pub fn init() {
    // Puede estar ya inicializado (tests, aplicaciones que lo configuran antes)
    let _ = env_logger::try_init();
    log::info!("Inicializando tribounce v{}", env!("CARGO_PKG_VERSION"));
}
