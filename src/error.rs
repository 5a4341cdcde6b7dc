use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("error al codificar la imagen: {0}")]
    Image(#[from] image::ImageError),

    #[error("configuración inválida: {0}")]
    InvalidConfig(String),

    #[error("escena inválida: {0}")]
    InvalidScene(String),

    #[error("lienzo de {width}x{height} supera el máximo de {max} píxeles por lado")]
    CanvasTooLarge { width: usize, height: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
