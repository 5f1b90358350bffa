use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("invalid grid dimensions {width}x{height}: both extents must be positive")]
    InvalidDimension { width: u32, height: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
