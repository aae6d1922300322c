use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrollbarError {
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(
        "Invalid [{section}] positioner bounds: maximum {max} is below minimum {min} (use 0 for no maximum)"
    )]
    InvalidPositionerBounds { section: String, min: u32, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
