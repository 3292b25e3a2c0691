use thiserror::Error;

/// Errors produced while building or exporting a theme.
#[derive(Debug, Error)]
pub enum Error {
    /// A color string is not `#rrggbb` / `rrggbb`.
    #[error("invalid color `{0}`: expected a 6-digit hex color like #6750a4")]
    InvalidColorFormat(String),
    /// A palette or color role name did not match any known role.
    #[error("unknown role `{0}`")]
    UnknownRole(String),
    /// A mode name was neither `light` nor `dark`.
    #[error("unknown mode `{0}`: expected `light` or `dark`")]
    UnknownMode(String),
    /// A custom color has a name that is empty once kebab-cased.
    #[error("custom color name `{0}` is empty")]
    EmptyCustomColorName(String),
    /// Two custom colors share a property name once kebab-cased.
    #[error("custom color `{0}` collides with another custom color named `{1}`")]
    DuplicateCustomColor(String, String),
    /// The image could not be decoded.
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),
    /// The image file could not be read.
    #[error("failed to read image file: {0}")]
    ImageRead(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
