//! Error types for colour extraction and matching.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColourError>;

#[derive(Error, Debug)]
pub enum ColourError {
    /// The pixel buffer is not RGBA.
    #[error("expected an RGBA image buffer, got {channels} channel(s)")]
    Shape { channels: usize },

    /// The byte slice does not match the declared dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}x{channels}")]
    BufferSize {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    /// No pixel cleared the visibility threshold.
    #[error("no visible pixels found in the image")]
    NoVisiblePixels,

    /// A malformed colour reached conversion or matching.
    #[error("invalid colour: {reason}")]
    InvalidColour { reason: String },

    /// Only JPEG and PNG uploads are processed.
    #[error("unsupported image format {0:?}, expected JPEG or PNG")]
    UnsupportedFormat(image::ImageFormat),

    #[error("unable to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("PNG encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("image has no pixels")]
    EmptyImage,

    #[error("classifier produced {len} scores, expected {expected} finite values")]
    ClassifierScores { len: usize, expected: usize },
}

impl ColourError {
    pub(crate) fn invalid_colour(reason: impl Into<String>) -> Self {
        Self::InvalidColour {
            reason: reason.into(),
        }
    }

    /// Malformed colours only arise from bad palette data or a caller bug.
    pub fn is_defect(&self) -> bool {
        matches!(self, ColourError::InvalidColour { .. })
    }

    /// Text suitable for showing to the person who uploaded the image.
    pub fn user_message(&self) -> String {
        match self {
            ColourError::Shape { .. } | ColourError::BufferSize { .. } => {
                "Couldn't process image: unsupported image format.".to_string()
            }
            ColourError::NoVisiblePixels | ColourError::EmptyImage => {
                "Couldn't process image: no garment could be found in the photo.".to_string()
            }
            ColourError::UnsupportedFormat(_) => {
                "Couldn't process image: please upload a JPEG or PNG file.".to_string()
            }
            ColourError::Decode(_) => {
                "Couldn't process image: the file is not a readable image.".to_string()
            }
            _ => format!("Couldn't process image: {self}"),
        }
    }
}
