//! Render-local image source with a single fallback step.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Which address a result card image is currently showing.
///
/// Lives only in the render surface; a load failure never touches the
/// underlying result item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// The resolved service address.
    Primary(String),
    /// The local placeholder, after the primary failed or was blank.
    Fallback(String),
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            Self::Primary(url) | Self::Fallback(url) => url,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Switch to the placeholder after a load error.
    ///
    /// Returns `true` only on the first failure; once on the placeholder,
    /// further errors are ignored so a broken placeholder cannot loop.
    pub fn on_load_error(&mut self, placeholder: &str) -> bool {
        match self {
            Self::Primary(_) => {
                *self = Self::Fallback(placeholder.to_owned());
                true
            }
            Self::Fallback(_) => false,
        }
    }
}
