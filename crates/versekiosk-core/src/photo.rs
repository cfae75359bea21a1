//! Photo decode capability.

use core::fmt::Display;

/// Decodes the photo addressed by a poem id into the frame buffer.
///
/// Decode failure is recoverable: the kiosk falls back to a plain dark
/// background and keeps rendering.
pub trait PhotoDecoder {
    type Error: Display;

    fn decode(&mut self, poem_id: &str) -> Result<(), Self::Error>;
}

/// Bring-up decoder with a scriptable failure set.
#[derive(Clone, Debug, Default)]
pub struct MockPhotoDecoder {
    failing: Vec<String>,
    pub decoded: Vec<String>,
}

impl MockPhotoDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `decode` fail for `poem_id` from now on.
    pub fn fail_for(&mut self, poem_id: &str) {
        self.failing.push(poem_id.to_string());
    }
}

impl PhotoDecoder for MockPhotoDecoder {
    type Error = String;

    fn decode(&mut self, poem_id: &str) -> Result<(), Self::Error> {
        if self.failing.iter().any(|id| id == poem_id) {
            return Err(format!("no photo for '{poem_id}'"));
        }
        self.decoded.push(poem_id.to_string());
        Ok(())
    }
}
