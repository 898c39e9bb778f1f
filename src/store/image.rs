use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Opaque image attachment; the bytes are never decoded here
#[derive(Clone, PartialEq, Eq)]
pub struct CardImage {
    bytes: Arc<[u8]>,
}

impl CardImage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
        }
    }

    /// Read the raw bytes of a selected image file
    pub fn from_path(path: &Path) -> io::Result<Self> {
        fs::read(path).map(Self::new)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CardImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardImage({} bytes)", self.bytes.len())
    }
}
