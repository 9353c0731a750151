//! # Opaque File Handles
//!
//! Uploaded files travel through Formwise untouched. The payload is held
//! behind an `Arc`, so handles are cheap to clone and two handles compare
//! equal only when they point at the same upload.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Debug)]
struct FileData {
    name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Shared handle to an uploaded file.
#[derive(Clone)]
pub struct FileHandle(Arc<FileData>);

impl FileHandle {
    /// Wrap an uploaded file.
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self(Arc::new(FileData {
            name: name.into(),
            content_type,
            bytes,
        }))
    }

    /// The client-supplied file name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The client-supplied media type, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.0.content_type.as_deref()
    }

    /// The raw payload.
    pub fn bytes(&self) -> &[u8] {
        &self.0.bytes
    }

    /// Payload size in bytes.
    pub fn size(&self) -> usize {
        self.0.bytes.len()
    }

    /// Returns true if both handles refer to the same upload.
    pub fn ptr_eq(&self, other: &FileHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.0.name)
            .field("content_type", &self.0.content_type)
            .field("size", &self.size())
            .finish()
    }
}

/// Files serialize as metadata only; payloads never leave the process
/// through error displays.
impl Serialize for FileHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("File", 3)?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("content_type", &self.content_type())?;
        s.serialize_field("size", &self.size())?;
        s.end()
    }
}
