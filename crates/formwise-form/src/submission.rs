//! # Form Submissions
//!
//! A [`Submission`] is the raw, multi-valued input of one form post: an
//! ordered list of `(key, value)` entries where a key may repeat. Values
//! are text or opaque files. Parsing multipart bodies is left to the host
//! runtime; URL-encoded bodies can be read and written directly.

use formwise_core::{FileHandle, Value};
use url::form_urlencoded;

use crate::error::SubmissionError;

/// One submitted value.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// A text input.
    Text(String),
    /// A file input.
    File(FileHandle),
}

impl FormValue {
    /// The text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            FormValue::File(_) => None,
        }
    }

    /// The file handle, if this is a file value.
    pub fn as_file(&self) -> Option<&FileHandle> {
        match self {
            FormValue::File(f) => Some(f),
            FormValue::Text(_) => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<FileHandle> for FormValue {
    fn from(f: FileHandle) -> Self {
        FormValue::File(f)
    }
}

impl From<FormValue> for Value {
    fn from(v: FormValue) -> Self {
        match v {
            FormValue::Text(s) => Value::Text(s),
            FormValue::File(f) => Value::File(f),
        }
    }
}

/// Ordered multi-map of submitted entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    entries: Vec<(String, FormValue)>,
}

impl Submission {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Existing entries under `key` are kept.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<FormValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Every value submitted under `key`, in submission order.
    pub fn get_all(&self, key: &str) -> Vec<&FormValue> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Returns true if at least one entry uses `key`.
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// All entries in submission order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries (not distinct keys).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), FormValue::Text(v.into_owned())))
            .collect()
    }

    /// Serialize as an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::FileNotUrlEncodable`] if any entry is a file.
    pub fn to_urlencoded(&self) -> Result<String, SubmissionError> {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            match value {
                FormValue::Text(text) => {
                    serializer.append_pair(key, text);
                }
                FormValue::File(_) => {
                    return Err(SubmissionError::FileNotUrlEncodable { key: key.clone() });
                }
            }
        }
        Ok(serializer.finish())
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        Self {
            entries: entries.collect(),
        }
    }
}

impl<K: Into<String>, V: Into<FormValue>> Extend<(K, V)> for Submission {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}
