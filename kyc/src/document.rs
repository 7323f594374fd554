//! Source-agnostic document files.
//!
//! DESIGN
//! ======
//! A document reaches the wizard from a native file picker, a drag-and-drop,
//! or the camera. All three produce the same [`DocumentFile`] so slots and
//! validators never care where the bytes came from. Bytes are shared behind
//! an `Arc` so cloning wizard state for rendering stays cheap.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fmt;
use std::sync::Arc;

use base64::Engine as _;

/// Where a document came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeSource {
    Picker,
    DragDrop,
    Camera,
}

/// A document provided by the user. Contents never leave the client.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentFile {
    name: String,
    mime: String,
    bytes: Arc<[u8]>,
    source: IntakeSource,
}

impl DocumentFile {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>, source: IntakeSource) -> Self {
        Self { name: name.into(), mime: mime.into(), bytes: bytes.into(), source }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> IntakeSource {
        self.source
    }

    /// Lower-cased extension of the file name, without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the document can be previewed as an `<img>`.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// `data:` URL carrying the full file contents.
    #[must_use]
    pub fn data_url(&self) -> String {
        let mime = if self.mime.is_empty() { "application/octet-stream" } else { &self.mime };
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{mime};base64,{encoded}")
    }
}

impl fmt::Debug for DocumentFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .field("source", &self.source)
            .finish()
    }
}

// =============================================================================
// ACCEPT FILTER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum AcceptRule {
    /// `image/*`
    MimeFamily(String),
    /// `application/pdf`
    Mime(String),
    /// `.pdf`
    Extension(String),
}

/// Parsed HTML `accept` attribute, e.g. `image/*,.pdf`.
///
/// An empty filter accepts everything, matching browser behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptFilter {
    raw: String,
    rules: Vec<AcceptRule>,
}

impl AcceptFilter {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let rules = raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                let token = token.to_ascii_lowercase();
                if let Some(ext) = token.strip_prefix('.') {
                    AcceptRule::Extension(ext.to_owned())
                } else if let Some(family) = token.strip_suffix("/*") {
                    AcceptRule::MimeFamily(family.to_owned())
                } else {
                    AcceptRule::Mime(token)
                }
            })
            .collect();
        Self { raw: raw.to_owned(), rules }
    }

    /// Images only.
    #[must_use]
    pub fn images() -> Self {
        Self::parse("image/*")
    }

    /// Images or PDF documents.
    #[must_use]
    pub fn images_and_pdf() -> Self {
        Self::parse("image/*,.pdf")
    }

    /// The attribute string to hand to an `<input type="file">`.
    #[must_use]
    pub fn as_attr(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn accepts(&self, file: &DocumentFile) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        let mime = file.mime().to_ascii_lowercase();
        let ext = file.extension();
        self.rules.iter().any(|rule| match rule {
            AcceptRule::MimeFamily(family) => mime
                .split_once('/')
                .is_some_and(|(head, _)| head == family.as_str()),
            AcceptRule::Mime(exact) => mime == *exact,
            AcceptRule::Extension(wanted) => ext.as_deref() == Some(wanted.as_str()),
        })
    }
}
