//! Document entity - immutable uploaded evidence text.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentId, Timestamp, ValidationError};

/// An uploaded evidence document.
///
/// Immutable once created; the only lifecycle transition is deletion
/// from the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    filename: String,
    content: String,
    uploaded_at: Timestamp,
}

impl Document {
    /// Creates a document from already-decoded text.
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(ValidationError::empty_field("filename"));
        }
        Ok(Self {
            id: DocumentId::new(),
            filename,
            content: content.into(),
            uploaded_at: Timestamp::now(),
        })
    }

    /// Creates a document from raw uploaded bytes.
    ///
    /// Only UTF-8 is accepted; anything else is an input error.
    pub fn from_upload(filename: impl Into<String>, bytes: &[u8]) -> Result<Self, ValidationError> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            ValidationError::invalid_format(
                "document",
                format!("not valid UTF-8 (byte {})", e.valid_up_to()),
            )
        })?;
        Self::new(filename, content)
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn uploaded_at(&self) -> Timestamp {
        self.uploaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_upload_decodes_utf8() {
        let doc = Document::from_upload("policy.txt", "Jelszó policy".as_bytes()).unwrap();
        assert_eq!(doc.filename(), "policy.txt");
        assert_eq!(doc.content(), "Jelszó policy");
    }

    #[test]
    fn from_upload_rejects_invalid_utf8() {
        let err = Document::from_upload("blob.bin", &[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(err.to_string().contains("byte 2"));
    }

    #[test]
    fn new_rejects_blank_filename() {
        assert!(matches!(
            Document::new("  ", "text"),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn each_document_gets_its_own_id() {
        let a = Document::new("a.txt", "x").unwrap();
        let b = Document::new("a.txt", "x").unwrap();
        assert_ne!(a.id(), b.id());
    }
}
