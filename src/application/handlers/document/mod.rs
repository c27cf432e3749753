//! Document command and query handlers.

mod delete_document;
mod list_documents;
mod upload_document;

pub use delete_document::{DeleteDocumentCommand, DeleteDocumentHandler};
pub use list_documents::{DocumentListing, ListDocumentsHandler};
pub use upload_document::{UploadDocumentCommand, UploadDocumentHandler, UploadDocumentResult};
