//! Serialisierungs-Gateway: JSON-Export/-Import des Workspace.

pub mod reader;
pub mod writer;

pub use reader::{parse_cartographer_archive, ImportError};
pub use writer::write_cartographer_archive;
