//! Domain logic for publishing n8n workflow definitions.
//!
//! Loads a locally edited workflow document, projects it onto the
//! writable subset accepted by the n8n update endpoint, and inspects the
//! server's response for a few expected configuration fields.

pub mod document;
pub mod error;
pub mod hints;
pub mod verify;
