//! n8n REST client library.
//!
//! Thin typed wrapper over the n8n public API (`/api/v1`) covering the
//! workflow update and listing endpoints.

pub mod api;
