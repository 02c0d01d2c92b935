//! LexView Server Library
//!
//! Backend for a self-hosted PDF viewer: file upload and serving, plus a
//! question relay that pipes free text through an external answering
//! script. The `session` module is the client-side document model
//! (load state machine, zoom, info panel), kept here so embedding
//! front-ends and the route tests share one implementation.
//!
//! # Modules
//!
//! - `storage`: disk-backed upload store with UUID-keyed files
//! - `relay`: the `Answerer` capability and its script-spawning impl
//! - `routes`: HTTP handlers (upload, files, question, health)
//! - `session`: client-side document session, zoom, and info panel

pub mod app;
pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
