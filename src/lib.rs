//! Floating text viewer: a frameless, always-on-top window that displays
//! text extracted from plain-text, PDF, or Word documents.
//!
//! The window's editable text area doubles as its drag handle, the three
//! controls (import, transparency toggle, close) appear only while the
//! pointer is over the window, and the text background can be switched
//! between fully transparent and semi-opaque gray.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;

pub use error::{Error, Result};
