/// State management module
///
/// This module holds all non-visual application state:
/// - Recipe data structures (data.rs)
/// - The read-only recipe catalog (catalog.rs)
/// - The screen stack and its payloads (navigation.rs)
/// - Info modal state and contact links (modal.rs)

pub mod catalog;
pub mod data;
pub mod modal;
pub mod navigation;
