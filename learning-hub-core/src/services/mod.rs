//! Content services

mod content_service;

pub use content_service::ContentService;
