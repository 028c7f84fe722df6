// JPEG export service

mod service;

pub use service::{ExportError, JpegExportService, JPEG_QUALITY};
