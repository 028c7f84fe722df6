//! JPEG export service implementation
//!
//! Takes the captured grid pixels (an `egui::ColorImage` cropped to the
//! grid rectangle at 2x density) and writes them out as a JPEG file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use egui::ColorImage;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// JPEG quality on the encoder's 0-100 scale.
pub const JPEG_QUALITY: u8 = 80;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("grid capture was empty")]
    EmptyCapture,
}

/// Service for exporting the availability grid as a JPEG snapshot
pub struct JpegExportService;

impl JpegExportService {
    /// Download file name for an export taken on `date`,
    /// e.g. `availability-2026-08-25.jpg`.
    pub fn file_name(date: NaiveDate) -> String {
        format!("availability-{}.jpg", date.format("%Y-%m-%d"))
    }

    /// Default save location: the user's Downloads directory when one
    /// exists, otherwise the working directory.
    pub fn default_save_path(date: NaiveDate) -> PathBuf {
        let name = Self::file_name(date);
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|dl| dl.join(&name)))
            .unwrap_or_else(|| PathBuf::from(name))
    }

    /// Ask the user where to save; `None` means they cancelled.
    pub fn prompt_save_path(date: NaiveDate) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Export availability as JPEG")
            .set_file_name(Self::file_name(date))
            .add_filter("JPEG image", &["jpg", "jpeg"]);
        if let Some(dirs) = directories::UserDirs::new() {
            if let Some(download_dir) = dirs.download_dir() {
                dialog = dialog.set_directory(download_dir);
            }
        }
        dialog.save_file()
    }

    /// Encode the capture as JPEG bytes.
    ///
    /// The capture is opaque (the grid is painted over a solid
    /// background), so alpha is discarded.
    pub fn encode_jpeg(capture: &ColorImage) -> Result<Vec<u8>> {
        if capture.width() == 0 || capture.height() == 0 {
            return Err(ExportError::EmptyCapture.into());
        }

        let mut rgb = Vec::with_capacity(capture.pixels.len() * 3);
        for pixel in &capture.pixels {
            rgb.extend_from_slice(&[pixel.r(), pixel.g(), pixel.b()]);
        }

        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
            .encode(
                &rgb,
                capture.width() as u32,
                capture.height() as u32,
                ExtendedColorType::Rgb8,
            )
            .context("Failed to encode JPEG")?;
        Ok(bytes)
    }

    /// Encode and write the capture to `path`.
    pub fn write_jpeg(capture: &ColorImage, path: &Path) -> Result<()> {
        let bytes = Self::encode_jpeg(capture)?;
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(
            JpegExportService::file_name(date),
            "availability-2026-08-25.jpg"
        );
    }

    #[test]
    fn test_default_save_path_keeps_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let path = JpegExportService::default_save_path(date);
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("availability-2026-08-25.jpg")
        );
    }

    #[test]
    fn test_encode_produces_jpeg_bytes() {
        let capture = ColorImage::new([16, 8], Color32::WHITE);
        let bytes = JpegExportService::encode_jpeg(&capture).unwrap();
        // JPEG start-of-image marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert!(bytes.len() > 2);
    }

    #[test]
    fn test_encode_rejects_empty_capture() {
        let capture = ColorImage::new([0, 0], Color32::WHITE);
        let err = JpegExportService::encode_jpeg(&capture).unwrap_err();
        assert!(err.downcast_ref::<ExportError>().is_some());
    }
}
