// src/logo.rs
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

#[derive(Debug, Clone)]
pub struct LogoError {
    pub path: PathBuf,
    pub kind: LogoErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoErrorKind {
    FileNotFound,
    UnreadableFile,
    EmptyFile,
    NotAnImage,
}

impl LogoErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound => "LOGO_NOT_FOUND",
            Self::UnreadableFile => "LOGO_UNREADABLE",
            Self::EmptyFile => "LOGO_EMPTY",
            Self::NotAnImage => "LOGO_NOT_AN_IMAGE",
        }
    }
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.kind.code(),
            self.path.display(),
            self.message
        )
    }
}

impl std::error::Error for LogoError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Sniff the format from the leading bytes
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// Company logo picked in the file input, held in memory until submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub file_name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl Logo {
    /// Build a logo from raw bytes, accepting only recognised image formats
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, LogoError> {
        let file_name = file_name.into();
        let path = PathBuf::from(&file_name);

        if bytes.is_empty() {
            return Err(LogoError {
                path,
                kind: LogoErrorKind::EmptyFile,
                message: "Logo file is empty".to_string(),
            });
        }

        let format = ImageFormat::detect(&bytes).ok_or_else(|| LogoError {
            path,
            kind: LogoErrorKind::NotAnImage,
            message: "Logo must be an image (PNG, JPEG, GIF or WebP)".to_string(),
        })?;

        Ok(Self {
            file_name,
            format,
            bytes,
        })
    }

    /// Read and check a logo file from disk
    pub async fn from_path(path: &Path) -> Result<Self, LogoError> {
        if !path.exists() {
            error!("Logo file not found: {}", path.display());
            return Err(LogoError {
                path: path.to_path_buf(),
                kind: LogoErrorKind::FileNotFound,
                message: "Logo file does not exist".to_string(),
            });
        }

        let bytes = fs::read(path).await.map_err(|e| LogoError {
            path: path.to_path_buf(),
            kind: LogoErrorKind::UnreadableFile,
            message: format!("Cannot read logo file: {}", e),
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("logo")
            .to_string();

        let logo = Self::from_bytes(file_name, bytes).map_err(|e| LogoError {
            path: path.to_path_buf(),
            ..e
        })?;

        info!(
            "Loaded logo {} ({}, {} bytes)",
            logo.file_name,
            logo.mime_type(),
            logo.bytes.len()
        );
        Ok(logo)
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
        bytes
    }

    #[test]
    fn test_detect_formats() {
        assert_eq!(ImageFormat::detect(&png_bytes()), Some(ImageFormat::Png));
        assert_eq!(
            ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::detect(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(
            ImageFormat::detect(b"RIFF\x00\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::Webp)
        );
        assert_eq!(ImageFormat::detect(b"%PDF-1.7"), None);
    }

    #[test]
    fn test_from_bytes_rejects_empty_and_non_images() {
        let empty = Logo::from_bytes("logo.png", vec![]).unwrap_err();
        assert_eq!(empty.kind, LogoErrorKind::EmptyFile);

        let text = Logo::from_bytes("logo.png", b"hello world".to_vec()).unwrap_err();
        assert_eq!(text.kind, LogoErrorKind::NotAnImage);
        assert_eq!(text.kind.code(), "LOGO_NOT_AN_IMAGE");
    }

    #[tokio::test]
    async fn test_from_path_reads_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&png_bytes()).unwrap();

        let logo = Logo::from_path(file.path()).await.unwrap();
        assert_eq!(logo.mime_type(), "image/png");
        assert_eq!(logo.bytes, png_bytes());
        assert!(logo.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = Logo::from_path(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, LogoErrorKind::FileNotFound);
    }
}
