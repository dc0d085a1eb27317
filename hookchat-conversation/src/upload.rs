//! File attachment intake: size validation, display labels, wire encoding.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hookchat_core::{FileMetadata, PayloadKind};

/// Hard ceiling on attachment size: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Which picker produced the file. Camera captures go out as images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    File,
    Image,
    Camera,
}

impl UploadKind {
    /// Wire payload kind for this picker; Camera coerces to Image.
    pub fn payload_kind(self) -> PayloadKind {
        match self {
            UploadKind::File => PayloadKind::File,
            UploadKind::Image | UploadKind::Camera => PayloadKind::Image,
        }
    }
}

/// A picked file, read into memory by the front end.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Where the file lives on disk, kept on the message for in-session
    /// preview; never sent over the wire.
    pub local_path: PathBuf,
}

impl FileUpload {
    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Display label for the conversation: `📎 name (x.xxMB)`.
    pub(crate) fn label(&self) -> String {
        format!(
            "📎 {} ({:.2}MB)",
            self.file_name,
            self.bytes.len() as f64 / 1024.0 / 1024.0
        )
    }

    /// Wire metadata with the file bytes base64-encoded.
    pub(crate) fn to_metadata(&self) -> FileMetadata {
        FileMetadata {
            file_name: self.file_name.clone(),
            file_type: self.mime_type.clone(),
            file_size: self.byte_size(),
            base64_data: STANDARD.encode(&self.bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(bytes: Vec<u8>) -> FileUpload {
        FileUpload {
            file_name: "report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            bytes,
            local_path: PathBuf::from("/tmp/report.pdf"),
        }
    }

    /// **Test: camera captures coerce to the image payload kind.**
    #[test]
    fn test_camera_coerces_to_image() {
        assert_eq!(UploadKind::Camera.payload_kind(), PayloadKind::Image);
        assert_eq!(UploadKind::Image.payload_kind(), PayloadKind::Image);
        assert_eq!(UploadKind::File.payload_kind(), PayloadKind::File);
    }

    /// **Test: the label shows the name and the size in MB to two decimals.**
    #[test]
    fn test_label_format() {
        let upload = upload(vec![0u8; 1024 * 1024 / 2]);
        assert_eq!(upload.label(), "📎 report.pdf (0.50MB)");
    }

    /// **Test: metadata carries the base64 bytes and the original size.**
    #[test]
    fn test_metadata_encoding() {
        let upload = upload(b"ABC".to_vec());
        let metadata = upload.to_metadata();
        assert_eq!(metadata.base64_data, "QUJD");
        assert_eq!(metadata.file_size, 3);
        assert_eq!(metadata.file_name, "report.pdf");
        assert_eq!(metadata.file_type, "application/pdf");
    }
}
