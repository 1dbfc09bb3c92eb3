//! Upload validation and per-request staging.
//!
//! Every request gets its own uniquely named file under the upload directory.
//! The returned `NamedTempFile` deletes the file when dropped, so cleanup
//! happens on success, on error, and when the request future is cancelled.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;

const PDF_EXTENSION: &str = ".pdf";

/// Rejects filenames that do not end in exactly `.pdf`. The check is
/// case-sensitive and the name is not trimmed.
pub fn ensure_pdf_filename(filename: &str) -> Result<(), AppError> {
    if filename.ends_with(PDF_EXTENSION) {
        Ok(())
    } else {
        Err(AppError::InvalidFileType)
    }
}

/// Writes the upload to a fresh temp file in `dir`.
pub async fn stage_upload(dir: &Path, bytes: Bytes) -> Result<NamedTempFile, AppError> {
    let dir = dir.to_path_buf();

    let staged = tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(PDF_EXTENSION)
            .tempfile_in(&dir)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(file)
    })
    .await
    .context("Upload staging task failed")?
    .context("Failed to stage uploaded PDF")?;

    tracing::debug!(path = %staged.path().display(), "Upload staged");
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_accepted() {
        assert!(ensure_pdf_filename("resume.pdf").is_ok());
        assert!(ensure_pdf_filename("Jane Doe - CV.pdf").is_ok());
        assert!(ensure_pdf_filename(".pdf").is_ok());
    }

    #[test]
    fn test_extension_is_case_sensitive_and_untrimmed() {
        for name in ["Jane Doe - CV.PDF", "resume.Pdf", " resume.pdf ", "resume.pdf\n"] {
            assert!(
                matches!(ensure_pdf_filename(name), Err(AppError::InvalidFileType)),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_other_extensions_rejected() {
        for name in ["resume.txt", "resume.pdf.exe", "resume.docx", "resume", "pdf", ""] {
            assert!(
                matches!(ensure_pdf_filename(name), Err(AppError::InvalidFileType)),
                "{name:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_staged_file_holds_bytes_and_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage_upload(dir.path(), Bytes::from_static(b"%PDF-1.5 stub"))
            .await
            .unwrap();
        let path = staged.path().to_path_buf();

        assert!(path.starts_with(dir.path()));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.5 stub");

        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_concurrent_uploads_get_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let (a, b) = tokio::join!(
            stage_upload(dir.path(), Bytes::from_static(b"first")),
            stage_upload(dir.path(), Bytes::from_static(b"second")),
        );
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.path(), b.path());
        assert_eq!(std::fs::read(a.path()).unwrap(), b"first");
        assert_eq!(std::fs::read(b.path()).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_missing_upload_dir_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = stage_upload(&missing, Bytes::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
