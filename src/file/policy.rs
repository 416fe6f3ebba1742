//! Upload validation rules.

use std::path::{Component, Path};

use crate::config::StorageConfig;
use crate::{FiledropError, Result};

/// Rules an upload must satisfy before anything is written.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed_extensions: Vec<String>,
    max_file_size: u64,
}

impl UploadPolicy {
    /// Create a policy from an allow-list and a size limit in bytes.
    pub fn new<I, S>(allowed_extensions: I, max_file_size: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
            max_file_size,
        }
    }

    /// Create a policy from the storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.allowed_extensions, config.max_file_size_bytes)
    }

    /// Permitted extensions, lowercase.
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Maximum accepted size in bytes.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Check that a filename is safe to store and has a permitted extension.
    pub fn check_filename(&self, filename: &str) -> Result<()> {
        if !is_plain_file_name(filename) {
            return Err(FiledropError::Validation(format!(
                "Invalid filename '{filename}'"
            )));
        }

        if !self.is_allowed(filename) {
            return Err(FiledropError::Validation(format!(
                "File type not allowed. Allowed: {}",
                self.allowed_extensions.join(", ")
            )));
        }

        Ok(())
    }

    /// Check that the content size is within the limit.
    pub fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_file_size {
            return Err(self.too_large());
        }
        Ok(())
    }

    /// The error reported for content over the size limit.
    pub fn too_large(&self) -> FiledropError {
        FiledropError::Validation(format!(
            "File too large. Must be under {}",
            format_size(self.max_file_size)
        ))
    }

    /// The extension is the text after the last dot, compared lowercase.
    fn is_allowed(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_lowercase();
                self.allowed_extensions.iter().any(|a| *a == ext)
            }
            None => false,
        }
    }
}

/// True if the name is exactly one normal path component.
fn is_plain_file_name(filename: &str) -> bool {
    if filename.is_empty() || filename.contains(['/', '\\', '\0']) {
        return false;
    }

    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Format a byte count for error messages.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> UploadPolicy {
        UploadPolicy::from_config(&StorageConfig::default())
    }

    #[test]
    fn test_allowed_extensions() {
        let policy = default_policy();
        for name in ["a.pdf", "a.png", "a.jpg", "a.jpeg", "a.txt", "a.docx"] {
            assert!(policy.check_filename(name).is_ok(), "{name} should be allowed");
        }
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let policy = default_policy();
        assert!(policy.check_filename("SCAN.PDF").is_ok());
        assert!(policy.check_filename("photo.JpEg").is_ok());
    }

    #[test]
    fn test_disallowed_extensions() {
        let policy = default_policy();
        for name in ["a.exe", "a.pdf.exe", "archive.tar.gz", "README", "a."] {
            let err = policy.check_filename(name).unwrap_err();
            assert!(
                err.to_string().contains("File type not allowed"),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn test_last_extension_wins() {
        let policy = default_policy();
        assert!(policy.check_filename("backup.exe.txt").is_ok());
    }

    #[test]
    fn test_unsafe_filenames() {
        let policy = default_policy();
        for name in ["", ".", "..", "../etc/passwd.txt", "dir/a.txt", "..\\a.txt", "/a.txt"] {
            let err = policy.check_filename(name).unwrap_err();
            assert!(err.to_string().contains("Invalid filename"), "{name:?}: {err}");
        }
    }

    #[test]
    fn test_size_limit() {
        let policy = default_policy();
        assert!(policy.check_size(0).is_ok());
        assert!(policy.check_size(500 * 1024).is_ok());

        let err = policy.check_size(500 * 1024 + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: File too large. Must be under 500 KB"
        );
    }

    #[test]
    fn test_extensions_normalized() {
        let policy = UploadPolicy::new([".PDF", "Txt"], 10);
        assert_eq!(policy.allowed_extensions(), &["pdf", "txt"]);
        assert_eq!(policy.max_file_size(), 10);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(512_000), "500 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
    }
}
