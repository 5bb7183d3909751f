use std::fmt;
use std::path::{Path, PathBuf};

/// Message shown when the user picks a file the backend cannot analyze.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload a PDF, DOCX, or TXT file.";

/// Document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Txt => "text/plain",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
            Self::Txt => write!(f, "txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unsupported file type `{extension}` for {file_name}")]
    UnsupportedType {
        file_name: String,
        extension: String,
    },
    #[error("path has no file name: {0}")]
    MissingFileName(String),
}

impl ValidationError {
    /// Text for the blocking notification shown to the user.
    pub fn user_message(&self) -> &'static str {
        UNSUPPORTED_FILE_MESSAGE
    }
}

/// A validated document chosen by the user but not yet submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub name: String,
    pub kind: DocumentKind,
}

impl StagedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        let path = path.into();
        let name = file_name_of(&path)?;
        let extension = extension_of(&name);
        let kind = DocumentKind::from_extension(&extension).ok_or_else(|| {
            ValidationError::UnsupportedType {
                file_name: name.clone(),
                extension: extension.clone(),
            }
        })?;
        Ok(Self { path, name, kind })
    }
}

/// Lower-cased text after the final `.`; the whole name when it has no dot.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

fn file_name_of(path: &Path) -> Result<String, ValidationError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ValidationError::MissingFileName(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::{extension_of, DocumentKind, StagedFile, ValidationError};

    #[test]
    fn extension_uses_last_dot_only() {
        assert_eq!(extension_of("resume.final.PDF"), "pdf");
        assert_eq!(extension_of("archive.pdf.zip"), "zip");
        assert_eq!(extension_of("README"), "readme");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn accepted_kinds_are_case_insensitive() {
        let staged = StagedFile::from_path("/tmp/Resume.DocX").unwrap();
        assert_eq!(staged.kind, DocumentKind::Docx);
        assert_eq!(staged.name, "Resume.DocX");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = StagedFile::from_path("image.png").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedType {
                file_name: "image.png".to_string(),
                extension: "png".to_string(),
            }
        );
        assert_eq!(err.user_message(), "Please upload a PDF, DOCX, or TXT file.");
    }

    #[test]
    fn name_without_dot_is_its_own_extension() {
        let staged = StagedFile::from_path("/tmp/PDF").unwrap();
        assert_eq!(staged.kind, DocumentKind::Pdf);
        assert!(StagedFile::from_path("resume").is_err());
    }
}
