//! Draft feedback held by the submission form
//!
//! A draft lives only on the client. It is validated and turned into a
//! [`FeedbackSubmission`] right before posting, and reset once the server
//! accepts it.

use crate::error::{Result, ValidationError};
use crate::types::{ConcernType, Department};
use std::path::{Path, PathBuf};

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Maximum number of attachments per submission
pub const MAX_ATTACHMENTS: usize = 5;

/// Maximum size of a single attachment (10 MB)
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// File extensions the service accepts, with the content type sent for each
const ACCEPTED_TYPES: [(&str, &str); 7] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Location on disk
    pub path: PathBuf,
    /// Name sent to the server
    pub file_name: String,
    /// Size in bytes at selection time
    pub size: u64,
}

impl Attachment {
    /// Select a file from disk, recording its name and size
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size: metadata.len(),
        })
    }

    /// Lowercased extension, if any
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
    }

    /// Content type for the upload part, if the extension is accepted
    pub fn mime_type(&self) -> Option<&'static str> {
        let ext = self.extension()?;
        ACCEPTED_TYPES
            .iter()
            .find(|(accepted, _)| *accepted == ext)
            .map(|(_, mime)| *mime)
    }

    /// Read the file contents for upload
    pub async fn read(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// Feedback being composed, before submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFeedback {
    /// Optional concern type
    pub concern_type: Option<ConcernType>,
    /// Optional related department
    pub department: Option<Department>,
    /// Free-text description (required)
    pub description: String,
    /// Whether to hide the submitter's identity
    pub is_anonymous: bool,
    /// Selected attachments, in selection order
    pub attachments: Vec<Attachment>,
}

impl DraftFeedback {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected attachments, in selection order
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Append newly picked files after the ones already selected
    pub fn add_attachments(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(files);
    }

    /// Remove the attachment at `index`, keeping the order of the rest
    ///
    /// Returns the removed attachment, or `None` if the index is out of range.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    /// Number of characters in the trimmed description
    pub fn description_len(&self) -> usize {
        self.description.trim().chars().count()
    }

    /// Check the draft against the form's constraints
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let actual = self.description_len();
        if actual < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooShort {
                min: MIN_DESCRIPTION_CHARS,
                actual,
            });
        }

        if self.attachments.len() > MAX_ATTACHMENTS {
            return Err(ValidationError::TooManyAttachments {
                max: MAX_ATTACHMENTS,
                actual: self.attachments.len(),
            });
        }

        for file in &self.attachments {
            if file.mime_type().is_none() {
                return Err(ValidationError::UnsupportedFileType {
                    name: file.file_name.clone(),
                    accepted: accepted_extensions(),
                });
            }
            if file.size > MAX_ATTACHMENT_BYTES {
                return Err(ValidationError::AttachmentTooLarge {
                    name: file.file_name.clone(),
                    size: file.size,
                    max: MAX_ATTACHMENT_BYTES,
                });
            }
        }

        Ok(())
    }

    /// Validate the draft and describe the multipart request it becomes
    pub fn to_submission(&self) -> std::result::Result<FeedbackSubmission, ValidationError> {
        self.validate()?;

        let fields = vec![
            (
                "concernType",
                self.concern_type.map(ConcernType::label).unwrap_or_default().to_string(),
            ),
            (
                "department",
                self.department.map(Department::label).unwrap_or_default().to_string(),
            ),
            ("description", self.description.clone()),
            ("isAnonymous", self.is_anonymous.to_string()),
        ];

        Ok(FeedbackSubmission {
            fields,
            attachments: self.attachments.clone(),
        })
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Comma-separated list of accepted extensions, for messages
pub fn accepted_extensions() -> String {
    ACCEPTED_TYPES
        .iter()
        .map(|(ext, _)| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multipart field name used for every attachment part
pub const ATTACHMENT_FIELD: &str = "attachments";

/// The parts of a feedback POST, before any file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    /// Scalar text fields, in send order
    pub fields: Vec<(&'static str, String)>,
    /// Files sent as repeated `attachments` parts
    pub attachments: Vec<Attachment>,
}

impl FeedbackSubmission {
    /// Names of every part in send order
    pub fn part_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .map(|(name, _)| *name)
            .chain(self.attachments.iter().map(|_| ATTACHMENT_FIELD))
            .collect()
    }

    /// Value of a scalar field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}
