//! Receipt file validation for the New Bill form.

use shared::SelectedFile;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

const IMAGE_MIME_TYPES: [(&str, &str); 4] = [
    ("image/jpeg", "jpeg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
];

/// Outcome of checking a receipt file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Pass,
    Fail { reason: String },
}

impl ValidationResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationResult::Pass)
    }
}

/// Checks receipt files against an allow-list of image extensions
#[derive(Debug, Clone)]
pub struct FileValidator {
    allowed_extensions: Vec<String>,
}

impl FileValidator {
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_ALLOWED_EXTENSIONS)
    }

    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn validate_file(&self, file: &SelectedFile) -> ValidationResult {
        self.validate(&file.name, &file.mime_type)
    }

    /// The extension decides when the name has one; otherwise the MIME type does.
    pub fn validate(&self, file_name: &str, mime_type: &str) -> ValidationResult {
        let extension = match extension_of(file_name) {
            Some(ext) => Some(ext),
            None => extension_for_mime(mime_type).map(str::to_string),
        };

        match extension {
            Some(ext) if self.allowed_extensions.contains(&ext) => ValidationResult::Pass,
            Some(ext) => ValidationResult::Fail {
                reason: format!(
                    "Le fichier .{} n'est pas accepté. Formats acceptés : {}",
                    ext,
                    self.allowed_extensions.join(", ")
                ),
            },
            None => ValidationResult::Fail {
                reason: format!(
                    "Type de fichier inconnu ({}). Formats acceptés : {}",
                    if mime_type.is_empty() { "?" } else { mime_type },
                    self.allowed_extensions.join(", ")
                ),
            },
        }
    }
}

impl Default for FileValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

fn extension_for_mime(mime_type: &str) -> Option<&'static str> {
    let mime = mime_type.trim().to_lowercase();
    IMAGE_MIME_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == mime)
        .map(|(_, ext)| *ext)
}
