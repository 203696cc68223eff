use crate::replace::MatchSpan;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Note {
    EmptyName,
    DuplicateName,
    HiddenFile,
}

impl Note {
    pub fn severity(self) -> Severity {
        match self {
            Note::EmptyName | Note::DuplicateName => Severity::Error,
            Note::HiddenFile => Severity::Warning,
        }
    }

    pub fn is_error(self) -> bool {
        self.severity() == Severity::Error
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub original_name: String,
    pub extension: String,
    pub proposed_name: String,
    pub note: Option<Note>,
    pub matches: Vec<MatchSpan>,
}

impl FileEntry {
    pub fn from_path(path: &Path) -> Self {
        let original_name = path
            .file_stem()
            .map(|v| v.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|v| format!(".{}", v.to_string_lossy()))
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            proposed_name: original_name.clone(),
            original_name,
            extension,
            note: None,
            matches: Vec::new(),
        }
    }

    pub fn original_full_name(&self) -> String {
        format!("{}{}", self.original_name, self.extension)
    }

    pub fn proposed_full_name(&self) -> String {
        format!("{}{}", self.proposed_name, self.extension)
    }

    pub fn is_unchanged(&self) -> bool {
        self.proposed_name == self.original_name
    }
}
