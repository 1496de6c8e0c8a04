//! Live state behind the input column.

use serde::{Deserialize, Serialize};

/// Which tab supplies the text payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Direct,
    File,
}

/// Where the previewed file came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "name", rename_all = "snake_case")]
pub enum FileSource {
    /// Chosen from the dropdown of existing input files.
    Existing(String),
    /// Uploaded through the file control.
    Upload(String),
}

/// Current values of the panel's controls.
///
/// The two modes are exclusive, and so are the two file sources: picking
/// one replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputState {
    pub mode: InputMode,
    pub text: String,
    pub file: Option<FileSource>,
    pub preview: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs without touching any values.
    pub fn select_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Text typed into the direct input field.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.mode = InputMode::Direct;
        self.text = text.into();
    }

    /// An existing file was picked; `content` becomes the preview.
    pub fn select_file(&mut self, name: impl Into<String>, content: String) {
        self.mode = InputMode::File;
        self.file = Some(FileSource::Existing(name.into()));
        self.preview = content;
    }

    /// A file was uploaded; `content` becomes the preview.
    pub fn upload_file(&mut self, name: impl Into<String>, content: String) {
        self.mode = InputMode::File;
        self.file = Some(FileSource::Upload(name.into()));
        self.preview = content;
    }

    /// Dropdown or upload was cleared.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.preview.clear();
    }

    /// Selected dropdown value, if the preview comes from an existing file.
    pub fn selected_existing(&self) -> Option<&str> {
        match &self.file {
            Some(FileSource::Existing(name)) => Some(name),
            _ => None,
        }
    }

    /// Text that would be handed to synthesis, if any.
    pub fn payload(&self) -> Option<&str> {
        let text = match self.mode {
            InputMode::Direct => self.text.as_str(),
            InputMode::File => {
                self.file.as_ref()?;
                self.preview.as_str()
            }
        };
        (!text.trim().is_empty()).then_some(text)
    }
}
