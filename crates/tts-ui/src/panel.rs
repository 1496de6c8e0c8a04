//! Input column declaration.
//!
//! Components are plain data: the panel describes what to show, renderers
//! and event wiring live elsewhere.

use std::fmt;

use serde::Serialize;

/// File types accepted by the upload control.
pub const ACCEPTED_FILE_TYPES: &[&str] = &[".txt"];

/// Whether the upload control takes a file named `file_name`.
pub fn accepts_upload(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ACCEPTED_FILE_TYPES
        .iter()
        .any(|ext| lower.len() > ext.len() && lower.ends_with(*ext))
}

/// Stable identifier of a component within a layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentId(&'static str);

impl ComponentId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Single or multi-line text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Textbox {
    pub id: ComponentId,
    pub label: String,
    pub placeholder: Option<String>,
    pub lines: u32,
    pub interactive: bool,
    pub value: String,
}

/// Selection among a fixed list of choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub id: ComponentId,
    pub label: String,
    pub choices: Vec<String>,
    pub value: Option<String>,
}

/// Single-file upload control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUpload {
    pub id: ComponentId,
    pub label: String,
    pub file_types: Vec<String>,
}

/// One tab of a [`Tabs`] container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub label: String,
    pub children: Vec<Component>,
}

/// Container showing one tab at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tabs {
    pub id: ComponentId,
    pub items: Vec<TabItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Tabs(Tabs),
    Textbox(Textbox),
    Dropdown(Dropdown),
    FileUpload(FileUpload),
}

impl Component {
    pub fn id(&self) -> &ComponentId {
        match self {
            Self::Tabs(c) => &c.id,
            Self::Textbox(c) => &c.id,
            Self::Dropdown(c) => &c.id,
            Self::FileUpload(c) => &c.id,
        }
    }

    fn find(&self, id: &ComponentId) -> Option<&Component> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Tabs(tabs) => tabs
                .items
                .iter()
                .flat_map(|item| item.children.iter())
                .find_map(|child| child.find(id)),
            _ => None,
        }
    }
}

/// Vertical layout root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub scale: u32,
    pub children: Vec<Component>,
}

impl Column {
    /// Look a component up anywhere in the layout.
    pub fn find(&self, id: &ComponentId) -> Option<&Component> {
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn textbox(&self, id: &ComponentId) -> Option<&Textbox> {
        match self.find(id)? {
            Component::Textbox(c) => Some(c),
            _ => None,
        }
    }

    pub fn dropdown(&self, id: &ComponentId) -> Option<&Dropdown> {
        match self.find(id)? {
            Component::Dropdown(c) => Some(c),
            _ => None,
        }
    }

    pub fn file_upload(&self, id: &ComponentId) -> Option<&FileUpload> {
        match self.find(id)? {
            Component::FileUpload(c) => Some(c),
            _ => None,
        }
    }

    pub fn tabs(&self, id: &ComponentId) -> Option<&Tabs> {
        match self.find(id)? {
            Component::Tabs(c) => Some(c),
            _ => None,
        }
    }
}

/// Named references to the parts of the input column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputComponents {
    pub tabs: ComponentId,
    pub text_input: ComponentId,
    pub file_select: ComponentId,
    pub file_upload: ComponentId,
    pub file_preview: ComponentId,
}

impl Default for InputComponents {
    fn default() -> Self {
        Self {
            tabs: ComponentId::new("input-tabs"),
            text_input: ComponentId::new("text-input"),
            file_select: ComponentId::new("file-select"),
            file_upload: ComponentId::new("file-upload"),
            file_preview: ComponentId::new("file-preview"),
        }
    }
}

pub const DIRECT_TAB: &str = "Direct Input";
pub const FILE_TAB: &str = "From File";

/// Build the input column.
///
/// `choices` are the existing input files offered by the dropdown, in
/// display order. Nothing is selected initially.
pub fn create_input_column(choices: Vec<String>) -> (Column, InputComponents) {
    let ids = InputComponents::default();

    let text_input = Textbox {
        id: ids.text_input.clone(),
        label: "Text to speak".to_string(),
        placeholder: Some("Enter text here...".to_string()),
        lines: 4,
        interactive: true,
        value: String::new(),
    };

    let file_select = Dropdown {
        id: ids.file_select.clone(),
        label: "Select Existing File".to_string(),
        choices,
        value: None,
    };

    let file_upload = FileUpload {
        id: ids.file_upload.clone(),
        label: "Upload Text File (.txt)".to_string(),
        file_types: ACCEPTED_FILE_TYPES.iter().map(|t| t.to_string()).collect(),
    };

    let file_preview = Textbox {
        id: ids.file_preview.clone(),
        label: "File Content Preview".to_string(),
        placeholder: None,
        lines: 4,
        interactive: false,
        value: String::new(),
    };

    let tabs = Tabs {
        id: ids.tabs.clone(),
        items: vec![
            TabItem {
                label: DIRECT_TAB.to_string(),
                children: vec![Component::Textbox(text_input)],
            },
            TabItem {
                label: FILE_TAB.to_string(),
                children: vec![
                    Component::Dropdown(file_select),
                    Component::FileUpload(file_upload),
                    Component::Textbox(file_preview),
                ],
            },
        ],
    };

    let column = Column {
        scale: 1,
        children: vec![Component::Tabs(tabs)],
    };

    (column, ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_references_resolve() {
        let (column, ids) = create_input_column(vec![]);
        assert!(column.tabs(&ids.tabs).is_some());
        assert!(column.textbox(&ids.text_input).is_some());
        assert!(column.dropdown(&ids.file_select).is_some());
        assert!(column.file_upload(&ids.file_upload).is_some());
        assert!(column.textbox(&ids.file_preview).is_some());
    }

    #[test]
    fn test_tab_layout() {
        let (column, ids) = create_input_column(vec![]);
        let tabs = column.tabs(&ids.tabs).unwrap();
        let labels: Vec<_> = tabs.items.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec![DIRECT_TAB, FILE_TAB]);
        assert_eq!(tabs.items[1].children.len(), 3);
        assert_eq!(column.scale, 1);
    }

    #[test]
    fn test_text_fields() {
        let (column, ids) = create_input_column(vec![]);

        let text = column.textbox(&ids.text_input).unwrap();
        assert_eq!(text.label, "Text to speak");
        assert_eq!(text.placeholder.as_deref(), Some("Enter text here..."));
        assert_eq!(text.lines, 4);
        assert!(text.interactive);

        let preview = column.textbox(&ids.file_preview).unwrap();
        assert_eq!(preview.label, "File Content Preview");
        assert!(!preview.interactive);
        assert_eq!(preview.lines, 4);
    }

    #[test]
    fn test_upload_accepts_only_txt() {
        let (column, ids) = create_input_column(vec![]);
        let upload = column.file_upload(&ids.file_upload).unwrap();
        assert_eq!(upload.file_types, vec![".txt"]);
        assert!(accepts_upload("story.txt"));
        assert!(accepts_upload("STORY.TXT"));
        assert!(!accepts_upload("story.md"));
        assert!(!accepts_upload(".txt"));
        assert!(!accepts_upload("txt"));
    }

    #[test]
    fn test_wrong_kind_lookup() {
        let (column, ids) = create_input_column(vec![]);
        assert!(column.dropdown(&ids.text_input).is_none());
        assert!(column.find(&ComponentId::new("missing")).is_none());
    }
}
