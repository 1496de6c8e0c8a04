//! HTML rendering of the input column.

use std::fmt::Write;

use crate::panel::{Column, Component, Dropdown, FileUpload, InputComponents, Tabs, Textbox};
use crate::state::{InputMode, InputState};

/// Render a full page for `column`, filled in from `state`.
pub fn render_page(column: &Column, ids: &InputComponents, state: &InputState) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<div class="column" style="flex-grow:{}">"#,
        column.scale
    );
    for child in &column.children {
        render_component(&mut body, child, ids, state);
    }
    body.push_str("</div>");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>TTS Input</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n\
         <script>{}</script>\n</body>\n</html>\n",
        script(ids)
    )
}

fn render_component(
    out: &mut String,
    component: &Component,
    ids: &InputComponents,
    state: &InputState,
) {
    match component {
        Component::Tabs(tabs) => render_tabs(out, tabs, ids, state),
        Component::Textbox(textbox) => {
            let value = if textbox.id == ids.text_input {
                state.text.as_str()
            } else if textbox.id == ids.file_preview {
                state.preview.as_str()
            } else {
                textbox.value.as_str()
            };
            render_textbox(out, textbox, value);
        }
        Component::Dropdown(dropdown) => {
            render_dropdown(out, dropdown, state.selected_existing());
        }
        Component::FileUpload(upload) => render_upload(out, upload),
    }
}

fn render_tabs(out: &mut String, tabs: &Tabs, ids: &InputComponents, state: &InputState) {
    let active = match state.mode {
        InputMode::Direct => 0,
        InputMode::File => 1,
    };

    let _ = write!(out, r#"<div class="tabs" id="{}"><nav>"#, tabs.id);
    for (i, item) in tabs.items.iter().enumerate() {
        let _ = write!(
            out,
            r#"<button type="button" data-tab="{i}"{}>{}</button>"#,
            if i == active { r#" class="active""# } else { "" },
            escape(&item.label)
        );
    }
    out.push_str("</nav>");
    for (i, item) in tabs.items.iter().enumerate() {
        let _ = write!(
            out,
            r#"<section data-panel="{i}"{}>"#,
            if i == active { "" } else { " hidden" }
        );
        for child in &item.children {
            render_component(out, child, ids, state);
        }
        out.push_str("</section>");
    }
    out.push_str("</div>");
}

fn render_textbox(out: &mut String, textbox: &Textbox, value: &str) {
    let _ = write!(
        out,
        r#"<label for="{id}">{label}</label><textarea id="{id}" rows="{rows}""#,
        id = textbox.id,
        label = escape(&textbox.label),
        rows = textbox.lines
    );
    if let Some(placeholder) = &textbox.placeholder {
        let _ = write!(out, r#" placeholder="{}""#, escape(placeholder));
    }
    if !textbox.interactive {
        out.push_str(" readonly");
    }
    let _ = write!(out, ">{}</textarea>", escape(value));
}

fn render_dropdown(out: &mut String, dropdown: &Dropdown, selected: Option<&str>) {
    let _ = write!(
        out,
        r#"<label for="{id}">{label}</label><select id="{id}"><option value=""{none}></option>"#,
        id = dropdown.id,
        label = escape(&dropdown.label),
        none = if selected.is_none() { " selected" } else { "" }
    );
    for choice in &dropdown.choices {
        let _ = write!(
            out,
            r#"<option value="{value}"{sel}>{value}</option>"#,
            value = escape(choice),
            sel = if selected == Some(choice.as_str()) { " selected" } else { "" }
        );
    }
    out.push_str("</select>");
}

fn render_upload(out: &mut String, upload: &FileUpload) {
    let _ = write!(
        out,
        r#"<label for="{id}">{label}</label><input type="file" id="{id}" accept="{accept}">"#,
        id = upload.id,
        label = escape(&upload.label),
        accept = escape(&upload.file_types.join(","))
    );
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto}\
label{display:block;margin-top:1rem;font-weight:600}\
textarea,select{width:100%;box-sizing:border-box}\
nav button{margin-right:.5rem}nav button.active{font-weight:700}";

fn script(ids: &InputComponents) -> String {
    format!(
        r##"
const post = (url, body, type) => fetch(url, {{method: "POST", headers: {{"Content-Type": type || "application/json"}}, body}}).then(r => r.json());
const preview = document.getElementById("{preview}");
const show = (res) => {{ if (res.error) {{ alert(res.error); }} else {{ preview.value = res.preview; }} }};
document.querySelectorAll("#{tabs} nav button").forEach(btn => btn.addEventListener("click", () => {{
  const i = btn.dataset.tab;
  document.querySelectorAll("#{tabs} nav button").forEach(b => b.classList.toggle("active", b === btn));
  document.querySelectorAll("#{tabs} section").forEach(s => s.hidden = s.dataset.panel !== i);
  post("/mode", JSON.stringify({{mode: i === "0" ? "direct" : "file"}}));
}}));
document.getElementById("{text}").addEventListener("change", (e) => post("/text", JSON.stringify({{text: e.target.value}})));
document.getElementById("{select}").addEventListener("change", (e) => post("/select", JSON.stringify({{file: e.target.value || null}})).then(show));
document.getElementById("{upload}").addEventListener("change", (e) => {{
  const file = e.target.files[0];
  if (file) {{ post("/upload?name=" + encodeURIComponent(file.name), file, "text/plain").then(show); }}
}});
"##,
        preview = ids.file_preview,
        tabs = ids.tabs,
        text = ids.text_input,
        select = ids.file_select,
        upload = ids.file_upload,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::create_input_column;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_page_lists_choices_without_selection() {
        let (column, ids) = create_input_column(vec!["a.txt".into(), "b.txt".into()]);
        let html = render_page(&column, &ids, &InputState::new());

        assert!(html.contains(r#"<option value="" selected></option>"#));
        assert!(html.contains(r#"<option value="a.txt">a.txt</option>"#));
        assert!(html.contains(r#"<option value="b.txt">b.txt</option>"#));
        assert!(html.contains(r#"accept=".txt""#));
        assert!(html.contains("Enter text here..."));
    }

    #[test]
    fn test_page_reflects_state() {
        let (column, ids) = create_input_column(vec!["a.txt".into()]);
        let mut state = InputState::new();
        state.select_file("a.txt", "<b>bold</b>".to_string());

        let html = render_page(&column, &ids, &state);
        assert!(html.contains(r#"<option value="a.txt" selected>a.txt</option>"#));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;</textarea>"));
        assert!(html.contains(r#"<section data-panel="0" hidden>"#));
        assert!(html.contains(r#"id="file-preview" rows="4" readonly>"#));
    }
}
