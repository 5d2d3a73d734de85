//! HTML fragment rendering for page edit Props.
//!
//! The markup follows the admin interface's element contract: an `h1`
//! heading, a `.error-messages` list that only exists when there are
//! errors, and a `.content-side` column whose first link is Save and whose
//! `.delete` link is Delete.

use core::fmt::Write;

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{Content, EditorProps, PageEditProps, Renderer};

/// Renderer that keeps the markup of the latest render.
///
/// Clones share the same output, so hand one clone to the host and read
/// [`html`](Self::html) from another.
#[derive(Clone)]
pub struct MarkupRenderer {
    latest: Arc<Mutex<String>>,
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(Mutex::new(String::new())),
        }
    }

    /// Markup of the most recent render, empty before the first one.
    pub fn html(&self) -> String {
        self.latest.lock().clone()
    }
}

impl Renderer<PageEditProps> for MarkupRenderer {
    fn render(&mut self, props: PageEditProps) {
        *self.latest.lock() = to_markup(&props);
    }
}

/// Render Props into an HTML fragment.
pub fn to_markup(props: &PageEditProps) -> String {
    let mut html = String::from("<div class=\"single\">");
    tag(&mut html, "h1", &props.heading);

    if let Some(errors) = &props.errors {
        html.push_str("<ul class=\"error-messages\">");
        for error in errors {
            tag(&mut html, "li", error);
        }
        html.push_str("</ul>");
    }

    match &props.content {
        Content::Loading => html.push_str("<div class=\"loading\"></div>"),
        Content::NotFound => {}
        Content::Editor(editor) => editor_markup(&mut html, editor),
    }

    html.push_str("</div>");
    html
}

fn editor_markup(html: &mut String, editor: &EditorProps) {
    html.push_str("<div class=\"content-wrapper\"><div class=\"content-body\">");
    let _ = write!(
        html,
        "<input class=\"input-title\" value=\"{}\">",
        escape(&editor.title.value)
    );
    let _ = write!(
        html,
        "<input class=\"input-path\" value=\"{}\">",
        escape(&editor.path.value)
    );
    tag_with_class(html, "textarea", "input-body", &editor.body.value);
    html.push_str("</div><div class=\"content-side\">");

    let save_class = if editor.save.active {
        "btn btn-active"
    } else {
        "btn btn-inactive"
    };
    tag_with_class(html, "a", save_class, &editor.save.label);
    tag_with_class(html, "a", "btn btn-delete delete", &editor.delete.label);

    let checked = if editor.draft.checked { " checked" } else { "" };
    let _ = write!(
        html,
        "<label><input class=\"input-draft\" type=\"checkbox\"{checked}> {}</label>",
        escape(&editor.draft.label)
    );
    html.push_str("</div></div>");
}

fn tag(html: &mut String, name: &str, text: &str) {
    let _ = write!(html, "<{name}>{}</{name}>", escape(text));
}

fn tag_with_class(html: &mut String, name: &str, class: &str, text: &str) {
    let _ = write!(html, "<{name} class=\"{class}\">{}</{name}>", escape(text));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
