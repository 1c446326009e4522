// Résumé rendering: one traversal over the record, two output formats.
// The traversal decides what appears and in which order; a `Renderer` only
// decides how each piece is spelled. Everything here is pure and synchronous.

pub mod format;
pub mod handlers;
pub mod html;
pub mod markdown;

use serde::Serialize;
use tracing::debug;

use crate::models::resume::{or_empty, present, ResumeRecord};

pub use format::{clean_html, format_date};
pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;

pub const EDUCATION_HEADING: &str = "🎓 Education";
pub const SKILLS_HEADING: &str = "⚡ Skills";
pub const EXPERIENCE_HEADING: &str = "💼 Experience";
pub const PROJECTS_HEADING: &str = "🚀 Projects";
pub const TIME_LABEL: &str = "Time";
pub const GPA_LABEL: &str = "GPA";

const EMAIL_GLYPH: &str = "📧";
const PHONE_GLYPH: &str = "📱";
const CONTACT_SEPARATOR: &str = " | ";
const HEADING_SEPARATOR: &str = " | ";

/// Output-format half of the renderer. Each call appends one block.
pub trait Renderer {
    fn header(&mut self, name: &str, title: &str);
    /// Called only when at least one contact item exists.
    fn contact_line(&mut self, line: &str);
    fn section_heading(&mut self, heading: &str);
    fn entry_heading(&mut self, heading: &str);
    fn date_line(&mut self, range: &str);
    fn labeled_value(&mut self, label: &str, value: &str);
    fn emphasis(&mut self, text: &str);
    /// Description or skill text that may carry inline HTML.
    fn rich_text(&mut self, text: &str);
    fn end_block(&mut self);
    fn finish(self) -> String;
}

/// Both formats for one record.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedResume {
    pub markdown: String,
    pub html: String,
}

pub fn render_markdown(record: &ResumeRecord) -> String {
    let out = render(record, MarkdownRenderer::new());
    debug!(bytes = out.len(), "rendered markdown");
    out
}

pub fn render_html(record: &ResumeRecord) -> String {
    let out = render(record, HtmlRenderer::new());
    debug!(bytes = out.len(), "rendered html");
    out
}

pub fn render_all(record: &ResumeRecord) -> RenderedResume {
    RenderedResume {
        markdown: render_markdown(record),
        html: render_html(record),
    }
}

/// Walks the record in fixed section order and feeds `out`.
pub fn render<R: Renderer>(record: &ResumeRecord, mut out: R) -> String {
    let basic = &record.basic;
    out.header(or_empty(&basic.name), or_empty(&basic.title));

    let contact = contact_items(record);
    if !contact.is_empty() {
        out.contact_line(&contact.join(CONTACT_SEPARATOR));
    }

    if !record.education.is_empty() {
        out.section_heading(EDUCATION_HEADING);
        for edu in record.education.iter().filter(|e| e.visible) {
            out.entry_heading(&join_heading(&[&edu.school, &edu.major, &edu.degree]));

            let start = format_date(or_empty(&edu.start_date));
            let end = format_date(or_empty(&edu.end_date));
            if !start.is_empty() && !end.is_empty() {
                out.date_line(&format!("{start} - {end}"));
            }
            if let Some(gpa) = present(&edu.gpa) {
                out.labeled_value(GPA_LABEL, gpa);
            }
            if let Some(description) = present(&edu.description) {
                out.rich_text(description);
            }
            out.end_block();
        }
    }

    if let Some(skills) = present(&record.skill_content) {
        out.section_heading(SKILLS_HEADING);
        out.rich_text(skills);
        out.end_block();
    }

    if !record.experience.is_empty() {
        out.section_heading(EXPERIENCE_HEADING);
        for exp in record.experience.iter().filter(|e| e.visible) {
            out.entry_heading(&join_heading(&[&exp.company, &exp.position]));
            if let Some(date) = present(&exp.date) {
                out.date_line(date);
            }
            if let Some(details) = present(&exp.details) {
                out.rich_text(details);
            }
            out.end_block();
        }
    }

    if !record.projects.is_empty() {
        out.section_heading(PROJECTS_HEADING);
        for project in record.projects.iter().filter(|p| p.visible) {
            out.entry_heading(&join_heading(&[&project.name, &project.role]));
            if let Some(date) = present(&project.date) {
                out.date_line(date);
            }
            if let Some(description) = present(&project.description) {
                out.rich_text(description);
            }
            out.end_block();
        }
    }

    for section in record
        .menu_sections
        .iter()
        .filter(|s| s.is_renderable_custom())
    {
        let items = record.custom_items(or_empty(&section.id));
        if items.is_empty() {
            continue;
        }

        out.section_heading(&format!("{} {}", section.icon(), or_empty(&section.title)));
        for item in items.iter().filter(|i| i.visible) {
            if let Some(title) = present(&item.title) {
                out.entry_heading(title);
            }
            if let Some(subtitle) = present(&item.subtitle) {
                out.emphasis(subtitle);
            }
            if let Some(range) = present(&item.date_range) {
                out.date_line(range);
            }
            if let Some(description) = present(&item.description) {
                out.rich_text(description);
            }
            out.end_block();
        }
    }

    out.finish()
}

fn contact_items(record: &ResumeRecord) -> Vec<String> {
    let basic = &record.basic;
    let mut items = Vec::new();

    if let Some(email) = present(&basic.email) {
        items.push(format!("{EMAIL_GLYPH} {email}"));
    }
    if let Some(phone) = present(&basic.phone) {
        items.push(format!("{PHONE_GLYPH} {phone}"));
    }
    for field in basic.custom_fields.iter().filter(|f| f.visible) {
        items.push(format!(
            "{}: {}",
            or_empty(&field.label),
            or_empty(&field.value)
        ));
    }

    items
}

/// Entry headings keep empty components so the separators stay positional.
fn join_heading(parts: &[&Option<String>]) -> String {
    parts
        .iter()
        .map(|p| or_empty(p))
        .collect::<Vec<_>>()
        .join(HEADING_SEPARATOR)
}
