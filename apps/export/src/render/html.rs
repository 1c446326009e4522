use super::{Renderer, TIME_LABEL};

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; color: #333; }
        h1 { color: #1A1A1A; margin-bottom: 5px; }
        h2 { color: #1A1A1A; border-bottom: 2px solid #1A1A1A; padding-bottom: 5px; margin-top: 30px; }
        h3 { color: #444; margin-top: 25px; margin-bottom: 10px; }
        .contact-info { color: #666; margin-bottom: 30px; }
        .date-range { color: #888; font-weight: bold; }
        ul { padding-left: 20px; }
        li { margin-bottom: 5px; }
        .section { margin-bottom: 30px; }
    </style>
</head>
<body>"#;

const DOCUMENT_TAIL: &str = "</body></html>";

/// Standalone HTML document. Field text, descriptions and skills are emitted
/// verbatim so rich text from the editor passes through.
#[derive(Debug)]
pub struct HtmlRenderer {
    lines: Vec<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            lines: vec![DOCUMENT_HEAD.to_string()],
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn header(&mut self, name: &str, title: &str) {
        self.lines.push(format!("<h1>{name}</h1>"));
        self.lines
            .push(format!("<h2 style='border:none; margin-top:0;'>{title}</h2>"));
    }

    fn contact_line(&mut self, line: &str) {
        self.lines
            .push(format!("<div class='contact-info'>{line}</div>"));
    }

    fn section_heading(&mut self, heading: &str) {
        self.lines.push(format!("<h2>{heading}</h2>"));
    }

    fn entry_heading(&mut self, heading: &str) {
        self.lines.push(format!("<h3>{heading}</h3>"));
    }

    fn date_line(&mut self, range: &str) {
        self.lines
            .push(format!("<div class='date-range'>{TIME_LABEL}: {range}</div>"));
    }

    fn labeled_value(&mut self, label: &str, value: &str) {
        self.lines
            .push(format!("<div><strong>{label}</strong>: {value}</div>"));
    }

    fn emphasis(&mut self, text: &str) {
        self.lines.push(format!("<div><strong>{text}</strong></div>"));
    }

    fn rich_text(&mut self, text: &str) {
        self.lines.push(format!("<div>{text}</div>"));
    }

    // Spacing comes from the stylesheet.
    fn end_block(&mut self) {}

    fn finish(mut self) -> String {
        self.lines.push(DOCUMENT_TAIL.to_string());
        self.lines.join("\n")
    }
}
