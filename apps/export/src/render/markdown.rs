use super::{clean_html, Renderer, TIME_LABEL};

/// Markdown output. Blocks are separated by blank lines; rich text is reduced
/// to plain text with [`clean_html`].
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    lines: Vec<String>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl Renderer for MarkdownRenderer {
    fn header(&mut self, name: &str, title: &str) {
        self.push(format!("# {name}"));
        self.push(format!("## {title}"));
        self.push("");
    }

    fn contact_line(&mut self, line: &str) {
        self.push(line);
        self.push("");
    }

    fn section_heading(&mut self, heading: &str) {
        self.push(format!("## {heading}"));
        self.push("");
    }

    fn entry_heading(&mut self, heading: &str) {
        self.push(format!("### {heading}"));
    }

    fn date_line(&mut self, range: &str) {
        self.push(format!("**{TIME_LABEL}**: {range}"));
    }

    fn labeled_value(&mut self, label: &str, value: &str) {
        self.push(format!("**{label}**: {value}"));
    }

    fn emphasis(&mut self, text: &str) {
        self.push(format!("**{text}**"));
    }

    fn rich_text(&mut self, text: &str) {
        self.push(clean_html(text));
    }

    fn end_block(&mut self) {
        self.push("");
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::models::resume::ResumeRecord;
    use crate::render::render_markdown;
    use serde_json::json;

    fn md(value: serde_json::Value) -> String {
        render_markdown(&ResumeRecord::from_json(&value.to_string()).unwrap())
    }

    #[test]
    fn test_header_only_record() {
        let out = md(json!({"basic": {"name": "Ada", "title": "Analyst"}}));
        assert_eq!(out, "# Ada\n## Analyst\n");
    }

    #[test]
    fn test_contact_line_followed_by_blank() {
        let out = md(json!({"basic": {"name": "Ada", "title": "Analyst", "email": "a@b.c"}}));
        assert_eq!(out, "# Ada\n## Analyst\n\n📧 a@b.c\n");
    }

    #[test]
    fn test_empty_email_omitted_from_contact() {
        let out = md(json!({"basic": {"email": "", "phone": "123"}}));
        assert!(out.contains("📱 123"));
        assert!(!out.contains("📧"));
    }

    #[test]
    fn test_education_block_layout() {
        let out = md(json!({
            "education": [{
                "school": "MIT",
                "major": "CS",
                "degree": "MS",
                "startDate": "2020-09-01T00:00:00Z",
                "endDate": "2022-06-01T00:00:00Z",
                "gpa": "4.0",
                "description": "<p>Systems &lt;track&gt;</p>"
            }]
        }));
        let expected = "# \n## \n\n\
            ## 🎓 Education\n\n\
            ### MIT | CS | MS\n\
            **Time**: 2020.09 - 2022.06\n\
            **GPA**: 4.0\n\
            Systems <track>\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_education_time_needs_both_dates() {
        let out = md(json!({"education": [{"school": "MIT", "startDate": "2020-09-01"}]}));
        assert!(!out.contains("**Time**"));
    }

    #[test]
    fn test_education_unparseable_dates_pass_through() {
        let out = md(json!({"education": [{"startDate": "Fall 2019", "endDate": "2021-05-01"}]}));
        assert!(out.contains("**Time**: Fall 2019 - 2021.05"));
    }

    #[test]
    fn test_experience_date_is_raw() {
        let out = md(json!({"experience": [{"company": "Acme", "position": "Dev", "date": "2020-01-01 ~ now"}]}));
        assert!(out.contains("### Acme | Dev\n**Time**: 2020-01-01 ~ now\n"));
    }

    #[test]
    fn test_skills_section() {
        let out = md(json!({"skillContent": "<p>Rust</p>"}));
        assert!(out.ends_with("## ⚡ Skills\n\nRust\n"));
    }

    #[test]
    fn test_section_heading_kept_when_all_entries_hidden() {
        let out = md(json!({"projects": [{"name": "x", "visible": false}]}));
        assert!(out.contains("## 🚀 Projects"));
        assert!(!out.contains("### x"));
    }

    #[test]
    fn test_no_projects_key_no_heading() {
        let out = md(json!({"experience": [{"company": "Acme"}]}));
        assert!(!out.contains("Projects"));
    }

    #[test]
    fn test_custom_item_layout() {
        let out = md(json!({
            "menuSections": [{"id": "custom-1", "title": "Awards", "enabled": true}],
            "customData": {"custom-1": [{
                "title": "Medal",
                "subtitle": "Society",
                "dateRange": "2019",
                "description": "<b>Gold</b>"
            }]}
        }));
        assert!(out.ends_with("## ➕ Awards\n\n### Medal\n**Society**\n**Time**: 2019\nGold\n"));
    }

    #[test]
    fn test_custom_section_without_items_skipped() {
        let out = md(json!({
            "menuSections": [{"id": "custom-1", "title": "Awards", "enabled": true}],
            "customData": {"custom-1": []}
        }));
        assert!(!out.contains("Awards"));
    }
}
