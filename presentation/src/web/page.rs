//! HTML rendering for the single-page UI
//!
//! Each action has its own form, so pressing Enter in a field submits that
//! field's action. Hidden inputs carry the other widgets' values, and the
//! handler renders the page again with everything echoed back.

use blogsmith_domain::{
    KeywordState, MAX_WORD_COUNT, MIN_WORD_COUNT, SessionKeywordList, WORD_COUNT_STEP, WordCount,
};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
h1 { margin-bottom: 0.25rem; }
h2.tagline { font-weight: 400; color: #52606d; margin-top: 0; }
section { border-top: 1px solid #e4e7eb; padding-top: 1rem; margin-top: 1.5rem; }
details { background: #f5f7fa; border-radius: 6px; padding: 0.75rem 1rem; }
summary { cursor: pointer; font-weight: 600; }
label { display: block; margin-top: 0.75rem; }
input[type=text] { width: 100%; padding: 0.4rem; box-sizing: border-box; }
input[type=range] { width: 100%; }
button { margin-top: 0.75rem; padding: 0.4rem 1rem; }
.keywords { margin-top: 0.5rem; }
.chip { display: inline-block; background: #d9e2ec; border-radius: 999px; padding: 0.15rem 0.7rem; margin: 0.15rem; }
.error { background: #ffe3e3; color: #8a1c1c; border-radius: 6px; padding: 0.6rem 1rem; margin-top: 1rem; }
pre.titles, .post-body { white-space: pre-wrap; background: #fff; border: 1px solid #e4e7eb; border-radius: 6px; padding: 0.75rem 1rem; }
"#;

/// Page region an error message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Titles,
    Blog,
}

/// A generated post ready for display.
#[derive(Debug, Clone)]
pub struct PostView {
    pub title: String,
    pub body: String,
}

/// Everything one page render needs.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub topic: String,
    pub title: String,
    pub word_count: WordCount,
    pub keyword: String,
    pub keywords: SessionKeywordList,
    pub titles: Option<Vec<String>>,
    pub post: Option<PostView>,
    pub error: Option<(Section, String)>,
}

impl Page {
    pub fn with_error(mut self, section: Section, message: impl Into<String>) -> Self {
        self.error = Some((section, message.into()));
        self
    }

    fn error_for(&self, section: Section) -> Option<&str> {
        match &self.error {
            Some((s, message)) if *s == section => Some(message),
            _ => None,
        }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<title>AI Blog Generator</title>\n");
        let _ = write!(html, "<style>{STYLE}</style>\n");
        html.push_str("</head>\n<body>\n");
        html.push_str("<h1>AI Blog Generator</h1>\n");
        html.push_str("<h2 class=\"tagline\">Create High-Quality Blog Content using AI</h2>\n");

        self.render_titles_section(&mut html);
        self.render_blog_section(&mut html);

        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_titles_section(&self, html: &mut String) {
        html.push_str("<section id=\"titles\">\n<h3>Title Generation</h3>\n");
        html.push_str("<form id=\"titles-form\" method=\"post\" action=\"/titles\">\n");
        html.push_str("<details open>\n<summary>Input the topic</summary>\n");
        let _ = write!(
            html,
            "<input type=\"text\" name=\"topic\" aria-label=\"Topic\" value=\"{}\">\n",
            escape_html(&self.topic)
        );
        hidden(html, "title", &self.title);
        hidden(html, "word_count", &self.word_count.to_string());
        html.push_str("<button type=\"submit\">Submit topic</button>\n");
        html.push_str("</details>\n</form>\n");

        if let Some(message) = self.error_for(Section::Titles) {
            render_error(html, message);
        }

        if let Some(titles) = &self.titles {
            let _ = write!(
                html,
                "<pre class=\"titles\">{}</pre>\n",
                escape_html(&titles.join("\n"))
            );
        }

        html.push_str("</section>\n");
    }

    fn render_blog_section(&self, html: &mut String) {
        let words = self.word_count.get();

        html.push_str("<section id=\"blog\">\n<h3>Blog Generation</h3>\n");
        html.push_str("<details open>\n<summary>Input the title</summary>\n");

        // Title and slider; submitted by "Generate Blog" below.
        html.push_str("<form id=\"blog-form\" method=\"post\" action=\"/generate\">\n");
        hidden(html, "topic", &self.topic);
        let _ = write!(
            html,
            "<input type=\"text\" name=\"title\" aria-label=\"Title\" value=\"{}\">\n",
            escape_html(&self.title)
        );
        let _ = write!(
            html,
            "<label for=\"word_count\">Number of Words: <output id=\"word_count_value\">{words}</output></label>\n\
             <input type=\"range\" id=\"word_count\" name=\"word_count\" min=\"{MIN_WORD_COUNT}\" max=\"{MAX_WORD_COUNT}\" step=\"{WORD_COUNT_STEP}\" value=\"{words}\" \
             oninput=\"document.getElementById('word_count_value').value = this.value\">\n"
        );
        html.push_str("</form>\n");

        html.push_str("<form id=\"keyword-form\" method=\"post\" action=\"/keywords\">\n");
        hidden(html, "topic", &self.topic);
        hidden(html, "title", &self.title);
        hidden(html, "word_count", &words.to_string());
        html.push_str("<label for=\"keyword\">Enter a keyword:</label>\n");
        let _ = write!(
            html,
            "<input type=\"text\" id=\"keyword\" name=\"keyword\" value=\"{}\">\n",
            escape_html(&self.keyword)
        );
        html.push_str("<button type=\"submit\">Add Keyword</button>\n");
        html.push_str("</form>\n");

        if self.keywords.state() == KeywordState::HasKeywords {
            html.push_str("<div class=\"keywords\">");
            for keyword in self.keywords.keywords() {
                let _ = write!(html, "<span class=\"chip\">{}</span>", escape_html(keyword));
            }
            html.push_str("</div>\n");
        }

        html.push_str("<button type=\"submit\" form=\"blog-form\">Generate Blog</button>\n");
        html.push_str("</details>\n");

        if let Some(message) = self.error_for(Section::Blog) {
            render_error(html, message);
        }

        if let Some(post) = &self.post {
            let _ = write!(
                html,
                "<article class=\"post\">\n<h3>{}</h3>\n<div class=\"post-body\">{}</div>\n</article>\n",
                escape_html(&post.title),
                escape_html(&post.body)
            );
        }

        html.push_str("</section>\n");
    }
}

fn hidden(html: &mut String, name: &str, value: &str) {
    let _ = write!(
        html,
        "<input type=\"hidden\" name=\"{name}\" value=\"{}\">\n",
        escape_html(value)
    );
}

fn render_error(html: &mut String, message: &str) {
    let _ = write!(
        html,
        "<div class=\"error\" role=\"alert\">{}</div>\n",
        escape_html(message)
    );
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_empty_page_has_all_widgets() {
        let html = Page::default().render();

        assert!(html.contains("<h1>AI Blog Generator</h1>"));
        assert!(html.contains("Create High-Quality Blog Content using AI"));
        assert!(html.contains("Title Generation"));
        assert!(html.contains("Submit topic"));
        assert!(html.contains("Blog Generation"));
        assert!(html.contains("Number of Words"));
        assert!(html.contains("Enter a keyword:"));
        assert!(html.contains("Add Keyword"));
        assert!(html.contains("Generate Blog"));
        assert!(html.contains(r#"min="100" max="2000" step="50" value="100""#));
        assert!(!html.contains("class=\"chip\""));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_form_values_echoed() {
        let page = Page {
            topic: "serverless".to_string(),
            title: "Cold \"Starts\"".to_string(),
            word_count: WordCount::new(750).unwrap(),
            ..Page::default()
        };
        let html = page.render();

        assert!(html.contains(r#"name="topic" aria-label="Topic" value="serverless""#));
        assert!(html.contains(r#"value="Cold &quot;Starts&quot;""#));
        assert!(html.contains(r#"value="750""#));
    }

    #[test]
    fn test_titles_rendered_as_one_block() {
        let page = Page {
            titles: Some(vec!["1. First".to_string(), "2. <Second>".to_string()]),
            ..Page::default()
        };
        let html = page.render();
        assert!(html.contains("<pre class=\"titles\">1. First\n2. &lt;Second&gt;</pre>"));
    }

    #[test]
    fn test_keyword_chips_in_order() {
        let mut keywords = SessionKeywordList::new();
        keywords.add_keyword("cloud");
        keywords.add_keyword("<faas>");
        let page = Page {
            keywords,
            ..Page::default()
        };
        let html = page.render();
        assert!(html.contains(
            "<span class=\"chip\">cloud</span><span class=\"chip\">&lt;faas&gt;</span>"
        ));
    }

    /// The `<form id="...">` element with that id, up to its closing tag.
    fn form_block<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html.find(&format!("<form id=\"{id}\"")).unwrap();
        let end = start + html[start..].find("</form>").unwrap();
        &html[start..end]
    }

    fn first_submit(block: &str) -> &str {
        let start = block.find("<button type=\"submit\"").unwrap();
        let end = start + block[start..].find("</button>").unwrap();
        &block[start..end]
    }

    #[test]
    fn test_enter_in_keyword_field_adds_keyword() {
        let html = Page::default().render();
        let form = form_block(&html, "keyword-form");

        assert!(form.contains(r#"action="/keywords""#));
        assert!(form.contains(r#"name="keyword""#));
        assert!(first_submit(form).ends_with("Add Keyword"));
        assert_eq!(form.matches("type=\"submit\"").count(), 1);
    }

    #[test]
    fn test_enter_in_topic_field_suggests_titles() {
        let html = Page::default().render();
        let form = form_block(&html, "titles-form");

        assert!(form.contains(r#"action="/titles""#));
        assert!(form.contains(r#"name="topic" aria-label="Topic""#));
        assert!(first_submit(form).ends_with("Submit topic"));
    }

    #[test]
    fn test_enter_in_title_field_generates_post() {
        let html = Page::default().render();
        let form = form_block(&html, "blog-form");

        assert!(form.contains(r#"action="/generate""#));
        assert!(form.contains(r#"name="title" aria-label="Title""#));
        assert!(form.contains(r#"name="word_count" min="100""#));
        assert!(!form.contains("type=\"submit\""));
        // Its only submit button sits outside the element but belongs to it.
        assert_eq!(html.matches(r#"form="blog-form""#).count(), 1);
        assert!(html.contains(r#"<button type="submit" form="blog-form">Generate Blog</button>"#));
    }

    #[test]
    fn test_hidden_fields_carry_other_widgets() {
        let page = Page {
            topic: "edge".to_string(),
            title: "Edge <Compute>".to_string(),
            word_count: WordCount::new(300).unwrap(),
            ..Page::default()
        };
        let html = page.render();

        let titles = form_block(&html, "titles-form");
        assert!(titles.contains(r#"<input type="hidden" name="title" value="Edge &lt;Compute&gt;">"#));
        assert!(titles.contains(r#"<input type="hidden" name="word_count" value="300">"#));

        let keyword = form_block(&html, "keyword-form");
        assert!(keyword.contains(r#"<input type="hidden" name="topic" value="edge">"#));
        assert!(keyword.contains(r#"<input type="hidden" name="title" value="Edge &lt;Compute&gt;">"#));
        assert!(keyword.contains(r#"<input type="hidden" name="word_count" value="300">"#));

        let blog = form_block(&html, "blog-form");
        assert!(blog.contains(r#"<input type="hidden" name="topic" value="edge">"#));
    }

    #[test]
    fn test_post_title_precedes_body() {
        let page = Page {
            post: Some(PostView {
                title: "Serverless".to_string(),
                body: "<script>alert(1)</script>".to_string(),
            }),
            ..Page::default()
        };
        let html = page.render();

        let heading = html.find("<h3>Serverless</h3>").unwrap();
        let body = html.find("&lt;script&gt;alert(1)&lt;/script&gt;").unwrap();
        assert!(heading < body);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_error_shown_in_its_section() {
        let html = Page::default()
            .with_error(Section::Titles, "Model unavailable: timed out")
            .render();

        let alert = html.find("role=\"alert\"").unwrap();
        let blog = html.find("id=\"blog\"").unwrap();
        assert!(alert < blog);
        assert!(html.contains("Model unavailable: timed out"));
    }
}
