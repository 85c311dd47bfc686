//! Built-in prompt templates for title suggestion and post drafting

use super::template::{PromptTemplate, TemplateError};

/// Name of the title-suggestion template.
pub const TITLE_SUGGESTION: &str = "title_suggestion";

/// Name of the blog-content template.
pub const BLOG_CONTENT: &str = "blog_content";

const TITLE_SUGGESTION_TEXT: &str = r#"You are an expert content writer specializing in creating engaging titles. Create compelling titles for a blog post on the topic: {topic}.

Requirements for the titles:
- Generate exactly 10 unique titles
- Each title should be 50-70 characters long
- Suggest creative and attention-grabbing titles for this blog post.

Consider these elements in your titles:
- Include relevant field-specific terms when appropriate
- Make them SEO-friendly and searchable
- Ensure they're clear and specific to the topic
- Target the appropriate audience level
- Create genuine interest or urgency when relevant
- Adapt style based on topic (professional for business, casual for lifestyle, etc.)

If the topic is technical:
- Include relevant technical terms
- Mention specific technologies or methodologies
- Consider adding skill level indicators (e.g., "Beginner's Guide", "Advanced Techniques")

Format each title on a new line, numbered from 1-10.
Only provide the titles - no explanations or additional text.
"#;

const BLOG_CONTENT_TEXT: &str = r#"You are an expert content writer creating an engaging blog post on: "{title}"

Content Requirements:
- Target word count: {blog_length} words
- Required keywords to incorporate naturally: {keywords}
- Reading level: Adapt to topic complexity while remaining accessible

Structure the blog post with these sections:
1. Introduction:
   - Start with an engaging hook relevant to the topic
   - Establish relevance and context
   - Preview the key points readers will learn
   - Set appropriate expectations for the content

2. Main Content:
   - Break down concepts into clear, digestible sections
   - Use examples and analogies appropriate to the field
   - Include practical applications or actionable insights
   - Address common questions or misconceptions
   - If technical topic:
     * Include relevant code snippets or technical examples
     * Explain technical concepts progressively
     * Provide practical implementation details
   - If non-technical topic:
     * Include relevant real-world examples
     * Provide practical applications
     * Use appropriate field-specific case studies

3. Supporting Content:
   - Each section should focus on one main concept
   - Use smooth transitions between ideas
   - Include relevant details and evidence
   - Provide step-by-step guidance where applicable
   - Add visual descriptions or data points when relevant

4. Conclusion:
   - Summarize key insights
   - Provide next steps or applications
   - Include relevant resources for further learning
   - End with an engaging call to action

Writing Style Guidelines:
- Adapt tone to match topic and audience:
  * Professional and precise for business/technical topics
  * Warm and approachable for lifestyle/personal topics
  * Academic and thorough for educational content
- Define specialized terms when first introduced
- Use clear, concise paragraphs
- Include formatting for better readability:
  * Bulleted lists for multiple points
  * Numbered lists for sequential steps
  * Headers for content organization
  * Block quotes for important statements
- If technical topic:
  * Format code snippets properly
  * Include comments in code examples
  * Explain technical concepts with analogies

Ensure the content is valuable, engaging, and appropriate for the target audience while maintaining accuracy and authority in the subject matter.
"#;

/// Store of named prompt templates.
///
/// Immutable once built; [`PromptLibrary::builtin`] holds the two
/// templates the generator needs.
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    templates: Vec<PromptTemplate>,
}

impl PromptLibrary {
    /// The title-suggestion and blog-content templates.
    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(Self {
            templates: vec![
                PromptTemplate::new(TITLE_SUGGESTION, TITLE_SUGGESTION_TEXT, ["topic"])?,
                PromptTemplate::new(
                    BLOG_CONTENT,
                    BLOG_CONTENT_TEXT,
                    ["title", "keywords", "blog_length"],
                )?,
            ],
        })
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<&PromptTemplate, TemplateError> {
        self.templates
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_are_valid() {
        let library = PromptLibrary::builtin().unwrap();
        assert_eq!(library.get(TITLE_SUGGESTION).unwrap().name(), TITLE_SUGGESTION);
        assert_eq!(library.get(BLOG_CONTENT).unwrap().name(), BLOG_CONTENT);
    }

    #[test]
    fn test_title_template_placeholders() {
        let library = PromptLibrary::builtin().unwrap();
        let template = library.get(TITLE_SUGGESTION).unwrap();
        assert_eq!(template.placeholders(), ["topic".to_string()]);
        assert!(template.text().contains("exactly 10 unique titles"));
        assert!(template.text().contains("50-70 characters"));
        assert!(template.text().contains("numbered from 1-10"));
    }

    #[test]
    fn test_content_template_placeholders() {
        let library = PromptLibrary::builtin().unwrap();
        let template = library.get(BLOG_CONTENT).unwrap();
        assert_eq!(
            template.placeholders(),
            ["title".to_string(), "keywords".to_string(), "blog_length".to_string()]
        );
        for section in ["Introduction", "Main Content", "Supporting Content", "Conclusion"] {
            assert!(template.text().contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_unknown_template() {
        let library = PromptLibrary::builtin().unwrap();
        assert_eq!(
            library.get("summary").unwrap_err(),
            TemplateError::UnknownTemplate("summary".to_string())
        );
    }
}
