//! Journal article rendering
//!
//! Uses pulldown-cmark to turn the embedded Markdown posts into article HTML.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render a journal article body
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: &'static str,
    /// Article title; a leading `# {title}` line is dropped since the page header shows it
    #[prop(optional)]
    title: Option<&'static str>,
) -> impl IntoView {
    let body = match title {
        Some(title) => strip_title(content, title),
        None => content,
    };
    let html = parse_markdown(body);

    view! { <div class="article-body" inner_html=html /> }
}

/// Drop a first-line `# {title}` heading
pub fn strip_title<'a>(content: &'a str, title: &str) -> &'a str {
    let trimmed = content.trim_start();
    match trimmed.split_once('\n') {
        Some((first, rest)) if first.trim_end() == format!("# {}", title) => rest.trim_start(),
        None if trimmed.trim_end() == format!("# {}", title) => "",
        _ => content,
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Parse markdown string to HTML
///
/// Raw HTML in the source is escaped, not passed through.
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();

    let mut in_code_block = false;
    let mut code_block_content = String::new();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html_output.push_str("<p class=\"article-paragraph\">"),
                Tag::Heading { level, .. } => {
                    let tag = heading_tag(level);
                    html_output.push_str(&format!("<{} class=\"article-{}\">", tag, tag));
                }
                Tag::BlockQuote(_) => html_output.push_str("<blockquote class=\"article-quote\">"),
                Tag::CodeBlock(_) => {
                    in_code_block = true;
                    code_block_content.clear();
                }
                Tag::List(Some(_)) => html_output.push_str("<ol class=\"article-list-ordered\">"),
                Tag::List(None) => html_output.push_str("<ul class=\"article-list\">"),
                Tag::Item => html_output.push_str("<li>"),
                Tag::Emphasis => html_output.push_str("<em>"),
                Tag::Strong => html_output.push_str("<strong class=\"article-strong\">"),
                Tag::Strikethrough => html_output.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    html_output.push_str(&format!(
                        "<a href=\"{}\" class=\"article-link\" target=\"_blank\" rel=\"noopener noreferrer\">",
                        escape_html(&dest_url)
                    ));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html_output.push_str("</p>"),
                TagEnd::Heading(level) => {
                    html_output.push_str(&format!("</{}>", heading_tag(level)));
                }
                TagEnd::BlockQuote(_) => html_output.push_str("</blockquote>"),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    html_output.push_str(&format!(
                        "<pre class=\"article-code\"><code>{}</code></pre>",
                        escape_html(&code_block_content)
                    ));
                }
                TagEnd::List(true) => html_output.push_str("</ol>"),
                TagEnd::List(false) => html_output.push_str("</ul>"),
                TagEnd::Item => html_output.push_str("</li>"),
                TagEnd::Emphasis => html_output.push_str("</em>"),
                TagEnd::Strong => html_output.push_str("</strong>"),
                TagEnd::Strikethrough => html_output.push_str("</del>"),
                TagEnd::Link => html_output.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    code_block_content.push_str(&text);
                } else {
                    html_output.push_str(&escape_html(&text));
                }
            }
            Event::Code(code) => {
                html_output.push_str(&format!("<code>{}</code>", escape_html(&code)));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                html_output.push_str(&escape_html(&html));
            }
            Event::SoftBreak => html_output.push(' '),
            Event::HardBreak => html_output.push_str("<br />"),
            Event::Rule => html_output.push_str("<hr class=\"article-rule\" />"),
            _ => {}
        }
    }

    html_output
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::POSTS;

    #[test]
    fn test_basic_paragraph() {
        let html = parse_markdown("Hello, world!");
        assert_eq!(html, "<p class=\"article-paragraph\">Hello, world!</p>");
    }

    #[test]
    fn test_bold_lead_in_list_item() {
        let html = parse_markdown("- **Generous white space** creates a sense of premium quality");
        assert!(html.contains("<ul class=\"article-list\">"));
        assert!(html.contains("<strong class=\"article-strong\">Generous white space</strong>"));
        assert!(html.contains(" creates a sense of premium quality</li>"));
    }

    #[test]
    fn test_ordered_list() {
        let html = parse_markdown("1. **Micro-interactions** that delight\n2. Loading states");
        assert!(html.starts_with("<ol class=\"article-list-ordered\">"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_heading_levels() {
        let html = parse_markdown("## Section\n\n### Subsection");
        assert!(html.contains("<h2 class=\"article-h2\">Section</h2>"));
        assert!(html.contains("<h3 class=\"article-h3\">Subsection</h3>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_link_opens_in_new_context() {
        let html = parse_markdown("[site](https://example.com?a=1&b=2)");
        assert!(html.contains("href=\"https://example.com?a=1&amp;b=2\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_strip_title() {
        assert_eq!(strip_title("# Hello\n\nBody", "Hello"), "Body");
        assert_eq!(strip_title("# Other\n\nBody", "Hello"), "# Other\n\nBody");
        assert_eq!(strip_title("# Hello", "Hello"), "");
    }

    #[test]
    fn test_every_post_renders_without_its_title_heading() {
        for post in &POSTS {
            let html = parse_markdown(strip_title(post.content, post.title));
            assert!(!html.contains("<h1"), "{} still renders its title", post.id);
            assert!(html.contains("<h2"), "{} has no sections", post.id);
        }
    }
}
