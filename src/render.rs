use crate::error::Result;
use regex::Regex;

/// Minimal markdown-to-HTML converter.
///
/// Supports a fixed subset: headings levels 1-3, bold, italic, and
/// unordered list items, each replaced in that order, followed by an
/// unconditional newline-to-`<br>` conversion. The substitutions are
/// order-sensitive (h3 before h2 before h1, bold before italic) and
/// there is no nesting or escaping support. Conversion is pure: the
/// same input always yields the same output.
pub struct Renderer {
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bold: Regex,
    italic: Regex,
    list_item: Regex,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            h3: Regex::new(r"(?m)^### (.*)$")?,
            h2: Regex::new(r"(?m)^## (.*)$")?,
            h1: Regex::new(r"(?m)^# (.*)$")?,
            bold: Regex::new(r"\*\*(.*?)\*\*")?,
            italic: Regex::new(r"\*(.*?)\*")?,
            list_item: Regex::new(r"(?m)^- (.*)$")?,
        })
    }

    /// Convert markdown text to HTML markup
    pub fn to_html(&self, markdown: &str) -> String {
        let out = self.h3.replace_all(markdown, "<h3>$1</h3>");
        let out = self.h2.replace_all(&out, "<h2>$1</h2>");
        let out = self.h1.replace_all(&out, "<h1>$1</h1>");
        let out = self.bold.replace_all(&out, "<strong>$1</strong>");
        let out = self.italic.replace_all(&out, "<em>$1</em>");
        let out = self.list_item.replace_all(&out, "<li>$1</li>");
        out.replace('\n', "<br>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        Renderer::new().unwrap().to_html(input)
    }

    #[test]
    fn test_headings() {
        assert_eq!(render("# Title"), "<h1>Title</h1>");
        assert_eq!(render("## Section"), "<h2>Section</h2>");
        assert_eq!(render("### Sub"), "<h3>Sub</h3>");
    }

    #[test]
    fn test_heading_order_is_longest_marker_first() {
        // "### x" must not be eaten by the h1 or h2 patterns
        assert_eq!(render("### deep\n## mid\n# top"),
            "<h3>deep</h3><br><h2>mid</h2><br><h1>top</h1>");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(render("**big** win"), "<strong>big</strong> win");
        assert_eq!(render("a *subtle* point"), "a <em>subtle</em> point");
        // Bold runs before italic so ** is not consumed as two *
        assert_eq!(
            render("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            render("- first\n- second"),
            "<li>first</li><br><li>second</li>"
        );
    }

    #[test]
    fn test_newlines_always_become_breaks() {
        assert_eq!(render("line one\nline two"), "line one<br>line two");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render("nothing special here"), "nothing special here");
    }

    #[test]
    fn test_conversion_is_pure() {
        let renderer = Renderer::new().unwrap();
        let input = "# Recap\n**Shipped** *fast*\n- item";
        assert_eq!(renderer.to_html(input), renderer.to_html(input));
    }

    #[test]
    fn test_mixed_document() {
        let input = "## Summary\nShipped **search** and *fixed* bugs.\n- [ENG-1] Search\n- [ENG-2] Auth";
        let html = render(input);
        assert_eq!(
            html,
            "<h2>Summary</h2><br>Shipped <strong>search</strong> and <em>fixed</em> bugs.\
             <br><li>[ENG-1] Search</li><br><li>[ENG-2] Auth</li>"
        );
    }

    #[test]
    fn test_mid_line_hash_not_a_heading() {
        assert_eq!(render("issue #42 closed"), "issue #42 closed");
    }
}
