//! Small helpers for assembling markup strings

use std::borrow::Cow;
use std::fmt::Write;

/// Accumulates a markup fragment, escaping attribute values on request.
pub(crate) struct Markup {
    html: String,
    escape: bool,
}

impl Markup {
    pub(crate) fn new(escape: bool) -> Self {
        Self {
            html: String::new(),
            escape,
        }
    }

    /// Append literal markup.
    pub(crate) fn raw(&mut self, fragment: &str) -> &mut Self {
        self.html.push_str(fragment);
        self
    }

    /// Append ` name="value"`, escaping the value when enabled.
    pub(crate) fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        let value = self.value(value);
        // Writing into a String cannot fail.
        let _ = write!(self.html, " {}=\"{}\"", name, value);
        self
    }

    /// Append ` name="value"` for a numeric value.
    pub(crate) fn num_attr(&mut self, name: &str, value: u32) -> &mut Self {
        let _ = write!(self.html, " {}=\"{}\"", name, value);
        self
    }

    /// Append a `<source>` element for every URL, in order.
    pub(crate) fn sources(&mut self, sources: &[String], mime: Option<&str>) -> &mut Self {
        for src in sources {
            self.raw("<source").attr("src", src);
            if let Some(mime) = mime {
                self.attr("type", mime);
            }
            self.raw(" />");
        }
        self
    }

    pub(crate) fn finish(self) -> String {
        self.html
    }

    fn value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            Cow::Owned(htmlescape::encode_minimal(value))
        } else {
            Cow::Borrowed(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_escaping() {
        let mut markup = Markup::new(true);
        markup.raw("<a").attr("href", "http://x/?a=1&b=\"2\"").raw(">");
        assert_eq!(markup.finish(), "<a href=\"http://x/?a=1&amp;b=&quot;2&quot;\">");
    }

    #[test]
    fn test_attr_raw() {
        let mut markup = Markup::new(false);
        markup.raw("<a").attr("href", "http://x/?a=1&b=2").raw(">");
        assert_eq!(markup.finish(), "<a href=\"http://x/?a=1&b=2\">");
    }

    #[test]
    fn test_sources_keep_order_and_duplicates() {
        let sources = vec!["b.mp4".to_string(), "a.mp4".to_string(), "b.mp4".to_string()];
        let mut markup = Markup::new(true);
        markup.sources(&sources, None);
        assert_eq!(
            markup.finish(),
            "<source src=\"b.mp4\" /><source src=\"a.mp4\" /><source src=\"b.mp4\" />"
        );
    }

    #[test]
    fn test_sources_with_mime() {
        let mut markup = Markup::new(true);
        markup.sources(&["a.webm".to_string()], Some("video/mp4"));
        assert_eq!(markup.finish(), "<source src=\"a.webm\" type=\"video/mp4\" />");
    }
}
