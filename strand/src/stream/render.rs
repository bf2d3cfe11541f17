use std::fmt::{self, Write};

use super::core::{Element, Stream};

/// How a stream is rendered as text.
///
/// Rendering only shows what has already been computed: as soon as it runs
/// into an element or tail that hasn't been forced it writes the unknown
/// marker and stops. The default renders `{0, 1, ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    open: String,
    close: String,
    separator: String,
    unknown: String,
    limit: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            open: "{".to_string(),
            close: "}".to_string(),
            separator: ", ".to_string(),
            unknown: "...".to_string(),
            limit: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strings written before and after the elements.
    pub fn delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Set the string written between elements.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the marker written in place of anything not yet computed.
    pub fn unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = unknown.into();
        self
    }

    /// Render at most `limit` elements, writing the unknown marker if more
    /// have been computed.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn render<T, W>(
    stream: &Stream<T>,
    options: &RenderOptions,
    out: &mut W,
    mut write_item: impl FnMut(&mut W, &T) -> fmt::Result,
) -> fmt::Result
where
    T: Element,
    W: Write,
{
    out.write_str(&options.open)?;
    let mut current = stream.clone();
    let mut rendered = 0;
    loop {
        let separator = if rendered > 0 { options.separator.as_str() } else { "" };
        if !current.head_is_forced() {
            out.write_str(separator)?;
            out.write_str(&options.unknown)?;
            break;
        }
        let Some(head) = current.head() else {
            break;
        };
        if options.limit == Some(rendered) {
            out.write_str(separator)?;
            out.write_str(&options.unknown)?;
            break;
        }
        out.write_str(separator)?;
        write_item(out, &head)?;
        rendered += 1;
        if !current.tail_is_forced() {
            out.write_str(&options.separator)?;
            out.write_str(&options.unknown)?;
            break;
        }
        current = current.tail();
    }
    out.write_str(&options.close)
}

impl<T: Element + fmt::Display> Stream<T> {
    /// Render the computed prefix of the stream. Never forces anything.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the computed prefix of the stream using `options`.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = render(self, options, &mut out, |out, item| write!(out, "{}", item));
        out
    }
}

impl<T: Element + fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, &RenderOptions::default(), f, |f, item| write!(f, "{}", item))
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stream")?;
        render(self, &RenderOptions::default(), f, |f, item| write!(f, "{:?}", item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_forced() {
        assert_eq!(Stream::from(vec![0, 1, 2]).render(), "{0, 1, 2}");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Stream::<i32>::empty().render(), "{}");
    }

    #[test]
    fn test_render_unforced_head() {
        let stream = Stream::from(vec![1, 2]).map(|x| x + 1);
        assert_eq!(stream.render(), "{...}");
        stream.head();
        assert_eq!(stream.render(), "{2, ...}");
    }

    #[test]
    fn test_render_does_not_force() {
        let stream = Stream::starting_at(0).map(|x| x * 3);
        stream.render();
        assert!(!stream.head_is_forced());
    }

    #[test]
    fn test_render_with_options() {
        let options = RenderOptions::new()
            .delimiters("[", "]")
            .separator("; ")
            .unknown("…")
            .limit(2);
        assert_eq!(Stream::from(vec![1, 2, 3]).render_with(&options), "[1; 2; …]");
        assert_eq!(Stream::from(vec![1, 2]).render_with(&options), "[1; 2]");
    }

    #[test]
    fn test_debug() {
        let stream = Stream::from(vec!["a"]);
        assert_eq!(format!("{:?}", stream), "Stream{\"a\"}");
    }
}
