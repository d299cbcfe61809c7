//! Small append-only markup writer used by the form generator

use std::borrow::Cow;

/// Escape HTML special characters
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// String builder for tags and attributes.
///
/// Every interpolated value goes through [`Markup::text`] or [`Markup::attr`],
/// which escape when the writer was created with `escape = true`.
pub struct Markup {
    buf: String,
    escape: bool,
}

impl Markup {
    pub fn new(escape: bool) -> Self {
        Self {
            buf: String::new(),
            escape,
        }
    }

    pub fn with_capacity(capacity: usize, escape: bool) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            escape,
        }
    }

    fn push_value(&mut self, value: &str) {
        if self.escape {
            self.buf.push_str(&escape_html(value));
        } else {
            self.buf.push_str(value);
        }
    }

    /// Append trusted markup verbatim
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Append element content
    pub fn text(&mut self, value: &str) -> &mut Self {
        self.push_value(value);
        self
    }

    /// Start an opening tag: `<tag`
    pub fn open(&mut self, tag: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self
    }

    /// ` name="value"`
    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.push_value(value);
        self.buf.push('"');
        self
    }

    pub fn opt_attr(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.attr(name, value);
        }
        self
    }

    /// Boolean attribute such as ` required`
    pub fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.buf.push(' ');
            self.buf.push_str(name);
        }
        self
    }

    /// Finish an opening tag: `>`
    pub fn end(&mut self) -> &mut Self {
        self.buf.push('>');
        self
    }

    /// Finish a void element: ` />`
    pub fn self_close(&mut self) -> &mut Self {
        self.buf.push_str(" />");
        self
    }

    /// `</tag>`
    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
