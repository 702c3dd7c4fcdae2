//! HTML page templates.
//!
//! Templates are plain HTML files read from the templates directory on every
//! render, so edits show up without a restart. Placeholders use `{{ key }}`.
//! Values inserted with [`TemplateContext::insert`] are HTML-escaped; values
//! inserted with [`TemplateContext::insert_raw`] are trusted markup (used for
//! fragments that were themselves rendered from templates).

use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read template {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Template {name} uses unknown placeholder {key:?}")]
    UnknownPlaceholder { name: String, key: String },
    #[error("Template {name} has an unclosed placeholder")]
    Unclosed { name: String },
}

/// Values available to a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text value; it is escaped when rendered.
    pub fn insert(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.values.insert(key.into(), escape_html(value.as_ref()));
        self
    }

    /// Insert markup verbatim.
    pub fn insert_raw(mut self, key: impl Into<String>, html: impl Into<String>) -> Self {
        self.values.insert(key.into(), html.into());
        self
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

pub struct TemplateRenderer {
    dir: PathBuf,
}

impl TemplateRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read `name` from the templates directory.
    pub async fn load(&self, name: &str) -> Result<Template, TemplateError> {
        let source = tokio::fs::read_to_string(self.dir.join(name))
            .await
            .map_err(|source| TemplateError::Read {
                name: name.to_string(),
                source,
            })?;
        Ok(Template {
            name: name.to_string(),
            source,
        })
    }

    /// Read `name` and fill in its placeholders.
    pub async fn render(
        &self,
        name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.load(name).await?.render(context)
    }
}

/// A loaded template, reusable for repeated fragments.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    pub fn render(&self, context: &TemplateContext) -> Result<String, TemplateError> {
        fill(&self.name, &self.source, context)
    }
}

/// Single pass over the source; substituted values are never re-scanned.
fn fill(name: &str, source: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = after_open.find("}}").ok_or_else(|| TemplateError::Unclosed {
            name: name.to_string(),
        })?;

        let key = after_open[..end].trim();
        let value = context
            .get(key)
            .ok_or_else(|| TemplateError::UnknownPlaceholder {
                name: name.to_string(),
                key: key.to_string(),
            })?;
        out.push_str(value);
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
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
    fn fills_placeholders_with_escaped_values() {
        let context = TemplateContext::new()
            .insert("name", "<b>Thorin & co</b>")
            .insert("level", "3");
        let html = fill("t.html", "<p>{{ name }} ({{level}})</p>", &context).expect("fill");
        assert_eq!(html, "<p>&lt;b&gt;Thorin &amp; co&lt;/b&gt; (3)</p>");
    }

    #[test]
    fn raw_values_are_not_escaped() {
        let context = TemplateContext::new().insert_raw("cards", "<li>A</li>");
        let html = fill("t.html", "<ul>{{cards}}</ul>", &context).expect("fill");
        assert_eq!(html, "<ul><li>A</li></ul>");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let context = TemplateContext::new().insert_raw("a", "{{b}}");
        let html = fill("t.html", "{{a}}", &context).expect("fill");
        assert_eq!(html, "{{b}}");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = fill("t.html", "{{missing}}", &TemplateContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownPlaceholder { ref key, .. } if key == "missing"));
    }

    #[test]
    fn unclosed_placeholder_is_an_error() {
        let err = fill("t.html", "<p>{{name</p>", &TemplateContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::Unclosed { .. }));
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&#34;b&#39;c");
    }

    #[tokio::test]
    async fn renders_from_directory() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(temp_dir.path().join("home.html"), "<h1>{{title}}</h1>").expect("write");

        let renderer = TemplateRenderer::new(temp_dir.path());
        let html = renderer
            .render("home.html", &TemplateContext::new().insert("title", "Guild"))
            .await
            .expect("render");
        assert_eq!(html, "<h1>Guild</h1>");
    }

    #[tokio::test]
    async fn missing_template_is_a_read_error() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let renderer = TemplateRenderer::new(temp_dir.path());

        let err = renderer
            .render("nope.html", &TemplateContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
    }
}
