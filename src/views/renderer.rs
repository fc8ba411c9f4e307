//! View renderer
//!
//! Thin wrapper over Tera that renders a named template and wraps the
//! output in a named layout. The inner HTML is exposed to the layout as
//! the `content` variable.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;

pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    /// Load every template matching the glob, e.g. `templates/**/*.html`.
    pub fn from_glob(glob: &str) -> Result<Self, RenderError> {
        Ok(Self {
            tera: Tera::new(glob)?,
        })
    }

    /// Build a renderer from in-memory named templates, for tests.
    /// Template names are given without the `.html` suffix, matching
    /// `render`.
    #[allow(dead_code)]
    pub fn from_templates(templates: &[(&str, &str)]) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            templates
                .iter()
                .map(|(name, body)| (format!("{}.html", name), *body)),
        )?;
        Ok(Self { tera })
    }

    /// Render `{template}.html` with the serialized view, then render
    /// `{layout}.html` around it.
    pub fn render<T: Serialize>(
        &self,
        template: &str,
        view: &T,
        layout: &str,
    ) -> Result<String, RenderError> {
        let mut context = Context::from_serialize(view)?;
        let body = self.render_named(template, &context)?;
        context.insert("content", &body);
        self.render_named(layout, &context)
    }

    fn render_named(&self, name: &str, context: &Context) -> Result<String, RenderError> {
        let file = format!("{}.html", name);
        if !self.tera.get_template_names().any(|n| n == file) {
            return Err(RenderError::NotFound(name.to_string()));
        }
        Ok(self.tera.render(&file, context)?)
    }
}
