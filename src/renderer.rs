//! Template rendering for apigen.
//! Wraps a MiniJinja environment with the naming helpers registered as
//! template functions and filters.

use crate::error::{Error, Result};
use crate::naming;
use crate::schema::ApiDefinition;
use cruet::Inflector;
use log::debug;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, Value};
use serde::Serialize;
use std::io::Write;

/// Values visible to every template.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    #[serde(rename = "Services")]
    pub services: &'a [String],
    #[serde(rename = "ApiDef")]
    pub api_def: &'a ApiDefinition,
}

impl<'a> RenderContext<'a> {
    pub fn new(services: &'a [String], api_def: &'a ApiDefinition) -> Self {
        Self { services, api_def }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template into a string.
    ///
    /// # Arguments
    /// * `name` - Name the template was registered under
    /// * `context` - Schema and service list
    fn render(&self, name: &str, context: &RenderContext) -> Result<String>;

    /// Renders the named template straight into `out`.
    fn render_to_write(
        &self,
        name: &str,
        context: &RenderContext,
        out: &mut dyn Write,
    ) -> Result<()>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the naming helpers registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_function("func_name", template_func_name);
        env.add_function("sub", template_sub);
        env.add_function("substr", template_substr);
        env.add_function("bytelen", naming::bytelen);
        env.add_function("tolower", naming::tolower);
        env.add_function("strtitle", naming::strtitle);
        env.add_filter("snake_case", snake_case);
        env.add_filter("pascal_case", pascal_case);
        env.add_filter("rust_ident", rust_ident);

        Self { env }
    }

    /// Parses `source` and registers it under `name`.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template has a syntax error
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        debug!("Parsing template '{}'", name);
        self.env
            .add_template_owned(name.to_string(), source.to_string())
            .map_err(|source| Error::TemplateError { template: name.to_string(), source })
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateError` if the template is unknown or references an
    ///   unknown function, filter or field
    /// * `Error::ExecutionError` for any other failure during rendering
    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(|e| classify(name, e))?;
        tmpl.render(context).map_err(|e| classify(name, e))
    }

    fn render_to_write(
        &self,
        name: &str,
        context: &RenderContext,
        out: &mut dyn Write,
    ) -> Result<()> {
        let tmpl = self.env.get_template(name).map_err(|e| classify(name, e))?;
        tmpl.render_to_write(context, out).map_err(|e| classify(name, e))?;
        Ok(())
    }
}

/// Splits MiniJinja failures into resolution errors and execution errors.
fn classify(template: &str, source: minijinja::Error) -> Error {
    let template = template.to_string();
    match source.kind() {
        ErrorKind::SyntaxError
        | ErrorKind::TemplateNotFound
        | ErrorKind::UnknownFunction
        | ErrorKind::UnknownFilter
        | ErrorKind::UnknownTest
        | ErrorKind::UnknownMethod
        | ErrorKind::UndefinedError => Error::TemplateError { template, source },
        _ => Error::ExecutionError { template, source },
    }
}

/// Converts a helper failure into a template runtime error.
fn helper_error(err: Error) -> minijinja::Error {
    minijinja::Error::new(ErrorKind::InvalidOperation, err.to_string())
}

fn template_func_name(endpoint: &Value) -> std::result::Result<String, minijinja::Error> {
    let method = endpoint_field(endpoint, "Method")?;
    let path = endpoint_field(endpoint, "Path")?;
    naming::func_name(&method, &path).map_err(helper_error)
}

fn endpoint_field(endpoint: &Value, field: &str) -> std::result::Result<String, minijinja::Error> {
    let value = endpoint.get_attr(field)?;
    value.as_str().map(str::to_string).ok_or_else(|| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("func_name expects an endpoint with a string {field}"),
        )
    })
}

fn template_sub(a: i64, b: i64) -> std::result::Result<i64, minijinja::Error> {
    naming::sub(a, b).map_err(helper_error)
}

fn template_substr(s: &str, start: i64, end: i64) -> std::result::Result<String, minijinja::Error> {
    naming::substr(s, start, end).map_err(helper_error)
}

fn rust_ident(value: String) -> String {
    naming::rust_ident(&value)
}

fn snake_case(value: String) -> String {
    value.to_snake_case()
}

fn pascal_case(value: String) -> String {
    value.to_pascal_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_inline(source: &str) -> Result<String> {
        let mut renderer = MiniJinjaRenderer::new();
        renderer.add_template("inline", source)?;
        let api = ApiDefinition::default();
        renderer.render("inline", &RenderContext::new(&[], &api))
    }

    #[test]
    fn test_trim_blocks() {
        let rendered = render_inline("{% for i in [1, 2] %}\n{{ i }}\n{% endfor %}\n").unwrap();
        assert_eq!(rendered, "1\n2\n");
    }

    #[test]
    fn test_no_auto_escape() {
        let rendered = render_inline("{{ '<&>' }}").unwrap();
        assert_eq!(rendered, "<&>");
    }

    #[test]
    fn test_casing_filters() {
        assert_eq!(render_inline("{{ 'api_keys'|pascal_case }}").unwrap(), "ApiKeys");
        assert_eq!(render_inline("{{ 'createdAt'|snake_case }}").unwrap(), "created_at");
        assert_eq!(render_inline("{{ 'type'|snake_case|rust_ident }}").unwrap(), "r#type");
    }
}
