//! Generation driver.
//! Loads the API definition once, then renders, formats and writes every task
//! in order. The first failure aborts the run; outputs written by earlier
//! tasks are left in place.

use crate::config::{GenerationTask, GeneratorConfig};
use crate::error::{Error, Result};
use crate::formatter::formatter_for;
use crate::renderer::{MiniJinjaRenderer, RenderContext, TemplateRenderer};
use crate::schema::{load_api_definition, ApiDefinition};
use crate::writer::{stream_output, write_output};
use log::debug;
use std::path::{Path, PathBuf};

/// Runs the configured generation tasks against one project root.
pub struct Generator {
    root: PathBuf,
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator resolving every relative path against `root`.
    pub fn new<P: Into<PathBuf>>(root: P, config: GeneratorConfig) -> Self {
        Self { root: root.into(), config }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Executes the full pipeline and returns the written output paths.
    ///
    /// # Flow
    /// 1. Validates every task
    /// 2. Loads the API definition
    /// 3. Parses every template
    /// 4. Renders, formats and writes each task in order
    ///
    /// Steps 1-3 finish before any output is touched, so bad input or a
    /// broken template never leaves a partially regenerated tree.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        for task in &self.config.tasks {
            task.validate()?;
        }

        let api = load_api_definition(self.resolve(&self.config.input))?;
        let renderer = self.load_templates()?;

        let mut written = Vec::with_capacity(self.config.tasks.len());
        for (index, task) in self.config.tasks.iter().enumerate() {
            let output = self.run_task(&renderer, &api, task).map_err(|source| Error::TaskError {
                index,
                output: task.output.clone(),
                source: Box::new(source),
            })?;
            written.push(output);
        }
        Ok(written)
    }

    /// Reads and parses the template of every task.
    fn load_templates(&self) -> Result<MiniJinjaRenderer> {
        let mut renderer = MiniJinjaRenderer::new();
        for task in &self.config.tasks {
            let name = task.template_name();
            let path = self.resolve(&task.template);
            let source = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            renderer.add_template(&name, &source)?;
        }
        Ok(renderer)
    }

    fn run_task(
        &self,
        renderer: &dyn TemplateRenderer,
        api: &ApiDefinition,
        task: &GenerationTask,
    ) -> Result<PathBuf> {
        let name = task.template_name();
        let output = self.resolve(&task.output);
        let context = RenderContext::new(&self.config.services, api);

        match task.format.then(|| formatter_for(&task.output)).flatten() {
            Some(formatter) => {
                debug!("Rendering {} into memory for formatting", name);
                let rendered = renderer.render(&name, &context)?;
                let formatted = formatter.format(&rendered, &task.output)?;
                write_output(&output, &formatted)?;
            }
            None => {
                debug!("Streaming {} into {}", name, output.display());
                stream_output(&output, |out| renderer.render_to_write(&name, &context, out))?;
            }
        }
        Ok(output)
    }
}
