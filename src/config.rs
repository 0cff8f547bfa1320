//! Generator configuration.
//! Holds the input path, the service list and the ordered generation tasks.
//! Configuration can come from an `apigen.{json,yml,yaml}` file in the project
//! root; anything it leaves out falls back to the built-in defaults.

use crate::constants::{CONFIG_FILES, DEFAULT_INPUT, DEFAULT_SERVICES, DEFAULT_TASKS};
use crate::error::{Error, Result};
use crate::formatter::formatter_for;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One unit of work: render `template` into `output`, optionally formatting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationTask {
    /// Template file, relative to the project root
    pub template: PathBuf,
    /// Output file, relative to the project root
    pub output: PathBuf,
    /// Whether to pass the output through the formatter for its language
    #[serde(default)]
    pub format: bool,
}

impl GenerationTask {
    pub fn new<T: Into<PathBuf>, O: Into<PathBuf>>(template: T, output: O, format: bool) -> Self {
        Self { template: template.into(), output: output.into(), format }
    }

    /// Name the task's template is registered under in the renderer.
    pub fn template_name(&self) -> String {
        self.template.display().to_string()
    }

    /// Checks that a formatter exists when formatting is requested.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `format` is set for an output with no formatter
    pub fn validate(&self) -> Result<()> {
        if self.format && formatter_for(&self.output).is_none() {
            return Err(Error::ConfigError(format!(
                "no source formatter available for '{}'",
                self.output.display()
            )));
        }
        Ok(())
    }
}

/// Everything the generator needs for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// JSON API definition, relative to the project root
    pub input: PathBuf,
    /// Known service names passed to every template
    pub services: Vec<String>,
    /// Tasks, executed in order
    pub tasks: Vec<GenerationTask>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
            tasks: DEFAULT_TASKS
                .iter()
                .map(|(template, output, format)| GenerationTask::new(*template, *output, *format))
                .collect(),
        }
    }
}

/// Finds the first configuration file present in `root`.
pub fn find_config_file<P: AsRef<Path>>(root: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| root.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<GeneratorConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the generator configuration.
///
/// Uses `explicit` when given, otherwise the first of [`CONFIG_FILES`] found
/// in `root`, otherwise [`GeneratorConfig::default`].
///
/// # Errors
/// * `Error::IoError` if the chosen file cannot be read
/// * `Error::ConfigError` if it cannot be parsed
pub fn load_config<P: AsRef<Path>>(root: P, explicit: Option<&Path>) -> Result<GeneratorConfig> {
    let root = root.as_ref();
    let path = match explicit {
        Some(path) => Some(root.join(path)),
        None => find_config_file(root, &CONFIG_FILES),
    };

    let Some(path) = path else {
        debug!("No configuration file found in {}, using defaults", root.display());
        return Ok(GeneratorConfig::default());
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    parse_config(&content)
}
