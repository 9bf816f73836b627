use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{self, Result};
use crate::lang;
use crate::loader::{Loader, WriteResult};
use crate::render;

/// One named code generation task: where the template comes from, where the
/// output goes, and the buffers the pipeline fills in between.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Template {
    pub name: String,
    pub source: String,
    pub target_dir: String,
    pub filename: String,
    /// Overwrite the target even if it already exists. When unset, an
    /// existing target is left untouched.
    ///
    /// Note the name reads inverted: `true` means "write anyway".
    pub skip_exists: bool,
    pub skip_format: bool,
    /// Key of the formatter in the `lang` registry.
    pub lang: String,
    #[serde(skip)]
    raw_template: String,
    #[serde(skip)]
    raw_result: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            name: String::new(),
            source: String::new(),
            target_dir: String::new(),
            filename: String::new(),
            skip_exists: false,
            skip_format: false,
            lang: "rust".into(),
            raw_template: String::new(),
            raw_result: String::new(),
        }
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub name: String,
    pub path: PathBuf,
    pub contents: String,
    pub write: WriteResult,
}

impl Template {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn set_raw_template<S: Into<String>>(&mut self, raw: S) -> &str {
        self.raw_template = raw.into();
        &self.raw_template
    }

    pub fn raw_result(&self) -> &str {
        &self.raw_result
    }

    pub fn target(&self) -> PathBuf {
        Path::new(&self.target_dir).join(&self.filename)
    }

    pub fn load(&mut self, loader: &Loader) -> Result<&str> {
        if self.raw_template.is_empty() {
            if self.source.is_empty() {
                return Err(error::empty_template(&self.name));
            }

            debug!("Loading template {} from {}", self.name, self.source);

            self.raw_template = loader.load(&self.source)?;
        }

        Ok(&self.raw_template)
    }

    pub fn render_raw<T: Serialize>(&mut self, loader: &Loader, context: &T) -> Result<&str> {
        self.raw_result.clear();

        self.load(loader)?;

        debug!("Rendering template {}", self.name);

        self.raw_result = render::render(&self.name, &self.raw_template, context)?;

        trace!("Rendered {}:\n{}", self.name, self.raw_result);

        Ok(&self.raw_result)
    }

    pub fn format(&mut self) -> Result<&str> {
        if self.skip_format {
            return Ok(&self.raw_result);
        }

        debug!("Formatting template {} as {}", self.name, self.lang);

        let formatter = lang::get_formatter(&self.lang)?;

        self.raw_result = formatter.format(&self.name, &self.raw_result)?;

        Ok(&self.raw_result)
    }

    fn write(&self, loader: &Loader) -> Result<WriteResult> {
        if self.filename.is_empty() {
            return Ok(WriteResult::Skipped);
        }

        let target = self.target();

        if !self.skip_exists && loader.exists(&target) {
            debug!("Target exists, skipped: {}", target.to_string_lossy());
            return Ok(WriteResult::Skipped);
        }

        loader.store(&target, &self.raw_result)?;

        Ok(WriteResult::Written)
    }

    /// Runs load, render, format and write, resolving paths with `loader`.
    pub fn generate<T: Serialize>(&mut self, loader: &Loader, context: &T) -> Result<Generated> {
        self.render_raw(loader, context)?;
        self.format()?;

        let write = self.write(loader)?;

        Ok(Generated {
            name: self.name.clone(),
            path: loader.resolve(self.target()),
            contents: self.raw_result.clone(),
            write,
        })
    }

    /// Runs the whole pipeline against the working directory and returns
    /// the final text, whether or not it was written.
    pub fn render<T: Serialize>(&mut self, context: &T) -> Result<String> {
        self.generate(&Loader::new(), context).map(|g| g.contents)
    }
}
