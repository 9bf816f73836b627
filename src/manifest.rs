use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{self, Result, ResultExt};
use crate::loader::Loader;
use crate::template::{Generated, Template};

/// A template unit as listed in a manifest, with an optional context that
/// is merged over the shared one.
#[derive(Debug, Clone, Deserialize)]
pub struct Unit {
    #[serde(flatten)]
    pub template: Template,
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub context: Value,
    #[serde(default)]
    pub templates: Vec<Unit>,
}

fn merge(shared: &Value, local: Option<&Value>) -> Value {
    match (shared, local) {
        (Value::Object(shared), Some(Value::Object(local))) => {
            let mut map = shared.clone();
            for (k, v) in local {
                map.insert(k.clone(), v.clone());
            }
            Value::Object(map)
        }
        (_, Some(local)) => local.clone(),
        (Value::Null, None) => Value::Object(Map::new()),
        (shared, None) => shared.clone(),
    }
}

impl Manifest {
    pub fn parse(contents: &str) -> Result<Manifest> {
        serde_json::from_str(contents).map_err(|e| error::manifest_error(e))
    }

    /// Reads a manifest and returns it with a loader rooted at the
    /// manifest's directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<(Manifest, Loader)> {
        let path = path.as_ref();

        debug!("Opening manifest: {}", path.to_string_lossy());

        let contents = Loader::new().load(path)?;
        let manifest = Manifest::parse(&contents)
            .chain_err(|| error::error(&path.to_string_lossy()))?;

        let base = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();

        Ok((manifest, Loader::with_base(base)))
    }

    /// Runs every unit in order, stopping at the first failure.
    pub fn run(&self, loader: &Loader) -> Result<Vec<Generated>> {
        let mut generated = Vec::new();

        for unit in &self.templates {
            let mut template = unit.template.clone();
            let context = merge(&self.context, unit.context.as_ref());

            let g = template
                .generate(loader, &context)
                .chain_err(|| error::error(&template.name))?;

            info!(
                "{}: {} ({:?})",
                g.name,
                g.path.to_string_lossy(),
                g.write
            );

            generated.push(g);
        }

        Ok(generated)
    }
}
