extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate syn;
extern crate tera;

pub mod error;
pub mod lang;
mod loader;
mod manifest;
mod render;
mod template;

use std::path::Path;

pub use self::error::{Error, ErrorKind, Result, ResultExt};
pub use self::loader::{Loader, WriteResult};
pub use self::manifest::{Manifest, Unit};
pub use self::template::{Generated, Template};

/// Runs every template unit listed in the manifest at `path`.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<Vec<Generated>> {
    let path = path.as_ref();
    let (manifest, loader) = Manifest::open(path)?;

    manifest
        .run(&loader)
        .chain_err(|| error::error(&path.to_string_lossy()))
}
