use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error;
use crate::Result;

/// Canonicalizes rendered text as source code of one language.
pub trait Formatter {
    /// `name` identifies the template unit in error messages.
    fn format(&self, name: &str, source: &str) -> Result<String>;
}

mod null;
mod rust;

pub use self::null::NullFormatter;
pub use self::rust::RustFormatter;

type Fmt = Arc<dyn Formatter + Send + Sync>;
type FmtTable = HashMap<String, Fmt>;

lazy_static! {
    pub static ref FORMATTERS: Mutex<FmtTable> = {
        let mut map = FmtTable::new();

        map.insert("null".into(), Arc::new(NullFormatter) as Fmt);
        map.insert("rust".into(), Arc::new(RustFormatter) as Fmt);

        Mutex::new(map)
    };
}

fn table() -> MutexGuard<'static, FmtTable> {
    FORMATTERS.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn register_formatter<T: Formatter + Send + Sync + 'static>(key: &str, fmt: T) {
    debug!("Register formatter: {}", key);

    table().insert(key.into(), Arc::new(fmt));
}

pub fn get_formatter(key: &str) -> Result<Fmt> {
    table()
        .get(key)
        .cloned()
        .ok_or_else(|| error::formatter_not_found(key))
}
