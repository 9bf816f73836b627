use std::error::Error as StdError;

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{self, Result};

fn tera() -> Tera {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera
}

/// Flattens a tera error and its sources into one line; the top-level
/// message alone rarely says what went wrong.
fn describe(e: &tera::Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();

    while let Some(s) = source {
        msg.push_str(": ");
        msg.push_str(&s.to_string());
        source = s.source();
    }

    msg
}

pub fn render<T: Serialize>(name: &str, template: &str, context: &T) -> Result<String> {
    let key = if name.is_empty() { "raw" } else { name };
    let mut tera = tera();

    tera.add_raw_template(key, template)
        .map_err(|e| error::template_syntax(name, describe(&e)))?;

    let context =
        Context::from_serialize(context).map_err(|e| error::render_error(name, describe(&e)))?;

    tera.render(key, &context)
        .map_err(|e| error::render_error(name, describe(&e)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_render_substitutes_fields() {
        let out = render("t", "struct {{ name }} {}", &json!({ "name": "A" })).unwrap();
        assert_eq!(out, "struct A {}");
    }

    #[test]
    fn test_render_accepts_any_map() {
        let mut ctx = HashMap::new();
        ctx.insert("name", "B");

        let out = render("t", "struct {{ name }};", &ctx).unwrap();
        assert_eq!(out, "struct B;");
    }

    #[test]
    fn test_render_does_not_escape() {
        let out = render("t.html", "{{ ty }}", &json!({ "ty": "Vec<&'a str>" })).unwrap();
        assert_eq!(out, "Vec<&'a str>");
    }

    #[test]
    fn test_unterminated_expression() {
        let err = render("t", "struct {{ name", &json!({ "name": "A" })).unwrap_err();
        match err.kind() {
            ErrorKind::TemplateSyntax(name, _) => assert_eq!(name, "t"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_field() {
        let err = render("t", "struct {{ name }} {}", &json!({ "other": "A" })).unwrap_err();
        match err.kind() {
            ErrorKind::RenderError(_, msg) => assert!(msg.contains("name"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_context_must_be_a_map() {
        let err = render("t", "plain", &json!("scalar")).unwrap_err();
        match err.kind() {
            ErrorKind::RenderError(..) => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
