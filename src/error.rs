error_chain! {
    errors {
        Error(path: String) {
            description("generate error")
                display("{}", path)
        }

        FileError(e: String) {
            description("i/o error")
                display("{}", e)
        }

        EmptyTemplate(name: String) {
            description("empty template")
                display("template `{}` has neither raw data nor a source file", name)
        }

        TemplateSyntax(name: String, e: String) {
            description("template syntax error")
                display("template `{}`: syntax error: {}", name, e)
        }

        RenderError(name: String, e: String) {
            description("render error")
                display("template `{}`: render error: {}", name, e)
        }

        FormatSyntax(name: String, e: String) {
            description("format error")
                display("template `{}`: rendered output is not valid source: {}", name, e)
        }

        FormatterNotFound(lang: String) {
            description("formatter not found")
                display("formatter not found: {}", lang)
        }

        ManifestError(e: String) {
            description("manifest error")
                display("{}", e)
        }
    }
}

pub fn error(path: &str) -> Error {
    ErrorKind::Error(path.to_string()).into()
}

pub fn file_error<T: ToString>(e: T) -> Error {
    ErrorKind::FileError(e.to_string()).into()
}

pub fn empty_template(name: &str) -> Error {
    ErrorKind::EmptyTemplate(name.to_string()).into()
}

pub fn template_syntax<T: ToString>(name: &str, e: T) -> Error {
    ErrorKind::TemplateSyntax(name.to_string(), e.to_string()).into()
}

pub fn render_error<T: ToString>(name: &str, e: T) -> Error {
    ErrorKind::RenderError(name.to_string(), e.to_string()).into()
}

pub fn format_syntax<T: ToString>(name: &str, e: T) -> Error {
    ErrorKind::FormatSyntax(name.to_string(), e.to_string()).into()
}

pub fn formatter_not_found(lang: &str) -> Error {
    ErrorKind::FormatterNotFound(lang.to_string()).into()
}

pub fn manifest_error<T: ToString>(e: T) -> Error {
    ErrorKind::ManifestError(e.to_string()).into()
}
