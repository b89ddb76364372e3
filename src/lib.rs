#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Returns the text of a 1-based line of `source`, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.lines().nth(index)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 5), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_render_error() {
        let source = "var x: int = 1;\n    set x 2;\n";
        let error = Error::new(
            ErrorImpl::MissingToken {
                expected: "assignment operator '='".to_string(),
                context: "after x".to_string(),
                found: "2".to_string(),
            },
            2,
        );

        let rendered = super::render_error(&error, std::path::Path::new("main.ml"), source);

        assert_eq!(
            rendered,
            "Error: MissingToken\n\
             Expected assignment operator '=' after x, found '2' on line 2.\n\
             -> main.ml\n  \
               |\n\
             2 | set x 2;\n"
        );
    }
}

/// Formats a syntax error against the source it was raised in.
///
/// ```text
/// Error: MissingToken (did you miss a semicolon?)
/// Expected ';' after print statement, found 'EOF' on line 20.
/// -> final.ml
///    |
/// 20 | print x
/// ```
pub fn render_error(error: &Error, file: &Path, source: &str) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("{}\n", error));
    rendered.push_str(&format!("-> {}\n", file.to_string_lossy()));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line(source, error.get_line()) {
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }

    rendered
}
