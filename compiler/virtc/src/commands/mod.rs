//! Command handlers for the `virt` CLI.
//!
//! Each submodule implements one command. Shared helpers (`read_file`,
//! error rendering) live here in the module root.

mod debug;
mod run;

pub use debug::{describe_stmt, lex_file, parse_file, render_token};
pub use run::{eval_inline, run_file, run_source, RunError, RunOptions};

use virt_ir::Span;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// `path:line:col` for a span, when there is one.
pub fn location(path: &str, source: &str, span: Option<Span>) -> Option<String> {
    let (line, col) = span?.line_col(source);
    Some(format!("{path}:{line}:{col}"))
}

#[cfg(test)]
mod tests;
