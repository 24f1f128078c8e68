//! Line scanning for declaration statements.

use crate::config::Config;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open `path` and return its declared identifier, if any.
pub fn identifier_from_file(path: &Path, config: &Config) -> io::Result<Option<String>> {
    let file = File::open(path)?;
    declared_identifier(BufReader::new(file), config)
}

/// Scan `reader` line by line and return the identifier on the first
/// declaration line.
///
/// The final line counts even without a trailing newline. Invalid UTF-8 is
/// decoded lossily.
pub fn declared_identifier<R: BufRead>(mut reader: R, config: &Config) -> io::Result<Option<String>> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        let code = strip_comment(&line, &config.comment_marker);
        if let Some(id) = parse_declaration(code, &config.declaration_keyword) {
            return Ok(Some(id.to_string()));
        }
    }
}

/// Drop everything from the first comment marker onward.
pub fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    match line.find(marker) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Match `<keyword><whitespace><identifier>` at the start of the line.
fn parse_declaration<'a>(code: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = code.strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next()
}
