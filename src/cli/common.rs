//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};

use anyhow::Result;

/// Expand a single `-` argument into lines read from stdin.
pub fn collect_inputs(args: &[String]) -> Result<Vec<String>> {
    if args.len() == 1 && args[0] == "-" {
        read_lines_from_stdin(io::stdin().lock())
    } else {
        Ok(args.to_vec())
    }
}

/// Read non-empty lines, one input per line.
///
/// Only the line terminator is removed: surrounding spaces are part of a
/// file name and change its slug.
pub fn read_lines_from_stdin(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
