//! Line sorting command.

use super::CommandError;
use std::io::{BufRead, Write};
use strbuf_core::{ascending, descending, read_line, Buffer};
use tracing::{debug, info};

/// Sorts standard input line by line and prints the result.
pub fn run(descending_order: bool) -> Result<(), CommandError> {
    let stdin = std::io::stdin();
    let lines = sort_lines(&mut stdin.lock(), descending_order)?;
    info!("Sorted {} line(s)", lines.len());

    let mut stdout = std::io::stdout().lock();
    for line in &lines {
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Reads all lines from `reader` and sorts them.
pub fn sort_lines<R: BufRead>(
    reader: &mut R,
    descending_order: bool,
) -> Result<Vec<Buffer>, CommandError> {
    let mut lines = Vec::new();
    let mut line = Buffer::new();
    while read_line(reader, &mut line)? {
        debug!(len = line.len(), "read line");
        lines.push(line.take());
    }

    if descending_order {
        lines.sort_by(descending);
    } else {
        lines.sort_by(ascending);
    }
    Ok(lines)
}
