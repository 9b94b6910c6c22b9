//! Writing result links to a file or standard output.
//!
//! Output is one URL per line. Files are opened for appending and created
//! when missing, so repeated runs accumulate into the same file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open `path` for appending, creating it if it does not exist.
pub fn open_output(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Write each result on its own newline-terminated line, then flush.
pub fn write_results<W: Write>(results: &[String], writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for url in results {
        writeln!(writer, "{url}")?;
    }
    writer.flush()
}
