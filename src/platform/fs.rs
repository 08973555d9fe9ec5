// codesweep - platform/fs.rs
//
// Whole-file read and in-place rewrite.
// A file is always read completely before it is written, so reads and
// writes never interleave on the same handle.

use std::io;
use std::path::Path;

/// Full content of a file, decoded as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    /// Decoded text; invalid sequences are replaced with U+FFFD.
    pub text: String,
    /// The bytes were valid UTF-8, so `text` is exact.
    pub lossless: bool,
}

/// Read the full content of a file with lossy UTF-8 decoding.
///
/// Callers must not write `text` back when `lossless` is false.
pub fn read_file_lossy(path: &Path) -> io::Result<TextSnapshot> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => TextSnapshot {
            text,
            lossless: true,
        },
        Err(e) => TextSnapshot {
            text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            lossless: false,
        },
    })
}

/// Overwrite `path` with `content`, keeping its permission bits.
///
/// No backup is made.
pub fn rewrite_in_place(path: &Path, content: &str) -> io::Result<()> {
    let permissions = std::fs::metadata(path)?.permissions();
    std::fs::write(path, content)?;
    std::fs::set_permissions(path, permissions)?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "File rewritten");
    Ok(())
}
