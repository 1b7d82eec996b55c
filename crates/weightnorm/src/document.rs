//! Whole-document load and save. The file is read fully into memory; output
//! is written through a temp file in the same directory and renamed over the
//! target, so a failed run never truncates the original.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};

pub fn load(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, doc: &Value) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(|source| write_error(path, source))?;
    write_indented(&mut tmp, doc).map_err(|source| write_error(path, source))?;
    tmp.persist(path).map_err(|e| write_error(path, e.error))?;
    Ok(())
}

/// 4-space indentation, trailing newline.
fn write_indented<W: Write>(mut writer: W, doc: &Value) -> io::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut writer, formatter);
    serde::Serialize::serialize(doc, &mut ser).map_err(io::Error::other)?;
    writer.write_all(b"\n")
}

fn write_error(path: &Path, source: io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source,
    }
}
