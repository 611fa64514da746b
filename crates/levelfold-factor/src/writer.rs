//! JSON document writer.

use std::fs;
use std::path::{Path, PathBuf};

use levelfold_core::config::ExportConfig;
use levelfold_core::constants::{JSON_EXTENSION, MINIFIED_EXTENSION};
use levelfold_core::errors::ExportError;
use levelfold_core::export_span;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use tracing::info;

/// Writes named documents as `<dir>/<name>.json`, plus a compact
/// `<dir>/<name>.min.json` when configured.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_dir: PathBuf,
    pretty: bool,
    indent: usize,
    write_minified: bool,
}

impl JsonWriter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            output_dir: PathBuf::from(&config.output_dir),
            pretty: config.pretty,
            indent: config.indent,
            write_minified: config.write_minified,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `document` under `name`. Returns the paths written.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        name: &str,
        document: &T,
    ) -> Result<Vec<PathBuf>, ExportError> {
        let span = export_span!(name);
        let _enter = span.enter();

        fs::create_dir_all(&self.output_dir).map_err(|e| io_error(&self.output_dir, e))?;

        let mut written = Vec::with_capacity(2);

        let main_path = self.output_dir.join(format!("{name}.{JSON_EXTENSION}"));
        let main = if self.pretty {
            self.to_pretty(document)?
        } else {
            to_compact(document)?
        };
        write_file(&main_path, &main)?;
        written.push(main_path);

        if self.write_minified {
            let min_path = self.output_dir.join(format!("{name}.{MINIFIED_EXTENSION}"));
            write_file(&min_path, &to_compact(document)?)?;
            written.push(min_path);
        }

        info!(files = written.len(), dir = %self.output_dir.display(), "document written");
        Ok(written)
    }

    fn to_pretty<T: Serialize + ?Sized>(&self, document: &T) -> Result<Vec<u8>, ExportError> {
        let indent = vec![b' '; self.indent];
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        document.serialize(&mut ser).map_err(serialize_error)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

fn to_compact<T: Serialize + ?Sized>(document: &T) -> Result<Vec<u8>, ExportError> {
    serde_json::to_vec(document).map_err(serialize_error)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn serialize_error(e: serde_json::Error) -> ExportError {
    ExportError::Serialize {
        message: e.to_string(),
    }
}
