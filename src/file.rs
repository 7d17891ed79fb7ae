//! Loading documents from and saving them to files.
//!
//! A document can remember the path it was loaded from (or a path it should
//! be saved to), so that [`Document::save`] writes back to the same place.
//! Any failure to open, read, create or write the file is reported as
//! [`Error::FileLoaded`].
//!
//! ```rust,no_run
//! use ini_array::Document;
//!
//! let mut doc = Document::open("config.ini")?;
//! doc.set_value("General", "version", "2.0")?;
//! doc.save()?;
//! # Ok::<(), ini_array::Error>(())
//! ```

use crate::parser::Parser;
use crate::{Document, Error, IniOptions, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Document {
    /// Reads and parses the file at `path` as an extended-dialect document.
    ///
    /// # Errors
    ///
    /// [`Error::FileLoaded`] if the file cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, IniOptions::default())
    }

    /// Reads and parses the file at `path` with the given options.
    ///
    /// # Errors
    ///
    /// [`Error::FileLoaded`] if the file cannot be read.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: IniOptions) -> Result<Self> {
        let mut doc = Document::with_options(options);
        doc.load_file(path)?;
        Ok(doc)
    }

    /// Creates an empty document that only records `path` for a later
    /// [`Document::save`]. The file is not touched.
    #[must_use]
    pub fn with_path<P: Into<PathBuf>>(path: P, options: IniOptions) -> Self {
        let mut doc = Document::with_options(options);
        doc.file_path = Some(path.into());
        doc
    }

    /// Parses the file at `path` into this document and records the path.
    ///
    /// Entries are merged into what the document already holds; keys present
    /// in both are overwritten by the file. Parsing starts in the unnamed
    /// section regardless of earlier loads.
    ///
    /// # Errors
    ///
    /// [`Error::FileLoaded`] if the file cannot be read. The document is left
    /// unchanged in that case.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::file_loaded(&path.display().to_string(), e))?;

        Parser::new().parse_str(self, &text);
        self.file_path = Some(path.to_path_buf());
        debug!(path = %path.display(), sections = self.len(), "loaded INI file");
        Ok(())
    }

    /// Writes the document to the recorded file path.
    ///
    /// # Errors
    ///
    /// [`Error::FileLoaded`] if no path is recorded or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = self
            .file_path
            .as_deref()
            .ok_or_else(|| Error::file_loaded("", "no file path recorded"))?;
        self.save_as(path)
    }

    /// Writes the document to `path` without changing the recorded path.
    ///
    /// # Errors
    ///
    /// [`Error::FileLoaded`] if the file cannot be created or written.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, crate::to_string(self))
            .map_err(|e| Error::file_loaded(&path.display().to_string(), e))?;
        debug!(path = %path.display(), sections = self.len(), "saved INI file");
        Ok(())
    }

    /// Returns the recorded file path, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_file_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.file_path = Some(path.into());
    }
}
