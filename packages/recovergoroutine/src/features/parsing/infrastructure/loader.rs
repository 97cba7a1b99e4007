//! Package discovery and loading
//!
//! Reads `.go` files from disk (or memory), parses them, and groups them
//! into packages. Mirrors what the go tool considers part of a package:
//! `vendor/`, `testdata/` and `.`/`_` prefixed directories are ignored.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::go_parser::GoParser;
use crate::features::parsing::domain::{is_test_file, GoPackage, SourceUnit};
use crate::features::parsing::ports::SourceParser;
use crate::shared::models::{RecoverError, Result};

/// Loads Go packages from paths
pub struct PackageLoader<P: SourceParser = GoParser> {
    parser: P,
    skip_tests: bool,
}

impl PackageLoader<GoParser> {
    pub fn new() -> Self {
        Self::with_parser(GoParser::new())
    }
}

impl Default for PackageLoader<GoParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SourceParser> PackageLoader<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            skip_tests: false,
        }
    }

    /// Leave `_test.go` files out
    pub fn skip_tests(mut self, skip: bool) -> Self {
        self.skip_tests = skip;
        self
    }

    /// Load every package under the given files/directories
    pub fn load_paths<I, T>(&self, paths: I) -> Result<Vec<GoPackage>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        let mut files = BTreeSet::new();
        for path in paths {
            files.extend(self.discover(path.as_ref())?);
        }

        let mut units = Vec::with_capacity(files.len());
        for file in files {
            let source =
                std::fs::read_to_string(&file).map_err(|e| RecoverError::io(&file, e))?;
            units.push(self.parser.parse(source, &file)?);
        }

        let packages = GoPackage::group(units);
        info!("Loaded {} package(s)", packages.len());
        Ok(packages)
    }

    /// Load packages from in-memory `(path, source)` pairs
    pub fn load_sources<T, S>(&self, files: &[(T, S)]) -> Result<Vec<GoPackage>>
    where
        T: AsRef<Path>,
        S: AsRef<str>,
    {
        let units = files
            .iter()
            .filter(|(path, _)| self.wants_file(path.as_ref()))
            .map(|(path, source)| self.parser.parse(source.as_ref().to_string(), path.as_ref()))
            .collect::<Result<Vec<SourceUnit>>>()?;
        Ok(GoPackage::group(units))
    }

    /// Collect Go files below `root` (or `root` itself if it is a file)
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                RecoverError::io(path, err.into())
            })?;
            if entry.file_type().is_file() && self.wants_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        debug!(
            "Discovered {} {} file(s) under {}",
            files.len(),
            self.parser.language_name(),
            root.display()
        );
        Ok(files)
    }

    fn wants_file(&self, path: &Path) -> bool {
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.parser.supports_extension(ext))
            .unwrap_or(false);
        supported && !(self.skip_tests && is_test_file(path))
    }
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || name == "vendor" || name == "testdata"
}
