//! Go package = the compilation unit of the analysis

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::source_unit::SourceUnit;

/// Files of one directory sharing one `package` clause
#[derive(Debug)]
pub struct GoPackage {
    pub name: String,
    pub dir: PathBuf,
    /// Sorted by path so reporting order is stable
    pub units: Vec<SourceUnit>,
}

impl GoPackage {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, units: Vec<SourceUnit>) -> Self {
        let mut units = units;
        units.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            name: name.into(),
            dir: dir.into(),
            units,
        }
    }

    /// Group parsed files into packages by (directory, package name)
    ///
    /// An external test package (`package foo_test`) next to `package foo`
    /// becomes its own compilation unit, as with the go tool.
    pub fn group(units: Vec<SourceUnit>) -> Vec<GoPackage> {
        let mut grouped: BTreeMap<(PathBuf, String), Vec<SourceUnit>> = BTreeMap::new();
        for unit in units {
            let key = (unit.dir().to_path_buf(), unit.package.clone());
            grouped.entry(key).or_default().push(unit);
        }

        grouped
            .into_iter()
            .map(|((dir, name), units)| GoPackage::new(name, dir, units))
            .collect()
    }

    /// Display label, `dir (name)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.dir.display(), self.name)
    }
}
