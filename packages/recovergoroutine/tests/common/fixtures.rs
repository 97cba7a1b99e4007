//! Test fixture generators
//!
//! Go source snippets and the on-disk testdata packages.

use std::path::PathBuf;

/// `tests/testdata/src/<name>`
pub fn testdata_package(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join("src")
        .join(name)
}

/// A goroutine whose literal defers a recovery
pub fn fixture_safe_launch() -> &'static str {
    "\tgo func() {\n\t\tdefer func() { recover() }()\n\t}()\n"
}

/// A goroutine whose literal has no deferred recovery
pub fn fixture_unsafe_launch() -> &'static str {
    "\tgo func() {\n\t\tdefer func() {}()\n\t}()\n"
}

/// A package with one function holding the given statements
pub fn fixture_package(body: &str) -> String {
    format!("package fixture\n\nfunc run() {{\n{body}}}\n")
}

/// Line on which the launch at `index` starts inside `fixture_package`,
/// given the launches that precede it
pub fn launch_line(preceding: &[&str]) -> u32 {
    // package, blank, func header
    let header = 3;
    let before: usize = preceding.iter().map(|s| s.lines().count()).sum();
    (header + before + 1) as u32
}
