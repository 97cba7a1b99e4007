//! `Analyzer` - the lint as a host would register it

use std::path::Path;

use serde::Serialize;

use crate::config::{AnalyzerConfig, RECOVER_OPTION_HELP};
use crate::features::goroutine_recover::{Diagnostic, GoroutineAnalyzer};
use crate::features::parsing::{GoPackage, PackageLoader};
use crate::shared::models::Result;

pub const ANALYZER_NAME: &str = "recovergoroutine";
pub const ANALYZER_DOC: &str = "finds goroutine code without recover";

/// Analyzer descriptor plus its run configuration
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

/// Result of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub packages: usize,
    pub files: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &'static str {
        ANALYZER_NAME
    }

    pub fn doc(&self) -> &'static str {
        ANALYZER_DOC
    }

    /// `(flag, default, help)` of every option
    pub fn options(&self) -> Vec<(&'static str, &'static str, &'static str)> {
        vec![("recover", "", RECOVER_OPTION_HELP)]
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze already loaded packages
    pub fn run_packages(&self, packages: &[GoPackage]) -> Result<AnalysisReport> {
        let analyzer = GoroutineAnalyzer::new(&self.config);
        let mut report = AnalysisReport {
            packages: packages.len(),
            ..AnalysisReport::default()
        };
        for package in packages {
            report.files += package.units.len();
            report.diagnostics.extend(analyzer.analyze_package(package)?);
        }
        Ok(report)
    }

    /// Discover, load and analyze Go packages under `paths`
    pub fn run_paths<I, T>(&self, paths: I) -> Result<AnalysisReport>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        let packages = self.loader().load_paths(paths)?;
        self.run_packages(&packages)
    }

    /// Analyze in-memory `(path, source)` pairs
    pub fn run_sources<T, S>(&self, files: &[(T, S)]) -> Result<AnalysisReport>
    where
        T: AsRef<Path>,
        S: AsRef<str>,
    {
        let packages = self.loader().load_sources(files)?;
        self.run_packages(&packages)
    }

    fn loader(&self) -> PackageLoader {
        PackageLoader::new().skip_tests(self.config.skip_tests)
    }
}
