//! Per-package driver
//!
//! Scanning → (go statement) → Resolving → Checking → Safe | Unsafe.
//! Unsafe launches are reported and not descended into; safe ones are, so
//! launches nested inside them are judged separately.

use tracing::{debug, info};

use super::recovery::RecoveryPredicate;
use super::resolver::CallTargetResolver;
use super::safety::FunctionSafetyChecker;
use crate::config::AnalyzerConfig;
use crate::features::goroutine_recover::domain::{Diagnostic, LaunchVerdict};
use crate::features::parsing::{inspect, kinds, GoPackage, SourceUnit, SyntaxRef, Visit};
use crate::features::symbol_index::DeclIndex;
use crate::shared::models::{RecoverError, Result};

/// Goroutine recover analyzer
#[derive(Debug, Clone, Copy)]
pub struct GoroutineAnalyzer<'c> {
    config: &'c AnalyzerConfig,
}

impl<'c> GoroutineAnalyzer<'c> {
    pub fn new(config: &'c AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze one package. Diagnostics come out in file, then source order.
    pub fn analyze_package(&self, package: &GoPackage) -> Result<Vec<Diagnostic>> {
        let index = DeclIndex::build(package);
        let resolver = CallTargetResolver::new(&index);
        let checker = FunctionSafetyChecker::new(RecoveryPredicate::new(resolver, self.config));

        let mut diagnostics = Vec::new();
        let mut launches = 0;
        for unit in &package.units {
            launches += self.analyze_unit(unit, &resolver, &checker, &mut diagnostics)?;
        }

        info!(
            "Analyzed package {}: {} file(s), {} launch(es), {} unsafe",
            package.label(),
            package.units.len(),
            launches,
            diagnostics.len()
        );
        Ok(diagnostics)
    }

    /// Judge a single `go` statement
    pub fn judge_launch<'t>(
        &self,
        launch: SyntaxRef<'t>,
        resolver: &CallTargetResolver<'_, 't>,
        checker: &FunctionSafetyChecker<'_, 't>,
    ) -> Result<LaunchVerdict> {
        let target = resolver.resolve_launch(launch);
        let verdict = match target.body()? {
            Some(body) => LaunchVerdict::from_safe(checker.is_safe(body)?),
            None => LaunchVerdict::Unsafe,
        };
        debug!(
            "{}:{}: {:?} ({})",
            launch.path().display(),
            launch.span().start(),
            verdict,
            target.describe()
        );
        Ok(verdict)
    }

    fn analyze_unit<'t>(
        &self,
        unit: &'t SourceUnit,
        resolver: &CallTargetResolver<'_, 't>,
        checker: &FunctionSafetyChecker<'_, 't>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<usize> {
        let mut launches = 0;
        let mut failure: Option<RecoverError> = None;

        inspect(unit.root(), |node| {
            if node.kind() != kinds::GO_STATEMENT {
                return Visit::Descend;
            }
            launches += 1;
            let launch = SyntaxRef::new(unit, node);
            match self.judge_launch(launch, resolver, checker) {
                Ok(LaunchVerdict::Safe) => Visit::Descend,
                Ok(LaunchVerdict::Unsafe) => {
                    diagnostics.push(Diagnostic::unrecovered_goroutine(&unit.path, launch.span()));
                    Visit::Skip
                }
                Err(err) => {
                    failure = Some(err);
                    Visit::Stop
                }
            }
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(launches),
        }
    }
}
