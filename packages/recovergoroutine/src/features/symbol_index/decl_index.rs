//! Per-package declaration index

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::static_type::StaticType;
use crate::features::parsing::{kinds, GoPackage, SyntaxRef};
use crate::shared::models::{RecoverError, Result};

/// A function or method declaration
#[derive(Debug, Clone, Copy)]
pub struct FuncDecl<'t> {
    pub name: &'t str,
    /// Receiver base type name for methods
    pub receiver: Option<&'t str>,
    pub decl: SyntaxRef<'t>,
}

impl<'t> FuncDecl<'t> {
    /// `name` or `(Type).name`
    pub fn qualified_name(&self) -> String {
        match self.receiver {
            Some(receiver) => format!("({}).{}", receiver, self.name),
            None => self.name.to_string(),
        }
    }

    /// The body block. Body-less declarations (assembly stubs) cannot be
    /// inspected and abort the analysis.
    pub fn body(&self) -> Result<SyntaxRef<'t>> {
        self.decl.field(kinds::FIELD_BODY).ok_or_else(|| {
            RecoverError::source_access(
                self.decl.path(),
                self.qualified_name(),
                "declaration has no body",
            )
        })
    }

    /// One entry per result value; `None` where the type is not a local named type
    pub fn results(&self) -> Vec<Option<StaticType>> {
        let Some(result) = self.decl.field(kinds::FIELD_RESULT) else {
            return Vec::new();
        };
        if result.kind() != kinds::PARAMETER_LIST {
            return vec![StaticType::from_type_node(result)];
        }

        let mut results = Vec::new();
        for param in result.named_children() {
            let ty = param.field(kinds::FIELD_TYPE).and_then(StaticType::from_type_node);
            let count = param.fields(kinds::FIELD_NAME).len().max(1);
            results.extend(std::iter::repeat(ty).take(count));
        }
        results
    }
}

/// Package-level variable: its spec and its position among the spec's names
#[derive(Debug, Clone, Copy)]
struct VarBinding<'t> {
    spec: SyntaxRef<'t>,
    position: usize,
}

/// Declarations of one package, built once before any launch is judged
#[derive(Debug, Default)]
pub struct DeclIndex<'t> {
    functions: FxHashMap<&'t str, FuncDecl<'t>>,
    /// receiver type name → method name → declaration
    methods: FxHashMap<&'t str, FxHashMap<&'t str, FuncDecl<'t>>>,
    variables: FxHashMap<&'t str, VarBinding<'t>>,
    constants: FxHashSet<&'t str>,
}

impl<'t> DeclIndex<'t> {
    /// Index every top-level declaration of the package
    pub fn build(package: &'t GoPackage) -> Self {
        let mut index = Self::default();
        for unit in &package.units {
            let root = SyntaxRef::new(unit, unit.root());
            for item in root.named_children() {
                match item.kind() {
                    kinds::FUNCTION_DECLARATION => index.add_function(item),
                    kinds::METHOD_DECLARATION => index.add_method(item),
                    kinds::VAR_DECLARATION => index.add_variables(item),
                    kinds::CONST_DECLARATION => index.add_constants(item),
                    _ => {}
                }
            }
        }

        debug!(
            "Indexed package {}: {} functions, {} methods, {} variables",
            package.label(),
            index.functions.len(),
            index.method_count(),
            index.variables.len()
        );
        index
    }

    pub fn function(&self, name: &str) -> Option<&FuncDecl<'t>> {
        self.functions.get(name)
    }

    /// Method `name` in the method set of `*type_name`
    pub fn method(&self, type_name: &str, name: &str) -> Option<&FuncDecl<'t>> {
        self.methods.get(type_name)?.get(name)
    }

    /// A package-level `var` or `const` named `name`
    pub fn has_value(&self, name: &str) -> bool {
        self.variables.contains_key(name) || self.constants.contains(name)
    }

    pub fn method_count(&self) -> usize {
        self.methods.values().map(|set| set.len()).sum()
    }

    /// Declared type of a package-level variable
    pub fn variable_type(&self, name: &str) -> Option<StaticType> {
        let binding = self.variables.get(name)?;
        self.binding_type(binding.spec, binding.position)
    }

    /// Type of the `position`-th name bound by a `var_spec` or `:=`
    pub fn binding_type(&self, decl: SyntaxRef<'t>, position: usize) -> Option<StaticType> {
        match decl.kind() {
            kinds::VAR_SPEC => {
                if let Some(ty) = decl.field(kinds::FIELD_TYPE) {
                    return StaticType::from_type_node(ty);
                }
                let names = decl.fields(kinds::FIELD_NAME).len();
                self.assigned_type(decl.field(kinds::FIELD_VALUE)?, names, position)
            }
            kinds::SHORT_VAR_DECLARATION => {
                let names = decl.field(kinds::FIELD_LEFT)?.named_children().len();
                self.assigned_type(decl.field(kinds::FIELD_RIGHT)?, names, position)
            }
            _ => None,
        }
    }

    /// Static type of an initializer expression
    ///
    /// Understands `&T{}`, `T{}`, `new(T)` and calls to package functions
    /// with a single indexed result. Anything else is unknown.
    pub fn expression_type(&self, expr: SyntaxRef<'t>) -> Option<StaticType> {
        match expr.kind() {
            kinds::PARENTHESIZED_EXPRESSION => self.expression_type(expr.named_child(0)?),
            kinds::UNARY_EXPRESSION => {
                let operator = expr.field(kinds::FIELD_OPERATOR)?;
                let operand = expr.field(kinds::FIELD_OPERAND)?;
                if operator.text() == "&" && operand.kind() == kinds::COMPOSITE_LITERAL {
                    self.expression_type(operand)?.add_pointer()
                } else {
                    None
                }
            }
            kinds::COMPOSITE_LITERAL => StaticType::from_type_node(expr.field(kinds::FIELD_TYPE)?),
            kinds::CALL_EXPRESSION => {
                let function = expr.field(kinds::FIELD_FUNCTION)?;
                if function.kind() != kinds::IDENTIFIER {
                    return None;
                }
                if function.text() == "new" && self.function("new").is_none() {
                    let argument = expr.field(kinds::FIELD_ARGUMENTS)?.named_child(0)?;
                    return StaticType::from_type_node(argument)?.add_pointer();
                }
                let mut results = self.function(function.text())?.results();
                if results.len() == 1 {
                    results.pop().flatten()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn assigned_type(
        &self,
        values: SyntaxRef<'t>,
        names: usize,
        position: usize,
    ) -> Option<StaticType> {
        let values = values.named_children();
        if values.len() == names {
            return self.expression_type(*values.get(position)?);
        }

        // a, b := f()
        let [call] = values.as_slice() else {
            return None;
        };
        if call.kind() != kinds::CALL_EXPRESSION {
            return None;
        }
        let function = call.field(kinds::FIELD_FUNCTION)?;
        if function.kind() != kinds::IDENTIFIER {
            return None;
        }
        self.function(function.text())?
            .results()
            .into_iter()
            .nth(position)
            .flatten()
    }

    fn add_function(&mut self, item: SyntaxRef<'t>) {
        let Some(name) = item.field(kinds::FIELD_NAME) else {
            return;
        };
        let decl = FuncDecl {
            name: name.text(),
            receiver: None,
            decl: item,
        };
        // init and _ may be declared many times
        if decl.name == "init" || decl.name == "_" {
            return;
        }
        if let Some(previous) = self.functions.get(decl.name) {
            warn!(
                "Duplicate function `{}` in {} (first declared in {})",
                decl.name,
                item.path().display(),
                previous.decl.path().display()
            );
            return;
        }
        self.functions.insert(decl.name, decl);
    }

    fn add_method(&mut self, item: SyntaxRef<'t>) {
        let Some(name) = item.field(kinds::FIELD_NAME) else {
            return;
        };
        let Some(receiver) = receiver_type_name(item) else {
            return;
        };
        let decl = FuncDecl {
            name: name.text(),
            receiver: Some(receiver),
            decl: item,
        };
        let method_set = self.methods.entry(receiver).or_default();
        if method_set.contains_key(decl.name) {
            warn!(
                "Duplicate method `{}` in {}",
                decl.qualified_name(),
                item.path().display()
            );
            return;
        }
        method_set.insert(decl.name, decl);
    }

    fn add_variables(&mut self, item: SyntaxRef<'t>) {
        for spec in var_specs(item) {
            for (position, name) in spec.fields(kinds::FIELD_NAME).into_iter().enumerate() {
                if name.text() == "_" {
                    continue;
                }
                self.variables
                    .entry(name.text())
                    .or_insert(VarBinding { spec, position });
            }
        }
    }

    fn add_constants(&mut self, item: SyntaxRef<'t>) {
        for spec in item.named_children() {
            if spec.kind() != kinds::CONST_SPEC {
                continue;
            }
            for name in spec.fields(kinds::FIELD_NAME) {
                if name.text() != "_" {
                    self.constants.insert(name.text());
                }
            }
        }
    }
}

/// `var_spec`s of a `var` declaration, grouped or not
pub(crate) fn var_specs<'t>(decl: SyntaxRef<'t>) -> Vec<SyntaxRef<'t>> {
    let mut specs = Vec::new();
    for child in decl.named_children() {
        match child.kind() {
            kinds::VAR_SPEC => specs.push(child),
            kinds::VAR_SPEC_LIST => specs.extend(
                child
                    .named_children()
                    .into_iter()
                    .filter(|spec| spec.kind() == kinds::VAR_SPEC),
            ),
            _ => {}
        }
    }
    specs
}

/// Base type name of a method receiver: `T` for both `(t T)` and `(t *T)`
fn receiver_type_name<'t>(method: SyntaxRef<'t>) -> Option<&'t str> {
    let params = method.field(kinds::FIELD_RECEIVER)?;
    let param = params
        .named_children()
        .into_iter()
        .find(|p| p.kind() == kinds::PARAMETER_DECLARATION)?;
    let mut ty = param.field(kinds::FIELD_TYPE)?;
    loop {
        match ty.kind() {
            kinds::POINTER_TYPE | kinds::PARENTHESIZED_TYPE => ty = ty.named_child(0)?,
            kinds::GENERIC_TYPE => ty = ty.field(kinds::FIELD_TYPE)?,
            kinds::TYPE_IDENTIFIER => return Some(ty.text()),
            _ => return None,
        }
    }
}
