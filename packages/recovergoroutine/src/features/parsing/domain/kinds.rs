//! tree-sitter-go node kinds and field names used by the analysis

pub const PACKAGE_CLAUSE: &str = "package_clause";

// Declarations
pub const FUNCTION_DECLARATION: &str = "function_declaration";
pub const METHOD_DECLARATION: &str = "method_declaration";
pub const FUNC_LITERAL: &str = "func_literal";
pub const VAR_DECLARATION: &str = "var_declaration";
pub const VAR_SPEC: &str = "var_spec";
pub const VAR_SPEC_LIST: &str = "var_spec_list";
pub const CONST_DECLARATION: &str = "const_declaration";
pub const CONST_SPEC: &str = "const_spec";
pub const SHORT_VAR_DECLARATION: &str = "short_var_declaration";
pub const PARAMETER_DECLARATION: &str = "parameter_declaration";
pub const VARIADIC_PARAMETER_DECLARATION: &str = "variadic_parameter_declaration";

// Statements
pub const GO_STATEMENT: &str = "go_statement";
pub const DEFER_STATEMENT: &str = "defer_statement";
pub const FOR_CLAUSE: &str = "for_clause";
pub const RANGE_CLAUSE: &str = "range_clause";
pub const TYPE_SWITCH_STATEMENT: &str = "type_switch_statement";
pub const TYPE_CASE: &str = "type_case";
pub const DEFAULT_CASE: &str = "default_case";
pub const COMMUNICATION_CASE: &str = "communication_case";
pub const RECEIVE_STATEMENT: &str = "receive_statement";

// Expressions
pub const CALL_EXPRESSION: &str = "call_expression";
pub const SELECTOR_EXPRESSION: &str = "selector_expression";
pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
pub const UNARY_EXPRESSION: &str = "unary_expression";
pub const COMPOSITE_LITERAL: &str = "composite_literal";
pub const IDENTIFIER: &str = "identifier";

// Types
pub const TYPE_IDENTIFIER: &str = "type_identifier";
pub const POINTER_TYPE: &str = "pointer_type";
pub const GENERIC_TYPE: &str = "generic_type";
pub const PARENTHESIZED_TYPE: &str = "parenthesized_type";
pub const PARAMETER_LIST: &str = "parameter_list";

// Fields
pub const FIELD_NAME: &str = "name";
pub const FIELD_BODY: &str = "body";
pub const FIELD_TYPE: &str = "type";
pub const FIELD_VALUE: &str = "value";
pub const FIELD_LEFT: &str = "left";
pub const FIELD_RIGHT: &str = "right";
pub const FIELD_FUNCTION: &str = "function";
pub const FIELD_ARGUMENTS: &str = "arguments";
pub const FIELD_OPERAND: &str = "operand";
pub const FIELD_OPERATOR: &str = "operator";
pub const FIELD_FIELD: &str = "field";
pub const FIELD_RECEIVER: &str = "receiver";
pub const FIELD_PARAMETERS: &str = "parameters";
pub const FIELD_RESULT: &str = "result";
pub const FIELD_INITIALIZER: &str = "initializer";
pub const FIELD_ALIAS: &str = "alias";
pub const FIELD_COMMUNICATION: &str = "communication";

/// Operator that declares new names
pub const DEFINE: &str = ":=";

/// The builtin recovery primitive
pub const RECOVER_BUILTIN: &str = "recover";
