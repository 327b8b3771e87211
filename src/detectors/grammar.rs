//! Signature grammar definitions
//!
//! Each language is described by three tree-sitter queries:
//!
//! - `declaration`: captures `@func` (the declaration node) and `@name`
//! - `inputs`: captures `@type` for each parameter type, plus `@func`
//! - `outputs`: captures `@type` for each return type, plus `@func`
//!
//! `@func` in the type queries anchors each match to its owning declaration,
//! so nested declarations do not leak types into the enclosing one.

use crate::lang::Lang;

/// Query sources for one language
#[derive(Debug)]
pub struct SignatureGrammar {
    pub lang: Lang,
    pub declaration: &'static str,
    pub inputs: &'static str,
    pub outputs: &'static str,
}

pub static GO_GRAMMAR: SignatureGrammar = SignatureGrammar {
    lang: Lang::Go,
    declaration: r#"
        (function_declaration name: (identifier) @name) @func
        (method_declaration name: (field_identifier) @name) @func
    "#,
    inputs: r#"
        (function_declaration
            parameters: (parameter_list (parameter_declaration type: (_) @type))) @func
        (method_declaration
            parameters: (parameter_list (parameter_declaration type: (_) @type))) @func
    "#,
    outputs: r#"
        (function_declaration
            result: (parameter_list (parameter_declaration type: (_) @type))) @func
        (function_declaration
            result: [(type_identifier) (pointer_type) (slice_type) (qualified_type)
                     (generic_type) (map_type) (array_type) (channel_type)] @type) @func
        (method_declaration
            result: (parameter_list (parameter_declaration type: (_) @type))) @func
        (method_declaration
            result: [(type_identifier) (pointer_type) (slice_type) (qualified_type)
                     (generic_type) (map_type) (array_type) (channel_type)] @type) @func
    "#,
};

pub static RUST_GRAMMAR: SignatureGrammar = SignatureGrammar {
    lang: Lang::Rust,
    declaration: r#"
        (function_item name: (identifier) @name) @func
        (function_signature_item name: (identifier) @name) @func
    "#,
    inputs: r#"
        (function_item
            parameters: (parameters (parameter type: (_) @type))) @func
        (function_signature_item
            parameters: (parameters (parameter type: (_) @type))) @func
    "#,
    // Tuple returns are split into their elements; `()` yields nothing
    outputs: r#"
        (function_item return_type: (tuple_type (_) @type)) @func
        (function_item
            return_type: [(type_identifier) (generic_type) (reference_type)
                          (scoped_type_identifier) (primitive_type) (pointer_type)
                          (array_type) (abstract_type) (dynamic_type) (function_type)] @type) @func
        (function_signature_item return_type: (tuple_type (_) @type)) @func
        (function_signature_item
            return_type: [(type_identifier) (generic_type) (reference_type)
                          (scoped_type_identifier) (primitive_type) (pointer_type)
                          (array_type) (abstract_type) (dynamic_type) (function_type)] @type) @func
    "#,
};

/// Only annotated parameters contribute types
pub static PYTHON_GRAMMAR: SignatureGrammar = SignatureGrammar {
    lang: Lang::Python,
    declaration: r#"
        (function_definition name: (identifier) @name) @func
    "#,
    inputs: r#"
        (function_definition
            parameters: (parameters
                [(typed_parameter type: (type) @type)
                 (typed_default_parameter type: (type) @type)])) @func
    "#,
    outputs: r#"
        (function_definition return_type: (type) @type) @func
    "#,
};

const TYPESCRIPT_DECLARATION: &str = r#"
    (function_declaration name: (identifier) @name) @func
    (method_definition name: (_) @name) @func
"#;

const TYPESCRIPT_INPUTS: &str = r#"
    (function_declaration
        parameters: (formal_parameters
            [(required_parameter type: (type_annotation (_) @type))
             (optional_parameter type: (type_annotation (_) @type))])) @func
    (method_definition
        parameters: (formal_parameters
            [(required_parameter type: (type_annotation (_) @type))
             (optional_parameter type: (type_annotation (_) @type))])) @func
"#;

const TYPESCRIPT_OUTPUTS: &str = r#"
    (function_declaration return_type: (type_annotation (_) @type)) @func
    (method_definition return_type: (type_annotation (_) @type)) @func
"#;

pub static TYPESCRIPT_GRAMMAR: SignatureGrammar = SignatureGrammar {
    lang: Lang::TypeScript,
    declaration: TYPESCRIPT_DECLARATION,
    inputs: TYPESCRIPT_INPUTS,
    outputs: TYPESCRIPT_OUTPUTS,
};

pub static TSX_GRAMMAR: SignatureGrammar = SignatureGrammar {
    lang: Lang::Tsx,
    declaration: TYPESCRIPT_DECLARATION,
    inputs: TYPESCRIPT_INPUTS,
    outputs: TYPESCRIPT_OUTPUTS,
};

/// `void` methods yield no return tokens
pub static JAVA_GRAMMAR: SignatureGrammar = SignatureGrammar {
    lang: Lang::Java,
    declaration: r#"
        (method_declaration name: (identifier) @name) @func
    "#,
    inputs: r#"
        (method_declaration
            parameters: (formal_parameters (formal_parameter type: (_) @type))) @func
    "#,
    outputs: r#"
        (method_declaration
            type: [(type_identifier) (generic_type) (scoped_type_identifier) (array_type)
                   (integral_type) (floating_point_type) (boolean_type)] @type) @func
    "#,
};

/// Built-in grammar for a language tag
pub fn grammar_for(lang: Lang) -> &'static SignatureGrammar {
    match lang {
        Lang::Go => &GO_GRAMMAR,
        Lang::Rust => &RUST_GRAMMAR,
        Lang::Python => &PYTHON_GRAMMAR,
        Lang::TypeScript => &TYPESCRIPT_GRAMMAR,
        Lang::Tsx => &TSX_GRAMMAR,
        Lang::Java => &JAVA_GRAMMAR,
    }
}
