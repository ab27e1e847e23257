pub mod emit;
pub mod ir;

// Re-export main functions
pub use emit::{emit_css, emit_declarations, EmitConfig};
pub use ir::{
    create_class_selector, create_qualified_rule, create_stylesheet, merge_stylesheets,
    parse_declarations, CssNode, Rule, Stylesheet,
};
