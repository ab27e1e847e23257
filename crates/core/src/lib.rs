pub mod animation;
pub mod catalog;
pub mod color;
pub mod content;
pub mod error;
pub mod naming;
pub mod recipe;
pub mod types;

// Re-export commonly used types
pub use animation::{combine_classes, ENTRANCE_ANIMATIONS, HOVER_ANIMATIONS};
pub use catalog::{default_style, find_style, BUTTON_STYLES};
pub use color::{shade, with_alpha};
pub use content::{ContentRule, HoverEffect, LabelRule};
pub use error::{ColorError, GenerateError, Result};
pub use naming::{create_naming_strategy, NamingMode, NamingStrategy};
pub use recipe::style_declarations;
pub use types::{
    AnimationKind, AnimationOption, ButtonAnimation, ButtonStyle, CustomGradient, Declaration,
    GenerateOptions, IconPayload, DEFAULT_BUTTON_TEXT,
};
