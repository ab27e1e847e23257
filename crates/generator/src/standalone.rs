//! 独立 HTML 文档

use runbutton_core::naming::SCOPED_CLASS_PREFIX;
use runbutton_core::recipe::FONT_STACK;
use runbutton_core::{Declaration, GenerateOptions, Result};
use runbutton_css::{
    create_class_selector, create_qualified_rule, emit_css, merge_stylesheets, EmitConfig,
    Stylesheet,
};

use crate::button::ResolvedButton;
use crate::link::deep_link;
use crate::markup::{escape_html, Anchor};
use crate::style::animations_stylesheet;
use crate::GeneratorOptions;

/// 文档中按钮使用的类名
pub const BUTTON_CLASS: &str = SCOPED_CLASS_PREFIX;

const CONTAINER_CLASS: &str = "postman-run-button-container";

fn page_stylesheet() -> Stylesheet {
    let mut stylesheet = Stylesheet::new();
    stylesheet.push_rule(create_qualified_rule(
        "body",
        vec![
            Declaration::new("margin", "0"),
            Declaration::new("padding", "40px"),
            Declaration::new("box-sizing", "border-box"),
            Declaration::new(
                "background",
                "linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%)",
            ),
            Declaration::new("font-family", FONT_STACK),
            Declaration::new("display", "flex"),
            Declaration::new("justify-content", "center"),
            Declaration::new("align-items", "center"),
            Declaration::new("min-height", "100vh"),
        ],
    ));
    stylesheet.push_rule(create_qualified_rule(
        create_class_selector(CONTAINER_CLASS),
        vec![Declaration::new("text-align", "center")],
    ));
    stylesheet
}

pub(crate) fn render(settings: &GeneratorOptions, options: &GenerateOptions) -> Result<String> {
    let button = ResolvedButton::resolve(options)?;
    let selector = create_class_selector(BUTTON_CLASS);

    let mut button_sheet = Stylesheet::new();
    button_sheet.push_rule(create_qualified_rule(
        selector.clone(),
        button.declarations.clone(),
    ));
    let hover = button.hover_declarations();
    if !hover.is_empty() {
        button_sheet.push_rule(create_qualified_rule(format!("{}:hover", selector), hover));
    }

    let mut sheets = vec![page_stylesheet(), button_sheet];
    let animation_sheet = animations_stylesheet(BUTTON_CLASS, &options.animations, None);
    if !animation_sheet.is_empty() {
        let mut marker = Stylesheet::new();
        marker.push_raw("/* Custom Animations */");
        sheets.push(marker);
        sheets.push(animation_sheet);
    }

    let stylesheet = merge_stylesheets(sheets);
    let css = emit_css(&stylesheet, &EmitConfig::default())?;

    let href = deep_link(
        &settings.postman_host,
        &options.collection_id,
        &options.workspace_id,
    );
    let anchor = Anchor {
        href: &href,
        classes: vec![BUTTON_CLASS, button.animation_classes.as_str()],
        icon: options.icon.as_ref(),
        icon_size: button.icon_size,
        label: button.label,
        hover_transform: None,
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}    </style>
</head>
<body>
    <div class="{container}">
        {anchor}
    </div>
</body>
</html>
"#,
        title = escape_html(&format!(
            "{} - {}",
            settings.document_title_prefix, options.style.name
        )),
        css = css,
        container = CONTAINER_CLASS,
        anchor = anchor.render(),
    );

    log::trace!(
        "standalone document for `{}`: {} bytes",
        options.style.id,
        html.len()
    );
    Ok(html)
}
