//! 可粘贴的内嵌片段：作用域 `<style>` + `<a>`

use runbutton_core::{create_naming_strategy, GenerateOptions, Result};
use runbutton_css::{
    create_class_selector, create_qualified_rule, emit_css, merge_stylesheets, EmitConfig,
    Stylesheet,
};

use crate::button::ResolvedButton;
use crate::link::deep_link;
use crate::markup::{escape_html, Anchor};
use crate::style::animations_stylesheet;
use crate::GeneratorOptions;

pub(crate) fn render(settings: &GeneratorOptions, options: &GenerateOptions) -> Result<String> {
    let button = ResolvedButton::resolve(options)?;

    // 同一页面嵌入多个按钮时靠类名隔离
    let naming = create_naming_strategy(settings.naming_mode);
    let class_name = naming.generate_name(&options.style.id, &button.declarations);
    let selector = create_class_selector(&class_name);

    let mut button_sheet = Stylesheet::new();
    button_sheet.push_rule(create_qualified_rule(
        selector.clone(),
        button.declarations.clone(),
    ));
    let hover = button.hover_declarations();
    if !hover.is_empty() {
        button_sheet.push_rule(create_qualified_rule(format!("{}:hover", selector), hover));
    }

    let stylesheet = merge_stylesheets(vec![
        button_sheet,
        animations_stylesheet(&class_name, &options.animations, Some(class_name.as_str())),
    ]);
    let config = if settings.minify_inline {
        EmitConfig::minified()
    } else {
        EmitConfig::default()
    };
    let css = emit_css(&stylesheet, &config)?;

    let href = deep_link(
        &settings.postman_host,
        &options.collection_id,
        &options.workspace_id,
    );
    // 行内 style.transform 会压过悬停动画规则，选了悬停动画就不挂处理器
    let hover_animated = options
        .animations
        .hover
        .as_ref()
        .is_some_and(|option| !option.is_none() && !option.css_class.is_empty());
    let hover_transform = if hover_animated {
        None
    } else {
        button.hover.transform()
    };

    let anchor = Anchor {
        href: &href,
        classes: vec![class_name.as_str(), button.animation_classes.as_str()],
        icon: options.icon.as_ref(),
        icon_size: button.icon_size,
        label: button.label,
        hover_transform,
    };

    let snippet = format!(
        "<!-- {} - {} Style -->\n<style>\n{}\n</style>\n{}\n",
        settings.document_title_prefix,
        escape_html(&options.style.name),
        css.trim_end(),
        anchor.render(),
    );

    log::trace!(
        "inline snippet `{}` for `{}`: {} bytes",
        class_name,
        options.style.id,
        snippet.len()
    );
    Ok(snippet)
}
