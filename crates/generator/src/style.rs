//! 样式与动画的 CSS 输出
//!
//! 预览、独立文档与内嵌片段都经由这里生成 CSS，保证三者视觉一致。

use runbutton_core::{
    style_declarations, AnimationOption, ButtonAnimation, ButtonStyle, Declaration, Result,
};
use runbutton_css::{
    create_class_selector, create_qualified_rule, emit_css, emit_declarations, merge_stylesheets,
    parse_declarations, EmitConfig, Stylesheet,
};

const HOVER_PSEUDO: &str = ":hover";

/// 计算按钮的完整声明块（不含选择器）
///
/// 对固定输入输出逐字节一致。
pub fn style_css(style: &ButtonStyle, gradient_from: &str, gradient_to: &str) -> Result<String> {
    let declarations = style_declarations(style, gradient_from, gradient_to)?;
    Ok(emit_declarations(&declarations, &EmitConfig::default())?)
}

/// 动画选项对应的样式表节点
///
/// 顺序：@keyframes 原文，`base_styles` 规则（选择器去掉末尾 `:hover`），
/// 最后是绑定到 `selector` 的动画声明。`none` 哨兵不产生任何节点。
pub(crate) fn animation_stylesheet(option: &AnimationOption, selector: &str) -> Stylesheet {
    scoped_animation_stylesheet(option, selector, None)
}

/// 取出 `@keyframes <name> {` 中的名称
fn keyframes_name(keyframes: &str) -> Option<&str> {
    keyframes
        .trim_start()
        .strip_prefix("@keyframes")?
        .split(|c: char| c.is_whitespace() || c == '{')
        .find(|part| !part.is_empty())
}

/// 把 `animation` / `animation-name` 值中的 `from` 替换为 `to`
fn rename_animation(declarations: &mut [Declaration], from: &str, to: &str) {
    for decl in declarations
        .iter_mut()
        .filter(|decl| decl.property == "animation" || decl.property == "animation-name")
    {
        decl.value = decl
            .value
            .split(' ')
            .map(|part| if part == from { to } else { part })
            .collect::<Vec<_>>()
            .join(" ");
    }
}

/// 同 [`animation_stylesheet`]，`keyframes_scope` 存在时 @keyframes 名称加上该前缀，
/// 避免与宿主页面的同名动画冲突
pub(crate) fn scoped_animation_stylesheet(
    option: &AnimationOption,
    selector: &str,
    keyframes_scope: Option<&str>,
) -> Stylesheet {
    let mut stylesheet = Stylesheet::new();
    if option.is_none() {
        log::debug!("animation option is `none`, nothing to emit");
        return stylesheet;
    }

    let mut declarations = parse_declarations(&option.declarations);

    if let Some(keyframes) = &option.keyframes {
        let renamed = keyframes_scope
            .zip(keyframes_name(keyframes))
            .map(|(scope, name)| (name, format!("{}-{}", scope, name)));
        match renamed {
            Some((name, scoped)) => {
                stylesheet.push_raw(keyframes.replacen(
                    &format!("@keyframes {}", name),
                    &format!("@keyframes {}", scoped),
                    1,
                ));
                rename_animation(&mut declarations, name, &scoped);
            }
            None => stylesheet.push_raw(keyframes.to_string()),
        }
    }

    if let Some(base) = &option.base_styles {
        let base_selector = selector.strip_suffix(HOVER_PSEUDO).unwrap_or(selector);
        let base_declarations = parse_declarations(base);
        if !base_declarations.is_empty() {
            stylesheet.push_rule(create_qualified_rule(base_selector, base_declarations));
        }
    }

    if !declarations.is_empty() {
        stylesheet.push_rule(create_qualified_rule(selector, declarations));
    }

    stylesheet
}

/// 输出单个动画选项的 CSS
///
/// 悬停动画的 `selector` 由调用方带上 `:hover`。
pub fn emit_animation_css(option: &AnimationOption, selector: &str) -> Result<String> {
    let stylesheet = animation_stylesheet(option, selector);
    Ok(emit_css(&stylesheet, &EmitConfig::default())?)
}

/// 动画的触发选择器：`.按钮类.动画类`，悬停动画追加 `:hover`
pub(crate) fn animation_selector(button_class: &str, option: &AnimationOption, hover: bool) -> String {
    let mut selector = format!(
        "{}{}",
        create_class_selector(button_class),
        create_class_selector(&option.css_class)
    );
    if hover {
        selector.push_str(HOVER_PSEUDO);
    }
    selector
}

/// 当前动画组合的样式表：入场在前，悬停在后
///
/// `keyframes_scope` 见 [`scoped_animation_stylesheet`]。
pub(crate) fn animations_stylesheet(
    button_class: &str,
    animations: &ButtonAnimation,
    keyframes_scope: Option<&str>,
) -> Stylesheet {
    let entrance = animations.entrance.as_ref().map(|option| {
        scoped_animation_stylesheet(
            option,
            &animation_selector(button_class, option, false),
            keyframes_scope,
        )
    });
    let hover = animations.hover.as_ref().map(|option| {
        scoped_animation_stylesheet(
            option,
            &animation_selector(button_class, option, true),
            keyframes_scope,
        )
    });

    merge_stylesheets(entrance.into_iter().chain(hover).collect())
}

/// 当前动画组合的 CSS 文本
pub(crate) fn animations_css(
    button_class: &str,
    animations: &ButtonAnimation,
    config: &EmitConfig,
) -> Result<String> {
    let stylesheet = animations_stylesheet(button_class, animations, None);
    Ok(emit_css(&stylesheet, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use runbutton_core::animation::{find_entrance, find_hover, HOVER_ANIMATIONS};
    use runbutton_core::{find_style, ColorError, GenerateError};

    #[test]
    fn test_style_css_is_declaration_block() {
        let style = find_style("dual-tone").unwrap();
        let css = style_css(style, "#000000", "#ffffff").unwrap();

        assert!(css.starts_with("  color: "));
        assert!(css.ends_with(';'));
        assert!(!css.contains('{'));
        assert!(css.contains("  background: linear-gradient(90deg, #000000 50%, #ffffff 50%);"));
    }

    #[test]
    fn test_style_css_deterministic() {
        let style = find_style("letterpress").unwrap();
        let a = style_css(style, "#336699", "#993366").unwrap();
        let b = style_css(style, "#336699", "#993366").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_css_invalid_color() {
        let style = find_style("pixel-art").unwrap();
        let err = style_css(style, "#ff6c37", "oops").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Color(ColorError::InvalidHex(ref value)) if value == "oops"
        ));
    }

    #[test]
    fn test_emit_none_is_empty() {
        let css = emit_animation_css(&HOVER_ANIMATIONS[0], ".x:hover").unwrap();
        assert_eq!(css, "");
    }

    #[test]
    fn test_emit_keyframes_before_rule() {
        let bounce = find_hover("bounce").unwrap();
        let css = emit_animation_css(bounce, ".btn.anim-hover-bounce:hover").unwrap();

        assert!(css.starts_with("@keyframes bounce {"));
        assert!(css.ends_with(
            ".btn.anim-hover-bounce:hover {\n  animation: bounce 0.8s ease-in-out;\n}\n"
        ));
    }

    #[test]
    fn test_emit_base_styles_without_pseudo() {
        let lift = find_hover("lift").unwrap();
        let css = emit_animation_css(lift, ".btn.anim-hover-lift:hover").unwrap();

        assert_eq!(
            css,
            ".btn.anim-hover-lift {\n  transition: transform 0.2s ease, box-shadow 0.2s ease;\n}\n\n\
             .btn.anim-hover-lift:hover {\n  transform: translateY(-4px);\n  box-shadow: 0 12px 24px rgba(0, 0, 0, 0.2);\n}\n"
        );
    }

    #[test]
    fn test_scoped_keyframes_renamed() {
        let pulse = find_hover("pulse").unwrap();
        let stylesheet = scoped_animation_stylesheet(pulse, ".btn.anim-hover-pulse:hover", Some("btn"));
        let css = emit_css(&stylesheet, &EmitConfig::default()).unwrap();

        assert!(css.starts_with("@keyframes btn-pulse {"));
        assert!(css.contains("  animation: btn-pulse 1s ease-in-out infinite;"));
        assert!(!css.contains("@keyframes pulse"));
    }

    #[test]
    fn test_keyframes_name() {
        assert_eq!(keyframes_name("@keyframes fadeIn {\n}"), Some("fadeIn"));
        assert_eq!(keyframes_name("\n  @keyframes spin{}"), Some("spin"));
        assert_eq!(keyframes_name(".a {}"), None);
    }

    #[test]
    fn test_animations_entrance_first() {
        let animations = ButtonAnimation {
            hover: find_hover("glow").cloned(),
            entrance: find_entrance("zoom-in").cloned(),
        };
        let css = animations_css("btn", &animations, &EmitConfig::default()).unwrap();

        let entrance_at = css.find(".btn.anim-enter-zoom {").unwrap();
        let hover_at = css.find(".btn.anim-hover-glow:hover {").unwrap();
        assert!(entrance_at < hover_at);
    }
}
