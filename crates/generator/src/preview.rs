//! 实时预览模型
//!
//! 预览直接复用导出路径上的映射与动画输出，不维护第二套样式计算。

use runbutton_core::{GenerateOptions, Result};
use runbutton_css::{emit_declarations, EmitConfig};

use crate::button::ResolvedButton;
use crate::standalone::BUTTON_CLASS;
use crate::style::animations_css;

/// 渲染预览所需的全部数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewModel {
    /// 与 `style_css` 相同的声明块
    pub css: String,
    /// 元素类名：按钮类 + 动画类
    pub class_list: String,
    pub label: String,
    pub icon_size: u32,
    /// 绑定到 `class_list` 的动画 CSS，与独立文档中的一致
    pub animation_css: String,
    pub hover_transform: Option<&'static str>,
}

pub fn preview_model(options: &GenerateOptions) -> Result<PreviewModel> {
    let button = ResolvedButton::resolve(options)?;
    let css = emit_declarations(&button.declarations, &EmitConfig::default())?;
    let animation_css = animations_css(BUTTON_CLASS, &options.animations, &EmitConfig::default())?;

    let class_list = if button.animation_classes.is_empty() {
        BUTTON_CLASS.to_string()
    } else {
        format!("{} {}", BUTTON_CLASS, button.animation_classes)
    };

    Ok(PreviewModel {
        css,
        class_list,
        label: button.label.to_string(),
        icon_size: button.icon_size,
        animation_css,
        hover_transform: button.hover.transform(),
    })
}
