//! 生成选项解析为按钮的最终形态

use runbutton_core::{
    combine_classes, style_declarations, ContentRule, Declaration, GenerateOptions, HoverEffect,
    Result,
};

/// 三种输出共享的按钮数据
pub(crate) struct ResolvedButton<'a> {
    pub declarations: Vec<Declaration>,
    pub label: &'a str,
    pub icon_size: u32,
    pub hover: HoverEffect,
    pub animation_classes: String,
}

impl<'a> ResolvedButton<'a> {
    pub fn resolve(options: &'a GenerateOptions) -> Result<Self> {
        let (from, to) = options.gradient();
        let declarations = style_declarations(&options.style, from, to)?;
        let content = ContentRule::for_style(&options.style.id);

        Ok(Self {
            declarations,
            label: content.label(&options.button_text),
            icon_size: content.icon_size,
            hover: HoverEffect::from_tag(&options.style.hover_effect),
            animation_classes: combine_classes(
                options.animations.hover.as_ref(),
                options.animations.entrance.as_ref(),
            ),
        })
    }

    /// 悬停变换声明
    pub fn hover_declarations(&self) -> Vec<Declaration> {
        self.hover
            .transform()
            .map(|transform| vec![Declaration::new("transform", transform)])
            .unwrap_or_default()
    }
}
