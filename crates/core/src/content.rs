//! 按样式决定的按钮内容规则：文案、图标尺寸、悬停变换

use serde::Serialize;

/// 按钮文案规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelRule {
    /// 使用用户配置的文案
    Configured,
    /// 固定文案，忽略配置
    Fixed(&'static str),
    /// 只显示图标
    Hidden,
}

/// 样式对应的内容规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRule {
    pub label: LabelRule,
    /// 图标边长（px）
    pub icon_size: u32,
}

pub const DEFAULT_ICON_SIZE: u32 = 16;

impl ContentRule {
    pub fn for_style(style_id: &str) -> Self {
        match style_id {
            "icon-heavy" => Self {
                label: LabelRule::Fixed("Run"),
                icon_size: 24,
            },
            "minimalist-icon" => Self {
                label: LabelRule::Hidden,
                icon_size: DEFAULT_ICON_SIZE,
            },
            // 大写由配方中的 text-transform 完成
            "retro-vintage" => Self {
                label: LabelRule::Configured,
                icon_size: 20,
            },
            _ => Self {
                label: LabelRule::Configured,
                icon_size: DEFAULT_ICON_SIZE,
            },
        }
    }

    /// 解析最终显示的文案
    pub fn label<'a>(&self, configured: &'a str) -> &'a str {
        match self.label {
            LabelRule::Configured => configured,
            LabelRule::Fixed(text) => text,
            LabelRule::Hidden => "",
        }
    }
}

/// 由样式的 `hover_effect` 标记推导出的悬停变换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    Scale,
    Lift,
    Tilt,
    None,
}

impl HoverEffect {
    /// 解析标记
    ///
    /// 标记可能同时包含多个关键字，CSS 中后写的 transform 胜出，
    /// 因此优先级为 rotate > translate-y > scale。
    pub fn from_tag(tag: &str) -> Self {
        if tag.contains("rotate") {
            HoverEffect::Tilt
        } else if tag.contains("translate-y") {
            HoverEffect::Lift
        } else if tag.contains("scale") {
            HoverEffect::Scale
        } else {
            HoverEffect::None
        }
    }

    /// 对应的 transform 值
    pub fn transform(self) -> Option<&'static str> {
        match self {
            HoverEffect::Scale => Some("scale(1.05)"),
            HoverEffect::Lift => Some("translateY(-2px)"),
            HoverEffect::Tilt => Some("rotate(1deg) scale(1.05)"),
            HoverEffect::None => None,
        }
    }
}
