use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// 按钮文案默认值
pub const DEFAULT_BUTTON_TEXT: &str = "Run in Postman";

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// 带 `!important` 标记的声明
    pub fn important(property: impl Into<String>, value: impl Into<String>) -> Self {
        let mut value = value.into();
        if !value.ends_with("!important") {
            value.push_str(" !important");
        }
        Self {
            property: property.into(),
            value,
        }
    }
}

/// 按钮视觉样式
///
/// 目录中的条目是 `'static` 常量（`Cow::Borrowed`），
/// 用户定制总是产生新的值（`Cow::Owned`），从不修改目录条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub gradient_from: Cow<'static, str>,
    pub gradient_to: Cow<'static, str>,
    pub text_color: Cow<'static, str>,
    pub border_radius: Cow<'static, str>,
    pub padding: Cow<'static, str>,
    pub font_size: Cow<'static, str>,
    pub font_weight: Cow<'static, str>,
    pub shadow: Cow<'static, str>,
    /// 悬停效果标记（如 "hover:scale-105"），只用于生成悬停变换
    pub hover_effect: Cow<'static, str>,
}

impl ButtonStyle {
    /// 替换文字颜色，返回新样式
    pub fn with_text_color(&self, color: impl Into<String>) -> Self {
        Self {
            text_color: Cow::Owned(color.into()),
            ..self.clone()
        }
    }

    /// 替换默认渐变色，返回新样式
    pub fn with_gradient(&self, gradient: &CustomGradient) -> Self {
        let (from, to) = gradient.resolve(self);
        Self {
            gradient_from: Cow::Owned(from.to_string()),
            gradient_to: Cow::Owned(to.to_string()),
            ..self.clone()
        }
    }
}

/// 用户自定义渐变
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomGradient {
    pub from: String,
    pub to: String,
}

impl CustomGradient {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// 计算实际使用的 (from, to)
    ///
    /// 空字符串视为未设置，回退到样式默认值
    pub fn resolve<'a>(&'a self, style: &'a ButtonStyle) -> (&'a str, &'a str) {
        let from = if self.from.is_empty() {
            style.gradient_from.as_ref()
        } else {
            self.from.as_str()
        };
        let to = if self.to.is_empty() {
            style.gradient_to.as_ref()
        } else {
            self.to.as_str()
        };
        (from, to)
    }
}

/// 动画触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    /// 指针悬停时触发
    Hover,
    /// 挂载时播放一次
    Entrance,
}

/// 动画选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOption {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub kind: AnimationKind,
    pub css_class: Cow<'static, str>,
    /// 绑定到触发选择器的声明文本
    pub declarations: Cow<'static, str>,
    /// 原样输出的 @keyframes 块
    #[serde(default)]
    pub keyframes: Option<Cow<'static, str>>,
    /// 始终生效的声明（绑定到去掉伪类后的选择器）
    #[serde(default)]
    pub base_styles: Option<Cow<'static, str>>,
}

impl AnimationOption {
    /// `none` 哨兵条目，不产生任何 CSS
    pub fn is_none(&self) -> bool {
        self.id == crate::animation::NONE_ID
    }
}

/// 当前选中的动画组合
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonAnimation {
    pub hover: Option<AnimationOption>,
    pub entrance: Option<AnimationOption>,
}

/// 图标：名称 + 不含 `<svg>` 外壳的 SVG 内容片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPayload {
    pub name: String,
    pub svg: String,
}

/// 生成器的唯一输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub collection_id: String,
    pub workspace_id: String,
    /// 已合并文字颜色等覆盖项的样式
    pub style: ButtonStyle,
    #[serde(default)]
    pub custom_gradient: Option<CustomGradient>,
    #[serde(default = "default_button_text")]
    pub button_text: String,
    #[serde(default)]
    pub animations: ButtonAnimation,
    #[serde(default)]
    pub icon: Option<IconPayload>,
}

fn default_button_text() -> String {
    DEFAULT_BUTTON_TEXT.to_string()
}

impl GenerateOptions {
    pub fn new(
        collection_id: impl Into<String>,
        workspace_id: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        Self {
            collection_id: collection_id.into(),
            workspace_id: workspace_id.into(),
            style,
            custom_gradient: None,
            button_text: default_button_text(),
            animations: ButtonAnimation::default(),
            icon: None,
        }
    }

    /// 实际使用的渐变色 (from, to)
    pub fn gradient(&self) -> (&str, &str) {
        match &self.custom_gradient {
            Some(custom) => custom.resolve(&self.style),
            None => (
                self.style.gradient_from.as_ref(),
                self.style.gradient_to.as_ref(),
            ),
        }
    }

    /// 导出前的检查：两个 ID 去除空白后都必须非空
    ///
    /// 生成函数本身不调用它，由调用方决定是否展示导出
    pub fn validate(&self) -> Result<()> {
        if self.collection_id.trim().is_empty() {
            return Err(GenerateError::MissingIdentifier("collectionId"));
        }
        if self.workspace_id.trim().is_empty() {
            return Err(GenerateError::MissingIdentifier("workspaceId"));
        }
        Ok(())
    }
}
