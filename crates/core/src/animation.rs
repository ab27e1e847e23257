//! 动画目录
//!
//! 悬停动画与入场动画两个有序列表，都以 `none` 哨兵开头。

use std::borrow::Cow;

use crate::types::{AnimationKind, AnimationOption};

/// 表示“无动画”的哨兵 id
pub const NONE_ID: &str = "none";

const fn text(value: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(value)
}

const fn none_option(kind: AnimationKind, description: &'static str) -> AnimationOption {
    AnimationOption {
        id: text(NONE_ID),
        name: text("None"),
        description: text(description),
        kind,
        css_class: text(""),
        declarations: text(""),
        keyframes: None,
        base_styles: None,
    }
}

pub static HOVER_ANIMATIONS: &[AnimationOption] = &[
    none_option(AnimationKind::Hover, "No hover animation"),
    AnimationOption {
        id: text("scale"),
        name: text("Scale Up"),
        description: text("Gently scales up on hover"),
        kind: AnimationKind::Hover,
        css_class: text("anim-hover-scale"),
        declarations: text("transform: scale(1.05);"),
        keyframes: None,
        base_styles: Some(text("transition: transform 0.3s ease;")),
    },
    AnimationOption {
        id: text("glow"),
        name: text("Glow Effect"),
        description: text("Adds a glowing shadow on hover"),
        kind: AnimationKind::Hover,
        css_class: text("anim-hover-glow"),
        declarations: text("box-shadow: 0 0 20px rgba(139, 92, 246, 0.6);"),
        keyframes: None,
        base_styles: None,
    },
    AnimationOption {
        id: text("bounce"),
        name: text("Bounce"),
        description: text("Bounces the button gently"),
        kind: AnimationKind::Hover,
        css_class: text("anim-hover-bounce"),
        declarations: text("animation: bounce 0.8s ease-in-out;"),
        keyframes: Some(text(
            "@keyframes bounce {\n  0%, 100% { transform: translateY(0); }\n  50% { transform: translateY(-5px); }\n}\n",
        )),
        base_styles: None,
    },
    AnimationOption {
        id: text("lift"),
        name: text("Lift"),
        description: text("Rises slightly with a deeper shadow"),
        kind: AnimationKind::Hover,
        css_class: text("anim-hover-lift"),
        declarations: text("transform: translateY(-4px); box-shadow: 0 12px 24px rgba(0, 0, 0, 0.2);"),
        keyframes: None,
        base_styles: Some(text("transition: transform 0.2s ease, box-shadow 0.2s ease;")),
    },
    AnimationOption {
        id: text("pulse"),
        name: text("Pulse"),
        description: text("Breathes in and out while hovered"),
        kind: AnimationKind::Hover,
        css_class: text("anim-hover-pulse"),
        declarations: text("animation: pulse 1s ease-in-out infinite;"),
        keyframes: Some(text(
            "@keyframes pulse {\n  0%, 100% { transform: scale(1); }\n  50% { transform: scale(1.08); }\n}\n",
        )),
        base_styles: None,
    },
    AnimationOption {
        id: text("shimmer"),
        name: text("Shimmer"),
        description: text("Sweeps a light band across the surface"),
        kind: AnimationKind::Hover,
        css_class: text("anim-hover-shimmer"),
        declarations: text(
            "background-image: linear-gradient(110deg, transparent 25%, rgba(255, 255, 255, 0.35) 50%, transparent 75%); background-size: 200% 100%; animation: shimmer 2s ease-in-out infinite;",
        ),
        keyframes: Some(text(
            "@keyframes shimmer {\n  0% { background-position: -200% 0; }\n  100% { background-position: 200% 0; }\n}\n",
        )),
        base_styles: None,
    },
];

pub static ENTRANCE_ANIMATIONS: &[AnimationOption] = &[
    none_option(AnimationKind::Entrance, "No entrance animation"),
    AnimationOption {
        id: text("fade-in"),
        name: text("Fade In"),
        description: text("Fades in from transparent"),
        kind: AnimationKind::Entrance,
        css_class: text("anim-enter-fade"),
        declarations: text("animation: fadeIn 0.6s ease-out;"),
        keyframes: Some(text(
            "@keyframes fadeIn {\n  0% { opacity: 0; }\n  100% { opacity: 1; }\n}\n",
        )),
        base_styles: None,
    },
    AnimationOption {
        id: text("slide-up"),
        name: text("Slide Up"),
        description: text("Slides up into place"),
        kind: AnimationKind::Entrance,
        css_class: text("anim-enter-slide-up"),
        declarations: text("animation: slideUp 0.6s ease-out;"),
        keyframes: Some(text(
            "@keyframes slideUp {\n  0% { transform: translateY(20px); opacity: 0; }\n  100% { transform: translateY(0); opacity: 1; }\n}\n",
        )),
        base_styles: None,
    },
    AnimationOption {
        id: text("zoom-in"),
        name: text("Zoom In"),
        description: text("Grows from slightly smaller"),
        kind: AnimationKind::Entrance,
        css_class: text("anim-enter-zoom"),
        declarations: text("animation: zoomIn 0.5s ease-out;"),
        keyframes: Some(text(
            "@keyframes zoomIn {\n  0% { transform: scale(0.8); opacity: 0; }\n  100% { transform: scale(1); opacity: 1; }\n}\n",
        )),
        base_styles: None,
    },
    AnimationOption {
        id: text("flip-in"),
        name: text("Flip In"),
        description: text("Flips in around the vertical axis"),
        kind: AnimationKind::Entrance,
        css_class: text("anim-enter-flip"),
        declarations: text("animation: flipIn 0.8s ease-out;"),
        keyframes: Some(text(
            "@keyframes flipIn {\n  0% { transform: perspective(400px) rotateY(-90deg); opacity: 0; }\n  100% { transform: perspective(400px) rotateY(0deg); opacity: 1; }\n}\n",
        )),
        base_styles: None,
    },
];

/// 按 id 查找悬停动画
pub fn find_hover(id: &str) -> Option<&'static AnimationOption> {
    HOVER_ANIMATIONS.iter().find(|option| option.id == id)
}

/// 按 id 查找入场动画
pub fn find_entrance(id: &str) -> Option<&'static AnimationOption> {
    ENTRANCE_ANIMATIONS.iter().find(|option| option.id == id)
}

/// 按 id 选择悬停动画，`none` 或未知 id 视为未选择
pub fn select_hover(id: &str) -> Option<AnimationOption> {
    find_hover(id).filter(|option| !option.is_none()).cloned()
}

/// 按 id 选择入场动画，`none` 或未知 id 视为未选择
pub fn select_entrance(id: &str) -> Option<AnimationOption> {
    find_entrance(id).filter(|option| !option.is_none()).cloned()
}

fn active(option: Option<&AnimationOption>) -> Option<&AnimationOption> {
    option.filter(|option| !option.is_none() && !option.css_class.is_empty())
}

/// 组合动画类名
///
/// 入场类在前（挂载时生效），悬停类在后（靠源码顺序胜出）。
/// `None` 和 `none` 哨兵都会被跳过。
pub fn combine_classes(
    hover: Option<&AnimationOption>,
    entrance: Option<&AnimationOption>,
) -> String {
    [active(entrance), active(hover)]
        .into_iter()
        .flatten()
        .map(|option| &*option.css_class)
        .collect::<Vec<_>>()
        .join(" ")
}
