//! 样式配方：样式 id → CSS 声明
//!
//! 所有样式共享一组基础声明，再按 id 叠加各自的配方。
//! 未登记的 id 使用默认渐变配方，保证任何样式都能渲染出可用的按钮。

use indexmap::IndexMap;
use phf::phf_map;

use crate::color::{shade, with_alpha};
use crate::error::ColorError;
use crate::types::{ButtonStyle, Declaration};

/// 按钮字体栈
pub const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen', 'Ubuntu', 'Cantarell', sans-serif";

/// 视觉配方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// 默认：线性渐变 + 样式自带阴影
    Gradient,
    OutlinedMinimal,
    Glassmorphism,
    RetroVintage,
    Elevated3d,
    PixelArt,
    SubtleShimmer,
    SkewedDynamic,
    MinimalistIcon,
    BoldBlock,
    ComicBook,
    CautionTape,
    CyberpunkGlitch,
    HandDrawn,
    Ugly90s,
    BaroqueLuxury,
    WoodGrain,
    LiquidMetal,
    Blueprint,
    RustedMetal,
    SatinFinish,
    Letterpress,
    DualTone,
    Aurora,
    MinimalistStroke,
}

/// 样式 id 到配方的映射，编译期生成
static RECIPES: phf::Map<&'static str, Recipe> = phf_map! {
    "outlined-minimal" => Recipe::OutlinedMinimal,
    "glassmorphism" => Recipe::Glassmorphism,
    "retro-vintage" => Recipe::RetroVintage,
    "elevated-3d" => Recipe::Elevated3d,
    "pixel-art" => Recipe::PixelArt,
    "subtle-shimmer" => Recipe::SubtleShimmer,
    "skewed-dynamic" => Recipe::SkewedDynamic,
    "minimalist-icon" => Recipe::MinimalistIcon,
    "bold-block" => Recipe::BoldBlock,
    "comic-book" => Recipe::ComicBook,
    "caution-tape" => Recipe::CautionTape,
    "cyberpunk-glitch" => Recipe::CyberpunkGlitch,
    "hand-drawn" => Recipe::HandDrawn,
    "ugly-90s" => Recipe::Ugly90s,
    "baroque-luxury" => Recipe::BaroqueLuxury,
    "wood-grain" => Recipe::WoodGrain,
    "liquid-metal" => Recipe::LiquidMetal,
    "blueprint" => Recipe::Blueprint,
    "rusted-metal" => Recipe::RustedMetal,
    "satin-finish" => Recipe::SatinFinish,
    "letterpress" => Recipe::Letterpress,
    "dual-tone" => Recipe::DualTone,
    "aurora" => Recipe::Aurora,
    "minimalist-stroke" => Recipe::MinimalistStroke,
};

impl Recipe {
    /// 查找样式 id 对应的配方，未登记时回退到 [`Recipe::Gradient`]
    pub fn for_style(id: &str) -> Self {
        match RECIPES.get(id) {
            Some(recipe) => *recipe,
            None => {
                log::debug!("no dedicated recipe for style {:?}, using gradient", id);
                Recipe::Gradient
            }
        }
    }

    /// 生成该配方叠加在基础声明之上的声明
    pub fn declarations(
        self,
        style: &ButtonStyle,
        from: &str,
        to: &str,
    ) -> Result<Vec<Declaration>, ColorError> {
        let linear = || format!("linear-gradient(135deg, {}, {})", from, to);

        let decls = match self {
            Recipe::Gradient => vec![
                Declaration::new("background", linear()),
                Declaration::new("box-shadow", &*style.shadow),
            ],
            Recipe::OutlinedMinimal => vec![
                Declaration::new("background", "transparent"),
                Declaration::important("border", format!("2px solid {}", from)),
                Declaration::new("box-shadow", "none"),
                Declaration::important("color", from),
            ],
            Recipe::Glassmorphism => vec![
                Declaration::new(
                    "background",
                    format!(
                        "linear-gradient(135deg, {}, {})",
                        with_alpha(from, 25.0),
                        with_alpha(to, 25.0)
                    ),
                ),
                Declaration::new("backdrop-filter", "blur(20px)"),
                Declaration::important("border", "1px solid rgba(255,255,255,0.1)"),
                Declaration::new("box-shadow", &*style.shadow),
            ],
            Recipe::RetroVintage => {
                let ink = shade(from, -40)?;
                vec![
                    Declaration::new("background", linear()),
                    Declaration::new("text-transform", "uppercase"),
                    Declaration::new("letter-spacing", "1px"),
                    Declaration::new("box-shadow", format!("8px 8px 0 {}", ink)),
                    Declaration::important("color", ink),
                ]
            }
            Recipe::Elevated3d => vec![
                Declaration::new("background", linear()),
                Declaration::new(
                    "box-shadow",
                    format!("0 8px 0 {}, 0 12px 25px {}", shade(to, -20)?, with_alpha(to, 40.0)),
                ),
            ],
            Recipe::PixelArt => vec![
                Declaration::new("background", linear()),
                Declaration::new("box-shadow", format!("4px 4px 0px {}", shade(to, -40)?)),
                Declaration::new("border", format!("4px solid {}", shade(to, -50)?)),
            ],
            Recipe::SubtleShimmer => vec![
                Declaration::new("background", linear()),
                Declaration::new("box-shadow", format!("0 10px 20px {}", with_alpha(to, 20.0))),
            ],
            Recipe::SkewedDynamic => vec![
                Declaration::new("background", linear()),
                Declaration::new("box-shadow", format!("0 10px 20px {}", with_alpha(to, 20.0))),
                Declaration::new("transform", "skew(-10deg)"),
            ],
            Recipe::MinimalistIcon => vec![
                Declaration::new("background", linear()),
                Declaration::new("box-shadow", format!("0 4px 10px {}", with_alpha(to, 30.0))),
                Declaration::new("border-radius", "50%"),
                Declaration::new("padding", "16px"),
            ],
            Recipe::BoldBlock => {
                let ink = shade(from, -50)?;
                vec![
                    Declaration::new("background", linear()),
                    Declaration::new("box-shadow", format!("0 0 0 4px {}", ink)),
                    Declaration::important("color", ink.as_str()),
                    Declaration::new("border", format!("2px solid {}", ink)),
                ]
            }
            Recipe::ComicBook => {
                let ink = shade(to, -50)?;
                vec![
                    Declaration::new("background", linear()),
                    Declaration::new("border", format!("3px solid {}", ink)),
                    Declaration::new("box-shadow", format!("6px 6px 0px {}", ink)),
                    Declaration::important("color", ink),
                    Declaration::new("font-weight", "900"),
                ]
            }
            Recipe::CautionTape => {
                let ink = shade(to, -60)?;
                vec![
                    Declaration::new(
                        "background-image",
                        format!(
                            "repeating-linear-gradient(45deg, {from}, {from} 30px, {to} 30px, {to} 60px)",
                            from = from,
                            to = to
                        ),
                    ),
                    Declaration::important("color", ink.as_str()),
                    Declaration::new("font-weight", "800"),
                    Declaration::new("border", format!("4px solid {}", ink)),
                ]
            }
            Recipe::CyberpunkGlitch => vec![
                Declaration::new("background", linear()),
                Declaration::new("box-shadow", format!("0 0 15px {}", to)),
                Declaration::new("text-shadow", format!("2px 2px 0px {}", from)),
            ],
            Recipe::HandDrawn => {
                let ink = shade(to, -20)?;
                vec![
                    Declaration::new("background", linear()),
                    Declaration::new("border", format!("3px solid {}", ink)),
                    Declaration::new("border-radius", "16px 4px 16px 4px / 4px 16px 4px 16px"),
                    Declaration::important("color", ink),
                ]
            }
            Recipe::Ugly90s => vec![
                Declaration::new("background", linear()),
                Declaration::new("border", format!("4px solid {}", style.text_color)),
                Declaration::new("box-shadow", format!("4px 4px 0px {}", style.text_color)),
                Declaration::new("font-weight", "900"),
            ],
            Recipe::BaroqueLuxury => vec![
                Declaration::new("background", linear()),
                Declaration::new("border", format!("2px solid {}", shade(from, -20)?)),
                Declaration::new("box-shadow", format!("0 0 15px {}", from)),
                Declaration::new("font-family", "serif"),
            ],
            Recipe::WoodGrain => vec![
                Declaration::new(
                    "background-image",
                    format!(
                        "linear-gradient(to right, {}, {}), linear-gradient(to right, rgba(255,255,255,0.2) 50%, transparent 50%), linear-gradient(to bottom, rgba(255,255,255,0.2) 50%, transparent 50%)",
                        from, to
                    ),
                ),
                Declaration::new("background-blend-mode", "screen"),
                Declaration::new("background-size", "100%, 8px 8px, 8px 8px"),
                Declaration::new("border", format!("2px solid {}", shade(from, -20)?)),
            ],
            Recipe::LiquidMetal => vec![
                Declaration::new(
                    "background",
                    format!("radial-gradient(circle at 100% 100%, {} 0, {} 100%)", from, to),
                ),
                Declaration::new("box-shadow", format!("0 0 15px {}", to)),
                Declaration::important("color", shade(to, -40)?),
            ],
            Recipe::Blueprint => vec![
                Declaration::new("background", from),
                Declaration::new("border", format!("2px dashed {}", to)),
                Declaration::important("color", to),
            ],
            Recipe::RustedMetal => vec![
                Declaration::new(
                    "background-image",
                    format!(
                        "linear-gradient({}, {}), repeating-linear-gradient(45deg, rgba(255,255,255,0.05), rgba(255,255,255,0.05) 2px, transparent 2px, transparent 4px)",
                        from, to
                    ),
                ),
                Declaration::new("box-shadow", format!("inset 0 0 10px {}", shade(from, -30)?)),
            ],
            Recipe::SatinFinish => vec![
                Declaration::new("background", format!("linear-gradient(180deg, {}, {})", from, to)),
                Declaration::new(
                    "box-shadow",
                    format!("inset 0 1px 0 {}, 0 10px 20px rgba(0,0,0,0.1)", shade(from, 20)?),
                ),
            ],
            Recipe::Letterpress => {
                let highlight = shade(from, 10)?;
                vec![
                    Declaration::new("background", from),
                    Declaration::new(
                        "box-shadow",
                        format!("inset 0 2px 4px {}, 0 1px 1px {}", shade(from, -10)?, highlight),
                    ),
                    Declaration::new("text-shadow", format!("0 1px 1px {}", highlight)),
                ]
            }
            Recipe::DualTone => vec![Declaration::new(
                "background",
                format!("linear-gradient(90deg, {} 50%, {} 50%)", from, to),
            )],
            Recipe::Aurora => vec![
                Declaration::new(
                    "background-image",
                    format!(
                        "radial-gradient(ellipse at bottom, {}, transparent), radial-gradient(ellipse at top, {}, transparent)",
                        from, to
                    ),
                ),
                Declaration::new("box-shadow", format!("0 0 20px {}", to)),
            ],
            Recipe::MinimalistStroke => vec![
                Declaration::new("background", "transparent"),
                Declaration::new("border", format!("2px solid {}", from)),
                Declaration::important("color", from),
            ],
        };

        Ok(decls)
    }
}

/// 所有样式共享的基础声明：盒模型、排版、交互与层叠上下文
pub fn base_declarations(style: &ButtonStyle) -> Vec<Declaration> {
    vec![
        Declaration::new("color", &*style.text_color),
        Declaration::new("border-radius", &*style.border_radius),
        Declaration::new("padding", &*style.padding),
        Declaration::new("font-size", &*style.font_size),
        Declaration::new("font-weight", &*style.font_weight),
        Declaration::new("cursor", "pointer"),
        Declaration::new("transition", "all 0.3s ease"),
        Declaration::new("font-family", FONT_STACK),
        Declaration::new("text-decoration", "none"),
        Declaration::new("display", "inline-flex"),
        Declaration::new("align-items", "center"),
        Declaration::new("gap", "8px"),
        Declaration::new("position", "relative"),
        Declaration::new("overflow", "hidden"),
        Declaration::new("border", "none"),
    ]
}

/// 叠加声明：后者覆盖前者，位置保持首次出现的顺序
fn layer(base: Vec<Declaration>, overrides: Vec<Declaration>) -> Vec<Declaration> {
    let mut map: IndexMap<String, String> = IndexMap::new();

    for decl in base.into_iter().chain(overrides) {
        map.insert(decl.property, decl.value);
    }

    map.into_iter()
        .map(|(property, value)| Declaration { property, value })
        .collect()
}

/// 计算样式的完整声明列表
///
/// 对固定输入结果完全确定：预览与两种导出都依赖这一点。
pub fn style_declarations(
    style: &ButtonStyle,
    from: &str,
    to: &str,
) -> Result<Vec<Declaration>, ColorError> {
    let recipe = Recipe::for_style(&style.id);
    let overrides = recipe.declarations(style, from, to)?;
    Ok(layer(base_declarations(style), overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_style, find_style, BUTTON_STYLES};
    use pretty_assertions::assert_eq;

    fn value_of<'a>(decls: &'a [Declaration], property: &str) -> Option<&'a str> {
        decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    #[test]
    fn test_every_style_renders_something() {
        for style in BUTTON_STYLES {
            let decls =
                style_declarations(style, &style.gradient_from, &style.gradient_to).unwrap();
            assert!(
                decls
                    .iter()
                    .any(|d| d.property.starts_with("background") || d.property == "border"),
                "{} has no background or border",
                style.id
            );
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_gradient() {
        let mut style = default_style().clone();
        style.id = "not-in-the-table".into();
        let decls = style_declarations(&style, "#111111", "#222222").unwrap();
        assert_eq!(
            value_of(&decls, "background"),
            Some("linear-gradient(135deg, #111111, #222222)")
        );
        assert_eq!(value_of(&decls, "box-shadow"), Some(&*style.shadow));
    }

    #[test]
    fn test_override_keeps_first_position() {
        let style = find_style("outlined-minimal").unwrap();
        let decls = style_declarations(style, "#ff6c37", "#ff6c37").unwrap();
        let props: Vec<&str> = decls.iter().map(|d| d.property.as_str()).collect();

        // border 与 color 都来自基础声明的位置
        assert_eq!(props.iter().filter(|p| **p == "border").count(), 1);
        assert_eq!(props[0], "color");
        assert_eq!(value_of(&decls, "color"), Some("#ff6c37 !important"));
        assert_eq!(value_of(&decls, "border"), Some("2px solid #ff6c37 !important"));
    }

    #[test]
    fn test_elevated_3d_shades_border() {
        let style = find_style("elevated-3d").unwrap();
        let decls = style_declarations(style, "#22c55e", "#808080").unwrap();
        assert_eq!(
            value_of(&decls, "box-shadow"),
            Some("0 8px 0 #676767, 0 12px 25px #80808066")
        );
    }

    #[test]
    fn test_pixel_art_uses_two_shades() {
        let style = find_style("pixel-art").unwrap();
        let decls = style_declarations(style, "#38bdf8", "#646464").unwrap();
        assert_eq!(value_of(&decls, "box-shadow"), Some("4px 4px 0px #3c3c3c"));
        assert_eq!(value_of(&decls, "border"), Some("4px solid #323232"));
    }

    #[test]
    fn test_minimalist_icon_is_round() {
        let style = find_style("minimalist-icon").unwrap();
        let decls = style_declarations(style, "#ff6c37", "#f97316").unwrap();
        assert_eq!(value_of(&decls, "border-radius"), Some("50%"));
        assert_eq!(value_of(&decls, "padding"), Some("16px"));
    }

    #[test]
    fn test_retro_vintage_uppercases() {
        let style = find_style("retro-vintage").unwrap();
        let decls = style_declarations(style, "#f59e0b", "#d97706").unwrap();
        assert_eq!(value_of(&decls, "text-transform"), Some("uppercase"));
    }

    #[test]
    fn test_invalid_gradient_is_an_error() {
        let style = find_style("pixel-art").unwrap();
        assert!(style_declarations(style, "#38bdf8", "oops").is_err());
    }

    #[test]
    fn test_deterministic() {
        let style = find_style("letterpress").unwrap();
        let a = style_declarations(style, "#e5e7eb", "#d1d5db").unwrap();
        let b = style_declarations(style, "#e5e7eb", "#d1d5db").unwrap();
        assert_eq!(a, b);
    }
}
