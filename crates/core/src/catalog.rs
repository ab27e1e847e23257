//! 按钮样式目录
//!
//! 固定、只读的样式列表。顺序即画廊展示顺序，第一项为默认样式。

use std::borrow::Cow;

use crate::types::ButtonStyle;

macro_rules! button_style {
    (
        id: $id:literal,
        name: $name:literal,
        description: $description:literal,
        gradient: ($from:literal, $to:literal),
        text_color: $text:literal,
        border_radius: $radius:literal,
        padding: $padding:literal,
        font_size: $font_size:literal,
        font_weight: $font_weight:literal,
        shadow: $shadow:literal,
        hover_effect: $hover:literal $(,)?
    ) => {
        ButtonStyle {
            id: Cow::Borrowed($id),
            name: Cow::Borrowed($name),
            description: Cow::Borrowed($description),
            gradient_from: Cow::Borrowed($from),
            gradient_to: Cow::Borrowed($to),
            text_color: Cow::Borrowed($text),
            border_radius: Cow::Borrowed($radius),
            padding: Cow::Borrowed($padding),
            font_size: Cow::Borrowed($font_size),
            font_weight: Cow::Borrowed($font_weight),
            shadow: Cow::Borrowed($shadow),
            hover_effect: Cow::Borrowed($hover),
        }
    };
}

pub static BUTTON_STYLES: &[ButtonStyle] = &[
    button_style! {
        id: "default",
        name: "Postman Classic",
        description: "The familiar Postman orange with a soft drop shadow",
        gradient: ("#ff6c37", "#ff8f5e"),
        text_color: "#ffffff",
        border_radius: "8px",
        padding: "12px 24px",
        font_size: "16px",
        font_weight: "600",
        shadow: "0 4px 14px rgba(255, 108, 55, 0.35)",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "neon-glow",
        name: "Neon Glow",
        description: "Electric gradient with a bright outer glow",
        gradient: ("#8b5cf6", "#ec4899"),
        text_color: "#ffffff",
        border_radius: "12px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "0 0 20px rgba(236, 72, 153, 0.6), 0 0 40px rgba(139, 92, 246, 0.4)",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "outlined-minimal",
        name: "Outlined Minimal",
        description: "Transparent fill with a crisp colored outline",
        gradient: ("#ff6c37", "#ff6c37"),
        text_color: "#ff6c37",
        border_radius: "8px",
        padding: "12px 24px",
        font_size: "16px",
        font_weight: "600",
        shadow: "none",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "glassmorphism",
        name: "Glassmorphism",
        description: "Frosted translucent glass with a blurred backdrop",
        gradient: ("#60a5fa", "#a78bfa"),
        text_color: "#ffffff",
        border_radius: "16px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "600",
        shadow: "0 8px 32px rgba(31, 38, 135, 0.37)",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "retro-vintage",
        name: "Retro Vintage",
        description: "Warm tones, uppercase lettering and a hard offset shadow",
        gradient: ("#f59e0b", "#d97706"),
        text_color: "#78350f",
        border_radius: "4px",
        padding: "14px 28px",
        font_size: "15px",
        font_weight: "800",
        shadow: "6px 6px 0 #78350f",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "elevated-3d",
        name: "Elevated 3D",
        description: "Chunky raised button with a solid under-edge",
        gradient: ("#22c55e", "#16a34a"),
        text_color: "#ffffff",
        border_radius: "12px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "0 8px 0 #15803d",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "pixel-art",
        name: "Pixel Art",
        description: "Square corners and an 8-bit stepped shadow",
        gradient: ("#38bdf8", "#0284c7"),
        text_color: "#ffffff",
        border_radius: "0px",
        padding: "12px 24px",
        font_size: "14px",
        font_weight: "700",
        shadow: "4px 4px 0 #075985",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "subtle-shimmer",
        name: "Subtle Shimmer",
        description: "Smooth gradient with a gentle colored shadow",
        gradient: ("#6366f1", "#8b5cf6"),
        text_color: "#ffffff",
        border_radius: "10px",
        padding: "12px 24px",
        font_size: "16px",
        font_weight: "600",
        shadow: "0 10px 20px rgba(99, 102, 241, 0.2)",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "skewed-dynamic",
        name: "Skewed Dynamic",
        description: "Slanted silhouette that looks like it's moving",
        gradient: ("#f43f5e", "#fb923c"),
        text_color: "#ffffff",
        border_radius: "6px",
        padding: "12px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "0 10px 20px rgba(244, 63, 94, 0.2)",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "minimalist-icon",
        name: "Minimalist Icon",
        description: "Round icon-only button without a label",
        gradient: ("#ff6c37", "#f97316"),
        text_color: "#ffffff",
        border_radius: "50%",
        padding: "16px",
        font_size: "16px",
        font_weight: "600",
        shadow: "0 4px 10px rgba(249, 115, 22, 0.3)",
        hover_effect: "hover:rotate-6",
    },
    button_style! {
        id: "icon-heavy",
        name: "Icon Heavy",
        description: "Oversized icon with a short punchy label",
        gradient: ("#0ea5e9", "#6366f1"),
        text_color: "#ffffff",
        border_radius: "14px",
        padding: "14px 22px",
        font_size: "18px",
        font_weight: "800",
        shadow: "0 8px 24px rgba(14, 165, 233, 0.35)",
        hover_effect: "hover:scale-110",
    },
    button_style! {
        id: "bold-block",
        name: "Bold Block",
        description: "Bright block with a thick dark frame",
        gradient: ("#facc15", "#fde047"),
        text_color: "#713f12",
        border_radius: "6px",
        padding: "14px 28px",
        font_size: "17px",
        font_weight: "900",
        shadow: "0 0 0 4px #713f12",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "comic-book",
        name: "Comic Book",
        description: "Inked outline and a pop-art drop shadow",
        gradient: ("#fde047", "#f97316"),
        text_color: "#000000",
        border_radius: "10px",
        padding: "14px 28px",
        font_size: "17px",
        font_weight: "900",
        shadow: "6px 6px 0 #000000",
        hover_effect: "hover:rotate-2",
    },
    button_style! {
        id: "caution-tape",
        name: "Caution Tape",
        description: "Hazard stripes you cannot ignore",
        gradient: ("#facc15", "#1f2937"),
        text_color: "#000000",
        border_radius: "4px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "800",
        shadow: "none",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "cyberpunk-glitch",
        name: "Cyberpunk Glitch",
        description: "Neon magenta and cyan with a split text shadow",
        gradient: ("#06b6d4", "#d946ef"),
        text_color: "#ffffff",
        border_radius: "2px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "800",
        shadow: "0 0 15px #d946ef",
        hover_effect: "hover:skew-x-3",
    },
    button_style! {
        id: "hand-drawn",
        name: "Hand Drawn",
        description: "Wobbly sketched outline with an organic shape",
        gradient: ("#fef3c7", "#fcd34d"),
        text_color: "#92400e",
        border_radius: "16px 4px 16px 4px / 4px 16px 4px 16px",
        padding: "12px 26px",
        font_size: "16px",
        font_weight: "700",
        shadow: "none",
        hover_effect: "hover:rotate-1",
    },
    button_style! {
        id: "ugly-90s",
        name: "Ugly 90s",
        description: "Loud clashing colors straight from a GeoCities page",
        gradient: ("#00ff00", "#ff00ff"),
        text_color: "#0000ff",
        border_radius: "0px",
        padding: "12px 24px",
        font_size: "18px",
        font_weight: "900",
        shadow: "4px 4px 0 #0000ff",
        hover_effect: "hover:rotate-3",
    },
    button_style! {
        id: "baroque-luxury",
        name: "Baroque Luxury",
        description: "Gilded gold with a serif face and a warm halo",
        gradient: ("#d4af37", "#b8860b"),
        text_color: "#3b2f0b",
        border_radius: "6px",
        padding: "14px 30px",
        font_size: "17px",
        font_weight: "700",
        shadow: "0 0 15px #d4af37",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "wood-grain",
        name: "Wood Grain",
        description: "Natural timber tones with a subtle grain texture",
        gradient: ("#a0522d", "#8b4513"),
        text_color: "#fff8dc",
        border_radius: "8px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "0 4px 10px rgba(0, 0, 0, 0.3)",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "liquid-metal",
        name: "Liquid Metal",
        description: "Polished chrome with a radial sheen",
        gradient: ("#f1f5f9", "#94a3b8"),
        text_color: "#1e293b",
        border_radius: "999px",
        padding: "14px 30px",
        font_size: "16px",
        font_weight: "700",
        shadow: "0 0 15px #94a3b8",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "blueprint",
        name: "Blueprint",
        description: "Technical drawing with a dashed outline",
        gradient: ("#1e3a8a", "#bfdbfe"),
        text_color: "#bfdbfe",
        border_radius: "4px",
        padding: "12px 24px",
        font_size: "15px",
        font_weight: "600",
        shadow: "none",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "rusted-metal",
        name: "Rusted Metal",
        description: "Weathered iron with an inner grime vignette",
        gradient: ("#b7410e", "#7c2d12"),
        text_color: "#fde68a",
        border_radius: "6px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "inset 0 0 10px #5c1f00",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "satin-finish",
        name: "Satin Finish",
        description: "Soft vertical sheen with a highlighted top edge",
        gradient: ("#f472b6", "#db2777"),
        text_color: "#ffffff",
        border_radius: "12px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "600",
        shadow: "0 10px 20px rgba(0, 0, 0, 0.1)",
        hover_effect: "hover:-translate-y-1",
    },
    button_style! {
        id: "letterpress",
        name: "Letterpress",
        description: "Debossed surface with an embossed label",
        gradient: ("#e5e7eb", "#d1d5db"),
        text_color: "#4b5563",
        border_radius: "8px",
        padding: "12px 26px",
        font_size: "16px",
        font_weight: "700",
        shadow: "inset 0 2px 4px rgba(0, 0, 0, 0.1)",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "dual-tone",
        name: "Dual Tone",
        description: "Hard split between two flat colors",
        gradient: ("#0f172a", "#ff6c37"),
        text_color: "#ffffff",
        border_radius: "8px",
        padding: "12px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "none",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "aurora",
        name: "Aurora",
        description: "Northern lights glowing from top and bottom",
        gradient: ("#34d399", "#818cf8"),
        text_color: "#ffffff",
        border_radius: "14px",
        padding: "14px 28px",
        font_size: "16px",
        font_weight: "700",
        shadow: "0 0 20px #818cf8",
        hover_effect: "hover:scale-105",
    },
    button_style! {
        id: "minimalist-stroke",
        name: "Minimalist Stroke",
        description: "Thin line work on a transparent ground",
        gradient: ("#0f172a", "#334155"),
        text_color: "#0f172a",
        border_radius: "999px",
        padding: "10px 22px",
        font_size: "15px",
        font_weight: "500",
        shadow: "none",
        hover_effect: "hover:-translate-y-1",
    },
];

/// 默认样式（目录第一项）
pub fn default_style() -> &'static ButtonStyle {
    &BUTTON_STYLES[0]
}

/// 按 id 查找样式
pub fn find_style(id: &str) -> Option<&'static ButtonStyle> {
    BUTTON_STYLES.iter().find(|style| style.id == id)
}

/// 所有样式 id，按目录顺序
pub fn style_ids() -> impl Iterator<Item = &'static str> {
    BUTTON_STYLES.iter().map(|style| &*style.id)
}
