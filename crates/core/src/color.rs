//! 颜色工具
//!
//! 按百分比调整 hex 颜色的明暗，以及为 hex 颜色追加 alpha 通道。

use palette::Srgb;

use crate::error::ColorError;

/// 按百分比调亮（正数）或调暗（负数）hex 颜色
///
/// 每个通道按“到白色/黑色剩余距离”的比例移动：
/// - 调亮：`c + (255 - c) * p / 100`
/// - 调暗：`c + c * p / 100`
///
/// 结果截断到 [0, 255]，输出 `#rrggbb`，输入含大写字母时输出也用大写。
/// 只接受 6 位 hex（可选 `#` 前缀），3 位简写等其他形式返回 [`ColorError::InvalidHex`]。
pub fn shade(hex: &str, percent: i32) -> Result<String, ColorError> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let rgb: Srgb<u8> = digits
        .parse()
        .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;

    let shaded = Srgb::new(
        shade_channel(rgb.red, percent),
        shade_channel(rgb.green, percent),
        shade_channel(rgb.blue, percent),
    );

    if digits.bytes().any(|b| b.is_ascii_uppercase()) {
        Ok(format!(
            "#{:02X}{:02X}{:02X}",
            shaded.red, shaded.green, shaded.blue
        ))
    } else {
        Ok(format!(
            "#{:02x}{:02x}{:02x}",
            shaded.red, shaded.green, shaded.blue
        ))
    }
}

fn shade_channel(channel: u8, percent: i32) -> u8 {
    let c = i32::from(channel);
    let adjusted = if percent >= 0 {
        c + (255 - c) * percent / 100
    } else {
        c + c * percent / 100
    };
    adjusted.clamp(0, 255) as u8
}

/// 将透明度百分比转为 hex 字节（0-255），返回 2 位 hex 字符串
fn alpha_percent_to_hex(percent: f64) -> String {
    let byte = (percent.clamp(0.0, 100.0) / 100.0 * 255.0).round() as u8;
    format!("{:02x}", byte)
}

/// 为 hex 颜色追加 alpha 通道：`#rrggbb` + 40% → `#rrggbb66`
///
/// 颜色按原样保留，只在末尾拼接两位 alpha
pub fn with_alpha(hex: &str, alpha_pct: f64) -> String {
    format!("{}{}", hex, alpha_percent_to_hex(alpha_pct))
}
