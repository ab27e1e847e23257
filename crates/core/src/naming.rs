use serde::{Deserialize, Serialize};

use crate::types::Declaration;

/// 嵌入代码片段使用的类名前缀
pub const SCOPED_CLASS_PREFIX: &str = "custom-postman-button";

/// 作用域类名策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingMode {
    /// 按样式 id 命名（如 "custom-postman-button-pixel-art"）
    #[default]
    Readable,
    /// 基于样式 id 与声明内容的 hash，同一页面可放多个同款不同色的按钮
    Hash,
}

/// 命名策略 trait
pub trait NamingStrategy {
    fn generate_name(&self, style_id: &str, declarations: &[Declaration]) -> String;
}

/// Readable 命名策略：前缀 + 清理后的样式 id
pub struct ReadableNaming;

impl ReadableNaming {
    /// 只保留类名安全字符，其它字符替换为 '-'
    fn sanitize(id: &str) -> String {
        id.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl NamingStrategy for ReadableNaming {
    fn generate_name(&self, style_id: &str, _declarations: &[Declaration]) -> String {
        let cleaned = Self::sanitize(style_id);
        if cleaned.is_empty() {
            return SCOPED_CLASS_PREFIX.to_string();
        }
        format!("{}-{}", SCOPED_CLASS_PREFIX, cleaned)
    }
}

/// Hash 命名策略：基于样式 id 与声明生成稳定 hash
pub struct HashNaming;

impl NamingStrategy for HashNaming {
    fn generate_name(&self, style_id: &str, declarations: &[Declaration]) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(style_id.as_bytes());
        for decl in declarations {
            hasher.update(b"\0");
            hasher.update(decl.property.as_bytes());
            hasher.update(b":");
            hasher.update(decl.value.as_bytes());
        }

        // 取前 6 个字节的十六进制表示
        let hex = hasher.finalize().to_hex();
        format!("pmb_{}", &hex[..12])
    }
}

/// 根据 NamingMode 创建对应的策略
pub fn create_naming_strategy(mode: NamingMode) -> Box<dyn NamingStrategy> {
    match mode {
        NamingMode::Readable => Box::new(ReadableNaming),
        NamingMode::Hash => Box::new(HashNaming),
    }
}
