mod button;
pub mod inline;
pub mod link;
pub mod markup;
pub mod preview;
pub mod standalone;
pub mod style;

use runbutton_core::{GenerateOptions, NamingMode, Result};

// Re-exports
pub use link::{deep_link, DEFAULT_POSTMAN_HOST};
pub use preview::{preview_model, PreviewModel};
pub use runbutton_core::{combine_classes, shade, GenerateError};
pub use standalone::BUTTON_CLASS;
pub use style::{emit_animation_css, style_css};

/// 文档标题与片段注释的默认前缀
pub const DEFAULT_TITLE_PREFIX: &str = "Run in Postman Button";

/// 生成器选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// 深链接主机（默认 app.getpostman.com）
    pub postman_host: String,
    /// 内嵌片段的类名策略（默认 Readable）
    pub naming_mode: NamingMode,
    /// 是否压缩内嵌片段的 CSS（默认 false）
    pub minify_inline: bool,
    /// 文档标题前缀
    pub document_title_prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            postman_host: DEFAULT_POSTMAN_HOST.to_string(),
            naming_mode: NamingMode::default(),
            minify_inline: false,
            document_title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }
}

/// 按钮代码生成器
///
/// 所有方法都是纯函数：不修改输入，相同输入得到相同字节。
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// 设置深链接主机（builder 模式）
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.options.postman_host = host.into();
        self
    }

    /// 设置内嵌片段的类名策略（builder 模式）
    pub fn with_naming_mode(mut self, mode: NamingMode) -> Self {
        self.options.naming_mode = mode;
        self
    }

    /// 设置是否压缩内嵌片段的 CSS（builder 模式）
    pub fn with_minified_inline(mut self, enabled: bool) -> Self {
        self.options.minify_inline = enabled;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// 完整的 `<!DOCTYPE html>` 文档
    pub fn standalone_html(&self, options: &GenerateOptions) -> Result<String> {
        standalone::render(&self.options, options)
    }

    /// `<style>` + `<a>` 片段
    pub fn inline_snippet(&self, options: &GenerateOptions) -> Result<String> {
        inline::render(&self.options, options)
    }

    pub fn deep_link(&self, options: &GenerateOptions) -> String {
        deep_link(
            &self.options.postman_host,
            &options.collection_id,
            &options.workspace_id,
        )
    }
}

/// 使用默认选项生成独立 HTML 文档
///
/// 两个 ID 是否为空由调用方检查（见 [`GenerateOptions::validate`]）。
pub fn generate_standalone_html(options: &GenerateOptions) -> Result<String> {
    Generator::new().standalone_html(options)
}

/// 使用默认选项生成内嵌片段
pub fn generate_inline_snippet(options: &GenerateOptions) -> Result<String> {
    Generator::new().inline_snippet(options)
}
