use std::fmt::Write;

use runbutton_core::Declaration;

use crate::ir::{CssNode, Rule, Stylesheet};

/// 输出配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitConfig {
    /// 压缩输出（去掉换行与缩进）
    pub minify: bool,
    /// 声明缩进宽度（空格）
    pub indent_width: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            minify: false,
            indent_width: 2,
        }
    }
}

impl EmitConfig {
    pub fn minified() -> Self {
        Self {
            minify: true,
            ..Self::default()
        }
    }
}

/// 输出声明块内容（不含选择器和花括号）
///
/// 非压缩模式下每行一条声明，行间以 '\n' 分隔，末尾没有换行。
/// 相同输入总是得到相同字节。
pub fn emit_declarations(
    declarations: &[Declaration],
    config: &EmitConfig,
) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    write_declarations(&mut output, declarations, config)?;
    Ok(output)
}

fn write_declarations(
    output: &mut String,
    declarations: &[Declaration],
    config: &EmitConfig,
) -> std::fmt::Result {
    for (i, decl) in declarations.iter().enumerate() {
        if config.minify {
            write!(output, "{}:{};", decl.property, decl.value)?;
        } else {
            if i > 0 {
                output.push('\n');
            }
            write!(
                output,
                "{:indent$}{}: {};",
                "",
                decl.property,
                decl.value,
                indent = config.indent_width
            )?;
        }
    }
    Ok(())
}

fn write_rule(output: &mut String, rule: &Rule, config: &EmitConfig) -> std::fmt::Result {
    if config.minify {
        write!(output, "{}{{", rule.selector)?;
        write_declarations(output, &rule.declarations, config)?;
        output.push('}');
    } else {
        writeln!(output, "{} {{", rule.selector)?;
        if !rule.declarations.is_empty() {
            write_declarations(output, &rule.declarations, config)?;
            output.push('\n');
        }
        output.push_str("}\n");
    }
    Ok(())
}

fn write_raw(output: &mut String, text: &str, config: &EmitConfig) {
    if config.minify {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        output.push_str(&collapsed);
    } else {
        output.push_str(text);
        if !text.ends_with('\n') {
            output.push('\n');
        }
    }
}

/// 输出整个样式表
///
/// 非压缩模式下节点之间空一行。
pub fn emit_css(stylesheet: &Stylesheet, config: &EmitConfig) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    for (i, node) in stylesheet.nodes.iter().enumerate() {
        if i > 0 && !config.minify {
            output.push('\n');
        }
        match node {
            CssNode::Rule(rule) => write_rule(&mut output, rule, config)?,
            CssNode::Raw(text) => write_raw(&mut output, text, config),
        }
    }

    log::trace!("emitted {} bytes of css", output.len());
    Ok(output)
}
