use runbutton_core::IconPayload;

/// HTML 转义
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// 链接属性转义
///
/// 查询串里的 `&` 保持原样，其余会闭合属性或标签的字符照常转义。
pub fn escape_href(s: &str) -> String {
    s.replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// 用带尺寸与描边属性的 `<svg>` 外壳包裹图标内容
///
/// 图标内容是图标选择器预先渲染好的 SVG 片段，原样嵌入。
pub fn icon_svg(icon: &IconPayload, size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-{name}">{body}</svg>"#,
        size = size,
        name = escape_html(&icon.name),
        body = icon.svg,
    )
}

/// 按钮锚点
pub struct Anchor<'a> {
    pub href: &'a str,
    /// 空白分隔的类名，空项会被忽略
    pub classes: Vec<&'a str>,
    pub icon: Option<&'a IconPayload>,
    pub icon_size: u32,
    pub label: &'a str,
    /// 内联悬停处理（只用于内嵌片段）
    pub hover_transform: Option<&'static str>,
}

impl Anchor<'_> {
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(|class| class.trim())
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            r#"<a href="{}" target="_blank" class="{}""#,
            escape_href(self.href),
            self.class_attr()
        );

        if let Some(transform) = self.hover_transform {
            html.push_str(&format!(
                r#" onmouseover="this.style.transform='{}'" onmouseout="this.style.transform=''""#,
                transform
            ));
        }

        html.push('>');
        if let Some(icon) = self.icon {
            html.push_str(&icon_svg(icon, self.icon_size));
        }
        html.push_str(&escape_html(self.label));
        html.push_str("</a>");
        html
    }
}
