use runbutton_core::Declaration;

/// 样式表中的一个节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssNode {
    /// 选择器 + 声明块
    Rule(Rule),
    /// 原样输出的文本（如 @keyframes 块）
    Raw(String),
}

/// CSS 规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// 样式表：按源码顺序排列的节点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<CssNode>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.nodes.push(CssNode::Rule(rule));
    }

    /// 追加原样文本，空文本忽略
    pub fn push_raw(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.nodes.push(CssNode::Raw(text));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// 解析 `prop: value; prop: value;` 形式的声明文本
///
/// 按第一个 ':' 切分属性和值，空片段跳过。
pub fn parse_declarations(text: &str) -> Vec<Declaration> {
    text.split(';')
        .filter_map(|chunk| {
            let (property, value) = chunk.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some(Declaration::new(property, value))
        })
        .collect()
}

/// 创建类选择器
pub fn create_class_selector(class_name: &str) -> String {
    format!(".{}", class_name)
}

/// 从选择器和声明列表创建 CSS 规则
pub fn create_qualified_rule(selector: impl Into<String>, declarations: Vec<Declaration>) -> Rule {
    Rule {
        selector: selector.into(),
        declarations,
    }
}

/// 从类名和声明列表创建样式表
pub fn create_stylesheet(class_name: &str, declarations: Vec<Declaration>) -> Stylesheet {
    let mut stylesheet = Stylesheet::new();
    stylesheet.push_rule(create_qualified_rule(
        create_class_selector(class_name),
        declarations,
    ));
    stylesheet
}

/// 合并多个样式表，保持顺序
pub fn merge_stylesheets(stylesheets: Vec<Stylesheet>) -> Stylesheet {
    let mut nodes = Vec::new();

    for stylesheet in stylesheets {
        nodes.extend(stylesheet.nodes);
    }

    Stylesheet { nodes }
}
