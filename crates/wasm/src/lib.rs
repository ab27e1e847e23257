use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use runbutton_core::animation::{ENTRANCE_ANIMATIONS, HOVER_ANIMATIONS};
use runbutton_core::{AnimationOption, ButtonStyle, GenerateOptions, NamingMode, BUTTON_STYLES};
use runbutton_generator::{
    combine_classes as rs_combine_classes, deep_link as rs_deep_link,
    emit_animation_css as rs_emit_animation_css, preview_model as rs_preview_model,
    shade as rs_shade, style_css as rs_style_css, Generator, GeneratorOptions, PreviewModel,
    DEFAULT_POSTMAN_HOST,
};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsGeneratorConfig {
    #[serde(default)]
    postman_host: Option<String>,
    #[serde(default)]
    naming_mode: JsNamingMode,
    #[serde(default)]
    minify_inline: bool,
    #[serde(default)]
    document_title_prefix: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
enum JsNamingMode {
    #[default]
    Readable,
    Hash,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPreviewModel {
    css: String,
    class_list: String,
    label: String,
    icon_size: u32,
    animation_css: String,
    hover_transform: Option<String>,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsNamingMode> for NamingMode {
    fn from(m: JsNamingMode) -> Self {
        match m {
            JsNamingMode::Readable => NamingMode::Readable,
            JsNamingMode::Hash => NamingMode::Hash,
        }
    }
}

impl From<JsGeneratorConfig> for GeneratorOptions {
    fn from(config: JsGeneratorConfig) -> Self {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            postman_host: config.postman_host.unwrap_or(defaults.postman_host),
            naming_mode: config.naming_mode.into(),
            minify_inline: config.minify_inline,
            document_title_prefix: config
                .document_title_prefix
                .unwrap_or(defaults.document_title_prefix),
        }
    }
}

impl From<PreviewModel> for JsPreviewModel {
    fn from(model: PreviewModel) -> Self {
        JsPreviewModel {
            css: model.css,
            class_list: model.class_list,
            label: model.label,
            icon_size: model.icon_size,
            animation_css: model.animation_css,
            hover_transform: model.hover_transform.map(str::to_string),
        }
    }
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn parse_config(config: JsValue) -> Result<JsGeneratorConfig, JsError> {
    if is_absent(&config) {
        Ok(JsGeneratorConfig::default())
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
    }
}

fn parse_options(options: JsValue) -> Result<GenerateOptions, JsError> {
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn parse_style(style: JsValue) -> Result<ButtonStyle, JsError> {
    serde_wasm_bindgen::from_value(style)
        .map_err(|e| JsError::new(&format!("Invalid style: {}", e)))
}

fn parse_animation(option: JsValue) -> Result<Option<AnimationOption>, JsError> {
    if is_absent(&option) {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(option)
        .map(Some)
        .map_err(|e| JsError::new(&format!("Invalid animation: {}", e)))
}

fn generator(config: JsValue) -> Result<Generator, JsError> {
    let config = parse_config(config)?;
    Ok(Generator::with_options(config.into()))
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 生成独立 HTML 文档
///
/// @param options - `{ collectionId, workspaceId, style, customGradient?, buttonText?, animations?, icon? }`
/// @param config  - 生成器配置，可选
#[wasm_bindgen(js_name = "generateStandaloneHtml")]
pub fn generate_standalone_html(options: JsValue, config: JsValue) -> Result<String, JsError> {
    let options = parse_options(options)?;
    generator(config)?
        .standalone_html(&options)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// 生成内嵌片段
#[wasm_bindgen(js_name = "generateInlineSnippet")]
pub fn generate_inline_snippet(options: JsValue, config: JsValue) -> Result<String, JsError> {
    let options = parse_options(options)?;
    generator(config)?
        .inline_snippet(&options)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// 导出前检查两个 ID 是否都已填写
#[wasm_bindgen(js_name = "validateOptions")]
pub fn validate_options(options: JsValue) -> Result<(), JsError> {
    parse_options(options)?
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// 预览数据 `{ css, classList, label, iconSize, animationCss, hoverTransform }`
#[wasm_bindgen(js_name = "previewModel")]
pub fn preview_model(options: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(options)?;
    let model = rs_preview_model(&options).map_err(|e| JsError::new(&e.to_string()))?;
    serialize(&JsPreviewModel::from(model))
}

/// 样式声明块
#[wasm_bindgen(js_name = "styleCss")]
pub fn style_css(style: JsValue, gradient_from: &str, gradient_to: &str) -> Result<String, JsError> {
    let style = parse_style(style)?;
    rs_style_css(&style, gradient_from, gradient_to).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn shade(hex: &str, percent: i32) -> Result<String, JsError> {
    rs_shade(hex, percent).map_err(|e| JsError::new(&e.to_string()))
}

/// 动画类名组合，`null`/`undefined` 视为未选择
#[wasm_bindgen(js_name = "combineClasses")]
pub fn combine_classes(hover: JsValue, entrance: JsValue) -> Result<String, JsError> {
    let hover = parse_animation(hover)?;
    let entrance = parse_animation(entrance)?;
    Ok(rs_combine_classes(hover.as_ref(), entrance.as_ref()))
}

#[wasm_bindgen(js_name = "emitAnimationCss")]
pub fn emit_animation_css(option: JsValue, selector: &str) -> Result<String, JsError> {
    match parse_animation(option)? {
        Some(option) => {
            rs_emit_animation_css(&option, selector).map_err(|e| JsError::new(&e.to_string()))
        }
        None => Ok(String::new()),
    }
}

#[wasm_bindgen(js_name = "deepLink")]
pub fn deep_link(collection_id: &str, workspace_id: &str, host: Option<String>) -> String {
    let host = host.unwrap_or_else(|| DEFAULT_POSTMAN_HOST.to_string());
    rs_deep_link(&host, collection_id, workspace_id)
}

/// 样式目录（画廊顺序）
#[wasm_bindgen(js_name = "buttonStyles")]
pub fn button_styles() -> Result<JsValue, JsError> {
    serialize(&BUTTON_STYLES)
}

#[wasm_bindgen(js_name = "hoverAnimations")]
pub fn hover_animations() -> Result<JsValue, JsError> {
    serialize(&HOVER_ANIMATIONS)
}

#[wasm_bindgen(js_name = "entranceAnimations")]
pub fn entrance_animations() -> Result<JsValue, JsError> {
    serialize(&ENTRANCE_ANIMATIONS)
}
