use pretty_assertions::assert_eq;
use runbutton_core::animation::{select_entrance, select_hover};
use runbutton_core::{find_style, CustomGradient, GenerateOptions, IconPayload, NamingMode, BUTTON_STYLES};
use runbutton_generator::{
    generate_inline_snippet, generate_standalone_html, preview_model, style_css, Generator,
    BUTTON_CLASS,
};

fn options_for(style_id: &str) -> GenerateOptions {
    GenerateOptions::new("abc123", "xyz789", find_style(style_id).unwrap().clone())
}

fn attr<'a>(html: &'a str, name: &str) -> &'a str {
    let marker = format!("{}=\"", name);
    let start = html.find(&marker).expect("attribute present") + marker.len();
    let end = html[start..].find('"').unwrap() + start;
    &html[start..end]
}

fn anchor(html: &str) -> &str {
    let start = html.find("<a ").unwrap();
    let end = html[start..].find("</a>").unwrap() + start + "</a>".len();
    &html[start..end]
}

fn label(html: &str) -> &str {
    let anchor = anchor(html);
    let end = anchor.len() - "</a>".len();
    let start = anchor[..end]
        .rfind('>')
        .map(|i| i + 1)
        .unwrap();
    &anchor[start..end]
}

/// 取出 `.custom-postman-button { ... }` 规则体
fn embedded_block(html: &str) -> &str {
    let open = format!(".{} {{\n", BUTTON_CLASS);
    let start = html.find(&open).unwrap() + open.len();
    let end = html[start..].find("\n}").unwrap() + start;
    &html[start..end]
}

#[test]
fn test_end_to_end_deep_link() {
    let html = generate_standalone_html(&options_for("default")).unwrap();

    assert_eq!(
        attr(anchor(&html), "href"),
        "https://app.getpostman.com/run-collection/abc123?action=collection%2Ffork&source=rip_markdown&collection-url=entityId%3Dabc123%26entityType%3Dcollection%26workspaceId%3Dxyz789"
    );
    assert_eq!(attr(anchor(&html), "target"), "_blank");
    assert_eq!(attr(anchor(&html), "class"), BUTTON_CLASS);
}

#[test]
fn test_inline_uses_same_link() {
    let options = options_for("default");
    let standalone = generate_standalone_html(&options).unwrap();
    let inline = generate_inline_snippet(&options).unwrap();

    assert_eq!(attr(anchor(&standalone), "href"), attr(anchor(&inline), "href"));
}

#[test]
fn test_custom_host() {
    let html = Generator::new()
        .with_host("god.postman.co")
        .standalone_html(&options_for("default"))
        .unwrap();
    assert!(attr(anchor(&html), "href").starts_with("https://god.postman.co/run-collection/abc123?"));
}

#[test]
fn test_standalone_embeds_style_css() {
    for style in BUTTON_STYLES {
        let options = GenerateOptions::new("abc123", "xyz789", style.clone());
        let html = generate_standalone_html(&options).unwrap();
        let expected = style_css(style, &style.gradient_from, &style.gradient_to).unwrap();

        assert_eq!(embedded_block(&html), expected, "parity broken for {}", style.id);
    }
}

#[test]
fn test_parity_with_gradient_override() {
    let mut options = options_for("elevated-3d");
    options.custom_gradient = Some(CustomGradient::new("#112233", "#445566"));

    let html = generate_standalone_html(&options).unwrap();
    let expected = style_css(&options.style, "#112233", "#445566").unwrap();
    assert_eq!(embedded_block(&html), expected);

    let preview = preview_model(&options).unwrap();
    assert_eq!(preview.css, expected);
}

#[test]
fn test_standalone_document_shell() {
    let html = generate_standalone_html(&options_for("pixel-art")).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Run in Postman Button - Pixel Art</title>"));
    assert!(html.contains("body {\n  margin: 0;"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(!html.contains("Custom Animations"));
}

#[test]
fn test_icon_heavy_forces_run() {
    let mut options = options_for("icon-heavy");
    options.button_text = "Custom".to_string();

    assert_eq!(label(&generate_standalone_html(&options).unwrap()), "Run");
    assert_eq!(label(&generate_inline_snippet(&options).unwrap()), "Run");
    assert_eq!(preview_model(&options).unwrap().label, "Run");
}

#[test]
fn test_minimalist_icon_has_empty_label() {
    let mut options = options_for("minimalist-icon");
    options.button_text = "Custom".to_string();
    options.icon = Some(IconPayload {
        name: "play".to_string(),
        svg: r#"<polygon points="6 3 20 12 6 21 6 3"/>"#.to_string(),
    });

    let html = generate_standalone_html(&options).unwrap();
    assert!(anchor(&html).ends_with("</svg></a>"));
    assert!(anchor(&html).contains(r#"width="16" height="16""#));
    assert_eq!(preview_model(&options).unwrap().label, "");
}

#[test]
fn test_icon_size_follows_style() {
    let icon = IconPayload {
        name: "rocket".to_string(),
        svg: "<path/>".to_string(),
    };

    let mut options = options_for("icon-heavy");
    options.icon = Some(icon.clone());
    let html = generate_inline_snippet(&options).unwrap();
    assert!(anchor(&html).contains(r#"width="24" height="24""#));

    let mut options = options_for("retro-vintage");
    options.icon = Some(icon);
    let html = generate_standalone_html(&options).unwrap();
    assert!(anchor(&html).contains(r#"width="20" height="20""#));
}

#[test]
fn test_label_is_escaped() {
    let mut options = options_for("default");
    options.button_text = "Fork <now> & go".to_string();

    let html = generate_standalone_html(&options).unwrap();
    assert_eq!(label(&html), "Fork &lt;now&gt; &amp; go");
}

#[test]
fn test_animation_classes_and_css() {
    let mut options = options_for("default");
    options.animations.hover = select_hover("glow");
    options.animations.entrance = select_entrance("slide-up");

    let html = generate_standalone_html(&options).unwrap();
    assert_eq!(
        attr(anchor(&html), "class"),
        "custom-postman-button anim-enter-slide-up anim-hover-glow"
    );
    assert!(html.contains("/* Custom Animations */"));
    assert!(html.contains("@keyframes slideUp {"));

    let entrance_at = html
        .find(".custom-postman-button.anim-enter-slide-up {")
        .unwrap();
    let hover_at = html
        .find(".custom-postman-button.anim-hover-glow:hover {")
        .unwrap();
    assert!(entrance_at < hover_at);

    let preview = preview_model(&options).unwrap();
    assert_eq!(preview.class_list, attr(anchor(&html), "class"));
    assert!(html.contains(&preview.animation_css));
}

#[test]
fn test_hover_effect_rule() {
    let html = generate_standalone_html(&options_for("default")).unwrap();
    assert!(html.contains(".custom-postman-button:hover {\n  transform: scale(1.05);\n}"));
}

#[test]
fn test_inline_snippet_scoped_class() {
    let html = generate_inline_snippet(&options_for("aurora")).unwrap();

    assert!(html.starts_with("<!-- Run in Postman Button - Aurora Style -->\n<style>\n"));
    assert!(html.contains(".custom-postman-button-aurora {\n"));
    assert_eq!(attr(anchor(&html), "class"), "custom-postman-button-aurora");
    assert!(!html.contains("<!DOCTYPE"));
    assert!(html.contains("</style>\n<a "));
}

#[test]
fn test_inline_snippets_do_not_collide() {
    let a = generate_inline_snippet(&options_for("aurora")).unwrap();
    let b = generate_inline_snippet(&options_for("blueprint")).unwrap();
    assert_ne!(attr(anchor(&a), "class"), attr(anchor(&b), "class"));
}

#[test]
fn test_inline_hover_handlers() {
    let html = generate_inline_snippet(&options_for("default")).unwrap();
    assert_eq!(attr(anchor(&html), "onmouseover"), "this.style.transform='scale(1.05)'");
    assert_eq!(attr(anchor(&html), "onmouseout"), "this.style.transform=''");
}

#[test]
fn test_inline_hover_animation_drops_handlers() {
    let mut options = options_for("default");
    options.animations.hover = select_hover("lift");

    let html = generate_inline_snippet(&options).unwrap();
    let anchor = anchor(&html);
    assert!(!anchor.contains("onmouseover"));
    assert!(!anchor.contains("onmouseout"));
    assert_eq!(
        attr(anchor, "class"),
        "custom-postman-button-default anim-hover-lift"
    );
    assert!(html.contains(".custom-postman-button-default.anim-hover-lift:hover {"));

    // 只有入场动画时仍保留处理器
    options.animations.hover = None;
    options.animations.entrance = select_entrance("fade-in");
    let html = generate_inline_snippet(&options).unwrap();
    assert_eq!(attr(crate::anchor(&html), "onmouseover"), "this.style.transform='scale(1.05)'");
}

#[test]
fn test_inline_keyframes_are_scoped() {
    let mut options = options_for("default");
    options.animations.hover = select_hover("bounce");

    let inline = generate_inline_snippet(&options).unwrap();
    assert!(inline.contains("@keyframes custom-postman-button-default-bounce {"));
    assert!(inline.contains("  animation: custom-postman-button-default-bounce 0.8s ease-in-out;"));
    assert!(!inline.contains("@keyframes bounce "));

    let standalone = generate_standalone_html(&options).unwrap();
    assert!(standalone.contains("@keyframes bounce {"));
    assert!(standalone.contains("  animation: bounce 0.8s ease-in-out;"));
}

#[test]
fn test_host_cannot_break_out_of_href() {
    let html = Generator::new()
        .with_host(r#"evil.com" onclick="alert(1)"#)
        .inline_snippet(&options_for("default"))
        .unwrap();
    let anchor = anchor(&html);

    assert!(!anchor.contains(r#"" onclick=""#));
    assert!(attr(anchor, "href").starts_with("https://evil.com&quot; onclick=&quot;alert(1)"));
    assert_eq!(attr(anchor, "target"), "_blank");
}

#[test]
fn test_inline_hash_naming() {
    let generator = Generator::new().with_naming_mode(NamingMode::Hash);

    let orange = generator.inline_snippet(&options_for("default")).unwrap();
    let mut blue_options = options_for("default");
    blue_options.custom_gradient = Some(CustomGradient::new("#3b82f6", "#60a5fa"));
    let blue = generator.inline_snippet(&blue_options).unwrap();

    let orange_class = attr(anchor(&orange), "class");
    let blue_class = attr(anchor(&blue), "class");
    assert!(orange_class.starts_with("pmb_"));
    assert_ne!(orange_class, blue_class);
}

#[test]
fn test_inline_minified() {
    let html = Generator::new()
        .with_minified_inline(true)
        .inline_snippet(&options_for("default"))
        .unwrap();

    assert!(html.contains(".custom-postman-button-default{color:#ffffff;"));
    assert!(html.contains(".custom-postman-button-default:hover{transform:scale(1.05);}"));
}

#[test]
fn test_generation_is_deterministic() {
    let mut options = options_for("caution-tape");
    options.animations.hover = select_hover("shimmer");

    assert_eq!(
        generate_standalone_html(&options).unwrap(),
        generate_standalone_html(&options).unwrap()
    );
    assert_eq!(
        generate_inline_snippet(&options).unwrap(),
        generate_inline_snippet(&options).unwrap()
    );
}

#[test]
fn test_unknown_style_still_renders() {
    let mut style = find_style("default").unwrap().clone();
    style.id = "from-the-future".into();
    let options = GenerateOptions::new("abc123", "xyz789", style);

    let html = generate_standalone_html(&options).unwrap();
    assert!(embedded_block(&html).contains("background: linear-gradient(135deg, #ff6c37, #ff8f5e);"));
}
