use pretty_assertions::assert_eq;
use runbutton_core::{
    animation::{find_entrance, find_hover, select_hover},
    combine_classes, create_naming_strategy, find_style, shade, style_declarations,
    ButtonStyle, ContentRule, CustomGradient, GenerateOptions, NamingMode, BUTTON_STYLES,
};

#[test]
fn test_every_catalog_style_resolves() {
    for style in BUTTON_STYLES {
        let decls = style_declarations(style, &style.gradient_from, &style.gradient_to)
            .expect("catalog colors are valid");

        assert!(!decls.is_empty(), "{} produced no declarations", style.id);
        assert!(
            decls
                .iter()
                .any(|d| d.property.starts_with("background") || d.property == "border"),
            "{} renders nothing visible",
            style.id
        );
    }
}

#[test]
fn test_custom_gradient_flows_into_declarations() {
    let style = find_style("dual-tone").unwrap();
    let mut options = GenerateOptions::new("abc", "xyz", style.clone());
    options.custom_gradient = Some(CustomGradient::new("#000000", "#ffffff"));

    let (from, to) = options.gradient();
    let decls = style_declarations(&options.style, from, to).unwrap();
    let background = decls.iter().find(|d| d.property == "background").unwrap();

    assert_eq!(
        background.value,
        "linear-gradient(90deg, #000000 50%, #ffffff 50%)"
    );
}

#[test]
fn test_customized_style_does_not_touch_catalog() {
    let original: ButtonStyle = find_style("aurora").unwrap().clone();
    let _custom = original
        .with_text_color("#123456")
        .with_gradient(&CustomGradient::new("#000000", "#111111"));

    assert_eq!(find_style("aurora").unwrap(), &original);
}

#[test]
fn test_shade_bounds() {
    assert_eq!(shade("#ff6c37", 0).unwrap(), "#ff6c37");
    assert_eq!(shade("#000000", 50).unwrap(), "#7f7f7f");
    assert_eq!(shade("#ffffff", -50).unwrap(), "#808080");
    assert_eq!(shade("#ffffff", 100).unwrap(), "#ffffff");
    assert_eq!(shade("#123456", -100).unwrap(), "#000000");
    assert!(shade("not-a-color", 10).is_err());
}

#[test]
fn test_animation_classes_order() {
    let hover = select_hover("pulse");
    let entrance = find_entrance("fade-in");

    assert_eq!(
        combine_classes(hover.as_ref(), entrance),
        "anim-enter-fade anim-hover-pulse"
    );
    assert_eq!(combine_classes(find_hover("none"), None), "");
}

#[test]
fn test_content_rules_cover_special_styles() {
    assert_eq!(ContentRule::for_style("icon-heavy").label("Custom"), "Run");
    assert_eq!(ContentRule::for_style("minimalist-icon").label("Custom"), "");
    assert_eq!(ContentRule::for_style("default").label("Custom"), "Custom");
}

#[test]
fn test_hash_names_differ_by_color() {
    let style = find_style("default").unwrap();
    let naming = create_naming_strategy(NamingMode::Hash);

    let orange = style_declarations(style, "#ff6c37", "#ff8f5e").unwrap();
    let blue = style_declarations(style, "#3b82f6", "#60a5fa").unwrap();

    let a = naming.generate_name(&style.id, &orange);
    let b = naming.generate_name(&style.id, &blue);

    assert!(a.starts_with("pmb_"));
    assert_ne!(a, b);
}
