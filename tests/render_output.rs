//! Rendered output for the print and preview surfaces

use label_sheet::renderer::{page_slots, pixel_mirror, PREVIEW_DPI};
use label_sheet::{
    plan_from_catalog, render_page_svg, render_slot_css, ProductId, SheetRequest, SvgConfig,
    TemplateCatalog,
};

fn products(n: usize) -> Vec<ProductId> {
    (0..n).map(|i| ProductId::new(format!("p{}", i))).collect()
}

#[test]
fn test_css_has_rule_per_slot_in_both_units() {
    let catalog = TemplateCatalog::with_builtins();
    let outcome = plan_from_catalog(&catalog, "letter-30", &products(4), &SheetRequest::new()).unwrap();
    let css = render_slot_css(&outcome.plan, &SvgConfig::default());

    assert!(css.starts_with("@page { size: 8.5in 11in; margin: 0; }"));
    for slot in page_slots(outcome.plan.geometry()) {
        let selector = format!(".ls-slot-{} {{", slot.slot_id);
        assert_eq!(css.matches(&selector).count(), 2, "{}", selector);
    }

    // Letter 30-up: first label sits at the page margins
    assert!(css.contains(".ls-slot-0-0 { left: 18px; top: 48px; width: 252px; height: 96px; }"));
    assert!(css.contains(".ls-slot-0-0 { left: 0.1875in; top: 0.5in; width: 2.625in; height: 1in; }"));
}

#[test]
fn test_svg_pages_match_plan() {
    let catalog = TemplateCatalog::with_builtins();
    let request = SheetRequest::new().with_slots_per_page(5).with_page_count(2);
    let outcome = plan_from_catalog(&catalog, "letter-10", &products(7), &request).unwrap();
    let config = SvgConfig::default();

    let first = render_page_svg(&outcome.plan, 0, &config).unwrap();
    let second = render_page_svg(&outcome.plan, 1, &config).unwrap();
    assert!(render_page_svg(&outcome.plan, 2, &config).is_none());

    assert!(first.contains(r#"width="816" height="1056""#));
    assert_eq!(first.matches("ls-placeholder\"").count(), 5);
    assert!(first.contains(">p0</text>"));
    assert!(!first.contains(">p5</text>"));
    // Second page continues the cycle: p5, p6, p0, p1, p2
    assert!(second.contains(">p5</text>"));
    assert!(second.contains(">p6</text>"));
    assert!(!second.contains(">p3</text>"));
}

#[test]
fn test_pixel_mirror_is_96_per_inch() {
    let catalog = TemplateCatalog::with_builtins();
    let outcome = plan_from_catalog(&catalog, "a4-21", &products(2), &SheetRequest::new()).unwrap();
    let mirror = pixel_mirror(&outcome.plan.pages);

    assert_eq!(mirror.len(), 1);
    let page = &outcome.plan.pages[0];
    for (slot, pixel) in page.slots.iter().zip(&mirror[0].slots) {
        assert_eq!(slot.slot_id, pixel.slot_id);
        assert!((pixel.pixel_rect.left - slot.position.left * PREVIEW_DPI).abs() < 1e-6);
        assert!((pixel.pixel_rect.width - slot.position.width * PREVIEW_DPI).abs() < 1e-6);
    }
}

#[test]
fn test_unprefixed_classes() {
    let catalog = TemplateCatalog::with_builtins();
    let outcome = plan_from_catalog(&catalog, "a4-14", &products(1), &SheetRequest::new()).unwrap();
    let config = SvgConfig::default().without_class_prefix();
    let css = render_slot_css(&outcome.plan, &config);
    assert!(css.contains(".slot-6-1 {"));
    assert!(!css.contains("ls-"));
}
