//! SVG preview of one sheet page, in preview pixels

use crate::layout::Rect;
use crate::pagination::{preview_page, Page};
use crate::plan::SheetPlan;
use crate::product::ProductId;

use super::device::{page_slots, px, DeviceSlot};
use super::SvgConfig;

/// Fraction of the label height used for product text
const TEXT_HEIGHT_RATIO: f64 = 0.25;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.prefix().to_string()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the default preview styles
    pub fn add_default_styles(&mut self) {
        let p = self.prefix();
        self.styles.push(format!(
            ".{p}page {{ fill: #ffffff; stroke: #999999; stroke-width: 1; }}"
        ));
        self.styles.push(format!(
            ".{p}label {{ fill: #ffffff; stroke: #333333; stroke-width: 0.5; }}"
        ));
        self.styles.push(format!(
            ".{p}placeholder .{p}label {{ fill: #f5f5f5; stroke: #bbbbbb; stroke-dasharray: 4,2; }}"
        ));
        self.styles.push(format!(
            ".{p}text {{ font-family: monospace; fill: #1a1a1a; }}"
        ));
    }

    /// Add the page outline
    pub fn add_page(&mut self, width: f64, height: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}page" x="0" y="0" width="{}" height="{}"/>"#,
            self.indent_str(),
            prefix,
            width,
            height
        ));
    }

    /// Add a label rectangle
    pub fn add_label_rect(&mut self, rect: &Rect) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}label" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            prefix,
            rect.left,
            rect.top,
            rect.width,
            rect.height
        ));
    }

    /// Add centered text inside a label
    pub fn add_label_text(&mut self, text: &str, rect: &Rect) {
        let prefix = self.prefix();
        let font_size = (rect.height * TEXT_HEIGHT_RATIO * 10.0).round() / 10.0;
        self.elements.push(format!(
            r#"{}<text class="{}text" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            rect.left + rect.width / 2.0,
            rect.top + rect.height / 2.0,
            font_size,
            escape_xml(text)
        ));
    }

    /// Start a group element
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string for a page `width` x `height` pixels
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

/// Render one page of a plan as an SVG preview.
///
/// A plan without pages renders a page of placeholders so the grid can still
/// be previewed. Returns `None` when `page_index` is past the last page.
pub fn render_page_svg(plan: &SheetPlan, page_index: usize, config: &SvgConfig) -> Option<String> {
    let placeholder_page;
    let page: &Page<ProductId> = if plan.pages.is_empty() && page_index == 0 {
        placeholder_page = preview_page(plan.geometry());
        &placeholder_page
    } else {
        plan.pages.get(page_index)?
    };

    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    let width = px(plan.page.width);
    let height = px(plan.page.height);
    builder.add_page(width, height);

    let prefix = config.prefix();
    let geometry = page_slots(plan.geometry());
    for (slot, device) in page.slots.iter().zip(&geometry) {
        if slot.is_placeholder() && !config.show_placeholders {
            continue;
        }
        render_slot(&mut builder, prefix, device, slot.product.as_ref(), config);
    }

    Some(builder.build(width, height))
}

fn render_slot(
    builder: &mut SvgBuilder,
    prefix: &str,
    device: &DeviceSlot,
    product: Option<&ProductId>,
    config: &SvgConfig,
) {
    let id = format!("{}slot-{}", prefix, device.slot_id);
    let mut classes = vec![format!("{}slot", prefix)];
    if product.is_none() {
        classes.push(format!("{}placeholder", prefix));
    }

    builder.start_group(Some(&id), &classes);
    builder.add_label_rect(&device.pixel_rect);
    if let (Some(product), true) = (product, config.show_product_text) {
        builder.add_label_text(product.as_str(), &device.pixel_rect);
    }
    builder.end_group();
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::plan::{plan_sheet, SheetRequest};
    use crate::template::LabelTemplate;

    fn grid() -> LabelTemplate {
        LabelTemplate::new("g", "G", 2, 2)
            .with_page_size(4.0, 4.0)
            .with_label_size(1.5, 1.5)
            .with_gaps(0.5, 0.5)
    }

    fn ids(names: &[&str]) -> Vec<ProductId> {
        names.iter().map(|n| ProductId::new(*n)).collect()
    }

    #[test]
    fn test_svg_page_structure() {
        let request = SheetRequest::new().with_slots_per_page(3);
        let outcome = plan_sheet(&LayoutEngine::default(), &grid(), &ids(&["A1", "B2"]), &request);
        let svg = render_page_svg(&outcome.plan, 0, &SvgConfig::default()).unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="384" height="384""#));
        assert!(svg.contains(r#"id="ls-slot-0-0""#));
        assert!(svg.contains(r#"id="ls-slot-1-1""#));
        assert_eq!(svg.matches("ls-placeholder\"").count(), 1);
        assert_eq!(svg.matches(">A1</text>").count(), 2);
        assert_eq!(svg.matches(">B2</text>").count(), 1);
    }

    #[test]
    fn test_hide_placeholders() {
        let request = SheetRequest::new().with_slots_per_page(1);
        let outcome = plan_sheet(&LayoutEngine::default(), &grid(), &ids(&["A"]), &request);
        let config = SvgConfig::default().with_placeholders(false);
        let svg = render_page_svg(&outcome.plan, 0, &config).unwrap();
        assert_eq!(svg.matches("<g ").count(), 1);
    }

    #[test]
    fn test_empty_plan_renders_placeholder_grid() {
        let outcome = plan_sheet(&LayoutEngine::default(), &grid(), &[], &SheetRequest::new());
        assert!(outcome.plan.pages.is_empty());
        let svg = render_page_svg(&outcome.plan, 0, &SvgConfig::default()).unwrap();
        assert_eq!(svg.matches("ls-placeholder\"").count(), 4);
        assert!(render_page_svg(&outcome.plan, 1, &SvgConfig::default()).is_none());
    }

    #[test]
    fn test_page_out_of_range() {
        let outcome = plan_sheet(&LayoutEngine::default(), &grid(), &ids(&["A"]), &SheetRequest::new());
        assert!(render_page_svg(&outcome.plan, 1, &SvgConfig::default()).is_none());
    }

    #[test]
    fn test_text_is_escaped() {
        let outcome = plan_sheet(&LayoutEngine::default(), &grid(), &ids(&["A&B"]), &SheetRequest::new());
        let svg = render_page_svg(&outcome.plan, 0, &SvgConfig::default()).unwrap();
        assert!(svg.contains(">A&amp;B</text>"));
    }

    #[test]
    fn test_compact_output() {
        let outcome = plan_sheet(&LayoutEngine::default(), &grid(), &ids(&["A"]), &SheetRequest::new());
        let config = SvgConfig::default().with_pretty_print(false).with_standalone(false);
        let svg = render_page_svg(&outcome.plan, 0, &config).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
    }
}
