//! Custom templates built from user-entered centimetre values
//!
//! The builder is rerun every time the user edits a field; it produces a fresh
//! immutable [`LabelTemplate`] in inches. Gaps are derived from pitch so that
//! a custom template also lays out sensibly in the gap-based fallback.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::layout::types::cm_to_in;

use super::LabelTemplate;

/// A custom sheet as entered by the user, in centimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTemplateSpec {
    /// Fixed id. When absent, an id is generated from the name and a timestamp.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub columns: u32,
    pub rows: u32,
    pub label_width_cm: f64,
    pub label_height_cm: f64,
    pub horizontal_pitch_cm: f64,
    pub vertical_pitch_cm: f64,
    #[serde(default = "default_page_width_cm")]
    pub page_width_cm: f64,
    #[serde(default = "default_page_height_cm")]
    pub page_height_cm: f64,
    #[serde(default)]
    pub margin_top_cm: f64,
    #[serde(default)]
    pub margin_bottom_cm: f64,
    #[serde(default)]
    pub margin_left_cm: f64,
    #[serde(default)]
    pub margin_right_cm: f64,
}

fn default_page_width_cm() -> f64 {
    21.0
}

fn default_page_height_cm() -> f64 {
    29.7
}

impl CustomTemplateSpec {
    /// Build the template, stamping a generated id with the current time
    pub fn build(&self) -> LabelTemplate {
        self.build_at(Utc::now().timestamp_millis())
    }

    /// Build the template with a generated id stamped with `timestamp_ms`
    pub fn build_at(&self, timestamp_ms: i64) -> LabelTemplate {
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| custom_template_id(&self.name, timestamp_ms));

        let label_width = cm_to_in(self.label_width_cm);
        let label_height = cm_to_in(self.label_height_cm);
        let horizontal_pitch = cm_to_in(self.horizontal_pitch_cm);
        let vertical_pitch = cm_to_in(self.vertical_pitch_cm);

        LabelTemplate::new(id, self.name.clone(), self.columns, self.rows)
            .with_description(self.description.clone())
            .with_page_size(cm_to_in(self.page_width_cm), cm_to_in(self.page_height_cm))
            .with_label_size(label_width, label_height)
            .with_margins(
                cm_to_in(self.margin_top_cm),
                cm_to_in(self.margin_right_cm),
                cm_to_in(self.margin_bottom_cm),
                cm_to_in(self.margin_left_cm),
            )
            .with_gaps(
                (horizontal_pitch - label_width).max(0.0),
                (vertical_pitch - label_height).max(0.0),
            )
            .with_pitch(horizontal_pitch, vertical_pitch)
    }
}

/// Generate a catalog id of the form `custom-{slug}-{timestamp}`
pub fn custom_template_id(name: &str, timestamp_ms: i64) -> String {
    format!("custom-{}-{}", slugify(name), timestamp_ms)
}

/// Lowercase ASCII alphanumerics joined by single dashes.
///
/// Names with no usable characters slug to `template`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("template");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> CustomTemplateSpec {
        CustomTemplateSpec {
            id: None,
            name: "Shelf Tags".to_string(),
            description: String::new(),
            columns: 4,
            rows: 12,
            label_width_cm: 4.6,
            label_height_cm: 2.2,
            horizontal_pitch_cm: 5.08,
            vertical_pitch_cm: 2.2,
            page_width_cm: 21.0,
            page_height_cm: 29.7,
            margin_top_cm: 1.3,
            margin_bottom_cm: 1.0,
            margin_left_cm: 0.6,
            margin_right_cm: 0.6,
        }
    }

    #[test]
    fn test_gap_derived_from_pitch() {
        let t = spec().build_at(0);
        let expected = (5.08 - 4.6) / 2.54;
        assert!((t.gap_horizontal - expected).abs() < 1e-9);
        assert!((t.gap_horizontal - 0.189).abs() < 1e-3);
        let (hp, _) = t.pitch().expect("custom templates carry pitch");
        assert!((t.gap_horizontal - (hp - t.label_width)).abs() < 1e-12);
        assert_eq!(t.gap_vertical, 0.0);
    }

    #[test]
    fn test_gap_never_negative() {
        let mut s = spec();
        s.horizontal_pitch_cm = 4.0;
        let t = s.build_at(0);
        assert_eq!(t.gap_horizontal, 0.0);
    }

    #[test]
    fn test_generated_id() {
        let t = spec().build_at(1_700_000_000_000);
        assert_eq!(t.id, "custom-shelf-tags-1700000000000");
    }

    #[test]
    fn test_explicit_id_kept() {
        let mut s = spec();
        s.id = Some("shelf".to_string());
        assert_eq!(s.build_at(5).id, "shelf");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Big  Labels (v2)! "), "big-labels-v2");
        assert_eq!(slugify("ÄÖÜ"), "template");
        assert_eq!(slugify("a--b"), "a-b");
    }

    #[test]
    fn test_page_defaults_to_a4() {
        let s: CustomTemplateSpec = toml::from_str(
            r#"
            name = "x"
            columns = 1
            rows = 1
            label_width_cm = 5.0
            label_height_cm = 3.0
            horizontal_pitch_cm = 5.0
            vertical_pitch_cm = 3.0
            "#,
        )
        .expect("Should deserialize");
        let t = s.build_at(0);
        assert!(crate::layout::types::PageFormat::A4.matches(t.page_width, t.page_height, 1e-9));
    }
}
