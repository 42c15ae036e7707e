//! Configuration for sheet output

/// Configuration options for SVG previews and slot stylesheets
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names and slot ids (e.g., "ls-" for "ls-slot-0-0")
    pub class_prefix: Option<String>,

    /// Whether empty slots are drawn in the preview
    pub show_placeholders: bool,

    /// Whether product tokens are written into populated slots
    pub show_product_text: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("ls-".to_string()),
            show_placeholders: true,
            show_product_text: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether placeholders are drawn
    pub fn with_placeholders(mut self, show: bool) -> Self {
        self.show_placeholders = show;
        self
    }

    /// Set whether product tokens are drawn
    pub fn with_product_text(mut self, show: bool) -> Self {
        self.show_product_text = show;
        self
    }

    pub(crate) fn prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("ls-".to_string()));
        assert!(config.show_placeholders);
        assert!(config.show_product_text);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("my-")
            .with_placeholders(false);

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.prefix(), "my-");
        assert!(!config.show_placeholders);
        assert_eq!(SvgConfig::new().without_class_prefix().prefix(), "");
    }
}
