//! Catalog of named label sheet templates

use std::collections::HashMap;

use super::store::{StoreError, TemplateStore};
use super::{builtin_templates, LabelTemplate, TemplateError};

/// Named templates, built-in and user-defined.
///
/// The catalog is append-only: templates can be added but never edited in
/// place, so a template borrowed for layout never changes underneath it.
#[derive(Debug, Default)]
pub struct TemplateCatalog {
    templates: Vec<LabelTemplate>,
    index: HashMap<String, usize>,
}

impl TemplateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in templates
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for template in builtin_templates() {
            let registered = catalog.register(template);
            debug_assert!(registered.is_ok(), "duplicate built-in template");
        }
        catalog
    }

    /// Add a template. Ids must be unique.
    pub fn register(&mut self, template: LabelTemplate) -> Result<(), TemplateError> {
        if self.index.contains_key(&template.id) {
            return Err(TemplateError::Duplicate { id: template.id });
        }
        self.index.insert(template.id.clone(), self.templates.len());
        self.templates.push(template);
        Ok(())
    }

    /// Add every template from a store, skipping ids already present.
    ///
    /// Returns the number of templates added.
    pub fn load_from_store(&mut self, store: &dyn TemplateStore) -> Result<usize, StoreError> {
        let mut added = 0;
        for template in store.load_all()? {
            if self.register(template).is_ok() {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&LabelTemplate> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// Get a template by id, with close matches in the error when missing
    pub fn require(&self, id: &str) -> Result<&LabelTemplate, TemplateError> {
        self.get(id).ok_or_else(|| TemplateError::NotFound {
            id: id.to_string(),
            suggestions: self.find_similar(id, 3),
        })
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &LabelTemplate> {
        self.templates.iter()
    }

    /// Template ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn find_similar(&self, target: &str, max_distance: usize) -> Vec<String> {
        let mut candidates: Vec<(&str, usize)> = self
            .ids()
            .filter_map(|id| {
                let dist = levenshtein_distance(id, target);
                (dist <= max_distance && dist > 0).then_some((id, dist))
            })
            .collect();

        candidates.sort_by_key(|(_, d)| *d);
        candidates
            .into_iter()
            .map(|(id, _)| id.to_string())
            .take(3)
            .collect()
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::store::MemoryStore;

    #[test]
    fn test_builtins_registered() {
        let catalog = TemplateCatalog::with_builtins();
        assert!(catalog.contains("a4-65"));
        assert_eq!(catalog.len(), builtin_templates().len());
        assert_eq!(catalog.ids().next(), Some("a4-65"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = TemplateCatalog::with_builtins();
        let dup = LabelTemplate::new("a4-65", "again", 1, 1);
        let result = catalog.register(dup);
        assert!(matches!(result, Err(TemplateError::Duplicate { .. })));
        assert_eq!(catalog.require("a4-65").unwrap().name, "A4 65-up");
    }

    #[test]
    fn test_not_found_suggests() {
        let catalog = TemplateCatalog::with_builtins();
        match catalog.require("a4-56") {
            Err(TemplateError::NotFound { suggestions, .. }) => {
                assert!(suggestions.contains(&"a4-65".to_string()));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_store_skips_existing() {
        let store = MemoryStore::new();
        store.save(&LabelTemplate::new("a4-65", "shadow", 1, 1)).unwrap();
        store.save(&LabelTemplate::new("custom-x-1", "X", 2, 2)).unwrap();

        let mut catalog = TemplateCatalog::with_builtins();
        let added = catalog.load_from_store(&store).unwrap();
        assert_eq!(added, 1);
        assert!(catalog.contains("custom-x-1"));
        assert_eq!(catalog.require("a4-65").unwrap().name, "A4 65-up");
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("letter-30", "letter-30"), 0);
        assert_eq!(levenshtein_distance("letter-30", "leter-30"), 1);
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }
}
