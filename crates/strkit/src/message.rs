//! Message templates with positional `%1`..`%9` arguments
//!
//! Templates come from a [`MessageCatalog`]. Substitution makes a single
//! pass over the template, so an argument that itself contains `%2` is
//! inserted literally.

use std::collections::HashMap;
use tracing::debug;

/// Source of message templates keyed by numeric id
pub trait MessageCatalog {
    /// Template for `id`, if the catalog has one
    fn template(&self, id: u32) -> Option<&str>;
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    templates: HashMap<u32, String>,
}

impl InMemoryCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the template for `id`
    pub fn insert(&mut self, id: u32, template: impl Into<String>) {
        self.templates.insert(id, template.into());
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MessageCatalog for InMemoryCatalog {
    fn template(&self, id: u32) -> Option<&str> {
        self.templates.get(&id).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().map(|(id, t)| (id, t.into())).collect(),
        }
    }
}

/// Expand `%1`..`%9` in `template` with `args`
///
/// `%%` produces a literal `%`. A placeholder without a matching argument
/// and a `%` followed by anything else are copied unchanged.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(d @ '1'..='9') => {
                chars.next();
                let index = d as usize - '1' as usize;
                match args.get(index) {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('%');
                        out.push(d);
                    }
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

/// Look up `id` in `catalog` and expand its template with `args`
///
/// Returns an empty string when the catalog has no template for `id`.
///
/// ```
/// use strkit::message::{format_message, InMemoryCatalog};
///
/// let catalog: InMemoryCatalog =
///     [(7, "The installer encountered error %1: %2")].into_iter().collect();
/// assert_eq!(
///     format_message(&catalog, 7, &["12345", "Action failed."]),
///     "The installer encountered error 12345: Action failed."
/// );
/// assert_eq!(format_message(&catalog, 100000, &["foo"]), "");
/// ```
pub fn format_message(catalog: &impl MessageCatalog, id: u32, args: &[&str]) -> String {
    match catalog.template(id) {
        Some(template) => format_template(template, args),
        None => {
            debug!("no message template for id {id}");
            String::new()
        }
    }
}
