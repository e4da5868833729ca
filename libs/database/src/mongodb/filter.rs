use mongodb::bson::{Bson, Document, doc};

/// Builder for query documents.
///
/// Each condition adds one top-level key, so conditions on different fields are
/// ANDed. Nothing is added for conditions the caller leaves out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    doc: Document,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match documents whose `field` equals `value`.
    pub fn exact(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.doc.insert(field, value.into());
        self
    }

    /// Match documents whose `field` contains `text`, ignoring case.
    ///
    /// `text` is matched literally; regex metacharacters are escaped.
    pub fn contains_ignore_case(mut self, field: &str, text: &str) -> Self {
        self.doc.insert(
            field,
            doc! { "$regex": regex::escape(text), "$options": "i" },
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}

impl From<Filter> for Document {
    fn from(filter: Filter) -> Self {
        filter.into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.into_document(), Document::new());
    }

    #[test]
    fn test_exact_match() {
        let doc = Filter::new().exact("category", "footwear").into_document();
        assert_eq!(doc, doc! { "category": "footwear" });
    }

    #[test]
    fn test_contains_ignore_case_escapes_metacharacters() {
        let doc = Filter::new()
            .contains_ignore_case("title", "tee (v2)")
            .into_document();
        assert_eq!(
            doc,
            doc! { "title": { "$regex": r"tee \(v2\)", "$options": "i" } }
        );
    }

    #[test]
    fn test_conditions_combine() {
        let doc: Document = Filter::new()
            .contains_ignore_case("title", "cream")
            .exact("category", "outerwear")
            .into();
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("title"));
        assert_eq!(doc.get_str("category").unwrap(), "outerwear");
    }
}
