//! Depth-first document walker with per-element descend control.
//!
//! Mirrors the host's traversal contract: elements are visited pre-order in
//! declaration order, and the callback decides per element whether the walk
//! descends into that element's subtree. Generated documents are skipped
//! entirely, before any callback fires.

use crate::model::{Document, Element};
use tracing::debug;

/// Whether the walk should continue into an element's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    /// Visit this element's children.
    Continue,
    /// Skip this element's subtree; siblings are still visited.
    SkipChildren,
}

/// Walks a document's element tree, invoking `f` once per element.
///
/// Returns the number of elements visited. Documents with no root, or whose
/// root is flagged as generated code, are skipped without invoking `f`.
pub fn walk_document<F>(document: &Document, mut f: F) -> usize
where
    F: FnMut(&Element) -> Descend,
{
    let Some(root) = &document.root else {
        debug!(path = %document.path.display(), "skipping document with no root");
        return 0;
    };

    if root.generated {
        debug!(path = %document.path.display(), "skipping generated document");
        return 0;
    }

    walk_element(root, &mut f)
}

fn walk_element<F>(element: &Element, f: &mut F) -> usize
where
    F: FnMut(&Element) -> Descend,
{
    let mut visited = 1;

    if f(element) == Descend::SkipChildren {
        return visited;
    }

    for child in &element.children {
        visited += walk_element(child, f);
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ElementKind};

    fn sample_document() -> Document {
        let class = Element::class("Customer")
            .with_child(Element::property("Id"))
            .with_child(Element::property("Name"));
        let namespace = Element::new(ElementKind::Namespace, "Entities").with_child(class);
        Document::new("Entities/Customer.cs", Element::root().with_child(namespace))
    }

    #[test]
    fn visits_all_elements_pre_order() {
        let mut names = Vec::new();
        let visited = walk_document(&sample_document(), |e| {
            names.push(e.display_name());
            Descend::Continue
        });

        assert_eq!(visited, 5);
        assert_eq!(
            names,
            vec![
                "root",
                "namespace Entities",
                "class Customer",
                "property Id",
                "property Name",
            ]
        );
    }

    #[test]
    fn skip_children_prunes_subtree_only() {
        let mut names = Vec::new();
        walk_document(&sample_document(), |e| {
            names.push(e.display_name());
            if e.kind == ElementKind::Class {
                Descend::SkipChildren
            } else {
                Descend::Continue
            }
        });

        // Properties under the pruned class are never visited.
        assert_eq!(names, vec!["root", "namespace Entities", "class Customer"]);
    }

    #[test]
    fn skip_children_keeps_siblings() {
        let doc = Document::new(
            "Two.cs",
            Element::root()
                .with_child(Element::class("First").with_child(Element::property("Id")))
                .with_child(Element::class("Second")),
        );

        let mut classes = Vec::new();
        walk_document(&doc, |e| {
            if e.kind == ElementKind::Class {
                classes.push(e.name.clone());
                Descend::SkipChildren
            } else {
                Descend::Continue
            }
        });

        assert_eq!(classes, vec!["First", "Second"]);
    }

    #[test]
    fn generated_root_is_never_walked() {
        let doc = Document::new(
            "Generated.cs",
            Element::root()
                .with_child(Element::class("Customer"))
                .into_generated(),
        );

        let visited = walk_document(&doc, |_| Descend::Continue);
        assert_eq!(visited, 0);
    }

    #[test]
    fn missing_root_is_never_walked() {
        let visited = walk_document(&Document::empty("Empty.cs"), |_| Descend::Continue);
        assert_eq!(visited, 0);
    }
}
