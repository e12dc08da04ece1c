//! Linter for orchestrating rule execution over documents.
//!
//! Stands in for the host's document pass: it owns the registered rules and
//! drives the walker once per rule, so one rule's descend decision cannot
//! hide elements from another rule.

use crate::model::Document;
use crate::rule::{ElementRule, RuleBox};
use crate::types::LintResult;
use crate::walker::{walk_document, Descend};

use tracing::{debug, info};

/// Runs registered convention rules over host-supplied documents.
#[derive(Default)]
pub struct Linter {
    rules: Vec<RuleBox>,
}

impl Linter {
    /// Creates a linter with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule<R: ElementRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs all rules over a single document.
    #[must_use]
    pub fn lint_document(&self, document: &Document) -> LintResult {
        let mut result = LintResult::new();
        result.documents_checked = 1;

        for rule in &self.rules {
            debug!(rule = rule.name(), path = %document.path.display(), "running rule");

            walk_document(document, |element| {
                let violations = rule.check_element(element);
                let descend = if violations.is_empty() {
                    Descend::Continue
                } else {
                    Descend::SkipChildren
                };
                result.violations.extend(violations);
                descend
            });
        }

        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        result
    }

    /// Runs all rules over a batch of documents, aggregating the results.
    #[must_use]
    pub fn lint_documents<'a, I>(&self, documents: I) -> LintResult
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut result = LintResult::new();

        for document in documents {
            result.extend(self.lint_document(document));
        }

        info!(
            violations = result.violations.len(),
            documents = result.documents_checked,
            "lint pass complete"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ElementKind};
    use crate::types::{Location, Severity, Violation};

    /// Flags every class element it sees.
    struct FlagAllClasses;

    impl ElementRule for FlagAllClasses {
        fn name(&self) -> &'static str {
            "FlagAllClassesRule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check_element(&self, element: &Element) -> Vec<Violation> {
            if element.kind == ElementKind::Class {
                vec![Violation::new(
                    self.code(),
                    self.name(),
                    Severity::Error,
                    element.location.clone(),
                    format!("Class `{}` flagged", element.name),
                )]
            } else {
                vec![]
            }
        }
    }

    /// Records every element name it is shown.
    struct RecordingRule(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl ElementRule for RecordingRule {
        fn name(&self) -> &'static str {
            "RecordingRule"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }

        fn check_element(&self, element: &Element) -> Vec<Violation> {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(element.display_name());
            }
            vec![]
        }
    }

    fn nested_classes_doc() -> Document {
        let inner = Element::class("Inner");
        let outer = Element::class("Outer").with_child(inner);
        Document::new("Nested.cs", Element::root().with_child(outer))
    }

    #[test]
    fn violation_stops_descent_per_rule() {
        let linter = Linter::new().rule(FlagAllClasses);
        let result = linter.lint_document(&nested_classes_doc());

        // Outer is flagged; Inner is pruned by the descend contract.
        assert_eq!(result.violations.len(), 1);
        assert!(result.violations[0].message.contains("Outer"));
    }

    #[test]
    fn rules_walk_independently() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let linter = Linter::new()
            .rule(FlagAllClasses)
            .rule(RecordingRule(seen.clone()));

        let result = linter.lint_document(&nested_classes_doc());
        assert_eq!(result.violations.len(), 1);
        assert_eq!(linter.rule_count(), 2);

        // The recording rule still sees Inner even though the flagging rule
        // pruned it during its own walk.
        let seen = seen.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        assert!(seen.iter().any(|n| n == "class Inner"));
    }

    #[test]
    fn violations_sorted_by_location() {
        struct Fixed(usize);
        impl ElementRule for Fixed {
            fn name(&self) -> &'static str {
                "FixedRule"
            }
            fn code(&self) -> &'static str {
                "TEST003"
            }
            fn check_element(&self, element: &Element) -> Vec<Violation> {
                if element.kind == ElementKind::Root {
                    vec![Violation::new(
                        self.code(),
                        self.name(),
                        Severity::Warning,
                        Location::new("A.cs".into(), self.0, 1),
                        "fixed",
                    )]
                } else {
                    vec![]
                }
            }
        }

        let doc = Document::new("A.cs", Element::root());
        let linter = Linter::new().rule(Fixed(9)).rule(Fixed(2));
        let result = linter.lint_document(&doc);

        assert_eq!(result.violations[0].location.line, 2);
        assert_eq!(result.violations[1].location.line, 9);
    }

    #[test]
    fn batch_counts_documents() {
        let docs = vec![
            Document::new("A.cs", Element::root()),
            Document::empty("B.cs"),
        ];
        let result = Linter::new().rule(FlagAllClasses).lint_documents(&docs);
        assert_eq!(result.documents_checked, 2);
        assert!(result.violations.is_empty());
    }
}
