//! Rule trait for defining convention rules over host syntax elements.

use crate::model::Element;
use crate::types::{Severity, Violation};

/// Outcome of checking one element against a rule's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The element conforms, or the rule does not apply to it.
    Conforms,
    /// The element violates the rule with the given identifier.
    Violates(&'static str),
}

impl Verdict {
    /// Returns true for [`Verdict::Conforms`].
    #[must_use]
    pub fn is_conforming(self) -> bool {
        matches!(self, Self::Conforms)
    }
}

/// A per-element convention rule.
///
/// The walker invokes [`ElementRule::check_element`] once per element during
/// a document pass. Returning violations stops descent into that element's
/// subtree; an empty return lets the walk continue into the children. Sibling
/// traversal is never affected.
///
/// Rules hold only immutable configuration, so checking the same element
/// twice always yields the same result.
///
/// # Example
///
/// ```ignore
/// use entity_lint_core::{Element, ElementRule, Violation};
///
/// pub struct NoEmptyClasses;
///
/// impl ElementRule for NoEmptyClasses {
///     fn name(&self) -> &'static str { "NoEmptyClassesRule" }
///     fn code(&self) -> &'static str { "EC999" }
///
///     fn check_element(&self, element: &Element) -> Vec<Violation> {
///         // inspect element, return violations
///         vec![]
///     }
/// }
/// ```
pub trait ElementRule: Send + Sync {
    /// Returns the host-facing rule identifier reported with violations
    /// (e.g., "EntityClassesStructureRule").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "EC001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single element and returns any violations found.
    ///
    /// A non-empty return tells the walker to skip this element's subtree.
    fn check_element(&self, element: &Element) -> Vec<Violation>;
}

/// Type alias for boxed `ElementRule` trait objects.
pub type RuleBox = Box<dyn ElementRule>;
