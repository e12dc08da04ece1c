//! Rule enforcing the structure convention for entity classes.
//!
//! # Convention
//!
//! Every class declared under a namespace path containing the segment
//! `Entities` must:
//!
//! - be declared `public`;
//! - carry a `DataContract` marker attribute (an optional `Attribute`
//!   suffix and surrounding `[...]` brackets in the raw text both count);
//! - expose public properties named `Id` and `Name`.
//!
//! Classes outside an `Entities` namespace segment are never checked.
//! A violating class produces exactly one violation, with no detail about
//! which requirement failed, and its subtree is not descended into.
//!
//! # Example
//!
//! ```ignore
//! namespace Shop.Entities
//! {
//!     [DataContract]
//!     public class Customer
//!     {
//!         public int Id { get; set; }
//!         public string Name { get; set; }
//!     }
//! }
//! ```

use entity_lint_core::{
    AccessModifier, Element, ElementKind, ElementRule, Severity, Verdict, Violation,
};
use regex::Regex;
use tracing::debug;

/// Rule code for entity-classes-structure.
pub const CODE: &str = "EC001";

/// Rule identifier reported with violations.
pub const NAME: &str = "EntityClassesStructureRule";

const TARGET_NAMESPACE_SEGMENT: &str = "Entities";
const REQUIRED_MARKERS: &[&str] = &["DataContract"];
const REQUIRED_PROPERTIES: &[&str] = &["Id", "Name"];

/// A required marker name with its precompiled text matcher.
struct RequiredMarker {
    pattern: Option<Regex>,
}

impl RequiredMarker {
    fn new(name: &str) -> Self {
        // Accepts the bare name, the name with an `Attribute` suffix, and
        // either form appearing inside a bracketed attribute-list token.
        let escaped = regex::escape(name);
        let pattern = format!(r"^(?:\[.*{escaped}(?:Attribute)?\s*\]|{escaped}(?:Attribute)?)$");
        Self {
            pattern: Regex::new(&pattern).ok(),
        }
    }

    /// Whether an attribute's raw text names this marker.
    ///
    /// A pattern that failed to compile simply never matches; malformed
    /// input fails the check, it is not an error.
    fn matches(&self, attribute_text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|re| re.is_match(attribute_text.trim()))
    }
}

/// Checks that entity classes follow the required shape convention.
pub struct EntityClassesStructure {
    severity: Severity,
    required_markers: Vec<RequiredMarker>,
    required_properties: Vec<String>,
}

impl Default for EntityClassesStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityClassesStructure {
    /// Creates the rule with its compiled-in convention definition.
    ///
    /// The required marker names, required property names, and target
    /// namespace segment are constants; the rule has no external
    /// configuration surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            required_markers: REQUIRED_MARKERS
                .iter()
                .copied()
                .map(RequiredMarker::new)
                .collect(),
            required_properties: REQUIRED_PROPERTIES.iter().map(|&n| n.to_owned()).collect(),
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Decides whether an element conforms to the convention.
    ///
    /// Pure function of the element and the rule's immutable configuration:
    /// no state, no side effects, same verdict on every invocation.
    #[must_use]
    pub fn verdict(&self, element: &Element) -> Verdict {
        if element.kind != ElementKind::Class
            || !element.namespace_contains_segment(TARGET_NAMESPACE_SEGMENT)
        {
            return Verdict::Conforms;
        }

        if Self::is_public(element)
            && self.has_required_markers(element)
            && self.has_required_public_properties(element)
        {
            Verdict::Conforms
        } else {
            Verdict::Violates(NAME)
        }
    }

    fn is_public(element: &Element) -> bool {
        element.access == AccessModifier::Public
    }

    fn has_required_markers(&self, element: &Element) -> bool {
        self.required_markers.iter().all(|marker| {
            element
                .attributes
                .iter()
                .any(|attr| marker.matches(&attr.text))
        })
    }

    fn has_required_public_properties(&self, element: &Element) -> bool {
        self.required_properties.iter().all(|name| {
            let display = format!("property {name}");
            element.children.iter().any(|member| {
                member.access == AccessModifier::Public && member.display_name() == display
            })
        })
    }
}

impl ElementRule for EntityClassesStructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Entity classes must be public, carry [DataContract], and expose public Id and Name properties"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_element(&self, element: &Element) -> Vec<Violation> {
        match self.verdict(element) {
            Verdict::Conforms => vec![],
            Verdict::Violates(rule) => {
                debug!(class = %element.name, namespace = %element.namespace, "entity class violates structure convention");
                vec![Violation::new(
                    CODE,
                    rule,
                    self.severity,
                    element.location.clone(),
                    format!(
                        "Class `{}` does not follow the entity class structure convention",
                        element.name
                    ),
                )]
            }
        }
    }
}
