//! # entity-lint-rules
//!
//! Built-in convention rules for entity-lint.
//!
//! ## Available Rules
//!
//! | Code | Identifier | Description |
//! |------|------------|-------------|
//! | EC001 | `EntityClassesStructureRule` | Entity classes must be public, carry `[DataContract]`, and expose public `Id` and `Name` properties |
//!
//! ## Usage
//!
//! ```ignore
//! use entity_lint_core::Linter;
//! use entity_lint_rules::EntityClassesStructure;
//!
//! let linter = Linter::new().rule(EntityClassesStructure::new());
//! let result = linter.lint_document(&document);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entity_classes_structure;

pub use entity_classes_structure::EntityClassesStructure;

/// Re-export core types for convenience.
pub use entity_lint_core::{ElementRule, RuleBox, Severity, Verdict, Violation};

/// Returns the default set of rules.
///
/// Currently:
/// - `EntityClassesStructureRule` (EC001) - Entity class shape convention
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![Box::new(EntityClassesStructure::new())]
}
