//! # entity-lint-core
//!
//! Core framework for convention linting over host-supplied syntax trees.
//!
//! The analysis host owns parsing and tree construction; this crate defines
//! the read-only model it hands to rules and the machinery to run them:
//!
//! - [`Element`], [`Document`] and friends — the language-neutral syntax model
//! - [`ElementRule`] trait for per-element convention rules
//! - [`walk_document`] for depth-first traversal with descend control
//! - [`Linter`] for orchestrating rule execution
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use entity_lint_core::{Document, Element, Linter};
//!
//! let linter = Linter::new().rule(MyRule::new());
//! let result = linter.lint_document(&document);
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod linter;
mod model;
mod rule;
mod types;
mod walker;

pub use linter::Linter;
pub use model::{
    AccessModifier, Attribute, Document, Element, ElementKind, ParseAccessModifierError,
};
pub use rule::{ElementRule, RuleBox, Verdict};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
pub use walker::{walk_document, Descend};
