//! Read-only syntax model supplied by the analysis host.
//!
//! The host owns parsing and tree construction; these types are the
//! language-neutral view it hands to convention rules. Rules never mutate
//! them, and the model makes no attempt to capture full language semantics,
//! only what convention checks need: namespace paths, access modifiers,
//! attached attributes, and child members.

use crate::types::Location;
use thiserror::Error;

/// Kind of a declaration element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Synthetic document root.
    Root,
    /// `namespace Foo.Bar { .. }`
    Namespace,
    /// `class Foo`
    Class,
    /// `interface IFoo`
    Interface,
    /// `struct Foo`
    Struct,
    /// `public int Id { get; set; }`
    Property,
    /// `public void Run()`
    Method,
    /// `private int _count;`
    Field,
}

impl ElementKind {
    /// The lowercase keyword the host uses when rendering element names.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Property => "property",
            Self::Method => "method",
            Self::Field => "field",
        }
    }
}

/// Declared access level of an element.
///
/// `Unspecified` models a declaration with no modifier recorded; convention
/// checks treat it like any other non-public value rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessModifier {
    /// `public`
    Public,
    /// `internal`
    Internal,
    /// `protected`
    Protected,
    /// `protected internal`
    ProtectedInternal,
    /// `private`
    Private,
    /// No modifier recorded by the host.
    #[default]
    Unspecified,
}

impl std::fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::Private => "private",
            Self::Unspecified => "",
        };
        write!(f, "{keyword}")
    }
}

/// Error returned when an access modifier keyword is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown access modifier: `{0}`")]
pub struct ParseAccessModifierError(String);

impl std::str::FromStr for AccessModifier {
    type Err = ParseAccessModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            "protected" => Ok(Self::Protected),
            "protected internal" | "internal protected" => Ok(Self::ProtectedInternal),
            "private" => Ok(Self::Private),
            "" => Ok(Self::Unspecified),
            other => Err(ParseAccessModifierError(other.to_owned())),
        }
    }
}

/// One marker annotation attached to a declaration.
///
/// Only the raw textual form is retained; hosts differ on whether it
/// includes the surrounding brackets (`[DataContract]` vs `DataContract`),
/// so rules must tolerate both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Raw text of the attribute as the host recorded it.
    pub text: String,
}

impl Attribute {
    /// Creates an attribute from its raw text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A declaration element in the host's syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Kind of declaration.
    pub kind: ElementKind,
    /// Bare identifier name (e.g., `Customer`, `Id`).
    pub name: String,
    /// Dot-segmented enclosing namespace path (e.g., `Foo.Entities`).
    /// Empty for the global namespace.
    pub namespace: String,
    /// Declared access level.
    pub access: AccessModifier,
    /// Attached marker annotations, in declaration order.
    pub attributes: Vec<Attribute>,
    /// Child members and nested declarations, in declaration order.
    pub children: Vec<Element>,
    /// Whether the host flagged this element as generated code.
    /// Only meaningful on a document root.
    pub generated: bool,
    /// Where the declaration starts.
    pub location: Location,
}

impl Element {
    /// Creates an element of the given kind and name.
    #[must_use]
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace: String::new(),
            access: AccessModifier::Unspecified,
            attributes: Vec::new(),
            children: Vec::new(),
            generated: false,
            location: Location::default(),
        }
    }

    /// Creates a synthetic document root.
    #[must_use]
    pub fn root() -> Self {
        Self::new(ElementKind::Root, "")
    }

    /// Creates a class declaration element.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Class, name)
    }

    /// Creates a property member element.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Property, name)
    }

    /// Sets the enclosing namespace path.
    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the access modifier.
    #[must_use]
    pub fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Attaches a marker annotation.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds a child member or nested declaration.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Marks this element as generated code.
    #[must_use]
    pub fn into_generated(mut self) -> Self {
        self.generated = true;
        self
    }

    /// Sets the source location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// The display name the host renders for this element, e.g.
    /// `"property Id"` or `"class Customer"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.kind.keyword().to_owned()
        } else {
            format!("{} {}", self.kind.keyword(), self.name)
        }
    }

    /// Whether the namespace path, split on `.`, contains the exact segment.
    #[must_use]
    pub fn namespace_contains_segment(&self, segment: &str) -> bool {
        self.namespace.split('.').any(|s| s == segment)
    }
}

/// A parsed source document handed over by the host.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path of the source file, relative to project root.
    pub path: std::path::PathBuf,
    /// Root element, if the host produced one.
    pub root: Option<Element>,
}

impl Document {
    /// Creates a document with the given root element.
    #[must_use]
    pub fn new(path: impl Into<std::path::PathBuf>, root: Element) -> Self {
        Self {
            path: path.into(),
            root: Some(root),
        }
    }

    /// Creates a document with no root (valid, yields no violations).
    #[must_use]
    pub fn empty(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_known_modifiers() {
        assert_eq!(
            AccessModifier::from_str("public"),
            Ok(AccessModifier::Public)
        );
        assert_eq!(
            AccessModifier::from_str("protected internal"),
            Ok(AccessModifier::ProtectedInternal)
        );
        assert_eq!(AccessModifier::from_str(""), Ok(AccessModifier::Unspecified));
    }

    #[test]
    fn rejects_unknown_modifier() {
        let err = AccessModifier::from_str("friend").unwrap_err();
        assert!(err.to_string().contains("friend"));
    }

    #[test]
    fn display_name_uses_host_keyword() {
        let prop = Element::property("Id");
        assert_eq!(prop.display_name(), "property Id");

        let class = Element::class("Customer");
        assert_eq!(class.display_name(), "class Customer");
    }

    #[test]
    fn namespace_segment_match_is_exact() {
        let class = Element::class("Customer").in_namespace("Foo.Entities");
        assert!(class.namespace_contains_segment("Entities"));
        assert!(!class.namespace_contains_segment("Entitie"));

        // "EntitiesV2" must not count as the "Entities" segment
        let other = Element::class("Customer").in_namespace("Foo.EntitiesV2");
        assert!(!other.namespace_contains_segment("Entities"));
    }

    #[test]
    fn empty_namespace_has_no_segments() {
        let class = Element::class("Customer");
        assert!(!class.namespace_contains_segment("Entities"));
    }

    #[test]
    fn builder_composes_members() {
        let class = Element::class("Customer")
            .in_namespace("Foo.Entities")
            .with_access(AccessModifier::Public)
            .with_attribute(Attribute::new("DataContract"))
            .with_child(Element::property("Id").with_access(AccessModifier::Public));

        assert_eq!(class.attributes.len(), 1);
        assert_eq!(class.children.len(), 1);
        assert_eq!(class.children[0].display_name(), "property Id");
    }
}
