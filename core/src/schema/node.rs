#![deny(missing_docs)]

//! # Schema Nodes
//!
//! The typed schema tree that gets translated into document fragments.
//!
//! A node is a closed `NodeKind` plus a `Metadata` record living next to it,
//! so description and example data never have to be bolted onto the kind
//! itself. Nodes are immutable once built; the builder methods consume and
//! return `self`.

use indexmap::IndexMap;
use serde_json::Value;

/// A validation check attached to a string node.
#[derive(Debug, Clone, PartialEq)]
pub enum StringCheck {
    /// Value must be a UUID.
    Uuid,
    /// Value must be an email address.
    Email,
    /// Value must be an ISO-8601 date-time.
    Datetime,
    /// Value must match the given pattern.
    Regex(String),
}

/// Structural kind of a schema node.
///
/// `Optional`, `Nullable` and `Default` are modifier layers around a child.
/// `Opaque` covers every kind the translator has no dedicated rendering for.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A string, with its attached checks in declaration order.
    String(Vec<StringCheck>),
    /// A number.
    Number,
    /// A boolean.
    Boolean,
    /// A date (rendered as an RFC 3339 date-time string).
    Date,
    /// An object with its properties in declaration order.
    Object(IndexMap<String, SchemaNode>),
    /// An array of a single element type.
    Array(Box<SchemaNode>),
    /// A closed set of string options.
    Enum(Vec<String>),
    /// A single literal value.
    Literal(Value),
    /// Marks the wrapped node as absent-able.
    Optional(Box<SchemaNode>),
    /// Marks the wrapped node as nullable.
    Nullable(Box<SchemaNode>),
    /// Supplies a default value for the wrapped node.
    Default(Box<SchemaNode>, Value),
    /// A kind without a dedicated rendering (`Any`, `Unknown`, `Record`, ...).
    Opaque(String),
}

/// Descriptive data declared on a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Human readable description.
    pub description: Option<String>,
    /// Explicit example value.
    pub example: Option<Value>,
    /// Secondary list of examples; only the first one is ever used.
    pub examples: Vec<Value>,
}

/// A node of the typed schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Structural kind.
    pub kind: NodeKind,
    /// Metadata declared on this node (not on its children).
    pub meta: Metadata,
}

impl SchemaNode {
    /// Creates a node of the given kind with empty metadata.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            meta: Metadata::default(),
        }
    }

    /// A plain string.
    pub fn string() -> Self {
        Self::new(NodeKind::String(Vec::new()))
    }

    /// A number.
    pub fn number() -> Self {
        Self::new(NodeKind::Number)
    }

    /// A boolean.
    pub fn boolean() -> Self {
        Self::new(NodeKind::Boolean)
    }

    /// A date.
    pub fn date() -> Self {
        Self::new(NodeKind::Date)
    }

    /// An object built from `(name, node)` pairs, keeping their order.
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        Self::new(NodeKind::Object(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// An array of `element`.
    pub fn array(element: SchemaNode) -> Self {
        Self::new(NodeKind::Array(Box::new(element)))
    }

    /// An enumeration of string options.
    pub fn enumeration<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(NodeKind::Enum(options.into_iter().map(Into::into).collect()))
    }

    /// A single literal value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::new(NodeKind::Literal(value.into()))
    }

    /// Accepts anything.
    pub fn any() -> Self {
        Self::new(NodeKind::Opaque("Any".into()))
    }

    /// Accepts anything, but must be narrowed before use.
    pub fn unknown() -> Self {
        Self::new(NodeKind::Opaque("Unknown".into()))
    }

    /// A free-form string-keyed map.
    pub fn record() -> Self {
        Self::new(NodeKind::Opaque("Record".into()))
    }

    /// An instance of a host-language class, e.g. `Buffer`.
    pub fn instance_of(class_name: &str) -> Self {
        Self::new(NodeKind::Opaque(format!("Instance<{}>", class_name)))
    }

    /// Wraps the node in an `Optional` layer.
    pub fn optional(self) -> Self {
        Self::new(NodeKind::Optional(Box::new(self)))
    }

    /// Wraps the node in a `Nullable` layer.
    pub fn nullable(self) -> Self {
        Self::new(NodeKind::Nullable(Box::new(self)))
    }

    /// Wraps the node in a `Default` layer carrying `value`.
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        Self::new(NodeKind::Default(Box::new(self), value.into()))
    }

    /// Sets the description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    /// Sets the explicit example.
    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.meta.example = Some(example.into());
        self
    }

    /// Sets the examples list.
    pub fn examples<I>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.meta.examples = examples.into_iter().collect();
        self
    }

    /// Adds a uuid check. No-op on non-string nodes.
    pub fn uuid(self) -> Self {
        self.with_check(StringCheck::Uuid)
    }

    /// Adds an email check. No-op on non-string nodes.
    pub fn email(self) -> Self {
        self.with_check(StringCheck::Email)
    }

    /// Adds a date-time check. No-op on non-string nodes.
    pub fn datetime(self) -> Self {
        self.with_check(StringCheck::Datetime)
    }

    /// Adds a pattern check. No-op on non-string nodes.
    pub fn regex(self, pattern: impl Into<String>) -> Self {
        self.with_check(StringCheck::Regex(pattern.into()))
    }

    fn with_check(mut self, check: StringCheck) -> Self {
        if let NodeKind::String(checks) = &mut self.kind {
            checks.push(check);
        }
        self
    }

    /// Returns the wrapped child if this node is a modifier layer.
    pub fn unwrap_layer(&self) -> Option<&SchemaNode> {
        match &self.kind {
            NodeKind::Optional(inner) | NodeKind::Nullable(inner) | NodeKind::Default(inner, _) => {
                Some(inner)
            }
            _ => None,
        }
    }

    /// True when the node itself is an `Optional` layer.
    pub fn is_optional(&self) -> bool {
        matches!(self.kind, NodeKind::Optional(_))
    }

    /// Object properties, if the node itself is an object.
    pub fn properties(&self) -> Option<&IndexMap<String, SchemaNode>> {
        match &self.kind {
            NodeKind::Object(props) => Some(props),
            _ => None,
        }
    }
}
