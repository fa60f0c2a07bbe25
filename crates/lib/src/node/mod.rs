//! The universal in-memory value for flatkv.
//!
//! This module provides the [`Node`] enum that represents every value the codec
//! can transport. Nodes are either leaf values (null, booleans, numbers, text)
//! or branch values (ordered lists and insertion-ordered maps). Trees of nodes
//! are transient: built fresh per codec invocation, returned by value, and never
//! shared across calls.

use std::fmt;

use indexmap::IndexMap;

/// A nested configuration value.
///
/// `Node` is a tagged union over the three structural shapes the codec knows
/// about: scalars, sequences, and mappings. Mapping key order is preserved
/// (insertion order), which keeps flattened output deterministic for snapshots
/// and tests.
///
/// # Value Types
///
/// ## Leaf Values (Terminal Nodes)
/// - [`Node::Null`] - Null/empty value, also the placeholder for sparse list slots
/// - [`Node::Bool`] - Boolean values
/// - [`Node::Int`] - 64-bit signed integers
/// - [`Node::Float`] - 64-bit floating point numbers
/// - [`Node::Text`] - UTF-8 text strings
///
/// ## Branch Values (Container Nodes)
/// - [`Node::List`] - Ordered sequence; element order is significant
/// - [`Node::Map`] - Insertion-ordered mapping with unique string keys
///
/// # Direct Comparisons
///
/// `Node` implements `PartialEq` with primitive types for ergonomic comparisons:
///
/// ```
/// # use flatkv::Node;
/// let text = Node::Text("hello".to_string());
/// let number = Node::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Node {
    // Leaf values (terminal nodes)
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),

    // Branch values (can contain other nodes)
    /// Ordered sequence of nodes
    List(Vec<Node>),
    /// Insertion-ordered mapping of string keys to nodes
    Map(IndexMap<String, Node>),
}

impl Node {
    /// Returns true if this is a leaf value (terminal node)
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Null | Node::Bool(_) | Node::Int(_) | Node::Float(_) | Node::Text(_)
        )
    }

    /// Returns true if this is a branch value (can contain other nodes)
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::List(_) | Node::Map(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Float(_) => "float",
            Node::Text(_) => "text",
            Node::List(_) => "list",
            Node::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&Vec<Node>> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut IndexMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    /// Scalar rendering used when value encoding stringifies a non-text leaf:
    /// `null`, `true`, `42`, `1.5`, or the raw text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{b}"),
            Node::Int(n) => write!(f, "{n}"),
            Node::Float(x) => write!(f, "{x}"),
            Node::Text(s) => write!(f, "{s}"),
            Node::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value)
    }
}

impl From<IndexMap<String, Node>> for Node {
    fn from(value: IndexMap<String, Node>) -> Self {
        Node::Map(value)
    }
}

// Lossless interchange with serde_json for the textual boundary.
impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Int(i)
                } else {
                    // u64 above i64::MAX, or a true float
                    Node::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Node::Text(s),
            serde_json::Value::Array(items) => {
                Node::List(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(entries) => Node::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for serde_json::Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => serde_json::Value::Null,
            Node::Bool(b) => serde_json::Value::Bool(b),
            Node::Int(n) => serde_json::Value::Number(n.into()),
            Node::Float(x) => serde_json::Number::from_f64(x)
                .map(serde_json::Value::Number)
                // Non-finite floats have no JSON representation
                .unwrap_or(serde_json::Value::Null),
            Node::Text(s) => serde_json::Value::String(s),
            Node::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Node::Map(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

// PartialEq implementations for comparing Node with other types
impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        match self {
            Node::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        match self {
            Node::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Node::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Node::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Node::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Node> for str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other == *self
    }
}

impl PartialEq<Node> for String {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for i64 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for i32 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for bool {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}
