//! AST model for the Luau JSON dump.
//!
//! Nodes are a tagged sum type keyed by the dump's `type` field. Kinds this crate knows the
//! shape of decode into dedicated structs; every other kind (including type annotations)
//! decodes into [`Node::Other`], which keeps the tag, the location and the raw JSON so that a
//! custom renderer can still pick it up through the registry.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::diagnostics::ReconstructError;

pub mod document;
pub mod span;

pub use document::AstDocument;
pub use span::{Coordinate, Location, Span, MAX_COORDINATE};

// ============================================================================
// KIND TAGS
// ============================================================================

pub mod kind {
    pub const STAT_BLOCK: &str = "AstStatBlock";
    pub const STAT_LOCAL: &str = "AstStatLocal";
    pub const STAT_ASSIGN: &str = "AstStatAssign";
    pub const STAT_RETURN: &str = "AstStatReturn";
    pub const STAT_EXPR: &str = "AstStatExpr";
    pub const STAT_BREAK: &str = "AstStatBreak";
    pub const STAT_CONTINUE: &str = "AstStatContinue";
    pub const LOCAL: &str = "AstLocal";
    pub const EXPR_GLOBAL: &str = "AstExprGlobal";
    pub const EXPR_LOCAL: &str = "AstExprLocal";
    pub const EXPR_INDEX_NAME: &str = "AstExprIndexName";
    pub const EXPR_GROUP: &str = "AstExprGroup";
    pub const EXPR_CALL: &str = "AstExprCall";
    pub const EXPR_UNARY: &str = "AstExprUnary";
    pub const EXPR_BINARY: &str = "AstExprBinary";
    pub const EXPR_VARARGS: &str = "AstExprVarargs";
    pub const CONSTANT_BOOL: &str = "AstExprConstantBool";
    pub const CONSTANT_NUMBER: &str = "AstExprConstantNumber";
    pub const CONSTANT_STRING: &str = "AstExprConstantString";
    pub const CONSTANT_NIL: &str = "AstExprConstantNil";

    /// Prefix of the static type annotation namespace. Nodes under it are never re-emitted.
    pub const TYPE_ANNOTATION_PREFIX: &str = "AstType";

    pub fn is_type_annotation(kind: &str) -> bool {
        kind.starts_with(TYPE_ANNOTATION_PREFIX)
    }
}

// ============================================================================
// NODE PAYLOADS
// ============================================================================

/// A statement list. Also used for function and loop bodies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub location: Location,
    #[serde(default)]
    pub has_end: bool,
    #[serde(default)]
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatLocal {
    pub location: Location,
    pub vars: Vec<Node>,
    /// `None` for a bare `local x`; the dump omits the field or sends an empty list.
    #[serde(default)]
    pub values: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatAssign {
    pub location: Location,
    pub vars: Vec<Node>,
    #[serde(default)]
    pub values: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatReturn {
    pub location: Location,
    #[serde(default)]
    pub list: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatExpr {
    pub location: Location,
    pub expr: Box<Node>,
}

/// A node whose only data is its location (`break`, `nil`, `...`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Leaf {
    pub location: Location,
}

/// A local variable binding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBinding {
    pub location: Location,
    pub name: String,
    #[serde(default)]
    pub luau_type: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExprGlobal {
    pub location: Location,
    pub global: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExprLocal {
    pub location: Location,
    pub local: LocalBinding,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExprIndexName {
    pub location: Location,
    pub expr: Box<Node>,
    pub index: String,
    #[serde(default)]
    pub index_location: Option<Location>,
    #[serde(default)]
    pub op: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExprGroup {
    pub location: Location,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExprCall {
    pub location: Location,
    pub func: Box<Node>,
    #[serde(default)]
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExprUnary {
    pub location: Location,
    pub op: String,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExprBinary {
    pub location: Location,
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstantBool {
    pub location: Location,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstantNumber {
    pub location: Location,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstantString {
    pub location: Location,
    pub value: String,
}

/// Any kind without a dedicated payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherNode {
    pub kind: String,
    pub location: Location,
    pub data: Value,
}

// ============================================================================
// THE NODE SUM TYPE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Node {
    Block(StatBlock),
    Local(StatLocal),
    Assign(StatAssign),
    Return(StatReturn),
    ExprStat(StatExpr),
    Break(Leaf),
    Continue(Leaf),
    Binding(LocalBinding),
    Global(ExprGlobal),
    LocalRef(ExprLocal),
    IndexName(ExprIndexName),
    Group(ExprGroup),
    Call(ExprCall),
    Unary(ExprUnary),
    Binary(ExprBinary),
    Varargs(Leaf),
    Bool(ConstantBool),
    Number(ConstantNumber),
    Str(ConstantString),
    Nil(Leaf),
    Other(OtherNode),
}

impl Node {
    /// The dump's `type` tag for this node.
    pub fn kind(&self) -> &str {
        match self {
            Node::Block(_) => kind::STAT_BLOCK,
            Node::Local(_) => kind::STAT_LOCAL,
            Node::Assign(_) => kind::STAT_ASSIGN,
            Node::Return(_) => kind::STAT_RETURN,
            Node::ExprStat(_) => kind::STAT_EXPR,
            Node::Break(_) => kind::STAT_BREAK,
            Node::Continue(_) => kind::STAT_CONTINUE,
            Node::Binding(_) => kind::LOCAL,
            Node::Global(_) => kind::EXPR_GLOBAL,
            Node::LocalRef(_) => kind::EXPR_LOCAL,
            Node::IndexName(_) => kind::EXPR_INDEX_NAME,
            Node::Group(_) => kind::EXPR_GROUP,
            Node::Call(_) => kind::EXPR_CALL,
            Node::Unary(_) => kind::EXPR_UNARY,
            Node::Binary(_) => kind::EXPR_BINARY,
            Node::Varargs(_) => kind::EXPR_VARARGS,
            Node::Bool(_) => kind::CONSTANT_BOOL,
            Node::Number(_) => kind::CONSTANT_NUMBER,
            Node::Str(_) => kind::CONSTANT_STRING,
            Node::Nil(_) => kind::CONSTANT_NIL,
            Node::Other(other) => &other.kind,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Node::Block(n) => &n.location,
            Node::Local(n) => &n.location,
            Node::Assign(n) => &n.location,
            Node::Return(n) => &n.location,
            Node::ExprStat(n) => &n.location,
            Node::Break(n) | Node::Continue(n) | Node::Varargs(n) | Node::Nil(n) => &n.location,
            Node::Binding(n) => &n.location,
            Node::Global(n) => &n.location,
            Node::LocalRef(n) => &n.location,
            Node::IndexName(n) => &n.location,
            Node::Group(n) => &n.location,
            Node::Call(n) => &n.location,
            Node::Unary(n) => &n.location,
            Node::Binary(n) => &n.location,
            Node::Bool(n) => &n.location,
            Node::Number(n) => &n.location,
            Node::Str(n) => &n.location,
            Node::Other(n) => &n.location,
        }
    }

    pub fn as_block(&self) -> Option<&StatBlock> {
        match self {
            Node::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Human-readable dump of the node for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Node::Other(other) => other.data.to_string(),
            node => format!("{node:?}"),
        }
    }

    /// Decodes a node from the JSON dump.
    pub fn from_json(value: Value) -> Result<Self, ReconstructError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ReconstructError::InvalidNode {
                message: "node is missing its `type` tag".to_string(),
            })?
            .to_string();

        fn payload<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ReconstructError> {
            serde_json::from_value(value).map_err(ReconstructError::from)
        }

        let node = match kind.as_str() {
            kind::STAT_BLOCK => Node::Block(payload(value)?),
            kind::STAT_LOCAL => Node::Local(payload(value)?),
            kind::STAT_ASSIGN => Node::Assign(payload(value)?),
            kind::STAT_RETURN => Node::Return(payload(value)?),
            kind::STAT_EXPR => Node::ExprStat(payload(value)?),
            kind::STAT_BREAK => Node::Break(payload(value)?),
            kind::STAT_CONTINUE => Node::Continue(payload(value)?),
            kind::LOCAL => Node::Binding(payload(value)?),
            kind::EXPR_GLOBAL => Node::Global(payload(value)?),
            kind::EXPR_LOCAL => Node::LocalRef(payload(value)?),
            kind::EXPR_INDEX_NAME => Node::IndexName(payload(value)?),
            kind::EXPR_GROUP => Node::Group(payload(value)?),
            kind::EXPR_CALL => Node::Call(payload(value)?),
            kind::EXPR_UNARY => Node::Unary(payload(value)?),
            kind::EXPR_BINARY => Node::Binary(payload(value)?),
            kind::EXPR_VARARGS => Node::Varargs(payload(value)?),
            kind::CONSTANT_BOOL => Node::Bool(payload(value)?),
            kind::CONSTANT_NUMBER => Node::Number(payload(value)?),
            kind::CONSTANT_STRING => Node::Str(payload(value)?),
            kind::CONSTANT_NIL => Node::Nil(payload(value)?),
            _ => {
                let location = value
                    .get("location")
                    .and_then(Value::as_str)
                    .map(Location::from)
                    .unwrap_or_default();
                Node::Other(OtherNode {
                    kind,
                    location,
                    data: value,
                })
            }
        };
        Ok(node)
    }
}

impl TryFrom<Value> for Node {
    type Error = ReconstructError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Node::from_json(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind(), self.location())
    }
}
