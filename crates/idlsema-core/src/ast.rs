//! Parsed representation of a single IDL document.
//!
//! Every collection keeps declaration order: checking passes report the first
//! offense they meet, so order is part of the observable behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::program::DocumentId;

// ============================================================================
// Types and constant expressions
// ============================================================================

/// A type reference as written in source (`i32`, `list<string>`, `Foo`).
///
/// Carried through for completeness; no pass inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<Box<Type>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Box<Type>>,
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_type: None,
            value_type: None,
        }
    }

    /// `list<T>` / `set<T>`.
    pub fn container(name: impl Into<String>, elem: Type) -> Self {
        Self {
            name: name.into(),
            key_type: None,
            value_type: Some(Box::new(elem)),
        }
    }

    /// `map<K, V>`.
    pub fn map(key: Type, value: Type) -> Self {
        Self {
            name: "map".to_owned(),
            key_type: Some(Box::new(key)),
            value_type: Some(Box::new(value)),
        }
    }
}

/// Constant expression (default values, `const` initializers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConstValue {
    Int(i64),
    Double(f64),
    Literal(String),
    Identifier(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
}

// ============================================================================
// Fields
// ============================================================================

/// Field qualifier. `Default` means none was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    Required,
    Optional,
    #[default]
    Default,
}

impl fmt::Display for Requiredness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// A struct-like member, a function argument, or a throws clause entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub requiredness: Requiredness,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ConstValue>,
}

impl Field {
    pub fn new(id: i32, name: impl Into<String>, ty: Type) -> Self {
        Self {
            id,
            name: name.into(),
            requiredness: Requiredness::Default,
            ty,
            default: None,
        }
    }

    pub fn with_requiredness(mut self, requiredness: Requiredness) -> Self {
        self.requiredness = requiredness;
        self
    }

    pub fn with_default(mut self, value: ConstValue) -> Self {
        self.default = Some(value);
        self
    }
}

// ============================================================================
// Struct-likes
// ============================================================================

/// What kind of struct-like a declaration is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Struct,
    Union,
    Exception,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Exception => "exception",
        };
        f.write_str(s)
    }
}

/// A struct, union or exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructLike {
    pub category: Category,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl StructLike {
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn is_union(&self) -> bool {
        self.category == Category::Union
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value,
        });
        self
    }
}

// ============================================================================
// Services
// ============================================================================

/// A service method.
///
/// `void` and `return_type` are kept separately because the parser records
/// them separately: a malformed tree may claim both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub void: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Type>,
    #[serde(default)]
    pub arguments: Vec<Field>,
    #[serde(default)]
    pub throws: Vec<Field>,
}

impl Function {
    /// A two-way `void` function with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            oneway: false,
            void: true,
            return_type: None,
            arguments: Vec::new(),
            throws: Vec::new(),
        }
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }

    pub fn returns(mut self, ty: Type) -> Self {
        self.void = false;
        self.return_type = Some(ty);
        self
    }

    pub fn with_argument(mut self, arg: Field) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn with_throws(mut self, exception: Field) -> Self {
        self.throws.push(exception);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            functions: Vec::new(),
        }
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}

// ============================================================================
// Top-level declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typedef {
    pub alias: String,
    pub target: Type,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub value: ConstValue,
}

/// An `include "path"` directive.
///
/// `reference` is filled in by the include resolver; `None` means the file
/// was never linked and traversal will not follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<DocumentId>,
}

/// One IDL file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// File identifier used in diagnostics.
    pub filename: String,
    #[serde(default)]
    pub includes: Vec<Include>,
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub struct_likes: Vec<StructLike>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Document {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn with_typedef(mut self, alias: impl Into<String>, target: Type) -> Self {
        self.typedefs.push(Typedef {
            alias: alias.into(),
            target,
        });
        self
    }

    pub fn with_constant(mut self, name: impl Into<String>, ty: Type, value: ConstValue) -> Self {
        self.constants.push(Constant {
            name: name.into(),
            ty,
            value,
        });
        self
    }

    pub fn with_struct_like(mut self, struct_like: StructLike) -> Self {
        self.struct_likes.push(struct_like);
        self
    }

    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Unions in declaration order.
    pub fn unions(&self) -> impl Iterator<Item = &StructLike> {
        self.struct_likes.iter().filter(|s| s.is_union())
    }

    /// Names that share the document's global scope, in declaration order:
    /// typedefs, constants, struct-likes, services.
    pub fn global_names(&self) -> impl Iterator<Item = &str> {
        let typedefs = self.typedefs.iter().map(|t| t.alias.as_str());
        let constants = self.constants.iter().map(|c| c.name.as_str());
        let struct_likes = self.struct_likes.iter().map(|s| s.name.as_str());
        let services = self.services.iter().map(|s| s.name.as_str());
        typedefs.chain(constants).chain(struct_likes).chain(services)
    }
}
