//! Runtime values for the Virt interpreter.
//!
//! Heap-backed variants are built through factory methods (`Value::string`,
//! `Value::array`, ...); `Heap::new` is private to this module.
//!
//! Objects and arrays differ in how writes are shared:
//!
//! - `Object` wraps an [`ObjectRef`]. Property writes mutate the shared map
//!   and are seen by every holder.
//! - `Array` wraps a copy-on-write [`Heap`]. Writing an element (and
//!   growing the array to reach it) produces an updated array that must be
//!   stored back into whatever slot held the old one.

mod function;
mod heap;
mod object;

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use virt_ir::FunctionDef;

use crate::Environment;

pub use function::{FunctionValue, NativeFn, NativeFunction};
pub use heap::Heap;
pub use object::ObjectRef;

/// Nesting depth beyond which display output is elided.
///
/// Objects can contain themselves; this bounds the recursion.
const MAX_DISPLAY_DEPTH: usize = 32;

/// Runtime value in the Virt interpreter.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    /// The only numeric type.
    Number(f64),
    Str(Heap<String>),
    Array(Heap<Vec<Value>>),
    Object(ObjectRef),
    Function(FunctionValue),
    /// Host function registered by the embedder.
    Native(NativeFunction),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// New object with the given properties.
    #[inline]
    pub fn object(properties: FxHashMap<String, Value>) -> Self {
        Value::Object(ObjectRef::from_map(properties))
    }

    /// Closure over `env`.
    #[inline]
    pub fn function(def: Rc<FunctionDef>, env: Environment) -> Self {
        Value::Function(FunctionValue::new(def, env))
    }

    #[inline]
    pub fn native(name: &'static str, func: NativeFn) -> Self {
        Value::Native(NativeFunction { name, func })
    }
}

// Value Methods

impl Value {
    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) | Value::Native(_) => "function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Language-level `==`.
    ///
    /// Scalars and strings compare by value, arrays elementwise, objects
    /// and functions by identity. Values of different types are unequal.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "language equality is exact IEEE comparison")]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Native(a), Value::Native(b)) => a.name == b.name,
            _ => false,
        }
    }

    /// Display value for user output. Top-level strings are unquoted.
    pub fn display_value(&self) -> String {
        self.to_string()
    }

    fn write_display(&self, f: &mut fmt::Formatter<'_>, depth: usize, nested: bool) -> fmt::Result {
        if depth > MAX_DISPLAY_DEPTH {
            return f.write_str("...");
        }
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) if nested => write!(f, "'{}'", s.as_str()),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.write_display(f, depth + 1, true)?;
                }
                f.write_str("]")
            }
            Value::Object(object) => {
                f.write_str("{")?;
                for (i, (key, value)) in object.entries().iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {key}: ")?;
                    value.write_display(f, depth + 1, true)?;
                }
                if object.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
            Value::Function(_) => f.write_str("<function>"),
            Value::Native(native) => write!(f, "<native function {}>", native.name),
        }
    }
}

/// Format a number the way scripts see it: integral values without a
/// fractional part (`3`, not `3.0`).
///
/// Also used to turn numeric property keys into object keys.
pub fn format_number(n: f64) -> String {
    // 2^53: beyond this not every integer is representable.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() < MAX_EXACT {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "integral and within the exactly representable range"
        )]
        let int = n as i64;
        int.to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_display(f, 0, false)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Array(items) => f.debug_tuple("Array").field(&**items).finish(),
            Value::Object(_) => write!(f, "Object({self})"),
            Value::Function(func) => write!(f, "Function({func:?})"),
            Value::Native(native) => write!(f, "Native({})", native.name),
        }
    }
}

/// Structural equality for tests and host code.
///
/// Unlike [`Value::equals`], objects compare by contents.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a[..] == b[..],
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b) || a.entries() == b.entries(),
            _ => self.equals(other),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
