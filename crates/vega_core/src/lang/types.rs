//! Declared types and their storage widths.
//!
//! Basic types are plain enum values, so every `int` is the same `int`. Arrays keep their element
//! flattened: wrapping an array in another array extends the dimension list instead of nesting.
//!
//! ```rust
//! use vega_core::lang::types::{Array, BasicType, Type};
//!
//! let row = Type::Array(Array::new(Type::Basic(BasicType::Int), 3).unwrap());
//! let grid = Array::new(row, 2).unwrap();
//! assert_eq!(grid.dimensions(), &[3, 2]);
//! assert_eq!(grid.width(), 24);
//!
//! // Widths are checked: an array that cannot be addressed is rejected.
//! assert!(Array::new(Type::Basic(BasicType::Int), usize::MAX).is_none());
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Int,
    Float,
    Char,
    Bool,
}

impl BasicType {
    /// Storage width in bytes.
    pub const fn width(self) -> usize {
        match self {
            BasicType::Int => 4,
            BasicType::Float => 8,
            BasicType::Char | BasicType::Bool => 1,
        }
    }

    pub const fn lexeme(self) -> &'static str {
        match self {
            BasicType::Int => "int",
            BasicType::Float => "float",
            BasicType::Char => "char",
            BasicType::Bool => "bool",
        }
    }

    /// Map a basic type keyword to its type. `str` is not basic; see [`Type::string`].
    pub fn from_keyword(lexeme: &str) -> Option<Self> {
        match lexeme {
            "int" => Some(BasicType::Int),
            "float" => Some(BasicType::Float),
            "char" => Some(BasicType::Char),
            "bool" => Some(BasicType::Bool),
            _ => None,
        }
    }
}

/// Fixed-size array type.
///
/// `dimensions` lists sizes in the order the array wrappers were applied, innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array {
    element: BasicType,
    size: usize,
    dimensions: Vec<usize>,
    width: usize,
}

impl Array {
    /// Wrap `element` in an array of `size` slots.
    ///
    /// Returns `None` when the total width overflows `usize`.
    pub fn new(element: Type, size: usize) -> Option<Self> {
        let width = size.checked_mul(element.width())?;
        Some(Self::wrap(element, size, width))
    }

    /// Wrap `element` in an array of unknown size (`[]`), which has no storage width.
    pub fn unsized_of(element: Type) -> Self {
        Self::wrap(element, 0, 0)
    }

    fn wrap(element: Type, size: usize, width: usize) -> Self {
        let (element, mut dimensions) = match element {
            Type::Basic(basic) => (basic, Vec::new()),
            Type::Array(inner) => (inner.element, inner.dimensions),
        };
        dimensions.push(size);
        Self {
            element,
            size,
            dimensions,
            width,
        }
    }

    /// Innermost basic element type.
    pub fn element(&self) -> BasicType {
        self.element
    }

    /// Size of the outermost wrapper.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Basic(BasicType),
    Array(Array),
}

impl Type {
    pub const INT: Type = Type::Basic(BasicType::Int);
    pub const FLOAT: Type = Type::Basic(BasicType::Float);
    pub const CHAR: Type = Type::Basic(BasicType::Char);
    pub const BOOL: Type = Type::Basic(BasicType::Bool);

    /// `str`: an unsized array of `char`.
    pub fn string() -> Type {
        Type::Array(Array::unsized_of(Type::CHAR))
    }

    pub fn width(&self) -> usize {
        match self {
            Type::Basic(basic) => basic.width(),
            Type::Array(array) => array.width(),
        }
    }

    pub fn lexeme(&self) -> &'static str {
        match self {
            Type::Basic(basic) => basic.lexeme(),
            Type::Array(_) => "[]",
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(basic) => f.write_str(basic.lexeme()),
            Type::Array(array) => {
                f.write_str(array.element.lexeme())?;
                for dim in &array.dimensions {
                    match *dim {
                        0 => f.write_str("[]")?,
                        n => write!(f, "[{n}]")?,
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_widths() {
        assert_eq!(Type::INT.width(), 4);
        assert_eq!(Type::FLOAT.width(), 8);
        assert_eq!(Type::CHAR.width(), 1);
        assert_eq!(Type::BOOL.width(), 1);
    }

    #[test]
    fn test_nested_arrays_flatten_dimensions() {
        let a = Type::Array(Array::new(Type::INT, 2).unwrap());
        let b = Type::Array(Array::new(a, 3).unwrap());
        let c = Array::new(b, 5).unwrap();
        assert_eq!(c.dimensions(), &[2, 3, 5]);
        assert_eq!(c.element(), BasicType::Int);
        assert_eq!(c.size(), 5);
        assert_eq!(c.width(), 2 * 3 * 5 * 4);
    }

    #[test]
    fn test_string_is_char_array() {
        let s = Type::string();
        assert!(s.is_array());
        assert_eq!(s.width(), 0);
        assert_eq!(s.lexeme(), "[]");
        let array = Array::new(Type::Array(Array::new(Type::CHAR, 10).unwrap()), 5).unwrap();
        assert_eq!(array.dimensions(), &[10, 5]);
        assert_eq!(array.width(), 50);
    }

    #[test]
    fn test_width_overflow_is_rejected() {
        assert!(Array::new(Type::INT, usize::MAX / 2).is_none());
        let mut ty = Type::INT;
        for _ in 0..3 {
            ty = Type::Array(Array::new(ty, 100_000).unwrap());
        }
        assert!(Array::new(ty, 100_000).is_none());
        let unsized_row = Type::Array(Array::unsized_of(Type::INT));
        assert_eq!(Array::new(unsized_row, usize::MAX).unwrap().width(), 0);
    }

    #[test]
    fn test_display() {
        let row = Type::Array(Array::new(Type::FLOAT, 4).unwrap());
        let grid = Type::Array(Array::new(row, 2).unwrap());
        assert_eq!(grid.to_string(), "float[4][2]");
        assert_eq!(Type::BOOL.to_string(), "bool");
        assert_eq!(Type::string().to_string(), "char[]");
    }
}
