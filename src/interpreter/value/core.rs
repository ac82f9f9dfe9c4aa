use std::{cell::RefCell, rc::Rc};

use bigdecimal::BigDecimal;

use crate::interpreter::value::generator::Generator;

/// Represents a runtime value.
///
/// This enum models the three kinds of values expressions can produce:
/// scalar numbers, fixed-length arrays of numbers, and stateful lazy
/// generators of numbers. Arrays are immutable once built; operators that
/// look like mutation (`!=` fill) allocate a new array. Generators are the
/// one stateful value: cloning a generator value shares its state, so a
/// take pulled through any clone advances them all.
#[derive(Debug, Clone)]
pub enum Value {
    /// An arbitrary-precision decimal number.
    Number(BigDecimal),
    /// An ordered, fixed-length, homogeneous sequence of numbers.
    Array(Rc<Vec<BigDecimal>>),
    /// A stateful, possibly-bounded lazy sequence of numbers.
    Generator(Rc<RefCell<Generator>>),
}

/// A runtime type tag, used to build dispatch signatures.
///
/// The set is closed: every value maps to exactly one tag, and `Unknown` is
/// reserved for signatures that no value can produce (it only shows up when
/// rendering a deliberately unsupported lookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A scalar number.
    Number,
    /// A fixed-length array.
    Array,
    /// A lazy generator.
    Generator,
    /// No known type.
    Unknown,
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "<number>"),
            Self::Array => write!(f, "<array>"),
            Self::Generator => write!(f, "<generator>"),
            Self::Unknown => write!(f, "<unknown>"),
        }
    }
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Number(_) => TypeTag::Number,
            Self::Array(_) => TypeTag::Array,
            Self::Generator(_) => TypeTag::Generator,
        }
    }

    /// Renders the value for display in the REPL.
    ///
    /// - Numbers render in their shortest decimal form.
    /// - Arrays render space-separated, right-aligned to the widest
    ///   element, wrapped every ten elements.
    /// - Generators render as an opaque tag naming their element type.
    ///
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use bigdecimal::BigDecimal;
    /// use tally::interpreter::value::core::Value;
    ///
    /// let arr = Value::Array(Rc::new(vec![BigDecimal::from(1), BigDecimal::from(20)]));
    /// assert_eq!(arr.stringify(), " 1 20");
    /// ```
    #[must_use]
    pub fn stringify(&self) -> String {
        match self {
            Self::Number(value) => value.normalized().to_string(),

            Self::Array(values) => {
                let rendered: Vec<String> = values.iter()
                                                  .map(|v| v.normalized().to_string())
                                                  .collect();
                let width = rendered.iter().map(String::len).max().unwrap_or(0);

                rendered.chunks(10)
                        .map(|line| {
                            line.iter()
                                .map(|v| format!("{v:>width$}"))
                                .collect::<Vec<_>>()
                                .join(" ")
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
            },

            Self::Generator(_) => format!("<generator {}>", TypeTag::Number),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            // Generators are stateful; equality is identity.
            (Self::Generator(a), Self::Generator(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<BigDecimal>> for Value {
    fn from(values: Vec<BigDecimal>) -> Self {
        Self::Array(Rc::new(values))
    }
}

impl From<Generator> for Value {
    fn from(generator: Generator) -> Self {
        Self::Generator(Rc::new(RefCell::new(generator)))
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::{TypeTag, Value};
    use crate::interpreter::value::generator::Generator;

    fn array(values: &[i64]) -> Value {
        values.iter()
              .map(|&v| BigDecimal::from(v))
              .collect::<Vec<_>>()
              .into()
    }

    #[test]
    fn type_tags_match_variants() {
        assert_eq!(Value::from(BigDecimal::from(1)).type_tag(), TypeTag::Number);
        assert_eq!(array(&[1]).type_tag(), TypeTag::Array);
        assert_eq!(Value::from(Generator::count_up(BigDecimal::from(3))).type_tag(),
                   TypeTag::Generator);
    }

    #[test]
    fn numbers_render_in_shortest_form() {
        let n: BigDecimal = "2.50".parse().unwrap();
        assert_eq!(Value::from(n).stringify(), "2.5");
        assert_eq!(Value::from(BigDecimal::from(-5)).stringify(), "-5");
    }

    #[test]
    fn arrays_align_to_the_widest_element() {
        assert_eq!(array(&[1, 20, 300]).stringify(), "  1  20 300");
    }

    #[test]
    fn arrays_wrap_every_ten_elements() {
        let arr = array(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(arr.stringify(), " 0  1  2  3  4  5  6  7  8  9\n10 11");
    }

    #[test]
    fn generators_render_as_an_opaque_tag() {
        let gen = Value::from(Generator::count_up(BigDecimal::from(3)));
        assert_eq!(gen.stringify(), "<generator <number>>");
    }

    #[test]
    fn generator_equality_is_identity() {
        let a = Value::from(Generator::count_up(BigDecimal::from(3)));
        let b = Value::from(Generator::count_up(BigDecimal::from(3)));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
