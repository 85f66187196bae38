use crate::core::{comparator, normalizer};
use crate::domain::model::Gtin;
use crate::utils::error::Result;

/// A comparison operator a host can bind, e.g. as a SQL operator.
#[derive(Debug, Clone, Copy)]
pub struct Operator<T: 'static> {
    pub symbol: &'static str,
    pub name: &'static str,
    pub apply: fn(&T, &T) -> bool,
}

/// Entry points an external type registry needs to expose a value type:
/// parse from text, print to text, and a three-way comparison that the
/// operator table is derived from.
pub trait ExternalType: Sized + 'static {
    const TYPE_NAME: &'static str;

    fn input(text: &str) -> Result<Self>;

    fn output(&self) -> String;

    /// Returns -1, 0 or 1.
    fn compare(&self, other: &Self) -> i32;

    fn operators() -> &'static [Operator<Self>];

    fn lookup_operator(symbol: &str) -> Option<&'static Operator<Self>> {
        Self::operators().iter().find(|op| op.symbol == symbol)
    }
}

static GTIN_OPERATORS: [Operator<Gtin>; 6] = [
    Operator {
        symbol: "=",
        name: "eq",
        apply: comparator::equal,
    },
    Operator {
        symbol: "<>",
        name: "ne",
        apply: comparator::not_equal,
    },
    Operator {
        symbol: "<",
        name: "lt",
        apply: comparator::less_than,
    },
    Operator {
        symbol: "<=",
        name: "le",
        apply: comparator::less_or_equal,
    },
    Operator {
        symbol: ">",
        name: "gt",
        apply: comparator::greater_than,
    },
    Operator {
        symbol: ">=",
        name: "ge",
        apply: comparator::greater_or_equal,
    },
];

impl ExternalType for Gtin {
    const TYPE_NAME: &'static str = "gtin";

    fn input(text: &str) -> Result<Self> {
        normalizer::from_text(text)
    }

    fn output(&self) -> String {
        comparator::to_text(self)
    }

    fn compare(&self, other: &Self) -> i32 {
        comparator::compare(self, other)
    }

    fn operators() -> &'static [Operator<Self>] {
        &GTIN_OPERATORS
    }
}
