use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use std::fmt;

/// Ticket price in integer cents (1500 == €15.00). Kept integral end to
/// end so sums and minimums never touch floating point.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

#[Scalar]
impl ScalarType for Money {
    fn parse(value: async_graphql::Value) -> InputValueResult<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Money)
                .ok_or_else(|| InputValueError::custom("Money expects integer cents")),
            _ => Err(InputValueError::custom(
                "Money must be a number (integer cents)",
            )),
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(self.0.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_euros() {
        assert_eq!(Money(1500).to_string(), "15.00");
        assert_eq!(Money(5).to_string(), "0.05");
        assert_eq!(Money(0).to_string(), "0.00");
    }
}
