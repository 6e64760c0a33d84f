use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "+" | "add" => Ok(Operation::Add),
            "-" | "sub" | "subtract" => Ok(Operation::Subtract),
            "*" | "mul" | "multiply" => Ok(Operation::Multiply),
            "/" | "div" | "divide" => Ok(Operation::Divide),
            other => Err(format!("Unknown operation '{}'", other)),
        }
    }
}

/// Evaluates `left op right` over `i128`. Overflow is an error, never a wrap;
/// division truncates toward zero.
pub fn evaluate(left: i128, right: i128, op: Operation) -> Result<i128, GameError> {
    let result = match op {
        Operation::Add => left.checked_add(right),
        Operation::Subtract => left.checked_sub(right),
        Operation::Multiply => left.checked_mul(right),
        Operation::Divide => {
            if right == 0 {
                return Err(GameError::DivisionByZero);
            }
            left.checked_div(right)
        }
    };
    result.ok_or(GameError::ArithmeticOverflow)
}

/// Score bonus earned by a calculator result: `(|result| mod 5) + 1`, or 0
/// when the game is inactive or the result is zero.
pub fn bonus_for(result: i128, active: bool) -> u64 {
    if !active || result == 0 {
        return 0;
    }
    (result.unsigned_abs() % 5) as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(6, 3, Operation::Divide), Ok(2));
        assert_eq!(evaluate(-7, 2, Operation::Add), Ok(-5));
        assert_eq!(evaluate(4, 9, Operation::Subtract), Ok(-5));
        assert_eq!(evaluate(-12, 1, Operation::Multiply), Ok(-12));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(evaluate(-7, 2, Operation::Divide), Ok(-3));
        assert_eq!(evaluate(7, -2, Operation::Divide), Ok(-3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(5, 0, Operation::Divide), Err(GameError::DivisionByZero));
        assert_eq!(evaluate(0, 0, Operation::Divide), Err(GameError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(evaluate(i128::MAX, 1, Operation::Add), Err(GameError::ArithmeticOverflow));
        assert_eq!(evaluate(i128::MIN, 1, Operation::Subtract), Err(GameError::ArithmeticOverflow));
        assert_eq!(evaluate(i128::MAX, 2, Operation::Multiply), Err(GameError::ArithmeticOverflow));
        assert_eq!(evaluate(i128::MIN, -1, Operation::Divide), Err(GameError::ArithmeticOverflow));
    }

    #[test]
    fn test_bonus_range() {
        assert_eq!(bonus_for(0, true), 0);
        assert_eq!(bonus_for(-12, true), 3);
        assert_eq!(bonus_for(10, true), 1);
        assert_eq!(bonus_for(4, true), 5);
        assert_eq!(bonus_for(-12, false), 0);
        assert_eq!(bonus_for(i128::MIN, true), (i128::MIN.unsigned_abs() % 5) as u64 + 1);
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("DIV".parse::<Operation>(), Ok(Operation::Divide));
        assert!("pow".parse::<Operation>().is_err());
    }
}
