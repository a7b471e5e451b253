use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{BinOp, NodeId};

/// Apply `op` to two evaluated operands with overflow checking.
///
/// Division truncates toward zero. `node` identifies the operator node in
/// any error that is returned.
pub fn apply_binop(op: BinOp, left: i64, right: i64, node: NodeId) -> Result<i64, RuntimeError> {
    let operation = || format!("{} {} {}", left, op, right);

    if op == BinOp::Div && right == 0 {
        return Err(RuntimeError::DivisionByZero {
            operation: operation(),
            node,
        });
    }

    let result = match op {
        BinOp::Add => left.checked_add(right),
        BinOp::Sub => left.checked_sub(right),
        BinOp::Mul => left.checked_mul(right),
        BinOp::Div => left.checked_div(right),
    };

    result.ok_or_else(|| RuntimeError::IntegerOverflow {
        operation: operation(),
        node,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(apply_binop(BinOp::Add, 2, 3, 0), Ok(5));
        assert_eq!(apply_binop(BinOp::Sub, 2, 3, 0), Ok(-1));
        assert_eq!(apply_binop(BinOp::Mul, 6, 7, 0), Ok(42));
        assert_eq!(apply_binop(BinOp::Div, 7, 2, 0), Ok(3));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(apply_binop(BinOp::Div, -7, 2, 0), Ok(-3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            apply_binop(BinOp::Div, 1, 0, 4),
            Err(RuntimeError::DivisionByZero {
                operation: "1 / 0".to_string(),
                node: 4,
            })
        );
    }

    #[test]
    fn test_overflow() {
        let err = apply_binop(BinOp::Mul, i64::MAX, 2, 1).unwrap_err();
        assert!(matches!(err, RuntimeError::IntegerOverflow { node: 1, .. }));
        assert!(apply_binop(BinOp::Div, i64::MIN, -1, 0).is_err());
        assert!(apply_binop(BinOp::Sub, i64::MIN, 1, 0).is_err());
    }
}
