use std::collections::HashMap;

use crate::op::Op;

pub const TIMES: &str = "×";
pub const DIVIDE: &str = "÷";
pub const PLUS: &str = "+";
pub const MINUS: &str = "−";
pub const SQRT: &str = "√";

/// Table of known operations. Filled once on construction, read-only after.
#[derive(Clone, Debug)]
pub struct OpRegistry(HashMap<&'static str, Op>);

impl OpRegistry {
    pub fn new() -> OpRegistry {
        let mut ops = HashMap::new();
        // binary functions get (first popped, second popped), so the
        // non-commutative ones flip to read left to right
        ops.insert(TIMES, Op::BinaryOp(TIMES, |a, b| a * b));
        ops.insert(DIVIDE, Op::BinaryOp(DIVIDE, |a, b| b / a));
        ops.insert(PLUS, Op::BinaryOp(PLUS, |a, b| a + b));
        ops.insert(MINUS, Op::BinaryOp(MINUS, |a, b| b - a));
        ops.insert(SQRT, Op::UnaryOp(SQRT, f64::sqrt));
        OpRegistry(ops)
    }

    pub fn get(&self, symbol: &str) -> Option<Op> {
        self.0.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    /// Known symbols, sorted for stable listings.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut syms = self.0.keys().copied().collect::<Vec<_>>();
        syms.sort_unstable();
        syms
    }
}

impl Default for OpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn apply2(reg: &OpRegistry, sym: &str, first: f64, second: f64) -> f64 {
        match reg.get(sym) {
            Some(Op::BinaryOp(_, f)) => f(first, second),
            other => panic!("{} is not binary: {:?}", sym, other),
        }
    }

    #[test]
    fn known_symbols() {
        let reg = OpRegistry::new();
        assert_eq!(reg.symbols(), vec![PLUS, TIMES, DIVIDE, MINUS, SQRT]);
        assert!(reg.contains("÷"));
        assert!(!reg.contains("/"));
        assert!(!reg.contains("-"));
        assert_eq!(reg.get("foo"), None);
    }

    #[test]
    fn arity_per_symbol() {
        let reg = OpRegistry::new();
        for sym in [TIMES, DIVIDE, PLUS, MINUS] {
            assert_eq!(reg.get(sym).map(|op| op.arity()), Some(2));
        }
        assert_eq!(reg.get(SQRT).map(|op| op.arity()), Some(1));
    }

    #[test]
    fn operand_order() {
        let reg = OpRegistry::new();
        // first popped is the later pushed operand
        assert_eq!(apply2(&reg, DIVIDE, 2.0, 10.0), 5.0);
        assert_eq!(apply2(&reg, MINUS, 4.0, 10.0), 6.0);
        assert_eq!(apply2(&reg, TIMES, 4.0, 10.0), 40.0);
        assert_eq!(apply2(&reg, PLUS, 4.0, 10.0), 14.0);
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        match OpRegistry::new().get(SQRT) {
            Some(Op::UnaryOp(_, f)) => {
                assert_eq!(f(9.0), 3.0);
                assert!(f(-1.0).is_nan());
            }
            other => panic!("√ is not unary: {:?}", other),
        }
    }
}
