use std::fmt;

/// One entry of the program stack.
///
/// Operations carry their symbol so the stack can be exported back into
/// program tokens. Binary functions receive their arguments in pop order:
/// the operand nearest the operator first.
#[derive(Clone, Copy)]
pub enum Op {
    Operand(f64),
    UnaryOp(&'static str, fn(f64) -> f64),
    BinaryOp(&'static str, fn(f64, f64) -> f64),
}

impl Op {
    pub fn symbol(&self) -> Option<&'static str> {
        match *self {
            Op::Operand(_) => None,
            Op::UnaryOp(sym, _) | Op::BinaryOp(sym, _) => Some(sym),
        }
    }

    pub fn arity(&self) -> usize {
        match *self {
            Op::Operand(_) => 0,
            Op::UnaryOp(_, _) => 1,
            Op::BinaryOp(_, _) => 2,
        }
    }
}

// fn pointers don't compare meaningfully, symbols are unique per registry
impl PartialEq for Op {
    fn eq(&self, other: &Op) -> bool {
        match (self, other) {
            (Op::Operand(a), Op::Operand(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Op::UnaryOp(a, _), Op::UnaryOp(b, _)) => a == b,
            (Op::BinaryOp(a, _), Op::BinaryOp(b, _)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Op::Operand(x) => write!(f, "Operand({})", x),
            Op::UnaryOp(sym, _) => write!(f, "UnaryOp({})", sym),
            Op::BinaryOp(sym, _) => write!(f, "BinaryOp({})", sym),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Op::Operand(x) => write!(f, "{}", x),
            Op::UnaryOp(sym, _) | Op::BinaryOp(sym, _) => write!(f, "{}", sym),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
