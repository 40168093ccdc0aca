use tracing::{debug, trace};

use crate::numfmt::NumberFormat;
use crate::op::Op;
use crate::program::{Program, ProgramError};
use crate::registry::OpRegistry;

// An operation still waiting on its operands while walking down the stack.
// The usize is the length of the stack slice the operation was popped from,
// which is the remainder reported if its operands never show up.
enum Pending {
    Unary(fn(f64) -> f64, usize),
    BinaryFirst(fn(f64, f64) -> f64, usize),
    BinarySecond(fn(f64, f64) -> f64, f64, usize),
}

/// Consume `ops` from the end as a postfix expression.
///
/// Returns the value of the top expression and the length of the prefix of
/// `ops` that it did not consume. An operation missing operands yields no
/// value and leaves itself, and everything under it, in the remainder.
fn evaluate_from(ops: &[Op]) -> (Option<f64>, usize) {
    let mut pending = Vec::new();
    let mut end = ops.len();
    loop {
        // walk down until an operand (or the bottom) settles a value
        let (mut result, mut rest) = loop {
            if end == 0 {
                break (None, 0);
            }
            match ops[end - 1] {
                Op::Operand(x) => break (Some(x), end - 1),
                Op::UnaryOp(_, f) => pending.push(Pending::Unary(f, end)),
                Op::BinaryOp(_, f) => pending.push(Pending::BinaryFirst(f, end)),
            }
            end -= 1;
        };
        // feed it back up through the waiting operations
        loop {
            match (pending.pop(), result) {
                (None, _) => return (result, rest),
                (Some(Pending::Unary(f, _)), Some(x)) => result = Some(f(x)),
                (Some(Pending::BinaryFirst(f, at)), Some(x)) => {
                    pending.push(Pending::BinarySecond(f, x, at));
                    end = rest;
                    break;
                }
                (Some(Pending::BinarySecond(f, x, _)), Some(y)) => result = Some(f(x, y)),
                (Some(Pending::Unary(_, at)), None)
                | (Some(Pending::BinaryFirst(_, at)), None)
                | (Some(Pending::BinarySecond(_, _, at)), None) => rest = at,
            }
        }
    }
}

fn stack_text(ops: &[Op]) -> String {
    let tokens = ops.iter().map(|op| op.to_string()).collect::<Vec<_>>();
    format!("[{}]", tokens.join(", "))
}

/// The calculator brain: a program stack of operands and operations,
/// evaluated as postfix from its most recent entry.
#[derive(Clone, Debug)]
pub struct Evaluator {
    ops: Vec<Op>,
    known_ops: OpRegistry,
    format: NumberFormat,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Self::with_format(NumberFormat::new())
    }

    pub fn with_format(format: NumberFormat) -> Evaluator {
        Evaluator { ops: Vec::new(), known_ops: OpRegistry::new(), format }
    }

    pub fn push_operand(&mut self, operand: f64) -> Option<f64> {
        self.ops.push(Op::Operand(operand));
        self.evaluate()
    }

    /// Unknown symbols are ignored, the current result is returned as is.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        if let Some(op) = self.known_ops.get(symbol) {
            self.ops.push(op);
        }
        self.evaluate()
    }

    pub fn evaluate(&self) -> Option<f64> {
        let (result, remainder) = self.evaluate_with_remainder();
        debug!(
            "{} = {:?} with {} left over",
            stack_text(&self.ops),
            result,
            stack_text(remainder)
        );
        result
    }

    /// Evaluate and also return the bottom entries the result didn't use.
    pub fn evaluate_with_remainder(&self) -> (Option<f64>, &[Op]) {
        let (result, rest) = evaluate_from(&self.ops);
        (result, &self.ops[..rest])
    }

    pub fn program(&self) -> Program {
        Program(
            self.ops
                .iter()
                .map(|op| match *op {
                    Op::Operand(x) => self.format.render(x),
                    Op::UnaryOp(sym, _) | Op::BinaryOp(sym, _) => sym.to_string(),
                })
                .collect(),
        )
    }

    fn parse_token(&self, token: &str) -> Option<Op> {
        self.known_ops
            .get(token)
            .or_else(|| self.format.parse(token).map(Op::Operand))
    }

    /// Replace the whole stack with `program`. Tokens that are neither a
    /// known symbol nor a number are dropped.
    pub fn set_program(&mut self, program: &Program) {
        let mut ops = Vec::with_capacity(program.len());
        for token in program.tokens() {
            match self.parse_token(token) {
                Some(op) => ops.push(op),
                None => trace!("dropping program token {:?}", token),
            }
        }
        self.ops = ops;
    }

    /// Like `set_program` but refuses programs with unrecognized tokens,
    /// leaving the current stack untouched.
    pub fn load_program(&mut self, program: &Program) -> Result<(), ProgramError> {
        let mut ops = Vec::with_capacity(program.len());
        for (position, token) in program.tokens().iter().enumerate() {
            match self.parse_token(token) {
                Some(op) => ops.push(op),
                None => {
                    return Err(ProgramError::BadToken { position, token: token.clone() })
                }
            }
        }
        self.ops = ops;
        Ok(())
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn registry(&self) -> &OpRegistry {
        &self.known_ops
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
