#![deny(warnings)]

mod numfmt;
mod op;
mod program;
mod registry;

pub use numfmt::NumberFormat;
pub use op::Op;
pub use program::{Program, ProgramError};
pub use registry::OpRegistry;
pub use registry::{DIVIDE, MINUS, PLUS, SQRT, TIMES};

mod evaluator;
pub use evaluator::Evaluator;

#[cfg(test)]
mod program_test;
