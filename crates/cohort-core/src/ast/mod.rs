//! Rule expression AST

pub mod expression;
pub mod operator;

pub use expression::{ConditionLeaf, RuleExpression};
pub use operator::{op, Operator};
