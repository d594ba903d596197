//! Boolean evaluation over posting lists.
//!
//! Every operator reads the index through shared slices and builds a new
//! vector, so a result never aliases the index's own postings.

use crate::index::InvertedIndex;
use crate::DocId;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    /// Only the literal upper-case tokens are operators.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }

    fn apply(self, a: &[DocId], b: &[DocId]) -> Vec<DocId> {
        match self {
            Operator::And => intersect(a, b),
            Operator::Or => union(a, b),
        }
    }
}

/// Entries of `a` that also occur in `b`, keeping `a`'s order and repeats.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let members: HashSet<DocId> = b.iter().copied().collect();
    a.iter().copied().filter(|d| members.contains(d)).collect()
}

/// Distinct ids from both lists, ascending.
pub fn union(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    a.iter().chain(b).copied().collect::<BTreeSet<_>>().into_iter().collect()
}

pub fn and_query(index: &InvertedIndex, t1: &str, t2: &str) -> Vec<DocId> {
    intersect(index.postings(t1), index.postings(t2))
}

pub fn or_query(index: &InvertedIndex, t1: &str, t2: &str) -> Vec<DocId> {
    union(index.postings(t1), index.postings(t2))
}

/// Evaluate alternating terms and `AND`/`OR` tokens with two stacks.
///
/// A pending `AND` is reduced only when an `OR` arrives; everything else
/// waits for the final drain, which applies operators last-in first-out.
/// An operator short of operands treats the missing side as empty, and if
/// several operands survive the drain the most recent one is returned.
pub fn mixed_query<S: AsRef<str>>(index: &InvertedIndex, tokens: &[S]) -> Vec<DocId> {
    let mut operands: Vec<Vec<DocId>> = Vec::new();
    let mut operators: Vec<Operator> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match Operator::from_token(token) {
            Some(incoming) => {
                while incoming == Operator::Or && operators.last() == Some(&Operator::And) {
                    if let Some(op) = operators.pop() {
                        reduce(&mut operands, op);
                    }
                }
                operators.push(incoming);
            }
            None => operands.push(index.postings(token).to_vec()),
        }
    }

    while let Some(op) = operators.pop() {
        reduce(&mut operands, op);
    }

    operands.pop().unwrap_or_default()
}

fn reduce(operands: &mut Vec<Vec<DocId>>, op: Operator) {
    let a = operands.pop().unwrap_or_default();
    let b = operands.pop().unwrap_or_default();
    operands.push(op.apply(&a, &b));
}
