//! `Signal` — the symbolic circuit-graph backend.
//!
//! A `Signal` is a reference-counted DAG node (`Rc<SignalNode>`); building
//! an expression allocates a node that borrows its operands by `Rc` clone,
//! so common subexpressions are shared rather than duplicated. Every node
//! is tagged with a process-local, monotonically increasing id, allocated
//! from an atomic counter — safe to construct from multiple threads
//! without locking, per the concurrency model.
//!
//! Only constant-folded leaves (`Op::Const`) support integer/string
//! readback; any other node fails `to_u64_checked`/`to_sint64_checked`/
//! `to_bstr_checked` with `None`, matching "`to_int` is defined only on
//! constants; non-constants fail".

use crate::gates::Gates;
use alloc::{
    rc::Rc,
    string::String,
    vec::Vec,
};
use core::sync::atomic::{
    AtomicU64,
    Ordering,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug)]
enum Op {
    Const(Vec<bool>),
    Concat(Vec<Signal>),
    Select { input: Signal, hi: usize, lo: usize },
    And(Signal, Signal),
    Or(Signal, Signal),
    Xor(Signal, Signal),
    Not(Signal),
}

impl PartialEq for Op {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Op::Const(a), Op::Const(b)) => a == b,
            (Op::Concat(a), Op::Concat(b)) => a == b,
            (
                Op::Select { input: i1, hi: h1, lo: l1 },
                Op::Select { input: i2, hi: h2, lo: l2 },
            ) => i1 == i2 && h1 == h2 && l1 == l2,
            (Op::And(a1, b1), Op::And(a2, b2)) => a1 == a2 && b1 == b2,
            (Op::Or(a1, b1), Op::Or(a2, b2)) => a1 == a2 && b1 == b2,
            (Op::Xor(a1, b1), Op::Xor(a2, b2)) => a1 == a2 && b1 == b2,
            (Op::Not(a), Op::Not(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug)]
struct SignalNode {
    id: u64,
    width: usize,
    op: Op,
    names: Vec<String>,
}

/// A symbolic, structurally-shared circuit-graph node.
#[derive(Clone, Debug)]
pub struct Signal(Rc<SignalNode>);

impl Signal {
    fn new(op: Op, width: usize) -> Self {
        Self(Rc::new(SignalNode {
            id: next_id(),
            width,
            op,
            names: Vec::new(),
        }))
    }

    /// The process-local node id this signal was allocated with. Monotonic
    /// across a run, not guaranteed contiguous.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Names attached via [`Gates::named`], most recent last.
    pub fn names(&self) -> &[String] {
        &self.0.names
    }

    /// True iff this node is a constant leaf (`to_*` readback succeeds).
    pub fn is_constant(&self) -> bool {
        matches!(self.0.op, Op::Const(_))
    }
}

impl PartialEq for Signal {
    /// Structural (value) equality: two signals are equal if they carry
    /// the same width and the same operation tree, irrespective of node
    /// id or attached names.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || (self.0.width == other.0.width && self.0.op == other.0.op)
    }
}

impl Gates for Signal {
    fn empty() -> Self {
        Self::new(Op::Const(Vec::new()), 0)
    }

    fn width(&self) -> usize {
        self.0.width
    }

    fn from_bool_vec(bits: Vec<bool>) -> Self {
        let width = bits.len();
        Self::new(Op::Const(bits), width)
    }

    fn concat_raw(parts: &[Self]) -> Self {
        let width = parts.iter().map(Gates::width).sum();
        Self::new(Op::Concat(parts.to_vec()), width)
    }

    fn select_raw(&self, hi: usize, lo: usize) -> Self {
        let width = hi - lo + 1;
        Self::new(
            Op::Select {
                input: self.clone(),
                hi,
                lo,
            },
            width,
        )
    }

    fn named_raw(&self, name: &str) -> Self {
        let mut names = self.0.names.clone();
        names.push(name.into());
        Self(Rc::new(SignalNode {
            id: next_id(),
            width: self.0.width,
            op: clone_op(&self.0.op),
            names,
        }))
    }

    fn and_raw(&self, rhs: &Self) -> Self {
        Self::new(Op::And(self.clone(), rhs.clone()), self.width())
    }

    fn or_raw(&self, rhs: &Self) -> Self {
        Self::new(Op::Or(self.clone(), rhs.clone()), self.width())
    }

    fn xor_raw(&self, rhs: &Self) -> Self {
        Self::new(Op::Xor(self.clone(), rhs.clone()), self.width())
    }

    fn not_raw(&self) -> Self {
        Self::new(Op::Not(self.clone()), self.width())
    }

    fn to_u64_checked(&self) -> Option<u64> {
        match &self.0.op {
            Op::Const(bits) => {
                Some(bits.iter().fold(0u64, |acc, &b| acc.wrapping_shl(1).wrapping_add(b as u64)))
            }
            _ => None,
        }
    }

    fn to_sint64_checked(&self) -> Option<i64> {
        let bits = match &self.0.op {
            Op::Const(bits) => bits,
            _ => return None,
        };
        let w = bits.len();
        if w == 0 {
            return Some(0);
        }
        let magnitude = self.to_u64_checked()?;
        if w >= 64 {
            return Some(magnitude as i64);
        }
        let sign_bit = 1u64 << (w - 1);
        Some(if magnitude & sign_bit != 0 {
            (magnitude as i64) - (1i64 << w)
        } else {
            magnitude as i64
        })
    }

    fn to_bstr_checked(&self) -> Option<String> {
        match &self.0.op {
            Op::Const(bits) => Some(bits.iter().map(|&b| if b { '1' } else { '0' }).collect()),
            _ => None,
        }
    }
}

fn clone_op(op: &Op) -> Op {
    match op {
        Op::Const(bits) => Op::Const(bits.clone()),
        Op::Concat(parts) => Op::Concat(parts.clone()),
        Op::Select { input, hi, lo } => Op::Select {
            input: input.clone(),
            hi: *hi,
            lo: *lo,
        },
        Op::And(a, b) => Op::And(a.clone(), b.clone()),
        Op::Or(a, b) => Op::Or(a.clone(), b.clone()),
        Op::Xor(a, b) => Op::Xor(a.clone(), b.clone()),
        Op::Not(a) => Op::Not(a.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Primitives;

    #[test]
    fn ids_are_monotonic_and_distinct() {
        let a = Signal::const_str("101");
        let b = Signal::const_str("01");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn non_constant_conversions_fail() {
        let a = Signal::const_str("10");
        let b = Signal::const_str("01");
        let sum = a.add(&b);
        assert!(!sum.is_constant());
        assert!(sum.try_to_int64().is_err());
    }

    #[test]
    fn constant_conversions_succeed() {
        let c = Signal::const_str("1011");
        assert_eq!(c.to_int64(), 0b1011);
        assert_eq!(c.to_bstr(), "1011");
    }

    #[test]
    fn naming_preserves_value_equality() {
        let a = Signal::const_str("101");
        let named = a.named("foo");
        assert_eq!(named.width(), a.width());
        assert_eq!(named, a);
        assert_eq!(named.names(), ["foo"]);
    }

    #[test]
    fn constant_signal_exposes_bits_and_bit_array_conversions() {
        use crate::gates::Gates;
        let x = Signal::const_str("1011");
        assert_eq!(x.to_bits(), alloc::vec![true, false, true, true]);
        assert_eq!(x.to_bit_array(), alloc::vec![true, true, false, true]);
        assert!(x.add(&Signal::const_str("0001")).try_to_bits().is_err());
    }

    #[test]
    fn structural_equality_ignores_identity() {
        let a = Signal::const_str("101").and(&Signal::const_str("111"));
        let b = Signal::const_str("101").and(&Signal::const_str("111"));
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
    }
}
