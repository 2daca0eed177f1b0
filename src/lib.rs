//! A bit-accurate, width-typed combinational signal algebra.
//!
//! This crate is the core of a hardware description library: an embedded
//! DSL for building structural digital circuits as value-level
//! expressions. It does not simulate, synthesize, or emit netlists —
//! consumers build those on top of the `Comb` trait.
//!
//! Three layers, composed bottom-up:
//!
//! - [`Gates`] — the minimal bit-vector substrate a backend provides:
//!   constants, width, concatenation, selection, naming, bitwise ops.
//! - [`Primitives`] — mux, add/sub, multiply, equality, unsigned
//!   less-than, synthesized from [`Gates`] alone (or overridden natively).
//! - [`Comb`] — the full ~120-operator combinational surface: resizes,
//!   shifts, the multiplexer family, log-depth structural generators,
//!   onehot/gray encodings, and the width-automatic [`typed::Unsigned`]/
//!   [`typed::Signed`] wrappers.
//!
//! Two backends are provided: [`Bits`], a concrete evaluated bit vector,
//! and [`Signal`], a symbolic circuit-graph node.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg_attr(test, macro_use)]
extern crate alloc;

mod bits;
mod comb;
mod constant;
mod error;
mod gates;
mod primitives;
pub mod rand;
mod signal;
pub mod typed;

pub use bits::Bits;
pub use comb::{
    Comb,
    Valid,
};
pub use error::Error;
pub use gates::Gates;
pub use primitives::Primitives;
pub use signal::Signal;
