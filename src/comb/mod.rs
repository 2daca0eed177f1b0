//! `Comb` — the full combinational surface, synthesized from
//! [`crate::Primitives`] alone.
//!
//! Every method here has a free-function implementation in one of this
//! module's submodules; `Comb` itself is a thin blanket trait that gives
//! every [`crate::Primitives`] implementor the complete ~120-operator API
//! with a single `impl<T: Primitives> Comb for T {}`.

mod arith;
mod encode;
mod misc;
mod mux;
mod resize;
mod select;
mod shift;
mod tree;

pub use tree::Valid;

use crate::{
    primitives::Primitives,
    rand::Lcg64,
};

/// The full combinational operator surface.
pub trait Comb: Primitives {
    // --- 4.3.1 Selection / slicing -----------------------------------

    /// `select x i i`.
    fn bit(&self, i: usize) -> Self {
        select::bit(self, i)
    }

    /// The most significant bit.
    fn msb(&self) -> Self {
        select::msb(self)
    }

    /// The least significant bit.
    fn lsb(&self) -> Self {
        select::lsb(self)
    }

    /// All bits but the least significant.
    fn msbs(&self) -> Self {
        select::msbs(self)
    }

    /// All bits but the most significant.
    fn lsbs(&self) -> Self {
        select::lsbs(self)
    }

    /// Drop the bottom `n` bits.
    fn drop_bottom(&self, n: usize) -> Self {
        select::drop_bottom(self, n)
    }

    /// Fallible form of [`Comb::drop_bottom`].
    fn try_drop_bottom(&self, n: usize) -> Result<Self, crate::Error> {
        select::try_drop_bottom(self, n)
    }

    /// Drop the top `n` bits.
    fn drop_top(&self, n: usize) -> Self {
        select::drop_top(self, n)
    }

    /// Fallible form of [`Comb::drop_top`].
    fn try_drop_top(&self, n: usize) -> Result<Self, crate::Error> {
        select::try_drop_top(self, n)
    }

    /// Keep the bottom `n` bits.
    fn sel_bottom(&self, n: usize) -> Self {
        select::sel_bottom(self, n)
    }

    /// Fallible form of [`Comb::sel_bottom`].
    fn try_sel_bottom(&self, n: usize) -> Result<Self, crate::Error> {
        select::try_sel_bottom(self, n)
    }

    /// Keep the top `n` bits.
    fn sel_top(&self, n: usize) -> Self {
        select::sel_top(self, n)
    }

    /// Fallible form of [`Comb::sel_top`].
    fn try_sel_top(&self, n: usize) -> Result<Self, crate::Error> {
        select::try_sel_top(self, n)
    }

    /// Replace bits `[n, n + width(f) - 1]` of `self` with `f`.
    fn insert(&self, f: &Self, n: usize) -> Self {
        select::insert(self, f, n)
    }

    /// Fallible form of [`Comb::insert`].
    fn try_insert(&self, f: &Self, n: usize) -> Result<Self, crate::Error> {
        select::try_insert(self, f, n)
    }

    /// Bit-reversal.
    fn reverse(&self) -> Self {
        select::reverse(self)
    }

    /// `n` concatenated copies of `self`.
    fn repeat(&self, n: usize) -> Self {
        select::repeat(self, n)
    }

    /// Split an even-width signal into two equal halves.
    fn split_in_half(&self) -> (Self, Self) {
        select::split_in_half(self)
    }

    /// Split into `part_width`-wide chunks, LSB-first. When `exact` is
    /// false the final chunk may be narrower.
    fn split(&self, part_width: usize, exact: bool) -> alloc::vec::Vec<Self> {
        select::split(self, part_width, exact)
    }

    // --- 4.3.2 Resize --------------------------------------------------

    /// Zero-extend on grow, low-bit truncate on shrink.
    fn uresize(&self, width: usize) -> Self {
        resize::uresize(self, width)
    }

    /// Sign-extend on grow, low-bit truncate on shrink.
    fn sresize(&self, width: usize) -> Self {
        resize::sresize(self, width)
    }

    /// Zero-extend by exactly one bit.
    fn ue(&self) -> Self {
        resize::uresize(self, self.width() + 1)
    }

    /// Sign-extend by exactly one bit.
    fn se(&self) -> Self {
        resize::sresize(self, self.width() + 1)
    }

    // --- 4.3.3 Relational / logical -------------------------------------

    /// Unsigned less-or-equal.
    fn ule(&self, rhs: &Self) -> Self {
        arith::ule(self, rhs)
    }

    /// Unsigned greater-than.
    fn ugt(&self, rhs: &Self) -> Self {
        arith::ugt(self, rhs)
    }

    /// Unsigned greater-or-equal.
    fn uge(&self, rhs: &Self) -> Self {
        arith::uge(self, rhs)
    }

    /// Bitwise inequality.
    fn ne(&self, rhs: &Self) -> Self {
        arith::ne(self, rhs)
    }

    /// Signed less-than.
    fn slt(&self, rhs: &Self) -> Self {
        arith::slt(self, rhs)
    }

    /// Signed less-or-equal.
    fn sle(&self, rhs: &Self) -> Self {
        arith::sle(self, rhs)
    }

    /// Signed greater-than.
    fn sgt(&self, rhs: &Self) -> Self {
        arith::sgt(self, rhs)
    }

    /// Signed greater-or-equal.
    fn sge(&self, rhs: &Self) -> Self {
        arith::sge(self, rhs)
    }

    /// Logical AND: both sides reduced to a single "is nonzero" bit first.
    fn land(&self, rhs: &Self) -> Self {
        arith::land(self, rhs)
    }

    /// Logical OR: both sides reduced to a single "is nonzero" bit first.
    fn lor(&self, rhs: &Self) -> Self {
        arith::lor(self, rhs)
    }

    /// [`Primitives::add`] with the right-hand side promoted from an
    /// integer to a same-width constant.
    fn add_int(&self, i: i64) -> Self {
        arith::add_int(self, i)
    }

    /// Integer-promoted [`Primitives::sub`].
    fn sub_int(&self, i: i64) -> Self {
        arith::sub_int(self, i)
    }

    /// Integer-promoted [`crate::Gates::and`].
    fn and_int(&self, i: i64) -> Self {
        arith::and_int(self, i)
    }

    /// Integer-promoted [`crate::Gates::or`].
    fn or_int(&self, i: i64) -> Self {
        arith::or_int(self, i)
    }

    /// Integer-promoted [`crate::Gates::xor`].
    fn xor_int(&self, i: i64) -> Self {
        arith::xor_int(self, i)
    }

    /// Integer-promoted [`Primitives::eq`].
    fn eq_int(&self, i: i64) -> Self {
        arith::eq_int(self, i)
    }

    /// Integer-promoted [`Comb::ne`].
    fn ne_int(&self, i: i64) -> Self {
        arith::ne_int(self, i)
    }

    /// Integer-promoted [`Primitives::ult`].
    fn ult_int(&self, i: i64) -> Self {
        arith::ult_int(self, i)
    }

    /// Integer-promoted [`Comb::ule`].
    fn ule_int(&self, i: i64) -> Self {
        arith::ule_int(self, i)
    }

    /// Integer-promoted [`Comb::ugt`].
    fn ugt_int(&self, i: i64) -> Self {
        arith::ugt_int(self, i)
    }

    /// Integer-promoted [`Comb::uge`].
    fn uge_int(&self, i: i64) -> Self {
        arith::uge_int(self, i)
    }

    /// Integer-promoted [`Comb::slt`].
    fn slt_int(&self, i: i64) -> Self {
        arith::slt_int(self, i)
    }

    /// Integer-promoted [`Comb::sle`].
    fn sle_int(&self, i: i64) -> Self {
        arith::sle_int(self, i)
    }

    /// Integer-promoted [`Comb::sgt`].
    fn sgt_int(&self, i: i64) -> Self {
        arith::sgt_int(self, i)
    }

    /// Integer-promoted [`Comb::sge`].
    fn sge_int(&self, i: i64) -> Self {
        arith::sge_int(self, i)
    }

    /// Integer-promoted [`Primitives::umul`].
    fn umul_int(&self, i: i64) -> Self {
        arith::umul_int(self, i)
    }

    /// Integer-promoted [`Primitives::smul`].
    fn smul_int(&self, i: i64) -> Self {
        arith::smul_int(self, i)
    }

    // --- 4.3.4 Shifts ----------------------------------------------------

    /// Logical shift-left by a constant distance.
    fn sll(&self, n: usize) -> Self {
        shift::sll(self, n)
    }

    /// Logical shift-right by a constant distance.
    fn srl(&self, n: usize) -> Self {
        shift::srl(self, n)
    }

    /// Arithmetic shift-right by a constant distance.
    fn sra(&self, n: usize) -> Self {
        shift::sra(self, n)
    }

    /// Variable-distance logical shift-left, via recursive halving.
    fn dsll(&self, distance: &Self) -> Self {
        shift::dsll(self, distance)
    }

    /// Variable-distance logical shift-right, via recursive halving.
    fn dsrl(&self, distance: &Self) -> Self {
        shift::dsrl(self, distance)
    }

    /// Variable-distance arithmetic shift-right, via recursive halving.
    fn dsra(&self, distance: &Self) -> Self {
        shift::dsra(self, distance)
    }

    // --- 4.3.5 Multiplexer family -----------------------------------

    /// `mux c [f; t]`.
    fn mux2(c: &Self, t: &Self, f: &Self) -> Self {
        mux::mux2(c, t, f)
    }

    /// `mux sel [f 0; ...; f (n - 1)]`.
    fn mux_init(sel: &Self, n: usize, f: impl Fn(usize) -> Self) -> Self {
        mux::mux_init(sel, n, f)
    }

    /// Equality-keyed select: first matching literal key wins, else
    /// `default`.
    fn cases(sel: &Self, default: &Self, table: &[(i64, Self)]) -> Self {
        mux::cases(sel, default, table)
    }

    /// Like [`Comb::cases`], but table values (and `default`) are resized
    /// to a common width first.
    fn matches(
        sel: &Self,
        default: Option<&Self>,
        table: &[(i64, Self)],
        resize: impl Fn(&Self, usize) -> Self,
    ) -> Self {
        mux::matches(sel, default, table, resize)
    }

    /// Priority mux: first `(cond, value)` pair whose condition is high,
    /// scanning in list order; `default` otherwise.
    fn pmux(cases: &[(Self, Self)], default: &Self) -> Self {
        mux::pmux(cases, default)
    }

    /// Like [`Comb::pmux`] with no default; caller guarantees at most one
    /// condition is high.
    fn pmuxl(cases: &[(Self, Self)]) -> Self {
        mux::pmuxl(cases)
    }

    /// Onehot select: OR across (condition-broadcast AND value).
    fn pmux1h(cases: &[(Self, Self)]) -> Self {
        mux::pmux1h(cases)
    }

    // --- 4.3.6 Structural generators ----------------------------------

    /// Scanning in list order, the data of the first case whose valid bit
    /// is high (branching factor 2).
    fn priority_select(cases: &[Valid<Self>]) -> Valid<Self> {
        tree::priority_select(2, cases)
    }

    /// [`Comb::priority_select`] with an explicit branching factor.
    fn priority_select_bf(branching_factor: usize, cases: &[Valid<Self>]) -> Valid<Self> {
        tree::priority_select(branching_factor, cases)
    }

    /// [`Comb::priority_select`], returning `default` when nothing matched.
    fn priority_select_with_default(default: &Self, cases: &[Valid<Self>]) -> Self {
        tree::priority_select_with_default(2, default, cases)
    }

    /// [`Comb::priority_select_with_default`] with an explicit branching
    /// factor.
    fn priority_select_with_default_bf(
        branching_factor: usize,
        default: &Self,
        cases: &[Valid<Self>],
    ) -> Self {
        tree::priority_select_with_default(branching_factor, default, cases)
    }

    /// Onehot select (branching factor 2).
    fn onehot_select(cases: &[(Self, Self)]) -> Self {
        tree::onehot_select(2, cases)
    }

    /// [`Comb::onehot_select`] with an explicit branching factor.
    fn onehot_select_bf(branching_factor: usize, cases: &[(Self, Self)]) -> Self {
        tree::onehot_select(branching_factor, cases)
    }

    /// Tree-sum of the individual bits of `self` (branching factor 2).
    fn popcount(&self) -> Self {
        tree::popcount(2, self)
    }

    /// [`Comb::popcount`] with an explicit branching factor.
    fn popcount_bf(&self, branching_factor: usize) -> Self {
        tree::popcount(branching_factor, self)
    }

    /// `popcount(self) == 1`.
    fn is_pow2(&self) -> Self {
        tree::is_pow2(2, self)
    }

    /// Count of consecutive zero bits from the MSB.
    fn leading_zeros(&self) -> Self {
        tree::leading_zeros(2, self)
    }

    /// Count of consecutive one bits from the MSB.
    fn leading_ones(&self) -> Self {
        tree::leading_ones(2, self)
    }

    /// Count of consecutive zero bits from the LSB.
    fn trailing_zeros(&self) -> Self {
        tree::trailing_zeros(2, self)
    }

    /// Count of consecutive one bits from the LSB.
    fn trailing_ones(&self) -> Self {
        tree::trailing_ones(2, self)
    }

    /// Index of the highest set bit; invalid when `self` is zero.
    fn floor_log2(&self) -> Valid<Self> {
        tree::floor_log2(2, self)
    }

    /// `floor_log2(self - 1) + 1`, or 0 when `self == 1`; invalid when
    /// `self == 0`.
    fn ceil_log2(&self) -> Valid<Self> {
        tree::ceil_log2(2, self)
    }

    // --- 4.3.7 Encodings --------------------------------------------

    /// Onehot vector with bit `self` (as an index) set.
    fn binary_to_onehot(&self) -> Self {
        encode::binary_to_onehot(self)
    }

    /// Inverse of [`Comb::binary_to_onehot`].
    fn onehot_to_binary(&self) -> Self {
        encode::onehot_to_binary(self)
    }

    /// `self XOR (self >> 1)`.
    fn binary_to_gray(&self) -> Self {
        encode::binary_to_gray(self)
    }

    /// Inverse of [`Comb::binary_to_gray`].
    fn gray_to_binary(&self) -> Self {
        encode::gray_to_binary(self)
    }

    // --- 4.3.8 Counters and misc --------------------------------------

    /// Increment modulo `max + 1`.
    fn mod_counter(&self, max: i64) -> Self {
        misc::mod_counter(max, self)
    }

    /// `0 - self`.
    fn negate(&self) -> Self {
        misc::negate(self)
    }

    /// A constant of `width` bits drawn from `rng`.
    fn srand(rng: &mut Lcg64, width: usize) -> Self {
        misc::srand(rng, width)
    }
}

impl<T: Primitives> Comb for T {}
