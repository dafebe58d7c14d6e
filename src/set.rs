//! Finite integer sets [`IntSet`].

use crate::prelude::*;

/// A finite set of integers.
///
/// Membership is stored as a bitmap relative to a base value: bit `i` encodes the
/// integer `start + i`. Memory use is proportional to the span between the smallest and
/// largest element.
///
/// ## Invariants
///
/// These invariants hold for any [`IntSet`]. Code throughout the crate relies on them.
///
/// - If the bitmap is nonempty, its first and last bits are set. In particular, `start`
///   is the least element, and equal sets have equal representations.
/// - An empty bitmap has `start == 0`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct IntSet {
    /// The value encoded by the first bit.
    start: i64,
    /// Membership bitmap; bit `i` encodes `start + i`.
    bits: BitVec,
}

// -------------------- Basic traits -------------------- //

/// Succintly writes a set as stored in memory.
impl Debug for IntSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}; ", self.start)?;
        for bit in self.bits.iter() {
            f.write_char(if *bit { '1' } else { '0' })?;
        }
        f.write_char(']')
    }
}

/// Displays a set in ascending roster notation.
impl Display for IntSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for n in iter {
                write!(f, ", {n}")?;
            }
        }
        f.write_char('}')
    }
}

impl FromIterator<i64> for IntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut elems: SmallVec<i64> = iter.into_iter().collect();
        elems.sort_unstable();

        // Ascending insertion only ever appends to the bitmap.
        let mut set = Self::empty();
        for n in elems {
            set.insert_mut(n);
        }
        set
    }
}

// -------------------- String parsing -------------------- //

/// Error in parsing a set from roster notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError {
    /// Missing or mismatched brackets.
    Brackets,
    /// An element could not be read as an integer.
    Number,
}

impl Display for SetError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::Brackets => "mismatched brackets",
            Self::Number => "invalid element",
        })
    }
}

impl std::error::Error for SetError {}

/// Sets are parsed from roster notation: integers between braces, separated by commas.
/// Whitespace is ignored, and repeated elements are absorbed.
impl FromStr for IntSet {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, SetError> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(SetError::Brackets)?;
        if inner.contains(['{', '}']) {
            return Err(SetError::Brackets);
        }
        if inner.trim().is_empty() {
            return Ok(Self::empty());
        }

        inner
            .split(',')
            .map(|tok| tok.trim().parse().map_err(|_| SetError::Number))
            .collect()
    }
}

// -------------------- Constructions -------------------- //

impl IntSet {
    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: 0,
            bits: BitVec::EMPTY,
        }
    }

    /// Singleton set {n}.
    #[must_use]
    pub fn singleton(n: i64) -> Self {
        Self {
            start: n,
            bits: BitVec::repeat(true, 1),
        }
    }

    /// The set of integers in a half-open range.
    #[must_use]
    pub fn from_range(range: Range<i64>) -> Self {
        if range.is_empty() {
            Self::empty()
        } else {
            Self {
                start: range.start,
                bits: BitVec::repeat(true, (range.end - range.start) as usize),
            }
        }
    }

    /// In-place set insertion x ∪ {n}.
    pub fn insert_mut(&mut self, n: i64) {
        if self.bits.is_empty() {
            self.start = n;
            self.bits.push(true);
        } else if n < self.start {
            // Grow the bitmap at the front, then mark the new least element.
            let pad = (self.start - n) as usize;
            let len = self.bits.len();
            self.bits.resize(len + pad, false);
            self.bits.shift_right(pad);
            self.bits.set(0, true);
            self.start = n;
        } else {
            let i = (n - self.start) as usize;
            if i >= self.bits.len() {
                self.bits.resize(i + 1, false);
            }
            self.bits.set(i, true);
        }
    }

    /// Set insertion x ∪ {n}.
    #[must_use]
    pub fn insert(mut self, n: i64) -> Self {
        self.insert_mut(n);
        self
    }

    /// In-place set specification: keeps the elements satisfying the predicate.
    pub fn select_mut<P: FnMut(i64) -> bool>(&mut self, mut pred: P) {
        let ones: SmallVec<usize> = self.bits.iter_ones().collect();
        for i in ones {
            if !pred(self.start + i as i64) {
                self.bits.set(i, false);
            }
        }
        self.normalize();
    }

    /// Set specification: keeps the elements satisfying the predicate.
    #[must_use]
    pub fn select<P: FnMut(i64) -> bool>(mut self, pred: P) -> Self {
        self.select_mut(pred);
        self
    }

    /// Restores the type invariants after bits have been cleared.
    fn normalize(&mut self) {
        if let (Some(lo), Some(hi)) = (self.bits.first_one(), self.bits.last_one()) {
            self.bits.truncate(hi + 1);
            if lo != 0 {
                self.bits.shift_left(lo);
                self.bits.truncate(hi + 1 - lo);
                self.start += lo as i64;
            }
        } else {
            self.clear();
        }
    }

    /// One past the value encoded by the last bit.
    fn end(&self) -> i64 {
        self.start + self.bits.len() as i64
    }
}

// -------------------- Basic methods -------------------- //

impl IntSet {
    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.start = 0;
        self.bits.clear();
    }

    /// Membership relation n ∈ x.
    #[must_use]
    pub fn contains(&self, n: i64) -> bool {
        match n.checked_sub(self.start) {
            Some(i) if (0..self.bits.len() as i64).contains(&i) => self.bits[i as usize],
            _ => false,
        }
    }

    /// The least element of the set.
    #[must_use]
    pub fn min(&self) -> Option<i64> {
        self.bits.first_one().map(|i| self.start + i as i64)
    }

    /// The greatest element of the set.
    #[must_use]
    pub fn max(&self) -> Option<i64> {
        self.bits.last_one().map(|i| self.start + i as i64)
    }

    /// Iterate over the elements of the set, in increasing order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            start: self.start,
            bits: &self.bits,
        }
    }
}

// -------------------- Operations -------------------- //

impl IntSet {
    /// Union x ∪ y.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }

        let lo = self.start.min(other.start);
        let hi = self.end().max(other.end());
        let mut bits = BitVec::repeat(false, (hi - lo) as usize);
        for n in self.iter().chain(other.iter()) {
            bits.set((n - lo) as usize, true);
        }

        // The least and greatest of the operands' elements keep the result normalized.
        Self { start: lo, bits }
    }

    /// Union over an iterator.
    pub fn union_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::union)
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn inter(self, other: Self) -> Self {
        self.select(|n| other.contains(n))
    }

    /// Left difference x ∖ y.
    #[must_use]
    pub fn diff(self, other: Self) -> Self {
        self.select(|n| !other.contains(n))
    }

    /// Iterates over all subsets of the set.
    ///
    /// A set with n elements has 2ⁿ subsets, so this is only viable for small sets.
    #[must_use]
    pub fn subsets(&self) -> Subsets {
        debug_assert!(
            self.card() < usize::BITS as usize,
            "a set with {} elements has too many subsets to enumerate",
            usize::BITS
        );

        Subsets {
            elems: self.iter().collect(),
            mask: 0,
            done: false,
        }
    }
}

/// The results of the three binary set operations on a pair of sets.
#[derive(Clone, Debug)]
pub struct SetOps {
    /// Union x ∪ y.
    pub union: IntSet,
    /// Left difference x ∖ y.
    pub difference: IntSet,
    /// Intersection x ∩ y.
    pub intersection: IntSet,
}

impl SetOps {
    /// Computes the union, difference, and intersection of two sets.
    #[must_use]
    pub fn new(fst: &IntSet, snd: &IntSet) -> Self {
        Self {
            union: fst.clone().union(snd.clone()),
            difference: fst.clone().diff(snd.clone()),
            intersection: fst.clone().inter(snd.clone()),
        }
    }
}

// -------------------- Relations -------------------- //

impl IntSet {
    /// Subset relation ⊆.
    #[must_use]
    pub fn subset(&self, other: &Self) -> bool {
        self.le(other)
    }

    /// Strict subset relation ⊂.
    #[must_use]
    pub fn ssubset(&self, other: &Self) -> bool {
        self.lt(other)
    }
}

impl PartialOrd for IntSet {
    fn le(&self, other: &Self) -> bool {
        self.iter().all(|n| other.contains(n))
    }

    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    fn lt(&self, other: &Self) -> bool {
        self.card() < other.card() && self.le(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}

// -------------------- Iterators -------------------- //

/// Iterator over the elements of an [`IntSet`], in increasing order.
pub struct Iter<'a> {
    /// The value encoded by the first remaining bit.
    start: i64,
    /// The remaining bits.
    bits: &'a BitSlice,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let i = self.bits.first_one()?;
        let n = self.start + i as i64;
        self.bits = &self.bits[i + 1..];
        self.start = n + 1;
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones();
        (count, Some(count))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<i64> {
        let i = self.bits.last_one()?;
        self.bits = &self.bits[..i];
        Some(self.start + i as i64)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Owned iterator over the elements of an [`IntSet`], in increasing order.
pub struct IntoIter {
    /// The set being consumed.
    set: IntSet,
    /// Index of the next candidate bit.
    idx: usize,
}

impl Iterator for IntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let i = self.set.bits[self.idx..].first_one()? + self.idx;
        self.idx = i + 1;
        Some(self.set.start + i as i64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.set.bits[self.idx..].count_ones();
        (count, Some(count))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl IntoIterator for IntSet {
    type Item = i64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { set: self, idx: 0 }
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the subsets of an [`IntSet`].
///
/// Subsets are enumerated by treating an increasing counter as a membership mask over
/// the elements of the underlying set.
pub struct Subsets {
    /// Elements of the underlying set, in increasing order.
    elems: Vec<i64>,
    /// Membership mask for the next subset.
    mask: usize,
    /// Whether every subset has been yielded.
    done: bool,
}

impl Iterator for Subsets {
    type Item = IntSet;

    fn next(&mut self) -> Option<IntSet> {
        if self.done {
            return None;
        }

        let mask = self.mask;
        let subset = self
            .elems
            .iter()
            .enumerate()
            .filter_map(|(i, &n)| (mask & (1 << i) != 0).then_some(n))
            .collect();

        if self.mask == (1 << self.elems.len()) - 1 {
            self.done = true;
        } else {
            self.mask += 1;
        }
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = if self.done {
            0
        } else {
            (1 << self.elems.len()) - self.mask
        };
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Subsets {}
impl FusedIterator for Subsets {}

// -------------------- Tests -------------------- //
