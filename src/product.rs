//! Cartesian products of [`IntSet`]s.

use crate::prelude::*;

/// An ordered pair (x, y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pair(pub i64, pub i64);

impl Pair {
    /// The first coordinate.
    #[must_use]
    pub const fn fst(self) -> i64 {
        self.0
    }

    /// The second coordinate.
    #[must_use]
    pub const fn snd(self) -> i64 {
        self.1
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The Cartesian product of two sets, as a set of ordered [`Pair`]s.
///
/// ## Invariants
///
/// The pairs are lexicographically ordered and pairwise distinct, so equality and
/// membership queries work on the plain vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoIterator)]
pub struct ProductSet(#[into_iterator(owned, ref)] Vec<Pair>);

impl ProductSet {
    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the product is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership relation (x, y) ∈ s × a.
    #[must_use]
    pub fn contains(&self, pair: Pair) -> bool {
        self.0.binary_search(&pair).is_ok()
    }

    /// The product as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Pair] {
        &self.0
    }

    /// Iterate over the pairs of the product.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.0.iter()
    }
}

/// Displays a product in roster notation.
impl Display for ProductSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for pair in iter {
                write!(f, ", {pair}")?;
            }
        }
        f.write_char('}')
    }
}

impl IntSet {
    /// Cartesian product x × y: the set of all ordered pairs combining an element of
    /// `self` with an element of `other`.
    #[must_use]
    pub fn prod(&self, other: &Self) -> ProductSet {
        let mut pairs = Vec::with_capacity(self.card() * other.card());
        for x in self.iter() {
            for y in other.iter() {
                pairs.push(Pair(x, y));
            }
        }

        // Ascending enumeration over both operands yields lexicographic order.
        ProductSet(pairs)
    }
}
