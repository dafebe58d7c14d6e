//! Crate prelude.

// The actual prelude.
pub use crate::{
    func::{compose, heaviside, square, square_successor, successor},
    lesson::{factor_pair, sample_sets, FactorError},
    product::{Pair, ProductSet},
    set::{IntSet, SetError, SetOps},
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    iter::FusedIterator,
    ops::Range,
    str::FromStr,
};
