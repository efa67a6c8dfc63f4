//! A compact set of flattened cell indices backed by a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. A board of
//! `dim`×`dim` cells fits as long as `dim * dim` does not exceed the bit width
//! of `T`; the standard 10×10 board uses `u128`.

use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested number of cells exceeds the capacity of `T`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Index is outside `[0, cells)`.
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// Set of cell indices stored as bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T = u128>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    cells: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Empty set able to hold indices `0..cells`.
    pub fn with_cells(cells: usize) -> Result<Self, BitBoardError> {
        if cells > Self::CAPACITY {
            return Err(BitBoardError::SizeTooLarge {
                cells,
                capacity: Self::CAPACITY,
            });
        }
        Ok(BitBoard {
            bits: T::zero(),
            cells,
        })
    }

    /// Number of addressable indices.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Number of indices in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no index is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; out-of-range indices are never members.
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Adds `index`, returning `true` if it was not already present.
    pub fn insert(&mut self, index: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(index)?;
        let fresh = !self.contains(index);
        self.bits = self.bits | (T::one() << index);
        Ok(fresh)
    }

    /// Returns true if the two sets share no index.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Iterates over set indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cells).filter(move |&i| self.contains(i))
    }

    #[inline]
    fn check_bounds(&self, index: usize) -> Result<(), BitBoardError> {
        if index >= self.cells {
            Err(BitBoardError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }
}

impl BitBoard<u128> {
    /// Empty set sized for the standard board.
    pub(crate) fn standard() -> Self {
        let side = BOARD_SIZE as usize;
        BitBoard {
            bits: 0,
            cells: side * side,
        }
    }
}

const _: () = assert!((BOARD_SIZE as usize) * (BOARD_SIZE as usize) <= u128::BITS as usize);

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
            cells: self.cells.min(rhs.cells),
        }
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
            cells: self.cells.max(rhs.cells),
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
