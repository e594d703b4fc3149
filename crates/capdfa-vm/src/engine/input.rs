//! Read access to the subject sequence.

use capdfa_core::{CodeUnit, LATIN1_MAX};

/// A sequence of code units the executor can read by index.
pub trait Input {
    fn len(&self) -> usize;

    /// The unit at `index`. `index` is always below `len()`.
    fn code_unit_at(&self, index: usize) -> CodeUnit;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every unit is at most `0xFF`.
    fn is_compact(&self) -> bool {
        false
    }
}

/// Latin-1 text.
impl Input for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        CodeUnit::from(self[index])
    }

    fn is_compact(&self) -> bool {
        true
    }
}

/// UTF-16 text.
impl Input for [u16] {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        self[index]
    }
}

/// UTF-8 text, read byte by byte.
impl Input for str {
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        CodeUnit::from(self.as_bytes()[index])
    }

    fn is_compact(&self) -> bool {
        true
    }
}

impl Input for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        self.as_slice().code_unit_at(index)
    }

    fn is_compact(&self) -> bool {
        true
    }
}

impl Input for Vec<u16> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        self[index]
    }
}

impl Input for String {
    fn len(&self) -> usize {
        self.as_str().len()
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        self.as_str().code_unit_at(index)
    }

    fn is_compact(&self) -> bool {
        true
    }
}

/// An input with a mask XOR-ed over part of it.
///
/// `mask[k]` applies to the unit at `mask_offset + k`; units outside the
/// mask read through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Masked<'a, I: ?Sized> {
    input: &'a I,
    mask: &'a [CodeUnit],
    mask_offset: usize,
}

impl<'a, I: Input + ?Sized> Masked<'a, I> {
    pub fn new(input: &'a I, mask: &'a [CodeUnit], mask_offset: usize) -> Self {
        Self {
            input,
            mask,
            mask_offset,
        }
    }
}

impl<I: Input + ?Sized> Input for Masked<'_, I> {
    fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    fn code_unit_at(&self, index: usize) -> CodeUnit {
        let c = self.input.code_unit_at(index);
        match index
            .checked_sub(self.mask_offset)
            .and_then(|k| self.mask.get(k))
        {
            Some(&m) => c ^ m,
            None => c,
        }
    }

    fn is_compact(&self) -> bool {
        self.input.is_compact() && self.mask.iter().all(|&m| m <= LATIN1_MAX)
    }
}
