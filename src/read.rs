use crate::error::{Error, ErrorCode};

/// Read-only cursor over a byte slice.
///
/// Both number grammars and the deserializer scan through this type. It never
/// copies or allocates; every digit run it hands out borrows from the input.
pub(crate) struct SliceRead<'a> {
    slice: &'a [u8],
    /// Index of the *next* byte that will be returned by next() or peek().
    index: usize,
}

impl<'a> SliceRead<'a> {
    /// Create a JSON input source to read from a slice of bytes.
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        // `if` is 4% faster than `match` here.
        if self.index < self.slice.len() {
            Some(self.slice[self.index])
        } else {
            None
        }
    }

    /// The byte `ahead` positions after the next one, or NUL past the end.
    #[inline]
    pub fn peek_ahead_or_nul(&self, ahead: usize) -> u8 {
        match self.slice.get(self.index + ahead) {
            Some(&b) => b,
            None => b'\x00',
        }
    }

    #[inline]
    pub fn peek_or_nul(&self) -> u8 {
        self.peek_ahead_or_nul(0)
    }

    #[inline]
    pub fn discard(&mut self) {
        self.index += 1;
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor back to an earlier position.
    #[inline]
    pub fn rewind(&mut self, index: usize) {
        debug_assert!(index <= self.index);
        self.index = index;
    }

    /// The bytes between `start` and the cursor.
    #[inline]
    pub fn slice_since(&self, start: usize) -> &'a [u8] {
        &self.slice[start..self.index]
    }

    /// Consume the maximal run of ASCII digits at the cursor.
    pub fn eat_digits(&mut self) -> &'a [u8] {
        let start = self.index;
        while self.index < self.slice.len() && self.slice[self.index].is_ascii_digit() {
            self.index += 1;
        }
        &self.slice[start..self.index]
    }

    /// Error caused by the byte at the cursor.
    #[cold]
    pub fn peek_error(&self, code: ErrorCode) -> Error {
        Error::syntax(code, self.index)
    }
}
