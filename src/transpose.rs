//! Transpose the rows and columns of a file
//!
//! The file is materialized in memory, a line start index is built over it,
//! and the output is accumulated by walking the input column-major : outer
//! loop over columns, inner loop over lines. Trailing blanks in each output
//! line are dropped; blanks in the middle are kept, one space per position.

use crate::err;
use crate::newline::NewlineMode;
use crate::util::{get_reader, get_writer, Error, Result};
use std::io::{Read, Write};

/// Output capacity is taken in batches of this many bytes.
const BATCH: usize = 64;

/// Byte offsets of line starts.
///
/// Slot 0 is always zero, the start of the first line. Slot k, for k >= 1,
/// holds the offset of the k-th line boundary itself, not of the byte after
/// it; reads therefore skip the boundary's width before indexing into a line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
    mode: NewlineMode,
}

impl LineIndex {
    /// Scan `data` and record where every line begins.
    /// Two passes, so the index is allocated exactly once.
    #[must_use]
    pub fn new(data: &[u8], mode: NewlineMode) -> Self {
        let count = match mode {
            NewlineMode::Lf => memchr::memchr_iter(b'\n', data).count() + 1,
            _ => {
                let mut n = 1;
                for i in 0..data.len() {
                    if mode.boundary_width(data, i) != 0 {
                        n += 1;
                    }
                }
                n
            }
        };
        let mut starts = Vec::with_capacity(count);
        starts.push(0);
        for i in 0..data.len() {
            if mode.boundary_width(data, i) != 0 {
                starts.push(i);
            }
        }
        debug_assert_eq!(starts.len(), count);
        Self { starts, mode }
    }

    /// number of lines, counting the one before the first boundary
    #[must_use]
    pub fn lines(&self) -> usize {
        self.starts.len()
    }

    /// The byte at column `x` of line `y`, or None if line `y` ends before
    /// column `x`, or there is no line `y`. The boundary width at the stored
    /// offset is skipped uniformly, line 0 included.
    #[must_use]
    pub fn sample(&self, data: &[u8], x: usize, y: usize) -> Option<u8> {
        if y >= self.starts.len() {
            return None;
        }
        let pos = self.starts[y] + self.mode.boundary_width(data, self.starts[y]) + x;
        if y + 1 < self.starts.len() && pos >= self.starts[y + 1] {
            return None;
        }
        if pos >= data.len() {
            return None;
        }
        Some(data[pos])
    }

    /// Content length of the longest line, terminator excluded.
    /// Only pairs of consecutive index entries are measured, so the
    /// final line never contributes. Historical behavior, kept.
    #[must_use]
    pub fn longest(&self, data: &[u8]) -> usize {
        let mut longest = 0;
        for i in 0..self.starts.len().saturating_sub(1) {
            let skip = self.mode.boundary_width(data, self.starts[i]);
            let len = self.starts[i + 1].saturating_sub(self.starts[i] + skip);
            if len > longest {
                longest = len;
            }
        }
        longest
    }

    #[cfg(test)]
    fn starts(&self) -> &[usize] {
        &self.starts
    }
}

/// Append-only output accumulator.
/// Capacity is reserved a whole batch at a time, whenever the length
/// crosses a batch boundary.
#[derive(Debug, Default)]
pub struct OutBuf {
    data: Vec<u8>,
}

impl OutBuf {
    /// an empty buffer, no capacity yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// append one byte
    pub fn push(&mut self, c: u8) {
        if self.data.len() % BATCH == 0 {
            self.data.reserve(BATCH);
        }
        self.data.push(c);
    }
    /// bytes written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// is the buffer empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// current capacity in bytes
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
    /// give up the accumulated bytes
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// One full row/column swap of `data`.
///
/// Samples that are missing, space or tab are held as pending blanks;
/// they become spaces if a visible byte follows in the same output line,
/// and vanish if the line ends first. A NUL byte is data, not a blank.
#[must_use]
pub fn transpose_bytes(data: &[u8], mode: NewlineMode) -> Vec<u8> {
    let index = LineIndex::new(data, mode);
    let longest = index.longest(data);
    let mut out = OutBuf::new();
    for x in 0..longest {
        let mut pending = 0; // blanks owed before the next visible byte
        for y in 0..index.lines() {
            match index.sample(data, x, y) {
                None | Some(b' ') | Some(b'\t') => pending += 1,
                Some(c) => {
                    for _ in 0..pending {
                        out.push(b' ');
                    }
                    pending = 0;
                    out.push(c);
                }
            }
        }
        for c in mode.terminator() {
            out.push(*c);
        }
    }
    out.into_vec()
}

/// Transpose `file_in` into `file_out`.
///
/// The whole input is read up front; the output file is not opened until
/// the full result has been accumulated, so a failed conversion never
/// leaves a partial output behind.
pub fn transpose(file_in: &str, file_out: &str, mode: NewlineMode) -> Result<()> {
    let mut data = Vec::new();
    {
        let mut f = get_reader(file_in)?;
        f.read_to_end(&mut data)?;
    }
    if data.is_empty() {
        return err!("could not read {} : no data", file_in);
    }
    let out = transpose_bytes(&data, mode);
    let mut w = get_writer(file_out)?;
    w.write_all(&out)?;
    w.flush()?;
    Ok(())
}
