//! The prelude

#[doc(inline)]
pub use crate::newline::NewlineMode;
#[doc(inline)]
pub use crate::transpose::{transpose, transpose_bytes, LineIndex, OutBuf};
#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, Error, Infile, Outfile, Result};

#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
