//! The command line tool `tpose` swaps the rows and columns of text files,
//! so that the file read column-by-column becomes the new lines.
//! It is hoped that the associated library will be useful for third party tools.

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]

pub mod newline;
pub mod prelude;
pub mod transpose;
pub mod util;

pub use crate::util::{Error, Result};
