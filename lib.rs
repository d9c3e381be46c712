pub mod cli;
pub mod driver;
pub mod sequence;


pub use crate::driver::{format_line, write_terms, Report, Strategy, Width};
pub use crate::sequence::{term, term_in, term_iterative, term_iterative_in, Ordinal, Term};
