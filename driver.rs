use std::fmt::Display;
use std::io::{self, Write};

use clap::ValueEnum;
use log::{debug, info, warn};

use crate::sequence::{term_in, term_iterative_in, Ordinal};

/// Which implementation computes the terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Naive recursion.
    Recursive,
    /// Linear loop, same results.
    Iterative,
}

/// Width of the unsigned word the terms wrap in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
    U128,
}

/// A range of ordinals to print, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub from: Ordinal,
    pub to: Ordinal,
    pub strategy: Strategy,
    pub width: Width,
}

impl Default for Report {
    fn default() -> Self {
        Report {
            from: 1,
            to: 10,
            strategy: Strategy::Recursive,
            width: Width::U32,
        }
    }
}

/// Formats a single output line.
pub fn format_line<T: Display>(n: Ordinal, value: T) -> String {
    format!("term({}) = {}", n, value)
}

/// Writes one line per ordinal of `report`, in ascending order.
pub fn write_terms<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    if report.from > report.to {
        warn!(
            "Empty range {}..={}, nothing to print",
            report.from, report.to
        );
        return Ok(());
    }

    info!(
        "Printing terms {}..={} ({:?}, {:?})",
        report.from, report.to, report.strategy, report.width
    );

    match report.width {
        Width::U8 => write_range::<u8, W>(out, report),
        Width::U16 => write_range::<u16, W>(out, report),
        Width::U32 => write_range::<u32, W>(out, report),
        Width::U64 => write_range::<u64, W>(out, report),
        Width::U128 => write_range::<u128, W>(out, report),
    }
}

fn write_range<T, W>(out: &mut W, report: &Report) -> io::Result<()>
where
    T: num_traits::WrappingAdd + num_traits::One + Display,
    W: Write,
{
    let compute: fn(Ordinal) -> T = match report.strategy {
        Strategy::Recursive => term_in::<T>,
        Strategy::Iterative => term_iterative_in::<T>,
    };

    for n in report.from..=report.to {
        let value = compute(n);
        debug!("term {} computed: {}", n, value);
        writeln!(out, "{}", format_line(n, value))?;
    }
    out.flush()
}
