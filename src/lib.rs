//! decimal-bench-gen - JMH benchmark source generator for decimal arithmetic
//!
//! Emits one benchmark method per representation (`Decimal64` fixed-point and
//! `BigDecimal` arbitrary-precision) for every pair of operand digit-lengths
//! `(a, b)` with `0 <= a <= b <= 16`. The output is meant to be redirected into
//! a Java source file consumed by a separate JMH harness.

pub mod cli;
pub mod digits;
pub mod generator;
pub mod template;

pub use digits::{DigitCount, DigitCountError, DigitCounts};
pub use generator::{generate_all, BenchmarkCollection, DigitPairs};
pub use template::{
    generate_arbitrary_precision_benchmark, generate_fixed_point_benchmark, BenchmarkSnippet,
    Operation, Representation,
};
