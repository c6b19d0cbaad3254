//! Benchmark method templates
//!
//! Renders one JMH benchmark method per (representation, operation, digit pair).
//! The rendered body reads two operands from the shared `JmhState` sample
//! pools, advancing `s.idx` after each read and wrapping it to zero at
//! `s.N - 2`. That cursor logic only exists in the emitted text.

use crate::digits::DigitCount;
use std::fmt;

/// Decimal representation under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// 64-bit encoded decimal (`Decimal64`, passed around as `long`)
    FixedPoint,
    /// `java.math.BigDecimal` baseline
    ArbitraryPrecision,
}

impl Representation {
    /// Generation order within a digit pair
    pub const ALL: [Representation; 2] = [
        Representation::FixedPoint,
        Representation::ArbitraryPrecision,
    ];

    /// Prefix of the generated method name
    pub fn method_prefix(self) -> &'static str {
        match self {
            Representation::FixedPoint => "decimal64",
            Representation::ArbitraryPrecision => "bigDecimal",
        }
    }

    /// Name of the sample pool field on `JmhState`
    pub fn sample_pool(self) -> &'static str {
        match self {
            Representation::FixedPoint => "decimalSamples",
            Representation::ArbitraryPrecision => "bigDecimalSamples",
        }
    }
}

/// Arithmetic operation under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
}

impl Operation {
    /// Method name shared by `Decimal64` and `BigDecimal`
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rendered benchmark method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSnippet {
    representation: Representation,
    operation: Operation,
    a_digits: DigitCount,
    b_digits: DigitCount,
    text: String,
}

impl BenchmarkSnippet {
    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Digit counts of the (a, b) operands
    pub fn digits(&self) -> (DigitCount, DigitCount) {
        (self.a_digits, self.b_digits)
    }

    /// Declared method name: `<repr>_<operation>_<a>_<b>`
    pub fn method_name(&self) -> String {
        method_name(
            self.representation,
            self.operation,
            self.a_digits,
            self.b_digits,
        )
    }

    /// Rendered source text, including its leading and trailing newline
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for BenchmarkSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn method_name(
    representation: Representation,
    operation: Operation,
    a_digits: DigitCount,
    b_digits: DigitCount,
) -> String {
    format!(
        "{}_{}_{}_{}",
        representation.method_prefix(),
        operation,
        a_digits,
        b_digits
    )
}

/// Render the `Decimal64` benchmark for one digit pair
pub fn generate_fixed_point_benchmark(
    operation: Operation,
    a_digits: DigitCount,
    b_digits: DigitCount,
) -> BenchmarkSnippet {
    let name = method_name(Representation::FixedPoint, operation, a_digits, b_digits);
    let pool = Representation::FixedPoint.sample_pool();
    let text = format!(
        "\n\
@Benchmark\n\
public long {name}(JmhState s) {{\n    \
@Decimal long a = s.{pool}[{a_digits}][s.idx++];\n    \
@Decimal long b = s.{pool}[{b_digits}][s.idx++];\n    \
\n    \
if (s.idx == (s.N - 2)) s.idx = 0;\n    \
\n    \
return Decimal64.{operation}(a, b);\n\
}}\n"
    );

    BenchmarkSnippet {
        representation: Representation::FixedPoint,
        operation,
        a_digits,
        b_digits,
        text,
    }
}

/// Render the `BigDecimal` benchmark for one digit pair
pub fn generate_arbitrary_precision_benchmark(
    operation: Operation,
    a_digits: DigitCount,
    b_digits: DigitCount,
) -> BenchmarkSnippet {
    let name = method_name(
        Representation::ArbitraryPrecision,
        operation,
        a_digits,
        b_digits,
    );
    let pool = Representation::ArbitraryPrecision.sample_pool();
    let text = format!(
        "\n\
@Benchmark\n\
public BigDecimal {name}(JmhState s) {{\n    \
BigDecimal a = s.{pool}[{a_digits}][s.idx++];\n    \
BigDecimal b = s.{pool}[{b_digits}][s.idx++];\n    \
\n    \
if (s.idx == (s.N - 2)) s.idx = 0;\n\
\n    \
return a.{operation}(b, MathContext.DECIMAL64);\n\
}}\n"
    );

    BenchmarkSnippet {
        representation: Representation::ArbitraryPrecision,
        operation,
        a_digits,
        b_digits,
        text,
    }
}

/// Render the benchmark for `representation`
pub fn generate_benchmark(
    representation: Representation,
    operation: Operation,
    a_digits: DigitCount,
    b_digits: DigitCount,
) -> BenchmarkSnippet {
    match representation {
        Representation::FixedPoint => generate_fixed_point_benchmark(operation, a_digits, b_digits),
        Representation::ArbitraryPrecision => {
            generate_arbitrary_precision_benchmark(operation, a_digits, b_digits)
        }
    }
}
