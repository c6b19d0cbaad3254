//! Benchmark collection generation
//!
//! Walks the upper triangle of the digit-count matrix (`a <= b`) and renders
//! the fixed-point then the arbitrary-precision benchmark for every pair.

use crate::digits::{DigitCount, DigitCounts};
use crate::template::{generate_benchmark, BenchmarkSnippet, Operation, Representation};
use std::io::{self, Write};
use std::iter::FusedIterator;

/// Operation wired into the generation loop
pub const GENERATED_OPERATION: Operation = Operation::Add;

/// Number of (a, b) pairs with `a <= b`: 17 * 18 / 2
pub const PAIR_COUNT: usize = 153;

/// Number of snippets in a full collection
pub const BENCHMARK_COUNT: usize = PAIR_COUNT * Representation::ALL.len();

/// Iterator over digit pairs `(a, b)` with `a <= b`, `a` ascending then `b` ascending
#[derive(Debug, Clone)]
pub struct DigitPairs {
    rows: DigitCounts,
    row: Option<(DigitCount, DigitCounts)>,
    remaining: usize,
}

impl DigitPairs {
    pub fn new() -> Self {
        Self {
            rows: DigitCount::all(),
            row: None,
            remaining: PAIR_COUNT,
        }
    }
}

impl Default for DigitPairs {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DigitPairs {
    type Item = (DigitCount, DigitCount);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((a, columns)) = &mut self.row {
                if let Some(b) = columns.next() {
                    self.remaining -= 1;
                    return Some((*a, b));
                }
            }
            let a = self.rows.next()?;
            self.row = Some((a, a.up_to_max()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DigitPairs {}

impl FusedIterator for DigitPairs {}

/// Ordered, write-once sequence of rendered benchmarks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCollection {
    snippets: Vec<BenchmarkSnippet>,
}

impl BenchmarkCollection {
    /// Render every representation of `operation` for each digit pair
    pub fn generate(operation: Operation) -> Self {
        let mut snippets = Vec::with_capacity(BENCHMARK_COUNT);

        for (a, b) in DigitPairs::new() {
            for representation in Representation::ALL {
                let snippet = generate_benchmark(representation, operation, a, b);
                tracing::trace!(method = %snippet.method_name(), "Rendered benchmark");
                snippets.push(snippet);
            }
        }

        tracing::debug!(
            operation = %operation,
            benchmarks = snippets.len(),
            "Generated benchmark collection"
        );

        Self { snippets }
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn snippets(&self) -> &[BenchmarkSnippet] {
        &self.snippets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkSnippet> {
        self.snippets.iter()
    }

    /// Method names in generation order
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.snippets.iter().map(BenchmarkSnippet::method_name)
    }

    /// All snippets concatenated with no separator
    pub fn render(&self) -> String {
        let capacity = self.snippets.iter().map(|s| s.text().len()).sum();
        let mut output = String::with_capacity(capacity);
        for snippet in &self.snippets {
            output.push_str(snippet.text());
        }
        output
    }

    /// Write the rendered collection followed by a final newline
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for snippet in &self.snippets {
            writer.write_all(snippet.text().as_bytes())?;
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl<'a> IntoIterator for &'a BenchmarkCollection {
    type Item = &'a BenchmarkSnippet;
    type IntoIter = std::slice::Iter<'a, BenchmarkSnippet>;

    fn into_iter(self) -> Self::IntoIter {
        self.snippets.iter()
    }
}

/// Generate the full `add` benchmark collection
pub fn generate_all() -> BenchmarkCollection {
    BenchmarkCollection::generate(GENERATED_OPERATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Writer that fails every call with the given error kind
    struct FailingWriter {
        kind: io::ErrorKind,
        writes: usize,
    }

    impl FailingWriter {
        fn new(kind: io::ErrorKind) -> Self {
            Self { kind, writes: 0 }
        }
    }

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::from(self.kind))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(self.kind))
        }
    }

    #[test]
    fn test_digit_pairs_count_and_bounds() {
        let pairs: Vec<(u8, u8)> = DigitPairs::new().map(|(a, b)| (a.get(), b.get())).collect();
        assert_eq!(pairs.len(), PAIR_COUNT);
        assert!(pairs.iter().all(|&(a, b)| a <= b && b <= 16));

        let unique: HashSet<_> = pairs.iter().collect();
        assert_eq!(unique.len(), PAIR_COUNT);
    }

    #[test]
    fn test_digit_pairs_order() {
        let pairs: Vec<(u8, u8)> = DigitPairs::new().map(|(a, b)| (a.get(), b.get())).collect();
        assert_eq!(pairs[0], (0, 0));
        assert_eq!(pairs[1], (0, 1));
        assert_eq!(pairs[16], (0, 16));
        assert_eq!(pairs[17], (1, 1));
        assert_eq!(pairs[PAIR_COUNT - 1], (16, 16));

        let mut expected = Vec::new();
        for a in 0..=16u8 {
            for b in a..=16u8 {
                expected.push((a, b));
            }
        }
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_digit_pairs_exact_size_and_fused() {
        let mut pairs = DigitPairs::new();
        assert_eq!(pairs.len(), PAIR_COUNT);
        pairs.next();
        assert_eq!(pairs.len(), PAIR_COUNT - 1);

        let mut pairs = DigitPairs::new();
        for _ in pairs.by_ref() {}
        assert_eq!(pairs.len(), 0);
        assert!(pairs.next().is_none());
        assert!(pairs.next().is_none());
    }

    #[test]
    fn test_digit_pairs_len_tracks_every_step() {
        let mut pairs = DigitPairs::new();
        let mut yielded = 0;
        while let Some((a, b)) = pairs.next() {
            yielded += 1;
            assert!(a <= b);
            assert_eq!(pairs.len(), PAIR_COUNT - yielded);
        }
        assert_eq!(yielded, PAIR_COUNT);
    }

    #[test]
    fn test_generate_all_has_306_benchmarks() {
        let collection = generate_all();
        assert_eq!(collection.len(), 306);
        assert_eq!(BENCHMARK_COUNT, 306);
        assert!(!collection.is_empty());
    }

    #[test]
    fn test_fixed_point_precedes_arbitrary_precision() {
        let collection = generate_all();
        for pair in collection.snippets().chunks(2) {
            assert_eq!(pair[0].representation(), Representation::FixedPoint);
            assert_eq!(pair[1].representation(), Representation::ArbitraryPrecision);
            assert_eq!(pair[0].digits(), pair[1].digits());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let collection = generate_all();
        let names: HashSet<String> = collection.names().collect();
        assert_eq!(names.len(), BENCHMARK_COUNT);
        assert!(names.contains("decimal64_add_0_0"));
        assert!(names.contains("bigDecimal_add_16_16"));
        assert!(!names.contains("decimal64_add_1_0"));
    }

    #[test]
    fn test_render_concatenates_without_separator() {
        let collection = generate_all();
        let rendered = collection.render();
        let joined: String = collection.iter().map(|s| s.text()).collect();
        assert_eq!(rendered, joined);
        let first = "\n@Benchmark\npublic long decimal64_add_0_0(JmhState s) {\n";
        assert!(rendered.starts_with(first));
        assert!(rendered.ends_with("return a.add(b, MathContext.DECIMAL64);\n}\n"));
    }

    #[test]
    fn test_write_to_appends_final_newline() {
        let collection = generate_all();
        let mut buffer = Vec::new();
        collection.write_to(&mut buffer).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, format!("{}\n", collection.render()));
    }

    #[test]
    fn test_write_to_propagates_broken_pipe() {
        let collection = generate_all();
        let mut writer = FailingWriter::new(io::ErrorKind::BrokenPipe);

        let err = collection.write_to(&mut writer).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // Stops at the first failed write
        assert_eq!(writer.writes, 1);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_all(), generate_all());
        assert_eq!(generate_all().render(), generate_all().render());
    }

    #[test]
    fn test_into_iterator_matches_iter() {
        let collection = generate_all();
        let mut count = 0;
        for snippet in &collection {
            assert_eq!(snippet.operation(), GENERATED_OPERATION);
            count += 1;
        }
        assert_eq!(count, collection.len());
    }
}
