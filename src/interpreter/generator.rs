use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{error::GeneratorError, interpreter::evaluator::unary::SIMPLIFY};

/// Operators the generator picks from, uniformly.
pub const OPERATORS: [&str; 3] = ["+", "-", "*"];

/// Shape of the generated formulas.
///
/// With a nesting probability `p` every operand independently becomes a
/// nested expression with probability `p`. For `p < 0.5` the expected number
/// of nested operands per expression is below one, so trees stay small; the
/// depth cap bounds them regardless of `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Smallest literal, inclusive.
    pub literal_min:         i64,
    /// Largest literal, inclusive.
    pub literal_max:         i64,
    /// Probability that an operand is a nested expression.
    pub nesting_probability: f64,
    /// Maximum number of nested operator applications below `simplify`.
    pub max_depth:           usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { literal_min:         -10,
               literal_max:         9,
               nesting_probability: 0.25,
               max_depth:           8, }
    }
}

impl GeneratorConfig {
    /// Checks that the configuration describes a usable distribution.
    ///
    /// # Errors
    /// - `EmptyLiteralRange` if `literal_min > literal_max`.
    /// - `InvalidNestingProbability` if the probability is NaN or outside
    ///   `[0, 1]`.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.literal_min > self.literal_max {
            return Err(GeneratorError::EmptyLiteralRange { min: self.literal_min,
                                                           max: self.literal_max, });
        }
        if !(0.0..=1.0).contains(&self.nesting_probability) {
            return Err(GeneratorError::InvalidNestingProbability { probability:
                                                                       self.nesting_probability, });
        }
        Ok(())
    }
}

/// Produces random formulas that the evaluation pipeline accepts.
///
/// The generator never consults the tokenizer or parser; it only emits text
/// in the shape `(simplify (<op> <operand> <operand>))`, where every operand
/// is either a literal or another parenthesized expression. The random source
/// is owned by the generator and advanced on every operator and literal
/// choice.
pub struct Generator<R: Rng> {
    rng:    R,
    config: GeneratorConfig,
}

impl Generator<StdRng> {
    /// Creates a generator whose output is fully determined by `seed`.
    ///
    /// # Errors
    /// Returns a `GeneratorError` if the configuration is invalid.
    pub fn seeded(seed: u64, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::new(StdRng::seed_from_u64(seed), config)
    }

    /// Creates a generator seeded from the operating system.
    ///
    /// # Errors
    /// Returns a `GeneratorError` if the configuration is invalid.
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::new(StdRng::from_entropy(), config)
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing from `rng`.
    ///
    /// # Errors
    /// Returns a `GeneratorError` if the configuration is invalid.
    pub fn new(rng: R, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Generates one formula, without a trailing newline.
    ///
    /// # Example
    /// ```
    /// use smtcalc::interpreter::generator::{Generator, GeneratorConfig};
    ///
    /// let mut generator = Generator::seeded(7, GeneratorConfig::default()).unwrap();
    /// let formula = generator.generate();
    /// assert!(formula.starts_with("(simplify ("));
    /// assert!(formula.ends_with("))"));
    /// ```
    pub fn generate(&mut self) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(SIMPLIFY);
        out.push(' ');
        self.write_expression(&mut out, 1);
        out.push(')');
        out
    }

    /// Generates `count` independent formulas, one per line.
    ///
    /// Every formula, including the last, is followed by `\n`.
    ///
    /// # Example
    /// ```
    /// use smtcalc::interpreter::generator::{Generator, GeneratorConfig};
    ///
    /// let mut generator = Generator::seeded(1, GeneratorConfig::default()).unwrap();
    /// let batch = generator.generate_many(10);
    /// assert_eq!(batch.lines().count(), 10);
    /// assert!(batch.ends_with('\n'));
    /// ```
    pub fn generate_many(&mut self, count: usize) -> String {
        let mut out = String::new();
        for _ in 0..count {
            out.push_str(&self.generate());
            out.push('\n');
        }
        out
    }

    /// Appends one parenthesized operator application at nesting `depth`.
    fn write_expression(&mut self, out: &mut String, depth: usize) {
        let operator = OPERATORS[self.rng.gen_range(0..OPERATORS.len())];
        out.push('(');
        out.push_str(operator);

        for _ in 0..2 {
            out.push(' ');
            if depth < self.config.max_depth && self.rng.gen_bool(self.config.nesting_probability) {
                self.write_expression(out, depth + 1);
            } else {
                let literal = self.rng
                                  .gen_range(self.config.literal_min..=self.config.literal_max);
                out.push_str(&literal.to_string());
            }
        }

        out.push(')');
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = String;

    /// Yields an endless stream of formulas.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
