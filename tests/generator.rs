use rand::{SeedableRng, rngs::StdRng};
use smtcalc::{
    error::GeneratorError,
    interpreter::{
        evaluator::core::Context,
        generator::{Generator, GeneratorConfig},
        lexer::{TokenKind, tokenize},
        parser::parse,
    },
    solve_line, solve_source,
};

fn seeded(seed: u64) -> Generator<StdRng> {
    Generator::seeded(seed, GeneratorConfig::default()).unwrap()
}

#[test]
fn generated_formulas_always_evaluate() {
    let context = Context::new();
    let mut generator = seeded(2024);

    for _ in 0..500 {
        let formula = generator.generate();
        match solve_line(&formula, &context) {
            Ok(Some(_)) => {},
            other => panic!("Generated formula {formula:?} did not evaluate: {other:?}"),
        }
    }
}

#[test]
fn generated_batch_is_one_formula_per_line() {
    let batch = seeded(99).generate_many(25);
    assert_eq!(batch.lines().count(), 25);
    assert!(batch.ends_with('\n'));

    let outcomes = solve_source(&batch, &Context::new());
    assert_eq!(outcomes.len(), 25);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
}

#[test]
fn empty_batch_is_empty() {
    assert!(seeded(5).generate_many(0).is_empty());
}

#[test]
fn same_seed_gives_same_formulas() {
    assert_eq!(seeded(42).generate_many(20), seeded(42).generate_many(20));

    let from_rng = Generator::new(StdRng::seed_from_u64(42), GeneratorConfig::default()).unwrap()
                                                                                        .generate_many(20);
    assert_eq!(from_rng, seeded(42).generate_many(20));
}

#[test]
fn formulas_are_wrapped_in_simplify() {
    for formula in seeded(3).take(50) {
        assert!(formula.starts_with("(simplify ("), "{formula}");
        assert!(formula.ends_with("))"), "{formula}");
    }
}

#[test]
fn literals_stay_in_configured_range() {
    let config = GeneratorConfig { literal_min: -3,
                                   literal_max: 4,
                                   ..GeneratorConfig::default() };
    let mut generator = Generator::seeded(11, config).unwrap();

    for formula in generator.by_ref().take(200) {
        for token in tokenize(&formula).iter().filter(|t| t.kind == TokenKind::Number) {
            let value: i64 = token.text.parse().unwrap();
            assert!((-3..=4).contains(&value), "literal {value} out of range in {formula}");
        }
    }
}

#[test]
fn operators_are_all_used() {
    let batch = seeded(8).generate_many(100);
    let tokens = tokenize(&batch);
    for op in ["+", "-", "*"] {
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Operator && t.text == op),
                "operator {op} never generated");
    }
}

#[test]
fn depth_cap_bounds_nesting() {
    let config = GeneratorConfig { nesting_probability: 1.0,
                                   max_depth: 3,
                                   ..GeneratorConfig::default() };
    let mut generator = Generator::seeded(1, config).unwrap();

    for formula in generator.by_ref().take(20) {
        let tokens = tokenize(&formula);
        let tree = parse(&tokens, formula.len()).unwrap();
        // simplify, three operator levels, then literals
        assert_eq!(tree.depth(), 5, "{formula}");
        assert_eq!(tree.size(), 16, "{formula}");
    }
}

#[test]
fn zero_probability_never_nests() {
    let config = GeneratorConfig { nesting_probability: 0.0,
                                   ..GeneratorConfig::default() };
    let mut generator = Generator::seeded(6, config).unwrap();

    for formula in generator.by_ref().take(20) {
        let tree = parse(&tokenize(&formula), formula.len()).unwrap();
        assert_eq!(tree.depth(), 3, "{formula}");
    }
}

#[test]
fn invalid_configurations_are_rejected() {
    let empty = GeneratorConfig { literal_min: 5,
                                  literal_max: 4,
                                  ..GeneratorConfig::default() };
    assert!(matches!(Generator::seeded(0, empty).err(),
                     Some(GeneratorError::EmptyLiteralRange { min: 5, max: 4 })));

    for probability in [-0.1, 1.5, f64::NAN] {
        let config = GeneratorConfig { nesting_probability: probability,
                                       ..GeneratorConfig::default() };
        assert!(matches!(config.validate(),
                         Err(GeneratorError::InvalidNestingProbability { .. })));
    }

    assert!(GeneratorConfig::default().validate().is_ok());
}
