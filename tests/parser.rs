use equation::{
    Equation,
    ast::{BinaryOperator, Part, UnaryOperator},
    error::ParseError,
    interpreter::settings::{NumberFormat, ParseSettings},
};

fn parse_err(src: &str) -> ParseError {
    match Equation::parse(src) {
        Ok(eq) => panic!("'{src}' parsed as {eq} but was expected to fail"),
        Err(e) => e,
    }
}

fn num(value: f64) -> Part {
    Part::Number(value)
}

#[test]
fn tree_shape_follows_precedence() {
    let eq = Equation::parse("1 + 2 * 3").unwrap();
    let expected = Part::binary(BinaryOperator::Add,
                                num(1.0),
                                Part::binary(BinaryOperator::Mul, num(2.0), num(3.0)));

    assert_eq!(eq.root(), &expected);
}

#[test]
fn equal_priorities_nest_to_the_left() {
    let eq = Equation::parse("2^3^2").unwrap();
    let expected = Part::binary(BinaryOperator::Pow,
                                Part::binary(BinaryOperator::Pow, num(2.0), num(3.0)),
                                num(2.0));

    assert_eq!(eq.root(), &expected);
}

#[test]
fn unary_operand_is_the_next_token() {
    let eq = Equation::parse("-x * 2").unwrap();
    let expected = Part::binary(BinaryOperator::Mul,
                                Part::unary(UnaryOperator::Negate, Part::Variable("x".to_string())),
                                num(2.0));

    assert_eq!(eq.root(), &expected);
}

#[test]
fn blocks_are_kept_in_the_tree() {
    let eq = Equation::parse("(1)").unwrap();
    assert_eq!(eq.root(), &Part::block(num(1.0)));
}

#[test]
fn unknown_character() {
    assert_eq!(parse_err("2 + $"),
               ParseError::UnknownCharacter { character: '$',
                                              position:  4, });
    assert_eq!(parse_err("1 = 1"),
               ParseError::UnknownCharacter { character: '=',
                                              position:  2, });
}

#[test]
fn positions_count_characters() {
    assert_eq!(parse_err("αβ + $"),
               ParseError::UnknownCharacter { character: '$',
                                              position:  5, });
}

#[test]
fn invalid_numbers() {
    assert_eq!(parse_err("1.2.3"), ParseError::InvalidNumber { position: 3 });
    assert_eq!(parse_err("."), ParseError::InvalidNumber { position: 0 });
}

#[test]
fn empty_input() {
    assert_eq!(parse_err(""), ParseError::EmptyExpression { position: 0 });
    assert_eq!(parse_err("   "), ParseError::EmptyExpression { position: 0 });
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_err("(2+3"), ParseError::UnclosedBlock { position: 0 });
    assert_eq!(parse_err("2)"), ParseError::UnmatchedCloseParen { position: 1 });
    assert_eq!(parse_err("()"), ParseError::EmptyBlock { position: 0 });
}

#[test]
fn function_argument_errors() {
    assert_eq!(parse_err("min(1,)"), ParseError::EmptyArgument { position: 6 });
    assert_eq!(parse_err("min(,1)"), ParseError::EmptyArgument { position: 4 });
    assert_eq!(parse_err("abs()"), ParseError::EmptyArgument { position: 4 });
    assert_eq!(parse_err("min(1"),
               ParseError::UnclosedFunctionList { name:     "min".to_string(),
                                                  position: 0, });
}

#[test]
fn unknown_functions() {
    assert_eq!(parse_err("foo(1)"),
               ParseError::UnknownFunction { name:     "foo".to_string(),
                                             arity:    1,
                                             position: 0, });
    assert_eq!(parse_err("1 + min(1)"),
               ParseError::UnknownFunction { name:     "min".to_string(),
                                             arity:    1,
                                             position: 4, });
}

#[test]
fn dangling_operators() {
    assert_eq!(parse_err("2++"), ParseError::NoRootOperation { position: 2 });
    assert_eq!(parse_err("*2"), ParseError::NoRootOperation { position: 0 });
    assert_eq!(parse_err("2**3"), ParseError::NoRootOperation { position: 2 });
    assert_eq!(parse_err("2-"), ParseError::NoRootOperation { position: 1 });
}

#[test]
fn stray_comma() {
    assert_eq!(parse_err("1, 2"), ParseError::UnexpectedComma { position: 1 });
}

#[test]
fn adjacent_values_without_implicit_multiplication() {
    let settings = ParseSettings::default().with_implicit_multiplication(false);
    let err = Equation::parse_with("2 3", &NumberFormat::default(), &settings).unwrap_err();

    assert_eq!(err, ParseError::NoRootOperation { position: 2 });
}

#[test]
fn nesting_depth_is_limited() {
    let settings = ParseSettings::default().with_max_depth(2);
    let format = NumberFormat::default();

    assert!(Equation::parse_with("((1))", &format, &settings).is_ok());

    let err = Equation::parse_with("(((1)))", &format, &settings).unwrap_err();
    assert!(matches!(err, ParseError::TooDeeplyNested { depth: 3, .. }));

    let err = Equation::parse_with("abs(abs(abs(1)))", &format, &settings).unwrap_err();
    assert!(matches!(err, ParseError::TooDeeplyNested { depth: 3, .. }));
}

#[test]
fn deep_nesting_within_the_default_limit() {
    let src = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(Equation::parse(&src).unwrap().calculate_default().unwrap(), 1.0);
}

#[test]
fn error_messages_carry_the_position() {
    assert_eq!(parse_err("(2+3").to_string(), "Error at char 0: Unclosed parenthesis.");
    assert_eq!(parse_err("2 + $").position(), 4);
}

#[test]
fn long_operator_chains_are_limited() {
    let sum = format!("1{}", "+1".repeat(200_000));
    assert!(matches!(parse_err(&sum), ParseError::TooDeeplyNested { .. }));

    let negations = format!("{}1", "-".repeat(200_000));
    assert!(matches!(parse_err(&negations), ParseError::TooDeeplyNested { .. }));
}

#[test]
fn chains_within_the_height_limit_calculate() {
    let sum = format!("1{}", "+1".repeat(400));
    let eq = Equation::parse(&sum).unwrap();

    assert_eq!(eq.calculate_default().unwrap(), 401.0);
    assert_eq!(Equation::parse(&eq.to_string()).unwrap(), eq);
}

#[test]
fn tree_height_counts_blocks_and_calls() {
    let settings = ParseSettings::default().with_max_height(4);
    let format = NumberFormat::default();

    // + -> abs -> block -> 2
    assert!(Equation::parse_with("1 + abs((2))", &format, &settings).is_ok());

    let err = Equation::parse_with("1 + abs((-2))", &format, &settings).unwrap_err();
    assert_eq!(err, ParseError::TooDeeplyNested { depth: 5, position: 4 });
}
