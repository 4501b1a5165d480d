use equation::{
    Equation, evaluate,
    error::ExecutionError,
    interpreter::{
        evaluator::{
            core::CalculationContext,
            function::core::{BUILTIN_FUNCTIONS, builtin_definitions, eval_arguments},
        },
        settings::{NumberFormat, ParseSettings},
    },
    measure::{ANGLE, DEGREE, RADIAN, Unit},
};
use float_cmp::approx_eq;

fn calc(src: &str) -> f64 {
    calc_with(src, &CalculationContext::new())
}

fn calc_with(src: &str, ctx: &CalculationContext) -> f64 {
    match evaluate(src, ctx) {
        Ok(value) => value,
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    let actual = calc(src);
    assert!(approx_eq!(f64, actual, expected, epsilon = 1e-12),
            "'{src}' gave {actual}, expected {expected}");
}

#[test]
fn basic_arithmetic() {
    assert_eq!(calc("2 + 3"), 5.0);
    assert_eq!(calc("7 * 9"), 63.0);
    assert_eq!(calc("8 - 5"), 3.0);
    assert_eq!(calc("10 / 4"), 2.5);
    assert_eq!(calc("10 % 4"), 2.0);
    assert_eq!(calc("2^3"), 8.0);
}

#[test]
fn operator_precedence() {
    assert_eq!(calc("2+3*4"), 14.0);
    assert_eq!(calc("(2+3)*4"), 20.0);
    assert_eq!(calc("1+2*3*4"), 25.0);
    assert_eq!(calc("2*3^2"), 18.0);
    assert_eq!(calc("1 + 2 * 3 ^ 2 - 4"), 15.0);
    assert_eq!(calc("10 - 6 / 2 % 2"), 9.0);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(calc("8-3-2"), 3.0);
    assert_eq!(calc("16/4/2"), 2.0);
    assert_eq!(calc("2^3^2"), 64.0);
    assert_eq!(calc("17 % 5 % 3"), 2.0);
}

#[test]
fn unary_operators() {
    assert_eq!(calc("-3"), -3.0);
    assert_eq!(calc("+3"), 3.0);
    assert_eq!(calc("--3"), 3.0);
    assert_eq!(calc("2*-3"), -6.0);
    assert_eq!(calc("2 - -3"), 5.0);
    assert_eq!(calc("-2+5"), 3.0);
    assert_eq!(calc("2+-3*4"), -10.0);
}

#[test]
fn unary_binds_tighter_than_power() {
    assert_eq!(calc("-2^2"), 4.0);
    assert_eq!(calc("-(2^2)"), -4.0);
}

#[test]
fn power_keeps_sign_for_odd_exponents() {
    assert_eq!(calc("(-2)^3"), -8.0);
    assert_eq!(calc("(-2)^2"), 4.0);
    assert_eq!(calc("(-4)^0.5"), 2.0);
    assert_eq!(calc("2^-1"), 0.5);
    assert_eq!(calc("(-2)^-1"), -0.5);
}

#[test]
fn division_follows_ieee() {
    assert!(calc("1/0").is_infinite());
    assert!(calc("-1/0").is_sign_negative());
    assert!(calc("0/0").is_nan());
    assert!(calc("1 % 0").is_nan());
}

#[test]
fn decimal_numbers() {
    assert_eq!(calc("1.5 * 2"), 3.0);
    assert_eq!(calc(".5 + .25"), 0.75);
    assert_eq!(calc("3. + 1"), 4.0);
}

#[test]
fn comma_as_decimal_separator() {
    let format = NumberFormat::new(',');
    let settings = ParseSettings::default();

    let eq = Equation::parse_with("2,5 * 2", &format, &settings).unwrap();
    assert_eq!(eq.calculate_default().unwrap(), 5.0);

    // A comma right after a number continues it, so a second one is an error.
    assert!(Equation::parse_with("1,5,2", &format, &settings).is_err());
}

#[test]
fn variables() {
    let ctx = CalculationContext::new().with_variable("x", 5.0)
                                       .with_variable("rate", 0.5);

    assert_eq!(calc_with("x + 1", &ctx), 6.0);
    assert_eq!(calc_with("rate * x", &ctx), 2.5);
    assert_eq!(calc_with("x^2 - x", &ctx), 20.0);
}

#[test]
fn undefined_variable_fails_at_calculation() {
    let eq = Equation::parse("y + 1").unwrap();
    let err = eq.calculate(&CalculationContext::new()).unwrap_err();

    assert_eq!(err, ExecutionError::UndefinedVariable { name: "y".to_string() });
}

#[test]
fn implicit_multiplication() {
    let ctx = CalculationContext::new().with_variable("x", 5.0);

    assert_eq!(calc_with("2x", &ctx), 10.0);
    assert_eq!(calc_with("3(2 + 2)", &ctx), 12.0);
    assert_eq!(calc_with("(1 + 1)(2 + 2)", &ctx), 8.0);
    assert_eq!(calc_with("2x^2", &ctx), 50.0);
    assert_eq!(calc_with("2abs(-3)", &ctx), 6.0);
}

#[test]
fn implicit_multiplication_can_be_disabled() {
    let settings = ParseSettings::default().with_implicit_multiplication(false);

    assert!(Equation::parse_with("2x", &NumberFormat::default(), &settings).is_err());
    assert!(Equation::parse_with("2 * x", &NumberFormat::default(), &settings).is_ok());
}

#[test]
fn builtin_functions() {
    assert_eq!(calc("abs(-4)"), 4.0);
    assert_eq!(calc("min(3, 5)"), 3.0);
    assert_eq!(calc("max(3, 5)"), 5.0);
    assert_eq!(calc("clamp(7, 0, 5)"), 5.0);
    assert_eq!(calc("clamp(-1, 0, 5)"), 0.0);
    assert_eq!(calc("clamp(2, 0, 5)"), 2.0);
    assert_eq!(calc("ceiling(1.2)"), 2.0);
    assert_eq!(calc("floor(1.8)"), 1.0);
    assert_eq!(calc("floor(-1.2)"), -2.0);
}

#[test]
fn round_halves_to_even() {
    assert_eq!(calc("round(2.5)"), 2.0);
    assert_eq!(calc("round(3.5)"), 4.0);
    assert_eq!(calc("round(2.6)"), 3.0);
    assert_eq!(calc("round(-2.5)"), -2.0);
}

#[test]
fn min_max_propagate_nan() {
    assert!(calc("min(0/0, 1)").is_nan());
    assert!(calc("max(1, 0/0)").is_nan());
}

#[test]
fn clamp_rejects_inverted_bounds() {
    let err = evaluate("clamp(1, 5, 0)", &CalculationContext::new()).unwrap_err();
    let err = err.downcast_ref::<ExecutionError>().unwrap();

    assert!(matches!(err, ExecutionError::InvalidArgument { function, .. } if function == "clamp"));
}

#[test]
fn nested_function_calls() {
    assert_eq!(calc("max(min(3, 9), abs(-2 * 4))"), 8.0);
    assert_eq!(calc("min((1 + 2) * 3, 10)"), 9.0);
    assert_eq!(calc("abs(min(-1, -2))"), 2.0);
}

#[test]
fn trigonometry_in_degrees() {
    assert_close("sin(90)", 1.0);
    assert_close("cos(180)", -1.0);
    assert_close("tan(45)", 1.0);
    assert_close("sin(30) * 2", 1.0);
}

#[test]
fn trigonometry_in_radians() {
    let ctx = CalculationContext::new().with_angle_unit(RADIAN)
                                       .with_variable("pi", std::f64::consts::PI);

    assert!(approx_eq!(f64, calc_with("sin(pi / 2)", &ctx), 1.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, calc_with("cos(pi)", &ctx), -1.0, epsilon = 1e-12));
}

#[test]
fn default_angle_unit_is_the_base_unit() {
    assert_eq!(CalculationContext::new().angle_unit, ANGLE.base);
    assert_eq!(ANGLE.base, DEGREE);
}

#[test]
fn foreign_angle_units_are_rejected() {
    let gradian = Unit { name:    "Gradian",
                         symbol:  "gon",
                         to_base: 0.9, };
    let ctx = CalculationContext::new().with_angle_unit(gradian);
    let err = Equation::parse("sin(1)").unwrap().calculate(&ctx).unwrap_err();

    assert_eq!(err,
               ExecutionError::IncompatibleUnit { unit:    "Gradian".to_string(),
                                                  measure: "Angle".to_string(), });
    assert_eq!(err.to_string(), "Unit 'Gradian' is not a unit of Angle.");
}

#[test]
fn units_are_matched_by_factor_too() {
    let doubled = Unit { name:    "Degree",
                         symbol:  "°",
                         to_base: 2.0, };
    let ctx = CalculationContext::new().with_angle_unit(doubled);

    assert!(!ANGLE.contains(&doubled));
    assert_eq!(Equation::parse("cos(0)").unwrap().calculate(&ctx).unwrap_err(),
               ExecutionError::IncompatibleUnit { unit:    "Degree".to_string(),
                                                  measure: "Angle".to_string(), });
}

#[test]
fn custom_functions() {
    fn hypot(args: &[equation::ast::Part], ctx: &CalculationContext) -> Result<f64, ExecutionError> {
        let values = ctx.eval_all(args)?;
        Ok(values[0].hypot(values[1]))
    }

    let settings = ParseSettings::default().with_function("hypot", 2, hypot);
    let eq = Equation::parse_with("hypot(3, 4) + 1", &NumberFormat::default(), &settings).unwrap();

    assert_eq!(eq.calculate_default().unwrap(), 6.0);
}

#[test]
fn builtin_names_match_the_registered_definitions() {
    let names: Vec<String> = builtin_definitions().into_iter().map(|def| def.name).collect();
    assert_eq!(names, BUILTIN_FUNCTIONS);
}

#[test]
fn fixed_arguments_are_evaluated_in_order() {
    fn span(args: &[equation::ast::Part], ctx: &CalculationContext) -> Result<f64, ExecutionError> {
        let [low, high] = eval_arguments("span", args, ctx)?;
        Ok(high - low)
    }

    let settings = ParseSettings::empty().with_function("span", 2, span)
                                         .with_function("span", 1, span);
    let format = NumberFormat::default();
    let ctx = CalculationContext::new().with_variable("x", 10.0);

    let eq = Equation::parse_with("span(2, x)", &format, &settings).unwrap();
    assert_eq!(eq.calculate(&ctx).unwrap(), 8.0);

    let eq = Equation::parse_with("span(y, 1)", &format, &settings).unwrap();
    assert_eq!(eq.calculate(&ctx).unwrap_err(),
               ExecutionError::UndefinedVariable { name: "y".to_string() });

    let eq = Equation::parse_with("span(1)", &format, &settings).unwrap();
    assert_eq!(eq.calculate(&ctx).unwrap_err(),
               ExecutionError::InvalidArgument { function: "span".to_string(),
                                                 details:  "expected 2 arguments, got 1".to_string(), });
}

#[test]
fn functions_are_matched_by_arity() {
    fn one(_: &[equation::ast::Part], _: &CalculationContext) -> Result<f64, ExecutionError> {
        Ok(1.0)
    }
    fn two(_: &[equation::ast::Part], _: &CalculationContext) -> Result<f64, ExecutionError> {
        Ok(2.0)
    }

    let settings = ParseSettings::empty().with_function("f", 1, one)
                                         .with_function("f", 2, two);
    let format = NumberFormat::default();

    let eq = Equation::parse_with("f(9)", &format, &settings).unwrap();
    assert_eq!(eq.calculate_default().unwrap(), 1.0);

    let eq = Equation::parse_with("f(9, 9)", &format, &settings).unwrap();
    assert_eq!(eq.calculate_default().unwrap(), 2.0);

    assert!(Equation::parse_with("abs(1)", &format, &settings).is_err());
}

#[test]
fn equation_is_reusable_across_contexts() {
    let eq: Equation = "x * x".parse().unwrap();

    for x in [1.0, 2.0, 3.0] {
        let ctx = CalculationContext::new().with_variable("x", x);
        assert_eq!(eq.calculate(&ctx).unwrap(), x * x);
    }
}

#[test]
fn equation_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Equation>();
    assert_send_sync::<CalculationContext>();
    assert_send_sync::<ParseSettings>();
}
