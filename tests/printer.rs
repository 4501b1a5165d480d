use equation::{
    Equation,
    interpreter::settings::{NumberFormat, ParseSettings, RenderOptions},
};

fn render(src: &str, spacing: usize) -> String {
    Equation::parse(src).unwrap().render(&RenderOptions::new(spacing))
}

#[test]
fn default_spacing_is_one() {
    assert_eq!(Equation::parse("1+2*3").unwrap().to_string(), "1 + 2 * 3");
    assert_eq!(Equation::parse("min(1,2)").unwrap().to_string(), "min(1, 2)");
}

#[test]
fn spacing_is_configurable() {
    assert_eq!(render("1 + 2", 0), "1+2");
    assert_eq!(render("1 + 2", 3), "1   +   2");
    assert_eq!(render("clamp(x, 0, 1)", 0), "clamp(x,0,1)");
    assert_eq!(render("clamp(x, 0, 1)", 2), "clamp(x,  0,  1)");
}

#[test]
fn unary_operators_are_never_spaced() {
    assert_eq!(render("- x", 1), "-x");
    assert_eq!(render("2 * - 3", 1), "2 * -3");
    assert_eq!(render("+ 4", 2), "+4");
}

#[test]
fn blocks_keep_their_parentheses() {
    assert_eq!(render("(1 + 2) * 3", 1), "(1 + 2) * 3");
    assert_eq!(render("((x))", 1), "((x))");
}

#[test]
fn precedence_grouping_is_not_added() {
    assert_eq!(render("1 + 2 * 3", 1), "1 + 2 * 3");
    assert_eq!(render("2^3^2", 0), "2^3^2");
}

#[test]
fn implicit_multiplication_is_printed_explicitly() {
    assert_eq!(render("2x", 1), "2 * x");
    assert_eq!(render("3(x + 1)", 0), "3*(x+1)");
}

#[test]
fn numbers_use_the_decimal_separator() {
    let format = NumberFormat::new(',');
    let eq = Equation::parse_with("1,25 + 2", &format, &ParseSettings::default()).unwrap();

    assert_eq!(eq.render(&RenderOptions::new(1).with_number_format(format)), "1,25 + 2");
    assert_eq!(eq.to_string(), "1.25 + 2");
}

#[test]
fn argument_commas_stay_apart_from_decimal_commas() {
    let format = NumberFormat::new(',');
    let settings = ParseSettings::default();
    let eq = Equation::parse_with("max(0,5 , 1) + min(x, 2)", &format, &settings).unwrap();

    for (spacing, expected) in [(0, "max(0,5 ,1)+min(x,2)"), (1, "max(0,5 , 1) + min(x, 2)")] {
        let text = eq.render(&RenderOptions::new(spacing).with_number_format(format));
        assert_eq!(text, expected);
        assert_eq!(Equation::parse_with(&text, &format, &settings).unwrap(), eq);
    }

    assert_eq!(eq.to_string(), "max(0.5, 1) + min(x, 2)");
}

#[test]
fn numbers_are_written_in_shortest_form() {
    assert_eq!(render("2.50", 1), "2.5");
    assert_eq!(render(".5", 1), "0.5");
    assert_eq!(render("007", 1), "7");
}

#[test]
fn fully_parenthesized_expressions_round_trip() {
    let sources = ["((1 + 2) * (3 - x))",
                   "(min((a), (b)) / (2))",
                   "(-(x) ^ (2))",
                   "(abs((-3)) % (4))"];

    for src in sources {
        let eq = Equation::parse(src).unwrap();
        let printed = eq.render(&RenderOptions::new(1));
        assert_eq!(printed, src);

        let reparsed = Equation::parse(&printed).unwrap();
        assert_eq!(reparsed, eq);
    }
}

#[test]
fn rendered_output_parses_to_the_same_tree() {
    let sources = ["1+2*3-4/5%6^7", "-x+-y", "max(1,min(2,3))*2", "2(y+1)x"];

    for src in sources {
        let eq = Equation::parse(src).unwrap();
        for spacing in [0, 1, 2] {
            let printed = eq.render(&RenderOptions::new(spacing));
            assert_eq!(Equation::parse(&printed).unwrap(), eq, "{src} printed as {printed}");
        }
    }
}
