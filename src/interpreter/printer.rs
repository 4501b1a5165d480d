use crate::{
    ast::Part,
    interpreter::settings::{NumberFormat, RenderOptions},
};

impl Part {
    /// Writes the part back as equation text.
    ///
    /// Binary operators are surrounded by `options.spacing` spaces on both
    /// sides and function arguments are separated by a comma followed by the
    /// same spacing. When `,` is the decimal separator, an argument comma that
    /// follows a digit gets a space in front, since it would otherwise be read
    /// as part of the number. Unary operators are written directly in front
    /// of their operand. Explicit blocks keep their parentheses, so parsing the
    /// output again yields an equal tree.
    ///
    /// # Parameters
    /// - `options`: Spacing and number format to use.
    ///
    /// # Returns
    /// The rendered text.
    ///
    /// # Example
    /// ```
    /// use equation::{Equation, interpreter::settings::RenderOptions};
    ///
    /// let eq: Equation = "max( 1,2 )*(3-  -x)".parse().unwrap();
    ///
    /// assert_eq!(eq.root().render(&RenderOptions::new(0)), "max(1,2)*(3--x)");
    /// assert_eq!(eq.root().render(&RenderOptions::new(1)), "max(1, 2) * (3 - -x)");
    /// ```
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        self.render_into(&mut out, &options.separator(), &options.number_format);
        out
    }

    fn render_into(&self, out: &mut String, separator: &str, format: &NumberFormat) {
        match self {
            Self::Number(value) => out.push_str(&format_number(*value, format)),
            Self::Variable(name) => out.push_str(name),
            Self::FunctionCall { name, arguments, .. } => {
                out.push_str(name);
                out.push('(');
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        if format.decimal_separator == ','
                           && out.ends_with(|c: char| c.is_ascii_digit())
                        {
                            out.push(' ');
                        }
                        out.push(',');
                        out.push_str(separator);
                    }
                    argument.render_into(out, separator, format);
                }
                out.push(')');
            },
            Self::Block(inner) => {
                out.push('(');
                inner.render_into(out, separator, format);
                out.push(')');
            },
            Self::UnaryOp { op, operand } => {
                out.push_str(op.symbol());
                operand.render_into(out, separator, format);
            },
            Self::BinaryOp { op, left, right } => {
                left.render_into(out, separator, format);
                out.push_str(separator);
                out.push_str(op.symbol());
                out.push_str(separator);
                right.render_into(out, separator, format);
            },
        }
    }
}

/// Formats a number with the shortest representation that reads back to the
/// same value, using the configured decimal separator.
///
/// ## Example
/// ```
/// use equation::interpreter::{printer::format_number, settings::NumberFormat};
///
/// assert_eq!(format_number(2.0, &NumberFormat::default()), "2");
/// assert_eq!(format_number(0.25, &NumberFormat::new(',')), "0,25");
/// ```
#[must_use]
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    let text = value.to_string();
    if format.decimal_separator == '.' {
        text
    } else {
        text.replace('.', &format.decimal_separator.to_string())
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}
