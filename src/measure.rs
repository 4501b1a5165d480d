//! Angle units and their conversion.
//!
//! A [`Measure`] groups units that express the same physical quantity. Each
//! [`Unit`] carries a linear factor to the measure's base unit, so converting
//! is a multiplication followed by a division. The table is built at compile
//! time and never mutated.

use crate::error::ExecutionError;

/// A unit of a [`Measure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Full name, e.g. `Degree`.
    pub name:    &'static str,
    /// Short symbol, e.g. `°`.
    pub symbol:  &'static str,
    /// Factor that converts a value in this unit to the base unit.
    pub to_base: f64,
}

/// Degrees; the base unit of [`ANGLE`].
pub const DEGREE: Unit = Unit { name:    "Degree",
                                symbol:  "°",
                                to_base: 1.0, };

/// Radians.
pub const RADIAN: Unit = Unit { name:    "Radian",
                                symbol:  "rad",
                                to_base: 180.0 / std::f64::consts::PI, };

/// The angle measure used by the trigonometric built-ins.
pub static ANGLE: Measure = Measure { name:  "Angle",
                                      units: &[DEGREE, RADIAN],
                                      base:  DEGREE, };

impl Unit {
    /// Looks up an angle unit by name or symbol, ignoring ASCII case.
    ///
    /// ## Example
    /// ```
    /// use equation::measure::{RADIAN, Unit};
    ///
    /// assert_eq!(Unit::parse("rad"), Some(RADIAN));
    /// assert_eq!(Unit::parse("radian"), Some(RADIAN));
    /// assert_eq!(Unit::parse("gradian"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        ANGLE.units
             .iter()
             .find(|unit| {
                 unit.name.eq_ignore_ascii_case(text)
                 || unit.symbol == text
                 || (unit.symbol.is_ascii() && unit.symbol.eq_ignore_ascii_case(text))
                 || text.eq_ignore_ascii_case(&format!("{}s", unit.name))
                 || (text.eq_ignore_ascii_case("deg") && unit.name == DEGREE.name)
             })
             .copied()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// A set of units that measure the same quantity.
#[derive(Debug)]
pub struct Measure {
    /// Name of the measured quantity.
    pub name:  &'static str,
    /// All units of this measure.
    pub units: &'static [Unit],
    /// The unit every factor is relative to.
    pub base:  Unit,
}

impl Measure {
    /// Returns `true` if `unit` belongs to this measure.
    ///
    /// Units are compared as a whole, so a unit that borrows the name of a
    /// known unit but carries a different factor does not belong.
    #[must_use]
    pub fn contains(&self, unit: &Unit) -> bool {
        self.units.contains(unit)
    }

    /// Converts `value` from one unit of this measure to another.
    ///
    /// # Errors
    /// Returns [`ExecutionError::IncompatibleUnit`] if either unit is not part
    /// of this measure.
    ///
    /// ## Example
    /// ```
    /// use equation::measure::{ANGLE, DEGREE, RADIAN};
    ///
    /// let r = ANGLE.convert(180.0, DEGREE, RADIAN).unwrap();
    /// assert!((r - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> Result<f64, ExecutionError> {
        for unit in [&from, &to] {
            if !self.contains(unit) {
                return Err(ExecutionError::IncompatibleUnit { unit:    unit.name.to_string(),
                                                              measure: self.name.to_string(), });
            }
        }

        if from == to {
            return Ok(value);
        }

        Ok(value * from.to_base / to.to_base)
    }
}
