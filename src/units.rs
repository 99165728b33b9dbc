use crate::error::ConversionError;
use std::fmt::{self, Display, Formatter};
use tracing::trace;

/// The physical categories the converter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
}

impl Display for Category {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Area => "area",
            Self::Volume => "volume",
        };
        fmt.write_str(name)
    }
}

/// Unit identifier, display name, and scale factor relative to the
/// category's base unit (whose own factor is 1).
type UnitRow = (&'static str, &'static str, f64);

const LENGTH: &[UnitRow] = &[
    ("meter", "Meters", 1.0),
    ("kilometer", "Kilometers", 1000.0),
    ("centimeter", "Centimeters", 0.01),
    ("millimeter", "Millimeters", 0.001),
    ("mile", "Miles", 1609.34),
    ("yard", "Yards", 0.9144),
    ("foot", "Feet", 0.3048),
    ("inch", "Inches", 0.0254),
];

const WEIGHT: &[UnitRow] = &[
    ("kilogram", "Kilograms", 1.0),
    ("gram", "Grams", 0.001),
    ("milligram", "Milligrams", 1e-6),
    ("pound", "Pounds", 0.453592),
    ("ounce", "Ounces", 0.0283495),
    ("ton", "Tons", 1000.0),
];

const AREA: &[UnitRow] = &[
    ("squareMeter", "Square Meters", 1.0),
    ("squareKilometer", "Square Kilometers", 1e6),
    ("squareMile", "Square Miles", 2_589_988.11),
    ("squareYard", "Square Yards", 0.836127),
    ("squareFoot", "Square Feet", 0.092903),
    ("acre", "Acres", 4046.86),
    ("hectare", "Hectares", 10000.0),
];

const VOLUME: &[UnitRow] = &[
    ("liter", "Liters", 1.0),
    ("milliliter", "Milliliters", 0.001),
    ("gallon", "Gallons", 3.78541),
    ("quart", "Quarts", 0.946353),
    ("pint", "Pints", 0.473176),
    ("cup", "Cups", 0.24),
    ("cubicMeter", "Cubic Meters", 1000.0),
];

/// Temperature has no factor table; conversion is affine through Celsius.
const TEMPERATURE: &[(&str, &str)] = &[
    ("celsius", "Celsius"),
    ("fahrenheit", "Fahrenheit"),
    ("kelvin", "Kelvin"),
];

impl Category {
    fn table(self) -> Option<&'static [UnitRow]> {
        match self {
            Self::Length => Some(LENGTH),
            Self::Weight => Some(WEIGHT),
            Self::Area => Some(AREA),
            Self::Volume => Some(VOLUME),
            Self::Temperature => None,
        }
    }
}

/// Convert `value` between two units of `category`.
///
/// Scalar categories go through the base unit
/// (`value * factor(from) / factor(to)`); temperature pivots through
/// Celsius with the usual affine formulas. The result is rounded to
/// 6 decimal digits.
///
/// # Examples
///
/// ```
/// use reckoner::{convert, Category};
///
/// assert_eq!(convert(Category::Length, 1.0, "kilometer", "meter"), Ok(1000.0));
/// assert_eq!(convert(Category::Temperature, 0.0, "celsius", "fahrenheit"), Ok(32.0));
/// ```
pub fn convert(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let raw = match category.table() {
        Some(table) => {
            let from_factor = factor(category, table, from)?;
            let to_factor = factor(category, table, to)?;
            value * from_factor / to_factor
        }
        None => from_celsius(to_celsius(value, from)?, to)?,
    };
    trace!(
        "converted {} {} to {} {} ({})",
        value,
        from,
        raw,
        to,
        category
    );
    Ok(round6(raw))
}

/// The ordered `(identifier, display name)` pairs of a category, as a UI
/// would list them.
pub fn list_units(category: Category) -> Vec<(&'static str, &'static str)> {
    match category.table() {
        Some(table) => table.iter().map(|&(id, name, _)| (id, name)).collect(),
        None => TEMPERATURE.to_vec(),
    }
}

/// The conventional default `(from, to)` selection for a category.
pub fn default_units(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Length => ("meter", "foot"),
        Category::Weight => ("kilogram", "pound"),
        Category::Temperature => ("celsius", "fahrenheit"),
        // no convention beyond "start at the base unit"
        Category::Area | Category::Volume => {
            let first = list_units(category)[0].0;
            (first, first)
        }
    }
}

/// Exchange the two unit identifiers. This is a pure relabeling: the caller
/// re-runs [`convert`] with the existing value, and no arithmetic happens
/// here.
pub fn swap_units<'a>(from: &'a str, to: &'a str) -> (&'a str, &'a str) {
    (to, from)
}

fn factor(
    category: Category,
    table: &'static [UnitRow],
    unit: &str,
) -> Result<f64, ConversionError> {
    table
        .iter()
        .find(|&&(id, _, _)| id == unit)
        .map(|&(_, _, factor)| factor)
        .ok_or_else(|| ConversionError::UnknownUnit {
            category,
            unit: unit.into(),
        })
}

fn to_celsius(value: f64, from: &str) -> Result<f64, ConversionError> {
    match from {
        "celsius" => Ok(value),
        "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" => Ok(value - 273.15),
        _ => Err(ConversionError::UnknownUnit {
            category: Category::Temperature,
            unit: from.into(),
        }),
    }
}

fn from_celsius(celsius: f64, to: &str) -> Result<f64, ConversionError> {
    match to {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        _ => Err(ConversionError::UnknownUnit {
            category: Category::Temperature,
            unit: to.into(),
        }),
    }
}

/// Round to 6 decimal digits, the display precision of conversion results.
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const SCALAR_CATEGORIES: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Area,
        Category::Volume,
    ];

    #[test]
    fn base_factors_are_one() {
        for category in SCALAR_CATEGORIES {
            let table = category.table().unwrap();
            assert_eq!(table[0].2, 1.0, "base unit of {} is not 1", category);
            for &(id, _, factor) in table {
                assert!(factor > 0.0, "factor of {} is not positive", id);
            }
        }
    }

    #[test_case(Category::Length, 1.0, "meter", "foot", 3.28084 ; "meter to foot")]
    #[test_case(Category::Length, 1.0, "mile", "kilometer", 1.60934 ; "mile to kilometer")]
    #[test_case(Category::Weight, 1.0, "kilogram", "pound", 2.204624 ; "kilogram to pound")]
    #[test_case(Category::Area, 1.0, "hectare", "acre", 2.471052 ; "hectare to acre")]
    #[test_case(Category::Volume, 1.0, "gallon", "liter", 3.78541 ; "gallon to liter")]
    #[test_case(Category::Volume, 3.0, "cup", "milliliter", 720.0 ; "cups to milliliters")]
    fn scalar_conversions(category: Category, value: f64, from: &str, to: &str, expected: f64) {
        let result = convert(category, value, from, to).unwrap();
        assert!(
            (result - expected).abs() < 1e-6,
            "{} {} -> {} gave {}",
            value,
            from,
            to,
            result
        );
    }

    #[test]
    fn temperature_fixed_points() {
        assert_eq!(
            convert(Category::Temperature, 0.0, "celsius", "fahrenheit"),
            Ok(32.0)
        );
        assert_eq!(
            convert(Category::Temperature, 0.0, "celsius", "kelvin"),
            Ok(273.15)
        );
        assert_eq!(
            convert(Category::Temperature, 212.0, "fahrenheit", "celsius"),
            Ok(100.0)
        );
        assert_eq!(
            convert(Category::Temperature, 300.0, "kelvin", "celsius"),
            Ok(26.85)
        );
    }

    #[test]
    fn identity_within_category() {
        for category in SCALAR_CATEGORIES {
            for (unit, _) in list_units(category) {
                assert_eq!(convert(category, 37.25, unit, unit), Ok(37.25));
            }
        }
        for (unit, _) in list_units(Category::Temperature) {
            assert_eq!(convert(Category::Temperature, -4.5, unit, unit), Ok(-4.5));
        }
    }

    #[test]
    fn round_trips() {
        for category in SCALAR_CATEGORIES {
            let table = category.table().unwrap();
            for &(from, _, from_factor) in table {
                for &(to, _, to_factor) in table {
                    // Pick a value that lands near 1234.5678 in the target
                    // unit, so the 6-decimal output rounding stays far below
                    // the asserted tolerance.
                    let value = 1234.5678 * to_factor / from_factor;
                    let there = convert(category, value, from, to).unwrap();
                    let back = convert(category, there, to, from).unwrap();
                    let tolerance = 1e-6 * value.abs().max(1.0);
                    assert!(
                        (back - value).abs() <= tolerance,
                        "{} -> {} -> {} drifted: {} vs {}",
                        from,
                        to,
                        from,
                        back,
                        value
                    );
                }
            }
        }
    }

    #[test]
    fn temperature_round_trips() {
        let units = ["celsius", "fahrenheit", "kelvin"];
        for from in units {
            for to in units {
                let there = convert(Category::Temperature, 36.6, from, to).unwrap();
                let back = convert(Category::Temperature, there, to, from).unwrap();
                assert!((back - 36.6).abs() < 1e-5, "{} -> {} drifted", from, to);
            }
        }
    }

    #[test_case(Category::Length, "furlong" ; "unknown length unit")]
    #[test_case(Category::Weight, "stone" ; "unknown weight unit")]
    #[test_case(Category::Temperature, "rankine" ; "unknown temperature unit")]
    fn unknown_units(category: Category, unit: &str) {
        assert_eq!(
            convert(category, 1.0, unit, "meter"),
            Err(ConversionError::UnknownUnit {
                category,
                unit: unit.into(),
            })
        );
    }

    #[test]
    fn unknown_target_unit() {
        assert_eq!(
            convert(Category::Length, 1.0, "meter", "cubit"),
            Err(ConversionError::UnknownUnit {
                category: Category::Length,
                unit: "cubit".into(),
            })
        );
    }

    #[test]
    fn listing_is_ordered() {
        let length = list_units(Category::Length);
        assert_eq!(length[0], ("meter", "Meters"));
        assert_eq!(length[1], ("kilometer", "Kilometers"));
        assert_eq!(length.len(), 8);
        assert_eq!(list_units(Category::Weight).len(), 6);
        assert_eq!(list_units(Category::Area).len(), 7);
        assert_eq!(list_units(Category::Volume).len(), 7);
        assert_eq!(
            list_units(Category::Temperature),
            vec![
                ("celsius", "Celsius"),
                ("fahrenheit", "Fahrenheit"),
                ("kelvin", "Kelvin"),
            ]
        );
    }

    #[test]
    fn defaults_are_listed_units(){
        for category in [
            Category::Length,
            Category::Weight,
            Category::Temperature,
            Category::Area,
            Category::Volume,
        ] {
            let units = list_units(category);
            let (from, to) = default_units(category);
            assert!(units.iter().any(|&(id, _)| id == from));
            assert!(units.iter().any(|&(id, _)| id == to));
        }
    }

    #[test]
    fn swap_is_pure_relabeling() {
        assert_eq!(swap_units("meter", "foot"), ("foot", "meter"));
    }
}
