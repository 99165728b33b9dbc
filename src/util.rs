use crate::error::Error;
use hashbrown::HashMap;

/// Calculator-convention trig: the argument is in degrees.
fn sin_deg(x: f64) -> Result<f64, Error> {
    Ok(libm::sin(x.to_radians()))
}

fn cos_deg(x: f64) -> Result<f64, Error> {
    Ok(libm::cos(x.to_radians()))
}

fn tan_deg(x: f64) -> Result<f64, Error> {
    Ok(libm::tan(x.to_radians()))
}

fn log10(x: f64) -> Result<f64, Error> {
    if x <= 0.0 {
        return Err(Error::DomainError(format!("log of non-positive value {}", x)));
    }
    Ok(libm::log10(x))
}

fn ln(x: f64) -> Result<f64, Error> {
    if x <= 0.0 {
        return Err(Error::DomainError(format!("ln of non-positive value {}", x)));
    }
    Ok(libm::log(x))
}

fn sqrt(x: f64) -> Result<f64, Error> {
    if x < 0.0 {
        return Err(Error::DomainError(format!("sqrt of negative value {}", x)));
    }
    Ok(libm::sqrt(x))
}

lazy_static! {
    /// The functions callable from an expression, by name
    pub static ref FUNCTIONS: HashMap<String, fn(f64) -> Result<f64, Error>> = {
        let mut map = HashMap::<String, fn(f64) -> Result<f64, Error>>::new();
        map.insert("sin".into(), sin_deg);
        map.insert("cos".into(), cos_deg);
        map.insert("tan".into(), tan_deg);
        map.insert("log".into(), log10);
        map.insert("ln".into(), ln);
        map.insert("sqrt".into(), sqrt);
        map.shrink_to_fit();
        map
    };

    /// The named constants usable in an expression
    pub static ref CONSTANTS: HashMap<String, f64> = {
        let mut map = HashMap::<String, f64>::new();
        map.insert("pi".into(), std::f64::consts::PI);
        map.insert("π".into(), std::f64::consts::PI);
        map.insert("e".into(), std::f64::consts::E);
        map.shrink_to_fit();
        map
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees() {
        assert!((sin_deg(30.0).unwrap() - 0.5).abs() < 1e-12);
        assert!((cos_deg(60.0).unwrap() - 0.5).abs() < 1e-12);
        assert!((tan_deg(45.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn domains() {
        assert!(log10(0.0).is_err());
        assert!(log10(-3.0).is_err());
        assert!(ln(0.0).is_err());
        assert!(sqrt(-1.0).is_err());
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert!((log10(100.0).unwrap() - 2.0).abs() < 1e-12);
        assert!((ln(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn registries() {
        for name in ["sin", "cos", "tan", "log", "ln", "sqrt"] {
            assert!(FUNCTIONS.contains_key(name));
        }
        assert_eq!(CONSTANTS.get("pi"), CONSTANTS.get("π"));
        assert!(CONSTANTS.contains_key("e"));
    }
}
