/// Display impls for the analysis results
use crate::{Change, Row};
use std::fmt::Display;

/// Probability in whichever notation reads best for its magnitude
pub struct DisplayProbability(pub f64);

impl Display for DisplayProbability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.0;
        if p >= 0.1 {
            write!(f, "{:.2}%", p * 100.0)
        } else if p >= 0.001 {
            write!(f, "{:.4}%", p * 100.0)
        } else {
            write!(f, "{p:.3e}")
        }
    }
}

/// Probability as a percentage, two decimals unless a precision is given
pub struct DisplayPercent(pub f64);

impl Display for DisplayPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}%", precision, self.0 * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityClass {
    High,
    Medium,
    Low,
}

impl ProbabilityClass {
    pub fn of(p: f64) -> Self {
        if p >= 0.1 {
            Self::High
        } else if p >= 0.01 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

// one fixed width line of the convergence table
impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<4} {:<8.2} {:<5} {:<11.2} {:<6.1} {:<8.2} {:<6.3}",
            self.dice,
            self.exact * 100.0,
            self.num_sums,
            self.birthday * 100.0,
            self.mean,
            self.std_dev,
            self.cv
        )
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:2} dice: {:+.3} pts", self.dice, self.delta)?;
        if let Some(relative) = self.relative {
            write!(f, " ({:+.2}% relative)", relative * 100.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn assert_eq<T, U>(expected: T) -> impl Fn(U)
    where
        T: std::fmt::Debug,
        U: PartialEq<T> + std::fmt::Debug,
    {
        move |actual| pretty_assertions::assert_eq!(actual, expected)
    }

    #[test_case(0.5 => using assert_eq("50.00%"))]
    #[test_case(0.1 => using assert_eq("10.00%"))]
    #[test_case(0.0123 => using assert_eq("1.2300%"))]
    #[test_case(0.001 => using assert_eq("0.1000%"))]
    #[test_case(0.000123 => using assert_eq("1.230e-4"))]
    fn probability(p: f64) -> String {
        DisplayProbability(p).to_string()
    }

    #[test_case(0.27777 => using assert_eq("27.78%"))]
    #[test_case(1.0 => using assert_eq("100.00%"))]
    fn percent(p: f64) -> String {
        DisplayPercent(p).to_string()
    }

    #[test]
    fn percent_precision() {
        pretty_assertions::assert_eq!(format!("{:.1}", DisplayPercent(0.27777)), "27.8%");
    }

    #[test_case(0.5 => ProbabilityClass::High)]
    #[test_case(0.05 => ProbabilityClass::Medium)]
    #[test_case(0.001 => ProbabilityClass::Low)]
    fn class(p: f64) -> ProbabilityClass {
        ProbabilityClass::of(p)
    }

    #[test]
    fn row() {
        let row = Row {
            dice: 1,
            exact: 360.0 / 1296.0,
            num_sums: 6,
            birthday: 360.0 / 1296.0,
            mean: 3.5,
            std_dev: 1.707825127659933,
            cv: 0.487950036474266,
        };
        pretty_assertions::assert_eq!(
            row.to_string(),
            "1    27.78    6     27.78       3.5    1.71     0.488 "
        );
    }

    #[test_case(Change { dice: 2, delta: 1.5, relative: Some(0.25) }
        => using assert_eq(" 2 dice: +1.500 pts (+25.00% relative)"))]
    #[test_case(Change { dice: 12, delta: -0.25, relative: None }
        => using assert_eq("12 dice: -0.250 pts"))]
    fn change(input: Change) -> String {
        input.to_string()
    }
}
