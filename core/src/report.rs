//! The sections of the full console report, in print order
//!
//! Every section is rendered to plain text, the driver decides how to frame and style the
//! titles.

use std::fmt::Write;

use crate::{
    analyze, approx::normal_heuristic, birthday_approximation, chart, stats::DistributionStats,
    Analysis, AnalysisConfig, Dice, DisplayPercent, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
        }
    }
}

pub fn full_report(config: &AnalysisConfig) -> Result<Vec<Section>> {
    let analysis = analyze(config)?;

    Ok(vec![
        convergence_table(&analysis)?,
        rate_of_change(&analysis)?,
        formula_derivation(analysis.sides, analysis.num_people)?,
        asymptotic_behavior(&analysis)?,
        probability_chart(&analysis, config.chart_width)?,
        change_chart(&analysis, config.chart_width)?,
        key_insights(&analysis)?,
    ])
}

pub fn convergence_table(analysis: &Analysis) -> Result<Section> {
    let mut section = Section::new("MATHEMATICAL ANALYSIS: Why Does Probability Plateau?");
    let o = &mut section.body;

    writeln!(
        o,
        "{:<4} {:<8} {:<5} {:<11} {:<6} {:<8} {:<6}",
        "Dice", "Exact %", "Sums", "Birthday %", "Mean", "StdDev", "CV"
    )?;
    writeln!(o, "{}", "-".repeat(65))?;
    for row in &analysis.rows {
        writeln!(o, "{row}")?;
    }

    Ok(section)
}

pub fn rate_of_change(analysis: &Analysis) -> Result<Section> {
    let mut section = Section::new("RATE OF CHANGE");
    let o = &mut section.body;

    let changes = analysis.changes();
    if changes.is_empty() {
        writeln!(o, "Not enough dice counts to compare")?;
        return Ok(section);
    }

    writeln!(o, "Gain in exact probability from each extra die:")?;
    for change in &changes {
        writeln!(o, "{change}")?;
    }

    let largest = changes
        .iter()
        .max_by(|a, b| a.delta.total_cmp(&b.delta))
        .copied();
    let last = changes.last().copied();
    if let (Some(largest), Some(last)) = (largest, last) {
        writeln!(o)?;
        writeln!(
            o,
            "Largest gain: {:+.3} pts going to {} dice",
            largest.delta, largest.dice
        )?;
        writeln!(
            o,
            "Last gain: {:+.3} pts going to {} dice",
            last.delta, last.dice
        )?;
    }

    Ok(section)
}

pub fn formula_derivation(sides: u8, num_people: u32) -> Result<Section> {
    let mut section = Section::new("MATHEMATICAL FORMULA DERIVATION");
    let o = &mut section.body;

    let s = sides;
    let p = num_people;
    let per_die = DistributionStats::for_dice(Dice::new(1, sides));
    let variance_numerator = (u32::from(s) * u32::from(s)).saturating_sub(1);
    let spread = u32::from(s).saturating_sub(1);

    writeln!(o, "EXACT FORMULA:")?;
    writeln!(o, "P(all different) = Σ[C(n,{p}) × ∏f(si) × {p}!] / ({s}^k)^{p}")?;
    writeln!(o)?;
    writeln!(o, "Where:")?;
    writeln!(o, "• n = number of possible sums with k dice")?;
    writeln!(o, "• C(n,{p}) = combinations of choosing {p} different sums")?;
    writeln!(o, "• f(si) = frequency of sum si when rolling k dice")?;
    writeln!(o, "• {p}! = permutations (which person gets which sum)")?;
    writeln!(o, "• ({s}^k)^{p} = total possible outcomes for {p} people")?;
    writeln!(o)?;

    writeln!(o, "SUM RANGE:")?;
    writeln!(o, "• Minimum sum: k (all dice show 1)")?;
    writeln!(o, "• Maximum sum: {s}k (all dice show {s})")?;
    writeln!(o, "• Number of possible sums: {spread}k + 1")?;
    writeln!(o, "• Mean sum: {}k", per_die.mean)?;
    writeln!(
        o,
        "• Standard deviation: √({variance_numerator}k/12) ≈ {:.2}√k",
        per_die.std_dev
    )?;
    writeln!(o)?;

    writeln!(o, "WHY IT PLATEAUS:")?;
    writeln!(
        o,
        "1. As k increases, number of possible sums grows linearly: ~{spread}k"
    )?;
    writeln!(o, "2. But the distribution becomes MORE concentrated around the mean")?;
    writeln!(
        o,
        "3. Coefficient of variation DECREASES: CV = {:.2}√k / {}k = {:.2}/√k",
        per_die.std_dev, per_die.mean, per_die.cv
    )?;
    writeln!(
        o,
        "4. So even though there are more possible sums, they're less evenly distributed"
    )?;
    writeln!(o, "5. The 'effective' number of likely sums grows slower than the total")?;
    writeln!(o)?;

    writeln!(o, "APPROXIMATION FOR LARGE k:")?;
    writeln!(
        o,
        "When k is large, most probability mass is concentrated near {}k",
        per_die.mean
    )?;
    writeln!(
        o,
        "The effective range is roughly ±3σ = ±3√({variance_numerator}k/12)"
    )?;
    writeln!(o, "P(all different) ≈ 1 - e^(-effective_sums²/8)")?;
    writeln!(o, "This converges to a limit as k → ∞")?;

    Ok(section)
}

const ASYMPTOTIC_DICE: [u32; 8] = [5, 10, 20, 50, 100, 200, 500, 1000];

/// Larger dice counts, where only the approximations are cheap enough to compute
pub fn asymptotic_behavior(analysis: &Analysis) -> Result<Section> {
    let mut section = Section::new("ASYMPTOTIC BEHAVIOR (heuristic, unverified)");
    let o = &mut section.body;

    writeln!(
        o,
        "The normal column is a rough heuristic from the 6σ width of the sum distribution."
    )?;
    writeln!(
        o,
        "It is not derived from, or checked against, the exact calculation."
    )?;
    writeln!(o)?;
    writeln!(
        o,
        "{:<5} {:<6} {:<8} {:<11} {:<8}",
        "Dice", "Sums", "Exact %", "Birthday %", "Normal %"
    )?;
    writeln!(o, "{}", "-".repeat(42))?;

    for count in ASYMPTOTIC_DICE {
        let dice = Dice::new(count, analysis.sides);
        let num_sums = dice.num_sums();
        let exact = analysis
            .rows
            .iter()
            .find(|row| row.dice == count)
            .map(|row| format!("{:.2}", row.exact * 100.0))
            .unwrap_or_else(|| "-".to_owned());
        let birthday = birthday_approximation(num_sums, analysis.num_people);
        let normal = normal_heuristic(dice, analysis.num_people)
            .map(|p| format!("{:.2}", p * 100.0))
            .unwrap_or_else(|| "-".to_owned());

        writeln!(
            o,
            "{:<5} {:<6} {:<8} {:<11.2} {:<8}",
            count,
            num_sums,
            exact,
            birthday * 100.0,
            normal
        )?;
    }

    writeln!(o)?;
    writeln!(
        o,
        "Both approximations head to 100% as k grows, the exact values climb toward them slowly."
    )?;

    Ok(section)
}

pub fn probability_chart(analysis: &Analysis, width: usize) -> Result<Section> {
    let mut section = Section::new("VISUALIZATION: PROBABILITY CURVE");
    chart::probability_chart(&mut section.body, analysis, width)?;
    Ok(section)
}

pub fn change_chart(analysis: &Analysis, width: usize) -> Result<Section> {
    let mut section = Section::new("RATE OF CHANGE VISUALIZATION");
    chart::change_chart(&mut section.body, analysis, width)?;
    Ok(section)
}

pub fn key_insights(analysis: &Analysis) -> Result<Section> {
    let mut section = Section::new("KEY INSIGHTS");
    let o = &mut section.body;

    let s = analysis.sides;
    let p = analysis.num_people;
    let spread = u32::from(s).saturating_sub(1);

    writeln!(
        o,
        "1. Formula: P = Σ[C({spread}k+1,{p}) × ∏f(si) × {p}!] / ({s}^k)^{p}"
    )?;
    writeln!(o, "2. More dice = more possible sums, but less uniform distribution")?;
    writeln!(o, "3. Coefficient of variation decreases as 1/√k")?;
    match (analysis.rows.first(), analysis.rows.last()) {
        (Some(first), Some(last)) if first.dice != last.dice => writeln!(
            o,
            "4. Probability increases but with diminishing returns: {} at {} dice, {} at {} dice",
            DisplayPercent(first.exact),
            first.dice,
            DisplayPercent(last.exact),
            last.dice
        )?,
        _ => writeln!(o, "4. Probability increases but with diminishing returns")?,
    }
    writeln!(o, "5. Practical plateau reached around 20-30 dice")?;
    writeln!(o, "6. Theoretical limit approaches 100% as k → ∞")?;
    writeln!(
        o,
        "7. The trade-off: More sums available vs. more concentrated distribution"
    )?;

    Ok(section)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn analysis() -> Analysis {
        analyze(&AnalysisConfig {
            dice: 1..=5,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn full_report_section_order() {
        let sections = full_report(&AnalysisConfig {
            dice: 1..=3,
            ..Default::default()
        })
        .unwrap();
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "MATHEMATICAL ANALYSIS: Why Does Probability Plateau?",
                "RATE OF CHANGE",
                "MATHEMATICAL FORMULA DERIVATION",
                "ASYMPTOTIC BEHAVIOR (heuristic, unverified)",
                "VISUALIZATION: PROBABILITY CURVE",
                "RATE OF CHANGE VISUALIZATION",
                "KEY INSIGHTS",
            ]
        );
    }

    #[test]
    fn convergence_table_rows() {
        let section = convergence_table(&analysis()).unwrap();
        let lines: Vec<&str> = section.body.lines().collect();

        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(
            lines[0],
            "Dice Exact %  Sums  Birthday %  Mean   StdDev   CV    "
        );
        assert_eq!(lines[1], "-".repeat(65));
        assert!(lines[2].starts_with("1    27.78    6     27.78       3.5    1.71     0.488"));

        let sums: Vec<&str> = lines[2..]
            .iter()
            .map(|line| line.split_whitespace().nth(2).unwrap())
            .collect();
        assert_eq!(sums, vec!["6", "11", "16", "21", "26"]);
    }

    #[test]
    fn formula_for_d6() {
        let section = formula_derivation(6, 4).unwrap();
        let body = section.body;
        assert!(body.contains("P(all different) = Σ[C(n,4) × ∏f(si) × 4!] / (6^k)^4"));
        assert!(body.contains("• Number of possible sums: 5k + 1"));
        assert!(body.contains("• Mean sum: 3.5k"));
        assert!(body.contains("• Standard deviation: √(35k/12) ≈ 1.71√k"));
        assert!(body.contains("CV = 1.71√k / 3.5k = 0.49/√k"));
    }

    #[test]
    fn formula_for_d10() {
        let body = formula_derivation(10, 3).unwrap().body;
        assert!(body.contains("/ (10^k)^3"));
        assert!(body.contains("• Number of possible sums: 9k + 1"));
        assert!(body.contains("• Mean sum: 5.5k"));
        assert!(body.contains("√(99k/12)"));
    }

    #[test]
    fn asymptotic_reuses_exact_rows() {
        let body = asymptotic_behavior(&analysis()).unwrap().body;
        let five = body
            .lines()
            .find(|line| line.starts_with("5 "))
            .unwrap()
            .to_owned();
        let exact = format!("{:.2}", analysis().rows[4].exact * 100.0);
        assert!(five.contains(&exact), "{five}");

        let thousand = body.lines().find(|line| line.starts_with("1000")).unwrap();
        assert_eq!(thousand.split_whitespace().nth(2), Some("-"));
    }

    #[test]
    fn rate_of_change_lines() {
        let body = rate_of_change(&analysis()).unwrap().body;
        assert!(body.starts_with("Gain in exact probability from each extra die:\n 2 dice: +"));
        assert!(body.contains("Last gain: "));
    }

    #[test]
    fn rate_of_change_single_row() {
        let single = analyze(&AnalysisConfig {
            dice: 1..=1,
            ..Default::default()
        })
        .unwrap();
        let body = rate_of_change(&single).unwrap().body;
        assert_eq!(body, "Not enough dice counts to compare\n");
    }

    #[test]
    fn insights_quote_range() {
        let body = key_insights(&analysis()).unwrap().body;
        assert!(body.contains("1. Formula: P = Σ[C(5k+1,4) × ∏f(si) × 4!] / (6^k)^4"));
        assert!(body.contains("27.78% at 1 dice"));
    }
}
