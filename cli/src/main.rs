use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use distinct_sums_core as core;
use distinct_sums_core::{experiments, report};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Parser)]
#[command(about = "Odds that four people rolling dice all get different sums")]
struct Args {
    /// Analyze every dice count from 1 up to this
    #[arg(long, short, default_value_t = core::DEFAULT_MAX_DICE)]
    max_dice: u32,

    /// Number of people rolling, for the report
    #[arg(long, short, default_value_t = core::DEFAULT_PEOPLE)]
    people: u32,

    /// Sides on each die
    #[arg(long, short, default_value_t = core::DEFAULT_SIDES,
          value_parser = clap::value_parser!(u8).range(1..))]
    sides: u8,

    /// Width of the chart bars
    #[arg(long, short, default_value_t = core::DEFAULT_CHART_WIDTH)]
    width: usize,

    /// Don't color the section headings
    #[arg(long)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the full analysis report (default)
    Report,

    /// How often one face comes up over several rolls of a six-sided die
    SingleDie {
        #[arg(long, default_value_t = 10)]
        rolls: u32,

        /// Face to count
        #[arg(long, default_value_t = 6)]
        target: u8,
    },

    /// Distribution of the sum of several dice
    Sum {
        #[arg(long, default_value_t = 2)]
        dice: u32,

        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..))]
        sides: u8,

        /// Sum to highlight
        #[arg(long, default_value_t = 7)]
        target: u32,
    },

    /// Chance of rolling the same face several times in a row
    Consecutive {
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..))]
        sides: u8,

        /// Length of the run
        #[arg(long, default_value_t = 3)]
        count: u32,

        /// Face that has to repeat
        #[arg(long, default_value_t = 6)]
        target: u8,
    },

    /// Uniform approximation of everyone getting different sums, person by person
    AllDifferent {
        #[arg(long, default_value_t = core::DEFAULT_PEOPLE)]
        people: u32,

        /// Dice rolled by each person
        #[arg(long, default_value_t = 3)]
        dice: u32,
    },

    /// Monte-Carlo check of the exact probability
    Simulate {
        #[arg(long, default_value_t = core::DEFAULT_PEOPLE)]
        people: u32,

        /// Dice rolled by each person
        #[arg(long, default_value_t = 3)]
        dice: u32,

        #[arg(long, default_value_t = 100_000)]
        trials: u64,

        /// Set seed for the RNG
        #[arg(long)]
        seed: Option<core::Seed>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        None | Some(Command::Report) => print_report(&args)?,
        Some(Command::SingleDie { rolls, target }) => {
            print_experiment(&experiments::single_die(rolls, target)?, &args);
        }
        Some(Command::Sum {
            dice,
            sides,
            target,
        }) => {
            let dice = core::Dice::new(dice, sides);
            print_experiment(&experiments::sum_distribution(dice, target)?, &args);
        }
        Some(Command::Consecutive {
            sides,
            count,
            target,
        }) => {
            print_experiment(&experiments::consecutive(sides, count, target)?, &args);
        }
        Some(Command::AllDifferent { people, dice }) => {
            let dice = core::Dice::new(dice, args.sides);
            print_experiment(&experiments::all_different(people, dice)?, &args);
        }
        Some(Command::Simulate {
            people,
            dice,
            trials,
            seed,
        }) => {
            if trials == 0 {
                anyhow::bail!("At least 1 trial must be run");
            }
            let dice = core::Dice::new(dice, args.sides);
            run_simulation(dice, people, trials, seed, &args)?;
        }
    }

    Ok(())
}

fn print_heading(title: &str, args: &Args) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{rule}");
    if args.plain {
        println!("{title}");
    } else {
        println!("{}", title.bold());
    }
    println!("{rule}");
}

fn print_report(args: &Args) -> anyhow::Result<()> {
    if args.max_dice == 0 {
        anyhow::bail!("At least 1 die must be analyzed");
    }

    let config = core::AnalysisConfig {
        dice: 1..=args.max_dice,
        sides: args.sides,
        num_people: args.people,
        chart_width: args.width,
    };

    for section in report::full_report(&config)? {
        print_heading(&section.title, args);
        print!("{}", section.body);
    }

    Ok(())
}

fn print_experiment(experiment: &experiments::Experiment, args: &Args) {
    print_heading(&experiment.title, args);
    for line in &experiment.summary {
        println!("{line}");
    }
    println!();

    let label_width = experiment
        .outcomes
        .iter()
        .map(|o| o.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Outcome".len());

    println!(
        "{:<label_width$}  {:<12}  {:<10}",
        "Outcome", "Probability", "Decimal"
    );
    println!("{}", "-".repeat(label_width + 2 + 12 + 2 + 10));
    for outcome in &experiment.outcomes {
        let probability = format!("{:<12}", core::DisplayProbability(outcome.probability));
        let probability = if args.plain {
            probability
        } else {
            match core::ProbabilityClass::of(outcome.probability) {
                core::ProbabilityClass::High => probability.green().to_string(),
                core::ProbabilityClass::Medium => probability.yellow().to_string(),
                core::ProbabilityClass::Low => probability.red().to_string(),
            }
        };
        println!(
            "{:<label_width$}  {probability}  {:.6}",
            outcome.label, outcome.probability
        );
    }

    // bars start at zero like a regular column chart
    println!();
    println!("{}", experiment.chart_title);
    println!("{}", "-".repeat(RULE_WIDTH));
    let chart = core::BarChart::new(args.width, core::BarChart::SOLID);
    let max = experiment
        .outcomes
        .iter()
        .map(|o| o.probability)
        .fold(0.0, f64::max);
    let short_width = experiment
        .outcomes
        .iter()
        .map(|o| o.short_label.chars().count())
        .max()
        .unwrap_or(0);
    for outcome in &experiment.outcomes {
        println!(
            "{:>short_width$} |{:<width$}| {}",
            outcome.short_label,
            chart.bar(outcome.probability, 0.0, max),
            core::DisplayProbability(outcome.probability),
            width = args.width
        );
    }
}

fn run_simulation(
    dice: core::Dice,
    people: u32,
    trials: u64,
    seed: Option<core::Seed>,
    args: &Args,
) -> anyhow::Result<()> {
    let exact = core::exact_probability(dice, people)?;

    let mut rng = match seed {
        Some(seed) => core::Rng::from_seed(seed),
        None => core::Rng::new(),
    };
    let sim = core::simulate(dice, people, trials, &mut rng);

    print_heading("MONTE-CARLO CHECK", args);
    print!("{people} people rolling {dice}");
    print!(" | trials: {}", sim.trials);
    print!(" | seed: {}", sim.seed);
    println!();
    println!();
    println!("Simulated: {}", core::DisplayPercent(sim.estimate()));
    println!("Exact:     {}", core::DisplayPercent(exact.probability));
    println!(
        "Difference: {:+.3} pts",
        (sim.estimate() - exact.probability) * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommands_take_their_own_people() {
        let args = Args::try_parse_from(["distinct-sums", "simulate", "--people", "3"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Simulate { people: 3, dice: 3, trials: 100_000, seed: None })
        ));

        let args =
            Args::try_parse_from(["distinct-sums", "all-different", "--people", "5"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::AllDifferent { people: 5, dice: 3 })
        ));
    }

    #[test]
    fn no_arguments_is_the_report() {
        let args = Args::try_parse_from(["distinct-sums"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.people, core::DEFAULT_PEOPLE);
        assert_eq!(args.max_dice, core::DEFAULT_MAX_DICE);
    }
}
