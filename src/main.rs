//! Timetabling CLI: runs the genetic search and prints the best timetable.
//!
//! Usage:
//!   u-timetable [--subjects 8 --timeslots 20 ...] [--seed 42] [-v]

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use u_timetable::ga::GaConfig;
use u_timetable::timetable::{self, fitness, Clash, ProblemBounds};

#[derive(Parser)]
#[command(name = "u-timetable")]
#[command(about = "Assign subjects to teachers, time slots and rooms with a genetic algorithm")]
struct Args {
    /// Individuals per generation
    #[arg(long, default_value_t = 100)]
    population_size: usize,

    /// Number of generations to run
    #[arg(long, default_value_t = 500)]
    generations: usize,

    /// Probability of recombining two parents
    #[arg(long, default_value_t = 0.8)]
    crossover_rate: f64,

    /// Probability of mutating an offspring
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Best individuals copied unchanged into the next generation
    #[arg(long, default_value_t = 0)]
    elite_count: usize,

    #[arg(long, default_value_t = 5)]
    subjects: usize,

    #[arg(long, default_value_t = 36)]
    timeslots: usize,

    #[arg(long, default_value_t = 5)]
    rooms: usize,

    #[arg(long, default_value_t = 5)]
    teachers: usize,

    /// Seed for a reproducible run (default: derived from the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn ga_config(&self) -> GaConfig {
        // Rates are passed through unclamped so that validation reports them.
        GaConfig {
            population_size: self.population_size,
            generations: self.generations,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            elite_count: self.elite_count,
            seed: self.seed,
        }
    }

    fn bounds(&self) -> ProblemBounds {
        ProblemBounds {
            num_subjects: self.subjects,
            num_timeslots: self.timeslots,
            num_rooms: self.rooms,
            num_teachers: self.teachers,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let result = timetable::solve(&args.bounds(), &args.ga_config()).context("invalid configuration")?;

    println!("Best schedule with fitness = {}:", result.best_fitness);
    print!("{}", result.best);

    for conflict in fitness::conflicts(&result.best) {
        let what = match conflict.clash {
            Clash::Teacher => "teacher",
            Clash::Room => "room",
            Clash::TeacherAndRoom => "teacher and room",
        };
        println!(
            "Conflict: subjects {} and {} share {} in slot {}",
            conflict.first, conflict.second, what, conflict.time_slot
        );
    }

    if let Some(seed) = result.seed {
        println!("Seed: {seed}");
    }

    Ok(())
}
