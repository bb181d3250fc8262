use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use gridstar_paths::Heuristic;

#[derive(Parser)]
#[command(name = "gridstar", version, about = "Find shortest paths on grid maps")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a text map containing one `S` start and one `G` goal.
    ///
    /// `#` marks an obstacle and `.` an open cell.
    Solve {
        /// Map file, or `-` to read standard input.
        map: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a random map, then solve it from the top-left corner to the
    /// bottom-right corner.
    Random {
        #[arg(long, default_value_t = 20)]
        width: i32,

        #[arg(long, default_value_t = 10)]
        height: i32,

        /// Probability that a cell is an obstacle.
        #[arg(long, default_value_t = 0.25, value_parser = parse_density)]
        density: f64,

        /// Seed for a reproducible layout.
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(ClapArgs, Clone, Debug)]
pub struct OutputArgs {
    /// Remaining-cost estimate used by the search.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    pub heuristic: HeuristicArg,

    /// Print the path coordinates after the map.
    #[arg(long)]
    pub points: bool,

    /// List coordinates from goal to start instead of start to goal.
    ///
    /// Applies to `--points` and `--json` output.
    #[arg(long)]
    pub goal_first: bool,

    /// Colorize the map.
    #[arg(long)]
    pub color: bool,

    /// Emit a JSON report instead of the drawn map.
    #[arg(long, conflicts_with_all = ["color", "points"])]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicArg {
    Manhattan,
    Octile,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Octile => Heuristic::Octile,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("density must be between 0 and 1, got {d}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn density_bounds() {
        assert_eq!(parse_density("0.4"), Ok(0.4));
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("x").is_err());
    }

    #[test]
    fn goal_first_help_names_affected_outputs() {
        let cmd = Args::command();
        let solve = cmd.find_subcommand("solve").unwrap();
        let arg = solve
            .get_arguments()
            .find(|a| a.get_id() == "goal_first")
            .unwrap();
        let help = arg.get_long_help().unwrap().to_string();
        assert!(help.contains("--points"));
        assert!(help.contains("--json"));
    }

    #[test]
    fn parses_solve_options() {
        let args = Args::parse_from(["gridstar", "solve", "map.txt", "--heuristic", "octile"]);
        let Commands::Solve { map, output } = args.command else {
            panic!("expected solve");
        };
        assert_eq!(map, PathBuf::from("map.txt"));
        assert_eq!(Heuristic::from(output.heuristic), Heuristic::Octile);
        assert!(!output.json);
    }
}
