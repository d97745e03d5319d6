use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "crgms",
    about = "Charge microstate analysis of Monte-Carlo protonation runs",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reduce microstates to charge microstates and write them all, sorted
    #[command(visible_alias = "r")]
    Reduce(ReduceArgs),

    /// Reduce microstates and keep the N most frequent or most favorable
    #[command(visible_alias = "t")]
    Top(TopArgs),
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Command::Reduce(args) => &args.io,
            Command::Top(args) => &args.io,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Conformer table (MCCE head3.lst)
    #[arg(short, long, value_name = "FILE")]
    pub conformers: PathBuf,

    /// Microstate table, one `count E iconf...` row per sample (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report file(s), repeatable for multi-format output (stdout if omitted)
    #[arg(short, long, value_name = "FILE", action = clap::ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Report format for the first/only output (inferred from extension if omitted)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<ReportFormat>,

    /// Suppress banner, progress and summary tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Log reduction details to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Ranking options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Ranking")]
pub struct RankOptions {
    /// Ranking configuration file (TOML with a [rank] table)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Field to sort by
    #[arg(long = "sort-by", value_name = "KEY")]
    pub sort_by: Option<SortField>,

    /// Sort ascending (lowest first)
    #[arg(long, conflicts_with = "descending")]
    pub ascending: bool,

    /// Sort descending (highest first)
    #[arg(long)]
    pub descending: bool,
}

impl RankOptions {
    /// The explicitly requested direction, if any.
    pub fn direction(&self) -> Option<bool> {
        match (self.ascending, self.descending) {
            (true, _) => Some(false),
            (_, true) => Some(true),
            _ => None,
        }
    }
}

#[derive(Args)]
pub struct ReduceArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub rank: RankOptions,
}

#[derive(Args)]
pub struct TopArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub rank: RankOptions,

    /// Number of charge microstates to keep
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub n: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    /// Occurrence count
    Count,
    /// Count-weighted average energy
    #[value(name = "E", alias = "energy")]
    Energy,
    /// Sum of energy × count
    #[value(name = "total_E", alias = "total-energy")]
    TotalEnergy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One human-readable block per charge state
    #[value(alias = "txt")]
    Text,
    /// Tab-separated table
    Tsv,
    /// JSON array
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_top_with_energy_key() {
        let cli = Cli::try_parse_from([
            "crgms", "top", "-c", "head3.lst", "-i", "ms.txt", "-n", "5", "--sort-by", "E",
        ])
        .unwrap();
        let Command::Top(args) = cli.command else {
            panic!("expected top command");
        };
        assert_eq!(args.n, Some(5));
        assert_eq!(args.rank.sort_by, Some(SortField::Energy));
        assert_eq!(args.rank.direction(), None);
    }

    #[test]
    fn direction_flags_conflict() {
        let result = Cli::try_parse_from([
            "crgms",
            "reduce",
            "-c",
            "head3.lst",
            "--ascending",
            "--descending",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let result =
            Cli::try_parse_from(["crgms", "r", "-c", "head3.lst", "--sort-by", "occupancy"]);
        assert!(result.is_err());
    }

    #[test]
    fn conformer_table_is_required() {
        assert!(Cli::try_parse_from(["crgms", "reduce"]).is_err());
    }
}
