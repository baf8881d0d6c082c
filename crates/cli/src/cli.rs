use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Preventive-maintenance rotation for the facility monitoring wall.
///
/// Reads a `PmRotation` catalog and shows which assets are due for which
/// team on a given day, week or date range.
#[derive(Parser, Debug)]
#[command(name = "opswall-rota", version, about)]
pub struct CliArgs {
    /// Catalog file (default: data/catalog/pm-rotation.yml)
    #[arg(long, global = true, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show the ISO week and rotation slot of a date
    Resolve {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Look up a slot directly by cycle week (1-4) and day name (SENIN..JUMAT)
    Lookup {
        week: u32,
        day: String,
    },
    /// Today's maintenance assignments
    Today {
        /// Pretend today is this date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Monday to Friday of the week containing a date
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Every day between two dates, inclusive
    Range {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// Check the catalog and report errors and warnings
    Validate,
    /// Show the effective configuration after env and flags
    Config,
    /// Keep today's view on screen, reloading when the catalog changes
    Watch {
        /// Redraw interval in seconds (default: WALL_REFRESH_SECS)
        #[arg(long)]
        refresh: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("opswall-rota").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn today_with_date_override() {
        let args = parse(&["today", "--date", "2025-01-06"]);
        assert_eq!(
            args.command,
            Command::Today {
                date: NaiveDate::from_ymd_opt(2025, 1, 6)
            }
        );
        assert!(!args.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = parse(&["week", "--json", "--catalog", "/srv/rota.yml"]);
        assert!(args.json);
        assert_eq!(args.catalog, Some(PathBuf::from("/srv/rota.yml")));
        assert_eq!(args.command, Command::Week { date: None });
    }

    #[test]
    fn lookup_takes_positional_week_and_day() {
        let args = parse(&["lookup", "2", "SENIN"]);
        assert_eq!(
            args.command,
            Command::Lookup {
                week: 2,
                day: "SENIN".into()
            }
        );
    }

    #[test]
    fn range_requires_both_dates() {
        assert!(CliArgs::try_parse_from(["opswall-rota", "range", "--from", "2025-01-01"]).is_err());
        let args = parse(&["range", "--from", "2025-01-01", "--to", "2025-01-31"]);
        assert!(matches!(args.command, Command::Range { .. }));
    }

    #[test]
    fn config_subcommand_accepts_catalog_override() {
        let args = parse(&["config", "--catalog", "/srv/rota.yml", "--json"]);
        assert_eq!(args.command, Command::Config);
        assert_eq!(args.catalog, Some(PathBuf::from("/srv/rota.yml")));
        assert!(args.json);
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(CliArgs::try_parse_from(["opswall-rota", "today", "--date", "06-01-2025"]).is_err());
    }
}
