//! coverage-report: print the longest continuous coverage for a set of
//! day-numbered intervals.

use covrun::coverage::{merge_longest, Interval};
use covrun::report::{CoverageReport, ReportConfig};

/// Intervals reported when none are given on the command line.
const EXERCISE_DATA: [(u32, u32); 5] = [(1, 20), (21, 30), (28, 40), (50, 60), (61, 200)];

#[derive(clap::Parser, Debug)]
/// coverage-report: longest continuous coverage over day-numbered intervals.
struct Cli {
    /// Coverage intervals as START:END day numbers (1-based, inclusive).
    /// Defaults to the built-in exercise data.
    #[arg(value_parser = parse_interval)]
    intervals: Vec<Interval>,

    /// Year whose January 1st is day 1.
    #[arg(short, long, default_value_t = ReportConfig::DEFAULT_REFERENCE_YEAR)]
    year: i32,

    /// strftime-style pattern for printed dates.
    #[arg(long, default_value = ReportConfig::DEFAULT_DATE_FORMAT)]
    date_format: String,
}

fn parse_interval(arg: &str) -> Result<Interval, String> {
    let (start, end) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {arg:?}"))?;
    let start: u32 = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid start day {start:?}: {e}"))?;
    let end: u32 = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid end day {end:?}: {e}"))?;
    Interval::new(start, end).map_err(|e| e.to_string())
}

fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();

    let cli = Cli::parse();
    let intervals = if cli.intervals.is_empty() {
        log::info!("no intervals given; using built-in exercise data");
        EXERCISE_DATA
            .iter()
            .map(|&pair| Interval::try_from(pair))
            .collect::<Result<Vec<_>, _>>()
    } else {
        Ok(cli.intervals)
    };
    let intervals = match intervals {
        Ok(intervals) => intervals,
        Err(e) => {
            eprintln!("coverage-report: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let config = ReportConfig {
        reference_year: cli.year,
        date_format: cli.date_format,
    };
    let coverage = merge_longest(intervals);
    match CoverageReport::new(&coverage, &config).and_then(|report| report.render()) {
        Ok(text) => {
            print!("{text}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("coverage-report: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_end_pair() {
        assert_eq!(parse_interval("1:20"), Ok(Interval::new(1, 20).unwrap()));
        assert_eq!(parse_interval(" 5 : 9 "), Ok(Interval::new(5, 9).unwrap()));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_interval("1-20").unwrap_err().contains("START:END"));
    }

    #[test]
    fn rejects_non_numeric_day() {
        assert!(parse_interval("a:20").unwrap_err().contains("invalid start day"));
        assert!(parse_interval("1:").unwrap_err().contains("invalid end day"));
    }

    #[test]
    fn rejects_reversed_interval() {
        assert!(parse_interval("30:20")
            .unwrap_err()
            .contains("start must be <= end"));
    }

    #[test]
    fn exercise_data_is_valid() {
        let parsed: Vec<Interval> = EXERCISE_DATA
            .iter()
            .map(|&pair| Interval::try_from(pair).unwrap())
            .collect();
        assert_eq!(merge_longest(parsed).longest_length(), 151);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_accepts_year_and_intervals() {
        use clap::Parser;
        let cli = Cli::try_parse_from(["coverage-report", "--year", "2021", "1:20", "31:50"]).unwrap();
        assert_eq!(cli.year, 2021);
        assert_eq!(cli.intervals.len(), 2);
        assert_eq!(cli.date_format, ReportConfig::DEFAULT_DATE_FORMAT);
    }
}
