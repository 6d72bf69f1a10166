use daytime::{Duration, TimeOfDay};
use tracing::debug;

use crate::{config::DemoConfig, report::Report};

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Format, compare and combine the configured sample values
    Demo,
    /// The time of day a duration after TIME (HH:MM:SS + H:MM:SS)
    Plus { time: TimeOfDay, duration: Duration },
    /// The time of day a duration before TIME (HH:MM:SS - H:MM:SS)
    Minus { time: TimeOfDay, duration: Duration },
    /// The sum of two durations
    Sum { a: Duration, b: Duration },
    /// The absolute difference between two durations
    Diff { a: Duration, b: Duration },
    /// A duration multiplied by a whole number
    Scale {
        duration: Duration,
        #[arg(allow_negative_numbers = true)]
        factor: i64,
    },
    /// The chronological order of two times of day
    Compare { a: TimeOfDay, b: TimeOfDay },
}

impl Command {
    pub fn execute(&self, demo: &DemoConfig) -> Result<Report, daytime::Error> {
        debug!(command = ?self, "executing");

        let mut report = Report::default();

        match *self {
            Command::Demo => return demo_report(demo),
            Command::Plus { time, duration } => {
                report.push("Arithmetic", format!("{time} + {duration}"), time + duration)
            }
            Command::Minus { time, duration } => {
                report.push("Arithmetic", format!("{time} - {duration}"), time - duration)
            }
            Command::Sum { a, b } => report.push("Arithmetic", format!("{a} + {b}"), a + b),
            Command::Diff { a, b } => report.push("Arithmetic", format!("{a} - {b}"), a - b),
            Command::Scale { duration, factor } => report.push(
                "Arithmetic",
                format!("{duration} * {factor}"),
                duration.multiply(factor)?,
            ),
            Command::Compare { a, b } => report.push(
                "Compare",
                format!("{a} <=> {b}"),
                format!("{:?}", a.compare(&b)),
            ),
        }

        Ok(report)
    }
}

fn demo_report(demo: &DemoConfig) -> Result<Report, daytime::Error> {
    let mut report = Report::default();

    for time in &demo.times {
        let expression = format!("{}h {}m {}s", time.hours(), time.minutes(), time.seconds());
        report.push("Format", expression, time);
    }
    for duration in &demo.durations {
        let expression = format!("{}s", duration.total_seconds());
        report.push("Format", expression, duration);
    }

    for pair in demo.times.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        report.push("Equality", format!("{a} == {b}"), a == b);
        report.push("Equality", format!("{a} != {b}"), a != b);
        let parsed = a.to_string().parse::<TimeOfDay>();
        report.push("Equality", format!("{a} == \"{a}\""), parsed == Ok(a));
    }
    for pair in demo.durations.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        report.push("Equality", format!("{a} == {b}"), a == b);
        report.push("Equality", format!("{a} != {b}"), a != b);
        let parsed = a.to_string().parse::<Duration>();
        report.push("Equality", format!("{a} == \"{a}\""), parsed == Ok(a));
    }

    for pair in demo.times.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        report.push("Compare", format!("{a} < {b}"), a < b);
        report.push("Compare", format!("{a} > {b}"), a > b);
    }
    for pair in demo.durations.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        report.push("Compare", format!("{a} < {b}"), a < b);
        report.push("Compare", format!("{a} > {b}"), a > b);
    }

    for pair in demo.times.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        report.push("Arithmetic", format!("{b} + {a}"), b + a);
        report.push("Arithmetic", format!("{b} - {a}"), b - a);
    }
    for &time in &demo.times {
        for &duration in &demo.durations {
            report.push("Arithmetic", format!("{time} + {duration}"), time.plus(duration));
            report.push("Arithmetic", format!("{time} - {duration}"), time.minus(duration));
        }
    }
    for pair in demo.durations.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        report.push("Arithmetic", format!("{a} + {b}"), a + b);
        report.push("Arithmetic", format!("{a} - {b}"), a - b);
    }
    for &duration in &demo.durations {
        let factor = demo.factor;
        report.push("Arithmetic", format!("{duration} * {factor}"), duration.multiply(factor)?);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(command: Command) -> String {
        let report = command.execute(&DemoConfig::default()).unwrap();
        assert_eq!(report.entries.len(), 1);
        report.entries[0].result.clone()
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn d(s: &str) -> Duration {
        s.parse().unwrap()
    }

    #[test]
    fn single_operations() {
        assert_eq!(
            result(Command::Plus {
                time: t("23:00:00"),
                duration: d("2:30:00")
            }),
            "01:30:00"
        );
        assert_eq!(
            result(Command::Minus {
                time: t("00:00:00"),
                duration: d("47:59:59")
            }),
            "00:00:01"
        );
        assert_eq!(
            result(Command::Sum {
                a: d("23:59:59"),
                b: d("0:00:01")
            }),
            "24:00:00"
        );
        assert_eq!(
            result(Command::Diff {
                a: d("1:00:00"),
                b: d("24:00:00")
            }),
            "23:00:00"
        );
        assert_eq!(
            result(Command::Scale {
                duration: d("1:30:00"),
                factor: 3
            }),
            "4:30:00"
        );
        assert_eq!(
            result(Command::Compare {
                a: t("12:12:12"),
                b: t("00:00:00")
            }),
            "Greater"
        );
    }

    #[test]
    fn negative_scale_fails() {
        let command = Command::Scale {
            duration: d("1:00:00"),
            factor: -1,
        };
        assert_eq!(
            command.execute(&DemoConfig::default()),
            Err(daytime::Error::OutOfRange)
        );
    }

    #[test]
    fn default_demo() {
        fn find<'a>(report: &'a Report, expression: &str) -> Option<&'a str> {
            report
                .entries
                .iter()
                .find(|entry| entry.expression == expression)
                .map(|entry| entry.result.as_str())
        }

        let report = Command::Demo.execute(&DemoConfig::default()).unwrap();
        let lookup = |expression| find(&report, expression);

        assert_eq!(lookup("12:12:12 == 00:00:00"), Some("false"));
        assert_eq!(lookup("12:12:12 != 00:00:00"), Some("true"));
        assert_eq!(lookup("12h 12m 12s"), Some("12:12:12"));
        assert_eq!(lookup("86400s"), Some("24:00:00"));
        assert_eq!(lookup("1:00:00 == \"1:00:00\""), Some("true"));
        assert_eq!(lookup("12:12:12 < 00:00:00"), Some("false"));
        assert_eq!(lookup("1:00:00 < 24:00:00"), Some("true"));
        assert_eq!(lookup("00:00:00 + 12:12:12"), Some("12:12:12"));
        assert_eq!(lookup("00:00:00 - 12:12:12"), Some("11:47:48"));
        assert_eq!(lookup("12:12:12 + 1:00:00"), Some("13:12:12"));
        assert_eq!(lookup("00:00:00 - 1:00:00"), Some("23:00:00"));
        assert_eq!(lookup("1:00:00 + 24:00:00"), Some("25:00:00"));
        assert_eq!(lookup("1:00:00 - 24:00:00"), Some("23:00:00"));
        assert_eq!(lookup("24:00:00 * 2"), Some("48:00:00"));
    }

    #[test]
    fn demo_with_negative_factor_fails() {
        let demo = DemoConfig {
            factor: -2,
            ..DemoConfig::default()
        };
        assert_eq!(
            Command::Demo.execute(&demo),
            Err(daytime::Error::OutOfRange)
        );
    }

    #[test]
    fn parse_arguments() {
        use clap::Parser;

        #[derive(clap::Parser, Debug)]
        struct Cli {
            #[command(subcommand)]
            command: Command,
        }

        let cli = Cli::try_parse_from(["daytime", "scale", "1:00:00", "-3"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Scale {
                duration: d("1:00:00"),
                factor: -3
            }
        );

        assert!(Cli::try_parse_from(["daytime", "plus", "1:00:00", "1:00:00"]).is_err());
        assert!(Cli::try_parse_from(["daytime", "sum", "00:00:00", "1:00:00"]).is_err());
    }
}
