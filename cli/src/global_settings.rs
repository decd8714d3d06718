use anyhow::{bail, Result};
use chrono::{DateTime, Local, NaiveDate};
use clap::{arg, Arg, ArgMatches};
use std::path::PathBuf;
use tally_lib::expenses::parse_amount;
use tally_lib::formatters::Formatter;
use tally_lib::months::Month;
use tally_lib::settings::Settings;

pub struct GlobalSettings {
    // Files and budget, shared with the library
    pub settings: Settings,

    pub table: crate::tables::Settings,

    // How to display totals
    pub format: Formatter,

    // Reference time, from which we get the date of new expenses and the
    // current month.
    pub reftime: DateTime<Local>,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--expenses [FILE] "File where expenses are stored")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
            arg!(--recurring [FILE] "File of monthly recurring expenses")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
            arg!(--budget [AMOUNT] "Monthly budget").global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(path) = args.get_one::<PathBuf>("expenses") {
            settings.expense_path = path.clone();
        }
        if let Some(path) = args.get_one::<PathBuf>("recurring") {
            settings.recurring_path = path.clone();
        }
        if let Some(budget) = args.get_one::<String>("budget") {
            match parse_amount(budget) {
                Some(b) => settings.budget = b,
                None => bail!("Invalid budget {budget:?}"),
            }
        }

        Ok(GlobalSettings {
            settings,
            table: crate::tables::Settings::default(),
            format: Formatter::default(),
            reftime: Local::now(),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.reftime.date_naive()
    }

    pub fn current_month(&self) -> Month {
        Month::of(self.today())
    }
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crate::global_settings::GlobalSettings;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let args = build_cli().get_matches_from(["tally", "list"]);
        let s = GlobalSettings::new(&args).unwrap();
        assert_eq!(s.settings.expense_path, PathBuf::from("expense.csv"));
        assert_eq!(s.settings.recurring_path, PathBuf::from("recurring.csv"));
        assert_eq!(s.settings.budget, dec!(3000));
        assert_eq!(s.settings.alert_ratio, dec!(0.8));
    }

    #[test]
    fn test_switches() {
        let args = build_cli().get_matches_from([
            "tally",
            "status",
            "--budget",
            "1500.50",
            "--expenses",
            "/tmp/e.csv",
        ]);
        let s = GlobalSettings::new(&args).unwrap();
        assert_eq!(s.settings.expense_path, PathBuf::from("/tmp/e.csv"));
        assert_eq!(s.settings.budget, dec!(1500.50));

        let args =
            build_cli().get_matches_from(["tally", "list", "--budget", "lots"]);
        assert!(GlobalSettings::new(&args).is_err());
    }
}
