mod args;
mod expenses_view;
mod global_settings;
mod status_view;
pub mod tables;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use tally_lib::expenses::{ExpenseForm, ExpenseRow};
use tally_lib::months::Month;
use tally_lib::store::Loaded;
use tally_lib::tracker::Tracker;

/// The value of an optional string argument, or "" if not given
fn value<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("", String::as_str)
}

fn show_expenses(
    loaded: &Loaded<ExpenseRow>,
    settings: &GlobalSettings,
    raw_amounts: bool,
) -> String {
    let mut out = crate::expenses_view::expenses_view(
        &loaded.rows,
        crate::expenses_view::Settings {
            raw_amounts,
            table: settings.table.clone(),
        },
    );
    if loaded.skipped > 0 {
        out.push_str(&format!(
            "{} malformed line(s) ignored\n",
            loaded.skipped
        ));
    }
    out
}

fn read_all(tracker: &Tracker) -> Result<Loaded<ExpenseRow>> {
    tracker.read_all().with_context(|| {
        format!("Cannot read {}", tracker.expenses().path().display())
    })
}

fn total(tracker: &Tracker, settings: &GlobalSettings) -> Result<String> {
    Ok(crate::status_view::total_line(
        &tracker.total_spent()?,
        &settings.format,
    ))
}

fn budget_alert(
    tracker: &Tracker,
    settings: &GlobalSettings,
    month: Month,
) -> Result<String> {
    Ok(match tracker.check_budget_alert(month)? {
        None => String::new(),
        Some(alert) => crate::status_view::alert_line(&alert, &settings.format),
    })
}

fn add(
    tracker: &Tracker,
    settings: &GlobalSettings,
    args: &ArgMatches,
) -> Result<String> {
    let row = tracker.save(
        ExpenseForm {
            name: value(args, "name"),
            amount: value(args, "amount"),
            category: value(args, "category"),
        },
        settings.today(),
    )?;
    info!("saved {row}");

    let mut out = "Expense saved successfully!\n".to_string();
    out.push_str(&show_expenses(&read_all(tracker)?, settings, false));
    out.push_str(&total(tracker, settings)?);
    out.push_str(&budget_alert(tracker, settings, settings.current_month())?);
    Ok(out)
}

fn delete(
    tracker: &Tracker,
    settings: &GlobalSettings,
    args: &ArgMatches,
) -> Result<String> {
    let row = ExpenseRow::new(
        value(args, "DATE"),
        value(args, "NAME"),
        value(args, "AMOUNT"),
        value(args, "CATEGORY"),
    );
    let removed = if args.get_flag("first") {
        tracker.delete_first_matching(&row)?
    } else {
        tracker.delete_matching(&row)?
    };
    info!("deleted {removed} expense(s) matching {row}");

    let mut out = if removed > 1 {
        format!("{removed} expenses deleted successfully!\n")
    } else {
        "Expense deleted successfully!\n".to_string()
    };
    out.push_str(&total(tracker, settings)?);
    Ok(out)
}

fn recurring(tracker: &Tracker, settings: &GlobalSettings) -> Result<String> {
    let month = settings.current_month();
    match tracker.apply_recurring(month).with_context(|| {
        format!(
            "Cannot apply recurring expenses from {}",
            tracker.recurring().path().display()
        )
    })? {
        None => {
            debug!("no recurring expenses file");
            Ok(String::new())
        }
        Some(count) => {
            info!("{count} recurring expense(s) added for {month}");
            Ok("Recurring expenses added!\n".to_string())
        }
    }
}

fn status(
    tracker: &Tracker,
    settings: &GlobalSettings,
    args: &ArgMatches,
) -> Result<String> {
    let month = match args.get_one::<String>("month") {
        Some(m) => m.parse::<Month>()?,
        None => settings.current_month(),
    };
    let mut out = total(tracker, settings)?;
    out.push_str(&crate::status_view::month_line(
        month,
        &tracker.month_spent(month)?,
        tracker.budget(),
        &settings.format,
    ));
    out.push_str(&budget_alert(tracker, settings, month)?);
    Ok(out)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args = build_cli().get_matches();
    let settings = GlobalSettings::new(&args)?;
    let tracker = Tracker::new(&settings.settings);

    let output = match args.subcommand() {
        Some(("add", sub)) => add(&tracker, &settings, sub)?,
        Some(("list", sub)) => {
            let mut out =
                show_expenses(&read_all(&tracker)?, &settings, sub.get_flag("raw"));
            out.push_str(&total(&tracker, &settings)?);
            out
        }
        Some(("search", sub)) => {
            let found = tracker.search(value(sub, "TERM"))?;
            show_expenses(&found, &settings, sub.get_flag("raw"))
        }
        Some(("delete", sub)) => delete(&tracker, &settings, sub)?,
        Some(("recurring", _)) => recurring(&tracker, &settings)?,
        Some(("status", sub)) => status(&tracker, &settings, sub)?,
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
            String::new()
        }
        Some((name, _)) => anyhow::bail!("Unknown command {name}"),
        None => anyhow::bail!("No command given"),
    };

    print!("{output}");
    Ok(())
}
