use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};
use tally_lib::categories::Category;

pub(crate) fn build_cli() -> Command {
    Command::new("tally")
        .version("0.1")
        .about("Keep track of your expenses")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("add")
                .about("Record an expense, dated today")
                .arg(arg!(--name [NAME] "Name of the expense"))
                .arg(arg!(--amount [AMOUNT] "How much was spent"))
                .arg(
                    arg!(--category [CATEGORY] "Category of the expense")
                        .long_help(format!(
                            "One of {}",
                            Category::ALL.map(|c| c.name()).join(", ")
                        )),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Show all expenses")
                .arg(arg!(--raw "Show amounts exactly as stored")),
        )
        .subcommand(
            Command::new("search")
                .about("Show expenses where any field contains TERM")
                .arg(arg!([TERM] "Text to search for, ignoring case"))
                .arg(arg!(--raw "Show amounts exactly as stored")),
        )
        .subcommand(
            Command::new("delete")
                .about(
                    "Delete expenses, given all their fields as shown by \
                     `list --raw`",
                )
                .arg(arg!(<DATE> "Date of the expense"))
                .arg(arg!(<NAME> "Name of the expense"))
                .arg(arg!(<AMOUNT> "Amount, as stored"))
                .arg(arg!(<CATEGORY> "Category of the expense"))
                .arg(arg!(--first "Only delete the first matching expense")),
        )
        .subcommand(
            Command::new("recurring")
                .about("Add the recurring expenses for the current month"),
        )
        .subcommand(
            Command::new("status")
                .about("Show total spent and the budget status")
                .arg(arg!(--month [MONTH] "Month to check, as YYYY-MM")),
        )
        .subcommand(
            // Use    eval "$(tally completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
