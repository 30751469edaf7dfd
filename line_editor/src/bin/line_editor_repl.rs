// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small REPL to try out the line editor. Every line is echoed back, except for the
//! commands listed by `info`. <kbd>Ctrl+C</kbd> or <kbd>Ctrl+D</kbd> quits.

use clap::Parser;
use r3bl_line_editor::{Console, CrosstermTerminal, LineEditorConfig, ReadlineEvent,
                       TerminalError, TerminalPort, TracingConfig};
use std::{ops::ControlFlow, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

const PROMPT: &str = "> ";

fn main() -> miette::Result<()> {
    let cli_arg = clap_config::CLIArg::parse();

    if cli_arg.enable_logging {
        TracingConfig::new_file(cli_arg.log_file.clone()).install_global()?;
    }

    let config = LineEditorConfig::default()
        .history_max_size(cli_arg.history_size)
        .tab_width(cli_arg.tab_width);

    let mut console = Console::new(CrosstermTerminal::try_new()?, config);
    for command in Command::iter() {
        console.line_editor.history.add(&command.to_string());
    }

    console.write_line(&get_info_message())?;
    run_repl(&mut console)?;

    Ok(())
}

/// More info:
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumString.html>
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumIter.html>
#[derive(Debug, PartialEq, EnumString, EnumIter, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
enum Command {
    Info,
    History,
    ClearHistory,
    Exit,
}

fn get_info_message() -> String {
    let available_commands = Command::iter().map(|it| it.to_string()).collect::<Vec<_>>();
    format!("Type anything to have it echoed back. Commands: {available_commands:?}")
}

fn run_repl<T: TerminalPort>(console: &mut Console<T>) -> Result<(), TerminalError> {
    loop {
        match console.read_line(PROMPT)? {
            ReadlineEvent::Line(line) => {
                if process(&line, console)?.is_break() {
                    break;
                }
            }
            ReadlineEvent::Eof => break,
        }
    }
    Ok(())
}

fn process<T: TerminalPort>(
    line: &str,
    console: &mut Console<T>,
) -> Result<ControlFlow<()>, TerminalError> {
    // Blank lines are skipped.
    if console.line_editor.line_state.index_of_first_non_whitespace().is_none() {
        return Ok(ControlFlow::Continue(()));
    }

    let Ok(command) = Command::from_str(line.trim()) else {
        console.write_line(&format!("echo: {line}"))?;
        return Ok(ControlFlow::Continue(()));
    };

    match command {
        Command::Info => console.write_line(&get_info_message())?,
        Command::History => {
            let history = &console.line_editor.history;
            if history.is_empty() {
                console.write_error("History is empty")?;
            } else {
                let entries = history
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| format!("{index:>3}  {entry}"))
                    .collect::<Vec<_>>();
                for entry in entries {
                    console.write_line(&entry)?;
                }
            }
        }
        Command::ClearHistory => {
            console.line_editor.history.clear();
            console.write_line("History cleared")?;
        }
        Command::Exit => return Ok(ControlFlow::Break(())),
    }

    Ok(ControlFlow::Continue(()))
}

mod clap_config {
    use clap::Parser;
    use r3bl_line_editor::{HISTORY_SIZE_MAX, TAB_WIDTH};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "line_editor_repl")]
    #[command(about = "Try out the line editor: cursor keys, history, wrapping")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArg {
        #[arg(long, short = 's', default_value_t = HISTORY_SIZE_MAX, help = "Number of lines kept in history")]
        pub history_size: usize,

        #[arg(long, short = 't', default_value_t = TAB_WIDTH, help = "Spaces inserted by the Tab key")]
        pub tab_width: usize,

        #[arg(long, short = 'l', help = "Log to a file for debugging")]
        pub enable_logging: bool,

        #[arg(long, requires = "enable_logging", help = "Path of the log file, defaults to `line_editor_log.txt`")]
        pub log_file: Option<String>,
    }
}
