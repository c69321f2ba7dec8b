mod command;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use tempo_entry::{
    DayPeriod, FieldSet, TimeField, TimeFormat, TimePicker, TimePickerArgs, TimeValuePatch,
    provide_time_picker, use_time_picker,
};
use tracing::{info, warn};

use crate::command::{Command, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// 12-hour clock with AM/PM.
    AmPm,
    /// 24-hour clock.
    #[value(name = "24h")]
    TwentyFourHour,
}

impl From<FormatArg> for TimeFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::AmPm => TimeFormat::AmPm,
            FormatArg::TwentyFourHour => TimeFormat::TwentyFourHour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldArg {
    Hours,
    Minutes,
    Seconds,
}

impl From<FieldArg> for TimeField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Hours => TimeField::Hours,
            FieldArg::Minutes => TimeField::Minutes,
            FieldArg::Seconds => TimeField::Seconds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PeriodArg {
    Am,
    Pm,
}

/// Edit a time from the terminal, one command per line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Clock format.
    #[arg(long, value_enum, default_value_t = FormatArg::AmPm)]
    format: FormatArg,
    /// Fields to show and edit.
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [FieldArg::Hours, FieldArg::Minutes, FieldArg::Seconds]
    )]
    fields: Vec<FieldArg>,
    /// Initial hour.
    #[arg(long)]
    hour: Option<u8>,
    /// Initial minute.
    #[arg(long)]
    minute: Option<u8>,
    /// Initial second.
    #[arg(long)]
    second: Option<u8>,
    /// Initial period for the 12-hour clock.
    #[arg(long, value_enum)]
    period: Option<PeriodArg>,
}

impl Cli {
    fn picker_args(&self) -> TimePickerArgs {
        let fields: FieldSet = self.fields.iter().copied().map(TimeField::from).collect();
        let default_time = TimeValuePatch {
            hours: self.hour,
            minutes: self.minute,
            seconds: self.second,
            period: self.period.map(|p| match p {
                PeriodArg::Am => DayPeriod::Am,
                PeriodArg::Pm => DayPeriod::Pm,
            }),
        };
        TimePickerArgs::new(fields)
            .format(self.format.into())
            .default_time(default_time)
            .on_time_change(|time| info!(?time, "time changed"))
            .on_visibility_change(|visible| info!(visible, "visibility changed"))
    }
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("off,tempo_entry=info,tempo_console=info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let picker = TimePicker::new(cli.picker_args());
    picker.set_visible(true);

    provide_time_picker(picker, run)
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;
    render(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!("{err:#}");
                writeln!(stdout, "{}", format!("error: {err:#}").red())?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(command, &mut stdout)?;
        render(&mut stdout)?;
    }
    Ok(())
}

fn execute(command: Command, out: &mut impl Write) -> Result<()> {
    let picker = use_time_picker();
    match command {
        Command::Keys(keys) => {
            for key in keys.chars() {
                let outcome = picker.handle_key_outcome(key);
                if !outcome.handled() {
                    writeln!(out, "{}", format!("{key:?}: {outcome:?}").yellow())?;
                }
            }
        }
        Command::Step(column, direction) => picker.step(column, direction),
        Command::Cursor(field) => picker.set_cursor(field),
        Command::Set(patch) => picker.set_time(patch),
        Command::Visible(visible) => picker.set_visible(visible),
        Command::Columns => {
            for column in picker.columns() {
                let marker = if column.is_cursor { ">" } else { " " };
                writeln!(out, "{marker} {:<8} {}", column.label, column.value)?;
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn render(out: &mut impl Write) -> Result<()> {
    let picker = use_time_picker();
    if !picker.is_visible() {
        writeln!(out, "{}", "(hidden)".dimmed())?;
        return Ok(());
    }

    let highlighted = picker.format_with_highlight();
    let display = match highlighted.range.clone() {
        Some(range) => {
            let field_text = &highlighted.display[range.clone()];
            format!(
                "{}{}{}",
                &highlighted.display[..range.start],
                field_text.reversed().bold(),
                &highlighted.display[range.end..],
            )
        }
        None => highlighted.display.clone(),
    };
    let buffer = picker.with(|s| s.buffer.to_string());
    writeln!(
        out,
        "{display}    {}  [{:?} {}]",
        picker.format_plain(None).dimmed(),
        highlighted.field,
        if buffer.is_empty() { "-" } else { buffer.as_str() },
    )?;
    Ok(())
}
