//! Line commands understood by the console.

use anyhow::{Context as _, Result, bail};
use tempo_entry::{ColumnKind, StepDirection, TimeField, TimeValuePatch};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Characters fed one by one to the key handler.
    Keys(String),
    /// A stepper press.
    Step(ColumnKind, StepDirection),
    /// Move the cursor.
    Cursor(TimeField),
    /// Programmatic overwrite.
    Set(TimeValuePatch),
    /// Show or hide the picker.
    Visible(bool),
    /// Print the body columns.
    Columns,
    /// Print the command list.
    Help,
    /// Leave the console.
    Quit,
}

pub const HELP: &str = "\
commands:
  <keys>          type characters, e.g. 0930
  +h -h +m -m +s -s +p -p
                  step hours, minutes, seconds or period
  @h @m @s        move the cursor
  set HH[:MM[:SS]] [AM|PM]
                  overwrite the time
  show | hide     toggle visibility
  columns         print the picker body
  help | quit";

impl Command {
    /// Parses one trimmed, non-empty line.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("set ") {
            let patch = rest
                .parse::<TimeValuePatch>()
                .with_context(|| format!("cannot parse time `{rest}`"))?;
            return Ok(Command::Set(patch));
        }

        match line {
            "show" => return Ok(Command::Visible(true)),
            "hide" => return Ok(Command::Visible(false)),
            "columns" => return Ok(Command::Columns),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(sign @ ('+' | '-')), Some(target), None) => {
                let direction = if sign == '+' {
                    StepDirection::Increment
                } else {
                    StepDirection::Decrement
                };
                let column = match target {
                    'p' => ColumnKind::Period,
                    other => ColumnKind::Field(field(other)?),
                };
                Ok(Command::Step(column, direction))
            }
            (Some('@'), Some(target), None) => Ok(Command::Cursor(field(target)?)),
            (Some(_), _, _) => Ok(Command::Keys(line.to_string())),
            (None, _, _) => bail!("empty command"),
        }
    }
}

fn field(c: char) -> Result<TimeField> {
    match c {
        'h' => Ok(TimeField::Hours),
        'm' => Ok(TimeField::Minutes),
        's' => Ok(TimeField::Seconds),
        other => bail!("unknown field `{other}`, expected h, m or s"),
    }
}
