//! Interactive menu driving the record store
//!
//! Reads a choice per line, asks for the key, answers through the matching
//! retrieval path and reports the elapsed time. End of input quits.

use crate::config::OutputFormat;
use crate::error::StoreResult;
use crate::record::Record;
use crate::store::{RecordStore, SearchKind, timed};
use crate::types::{Lookup, NAME_LENGTH_MAX, TELEPHONE_LENGTH};
use log::info;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Action picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run a query
    Search(SearchKind),
    /// Leave the menu
    Quit,
}

impl MenuChoice {
    /// Parse the first character of a line, `None` for anything unknown
    pub fn parse(line: &str) -> Option<Self> {
        match line.chars().next()? {
            '1' => Some(MenuChoice::Search(SearchKind::LastNameScan)),
            '2' => Some(MenuChoice::Search(SearchKind::LastNameSorted)),
            '3' => Some(MenuChoice::Search(SearchKind::FirstName)),
            '4' => Some(MenuChoice::Search(SearchKind::Telephone)),
            'q' => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Cut a line at its first line terminator
pub fn clean_newline(line: &str) -> &str {
    let end = line.find(['\n', '\r']).unwrap_or(line.len());
    &line[..end]
}

/// Keep at most `width` characters of a field
pub fn truncate_field(field: &str, width: usize) -> &str {
    match field.char_indices().nth(width) {
        Some((end, _)) => &field[..end],
        None => field,
    }
}

/// Print the list of choices
pub fn print_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "\nWhat do you want to do ?")?;
    for (key, kind) in [
        ('1', SearchKind::LastNameScan),
        ('2', SearchKind::LastNameSorted),
        ('3', SearchKind::FirstName),
        ('4', SearchKind::Telephone),
    ] {
        writeln!(output, "\t{}: {}", key, kind)?;
    }
    writeln!(output, "\tq: Quit")
}

fn prompt(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::LastNameScan | SearchKind::LastNameSorted => "Which last name ?",
        SearchKind::FirstName => "Which first name ?",
        SearchKind::Telephone => "Which number ?",
    }
}

fn key_width(kind: SearchKind) -> usize {
    match kind {
        SearchKind::Telephone => TELEPHONE_LENGTH,
        _ => NAME_LENGTH_MAX,
    }
}

#[derive(Serialize)]
struct JsonResults<'a> {
    search: String,
    key: &'a str,
    found: bool,
    records: &'a [&'a Record],
    elapsed_ms: f64,
}

/// Menu session over a store
pub struct Menu<'a, R, W> {
    store: &'a RecordStore,
    format: OutputFormat,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a RecordStore, format: OutputFormat, input: R, output: W) -> Self {
        Self {
            store,
            format,
            input,
            output,
        }
    }

    /// Loop until `q` or end of input
    pub fn run(&mut self) -> StoreResult<()> {
        loop {
            print_menu(&mut self.output)?;
            write!(self.output, "\n>")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => return Ok(()),
                Some(MenuChoice::Search(kind)) => {
                    if !self.search(kind)? {
                        return Ok(());
                    }
                }
                None => {}
            }
        }
    }

    /// Run one query, `false` when input ended before the key was read
    fn search(&mut self, kind: SearchKind) -> StoreResult<bool> {
        writeln!(self.output, "{}", kind)?;
        write!(self.output, "{}\n>", prompt(kind))?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let key = truncate_field(&line, key_width(kind));

        let store = self.store;
        let (outcome, elapsed) = timed(|| store.search(kind, key));
        info!("{} for {:?} took {:?}", kind, key, elapsed);

        render(&mut self.output, self.format, kind, key, &outcome, elapsed)?;
        Ok(true)
    }

    fn read_line(&mut self) -> StoreResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(clean_newline(&buf).to_string()))
    }
}

/// Write the outcome of one query
pub fn render<W: Write>(
    output: &mut W,
    format: OutputFormat,
    kind: SearchKind,
    key: &str,
    outcome: &Lookup<'_>,
    elapsed: Duration,
) -> StoreResult<()> {
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

    match format {
        OutputFormat::Text => {
            writeln!(output, "\nResults:")?;
            match outcome {
                Lookup::Found(records) => {
                    for record in records {
                        writeln!(output, "{}", record)?;
                    }
                }
                Lookup::NotFound => writeln!(output, "{} not found !", kind.label())?,
            }
            writeln!(output, "({:.3} ms)", elapsed_ms)?;
        }
        OutputFormat::Json => {
            let results = JsonResults {
                search: kind.to_string(),
                key,
                found: !outcome.is_not_found(),
                records: outcome.records(),
                elapsed_ms,
            };
            writeln!(output)?;
            serde_json::to_writer(&mut *output, &results)?;
            writeln!(output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
