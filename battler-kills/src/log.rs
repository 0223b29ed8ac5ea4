use std::str::FromStr;

use ahash::HashMap;
use anyhow::{
    Error,
    Result,
};

use crate::SideId;

/// The name of a Mon, part of a [`LogRecord`].
///
/// Formatted as `p1a: Nickname`, where the trailing slot letter is only present for Mons that are
/// active on the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonName {
    pub side: SideId,
    pub slot: Option<char>,
    pub name: String,
}

impl FromStr for MonName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the first colon only, since the nickname could contain one.
        let (token, name) = s
            .split_once(':')
            .ok_or_else(|| Error::msg("missing side token"))?;
        let side = token.parse()?;
        let slot = token.chars().nth(2).filter(|c| c.is_ascii_alphabetic());
        let name = name.trim_start();
        if name.is_empty() {
            return Err(Error::msg("missing name"));
        }
        Ok(Self {
            side,
            slot,
            name: name.to_owned(),
        })
    }
}

/// The details of a Mon, part of a [`LogRecord`].
///
/// Formatted as `Species, L50, M, shiny`. Only the species is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonDetails {
    pub species: String,
}

impl FromStr for MonDetails {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let species = s.split(',').next().unwrap_or_default().trim();
        if species.is_empty() {
            return Err(Error::msg("missing species"));
        }
        Ok(Self {
            species: species.to_owned(),
        })
    }
}

/// A single record of a battle [`Log`].
///
/// Records are pipe-delimited. The first value is the record title. Values of the form
/// `[key] value` are tags, and every other value is a positional argument.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogRecord {
    title: String,
    args: Vec<String>,
    tags: HashMap<String, String>,
}

impl LogRecord {
    /// The record title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All positional arguments in the record.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|s| s.as_str())
    }

    /// Returns a positional argument out of the record.
    pub fn arg_ref(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|s| s.as_str())
    }

    /// Parses a positional argument out of the record.
    pub fn arg<T>(&self, index: usize) -> Option<T>
    where
        T: FromStr,
    {
        self.args.get(index).and_then(|arg| arg.parse().ok())
    }

    /// Parses a positional argument out of the record.
    pub fn arg_or_else<T>(&self, index: usize) -> Result<T>
    where
        T: FromStr,
        T::Err: Into<Error>,
    {
        self.args
            .get(index)
            .ok_or_else(|| Error::msg(format!("missing argument {index}")))?
            .parse()
            .map_err(Into::into)
    }

    /// Returns a tag value out of the record.
    ///
    /// Tags without a value map to the empty string.
    pub fn tag(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(|s| s.as_str())
    }
}

impl FromStr for LogRecord {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end_matches(['\r', '\n']);
        let mut values = s.strip_prefix('|').unwrap_or(s).split('|');
        let title = values.next().unwrap_or_default().to_owned();
        let mut args = Vec::new();
        let mut tags = HashMap::default();
        for value in values {
            match value
                .strip_prefix('[')
                .and_then(|value| value.split_once(']'))
            {
                Some((key, tag)) => {
                    tags.insert(key.to_owned(), tag.trim().to_owned());
                }
                None => args.push(value.to_owned()),
            }
        }
        Ok(Self { title, args, tags })
    }
}

/// A full battle log.
#[derive(Debug, Default)]
pub struct Log {
    records: Vec<LogRecord>,
}

impl Log {
    /// Creates a new log over an iterator of lines.
    ///
    /// Blank lines are skipped.
    pub fn new<I, T>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let records = iter
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref();
                (!line.trim().is_empty()).then(|| line.parse())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    /// Creates a new log from newline-delimited text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(text.lines())
    }

    /// The number of records in the log.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the log has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all log records.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}
