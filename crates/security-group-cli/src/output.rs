/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::fs::File;
use std::io::Write;

use clap::ValueEnum;
use prettytable::{Cell, Row, Table, row};
use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

use crate::errors::{SecurityGroupCliError, SecurityGroupCliResult};

#[derive(PartialEq, Eq, ValueEnum, Clone, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    Json,
    Csv,
    AsciiTable,
    Yaml,
}

/// Destination is used to determine whether CLI output is going to a file
/// path or stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Path(String),
    Stdout,
}

impl From<Option<String>> for Destination {
    fn from(path: Option<String>) -> Self {
        match path {
            Some(path) => Destination::Path(path),
            None => Destination::Stdout,
        }
    }
}

/// The result of one command: a single record, a list of records, or
/// nothing at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    ShowOne {
        columns: Vec<&'static str>,
        data: Vec<String>,
    },
    Lister {
        columns: Vec<&'static str>,
        rows: Vec<Vec<String>>,
    },
    Empty,
}

// Serializes one row as a map keeping the column order.
struct Record<'a> {
    columns: &'a [&'static str],
    values: &'a [String],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for CommandOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CommandOutput::ShowOne { columns, data } => Record {
                columns,
                values: data,
            }
            .serialize(serializer),
            CommandOutput::Lister { columns, rows } => {
                let mut seq = serializer.serialize_seq(Some(rows.len()))?;
                for row in rows {
                    seq.serialize_element(&Record {
                        columns,
                        values: row,
                    })?;
                }
                seq.end()
            }
            CommandOutput::Empty => serializer.serialize_unit(),
        }
    }
}

impl CommandOutput {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        match self {
            CommandOutput::ShowOne { columns, data } => {
                table.set_titles(row!["Field", "Value"]);
                for (column, value) in columns.iter().zip(data) {
                    table.add_row(row![column, value]);
                }
            }
            CommandOutput::Lister { columns, rows } => {
                table.set_titles(Row::new(columns.iter().map(|c| Cell::new(c)).collect()));
                for values in rows {
                    table.add_row(Row::new(values.iter().map(|v| Cell::new(v)).collect()));
                }
            }
            CommandOutput::Empty => {}
        }
        table
    }
}

/// Renders a command result in the requested format. `Empty` renders to
/// `None`.
pub fn format_output(
    output: &CommandOutput,
    format: &OutputFormat,
) -> SecurityGroupCliResult<Option<String>> {
    if *output == CommandOutput::Empty {
        return Ok(None);
    }
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(output)?,
        OutputFormat::Yaml => serde_yaml::to_string(output)?,
        OutputFormat::AsciiTable => output.to_table().to_string(),
        OutputFormat::Csv => {
            let writer = output
                .to_table()
                .to_csv(Vec::new())
                .map_err(|e| SecurityGroupCliError::CsvError(e.to_string()))?;
            let bytes = writer
                .into_inner()
                .map_err(|e| SecurityGroupCliError::CsvError(e.to_string()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
    };
    Ok(Some(rendered))
}

pub fn cli_output(
    output: &CommandOutput,
    format: &OutputFormat,
    destination: Destination,
) -> SecurityGroupCliResult<()> {
    let Some(rendered) = format_output(output, format)? else {
        return Ok(());
    };

    match destination {
        Destination::Path(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?
        }
        Destination::Stdout => println!("{}", rendered),
    }

    Ok(())
}
