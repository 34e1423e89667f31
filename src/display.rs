use std::io::{self, Write};
use std::net::IpAddr;
use std::str::FromStr;

use serde::Serialize;

use crate::aggregate::AggregateTable;
use crate::models::ParticipantEntry;

/// How the final neighbor table is rendered
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"<neighbor>", ("<list>", <exact>)},` rows, for pasting into an array initializer
    Initializer,
    #[cfg(feature = "cli")]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "initializer" => Ok(OutputFormat::Initializer),
            #[cfg(feature = "cli")]
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: '{}'", s)),
        }
    }
}

/// One neighbor row of the final output
#[derive(Serialize, Debug)]
pub struct ParticipantRow<'a> {
    pub neighbor: &'a IpAddr,
    #[serde(flatten)]
    pub entry: &'a ParticipantEntry,
}

impl<'a> ParticipantRow<'a> {
    pub fn initializer(&self) -> String {
        format!("{{\"{}\", {}}},", self.neighbor, self.entry)
    }
}

fn rows(table: &AggregateTable) -> impl Iterator<Item = ParticipantRow<'_>> {
    table
        .entries()
        .map(|(neighbor, entry)| ParticipantRow { neighbor, entry })
}

pub fn write_table<W: Write>(
    table: &AggregateTable,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Initializer => {
            for row in rows(table) {
                writeln!(out, "{}", row.initializer())?;
            }
        }
        #[cfg(feature = "cli")]
        OutputFormat::Table => {
            let mut output = crate::table::OutputTable::new();
            for row in rows(table) {
                output.add_row(&row);
            }
            output.write(out)?;
        }
        OutputFormat::Json => {
            let rows: Vec<_> = rows(table).collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Suffixes;
    use crate::models::PolicyName;
    use crate::parse::FileContribution;

    fn table() -> AggregateTable {
        let suffixes = Suffixes::default();
        let contribution: FileContribution = vec![
            (
                "2001:db8::1".parse::<IpAddr>().unwrap(),
                ParticipantEntry::new(PolicyName::from("FOO-IN").participant_list(&suffixes), true),
            ),
            (
                "192.0.2.1".parse::<IpAddr>().unwrap(),
                ParticipantEntry::new(PolicyName::from("BAR-IN").participant_list(&suffixes), false),
            ),
        ]
        .into_iter()
        .collect();
        let mut table = AggregateTable::new();
        table.merge(contribution);
        table
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_table(&table(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_initializer() {
        assert_eq!(
            render(OutputFormat::Initializer),
            "{\"192.0.2.1\", (\"BAR-PARTICIPANT\", false)},\n{\"2001:db8::1\", (\"FOO-PARTICIPANT\", true)},\n"
        );
    }

    #[test]
    fn test_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"neighbor": "192.0.2.1", "participant_list": "BAR-PARTICIPANT", "exact": false},
                {"neighbor": "2001:db8::1", "participant_list": "FOO-PARTICIPANT", "exact": true},
            ])
        );
    }

    #[test]
    fn test_empty_table() {
        let mut out = Vec::new();
        write_table(&AggregateTable::new(), OutputFormat::Initializer, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(
            "Initializer".parse::<OutputFormat>(),
            Ok(OutputFormat::Initializer)
        );
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_table() {
        let rendered = render(OutputFormat::Table);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Neighbor"));
        assert!(lines[2].contains("192.0.2.1"));
        assert!(lines[2].contains("orlonger"));
        assert!(lines[3].contains("FOO-PARTICIPANT"));
        assert!(lines[3].contains("exact"));
    }
}
