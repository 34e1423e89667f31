use std::io::{self, Write};
use std::marker::PhantomData;

use prettytable::{format, row, Row, Table};

use crate::display::ParticipantRow;

pub trait ToRow {
    fn columns() -> Row;
    fn to_row(&self) -> Row;
}

impl<'a> ToRow for ParticipantRow<'a> {
    fn columns() -> Row {
        row!["Neighbor", "Participant List", "Match"]
    }

    fn to_row(&self) -> Row {
        row![
            self.neighbor.to_string(),
            self.entry.list.to_string(),
            self.entry.match_type(),
        ]
    }
}

pub struct OutputTable<T: ToRow> {
    inner: Table,
    row_type: PhantomData<T>,
}

impl<T> OutputTable<T>
where
    T: ToRow,
{
    pub fn new() -> Self {
        let format = format::FormatBuilder::new()
            .padding(1, 1)
            .separator(
                format::LinePosition::Title,
                format::LineSeparator::new('-', '+', '+', '+'),
            )
            .build();
        let mut table = Table::new();
        table.set_format(format);
        table.set_titles(T::columns());
        Self {
            inner: table,
            row_type: PhantomData,
        }
    }

    pub fn add_row(&mut self, row: &T) {
        self.inner.add_row(row.to_row());
    }

    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.inner.print(out).map(|_| ())
    }
}
