use super::style::{Tone, UiStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub align: Align,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Right,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub tone: Option<Tone>,
}

/// Simple table model used for rendering read-only reports.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.push_row(cells, None);
    }

    pub fn add_toned_row<S: Into<String>>(&mut self, cells: Vec<S>, tone: Tone) {
        self.push_row(cells, Some(tone));
    }

    fn push_row<S: Into<String>>(&mut self, cells: Vec<S>, tone: Option<Tone>) {
        self.rows.push(TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
            tone,
        });
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.cells.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Renders [`Table`] instances as padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table, style: &UiStyle) -> String {
        let widths = table.widths();
        let mut out = String::new();

        if let Some(title) = &table.title {
            out.push_str(&style.header(title));
            out.push('\n');
        }

        if !table.columns.is_empty() {
            let total_width = widths.iter().map(|w| w + 2).sum::<usize>();
            let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
            out.push_str(&style.horizontal_line(total_width));
            out.push('\n');
            out.push_str(&style.header(&Self::line(&table.columns, &widths, &headers)));
            out.push('\n');
            out.push_str(&style.horizontal_line(total_width));
            out.push('\n');
        }

        for row in &table.rows {
            let cells: Vec<&str> = (0..table.columns.len())
                .map(|idx| row.cells.get(idx).map(String::as_str).unwrap_or(""))
                .collect();
            let line = Self::line(&table.columns, &widths, &cells);
            match row.tone {
                Some(tone) => out.push_str(&style.tone(&line, tone)),
                None => out.push_str(&line),
            }
            out.push('\n');
        }
        out
    }

    fn line(columns: &[TableColumn], widths: &[usize], cells: &[&str]) -> String {
        let padded: Vec<String> = columns
            .iter()
            .zip(widths)
            .zip(cells)
            .map(|((column, width), cell)| match column.align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    }
}
