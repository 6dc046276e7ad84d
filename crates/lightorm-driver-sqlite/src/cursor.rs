use lightorm_core::{
    driver::{Column, Cursor, Row},
    Result,
};

use std::collections::VecDeque;

/// Cursor over rows read eagerly from a finished statement.
///
/// Statements borrow their connection, so rows are buffered before the
/// cursor is handed out. Cancelling discards whatever has not been read.
#[derive(Debug)]
pub(crate) struct BufferedCursor {
    columns: Vec<Column>,
    rows: VecDeque<Row>,
    closed: bool,
}

impl BufferedCursor {
    pub(crate) fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows: rows.into(),
            closed: false,
        }
    }
}

impl Cursor for BufferedCursor {
    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn next(&mut self) -> Result<Option<Row>> {
        let row = self.rows.pop_front();
        if row.is_none() {
            self.closed = true;
        }
        Ok(row)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn cancel(&mut self) -> Result<()> {
        if !self.rows.is_empty() {
            log::trace!("discarding {} unread rows", self.rows.len());
        }
        self.rows.clear();
        self.closed = true;
        Ok(())
    }
}
