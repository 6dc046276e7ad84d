use crate::Result;

use lightorm_core::{driver::Cursor, Connection};

use std::ops::{Deref, DerefMut};

/// Keeps a connection open for the duration of one call.
///
/// If the connection was closed on entry, the scope opens it and closes it
/// again on drop. A connection that was already open is left alone.
#[derive(Debug)]
pub(crate) struct ConnectionScope<'a, C: Connection + ?Sized> {
    conn: &'a mut C,
    owned: bool,
}

impl<'a, C: Connection + ?Sized> ConnectionScope<'a, C> {
    pub(crate) fn acquire(conn: &'a mut C) -> Result<Self> {
        let owned = !conn.is_open();

        if owned {
            log::debug!("opening connection; provider={}", conn.provider());
            conn.open()?;
        }

        Ok(Self { conn, owned })
    }
}

impl<C: Connection + ?Sized> Deref for ConnectionScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.conn
    }
}

impl<C: Connection + ?Sized> DerefMut for ConnectionScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.conn
    }
}

impl<C: Connection + ?Sized> Drop for ConnectionScope<'_, C> {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }

        log::debug!("closing connection; provider={}", self.conn.provider());
        if let Err(err) = self.conn.close() {
            log::warn!("failed to close connection; error={err}");
        }
    }
}

/// Owns an open cursor and cancels the command behind it if the cursor is
/// dropped before it was drained.
#[derive(Debug)]
pub(crate) struct CursorGuard {
    cursor: Box<dyn Cursor>,
}

impl CursorGuard {
    pub(crate) fn new(cursor: Box<dyn Cursor>) -> Self {
        Self { cursor }
    }
}

impl Deref for CursorGuard {
    type Target = dyn Cursor;

    fn deref(&self) -> &(dyn Cursor + 'static) {
        &*self.cursor
    }
}

impl DerefMut for CursorGuard {
    fn deref_mut(&mut self) -> &mut (dyn Cursor + 'static) {
        &mut *self.cursor
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if self.cursor.is_closed() {
            return;
        }

        if let Err(err) = self.cursor.cancel() {
            log::warn!("failed to cancel command; error={err}");
        }
    }
}
