use crate::{ExecLog, LoggingConnection, LoggingDriver};

use lightorm_driver_sqlite::Sqlite;
use tempfile::TempDir;

/// A SQLite database file that lives as long as the value.
#[derive(Debug)]
pub struct FileDb {
    pub driver: Sqlite,

    // Removed on drop
    _dir: TempDir,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A closed connection to a fresh in-memory database, plus its event log.
pub fn memory_db() -> (LoggingConnection, ExecLog) {
    logged(LoggingDriver::new(Sqlite::in_memory()))
}

/// A closed connection from `driver`, plus its event log.
pub fn logged(driver: LoggingDriver) -> (LoggingConnection, ExecLog) {
    init_logging();
    let conn = driver.logging_connection().unwrap();
    (conn, driver.log())
}

/// A fresh database file in a temporary directory.
pub fn file_db() -> FileDb {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let driver = Sqlite::open(dir.path().join("test.db"));
    FileDb { driver, _dir: dir }
}
