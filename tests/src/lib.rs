mod exec_log;
pub use exec_log::{Event, ExecLog};

mod logging_driver;
pub use logging_driver::{LoggingConnection, LoggingDriver};

mod setup;
pub use setup::{file_db, logged, memory_db, FileDb};
