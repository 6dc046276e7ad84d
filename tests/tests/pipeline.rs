use lightorm::{driver::Operation, stmt::Value, Connection, ConnectionExt};
use pretty_assertions::assert_eq;
use tests::{memory_db, Event};

fn seed(conn: &mut impl Connection) {
    conn.execute(
        "CREATE TABLE items (id INTEGER PRIMARY KEY, label TEXT, price REAL)",
        &(),
    )
    .unwrap();

    for (id, label, price) in [(1i64, "apple", 0.5), (2, "pear", 0.75), (3, "plum", 1.25)] {
        conn.execute(
            "INSERT INTO items (id, label, price) VALUES (?1, ?2, ?3)",
            &(id, label, price),
        )
        .unwrap();
    }
}

#[test]
fn query_on_closed_connection_opens_and_closes() {
    let (mut conn, log) = memory_db();
    assert!(!conn.is_open());

    let query = conn.query::<i64>("SELECT 1", &());
    assert!(!query.is_started());
    assert!(log.is_empty());

    let rows: Vec<i64> = query.collect::<Result<_, _>>().unwrap();
    assert_eq!(rows, vec![1]);

    assert!(!conn.is_open());
    assert_eq!(log.opens(), 1);
    assert_eq!(log.closes(), 1);
    assert_eq!(log.cancels(), 0);
}

#[test]
fn open_connection_is_left_open() {
    let (mut conn, log) = memory_db();
    conn.open().unwrap();
    seed(&mut conn);

    let count = conn.execute_scalar("SELECT count(*) FROM items", &()).unwrap();
    assert_eq!(count, Value::I64(3));

    assert!(conn.is_open());
    assert_eq!(log.opens(), 1);
    assert_eq!(log.closes(), 0);
}

#[test]
fn execute_reports_affected_rows() {
    let (mut conn, log) = memory_db();
    seed(&mut conn);

    let affected = conn
        .execute("UPDATE items SET price = price * 2 WHERE price < ?1", &(1.0,))
        .unwrap();
    assert_eq!(affected, 2);

    // One open/close bracket per call
    assert_eq!(log.opens(), log.closes());
    assert!(!conn.is_open());
}

#[test]
fn execute_accepts_row_returning_statements() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let affected = conn
        .execute(
            "INSERT INTO items (id, label, price) VALUES (?1, ?2, ?3) RETURNING id",
            &(4i64, "fig", 2.0),
        )
        .unwrap();
    assert_eq!(affected, 1);

    let affected = conn.execute("SELECT 1", &()).unwrap();
    assert_eq!(affected, 0);

    let count = conn.execute_scalar("SELECT count(*) FROM items", &()).unwrap();
    assert_eq!(count, Value::I64(4));
    assert!(!conn.is_open());
}

#[test]
fn scalar_of_empty_result_is_null() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let value = conn
        .execute_scalar("SELECT label FROM items WHERE id = ?1", &(99i64,))
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn reader_materializes_every_row() {
    let (mut conn, log) = memory_db();
    seed(&mut conn);

    let table = conn
        .execute_reader("SELECT id, label FROM items ORDER BY id", &())
        .unwrap();

    let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "label"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(1, "LABEL"), Some(&Value::from("pear")));
    assert_eq!(table.get(5, "label"), None);

    // Drained cursors are not cancelled
    assert_eq!(log.cancels(), 0);
    assert!(!conn.is_open());

    let first = table.into_rows().remove(0).into_values();
    assert_eq!(first, vec![Value::I64(1), Value::from("apple")]);
}

#[test]
fn query_is_lazy_and_streams_rows() {
    let (mut conn, log) = memory_db();
    seed(&mut conn);
    log.clear();

    let labels: Vec<String> = conn
        .query("SELECT label FROM items WHERE price > ?1 ORDER BY id", &(0.6,))
        .collect::<lightorm::Result<_>>()
        .unwrap();
    assert_eq!(labels, vec!["pear", "plum"]);
    assert_eq!(log.commands(), 1);
}

#[test]
fn dropping_query_early_cancels_then_closes() {
    let (mut conn, log) = memory_db();
    seed(&mut conn);
    log.clear();

    let mut query = conn.query::<i64>("SELECT id FROM items ORDER BY id", &());
    assert_eq!(query.next().unwrap().unwrap(), 1);
    drop(query);

    let events = log.events();
    assert!(matches!(events[0], Event::Open));
    assert!(matches!(events[1], Event::Exec(Operation::Query(_))));
    assert_eq!(events[2..].to_vec(), vec![Event::Cancel, Event::Close]);
    assert!(!conn.is_open());
}

#[test]
fn query_single_returns_first_row_or_default() {
    let (mut conn, log) = memory_db();
    seed(&mut conn);
    log.clear();

    let label: String = conn
        .query_single("SELECT label FROM items ORDER BY id DESC", &())
        .unwrap();
    assert_eq!(label, "plum");

    // Remaining rows were never read
    assert_eq!(log.cancels(), 1);

    let missing: i64 = conn
        .query_single("SELECT id FROM items WHERE label = ?1", &("kiwi",))
        .unwrap();
    assert_eq!(missing, 0);

    let missing: Option<String> = conn
        .query_single("SELECT label FROM items WHERE id = ?1", &(42i64,))
        .unwrap();
    assert_eq!(missing, None);
    assert!(!conn.is_open());
}

#[test]
fn failed_command_still_closes() {
    let (mut conn, log) = memory_db();

    let err = conn.execute("INSERT INTO nowhere VALUES (1)", &()).unwrap_err();
    assert!(err.is_driver());
    assert!(!conn.is_open());
    assert_eq!(log.opens(), 1);
    assert_eq!(log.closes(), 1);

    let err = conn
        .query::<i64>("SELECT * FROM nowhere", &())
        .next()
        .unwrap()
        .unwrap_err();
    assert!(err.is_driver());
    assert!(!conn.is_open());
    assert_eq!(log.closes(), 2);
}

#[test]
fn stored_procedures_are_rejected_by_sqlite() {
    let (mut conn, _log) = memory_db();

    let err = conn
        .execute(lightorm::CommandDefinition::procedure("purge_items"), &())
        .unwrap_err();
    assert!(err.is_unsupported_feature());
    assert!(!conn.is_open());
}

#[test]
fn boxed_connections_from_a_driver() {
    use lightorm::Driver;
    use lightorm_driver_sqlite::Sqlite;

    let mut conn = Sqlite::in_memory().connect().unwrap();
    let value: String = conn.query_single("SELECT 'hello'", &()).unwrap();
    assert_eq!(value, "hello");
}
