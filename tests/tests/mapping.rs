use lightorm::{stmt::Value, Connection, ConnectionExt, FromRow, Params};
use pretty_assertions::assert_eq;
use tests::memory_db;

#[derive(Debug, Default, PartialEq, FromRow)]
struct User {
    id: i64,
    name: String,
    #[column("years")]
    age: i32,
    email: Option<String>,
    active: bool,
    #[skip]
    note: String,
}

#[derive(Debug, Params)]
struct NewUser {
    id: i64,
    name: String,
    #[column("years")]
    age: i32,
    email: Option<String>,
    active: bool,
}

#[derive(Params)]
struct ById {
    id: i64,

    // Not referenced by any command below
    tenant: String,
}

fn seed(conn: &mut impl Connection) {
    conn.execute(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            years INTEGER,
            email TEXT,
            active BOOLEAN NOT NULL DEFAULT 0
        )",
        &(),
    )
    .unwrap();

    let users = [
        NewUser {
            id: 1,
            name: "ann".into(),
            age: 31,
            email: Some("ann@example.com".into()),
            active: true,
        },
        NewUser {
            id: 2,
            name: "bob".into(),
            age: 27,
            email: None,
            active: false,
        },
    ];

    for user in &users {
        let affected = conn
            .execute(
                "INSERT INTO users (id, name, years, email, active) \
                 VALUES (:id, :name, :years, :email, :active)",
                user,
            )
            .unwrap();
        assert_eq!(affected, 1);
    }
}

#[test]
fn derived_struct_round_trip() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let users: Vec<User> = conn
        .query("SELECT * FROM users ORDER BY id", &())
        .collect::<lightorm::Result<_>>()
        .unwrap();

    assert_eq!(
        users,
        vec![
            User {
                id: 1,
                name: "ann".into(),
                age: 31,
                email: Some("ann@example.com".into()),
                active: true,
                note: String::new(),
            },
            User {
                id: 2,
                name: "bob".into(),
                age: 27,
                email: None,
                active: false,
                note: String::new(),
            },
        ]
    );
}

#[test]
fn unused_named_params_are_ignored() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let user: User = conn
        .query_single(
            "SELECT * FROM users WHERE id = @id",
            &ById {
                id: 2,
                tenant: "acme".into(),
            },
        )
        .unwrap();
    assert_eq!(user.name, "bob");
}

#[test]
fn misspelled_placeholder_is_an_error() {
    let (mut conn, log) = memory_db();
    seed(&mut conn);

    let err = conn
        .query_single::<Option<i64>>(
            "SELECT id FROM users WHERE id = :idd",
            &ById {
                id: 1,
                tenant: "acme".into(),
            },
        )
        .unwrap_err();

    assert!(err.is_invalid_statement(), "unexpected error: {err}");
    assert_eq!(
        err.to_string(),
        "invalid statement: no value for placeholder `:idd`"
    );
    assert_eq!(log.opens(), log.closes());
    assert!(!conn.is_open());
}

#[test]
fn columns_match_case_insensitively() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let user: User = conn
        .query_single("SELECT ID, NAME, YEARS FROM users WHERE id = ?1", &(1i64,))
        .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "ann");
    assert_eq!(user.age, 31);

    // Columns absent from the result leave fields at their default
    assert_eq!(user.email, None);
    assert!(!user.active);
}

#[test]
fn unconvertible_values_fall_back_to_default() {
    let (mut conn, _log) = memory_db();

    let user: User = conn
        .query_single(
            "SELECT '42' AS id, NULL AS name, 'abc' AS years, 7 AS email, 'true' AS active",
            &(),
        )
        .unwrap();

    assert_eq!(
        user,
        User {
            id: 42,
            name: String::new(),
            age: 0,
            email: Some("7".into()),
            active: true,
            note: String::new(),
        }
    );
}

#[test]
fn scalar_targets_read_the_first_column() {
    let (mut conn, _log) = memory_db();

    let value: i32 = conn.query_single("SELECT '42', 'ignored'", &()).unwrap();
    assert_eq!(value, 42);

    let value: f64 = conn.query_single("SELECT 2.5", &()).unwrap();
    assert_eq!(value, 2.5);

    let rounded: i64 = conn.query_single("SELECT 2.5", &()).unwrap();
    assert_eq!(rounded, 2);

    let raw: Value = conn.query_single("SELECT x'0102'", &()).unwrap();
    assert_eq!(raw, Value::Bytes(vec![1, 2]));

    let none: Option<i64> = conn.query_single("SELECT NULL", &()).unwrap();
    assert_eq!(none, None);
}

#[test]
fn declared_boolean_columns_read_as_bool() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let table = conn
        .execute_reader("SELECT active FROM users ORDER BY id", &())
        .unwrap();
    assert_eq!(table.get(0, "active"), Some(&Value::Bool(true)));
    assert_eq!(table.get(1, "active"), Some(&Value::Bool(false)));
}

#[test]
fn schema_change_between_calls() {
    let (mut conn, _log) = memory_db();
    seed(&mut conn);

    let sql = "SELECT * FROM users WHERE id = 1";
    let before: User = conn.query_single(sql, &()).unwrap();

    conn.execute("ALTER TABLE users RENAME COLUMN years TO age_years", &())
        .unwrap();
    conn.execute("ALTER TABLE users ADD COLUMN years INTEGER DEFAULT 99", &())
        .unwrap();

    let after: User = conn.query_single(sql, &()).unwrap();
    assert_eq!(before.age, 31);
    assert_eq!(after.age, 99);
}
