use lightorm::{
    driver::{Operation, Transaction},
    Connection, ConnectionExt, Params,
};
use pretty_assertions::assert_eq;
use tests::{file_db, logged, memory_db, LoggingDriver};

fn create_accounts(conn: &mut impl Connection) {
    conn.execute(
        "CREATE TABLE accounts (id INTEGER PRIMARY KEY, owner TEXT NOT NULL)",
        &(),
    )
    .unwrap();
}

fn account_count(conn: &mut impl Connection) -> i64 {
    conn.query_single("SELECT count(*) FROM accounts", &())
        .unwrap()
}

#[test]
fn length_mismatch_runs_nothing() {
    let (mut conn, log) = memory_db();

    let err = conn
        .execute_trans(
            &[
                "INSERT INTO accounts VALUES (1, 'a')",
                "INSERT INTO accounts VALUES (2, 'b')",
            ],
            &[&()],
        )
        .unwrap_err();

    assert!(err.is_argument_mismatch());
    assert_eq!(
        err.to_string(),
        "argument mismatch: 2 statements but 1 parameter sets"
    );
    assert!(log.is_empty());
    assert!(!conn.is_open());
}

#[test]
fn batch_commits_and_closes() {
    let (mut conn, log) = memory_db();
    create_accounts(&mut conn);
    log.clear();

    conn.execute_trans(
        &[
            "INSERT INTO accounts (id, owner) VALUES (?1, ?2)",
            "INSERT INTO accounts (id, owner) VALUES (?1, ?2)",
            "UPDATE accounts SET owner = upper(owner)",
        ],
        &[&(1i64, "ann"), &(2i64, "bob"), &()],
    )
    .unwrap();

    assert!(!conn.is_open());
    assert!(log.has_transaction(Transaction::Begin));
    assert!(log.has_transaction(Transaction::Commit));
    assert!(!log.has_transaction(Transaction::Rollback));
    assert_eq!(log.opens(), 1);
    assert_eq!(log.closes(), 1);

    let owners: Vec<String> = conn
        .query("SELECT owner FROM accounts ORDER BY id", &())
        .collect::<lightorm::Result<_>>()
        .unwrap();
    assert_eq!(owners, vec!["ANN", "BOB"]);
}

#[test]
fn empty_batch_commits_nothing() {
    let (mut conn, log) = memory_db();

    conn.execute_trans(&[], &[]).unwrap();

    assert!(log.has_transaction(Transaction::Begin));
    assert!(log.has_transaction(Transaction::Commit));
    assert!(!conn.is_open());
}

#[test]
fn failure_mid_batch_rolls_back() {
    let (mut conn, log) = memory_db();
    create_accounts(&mut conn);
    log.clear();

    let err = conn
        .execute_trans(
            &[
                "INSERT INTO accounts (id, owner) VALUES (1, 'ann')",
                "INSERT INTO accounts (id, owner) VALUES (1, 'duplicate')",
                "INSERT INTO accounts (id, owner) VALUES (3, 'never')",
            ],
            &[&(), &(), &()],
        )
        .unwrap_err();

    // The statement's own error, not something from cleanup
    assert!(err.is_driver());
    assert!(log.has_transaction(Transaction::Rollback));
    assert!(!log.has_transaction(Transaction::Commit));
    assert_eq!(log.commands(), 2);
    assert!(!conn.is_open());

    assert_eq!(account_count(&mut conn), 0);
}

#[test]
fn rollback_failure_does_not_mask_original_error() {
    let db = file_db();
    let mut setup = db.driver.connection();
    create_accounts(&mut setup);

    let driver = LoggingDriver::new(db.driver.clone()).fail_when(|op| {
        matches!(op, Operation::Transaction(Transaction::Rollback))
    });
    let (mut conn, log) = logged(driver);

    let err = conn
        .execute_trans(
            &[
                "INSERT INTO accounts (id, owner) VALUES (1, 'ann')",
                "INSERT INTO accounts (id, owner) VALUES (2, NULL)",
            ],
            &[&(), &()],
        )
        .unwrap_err();

    assert!(err.is_driver(), "unexpected error: {err}");
    assert!(log.has_transaction(Transaction::Rollback));
    assert!(!conn.is_open());

    // Closing the file handle discarded the open transaction
    assert_eq!(account_count(&mut setup), 0);
}

#[test]
fn commit_failure_rolls_back() {
    let db = file_db();
    let mut setup = db.driver.connection();
    create_accounts(&mut setup);

    let driver = LoggingDriver::new(db.driver.clone())
        .fail_when(|op| matches!(op, Operation::Transaction(Transaction::Commit)));
    let (mut conn, log) = logged(driver);

    let err = conn
        .execute_trans(
            &["INSERT INTO accounts (id, owner) VALUES (1, 'ann')"],
            &[&()],
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "injected failure");
    assert!(log.has_transaction(Transaction::Rollback));
    assert!(!conn.is_open());
    assert_eq!(account_count(&mut setup), 0);
}

#[test]
fn named_params_in_a_batch() {
    #[derive(Params)]
    struct NewAccount {
        id: i64,
        owner: String,
    }

    let db = file_db();
    let mut conn = db.driver.connection();
    create_accounts(&mut conn);

    let first = NewAccount {
        id: 10,
        owner: "ann".to_string(),
    };
    let second = NewAccount {
        id: 11,
        owner: "bob".to_string(),
    };

    conn.execute_trans(
        &[
            "INSERT INTO accounts (id, owner) VALUES (:id, :owner)",
            "INSERT INTO accounts (id, owner) VALUES (@id, @owner)",
        ],
        &[&first, &second],
    )
    .unwrap();

    assert_eq!(account_count(&mut conn), 2);

    // A fresh connection sees the committed rows
    let mut other = db.driver.connection();
    assert_eq!(account_count(&mut other), 2);
}
