use lightorm::{
    cache,
    driver::CommandKind,
    stmt::Value,
    ConnectionExt, Signature,
};
use pretty_assertions::assert_eq;
use std::{any::TypeId, sync::Arc, thread};
use tests::{file_db, memory_db};

fn signature<T: 'static, P: 'static>(text: &str) -> Signature {
    Signature::new(
        text,
        CommandKind::Text,
        "sqlite",
        TypeId::of::<T>(),
        TypeId::of::<P>(),
    )
}

#[test]
fn repeated_calls_reuse_one_plan() {
    let (mut conn, _log) = memory_db();
    let sql = "SELECT 40 + ?1";

    let first: i64 = conn.query_single(sql, &(1i64,)).unwrap();
    let plan = cache::global()
        .get(&signature::<i64, (i64,)>(sql))
        .expect("plan cached after first call");
    assert!(plan.has_row_map());

    let second: i64 = conn.query_single(sql, &(2i64,)).unwrap();
    let again = cache::global()
        .get(&signature::<i64, (i64,)>(sql))
        .unwrap();

    assert_eq!((first, second), (41, 42));
    assert!(Arc::ptr_eq(&plan, &again));
}

#[test]
fn result_and_parameter_types_key_separate_plans() {
    let (mut conn, _log) = memory_db();
    let sql = "SELECT ?1 * 2";

    let int: i64 = conn.query_single(sql, &(21i64,)).unwrap();
    let text: String = conn.query_single(sql, &(21i64,)).unwrap();
    let float: f64 = conn.query_single(sql, &(1.25f64,)).unwrap();

    assert_eq!(int, 42);
    assert_eq!(text, "42");
    assert_eq!(float, 2.5);

    let global = cache::global();
    assert!(global.get(&signature::<i64, (i64,)>(sql)).is_some());
    assert!(global.get(&signature::<String, (i64,)>(sql)).is_some());
    assert!(global.get(&signature::<f64, (f64,)>(sql)).is_some());
    assert!(global.get(&signature::<f64, (i64,)>(sql)).is_none());
}

#[test]
fn execute_and_scalar_plans_carry_no_row_map() {
    let (mut conn, _log) = memory_db();
    let sql = "SELECT 'plan-without-rows'";

    let value = conn.execute_scalar(sql, &()).unwrap();
    assert_eq!(value, Value::from("plan-without-rows"));

    let plan = cache::global()
        .get(&signature::<Value, ()>(sql))
        .unwrap();
    assert!(!plan.has_row_map());
}

#[test]
fn concurrent_callers_share_the_cache() {
    let db = file_db();

    let mut setup = db.driver.connection();
    setup
        .execute("CREATE TABLE numbers (n INTEGER NOT NULL)", &())
        .unwrap();
    for n in 1..=10i64 {
        setup
            .execute("INSERT INTO numbers (n) VALUES (?1)", &(n,))
            .unwrap();
    }

    let sql = "SELECT n FROM numbers WHERE n <= ?1 ORDER BY n";

    thread::scope(|s| {
        for limit in 1..=8i64 {
            let driver = &db.driver;
            s.spawn(move || {
                let mut conn = driver.connection();
                for _ in 0..25 {
                    let rows: Vec<i64> = conn
                        .query(sql, &(limit,))
                        .collect::<lightorm::Result<_>>()
                        .unwrap();
                    assert_eq!(rows, (1..=limit).collect::<Vec<_>>());
                }
            });
        }
    });

    let plan = cache::global()
        .get(&signature::<i64, (i64,)>(sql))
        .unwrap();
    assert!(plan.has_row_map());
    assert_eq!(plan.binder().len(), 1);
}
