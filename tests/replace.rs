mod common;

use common::*;
use strata::{Error, InsertResult, QueryResult, Value, prelude::*};

fn aniston() -> person::Values<strata::schema::Set, strata::schema::Set, strata::schema::Set> {
    person::row()
        .id(10)
        .first_name("Jennifer")
        .last_name(Some("Aniston".to_owned()))
        .gender(Gender::Other)
        .age(30)
}

#[tokio::test]
async fn test_replace_returns_insert_results() {
    let (db, driver) = setup(Dialect::MySql);
    driver.respond(QueryResult::affected(1));

    let results: Vec<InsertResult> = db.replace_into(person::table).values(aniston()).execute().await.unwrap();
    assert_eq!(1, results.len());
    assert_eq!(Some(1), results[0].num_inserted_or_updated_rows);

    let result: Option<InsertResult> = db
        .replace_into(person::table)
        .values(
            person::row()
                .id(11)
                .first_name("fname")
                .age(10)
                .gender(Gender::Other),
        )
        .execute_take_first()
        .await
        .unwrap();
    assert!(result.is_some());

    let result: InsertResult = db
        .replace_into(person::table)
        .values(aniston())
        .execute_take_first_or_throw()
        .await
        .unwrap();
    assert_eq!(None, result.insert_id);

    let queries = driver.queries();
    assert_eq!(3, queries.len());
    assert_eq!(
        "replace into `person` (`id`, `first_name`, `last_name`, `gender`, `age`) values (?, ?, ?, ?, ?)",
        queries[0].sql
    );
    assert_eq!(
        vec![
            Value::I32(10),
            Value::String("Jennifer".into()),
            Value::String("Aniston".into()),
            Value::String("other".into()),
            Value::I32(30),
        ],
        queries[0].parameters
    );
    assert_eq!(
        "replace into `person` (`id`, `first_name`, `age`, `gender`) values (?, ?, ?, ?)",
        queries[1].sql
    );
}

#[tokio::test]
async fn test_replace_with_common_table_expression() {
    let (db, driver) = setup(Dialect::Sqlite);

    let result = db
        .with(foo::table, |db| {
            db.select_from(person::table)
                .select(person::id)
                .where_eq(person::id, 1)
        })
        .replace_into(movie::table)
        .values_with(|eb| {
            movie::row()
                .id("123")
                .stars(eb.select_from(foo::table).select(foo::id))
        })
        .execute_take_first()
        .await
        .unwrap();
    assert!(result.is_some());

    let queries = driver.queries();
    assert_eq!(
        r#"with "foo"("id") as (select "id" from "person" where "id" = ?1) replace into "movie" ("id", "stars") values (?2, (select "id" from "foo"))"#,
        queries[0].sql
    );
    assert_eq!(
        vec![Value::I32(1), Value::String("123".into())],
        queries[0].parameters
    );
}

#[test]
fn test_replace_unsupported_by_postgres() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let err = db
        .replace_into(book::table)
        .values(book::row().name("bar"))
        .compile()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Unsupported {
            feature: "replace into",
            dialect: Dialect::Postgres,
        }
    ));
}

#[tokio::test]
async fn test_unsupported_replace_is_not_executed() {
    let (db, driver) = setup(Dialect::Postgres);
    let err = db
        .replace_into(book::table)
        .values(book::row().name("bar"))
        .execute()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
    assert!(driver.queries().is_empty());
}
