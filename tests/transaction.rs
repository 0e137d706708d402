mod common;

use common::*;
use strata::{Error, QueryResult, prelude::*};

async fn count_people(db: &Db<Database>) -> strata::Result<i64> {
    let (count,) = db
        .select_from(person::table)
        .select(sql::<i64>("count(*)").alias("count"))
        .execute_take_first_or_throw()
        .await?;
    Ok(count)
}

#[tokio::test]
async fn test_transaction_usable_as_db() {
    let (db, driver) = setup(Dialect::MySql);
    let trx = db.begin_transaction().await.unwrap();
    driver.respond(QueryResult::with_rows(vec![row([("count", strata::Value::I64(4))])]));

    assert_eq!(4, count_people(&trx).await.unwrap());
    let as_db: Db<Database> = trx.clone().into();
    assert!(as_db.is_transaction());
    trx.commit().await.unwrap();

    assert_eq!(
        vec![
            "start transaction".to_owned(),
            "select count(*) as `count` from `person`".to_owned(),
            "commit".to_owned(),
        ],
        driver.sql()
    );
}

#[tokio::test]
async fn test_transaction_commits() {
    let (db, driver) = setup(Dialect::Postgres);
    let inserted = db
        .transaction(async |trx: Transaction<Database>| {
            trx.insert_into(book::table)
                .values(book::row().name("Dune"))
                .execute()
                .await?;
            trx.delete_from(book::table).where_eq(book::name, "Emma").execute().await?;
            Ok::<_, Error>(2)
        })
        .await
        .unwrap();
    assert_eq!(2, inserted);
    assert_eq!(
        vec![
            "begin".to_owned(),
            r#"insert into "book" ("name") values ($1)"#.to_owned(),
            r#"delete from "book" where "name" = $1"#.to_owned(),
            "commit".to_owned(),
        ],
        driver.sql()
    );
}

#[tokio::test]
async fn test_transaction_rolls_back_on_error() {
    let (db, driver) = setup(Dialect::Sqlite);
    let err = db
        .transaction(async |trx: Transaction<Database>| {
            trx.update_table(person::table)
                .set(person::age, 31)
                .where_eq(person::first_name, "Jennifer")
                .execute()
                .await?;
            let count = count_people(&trx).await?;
            Ok::<_, Error>(count)
        })
        .await
        .unwrap_err();
    assert!(err.is_no_result());
    assert_eq!(
        vec![
            "begin".to_owned(),
            r#"update "person" set "age" = ?1 where "first_name" = ?2"#.to_owned(),
            r#"select count(*) as "count" from "person""#.to_owned(),
            "rollback".to_owned(),
        ],
        driver.sql()
    );
}

#[tokio::test]
async fn test_finished_transaction_rejects_queries() {
    let (db, _driver) = setup(Dialect::Postgres);
    let trx = db.begin_transaction().await.unwrap();
    let copy = trx.clone();
    trx.rollback().await.unwrap();

    assert!(!copy.is_open().await);
    let err = count_people(&copy).await.unwrap_err();
    assert!(matches!(err, Error::TransactionClosed));
    assert!(matches!(copy.commit().await, Err(Error::TransactionClosed)));
}

#[tokio::test]
async fn test_nested_transaction() {
    let (db, _driver) = setup(Dialect::Sqlite);
    let trx = db.begin_transaction().await.unwrap();
    assert!(matches!(trx.begin_transaction().await, Err(Error::NestedTransaction)));
    trx.commit().await.unwrap();
}
