mod common;

use common::*;
use strata::{Error, InsertResult, MySql, Postgres, QueryResult, Value, prelude::*};

#[tokio::test]
async fn test_insert_row() {
    let (db, driver) = setup(Dialect::Sqlite);
    driver.respond(QueryResult {
        num_affected_rows: Some(1),
        insert_id: Some(12),
        ..QueryResult::default()
    });

    let result = db
        .insert_into(person::table)
        .values(
            person::row()
                .first_name("Jennifer")
                .gender(Gender::Female)
                .age(30),
        )
        .execute_take_first_or_throw()
        .await
        .unwrap();
    assert_eq!(
        InsertResult {
            insert_id: Some(12),
            num_inserted_or_updated_rows: Some(1),
        },
        result
    );

    let queries = driver.queries();
    assert_eq!(
        r#"insert into "person" ("first_name", "gender", "age") values (?1, ?2, ?3)"#,
        queries[0].sql
    );
    assert_eq!(
        vec![
            Value::String("Jennifer".into()),
            Value::String("female".into()),
            Value::I32(30),
        ],
        queries[0].parameters
    );
}

#[test]
fn test_insert_many_rows() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let query = db.insert_into(pet::table).values_many([
        pet::row().name("Catto").owner_id(1).species(Species::Cat),
        pet::row()
            .id(7)
            .name("Doggo")
            .owner_id(2)
            .species(Species::Dog),
    ]);
    assert_eq!(
        r#"insert into "pet" ("name", "owner_id", "species", "id") values ($1, $2, $3, default), ($4, $5, $6, $7)"#,
        query.compile().unwrap().sql
    );
}

#[test]
fn test_insert_generated_always() {
    let db = Db::<Database>::compile_only(Dialect::MySql);
    let query = db.insert_into(book::table).values(book::row().name("Dune"));
    assert_eq!(
        "insert into `book` (`name`) values (?)",
        query.compile().unwrap().sql
    );
}

#[test]
fn test_upsert() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let query = db
        .insert_into(movie::table)
        .values(movie::row().id("tt0133093").stars(5))
        .on_conflict_update(movie::id, movie::stars);
    assert_eq!(
        r#"insert into "movie" ("id", "stars") values ($1, $2) on conflict ("id") do update set "stars" = "excluded"."stars""#,
        query.to_sql::<Postgres>().unwrap()
    );
    assert_eq!(
        "insert into `movie` (`id`, `stars`) values (?, ?) on duplicate key update `stars` = values(`stars`)",
        query.to_sql::<MySql>().unwrap()
    );

    let query = db
        .insert_into(movie::table)
        .values(movie::row().id("tt0133093").stars(5))
        .on_conflict_do_nothing(movie::id);
    assert_eq!(
        r#"insert into "movie" ("id", "stars") values ($1, $2) on conflict ("id") do nothing"#,
        query.compile().unwrap().sql
    );
}

#[test]
fn test_insert_without_rows() {
    let db = Db::<Database>::compile_only(Dialect::Sqlite);
    let rows: Vec<book::Values<strata::schema::Set>> = Vec::new();
    let err = db.insert_into(book::table).values_many(rows).compile().unwrap_err();
    assert!(matches!(err, Error::EmptyInsert));
}

#[tokio::test]
async fn test_update() {
    let (db, driver) = setup(Dialect::Postgres);
    driver.respond(QueryResult::affected(2));

    let result = db
        .update_table(person::table)
        .set(person::last_name, None)
        .set(person::age, sql::<i32>("age + ?").bind(1))
        .where_eq(person::gender, Gender::Other)
        .execute()
        .await
        .unwrap();
    assert_eq!(2, result.num_updated_rows);

    let queries = driver.queries();
    assert_eq!(
        r#"update "person" set "last_name" = $1, "age" = age + $2 where "gender" = $3"#,
        queries[0].sql
    );
    assert_eq!(
        vec![Value::Null, Value::I32(1), Value::String("other".into())],
        queries[0].parameters
    );
}

#[test]
fn test_update_with_subquery() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let query = db.update_table(person::table.alias("p"));
    let pets = query
        .expression_builder()
        .select_from(pet::table)
        .select(sql::<i32>("count(*)"))
        .where_column(pet::owner_id, strata::Operator::Eq, person::id);
    let query = query.set(person::age, pets);
    assert_eq!(
        r#"update "person" as "p" set "age" = (select count(*) from "pet" where "owner_id" = "p"."id")"#,
        query.compile().unwrap().sql
    );
}

#[test]
fn test_empty_update() {
    let db = Db::<Database>::compile_only(Dialect::MySql);
    let err = db
        .update_table(person::table)
        .where_eq(person::id, 1)
        .compile()
        .unwrap_err();
    assert!(matches!(err, Error::EmptyUpdate));
}

#[tokio::test]
async fn test_delete() {
    let (db, driver) = setup(Dialect::MySql);
    driver.respond(QueryResult::affected(3));

    let result = db
        .delete_from(pet::table)
        .where_eq(pet::species, Species::Cat)
        .or_where_lt(pet::owner_id, 10)
        .execute()
        .await
        .unwrap();
    assert_eq!(3, result.num_deleted_rows);
    assert_eq!(
        vec!["delete from `pet` where `species` = ? or `owner_id` < ?".to_owned()],
        driver.sql()
    );
}
