mod common;

use common::*;
use strata::{
    Error, FromRow, Operator, Postgres, QueryResult, Sqlite, Value,
    prelude::*,
};

#[tokio::test]
async fn test_order_by_selection_alias() {
    let (db, driver) = setup(Dialect::Postgres);
    driver.respond(QueryResult::with_rows(vec![row([
        ("id", Value::I32(1)),
        ("fn", Value::String("Jennifer".into())),
    ])]));

    let query = db
        .select_from(person::table)
        .select((person::id, person::first_name.alias("fn")))
        .order_by(person::first_name, Ordering::Desc)
        .order_by("fn", Ordering::Asc);
    assert_eq!(
        r#"select "id", "first_name" as "fn" from "person" order by "first_name" desc, "fn" asc"#,
        query.compile().unwrap().sql
    );

    let rows: Vec<(i32, String)> = query.execute().await.unwrap();
    assert_eq!(vec![(1, "Jennifer".to_owned())], rows);
}

#[test]
fn test_order_by_unknown_selection() {
    let db = Db::<Database>::compile_only(Dialect::Sqlite);
    let err = db
        .select_from(person::table)
        .select(person::first_name.alias("fn"))
        .order_by("first_name", Ordering::Asc)
        .compile()
        .unwrap_err();
    assert!(matches!(err, Error::UnknownSelection(name) if name == "first_name"));
}

#[tokio::test]
async fn test_execute_take_first_or_throw() {
    let (db, driver) = setup(Dialect::Postgres);
    driver.respond(QueryResult::with_rows(vec![jennifer()]));

    let query = db.select_from(person::table).select_all().where_eq(person::id, 1);
    let person: Person = query.execute_take_first_or_throw().await.unwrap();
    assert_eq!(
        Person {
            id: 1,
            first_name: "Jennifer".into(),
            last_name: Some("Aniston".into()),
            gender: Gender::Female,
            age: 30,
            modified_at: None,
        },
        person
    );

    let err = query.execute_take_first_or_throw().await.unwrap_err();
    assert!(err.is_no_result());
    assert!(query.execute_take_first().await.unwrap().is_none());

    let queries = driver.queries();
    assert_eq!(3, queries.len());
    assert_eq!(r#"select * from "person" where "id" = $1"#, queries[0].sql);
    assert_eq!(vec![Value::I32(1)], queries[0].parameters);
}

#[tokio::test]
async fn test_call_with_table_alias() {
    let (db, driver) = setup(Dialect::Sqlite);
    driver.respond(QueryResult::with_rows(vec![row([
        ("species", Value::String("dog".into())),
        ("name", Value::String("Doggo".into())),
    ])]));

    let query = db
        .select_from(pet::table.alias("p"))
        .select(pet::species)
        .call(|qb| qb.select(pet::name));
    let rows: Vec<(Species, String)> = query.execute().await.unwrap();
    assert_eq!(vec![(Species::Dog, "Doggo".to_owned())], rows);
    assert_eq!(
        vec![r#"select "p"."species", "p"."name" from "pet" as "p""#.to_owned()],
        driver.sql()
    );
}

#[tokio::test]
async fn test_select_all_with_join() {
    let (db, driver) = setup(Dialect::Postgres);
    driver.respond(QueryResult::with_rows(vec![jennifer()]));

    let query = db
        .select_from(person::table)
        .select_all()
        .inner_join(pet::table, pet::owner_id, person::id)
        .where_eq(pet::name, "Doggo");
    let owner = query.execute_take_first_or_throw().await.unwrap();
    assert_eq!("Jennifer", owner.first_name);
    assert_eq!(
        vec![r#"select "person".* from "person" inner join "pet" on "pet"."owner_id" = "person"."id" where "pet"."name" = $1"#.to_owned()],
        driver.sql()
    );

    let aliased = db
        .select_from(person::table.alias("p"))
        .select_all()
        .inner_join(pet::table, pet::owner_id, person::id);
    assert_eq!(
        r#"select "p".* from "person" as "p" inner join "pet" on "pet"."owner_id" = "p"."id""#,
        aliased.compile().unwrap().sql
    );
}

#[test]
fn test_joined_rows_keep_same_named_columns() {
    let row = row([("id", Value::I32(2)), ("id", Value::I32(7))]);
    assert_eq!(2, row.len());
    let (person_id, pet_id) = <(i32, i32)>::from_row(row).unwrap();
    assert_eq!((2, 7), (person_id, pet_id));
}

#[test]
fn test_inner_join_qualifies_columns() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let query = db
        .select_from(person::table)
        .inner_join(pet::table, pet::owner_id, person::id)
        .select((person::first_name, pet::name))
        .where_eq(pet::species, Species::Cat)
        .order_by(pet::name, Ordering::Asc);
    let compiled = query.compile().unwrap();
    assert_eq!(
        r#"select "person"."first_name", "pet"."name" from "person" inner join "pet" on "pet"."owner_id" = "person"."id" where "pet"."species" = $1 order by "pet"."name" asc"#,
        compiled.sql
    );
    assert_eq!(vec![Value::String("cat".into())], compiled.parameters);
}

#[test]
fn test_correlated_subquery() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let query = db.select_from(person::table.alias("p"));
    let pets = query
        .expression_builder()
        .select_from(pet::table)
        .where_column(pet::owner_id, Operator::Eq, person::id);
    let query = query.where_exists(pets).select(person::first_name);
    assert_eq!(
        r#"select "p"."first_name" from "person" as "p" where exists (select * from "pet" where "owner_id" = "p"."id")"#,
        query.compile().unwrap().sql
    );
}

#[test]
fn test_filters() {
    let db = Db::<Database>::compile_only(Dialect::MySql);
    let query = db
        .select_from(person::table)
        .select(person::id)
        .where_in(person::gender, [Gender::Male, Gender::Other])
        .where_between(person::age, 18, 65)
        .where_group(|group| {
            group
                .where_like(person::first_name, "J%")
                .or_where_null(person::last_name)
        })
        .where_not_in(person::id, Vec::<i32>::new())
        .for_page(2, 20);
    let compiled = query.compile().unwrap();
    assert_eq!(
        "select `id` from `person` where `gender` in (?, ?) and `age` between ? and ? and (`first_name` like binary ? or `last_name` is null) and 1 = 1 limit 20 offset 20",
        compiled.sql
    );
    assert_eq!(
        vec![
            Value::String("male".into()),
            Value::String("other".into()),
            Value::I32(18),
            Value::I32(65),
            Value::String("J%".into()),
        ],
        compiled.parameters
    );
}

#[test]
fn test_typed_sql_selection() {
    let db = Db::<Database>::compile_only(Dialect::Sqlite);
    let query = db
        .select_from(pet::table)
        .select((pet::owner_id, sql::<i64>("count(*)").alias("total")))
        .group_by(pet::owner_id)
        .order_by("total", Ordering::Desc)
        .limit(3);
    assert_eq!(
        r#"select "owner_id", count(*) as "total" from "pet" group by "owner_id" order by "total" desc limit 3"#,
        query.to_sql::<Sqlite>().unwrap()
    );
    assert_eq!(
        r#"select "owner_id", count(*) as "total" from "pet" group by "owner_id" order by "total" desc limit 3"#,
        query.to_sql::<Postgres>().unwrap()
    );
}

#[test]
fn test_distinct_in_subquery() {
    let db = Db::<Database>::compile_only(Dialect::Postgres);
    let owners = db
        .expression_builder()
        .select_from(pet::table)
        .select(pet::owner_id)
        .distinct();
    let query = db
        .select_from(person::table)
        .select(person::first_name)
        .where_in_query(person::id, owners)
        .where_not_null(person::last_name);
    assert_eq!(
        r#"select "first_name" from "person" where "id" in (select distinct "owner_id" from "pet") and "last_name" is not null"#,
        query.compile().unwrap().sql
    );
}

#[tokio::test]
async fn test_compile_only_cannot_execute() {
    let db = Db::<Database>::compile_only(Dialect::Sqlite);
    let err = db.select_from(book::table).select_all().execute().await.unwrap_err();
    assert!(matches!(err, Error::NoExecutor));
}
