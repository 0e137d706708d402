#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use strata::{
    CompiledQuery, DatabaseConnection, Db, Dialect, Driver, QueryResult, Row, Schema, SqlEnum, Table,
    Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
pub enum Species {
    Dog,
    Cat,
}

#[derive(Debug, Clone, PartialEq, Table)]
#[table(name = "person")]
pub struct Person {
    #[column(generated)]
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub gender: Gender,
    pub age: i32,
    #[column(excluded)]
    pub modified_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Table)]
#[table(name = "pet")]
pub struct Pet {
    #[column(generated)]
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub species: Species,
}

#[derive(Debug, Clone, PartialEq, Table)]
#[table(name = "book")]
pub struct Book {
    #[column(generated_always)]
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Table)]
#[table(name = "movie")]
pub struct Movie {
    pub id: String,
    pub stars: i32,
}

/// Common table expression used by `with`.
#[derive(Debug, Clone, PartialEq, Table)]
#[table(name = "foo")]
pub struct Foo {
    pub id: i32,
}

#[derive(Schema)]
pub struct Database {
    person: Person,
    pet: Pet,
    book: Book,
    movie: Movie,
}

/// Driver that records every query and answers with queued results.
#[derive(Debug, Clone)]
pub struct RecordingDriver {
    dialect: Dialect,
    queries: Arc<Mutex<Vec<CompiledQuery>>>,
    responses: Arc<Mutex<VecDeque<QueryResult>>>,
}

impl RecordingDriver {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            queries: Arc::default(),
            responses: Arc::default(),
        }
    }

    /// Result of the next query, queries without a queued result get an
    /// empty one.
    pub fn respond(&self, result: QueryResult) -> &Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub fn queries(&self) -> Vec<CompiledQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn sql(&self) -> Vec<String> {
        self.queries().into_iter().map(|query| query.sql).collect()
    }
}

struct RecordingConnection {
    driver: RecordingDriver,
}

#[async_trait]
impl DatabaseConnection for RecordingConnection {
    async fn execute_query(&mut self, query: &CompiledQuery) -> strata::Result<QueryResult> {
        self.driver.queries.lock().unwrap().push(query.clone());
        let result = self.driver.responses.lock().unwrap().pop_front();
        Ok(result.unwrap_or_default())
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn acquire_connection(&self) -> strata::Result<Box<dyn DatabaseConnection>> {
        Ok(Box::new(RecordingConnection {
            driver: self.clone(),
        }))
    }
}

pub fn setup(dialect: Dialect) -> (Db<Database>, RecordingDriver) {
    let driver = RecordingDriver::new(dialect);
    (Db::new(driver.clone()), driver)
}

pub fn row<const N: usize>(cells: [(&str, Value); N]) -> Row {
    cells.into_iter().collect()
}

pub fn jennifer() -> Row {
    row([
        ("id", Value::I32(1)),
        ("first_name", Value::String("Jennifer".into())),
        ("last_name", Value::String("Aniston".into())),
        ("gender", Value::String("female".into())),
        ("age", Value::I32(30)),
        ("modified_at", Value::Null),
    ])
}
