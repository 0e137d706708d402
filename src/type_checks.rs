//! Expressions the compiler accepts and rejects.
//!
//! Inserts only accept complete rows of tables of the schema. The positive
//! cases compile:
//!
//! ```rust
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.insert_into(person::table)
//!     .values(person::row().first_name("Jennifer").gender(Gender::Female).age(30));
//! db.replace_into(person::table).values(
//!     person::row()
//!         .id(1)
//!         .first_name("Arnold")
//!         .last_name(None)
//!         .gender(Gender::Male)
//!         .age(40),
//! );
//! db.insert_into(book::table).values(book::row().name("Dune"));
//! db.with(foo::table, |db| {
//!     db.select_from(person::table)
//!         .select(person::id)
//!         .where_eq(person::id, 1)
//! })
//! .replace_into(movie::table)
//! .values_with(|eb| {
//!     movie::row()
//!         .id("123")
//!         .stars(eb.select_from(foo::table).select(foo::id))
//! });
//! # }
//! ```
//!
//! A table outside the schema:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.insert_into(pet::table).values(pet::row().name("Catto"));
//! # }
//! ```
//!
//! An unknown column:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.insert_into(person::table).values(
//!     person::row()
//!         .first_name("Jennifer")
//!         .gender(Gender::Female)
//!         .age(30)
//!         .nickname("Jen"),
//! );
//! # }
//! ```
//!
//! A value of the wrong type:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.insert_into(person::table)
//!     .values(person::row().first_name(1).gender(Gender::Female).age(30));
//! # }
//! ```
//!
//! A missing required column:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.replace_into(person::table)
//!     .values(person::row().first_name("Jennifer").age(5));
//! # }
//! ```
//!
//! An excluded column:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.insert_into(person::table).values(
//!     person::row()
//!         .first_name("Jennifer")
//!         .gender(Gender::Female)
//!         .age(30)
//!         .modified_at(None),
//! );
//! # }
//! ```
//!
//! A column generated by the database:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.insert_into(book::table).values(book::row().id(1).name("Dune"));
//! # }
//! ```
//!
//! Selecting from a table outside the schema:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.select_from(pet::table);
//! # }
//! ```
//!
//! Selecting a column of a table that is not in the from list:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.select_from(person::table).select(book::name);
//! # }
//! ```
//!
//! Filtering with a value of the wrong type:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.select_from(person::table).where_eq(person::first_name, 1);
//! # }
//! ```
//!
//! Updating a column the database generates:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.update_table(book::table).set(book::id, 2);
//! # }
//! ```
//!
//! Updating a column of another table:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.update_table(person::table).set(book::name, "Dune");
//! # }
//! ```
//!
//! A common table expression whose select does not match its columns:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! db.with(foo::table, |db| db.select_from(person::table).select(person::first_name));
//! # }
//! ```
//!
//! A transaction is usable wherever a connection is expected:
//!
//! ```rust
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! fn count(db: &Db<Database>) -> usize {
//!     db.select_from(person::table).compile().map(|query| query.parameters.len()).unwrap_or(0)
//! }
//! fn accept(trx: Transaction<Database>) {
//!     count(&trx);
//!     let db: Db<Database> = trx.into();
//!     count(&db);
//! }
//! # let _ = accept;
//! # }
//! ```
//!
//! but a connection is not a transaction:
//!
//! ```compile_fail
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! let trx: Transaction<Database> = db.into();
//! # }
//! ```
//!
//! Fetching exactly one row yields the row itself, not an option:
//!
//! ```rust
//! # use strata::prelude::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
//! # pub enum Gender { Male, Female, Other }
//! # #[derive(Debug, Table)]
//! # #[table(name = "person")]
//! # pub struct Person {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub first_name: String,
//! #     pub last_name: Option<String>,
//! #     pub gender: Gender,
//! #     pub age: i32,
//! #     #[column(excluded)]
//! #     pub modified_at: Option<String>,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "book")]
//! # pub struct Book {
//! #     #[column(generated_always)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "pet")]
//! # pub struct Pet {
//! #     #[column(generated)]
//! #     pub id: i32,
//! #     pub name: String,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "movie")]
//! # pub struct Movie {
//! #     pub id: String,
//! #     pub stars: i32,
//! # }
//! # #[derive(Debug, Table)]
//! # #[table(name = "foo")]
//! # pub struct Foo {
//! #     pub id: i32,
//! # }
//! # #[derive(Schema)]
//! # pub struct Database {
//! #     person: Person,
//! #     book: Book,
//! #     movie: Movie,
//! # }
//! # fn main() {
//! # let db = Db::<Database>::compile_only(Dialect::Sqlite);
//! async fn first(db: &Db<Database>) -> strata::Result<String> {
//!     let (first_name,) = db
//!         .select_from(person::table)
//!         .select(person::first_name)
//!         .execute_take_first_or_throw()
//!         .await?;
//!     Ok(first_name)
//! }
//! # let _ = first;
//! # }
//! ```
