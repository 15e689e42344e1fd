//! Person table operations

use persons_common::{Colour, Error, Person, PersonId, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn to_person(row: &SqliteRow) -> Result<Person> {
    let person_id: i64 = row.get("person_id");
    let colour: String = row.get("colour");

    Ok(Person {
        id: PersonId::new(person_id)?,
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        zip_code: row.get("zip_code"),
        city: row.get("city"),
        colour: Colour::parse(&colour)?,
    })
}

/// All persons in identifier order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Person>> {
    let rows = sqlx::query(
        r#"
        SELECT person_id, first_name, last_name, zip_code, city, colour
        FROM persons
        ORDER BY person_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(to_person).collect()
}

/// Load one person by identifier
pub async fn get_by_id(pool: &SqlitePool, id: PersonId) -> Result<Option<Person>> {
    let row = sqlx::query(
        r#"
        SELECT person_id, first_name, last_name, zip_code, city, colour
        FROM persons
        WHERE person_id = ?
        "#,
    )
    .bind(id.value())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(to_person(&row)?)),
        None => Ok(None),
    }
}

/// All persons with the given colour, in identifier order
pub async fn get_by_colour(pool: &SqlitePool, colour: Colour) -> Result<Vec<Person>> {
    let rows = sqlx::query(
        r#"
        SELECT person_id, first_name, last_name, zip_code, city, colour
        FROM persons
        WHERE colour = ?
        ORDER BY person_id
        "#,
    )
    .bind(colour.as_str())
    .fetch_all(pool)
    .await?;

    rows.iter().map(to_person).collect()
}

/// Insert a new person, failing when the identifier is already taken
pub async fn insert(pool: &SqlitePool, person: &Person) -> Result<()> {
    let result = sqlx::query(
        r#"
        INSERT INTO persons (person_id, first_name, last_name, zip_code, city, colour)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(person.id.value())
    .bind(&person.first_name)
    .bind(&person.last_name)
    .bind(&person.zip_code)
    .bind(&person.city)
    .bind(person.colour.as_str())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(Error::DuplicateIdentifier(person.id.value()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Insert-or-update by identifier (seed import path, idempotent)
pub async fn upsert(pool: &SqlitePool, person: &Person) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO persons (person_id, first_name, last_name, zip_code, city, colour)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(person_id) DO UPDATE SET
            first_name = excluded.first_name,
            last_name = excluded.last_name,
            zip_code = excluded.zip_code,
            city = excluded.city,
            colour = excluded.colour
        "#,
    )
    .bind(person.id.value())
    .bind(&person.first_name)
    .bind(&person.last_name)
    .bind(&person.zip_code)
    .bind(&person.city)
    .bind(person.colour.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

/// Highest identifier currently stored, 0 when the table is empty
pub async fn max_person_id(pool: &SqlitePool) -> Result<i64> {
    let max: Option<i64> = sqlx::query_scalar("SELECT MAX(person_id) FROM persons")
        .fetch_one(pool)
        .await?;

    Ok(max.unwrap_or(0))
}
