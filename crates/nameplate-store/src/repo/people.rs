use crate::error::{Result, StoreError};
use nameplate_core::domain::{Person, PersonDraft, PersonId};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub struct PeopleRepo<'a> {
    conn: &'a Connection,
}

impl<'a> PeopleRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a person, failing with `DuplicateEmail` when the derived
    /// address is taken. Nothing is written on failure.
    pub fn create(&self, now_utc: i64, draft: PersonDraft) -> Result<Person> {
        if self.conn.is_autocommit() {
            let tx = self.conn.unchecked_transaction()?;
            let person = create_inner(&tx, now_utc, draft)?;
            tx.commit()?;
            Ok(person)
        } else {
            create_inner(self.conn, now_utc, draft)
        }
    }

    pub fn get(&self, id: PersonId) -> Result<Option<Person>> {
        let person = self
            .conn
            .query_row(
                "SELECT id, raw_name, name, email, created_at FROM people WHERE id = ?1;",
                [id.as_i64()],
                person_from_row,
            )
            .optional()?;
        Ok(person)
    }

    pub fn require(&self, id: PersonId) -> Result<Person> {
        self.get(id)?.ok_or(StoreError::PersonNotFound(id))
    }

    pub fn list_all(&self) -> Result<Vec<Person>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, raw_name, name, email, created_at
             FROM people
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(person_from_row(row)?);
        }
        Ok(people)
    }
}

fn create_inner(conn: &Connection, now_utc: i64, draft: PersonDraft) -> Result<Person> {
    let taken: Option<i64> = conn
        .query_row(
            "SELECT id FROM people WHERE email = ?1;",
            [&draft.email],
            |row| row.get(0),
        )
        .optional()?;
    if taken.is_some() {
        return Err(StoreError::DuplicateEmail(draft.email));
    }

    insert_person(conn, now_utc, draft)
}

/// Inserts without the lookup. The UNIQUE index still rejects an address
/// a concurrent writer stored after the check in `create_inner`.
fn insert_person(conn: &Connection, now_utc: i64, draft: PersonDraft) -> Result<Person> {
    let inserted = conn.execute(
        "INSERT INTO people (raw_name, name, email, created_at)
         VALUES (?1, ?2, ?3, ?4);",
        params![draft.raw_name, draft.name, draft.email, now_utc],
    );
    match inserted {
        Ok(_) => {}
        Err(err) if is_unique_violation(&err) => {
            return Err(StoreError::DuplicateEmail(draft.email));
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Person {
        id: PersonId::from_i64(conn.last_insert_rowid()),
        name: draft.name,
        email: draft.email,
        raw_name: draft.raw_name,
        created_at: now_utc,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: PersonId::from_i64(row.get(0)?),
        raw_name: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        created_at: row.get(4)?,
    })
}
