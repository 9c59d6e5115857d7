pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;

use crate::error::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)?;
        if let Some(path) = &self.path {
            db::restrict_permissions(path)?;
        }
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn people(&self) -> repo::PeopleRepo<'_> {
        repo::PeopleRepo::new(&self.conn)
    }
}
