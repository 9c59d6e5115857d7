use crate::error::Result;
use rusqlite::Connection;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(2);
const SIDECAR_SUFFIXES: [&str; 2] = ["-wal", "-shm"];

/// Opens the people database at `path` in WAL mode so the HTTP server can
/// read while a create is in flight.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    restrict_permissions(path)?;
    Ok(conn)
}

/// In-memory databases keep SQLite's `memory` journal; WAL does not apply.
pub fn open_in_memory() -> Result<Connection> {
    Ok(Connection::open_in_memory()?)
}

pub fn journal_mode(conn: &Connection) -> Result<String> {
    let mode = conn.query_row("PRAGMA journal_mode;", [], |row| row.get(0))?;
    Ok(mode)
}

/// The database file plus whichever WAL sidecars currently exist.
pub fn database_files(path: &Path) -> Vec<PathBuf> {
    let mut files = vec![path.to_path_buf()];
    for suffix in SIDECAR_SUFFIXES {
        let mut name = OsString::from(path.as_os_str());
        name.push(suffix);
        files.push(PathBuf::from(name));
    }
    files.retain(|file| file.exists());
    files
}

/// Limits the database and its sidecars to the owner. Sidecars appear on
/// the first write, so this runs again after migrations.
#[cfg(unix)]
pub fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    for file in database_files(path) {
        fs::set_permissions(&file, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
