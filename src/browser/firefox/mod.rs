//! Firefox browser cookie export
//!
//! Reads the `moz_cookies` table of a Firefox profile database
//! (`cookies.sqlite`). The database is opened in place; a profile that is
//! locked by a running browser fails at open or query time.

use crate::browser::{write_records, CookieRecord};
use crate::error::{ExportError, Result};
use rusqlite::types::{Type, ValueRef};
use rusqlite::{params_from_iter, Connection, OpenFlags, Row, Rows};
use std::io::Write;
use std::path::Path;

const COOKIE_QUERY: &str = "SELECT
    host,
    CASE SUBSTR(host, 1, 1) = '.' WHEN 0 THEN 0 ELSE 1 END,
    path,
    CASE isSecure WHEN 0 THEN 0 ELSE 1 END,
    expiry,
    name,
    value
FROM moz_cookies";

/// Export Firefox cookies from `db_path` into `out`
///
/// With a non-empty `domain_filter` only hosts containing the filter
/// (SQL `LIKE '%filter%'`) are exported. Rows that cannot be read are
/// logged and skipped. Returns the number of lines written.
pub fn export<W: Write>(
    db_path: &Path,
    domain_filter: Option<&str>,
    out: &mut W,
) -> Result<usize> {
    let db = CookieDatabase::open(db_path)?;

    let version = db.sqlite_version()?;
    log::info!("{} opened. SQLite version: {}", db_path.display(), version);

    let (query, pattern) = cookie_query(domain_filter);
    log::debug!("cookie query: {}", query);
    if let Some(pattern) = &pattern {
        log::debug!("host pattern: {}", pattern);
    }

    let mut stmt = db
        .conn
        .prepare(&query)
        .map_err(|e| ExportError::BrowserCookie(format!("error reading cookies: {}", e)))?;
    let rows = stmt
        .query(params_from_iter(pattern))
        .map_err(|e| ExportError::BrowserCookie(format!("error reading cookies: {}", e)))?;

    let count = write_records(CookieRows { rows }, out)?;
    Ok(count)
}

/// Lazy, single-pass sequence of cookie rows
///
/// A failed step is fatal and yields the outer error; a row that does not
/// convert into a [`CookieRecord`] yields the inner error.
struct CookieRows<'stmt> {
    rows: Rows<'stmt>,
}

impl Iterator for CookieRows<'_> {
    type Item = Result<rusqlite::Result<CookieRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rows.next() {
            Ok(Some(row)) => Some(Ok(row_to_record(row))),
            Ok(None) => None,
            Err(e) => Some(Err(ExportError::BrowserCookie(format!(
                "error reading cookies: {}",
                e
            )))),
        }
    }
}

/// Build the cookie SELECT and its optional LIKE pattern
fn cookie_query(domain_filter: Option<&str>) -> (String, Option<String>) {
    match domain_filter.filter(|domain| !domain.is_empty()) {
        Some(domain) => (
            format!("{} WHERE host LIKE ?1", COOKIE_QUERY),
            Some(format!("%{}%", domain)),
        ),
        None => (COOKIE_QUERY.to_string(), None),
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<CookieRecord> {
    Ok(CookieRecord {
        host: text_column(row, 0)?,
        include_subdomains: row.get(1)?,
        path: text_column(row, 2)?,
        is_secure: row.get(3)?,
        expiry: text_column(row, 4)?,
        name: text_column(row, 5)?,
        value: text_column(row, 6)?,
    })
}

/// Read a column as text, rendering numbers in decimal form
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Null => Err(rusqlite::Error::InvalidColumnType(
            idx,
            column_name(row, idx),
            Type::Null,
        )),
        ValueRef::Integer(value) => Ok(value.to_string()),
        ValueRef::Real(value) => Ok(value.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(rusqlite::Error::Utf8Error),
    }
}

fn column_name(row: &Row<'_>, idx: usize) -> String {
    row.as_ref()
        .column_name(idx)
        .map(str::to_string)
        .unwrap_or_else(|_| idx.to_string())
}

/// Read-only connection to a cookie database, closed when dropped
struct CookieDatabase<'a> {
    conn: Connection,
    path: &'a Path,
}

impl<'a> CookieDatabase<'a> {
    fn open(path: &'a Path) -> Result<Self> {
        log::info!("opening {} as a SQLite database...", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            ExportError::BrowserCookie(format!(
                "Failed to open cookies DB {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { conn, path })
    }

    fn sqlite_version(&self) -> Result<String> {
        self.conn
            .query_row("SELECT sqlite_version()", [], |row| row.get(0))
            .map_err(|e| {
                ExportError::BrowserCookie(format!("error getting SQLite version: {}", e))
            })
    }
}

impl Drop for CookieDatabase<'_> {
    fn drop(&mut self) {
        log::info!("{} closed.", self.path.display());
    }
}
