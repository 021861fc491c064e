use assert_cmd::cargo::cargo_bin_cmd;
use rusqlite::Connection;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn create_firefox_cookie_db(path: &Path) {
    let conn = Connection::open(path).expect("open firefox db");
    conn.execute(
        "CREATE TABLE moz_cookies (
            host TEXT,
            name TEXT,
            value TEXT,
            path TEXT,
            expiry INTEGER,
            isSecure INTEGER
        )",
        [],
    )
    .expect("create moz_cookies");
    conn.execute(
        "INSERT INTO moz_cookies (host, name, value, path, expiry, isSecure) VALUES
            ('.foo.com', 'a', 'b', '/', 1700000000, 1),
            ('bar.com', 'c', 'd', '/x', 0, 0),
            ('sub.example.com.evil.org', 'e', 'f', '/', 0, 0)",
        [],
    )
    .expect("insert cookies");
}

#[test]
fn test_cli_help_succeeds() {
    let output = cargo_bin_cmd!("cookie-export")
        .arg("--help")
        .output()
        .expect("run cookie-export");
    assert!(output.status.success(), "help should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help should include usage text");
    assert!(stdout.contains("--browser"));
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_cli_writes_cookies_file() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("cookies.sqlite");
    create_firefox_cookie_db(&db_path);
    let output_path = dir.path().join("cookies.txt");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(&db_path)
        .arg("--browser")
        .arg("firefox")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("written 3 cookies to"));

    let written = fs::read_to_string(&output_path).expect("read output file");
    let lines: HashSet<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.contains(".foo.com TRUE / TRUE 1700000000 a b"));
    assert!(lines.contains("bar.com FALSE /x FALSE 0 c d"));
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_cli_domain_filter_matches_substring() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("cookies.sqlite");
    create_firefox_cookie_db(&db_path);
    let output_path = dir.path().join("filtered.txt");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(&db_path)
        .arg("--browser")
        .arg("firefox")
        .arg("--domain")
        .arg("example.com")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert!(output.status.success());
    let written = fs::read_to_string(&output_path).expect("read output file");
    assert_eq!(written, "sub.example.com.evil.org FALSE / FALSE 0 e f\n");
}

#[test]
fn test_cli_refuses_to_overwrite_output() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("cookies.sqlite");
    create_firefox_cookie_db(&db_path);
    let output_path = dir.path().join("cookies.txt");
    fs::write(&output_path, "keep me").expect("write output");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(&db_path)
        .arg("--browser")
        .arg("firefox")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    assert_eq!(
        fs::read_to_string(&output_path).expect("read output"),
        "keep me"
    );
}

#[test]
fn test_cli_rejects_missing_database() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("cookies.txt");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(dir.path().join("missing.sqlite"))
        .arg("--browser")
        .arg("firefox")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert!(!output.status.success());
    assert!(!output_path.exists());
}

#[test]
fn test_cli_rejects_directory_database() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("cookies.txt");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(dir.path())
        .arg("--browser")
        .arg("firefox")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a regular file"));
    assert!(!output_path.exists());
}

#[test]
fn test_cli_rejects_unsupported_browser() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("cookies.sqlite");
    create_firefox_cookie_db(&db_path);
    let output_path = dir.path().join("cookies.txt");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(&db_path)
        .arg("--browser")
        .arg("chrome")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported browser: chrome"));
    assert!(!output_path.exists());
}

#[test]
fn test_cli_browser_name_is_case_sensitive() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("cookies.sqlite");
    create_firefox_cookie_db(&db_path);
    let output_path = dir.path().join("cookies.txt");

    let output = cargo_bin_cmd!("cookie-export")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(&db_path)
        .arg("--browser")
        .arg("Firefox")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cookie-export");

    assert_eq!(output.status.code(), Some(4));
    assert!(!output_path.exists());
}
