//! Integration tests for the non-interactive `run` subcommand.
//!
//! Verifies the wire contract against a mock execution server: the raw
//! source text is the whole request body, and the response body is printed
//! verbatim.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp ASPEN_PLAY_HOME directory for test isolation.
fn temp_play_home() -> TempDir {
    TempDir::new().expect("create temp play home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn write_program(dir: &TempDir, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, source).expect("write program file");
    path
}

#[tokio::test]
async fn run_posts_raw_source_and_prints_output_verbatim() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let play_home = temp_play_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .and(header("content-type", "text/plain; charset=utf-8"))
        .and(body_string("print \"Hello, 世界!\";"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello, 世界!\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let program = write_program(&play_home, "hello.aspen", "print \"Hello, 世界!\";");

    cargo_bin_cmd!("aspen-play")
        .env("ASPEN_PLAY_HOME", play_home.path())
        .env_remove("ASPEN_PLAY_ENDPOINT")
        .args([
            "run",
            program.to_str().unwrap(),
            "--endpoint",
            &format!("{}/run", mock_server.uri()),
        ])
        .assert()
        .success()
        .stdout("Hello, 世界!\n");
}

#[tokio::test]
async fn run_preserves_whitespace_in_output() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let play_home = temp_play_home();
    let mock_server = MockServer::start().await;

    // Indentation and blank lines must survive untouched.
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1\n\n  indented\n"))
        .mount(&mock_server)
        .await;

    let program = write_program(&play_home, "prog.aspen", "print 1;");

    cargo_bin_cmd!("aspen-play")
        .env("ASPEN_PLAY_HOME", play_home.path())
        .env_remove("ASPEN_PLAY_ENDPOINT")
        .args([
            "run",
            program.to_str().unwrap(),
            "--endpoint",
            &format!("{}/run", mock_server.uri()),
        ])
        .assert()
        .success()
        .stdout("1\n\n  indented\n");
}

#[tokio::test]
async fn run_reads_program_from_stdin() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let play_home = temp_play_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .and(body_string("print 2;"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("aspen-play")
        .env("ASPEN_PLAY_HOME", play_home.path())
        .env_remove("ASPEN_PLAY_ENDPOINT")
        .args(["run", "-", "--endpoint", &format!("{}/run", mock_server.uri())])
        .write_stdin("print 2;")
        .assert()
        .success()
        .stdout("2\n");
}

#[tokio::test]
async fn server_error_yields_fixed_message_and_nonzero_exit() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let play_home = temp_play_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(500).set_body_string("stack trace here"))
        .mount(&mock_server)
        .await;

    let program = write_program(&play_home, "prog.aspen", "print 1;");

    cargo_bin_cmd!("aspen-play")
        .env("ASPEN_PLAY_HOME", play_home.path())
        .env_remove("ASPEN_PLAY_ENDPOINT")
        .args([
            "run",
            program.to_str().unwrap(),
            "--endpoint",
            &format!("{}/run", mock_server.uri()),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        // The generic message only; server internals never leak to the user.
        .stderr(predicate::str::contains("Internal server error."))
        .stderr(predicate::str::contains("stack trace here").not());
}

#[tokio::test]
async fn endpoint_env_var_is_honored() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let play_home = temp_play_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let program = write_program(&play_home, "prog.aspen", "print 1;");

    cargo_bin_cmd!("aspen-play")
        .env("ASPEN_PLAY_HOME", play_home.path())
        .env("ASPEN_PLAY_ENDPOINT", format!("{}/run", mock_server.uri()))
        .args(["run", program.to_str().unwrap()])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn malformed_endpoint_is_rejected_before_any_request() {
    let play_home = temp_play_home();
    let program = write_program(&play_home, "prog.aspen", "print 1;");

    cargo_bin_cmd!("aspen-play")
        .env("ASPEN_PLAY_HOME", play_home.path())
        .env_remove("ASPEN_PLAY_ENDPOINT")
        .args(["run", program.to_str().unwrap(), "--endpoint", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid execution endpoint URL"));
}
