//! CLI command integration tests.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A deck with exactly three cards, so every draw is the same set.
fn tiny_deck() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("deck.json"),
        r#"[
    {"name": "The Star", "arcana": "Major", "meaning": "Hope and renewal."},
    {"name": "Two of Cups", "arcana": "Minor", "meaning": "Partnership."},
    {"name": "The Sun", "arcana": "Major"}
]"#,
    )
    .unwrap();
    dir
}

fn deck_arg(dir: &TempDir) -> String {
    dir.path().join("deck.json").to_str().unwrap().to_string()
}

fn tarot() -> Command {
    let mut cmd = Command::cargo_bin("tarot").unwrap();
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("TAROT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// cards
// ---------------------------------------------------------------------------

#[test]
fn cards_lists_full_deck() {
    tarot()
        .arg("cards")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fool")
                .and(predicate::str::contains("Ace of Cups"))
                .and(predicate::str::contains("78 cards")),
        );
}

#[test]
fn cards_filters_major_arcana() {
    tarot()
        .args(["cards", "--arcana", "major"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Wheel Of Fortune")
                .and(predicate::str::contains("Ace of Cups").not())
                .and(predicate::str::contains("22 cards")),
        );
}

#[test]
fn cards_rejects_unknown_arcana() {
    tarot()
        .args(["cards", "--arcana", "middle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown arcana"));
}

#[test]
fn cards_rejects_duplicate_deck() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.json");
    fs::write(
        &path,
        r#"[{"name": "The Sun", "arcana": "Major"}, {"name": "The Sun", "arcana": "Major"}]"#,
    )
    .unwrap();

    tarot()
        .args(["cards", "--deck", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_shows_three_positions() {
    let dir = tiny_deck();
    tarot()
        .args(["draw", "--deck", &deck_arg(&dir), "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Past")
                .and(predicate::str::contains("Present"))
                .and(predicate::str::contains("Future"))
                .and(predicate::str::contains("The Star"))
                .and(predicate::str::contains("Two of Cups"))
                .and(predicate::str::contains("The Sun")),
        );
}

#[test]
fn draw_is_reproducible_with_seed() {
    let first = tarot().args(["draw", "--seed", "42"]).output().unwrap();
    let second = tarot().args(["draw", "--seed", "42"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn draw_uses_vietnamese_labels() {
    let dir = tiny_deck();
    tarot()
        .args(["draw", "--deck", &deck_arg(&dir), "--lang", "vi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quá khứ").and(predicate::str::contains("Tương lai")));
}

#[test]
fn draw_rejects_tiny_deck() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.json");
    fs::write(&path, r#"[{"name": "The Sun", "arcana": "Major"}]"#).unwrap();

    tarot()
        .args(["draw", "--deck", path.to_str().unwrap()])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// questions
// ---------------------------------------------------------------------------

#[test]
fn questions_suggests_five() {
    let output = tarot().arg("questions").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("  5. "));
}

#[test]
fn questions_all_english() {
    tarot()
        .args(["questions", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will I find love?"));
}

#[test]
fn questions_unknown_language() {
    tarot()
        .args(["questions", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language 'fr'"));
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_without_credential_shows_fallback() {
    let dir = tiny_deck();
    tarot()
        .args([
            "read",
            "--deck",
            &deck_arg(&dir),
            "--question",
            "Will I find love?",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Star")
                .and(predicate::str::contains("Sorry, I couldn't generate a tarot reading")),
        );
}

#[test]
fn read_rejects_empty_question() {
    tarot()
        .args(["read", "--question", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a question before drawing the cards.",
        ));
}

#[test]
fn read_interactive_quit() {
    tarot()
        .arg("read")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ").and(predicate::str::contains("5. ")));
}

#[test]
fn read_interactive_empty_question_notice() {
    tarot()
        .arg("read")
        .write_stdin("\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter a question before drawing the cards.",
        ));
}

#[test]
fn read_interactive_close_before_reading() {
    let dir = tiny_deck();
    tarot()
        .args(["read", "--deck", &deck_arg(&dir)])
        .write_stdin("Will I find love?\nclose\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Two of Cups")
                .and(predicate::str::contains("Sorry, I couldn't").not()),
        );
}

#[test]
fn read_warns_about_missing_key() {
    tarot()
        .args(["read", "--question", "Career?"])
        .assert()
        .success()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[cfg(unix)]
#[test]
fn read_interactive_ctrl_c_after_reading_ends_session() {
    use std::io::Read;
    use std::process::Stdio;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::{Duration, Instant};

    fn wait_for(output: &Mutex<String>, needle: &str, limit: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < limit {
            if output.lock().unwrap().contains(needle) {
                return true;
            }
            thread::sleep(Duration::from_millis(50));
        }
        false
    }

    let dir = tiny_deck();
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("tarot"))
        .args(["read", "--deck", &deck_arg(&dir)])
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    std::io::Write::write_all(&mut stdin, b"Will I find love?\n\n").unwrap();

    let output = Arc::new(Mutex::new(String::new()));
    let mut stdout = child.stdout.take().unwrap();
    let sink = Arc::clone(&output);
    let reader = thread::spawn(move || {
        let mut buf = [0u8; 1024];
        while let Ok(n) = stdout.read(&mut buf) {
            if n == 0 {
                break;
            }
            sink.lock()
                .unwrap()
                .push_str(&String::from_utf8_lossy(&buf[..n]));
        }
    });

    // First reading completes (fallback, no key), then the session is back at the prompt.
    assert!(wait_for(&output, "Sorry, I couldn't", Duration::from_secs(30)));
    thread::sleep(Duration::from_millis(300));

    let status = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let start = Instant::now();
    let exit = loop {
        if let Some(exit) = child.try_wait().unwrap() {
            break Some(exit);
        }
        if start.elapsed() > Duration::from_secs(10) {
            break None;
        }
        thread::sleep(Duration::from_millis(50));
    };
    drop(stdin);

    let Some(exit) = exit else {
        child.kill().unwrap();
        panic!("Ctrl-C at the prompt did not end the session");
    };
    reader.join().unwrap();
    assert!(exit.success());
    assert!(output.lock().unwrap().contains("Session closed."));
}
