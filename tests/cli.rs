//! The `anagrams` command: count on stdout, rejections on stderr.

use std::process::{Command, Output};

fn anagrams(word: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_anagrams")).arg(word).output().unwrap()
}

#[test]
fn prints_the_count() {
    let out = anagrams("aab");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "3");
    assert!(out.stderr.is_empty());
}

#[test]
fn rejects_non_letters() {
    let out = anagrams("a1b");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error:"), "stderr was {stderr:?}");
}

#[test]
fn rejects_the_empty_word() {
    let out = anagrams("");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error:"));
}
