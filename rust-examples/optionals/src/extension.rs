//! Optional-returning helpers
//!
//! A helper that may have nothing to return says so in its type, and the
//! caller decides what absence means. `?` on an `Option` returns early with
//! `None`, which keeps the happy path flat.

use playground_common::Transcript;
use playground_common::sequence::map;

/// Everything after the first `.`, or `None` when there is no dot.
///
/// # Example
/// ```
/// use playground_optionals::extension::file_extension;
///
/// assert_eq!(file_extension("hello.txt"), Some("txt"));
/// assert_eq!(file_extension("archive.tar.gz"), Some("tar.gz"));
/// assert_eq!(file_extension("README"), None);
/// ```
pub fn file_extension(name: &str) -> Option<&str> {
    let (_, extension) = name.split_once('.')?;
    Some(extension)
}

/// Upper-cased extension, built on `file_extension` with `?`.
pub fn shouted_extension(name: &str) -> Option<String> {
    let extension = file_extension(name)?;
    Some(extension.to_uppercase())
}

/// Falls back to a default when absent, without conflating "absent" with
/// any real extension.
pub fn extension_or(name: &str, fallback: &'static str) -> String {
    file_extension(name).unwrap_or(fallback).to_string()
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Optional Helpers");
    let names = [
        "hello.txt",
        "archive.tar.gz",
        "README",
        ".profile",
        "trailing.",
    ];
    t.record("extensions", &map(&names, |n| file_extension(n)));
    t.record("shouted", &shouted_extension("main.rs"));
    t.record("README or none", &extension_or("README", "none"));
    t
}
