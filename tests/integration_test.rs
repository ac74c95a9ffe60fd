//! Integration tests for the tag CLI
//!
//! These tests parse real command lines, run them through the processor and
//! check both the printed records and the stored tags.

use std::fs;
use std::path::{Path, PathBuf};
use tag::cli::Cli;
use tag::commands::{Outcome, Processor};
use tag::config::ScopeSettings;
use tag::status::ExitStatus;
use tag::store::{MemoryStore, TagSet, TagStore, XattrStore};
use tag::TagError;
use tempfile::TempDir;

/// Helper function to create a test file below `root`
fn create_test_file(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "content").unwrap();
    path
}

/// Whether the temp filesystem accepts `user.*` attributes
fn xattrs_supported(path: &Path) -> bool {
    xattr::SUPPORTED_PLATFORM
        && xattr::set(path, "user.tag.scratch", b"1")
            .map(|()| {
                let _ = xattr::remove(path, "user.tag.scratch");
            })
            .is_ok()
}

fn set(tags: &[&str]) -> TagSet {
    tags.iter().collect()
}

/// Run a command line against `store`, returning the outcome and stdout
fn run<S: TagStore>(store: S, args: &[&str]) -> (Result<Outcome, TagError>, String, String) {
    run_with_scopes(store, args, ScopeSettings::default())
}

fn run_with_scopes<S: TagStore>(
    store: S,
    args: &[&str],
    scopes: ScopeSettings,
) -> (Result<Outcome, TagError>, String, String) {
    let cli = Cli::parse_from_args(std::iter::once("tag").chain(args.iter().copied()));
    let invocation = cli.invocation(false);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = Processor::new(&invocation, store)
        .with_scopes(scopes)
        .perform(&mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_set_then_list_with_xattrs() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(dir.path(), "notes.txt");
    if !xattrs_supported(&file) {
        return;
    }
    let store = XattrStore::default();

    let (result, _, _) = run(&store, &["--set", "work,draft", path_str(&file)]);
    assert_eq!(result.unwrap().exit_status(), ExitStatus::Success);

    let (_, out, _) = run(&store, &["--list", path_str(&file)]);
    assert_eq!(out, format!("{}\tdraft,work\n", file.display()));

    let raw = xattr::get(&file, "user.xdg.tags").unwrap().unwrap();
    assert_eq!(raw, b"draft,work");
}

#[test]
fn test_tag_lifecycle_with_xattrs() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(dir.path(), "report.md");
    if !xattrs_supported(&file) {
        return;
    }
    let store = XattrStore::default();
    let path = path_str(&file);

    run(&store, &["-s", "work,draft", path]).0.unwrap();
    run(&store, &["-a", "final", path]).0.unwrap();
    assert_eq!(store.read_tags(&file).unwrap(), set(&["draft", "final", "work"]));

    run(&store, &["-r", "draft", path]).0.unwrap();
    assert_eq!(store.read_tags(&file).unwrap(), set(&["final", "work"]));

    let (_, out, _) = run(&store, &["-l", "-N", path]);
    assert_eq!(out, "final,work\n");

    run(&store, &["-r", "final,work", path]).0.unwrap();
    assert!(xattr::get(&file, "user.xdg.tags").unwrap().is_none());
}

#[test]
fn test_add_is_order_independent() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.txt");
    let b = create_test_file(dir.path(), "b.txt");
    let store = MemoryStore::new();

    run(&store, &["-a", "x,y", path_str(&a)]).0.unwrap();
    run(&store, &["-a", "z", path_str(&a)]).0.unwrap();
    run(&store, &["-a", "z", path_str(&b)]).0.unwrap();
    run(&store, &["-a", "x,y", path_str(&b)]).0.unwrap();

    assert_eq!(store.read_tags(&a).unwrap(), set(&["x", "y", "z"]));
    assert_eq!(store.read_tags(&a).unwrap(), store.read_tags(&b).unwrap());
}

#[test]
fn test_match_empty_set_selects_untagged() {
    let dir = TempDir::new().unwrap();
    let tagged = create_test_file(dir.path(), "tagged.txt");
    let plain = create_test_file(dir.path(), "plain.txt");
    let store = MemoryStore::new();
    store.preset(&tagged, set(&["keep"]));

    let (_, out, _) = run(&store, &["-m", "", path_str(&tagged), path_str(&plain)]);
    assert_eq!(out, format!("{}\n", plain.display()));

    let (_, out, _) = run(&store, &["-m", "*", path_str(&tagged), path_str(&plain)]);
    assert_eq!(out, format!("{}\n", tagged.display()));
}

#[test]
fn test_recursive_match_with_tags() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("proj");
    let a = create_test_file(&root, "a.txt");
    let b = create_test_file(&root, "deep/b.txt");
    let store = MemoryStore::new();
    store.preset(&a, set(&["rust"]));
    store.preset(&b, set(&["rust", "wip"]));

    let (result, out, _) = run(&store, &["-m", "rust", "-t", "-e", "-R", path_str(&root)]);
    assert_eq!(result.unwrap().reported, 2);
    assert_eq!(
        out,
        format!("{}\trust\n{}\trust,wip\n", a.display(), b.display())
    );
}

#[test]
fn test_find_in_configured_scope() {
    let dir = TempDir::new().unwrap();
    let home = dir.path().join("home");
    let hit = create_test_file(&home, "docs/plan.txt");
    create_test_file(&home, "docs/other.txt");
    let store = MemoryStore::new();
    store.preset(&hit, set(&["plan"]));

    let scopes = ScopeSettings {
        home: Some(home),
        ..ScopeSettings::default()
    };
    let (result, out, _) =
        run_with_scopes(&store, &["-f", "plan", "--home", "-R", "-0"], scopes.clone());
    assert_eq!(result.unwrap().reported, 1);
    assert_eq!(out, format!("{}\0", hit.display()));

    // Without -R only the children of the scope root are searched
    let (result, out, _) = run_with_scopes(&store, &["-f", "plan", "--home"], scopes);
    assert_eq!(result.unwrap().reported, 0);
    assert!(out.is_empty());
}

#[test]
fn test_garrulous_listing() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(dir.path(), "a.txt");
    let store = MemoryStore::new();
    store.preset(&file, set(&["one", "two"]));

    let (_, out, _) = run(&store, &["-g", path_str(&file)]);
    assert_eq!(out, format!("{}\n    one\n    two\n", file.display()));
}

#[test]
fn test_missing_paths_is_usage_error() {
    let store = MemoryStore::new();
    let (result, out, _) = run(&store, &["--add", "x"]);
    let error = result.unwrap_err();
    assert_eq!(ExitStatus::from_error(&error), ExitStatus::Usage);
    assert!(out.is_empty());
}

#[test]
fn test_partial_failure_exit_status() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(dir.path(), "ok.txt");
    let missing = dir.path().join("missing.txt");
    let store = MemoryStore::new();

    let (result, _, err) = run(&store, &["-a", "x", path_str(&missing), path_str(&file)]);
    let outcome = result.unwrap();
    assert_eq!(outcome.exit_status(), ExitStatus::Failure);
    assert_eq!(err, format!("tag: {}: No such file or directory\n", missing.display()));
    assert!(store.read_tags(&file).unwrap().contains("x"));
}

#[cfg(unix)]
#[test]
fn test_nul_output_keeps_non_utf8_names() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
    if fs::write(&file, "content").is_err() {
        return;
    }
    let store = MemoryStore::new();
    store.preset(&file, set(&["work"]));

    let args: Vec<OsString> = vec![
        "tag".into(),
        "-m".into(),
        "work".into(),
        "-0".into(),
        file.clone().into(),
    ];
    let invocation = Cli::parse_from_args(args).invocation(false);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = Processor::new(&invocation, &store)
        .perform(&mut out, &mut err)
        .unwrap();

    assert_eq!(outcome.reported, 1);
    let printed = out.strip_suffix(b"\0").unwrap();
    assert_eq!(printed, file.as_os_str().as_bytes());
    assert!(Path::new(OsStr::from_bytes(printed)).exists());
}
