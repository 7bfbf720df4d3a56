//! Discovery over small synthetic trees.

use std::fs;
use std::path::Path;

use modscan_analysis::ModuleDiscovery;
use modscan_core::config::{ConfigOverrides, ModscanConfig};
use modscan_core::errors::{DiscoveryError, ParseError, ScanError};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn tree(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (relative, content) in files {
        write(dir.path(), relative, content);
    }
    dir
}

#[test]
fn syntax_error_aborts_the_whole_pass() {
    let dir = tree(&[
        ("my/a.py", "'''fine'''\n"),
        ("my/b.py", "def broken(:\n    pass\n"),
        ("my/c.py", "'''also fine'''\n"),
    ]);
    let discovery = ModuleDiscovery::new(dir.path().join("my"));

    let err = discovery.discover().unwrap_err();
    match err {
        DiscoveryError::Parse(ParseError::Syntax { path, .. }) => {
            assert_eq!(path, Path::new("my/b.py"));
        }
        other => panic!("unexpected {other:?}"),
    }

    // The stream yields what came before, then the error, then stops.
    let items: Vec<_> = discovery.all_modules().unwrap().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap().name(), "my.a");
    assert!(items[1].is_err());

    // Lookups that hit the broken file first fail too.
    assert!(matches!(
        discovery.module_by_name("my.c"),
        Err(DiscoveryError::Parse(_))
    ));
    // A lookup satisfied before the broken file still succeeds.
    assert_eq!(discovery.module_by_name("my.a").unwrap().doc(), Some("fine"));
}

#[test]
fn excluded_files_are_never_parsed() {
    let dir = tree(&[
        ("my/core/legacy.py", "this is not python (\n"),
        ("my/config.py", "also not python [\n"),
        ("my/ok.py", ""),
    ]);
    let report = ModuleDiscovery::new(dir.path().join("my")).discover().unwrap();
    let names: Vec<_> = report.modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["my.ok"]);
}

#[test]
fn non_string_requirement_keeps_other_files() {
    let dir = tree(&[
        ("my/good.py", "REQUIRES = ['a', 'b']\n"),
        ("my/bad.py", "REQUIRES = ['a', 42]\n"),
        ("my/empty.py", "REQUIRES = []\n"),
        ("my/none.py", "x = 1\n"),
    ]);
    let report = ModuleDiscovery::new(dir.path().join("my")).discover().unwrap();

    assert_eq!(report.get("my.bad").unwrap().requires(), None);
    assert_eq!(
        report.get("my.good").unwrap().requires(),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(report.get("my.empty").unwrap().requires(), Some(&[][..]));
    assert_eq!(report.get("my.none").unwrap().requires(), None);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].module, "my.bad");
}

#[test]
fn root_package_init_is_the_root_module() {
    let dir = tree(&[("pkg/__init__.py", "'''root'''\n"), ("pkg/sub/__init__.py", "")]);
    let report = ModuleDiscovery::new(dir.path().join("pkg")).discover().unwrap();
    let names: Vec<_> = report.modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["pkg", "pkg.sub"]);
    assert_eq!(report.modules[0].file(), Some(Path::new("pkg/__init__.py")));
    assert_eq!(report.modules[0].doc(), Some("root"));
}

#[test]
fn exclusion_follows_the_root_namespace() {
    let dir = tree(&[("hpi/core.py", ""), ("hpi/notes.py", "")]);
    let report = ModuleDiscovery::new(dir.path().join("hpi")).discover().unwrap();
    let names: Vec<_> = report.modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["hpi.notes"]);
}

#[test]
fn invalid_utf8_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("my")).unwrap();
    fs::write(dir.path().join("my/latin1.py"), b"'''caf\xe9'''\n").unwrap();
    let err = ModuleDiscovery::new(dir.path().join("my")).discover().unwrap_err();
    assert!(matches!(err, DiscoveryError::Scan(ScanError::InvalidUtf8 { .. })));
}

#[test]
fn missing_root_fails_before_streaming() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModuleDiscovery::new(dir.path().join("absent"))
        .all_modules()
        .unwrap_err();
    assert!(matches!(err, DiscoveryError::Scan(ScanError::RootNotFound { .. })));
}

#[test]
fn files_are_reread_on_every_pass() {
    let dir = tree(&[("my/a.py", "REQUIRES = ['old']\n")]);
    let discovery = ModuleDiscovery::new(dir.path().join("my"));
    assert_eq!(
        discovery.module_by_name("my.a").unwrap().requires(),
        Some(&["old".to_string()][..])
    );

    write(dir.path(), "my/a.py", "REQUIRES = ['new']\n");
    write(dir.path(), "my/b.py", "");
    assert_eq!(
        discovery.module_by_name("my.a").unwrap().requires(),
        Some(&["new".to_string()][..])
    );
    assert!(discovery.module_by_name("my.b").is_ok());
}

#[test]
fn crlf_docstring_is_normalized() {
    let dir = tree(&[("my/win.py", "'''line one\r\nline two'''\r\nx = 1\r\n")]);
    let module = ModuleDiscovery::new(dir.path().join("my"))
        .module_by_name("my.win")
        .unwrap();
    assert_eq!(module.doc(), Some("line one\nline two"));
}

#[cfg(unix)]
#[test]
fn symlinked_files_and_dirs_are_skipped() {
    let dir = tree(&[("my/real.py", ""), ("my/pkg/inner.py", "")]);
    let root = dir.path().join("my");
    std::os::unix::fs::symlink(root.join("real.py"), root.join("alias.py")).unwrap();
    std::os::unix::fs::symlink(root.join("pkg"), root.join("mirror")).unwrap();

    let report = ModuleDiscovery::new(&root).discover().unwrap();
    let names: Vec<_> = report.modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["my.pkg.inner", "my.real"]);
}

#[test]
fn discovery_from_config_overrides() {
    let dir = tree(&[("my/a.py", "")]);
    let overrides = ConfigOverrides {
        root: Some(dir.path().join("my")),
    };
    let config = ModscanConfig::load(dir.path(), Some(&overrides)).unwrap();
    let discovery = ModuleDiscovery::from_config(&config).unwrap();
    assert!(discovery.module_by_name("my.a").is_ok());
}

fn syntax_error_of(discovery: &ModuleDiscovery) -> (std::path::PathBuf, String) {
    match discovery.discover() {
        Err(DiscoveryError::Parse(ParseError::Syntax { path, reason, .. })) => (path, reason),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn python2_source_aborts_the_pass() {
    let dir = tree(&[
        ("my/a.py", "'''fine'''\n"),
        ("my/legacy.py", "'''py2 module'''\nprint 'hello'\n"),
    ]);
    let (path, reason) = syntax_error_of(&ModuleDiscovery::new(dir.path().join("my")));
    assert_eq!(path, Path::new("my/legacy.py"));
    assert!(reason.contains("print statement"), "{reason}");

    let dir = tree(&[("my/b.py", "def run(code):\n    exec code\n")]);
    let (_, reason) = syntax_error_of(&ModuleDiscovery::new(dir.path().join("my")));
    assert!(reason.contains("exec statement"), "{reason}");
}

#[test]
fn invalid_escape_aborts_the_pass() {
    let dir = tree(&[
        ("my/bad.py", "'''bad \\xZZ escape'''\n"),
        ("my/ok.py", ""),
    ]);
    let (path, reason) = syntax_error_of(&ModuleDiscovery::new(dir.path().join("my")));
    assert_eq!(path, Path::new("my/bad.py"));
    assert!(reason.contains(r"\x escape"), "{reason}");

    // Deep inside a function body still counts.
    let dir = tree(&[("my/deep.py", "def f():\n    return '\\u12'\n")]);
    let (_, reason) = syntax_error_of(&ModuleDiscovery::new(dir.path().join("my")));
    assert!(reason.contains(r"\u escape"), "{reason}");
}

#[test]
fn invalid_prefix_aborts_the_pass() {
    let dir = tree(&[("my/u.py", "NAME = ur'abc'\n")]);
    let (path, _) = syntax_error_of(&ModuleDiscovery::new(dir.path().join("my")));
    assert_eq!(path, Path::new("my/u.py"));
}

#[test]
fn named_escapes_are_resolved_in_records() {
    let dir = tree(&[(
        "my/named.py",
        "'''\\N{BULLET} doc'''\nREQUIRES = ['caf\\N{LATIN SMALL LETTER E WITH ACUTE}']\n",
    )]);
    let module = ModuleDiscovery::new(dir.path().join("my"))
        .module_by_name("my.named")
        .unwrap();
    assert_eq!(module.doc(), Some("\u{2022} doc"));
    assert_eq!(module.requires(), Some(&["café".to_string()][..]));
}
