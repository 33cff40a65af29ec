// tests/resolver_strategies.rs

use std::error::Error;

use hookrun::resolve;
use hookrun_test_utils::builders::ProjectBuilder;
use hookrun_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn hook_marker_derives_sibling_executable() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_file("opt-venv/bin/python")
        .with_file("opt-venv/bin/pre-commit")
        .with_hook_marker("opt-venv/bin/python");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("opt-venv/bin/pre-commit")));

    Ok(())
}

#[test]
fn legacy_quoted_marker_is_accepted() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_file("opt-venv/bin/pre-commit")
        .with_legacy_hook_marker("opt-venv/bin/python");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("opt-venv/bin/pre-commit")));

    Ok(())
}

#[test]
fn hook_marker_beats_conventional_venv() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_file("opt-venv/bin/pre-commit")
        .with_venv_executable("venv")
        .with_hook_marker("opt-venv/bin/python");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("opt-venv/bin/pre-commit")));

    Ok(())
}

#[test]
fn missing_derived_path_falls_through_to_venv() -> TestResult {
    init_tracing();
    // Marker present, but opt-venv/bin/pre-commit does not exist.
    let project = ProjectBuilder::new()
        .with_venv_executable("venv")
        .with_hook_marker("opt-venv/bin/python");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("venv/bin/pre-commit")));

    Ok(())
}

#[test]
fn non_python_interpreter_falls_through() -> TestResult {
    init_tracing();
    // `python3` has no trailing `bin/python` to rewrite.
    let project = ProjectBuilder::new()
        .with_hook_script("#!/bin/bash\nINSTALL_PYTHON=/usr/bin/python3\n")
        .with_venv_executable(".venv");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path(".venv/bin/pre-commit")));

    Ok(())
}

#[test]
fn hook_without_marker_falls_through() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_hook_script("#!/bin/bash\necho not managed by pre-commit\n")
        .with_venv_executable("virtualenv");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("virtualenv/bin/pre-commit")));

    Ok(())
}

#[test]
fn missing_hook_file_is_not_a_fault() -> TestResult {
    init_tracing();
    // Fresh checkout: no .git/hooks/pre-commit at all.
    let project = ProjectBuilder::new().with_venv_executable("venv");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("venv/bin/pre-commit")));

    Ok(())
}

#[test]
fn venv_probe_order_is_fixed() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new()
        .with_venv_executable(".venv")
        .with_venv_executable("virtualenv");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path(".venv/bin/pre-commit")));

    let project = ProjectBuilder::new()
        .with_venv_executable("venv")
        .with_venv_executable(".venv")
        .with_venv_executable("virtualenv_run");

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, Some(project.path("venv/bin/pre-commit")));

    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_hook_file_is_a_fault_not_a_fallthrough() -> TestResult {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use hookrun::errors::HookrunError;

    init_tracing();
    let project = ProjectBuilder::new()
        .with_venv_executable("venv")
        .with_hook_marker("opt-venv/bin/python");

    let hook = project.path(".git/hooks/pre-commit");
    fs::set_permissions(&hook, fs::Permissions::from_mode(0o000))?;

    // Root ignores mode bits; there is no permission fault to pin then.
    if fs::read_to_string(&hook).is_ok() {
        return Ok(());
    }

    let err = resolve::resolve(project.root())
        .expect_err("an unreadable hook file must not be treated as absent");
    assert!(matches!(err, HookrunError::Io(_)), "got {err:?}");

    Ok(())
}

#[test]
fn nothing_resolvable_is_ok_none() -> TestResult {
    init_tracing();
    let project = ProjectBuilder::new();

    let resolved = resolve::resolve(project.root())?;
    assert_eq!(resolved, None);

    Ok(())
}
