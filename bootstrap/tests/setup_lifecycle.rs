//! Scenario tests for `run_setup` driven by a scripted command runner.
//!
//! Each test scripts the exit status of the external tools and checks the
//! returned exit code, the steps actually invoked, and what was printed.

use bootstrap::config::{BootstrapConfig, Step};
use bootstrap::process::StepStatus;
use bootstrap::setup::run_setup;
use bootstrap::test_support::{ScriptedRunner, TestProject};

const HINTS: &str = "\
@@@ Dev env ready
@@@
@@@ uv run poe app        # Start app
@@@ uv run poe test       # Check tests
@@@ uv run poe lint_full  # Linter
";

struct Run {
    code: i32,
    stdout: String,
    stderr: String,
}

fn run(project: &TestProject, cfg: &BootstrapConfig, runner: &ScriptedRunner) -> Run {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_setup(project.path(), cfg, runner, &mut out, &mut err).expect("run_setup");
    Run {
        code,
        stdout: String::from_utf8(out).expect("stdout utf8"),
        stderr: String::from_utf8(err).expect("stderr utf8"),
    }
}

#[test]
fn both_steps_succeed_prints_hints() {
    let project = TestProject::new().expect("project");
    let runner = ScriptedRunner::succeeding(2);

    let result = run(&project, &BootstrapConfig::default(), &runner);

    assert_eq!(result.code, 0);
    assert!(result.stderr.is_empty());
    let expected = format!(
        "==> Setting up development environment\nProject root: {}\n\n{HINTS}",
        project.path().display()
    );
    assert_eq!(result.stdout, expected);

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].step, Step::new("uv", &["sync", "--all-extras"]));
    assert_eq!(
        calls[1].step,
        Step::new("uv", &["run", "pre-commit", "install"])
    );
    assert!(calls.iter().all(|call| call.cwd == project.path()));
}

#[test]
fn first_step_failure_skips_second() {
    let project = TestProject::new().expect("project");
    let runner = ScriptedRunner::new(vec![StepStatus::Exited(3), StepStatus::Exited(0)]);

    let result = run(&project, &BootstrapConfig::default(), &runner);

    assert_eq!(result.code, 3);
    assert_eq!(result.stderr, "@@@ Error, exit code of the command 3\n");
    assert!(!result.stdout.contains("@@@"));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn second_step_failure_returns_its_code() {
    let project = TestProject::new().expect("project");
    let runner = ScriptedRunner::new(vec![StepStatus::Exited(0), StepStatus::Exited(127)]);

    let result = run(&project, &BootstrapConfig::default(), &runner);

    assert_eq!(result.code, 127);
    assert!(result.stderr.contains("127"));
    assert!(!result.stdout.contains("Dev env ready"));
    assert_eq!(runner.calls().len(), 2);
}

#[test]
fn missing_tool_on_either_step_returns_one() {
    for missing_at in 0..2 {
        let project = TestProject::new().expect("project");
        let mut statuses = vec![StepStatus::Exited(0); missing_at];
        statuses.push(StepStatus::Missing);
        let runner = ScriptedRunner::new(statuses);

        let result = run(&project, &BootstrapConfig::default(), &runner);

        assert_eq!(result.code, 1, "missing at step {missing_at}");
        assert_eq!(
            result.stderr,
            "@@@ Error: file or command missing. Ensure 'uv' is present.\n"
        );
        assert_eq!(runner.calls().len(), missing_at + 1);
    }
}

#[test]
fn configured_plan_and_hints_are_used() {
    let project = TestProject::new().expect("project");
    let cfg = BootstrapConfig {
        hints: vec!["make run".to_string()],
        steps: vec![Step::new("make", &["deps"])],
    };
    project.write_config(&cfg).expect("write config");
    let loaded = bootstrap::config::load_config(&project.config_path()).expect("load");
    let runner = ScriptedRunner::succeeding(1);

    let result = run(&project, &loaded, &runner);

    assert_eq!(result.code, 0);
    assert!(result.stdout.ends_with("\n\n@@@ make run\n"));
    assert_eq!(runner.calls()[0].step, Step::new("make", &["deps"]));
}

#[test]
fn missing_configured_tool_is_named() {
    let project = TestProject::new().expect("project");
    let cfg = BootstrapConfig {
        steps: vec![Step::new("poetry", &["install"])],
        ..BootstrapConfig::default()
    };
    let runner = ScriptedRunner::new(vec![StepStatus::Missing]);

    let result = run(&project, &cfg, &runner);

    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("Ensure 'poetry' is present."));
}
