use crate::common::*;

const USER_AUTH: &str = "deployment/user_auth/lambda_function.py";

#[test]
fn build_writes_self_contained_artifact() {
    let env = TestEnv::new();
    env.write_function("user_auth", &valid_function());
    env.write_shared(&valid_shared());

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    let text = env.read(USER_AUTH);
    let shared_at = text.find("def load_configuration").unwrap();
    let handler_at = text.find("def lambda_handler").unwrap();
    assert!(shared_at < handler_at);
    assert!(!text.contains("from .shared_configuration import"));
    assert!(result.stdout.contains("Build Complete"), "{}", result.stdout);
}

#[test]
fn broken_target_fails_the_run_but_not_the_batch() {
    let env = TestEnv::new();
    env.write_function("good", &valid_function());
    env.write_function("broken", &missing_import_markers());
    env.write_shared(&valid_shared());

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(env.exists("deployment/good/lambda_function.py"));
    assert!(!env.exists("deployment/broken/lambda_function.py"));
    assert!(result
        .stdout
        .contains("src/functions/broken.py: Missing required marker: IMPORT_BLOCK_START"));
    assert!(result.stdout.contains("Build Failed"));
}

#[test]
fn second_build_is_byte_identical() {
    let env = TestEnv::new();
    env.write_function("user_auth", &valid_function());
    env.write_shared(&shared_source(
        &["import json"],
        &["def load_configuration():", "    return json.loads('{}')"],
    ));

    assert!(env.run(&["build"]).success);
    let first = env.read(USER_AUTH);
    let second_run = env.run(&["build"]);
    let second = env.read(USER_AUTH);

    assert!(second_run.success);
    assert_eq!(first, second);
    assert!(second_run.stdout.contains("(unchanged)"), "{}", second_run.stdout);
}

#[test]
fn missing_shared_module_is_a_command_error() {
    let env = TestEnv::new();
    env.write_function("user_auth", &valid_function());

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("shared module not found"), "{}", result.stderr);
    assert!(!env.exists(USER_AUTH));
}

#[test]
fn missing_source_dir_is_a_command_error() {
    let env = TestEnv::new();

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("source directory not found"), "{}", result.stderr);
}

#[test]
fn targets_flag_limits_the_build() {
    let env = TestEnv::new();
    env.write_function("a", &valid_function());
    env.write_function("b", &valid_function());
    env.write_shared(&valid_shared());

    let result = env.run(&["build", "--targets", "b"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("deployment/b/lambda_function.py"));
    assert!(!env.exists("deployment/a/lambda_function.py"));
}

#[test]
fn unknown_target_is_rejected() {
    let env = TestEnv::new();
    env.write_function("a", &valid_function());
    env.write_shared(&valid_shared());

    let result = env.run(&["build", "-t", "ghost"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("unknown target 'ghost'"), "{}", result.stderr);
}

#[test]
fn github_actions_gets_annotations() {
    let env = TestEnv::new();
    env.write_function("broken", &missing_import_markers());
    env.write_shared(&valid_shared());

    let result = env.run_with_env(&["build"], &[("GITHUB_ACTIONS", "true")]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.contains(
            "::error file=src/functions/broken.py,title=broken::Missing required marker: IMPORT_BLOCK_START"
        ),
        "{}",
        result.stdout
    );
}
