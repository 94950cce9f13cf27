use crate::common::*;

#[test]
fn bundler_toml_sets_directories_and_targets() {
    let env = TestEnv::new();
    env.write(
        "bundler.toml",
        r#"
[bundle]
source_dir = "lambdas"
deployment_dir = "dist"
artifact_name = "handler.py"
targets = ["orders", { name = "billing", output = "billing_v2/main.py" }]
"#,
    );
    env.write("lambdas/orders.py", &valid_function());
    env.write("lambdas/billing.py", &valid_function());
    env.write("lambdas/ignored.py", &missing_import_markers());
    env.write("lambdas/shared_configuration.py", &valid_shared());

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("dist/orders/handler.py"));
    assert!(env.exists("dist/billing_v2/main.py"));
    assert!(!env.exists("dist/ignored"));
}

#[test]
fn unknown_config_key_warns_but_builds() {
    let env = TestEnv::new();
    env.write("bundler.toml", "[bundle]\nshared_modul = \"x\"\n");
    env.write_function("user_auth", &valid_function());
    env.write_shared(&valid_shared());

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("did you mean 'shared_module'?"),
        "{}",
        result.stderr
    );
}

#[test]
fn invalid_config_is_fatal() {
    let env = TestEnv::new();
    env.write("bundler.toml", "[bundle]\nsource_dir = 3\n");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid configuration"), "{}", result.stderr);
}

#[test]
fn custom_shared_module_name() {
    let env = TestEnv::new();
    env.write("bundler.toml", "[bundle]\nshared_module = \"common\"\n");
    env.write_function(
        "user_auth",
        &function_source(
            &["import os", "from .common import load_configuration"],
            &["def lambda_handler(event, context):", "    return load_configuration()"],
        ),
    );
    env.write("src/functions/common.py", &valid_shared());

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    let text = env.read("deployment/user_auth/lambda_function.py");
    assert!(!text.contains("from .common import"));
    assert!(!env.exists("deployment/common"));
}

#[test]
fn env_and_cli_override_config() {
    let env = TestEnv::new();
    env.write("bundler.toml", "[bundle]\ndeployment_dir = \"from_toml\"\n");
    env.write_function("user_auth", &valid_function());
    env.write_shared(&valid_shared());

    let from_env = env.run_with_env(&["build"], &[("BUNDLER_DEPLOYMENT_DIR", "from_env")]);
    assert!(from_env.success, "{}", from_env.combined_output());
    assert!(env.exists("from_env/user_auth/lambda_function.py"));

    let from_cli = env.run_with_env(
        &["build", "--deployment-dir", "from_cli"],
        &[("BUNDLER_DEPLOYMENT_DIR", "from_env")],
    );
    assert!(from_cli.success, "{}", from_cli.combined_output());
    assert!(env.exists("from_cli/user_auth/lambda_function.py"));
    assert!(!env.exists("from_toml"));
}

#[test]
fn workspace_flag_resolves_relative_dirs() {
    let env = TestEnv::new();
    env.write("project/src/functions/user_auth.py", &valid_function());
    env.write("project/src/functions/shared_configuration.py", &valid_shared());

    let workspace = env.path("project");
    let result = env.run(&["build", "--workspace", workspace.to_str().unwrap()]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("project/deployment/user_auth/lambda_function.py"));
}
