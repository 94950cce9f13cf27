use crate::common::*;

#[test]
fn json_output_is_pure_ndjson() {
    let env = TestEnv::new();
    env.write_function("good", &valid_function());
    env.write_function("broken", &missing_import_markers());
    env.write_shared(&valid_shared());

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.first().unwrap()["command"], "build");

    let targets: Vec<&serde_json::Value> =
        events.iter().filter(|e| e["event"] == "target").collect();
    assert_eq!(targets.len(), 2);
    // discovery order is sorted by name
    assert_eq!(targets[0]["name"], "broken");
    assert_eq!(targets[0]["status"], "failed");
    assert_eq!(targets[0]["errors"].as_array().unwrap().len(), 2);
    assert_eq!(targets[1]["name"], "good");
    assert_eq!(targets[1]["status"], "written");
    assert_eq!(targets[1]["output"], "deployment/good/lambda_function.py");

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], false);
}

#[test]
fn json_command_error_is_an_event() {
    let env = TestEnv::new();
    env.write_function("user_auth", &valid_function());

    let result = env.run(&["build", "--json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    let error = events.iter().find(|e| e["event"] == "error").unwrap();
    assert_eq!(error["code"], "shared_module_not_found");
}

#[test]
fn json_reports_import_warnings() {
    let env = TestEnv::new();
    env.write_function(
        "warned",
        &function_source(
            &["import os", "from botocore import"],
            &["def lambda_handler(event, context):", "    pass"],
        ),
    );
    env.write_shared(&valid_shared());

    let result = env.run(&["build", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let warning = result
        .events()
        .into_iter()
        .find(|e| e["event"] == "warning")
        .unwrap();
    assert_eq!(warning["file"], "src/functions/warned.py");
    assert_eq!(warning["line"], 3);
}
