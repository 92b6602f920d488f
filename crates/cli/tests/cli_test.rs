use std::path::Path;
use std::process::{Command, Output};

const MODEL: &str = r#"{
  "classes": [
    {
      "name": "test/Main",
      "super_name": "java/lang/Object",
      "methods": [
        {
          "name": "tick",
          "descriptor": "(La/Level;)V",
          "access": 1,
          "instructions": [
            { "op": "label", "id": 0 },
            { "op": "load", "slot": 1 },
            { "op": "invoke", "kind": "virtual", "owner": "a/Level", "name": "getBlockState", "descriptor": "()La/BlockState;" },
            { "op": "store", "slot": 2 },
            { "op": "label", "id": 1 },
            { "op": "return" },
            { "op": "label", "id": 2 }
          ],
          "local_variables": [
            { "slot": 0, "descriptor": "Ltest/Main;", "start": 0, "end": 2 },
            { "slot": 1, "descriptor": "La/Level;", "start": 0, "end": 2 },
            { "slot": 2, "descriptor": "La/BlockState;", "start": 1, "end": 2 }
          ]
        }
      ]
    }
  ],
  "name_mapping": {
    "test/Main.tick(La/Level;)V": { "1": "world" }
  }
}"#;

fn varscope(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_varscope"))
        .args(args)
        .env("HOME", home)
        .output()
        .unwrap()
}

fn local_names(model: &serde_json::Value) -> Vec<String> {
    model["classes"][0]["methods"][0]["local_variables"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_name_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("model.json");
    let output = dir.path().join("named.json");
    std::fs::write(&input, MODEL).unwrap();

    let result = varscope(
        dir.path(),
        &["name", input.to_str().unwrap(), "-o", output.to_str().unwrap(), "--threads", "2"],
    );
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let named: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(local_names(&named), vec!["this", "world", "blockState"]);

    let summary = String::from_utf8_lossy(&result.stdout);
    assert!(summary.contains("Named classes: 1"));
}

#[test]
fn test_ignore_declared_names_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("model.json");
    std::fs::write(&input, MODEL).unwrap();

    let result = varscope(
        dir.path(),
        &["name", input.to_str().unwrap(), "--ignore-declared-names"],
    );
    assert!(result.status.success());

    let named: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(local_names(&named), vec!["this", "level", "blockState"]);
    assert!(String::from_utf8_lossy(&result.stderr).contains("Parameters without a declared name"));
}

#[test]
fn test_check_rejects_unknown_label() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("model.json");
    std::fs::write(&input, MODEL.replace(r#""end": 2 }"#, r#""end": 9 }"#)).unwrap();

    let result = varscope(dir.path(), &["check", input.to_str().unwrap()]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Invalid model"));

    std::fs::write(&input, MODEL).unwrap();
    let result = varscope(dir.path(), &["check", input.to_str().unwrap()]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("Methods:  1"));
}
