use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let (root, placeholder) = test.root_filter();

    insta::with_settings!({ filters => vec![(root.as_str(), placeholder)] }, {
        assert_cmd_snapshot!(test.command().arg("init"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Created [ROOT]/.docviewrc.json
          comment tags: @docTitle, @docName, @required
          required annotations: javax.validation.constraints.NotBlank, javax.validation.constraints.NotEmpty, javax.validation.constraints.NotNull
          excluded annotations: com.fasterxml.jackson.annotation.JsonIgnore

        ----- stderr -----
        ");
    });

    let content = test.read_file(".docviewrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["titleUseCommentTag"], Value::Bool(true));
    assert_eq!(parsed["nameTag"], Value::String("docName".to_string()));
    assert!(parsed.get("requiredFieldAnnotationIds").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".docviewrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .docviewrc.json already exists
    ");
    assert_eq!(test.read_file(".docviewrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("api.json", r#"{ "declarations": [] }"#)?;

    let output = test.resolve_command().arg("api.json").output()?;
    assert!(
        output.status.success(),
        "Resolve should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(!stderr(&output).contains("No .docviewrc.json found"));

    Ok(())
}
