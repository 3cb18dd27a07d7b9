use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const USER_API: &str = r#"{
  "declarations": [
    {
      "kind": "class",
      "simpleName": "UserController",
      "qualifiedName": "com.acme.UserController",
      "children": [
        {
          "kind": "method",
          "simpleName": "create",
          "annotations": [
            { "id": "io.swagger.annotations.ApiOperation", "attributes": { "value": "Create user" } }
          ],
          "docComment": "/**\n * Creates a user.\n */",
          "children": [
            {
              "kind": "parameter",
              "simpleName": "request",
              "annotations": [{ "id": "javax.validation.constraints.NotNull" }]
            }
          ]
        }
      ]
    },
    {
      "kind": "class",
      "simpleName": "User",
      "qualifiedName": "com.acme.User",
      "docComment": "/**\n * @docTitle User model\n */",
      "children": [
        { "kind": "field", "simpleName": "id", "modifiers": ["private", "static"] },
        { "kind": "field", "simpleName": "name", "docComment": "/** Display name. */" },
        { "kind": "field", "simpleName": "email", "docComment": "/**\n * Login email.\n * @required\n */" }
      ]
    }
  ]
}"#;

#[test]
fn test_resolve_text() -> Result<()> {
    let test = CliTest::with_file("api/users.json", USER_API)?;

    assert_cmd_snapshot!(test.resolve_command().arg("api/users.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    api/users.json
      class UserController
        title: com.acme.UserController
        method create
          operation name: Create user
          description: Creates a user.
          parameter request
            required: true
      class User
        title: User model
        field id
          description: -
          excluded: true
          required: true
        field name
          description: Display name.
          excluded: false
          required: false
        field email
          description: Login email.
          excluded: false
          required: true

    ✓ Resolved 7 declarations in 1 file

    ----- stderr -----
    Note: No .docviewrc.json found, using default configuration
    ");

    Ok(())
}

#[test]
fn test_resolve_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.resolve_command().arg("nope.json"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Note: No .docviewrc.json found, using default configuration
    Error: Path does not exist: nope.json
    ");

    Ok(())
}

#[test]
fn test_resolve_json() -> Result<()> {
    let test = CliTest::with_file("api/users.json", USER_API)?;

    let output = test
        .resolve_command()
        .args(["api/users.json", "--format", "json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    let declarations = &parsed[0]["declarations"];

    assert_eq!(parsed[0]["file"], "api/users.json");
    assert_eq!(declarations[1]["kind"], "method");
    assert_eq!(declarations[1]["operationName"]["value"], "Create user");
    assert_eq!(
        declarations[1]["operationName"]["source"],
        "swagger2-api-operation"
    );
    assert_eq!(declarations[3]["title"]["source"], "comment-tag");
    assert_eq!(declarations[4]["excluded"]["source"], "static-modifier");
    assert_eq!(declarations[4]["required"]["value"], true);

    Ok(())
}

#[test]
fn test_resolve_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("api/users.json", USER_API)?;
    test.write_file(
        ".docviewrc.json",
        r#"{ "nameUseSwagger2": false, "titleUseFullClassName": false, "requiredUseCommentTag": false }"#,
    )?;

    let output = test.resolve_command().arg("api").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("title: UserController\n"));
    assert!(stdout.contains("operation name: create\n"));
    // Only the annotated parameter stays required once comment rules are off
    assert!(stdout.contains("excluded: true\n      required: false\n"));
    assert_eq!(stdout.matches("required: true").count(), 1);
    assert!(!stderr(&output).contains("No .docviewrc.json found"));

    Ok(())
}

#[test]
fn test_resolve_explicit_config() -> Result<()> {
    let test = CliTest::with_file("api/users.json", USER_API)?;
    test.write_file("conf/docview.json", r#"{ "titleUseCommentTag": false }"#)?;

    let output = test
        .resolve_command()
        .args(["api/users.json", "--config", "conf/docview.json", "--explain"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("title: com.acme.User (qualified-name)"));
    assert!(stdout.contains("required: true (missing-comment)"));

    Ok(())
}

#[test]
fn test_resolve_directory() -> Result<()> {
    let test = CliTest::with_file("api/b.json", USER_API)?;
    test.write_file("api/a.json", r#"{ "declarations": [] }"#)?;

    let output = test.resolve_command().arg(test.root().join("api")).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    let a = stdout.find("a.json").expect("a.json listed");
    let b = stdout.find("b.json").expect("b.json listed");
    assert!(a < b);
    assert!(stdout.contains("Resolved 7 declarations in 2 files"));

    Ok(())
}

#[test]
fn test_resolve_invalid_document() -> Result<()> {
    let test = CliTest::with_file(
        "api.json",
        r#"{ "declarations": [{ "kind": "module", "simpleName": "x" }] }"#,
    )?;

    let output = test.resolve_command().arg("api.json").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to parse declaration file: api.json"));

    Ok(())
}

#[test]
fn test_resolve_invalid_config() -> Result<()> {
    let test = CliTest::with_file("api.json", r#"{ "declarations": [] }"#)?;
    test.write_file(".docviewrc.json", r#"{ "requiredTagName": " " }"#)?;

    let output = test.resolve_command().arg("api.json").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'requiredTagName' must not be blank"));

    Ok(())
}

#[test]
fn test_verbose_logs_sources() -> Result<()> {
    let test = CliTest::with_file("api.json", USER_API)?;

    let output = test.resolve_command().args(["api.json", "-v"]).output()?;
    assert!(output.status.success());

    let stderr = stderr(&output);
    assert!(stderr.contains("loaded declarations"));
    assert!(stderr.contains("resolved operation name"));

    Ok(())
}
