use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const MENU: &str = r#"using Godot;

public partial class Menu : Control
{
    private const string QuitLabel = "Quit";

    public override void _Ready()
    {
        // TRANSLATORS: main menu button
        GetNode<Button>("Start").Text = Tr("Start");
        Tr(QuitLabel); // leaves the game
        // NO_TRANSLATE
        Tr("debug overlay");
        GD.Print(Tr("Open", "door"));
    }

    public void UpdateLives(int lives)
    {
        GetNode<Label>("Lives").Text = TrN("life", "lives", lives);
        TranslationServer.TranslatePlural("coin", "coins", lives, "currency");
    }
}
"#;

#[test]
fn test_extract_json_single_file() -> Result<()> {
    let test = CliTest::with_file("scripts/Menu.cs", MENU)?;

    let (output, value) = test.extract_json(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        value,
        json!({
            "files": [{
                "path": "scripts/Menu.cs",
                "ids": ["Start", "Quit"],
                "idsComment": ["main menu button", "leaves the game"],
                "pluralEntries": [
                    ["Open", "door", ""],
                    ["life", "", "lives"],
                    ["coin", "currency", "coins"]
                ],
                "pluralComments": ["", "", ""]
            }],
            "errors": []
        })
    );

    Ok(())
}

#[test]
fn test_extract_text_output() -> Result<()> {
    let test = CliTest::with_file("Hud.cs", "using Godot;\npublic partial class Hud : Node\n{\n    void F() { Tr(\"Score\"); }\n}\n")?;

    let output = test.extract_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout,
        "Hud.cs:4  \"Score\"\n\n\u{2713} Extracted 1 string (1 plain, 0 with context or plural) from 1 file\n"
    );

    Ok(())
}

#[test]
fn test_extract_nothing_found() -> Result<()> {
    let test = CliTest::with_file("Plain.cs", "public class Plain { }\n")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\u{2713} No translatable strings found in 1 file\n"
    );

    Ok(())
}

#[test]
fn test_unrelated_tr_methods_are_not_extracted() -> Result<()> {
    let test = CliTest::with_file(
        "Localizer.cs",
        r#"using Godot;

public class Localizer
{
    public string Tr(string s) => s;

    public void Run()
    {
        Tr("mine");
        TranslationServer.Translate("engine");
    }
}
"#,
    )?;

    let (_, value) = test.extract_json(&[])?;

    assert_eq!(value["files"][0]["ids"], json!(["engine"]));

    Ok(())
}

#[test]
fn test_base_class_from_sibling_file() -> Result<()> {
    let test = CliTest::with_file(
        "scripts/BaseCharacter.cs",
        "using Godot;\n\npublic partial class BaseCharacter : CharacterBody2D { }\n",
    )?;
    test.write_file(
        "scripts/Player.cs",
        r#"using Godot;

public partial class Player : BaseCharacter
{
    public override void _Ready()
    {
        Tr("Jump");
    }
}
"#,
    )?;

    let (output, value) = test.extract_json(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        value,
        json!({
            "files": [{
                "path": "scripts/Player.cs",
                "ids": ["Jump"],
                "idsComment": [""],
                "pluralEntries": [],
                "pluralComments": []
            }],
            "errors": []
        })
    );

    Ok(())
}

#[test]
fn test_bad_file_is_reported_and_others_still_extracted() -> Result<()> {
    let test = CliTest::with_file("Good.cs", MENU)?;
    test.write_bytes("Bad.cs", &[0xff, 0xfe, 0x00, 0xc3])?;

    let (output, value) = test.extract_json(&[])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(value["files"][0]["path"], "Good.cs");
    assert_eq!(value["errors"][0]["path"], "Bad.cs");
    assert!(stderr.contains("warning: Bad.cs: Failed to read file"));
    assert!(stderr.contains("1 file could not be extracted"));

    Ok(())
}

#[test]
fn test_explicit_paths_limit_the_scan() -> Result<()> {
    let test = CliTest::with_file("scripts/Menu.cs", MENU)?;
    test.write_file(
        "tools/Other.cs",
        "using Godot;\npublic partial class Other : Node { void F() { Tr(\"other\"); } }\n",
    )?;

    let (_, value) = test.extract_json(&["tools"])?;

    let files = value["files"].as_array().cloned().unwrap_or_default();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "tools/Other.cs");
    assert_eq!(files[0]["ids"], json!(["other"]));

    Ok(())
}

#[test]
fn test_missing_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("Missing.cs").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Error: Path does not exist: Missing.cs"));

    Ok(())
}

#[test]
fn test_config_includes_and_ignores() -> Result<()> {
    let test = CliTest::with_file("scripts/Menu.cs", MENU)?;
    test.write_file(
        "scripts/addons/Plugin.cs",
        "using Godot;\npublic partial class Plugin : Node { void F() { Tr(\"plugin\"); } }\n",
    )?;
    test.write_file(
        "tools/Build.cs",
        "using Godot;\npublic partial class Build : Node { void F() { Tr(\"build\"); } }\n",
    )?;
    test.write_file(
        ".trawlrc.json",
        r#"{ "includes": ["scripts"], "ignores": ["**/addons/**"] }"#,
    )?;

    let (_, value) = test.extract_json(&[])?;

    let paths: Vec<&str> = value["files"]
        .as_array()
        .map(|files| files.iter().filter_map(|f| f["path"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(paths, vec!["scripts/Menu.cs"]);

    Ok(())
}

#[test]
fn test_generated_and_godot_dirs_are_skipped() -> Result<()> {
    let test = CliTest::with_file("Main.cs", MENU)?;
    test.write_file(".godot/mono/Cache.cs", MENU)?;
    test.write_file("obj/Debug/Assembly.cs", MENU)?;
    test.write_file("Menu.generated.cs", MENU)?;

    let (_, value) = test.extract_json(&[])?;

    let files = value["files"].as_array().cloned().unwrap_or_default();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "Main.cs");

    Ok(())
}

#[test]
fn test_source_root_option() -> Result<()> {
    let test = CliTest::with_file("game/Menu.cs", MENU)?;
    test.write_file("Outside.cs", MENU)?;

    let (_, value) = test.extract_json(&["--source-root", "game"])?;

    let files = value["files"].as_array().cloned().unwrap_or_default();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "game/Menu.cs");

    Ok(())
}
