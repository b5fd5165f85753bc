use anyhow::Result;
use std::fs;

use growl::workspace::{Workspace, CONFIG_TEMPLATE};
use growl::GrowlError;

#[test]
fn test_init_creates_config() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let ws = Workspace::new(temp_dir.path().to_path_buf());

    assert!(!ws.exists());
    ws.init()?;
    assert!(ws.exists());

    let content = fs::read_to_string(ws.config_path())?;
    assert_eq!(content, CONFIG_TEMPLATE);

    // The scaffolded file loads cleanly
    let config = ws.load_config()?;
    assert!(!config.commands.is_empty());

    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let ws = Workspace::new(temp_dir.path().to_path_buf());

    let original = "commands:\n  - name: mine\n    command: echo mine\n";
    fs::write(ws.config_path(), original)?;

    let err = ws.init().unwrap_err();
    assert!(matches!(err, GrowlError::ConfigExists(_)));

    // Existing file must be untouched
    assert_eq!(fs::read_to_string(ws.config_path())?, original);

    Ok(())
}

#[test]
fn test_missing_config() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let ws = Workspace::new(temp_dir.path().to_path_buf());

    let err = ws.load_config().unwrap_err();
    assert!(matches!(err, GrowlError::ConfigNotFound(_)));
    assert!(err.to_string().contains("growl init"));

    Ok(())
}

#[test]
fn test_malformed_config() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let ws = Workspace::new(temp_dir.path().to_path_buf());

    fs::write(ws.config_path(), "commands: [name: broken\n")?;

    let err = ws.load_config().unwrap_err();
    assert!(matches!(err, GrowlError::ConfigParse { .. }));

    Ok(())
}
