#![cfg(windows)]

use anyhow::Result;
use std::fs;

use growl::config::GrowlConfig;
use growl::dispatch::Dispatcher;

#[test]
fn test_cmd_keeps_quotes_intact() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config = GrowlConfig::from_yaml(
        "commands:\n  - name: quote\n    command: echo \"%1\"> out.txt\n",
    )?;

    Dispatcher::new(&config)?
        .with_current_dir(temp_dir.path())
        .run(&["quote".to_string(), "hi".to_string()])?;

    assert_eq!(fs::read_to_string(temp_dir.path().join("out.txt"))?, "\"hi\"\r\n");
    Ok(())
}
