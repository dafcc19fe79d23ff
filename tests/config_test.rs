use agentdeck::cli::Cli;
use agentdeck::config::Settings;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_settings_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("agentdeck.toml");
    fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[limits]
max_agents = 5
"#,
    )?;

    let settings = Settings::from_file(&path)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.limits.max_agents, 5);
    assert_eq!(settings.limits.max_sources, 100);
    Ok(())
}

#[test]
fn test_cli_overrides_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("agentdeck.toml");
    fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 8080\n")?;

    let cli = Cli::parse_from([
        "agentdeck",
        "--config",
        path.to_str().unwrap(),
        "--port",
        "9090",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 9090);
    Ok(())
}

#[test]
fn test_invalid_limits_are_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("agentdeck.toml");
    fs::write(&path, "[limits]\nmax_agents = 0\n")?;

    let err = Settings::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("limits.max_agents"));
    Ok(())
}
