use temp_dir::TempDir;

// Own test binary: environment variables are process wide.
#[test]
fn test_environment_overrides_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("adesao.toml");
    std::fs::write(
        &path,
        "[server]\nhost = \"0.0.0.0\"\nport = 8080\n\n[observability]\nlog_level = \"info\"\n",
    )?;

    // SAFETY: the only test in this binary, no other thread reads the environment.
    unsafe {
        std::env::set_var("ADESAO__SERVER__PORT", "9090");
        std::env::set_var("ADESAO__CONTACT__MAILTO", "imprensa@adesao.ao");
        std::env::set_var("ADESAO__OBSERVABILITY__LOG_LEVEL", "debug");
    }

    let config = adesao::Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.contact.mailto, "imprensa@adesao.ao");
    assert_eq!(config.observability.log_level, "debug");

    Ok(())
}
