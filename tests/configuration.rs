use temp_dir::TempDir;

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("adesao.toml");
    std::fs::write(
        &path,
        "[server]\nhost = \"0.0.0.0\"\nport = 8080\n\n[contact]\nmailto = \"geral@adesao.ao\"\n",
    )?;

    let config = adesao::Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.contact.mailto, "geral@adesao.ao");
    assert_eq!(config.contact.subject, "Contacto Programa de Adesão");
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_missing_explicit_file_is_an_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("nao-existe.toml");

    let result = adesao::Config::load(Some(path.to_string_lossy().into_owned()));

    assert!(result.is_err());

    Ok(())
}
