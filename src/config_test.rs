use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 443 ")), Ok(443));
}

#[test]
fn parse_port_rejects_invalid_values() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
}

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None), Ok(DEFAULT_BIND_ADDR));
    assert_eq!(parse_bind_addr(Some("")), Ok(DEFAULT_BIND_ADDR));
}

#[test]
fn parse_bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(parse_bind_addr(Some("::1")), Ok("::1".parse::<IpAddr>().unwrap()));
}

#[test]
fn parse_bind_addr_rejects_hostnames() {
    assert_eq!(
        parse_bind_addr(Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn socket_addr_combines_fields() {
    let cfg = ServerConfig { bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000 };
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn default_config_listens_on_all_interfaces() {
    assert_eq!(ServerConfig::default().socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn config_error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort("x".into()).to_string().contains("PORT"));
    assert!(ConfigError::InvalidBindAddr("x".into()).to_string().contains("BIND_ADDR"));
}

#[test]
fn dotenv_failure_ignores_success_and_missing_file() {
    assert!(dotenv_failure(Ok(())).is_none());
    let missing = std::env::temp_dir().join("profile-space-no-such-dir").join(".env");
    assert!(dotenv_failure(dotenvy::from_path(&missing)).is_none());
}

#[test]
fn dotenv_failure_reports_malformed_file() {
    let path = std::env::temp_dir().join(format!("profile-space-bad-{}.env", std::process::id()));
    std::fs::write(&path, "NOT A VALID LINE\n").unwrap();
    let failure = dotenv_failure(dotenvy::from_path(&path));
    std::fs::remove_file(&path).unwrap();
    assert!(failure.is_some());
}
