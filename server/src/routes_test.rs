use super::*;

fn site() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[test]
fn listen_addr_defaults_to_site_addr() {
    assert_eq!(listen_addr(site(), None), site());
    assert_eq!(listen_addr(site(), Some("  ")), site());
}

#[test]
fn listen_addr_applies_port_override() {
    assert_eq!(listen_addr(site(), Some("8080")), SocketAddr::from(([127, 0, 0, 1], 8080)));
    assert_eq!(listen_addr(site(), Some(" 9000 ")), SocketAddr::from(([127, 0, 0, 1], 9000)));
}

#[test]
fn listen_addr_ignores_invalid_port() {
    assert_eq!(listen_addr(site(), Some("http")), site());
    assert_eq!(listen_addr(site(), Some("70000")), site());
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn config_error_names_leptos() {
    let err = ServerError::Config("missing site-root".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing site-root");
}
