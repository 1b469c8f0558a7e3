use api::HttpUsersApi;
use dioxus::prelude::*;
use store::ClientConfig;
use ui::UsersApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../userdesk.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled config, falling back to defaults if it is broken.
fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{} ignored: {e}", ClientConfig::filename());
            ClientConfig::default()
        }
    }
}

fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Build the gateway for `origin`. Failures are logged here, once.
fn connect(config: &ClientConfig, origin: &str) -> Result<HttpUsersApi, String> {
    let api = HttpUsersApi::from_origin(origin, &config.api.users_path).map_err(|e| {
        tracing::error!("user API unavailable: {e}");
        format!("Unable to reach the user API: {e}")
    })?;
    tracing::info!("user API at {}", api.base());
    Ok(api)
}

fn setup() -> Result<(ClientConfig, HttpUsersApi), String> {
    let config = load_config();
    let origin = page_origin().unwrap_or_else(|| "http://localhost:8080".to_string());
    let api = connect(&config, &origin)?;
    Ok((config, api))
}

#[component]
fn App() -> Element {
    let setup = use_hook(setup);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match setup {
            Ok((config, api)) => rsx! {
                UsersApp::<HttpUsersApi> { config, api }
            },
            Err(message) => rsx! {
                p { class: "startup-error", "{message}" }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        assert!(ClientConfig::from_toml(CONFIG_TOML).is_ok());
    }

    #[test]
    fn test_connect_resolves_against_origin() {
        let api = connect(&ClientConfig::default(), "http://localhost:3000").unwrap();
        assert_eq!(api.base().as_str(), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_connect_reports_bad_origin() {
        let err = connect(&ClientConfig::default(), "not an origin").unwrap_err();
        assert!(err.starts_with("Unable to reach the user API"));
    }
}
