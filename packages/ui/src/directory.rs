//! Directory context and hooks for the UI.

use api::UsersApi;
use dioxus::prelude::*;
use store::{ClientConfig, UserDirectory};

use crate::views::UsersView;

/// Consume the `Signal<UserDirectory>` from context.
pub fn use_directory() -> Signal<UserDirectory> {
    use_context::<Signal<UserDirectory>>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Root of the user management page, generic over the gateway. Creates the
/// directory state once and shares it and the config through context.
#[component]
pub fn UsersApp<A: UsersApi + Clone + PartialEq + 'static>(config: ClientConfig, api: A) -> Element {
    let directory = use_signal(UserDirectory::new);
    use_context_provider(|| directory);
    use_context_provider(|| config.clone());

    rsx! {
        UsersView::<A> { api }
    }
}
