use dioxus::prelude::*;
use quantum_types::QuantumConfig;

/// Make `config` the library defaults for everything below.
#[component]
pub fn ConfigProvider(config: QuantumConfig, children: Element) -> Element {
    let mut provided = use_context_provider(|| Signal::new(config.clone()));
    use_effect(use_reactive((&config,), move |(config,)| {
        if *provided.peek() != config {
            tracing::debug!("quantum config replaced");
            provided.set(config);
        }
    }));

    rsx! {
        {children}
    }
}

/// The nearest provided configuration, or the built-in defaults.
pub fn use_quantum_config() -> QuantumConfig {
    match try_use_context::<Signal<QuantumConfig>>() {
        Some(config) => config(),
        None => QuantumConfig::default(),
    }
}
