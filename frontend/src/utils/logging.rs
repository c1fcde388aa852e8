use tracing::Level;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

pub fn log_filter() -> Targets {
    Targets::new()
        .with_target("shared", Level::DEBUG)
        .with_target(env!("CARGO_CRATE_NAME"), Level::DEBUG)
        .with_default(Level::INFO)
}

/// Routes `tracing` events to the browser console.
pub fn init_tracing() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(Level::DEBUG)
        .build();
    tracing_subscriber::registry()
        .with(log_filter())
        .with(WASMLayer::new(config))
        .init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::registry;

    use super::*;

    #[test]
    fn shared_debug_events_are_enabled() {
        let filter = log_filter();
        assert!(filter.would_enable("shared::form", &Level::DEBUG));
        assert!(filter.would_enable("shared::flow", &Level::INFO));
        assert!(!filter.would_enable("reqwest::connect", &Level::DEBUG));
    }

    #[test]
    fn events_reach_the_subscriber() {
        let subscriber = registry().with(log_filter());
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "shared::flow", Level::INFO));
            assert!(tracing::enabled!(target: "shared::mount", Level::DEBUG));
        });
    }
}
