pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the global fmt subscriber. `RUST_LOG` refines the default
/// `finance_core=info` directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "finance_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // Logs go to stderr so scripted shell output stays clean.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
