use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for applications embedding the client.
///
/// Honors `RUST_LOG`; defaults to `info` for this crate and quiets the HTTP
/// stack. Safe to call once per process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,nexcart_client=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
