pub fn init() {
    use tracing_subscriber::EnvFilter;

    // the shell may call this more than once, later calls are no-ops
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}
