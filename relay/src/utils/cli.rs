use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Relay listening host
    #[arg(long, env = "RELAY_HOST", default_value = "127.0.0.1")]
    pub(crate) host: String,

    /// Relay listening port
    #[arg(short, long, env = "RELAY_PORT", default_value_t = 8080)]
    pub(crate) port: u16,

    /// Base URL of the upstream artifact store
    #[arg(long, env = "RELAY_UPSTREAM_URL")]
    pub(crate) upstream_url: String,

    /// Hosted repository uploads are written into
    #[arg(long, env = "RELAY_UPSTREAM_REPO")]
    pub(crate) repository: String,

    /// Service account username for the upstream store
    #[arg(long, env = "RELAY_UPSTREAM_USER")]
    pub(crate) username: String,

    /// Service account password or token for the upstream store
    #[arg(long, env = "RELAY_UPSTREAM_PASSWORD")]
    pub(crate) password: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "RELAY_UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub(crate) timeout_secs: u64,

    /// Largest accepted upload body in bytes
    #[arg(long, env = "RELAY_MAX_UPLOAD_BYTES", default_value_t = 1_073_741_824)]
    pub(crate) max_upload_bytes: usize,
}
