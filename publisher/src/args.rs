use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct PublishArgs {
    /// Base URL of the artifact store
    #[arg(long, env = "STORE_URL")]
    pub url: String,

    /// Hosted repository the bundle is uploaded into
    #[arg(long, env = "STORE_REPOSITORY")]
    pub repository: String,

    /// Tag to create and associate with the uploaded bundle
    #[arg(long, env = "STORE_TAG")]
    pub tag: String,

    /// Directory inside the repository to upload into; the bundle lands at
    /// the repository root when omitted
    #[arg(long)]
    pub directory: Option<String>,

    /// Store account username
    #[arg(long, env = "STORE_USERNAME")]
    pub username: String,

    /// Store account password or token
    #[arg(long, env = "STORE_PASSWORD")]
    pub password: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Local files to bundle and publish
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
