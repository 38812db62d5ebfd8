#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub repository: String,
    pub username: String,
    pub password: String,
    pub timeout_secs: u64,
    pub max_upload_bytes: usize,
}
