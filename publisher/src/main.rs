mod archive;
mod args;
mod publish;
mod store;

use clap::Parser;

use crate::args::PublishArgs;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let publish_args = PublishArgs::parse();
    match publish::run(&publish_args).await {
        Ok(_) => {}
        Err(err) => {
            eprintln!("{err:?}");
            std::process::exit(1);
        }
    }
}
