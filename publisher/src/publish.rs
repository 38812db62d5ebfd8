use anyhow::Result;

use crate::archive;
use crate::args::PublishArgs;
use crate::store::StoreClient;

/// Linear run: assemble the archive, create the tag, upload the archive,
/// associate the tag. Any unexpected status aborts immediately; side effects
/// of completed steps are left in place.
pub async fn run(args: &PublishArgs) -> Result<()> {
    let store = StoreClient::new(&args.url, &args.username, &args.password, args.timeout_secs)?;

    let bundle = archive::assemble(&args.files, &std::env::temp_dir())?;

    store.create_tag(&args.tag).await?;

    let name = store
        .upload_bundle(&args.repository, &bundle, args.directory.as_deref())
        .await?;

    let group = args.directory.as_deref().unwrap_or("");
    store
        .associate_tag(&args.tag, &args.repository, group, &name)
        .await?;

    Ok(())
}
