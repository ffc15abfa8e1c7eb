pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod rotate;

use api::DoClient;
use config::CliArgs;
use error::RotateError;

/// Full rotation pass: prune each droplet's old snapshots, then create one
/// fresh snapshot per droplet.
pub async fn run(cli: CliArgs) -> Result<(), RotateError> {
    let config = cli.resolve()?;
    let client = DoClient::new(&config)?;

    let all = client.list_droplet_snapshots().await?;
    let mut snapshots = rotate::filter_by_name(all, &config.snapshot_name);
    rotate::sort_by_creation(&mut snapshots);

    for &droplet_id in &config.droplets {
        println!("Cleaning droplet {droplet_id} snapshots");
        let owned = rotate::snapshots_for_droplet(&snapshots, droplet_id);
        let doomed = rotate::prune_count(owned.len(), config.max_snapshots);

        for snapshot in &owned[..doomed] {
            if let Err(err) = client.delete_snapshot(&snapshot.id).await {
                eprintln!("failed to delete snapshot {}: {}", snapshot.id, err);
            }
        }
    }

    println!();

    for &droplet_id in &config.droplets {
        println!("Snapshotting droplet {droplet_id}");
        if let Err(err) = client
            .snapshot_droplet(droplet_id, &config.snapshot_name)
            .await
        {
            eprintln!("failed to snapshot droplet {droplet_id}: {err}");
        }
    }

    Ok(())
}
