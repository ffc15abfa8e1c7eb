use crate::api::Snapshot;

/// Snapshot count at which pruning kicks in for a droplet.
///
/// Deliberately a fixed constant rather than the `--max-snapshots` flag: the
/// tool this replaces only started deleting once a droplet had accumulated 7
/// snapshots, whatever retention was configured, and that behavior is kept
/// for compatibility. The number *retained* still follows the flag.
pub const PRUNE_TRIGGER: usize = 7;

/// Keep only snapshots whose name matches the configured name exactly.
pub fn filter_by_name(snapshots: Vec<Snapshot>, name: &str) -> Vec<Snapshot> {
    snapshots
        .into_iter()
        .filter(|snapshot| snapshot.name == name)
        .collect()
}

/// Stable ascending sort by creation time; epoch-defaulted entries sort first.
pub fn sort_by_creation(snapshots: &mut [Snapshot]) {
    snapshots.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}

/// Snapshots owned by the droplet, preserving the collection's order.
///
/// The API renders the owning resource as a string, so the droplet id is
/// compared by its decimal rendering.
pub fn snapshots_for_droplet(snapshots: &[Snapshot], droplet_id: u64) -> Vec<&Snapshot> {
    let id = droplet_id.to_string();
    snapshots
        .iter()
        .filter(|snapshot| snapshot.resource_id == id)
        .collect()
}

/// How many of the oldest snapshots to delete for a droplet that currently
/// has `current` of them.
///
/// Below [`PRUNE_TRIGGER`] nothing is deleted. At or above it, enough are
/// deleted that `max_snapshots - 1` survive, so the creation step that
/// follows brings the droplet back to exactly `max_snapshots`.
pub fn prune_count(current: usize, max_snapshots: usize) -> usize {
    if current < PRUNE_TRIGGER {
        return 0;
    }
    current.saturating_sub(max_snapshots.saturating_sub(1))
}
