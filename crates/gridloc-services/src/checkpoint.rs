use crate::Result;
use gridloc_domain::Checkpoint;
use std::path::Path;

/// Load a previously persisted checkpoint; absence is not an error.
pub fn load_checkpoint(path: &Path) -> Result<Option<Checkpoint>> {
    let s = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let cp: Checkpoint = serde_json::from_str(&s)?;
    Ok(Some(cp))
}

/// Persist progress after a fully processed unit so a re-invocation can
/// continue rather than restart.
pub fn save_checkpoint(path: &Path, cp: &Checkpoint) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(cp)?;
    crate::util::write_atomic(path, &bytes)?;
    Ok(())
}

/// Remove the checkpoint once a run finishes cleanly.
pub fn clear_checkpoint(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("push.checkpoint.json");

        assert!(load_checkpoint(&path).unwrap().is_none());

        let cp = Checkpoint::new("Main", 3, 5);
        save_checkpoint(&path, &cp).unwrap();
        assert_eq!(load_checkpoint(&path).unwrap(), Some(cp));

        clear_checkpoint(&path).unwrap();
        assert!(load_checkpoint(&path).unwrap().is_none());
        // Clearing twice is fine.
        clear_checkpoint(&path).unwrap();
    }
}
