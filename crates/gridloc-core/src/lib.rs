/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;
