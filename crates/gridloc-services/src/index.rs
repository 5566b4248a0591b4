use gridloc_domain::RemoteString;
use gridloc_tms::{TmsApi, TmsError};
use std::collections::HashMap;

/// Left-to-right over one bounded list-strings fetch: everything the TMS
/// already holds for a branch, keyed by identifier, so the push loop can
/// decide create-vs-update in O(1).
pub struct RemoteStringIndex {
    by_identifier: HashMap<String, RemoteString>,
}

impl RemoteStringIndex {
    pub fn load(api: &dyn TmsApi, branch_id: u64, limit: usize) -> Result<Self, TmsError> {
        let strings = api.list_strings(branch_id, limit)?;
        let mut by_identifier = HashMap::with_capacity(strings.len());
        for s in strings {
            by_identifier.insert(s.identifier.clone(), s);
        }
        Ok(Self { by_identifier })
    }

    pub fn get(&self, identifier: &str) -> Option<&RemoteString> {
        self.by_identifier.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

/// First branch listed is the active one; a project without branches works
/// on the default, unbranched id 0. Neither case is an error.
pub fn resolve_active_branch(api: &dyn TmsApi) -> Result<u64, TmsError> {
    let branches = api.list_branches()?;
    Ok(branches.first().map(|b| b.id).unwrap_or(0))
}
