//! Category subtree collection.
//!
//! Walks a category node and everything beneath it, gathering each attached
//! activity group exactly once. Two-case node policy: a *branch* (one or
//! more subcategories) contributes only via its children — any groups
//! attached to the branch itself are ignored — while a *leaf* contributes
//! its attached groups directly. A node is never both.

use std::collections::HashSet;

use tracing::{debug, trace};
use uuid::Uuid;

use rollcall_core::{group::ActivityGroup, store::DirectoryStore};

use crate::{CancelToken, Error, Result};

/// Collect every activity group filed under the subtree rooted at `root`.
///
/// Depth-first, left-to-right, one store fetch in flight at a time. Groups
/// are deduplicated by `group_id` — a group reachable through two leaf paths
/// appears once, at its first-encountered position. Category ids already
/// visited in this call are skipped, so a cyclic subcategory graph
/// terminates with the groups reachable before the repeat.
///
/// Fails fast: an unresolvable category id (the root included) or a backend
/// failure anywhere in the walk aborts the whole collection.
pub async fn collect_groups<D: DirectoryStore>(
  store: &D,
  root: Uuid,
  cancel: &CancelToken,
) -> Result<Vec<ActivityGroup>> {
  let mut visited: HashSet<Uuid> = HashSet::new();
  let mut seen_groups: HashSet<Uuid> = HashSet::new();
  let mut groups: Vec<ActivityGroup> = Vec::new();

  // Children are pushed in reverse so pop order matches the left-to-right
  // recursive walk this replaces.
  let mut pending: Vec<Uuid> = vec![root];

  while let Some(id) = pending.pop() {
    cancel.check()?;
    if !visited.insert(id) {
      trace!(category = %id, "category already visited, skipping branch");
      continue;
    }

    let node = store
      .category_node(id)
      .await
      .map_err(Error::directory)?
      .ok_or(Error::CategoryNotFound(id))?;

    if node.is_branch() {
      trace!(category = %id, children = node.subcategories.len(), "descending into branch");
      pending.extend(node.subcategories.into_iter().rev());
    } else {
      trace!(category = %id, attached = node.groups.len(), "collecting leaf");
      for group in node.groups {
        if seen_groups.insert(group.group_id) {
          groups.push(group);
        }
      }
    }
  }

  debug!(
    root = %root,
    categories = visited.len(),
    groups = groups.len(),
    "collected subtree"
  );
  Ok(groups)
}
