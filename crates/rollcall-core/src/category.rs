//! Category tree nodes.
//!
//! Categories form a tree used to organise activity groups ("Sports" →
//! "Soccer", "Swimming"). A node is either a *branch* (has subcategories and
//! routes collection to its children) or a *leaf* (holds groups directly) —
//! never both. Branch nodes may carry attached groups in the data, but the
//! collector ignores those; only leaves contribute groups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::group::ActivityGroup;

/// One node of the category tree, with its directly attached groups eagerly
/// loaded. Read-only for the audience engine; category management lives
/// elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
  pub category_id:   Uuid,
  pub name:          String,
  /// Child category ids, in display order. Empty for a leaf.
  pub subcategories: Vec<Uuid>,
  /// Groups filed directly under this node. Empty for purely
  /// organisational nodes.
  pub groups:        Vec<ActivityGroup>,
}

impl CategoryNode {
  /// A branch routes collection to its children.
  pub fn is_branch(&self) -> bool { !self.subcategories.is_empty() }

  /// A leaf is a terminal holder of groups.
  pub fn is_leaf(&self) -> bool { self.subcategories.is_empty() }
}
