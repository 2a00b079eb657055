//! Group-to-recipient expansion.
//!
//! Pure functions: no I/O, no shared accumulator. Duplicates are permitted
//! here — deduplication is the audience's concern, applied afterwards. The
//! emission order is what makes first-write-wins deterministic: group by
//! group, and within a group all members, then all guardians (in member
//! order), then staff.

use std::collections::HashSet;

use uuid::Uuid;

use rollcall_core::{Recipient, group::ActivityGroup, person::Member};

/// Expand one group into recipient candidates, all members included.
pub fn expand_group(group: &ActivityGroup) -> Vec<Recipient> {
  expand_filtered(group, |_| true)
}

/// Expand one group for an event occurrence: only members whose person id is
/// in `participants` are emitted, and only their guardians. Staff are
/// emitted unchanged.
pub fn expand_group_for_event(
  group: &ActivityGroup,
  participants: &HashSet<Uuid>,
) -> Vec<Recipient> {
  expand_filtered(group, |member| participants.contains(&member.person.person_id))
}

/// Expand several groups, group by group, in the order given.
pub fn expand_groups<'a, I>(groups: I) -> Vec<Recipient>
where
  I: IntoIterator<Item = &'a ActivityGroup>,
{
  groups.into_iter().flat_map(expand_group).collect()
}

fn expand_filtered<F>(group: &ActivityGroup, keep: F) -> Vec<Recipient>
where
  F: Fn(&Member) -> bool,
{
  let members: Vec<&Member> = group.members.iter().filter(|m| keep(m)).collect();

  let mut candidates = Vec::new();
  for member in &members {
    candidates.push(Recipient::member(&member.person));
  }
  for member in &members {
    for link in &member.guardians {
      candidates.push(Recipient::guardian(&link.guardian));
    }
  }
  for person in &group.staff {
    candidates.push(Recipient::staff(person));
  }
  candidates
}
