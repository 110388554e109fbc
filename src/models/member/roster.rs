use super::types::{Member, MemberCategory};

/// Members split by category, each side in backend order.
#[derive(Debug, Clone, Default)]
pub struct MemberRoster {
    pub faculty: Vec<Member>,
    pub students: Vec<Member>,
}

/// Every member lands in exactly one side, chosen by its category.
pub fn partition_members(members: &[Member]) -> MemberRoster {
    let (faculty, students) = members
        .iter()
        .cloned()
        .partition(|m| m.category == MemberCategory::Faculty);
    MemberRoster { faculty, students }
}
