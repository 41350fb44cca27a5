//! Fixed house relations used to spread a transformation from its own
//! house: đối cung (opposite), nhị hợp (paired) and tam hợp (triadic).
//!
//! All three are static properties of the branch cycle and never change.

use crate::branch::Branch;

/// Đối cung: the branch six houses away.
pub const fn opposite(b: Branch) -> Branch {
    match b {
        Branch::Ty => Branch::Ngo,
        Branch::Ngo => Branch::Ty,
        Branch::Suu => Branch::Mui,
        Branch::Mui => Branch::Suu,
        Branch::Dan => Branch::Than,
        Branch::Than => Branch::Dan,
        Branch::Mao => Branch::Dau,
        Branch::Dau => Branch::Mao,
        Branch::Thin => Branch::Tuat,
        Branch::Tuat => Branch::Thin,
        Branch::Ti => Branch::Hoi,
        Branch::Hoi => Branch::Ti,
    }
}

/// Nhị hợp (six harmonies) partner.
pub const fn paired(b: Branch) -> Branch {
    match b {
        Branch::Ty => Branch::Suu,
        Branch::Suu => Branch::Ty,
        Branch::Dan => Branch::Hoi,
        Branch::Hoi => Branch::Dan,
        Branch::Mao => Branch::Tuat,
        Branch::Tuat => Branch::Mao,
        Branch::Thin => Branch::Dau,
        Branch::Dau => Branch::Thin,
        Branch::Ti => Branch::Than,
        Branch::Than => Branch::Ti,
        Branch::Ngo => Branch::Mui,
        Branch::Mui => Branch::Ngo,
    }
}

/// Tam hợp partners: the other two members of the branch's triad.
pub const fn triadic(b: Branch) -> [Branch; 2] {
    match b {
        Branch::Ty => [Branch::Than, Branch::Thin],
        Branch::Than => [Branch::Ty, Branch::Thin],
        Branch::Thin => [Branch::Ty, Branch::Than],

        Branch::Hoi => [Branch::Mao, Branch::Mui],
        Branch::Mao => [Branch::Hoi, Branch::Mui],
        Branch::Mui => [Branch::Hoi, Branch::Mao],

        Branch::Dan => [Branch::Ngo, Branch::Tuat],
        Branch::Ngo => [Branch::Dan, Branch::Tuat],
        Branch::Tuat => [Branch::Dan, Branch::Ngo],

        Branch::Ti => [Branch::Dau, Branch::Suu],
        Branch::Dau => [Branch::Ti, Branch::Suu],
        Branch::Suu => [Branch::Ti, Branch::Dau],
    }
}

/// The four tam hợp groups.
pub const TRIADIC_GROUPS: [[Branch; 3]; 4] = [
    [Branch::Than, Branch::Ty, Branch::Thin],
    [Branch::Ti, Branch::Dau, Branch::Suu],
    [Branch::Dan, Branch::Ngo, Branch::Tuat],
    [Branch::Hoi, Branch::Mao, Branch::Mui],
];

/// Index into [`TRIADIC_GROUPS`] of the group containing `b`.
pub const fn triadic_group_index(b: Branch) -> usize {
    (b.index() % 4) as usize
}
