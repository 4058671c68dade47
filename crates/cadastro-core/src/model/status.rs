// ── Record status ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Active/inactive flag. Stored as a small integer: `1` is active and any
/// other value is inactive (the backend itself uses `2`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Status {
    #[strum(serialize = "Ativo")]
    Active,
    #[strum(serialize = "Inativo")]
    Inactive,
}

impl Status {
    pub const ACTIVE_CODE: i32 = 1;

    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(Self::ACTIVE_CODE) => Self::Active,
            _ => Self::Inactive,
        }
    }
}
