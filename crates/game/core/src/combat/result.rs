//! Combat result types.

/// A single damage resolution, as reported to presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub attacker: String,
    pub target: String,
    /// Damage actually subtracted from the target's energy.
    pub damage: i32,
    /// Target energy after the strike landed.
    pub target_energy: i32,
}

/// A single energy recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heal {
    pub name: String,
    pub amount: i32,
    /// Energy after healing.
    pub energy: i32,
}
