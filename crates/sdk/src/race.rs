//! Race record definitions
//!
//! `TESRace` is owned by the host engine. Bindings only ever see it through
//! a shared borrow; nothing in this workspace creates records at runtime
//! except tests and host-side tooling.

use crate::actor_value::ActorValue;

/// Character sex, used to index the per-sex race tables
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male = 0,
    Female = 1,
}

impl Sex {
    /// Number of sexes stored per table
    pub const COUNT: usize = 2;

    /// Index into a per-sex table
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A single skill boost granted by a race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillBoost {
    /// Boosted actor value
    pub skill: ActorValue,
    /// Bonus applied to the skill
    pub bonus: i8,
}

impl SkillBoost {
    pub const fn new(skill: ActorValue, bonus: i8) -> Self {
        Self { skill, bonus }
    }
}

/// Physical and statistical parameters of a race
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RaceData {
    /// Skill boosts in authored order
    pub skill_boosts: Vec<SkillBoost>,
    /// Height scale, indexed by [`Sex::index`]
    pub height: [f32; Sex::COUNT],
    /// Weight, indexed by [`Sex::index`]
    pub weight: [f32; Sex::COUNT],
    pub starting_health: f32,
    pub starting_magicka: f32,
    pub starting_stamina: f32,
    pub base_carry_weight: f32,
    pub base_mass: f32,
    pub health_regen: f32,
    pub magicka_regen: f32,
    pub stamina_regen: f32,
    pub unarmed_damage: f32,
    pub unarmed_reach: f32,
}

impl RaceData {
    /// Height for the given sex
    #[inline]
    pub fn height(&self, sex: Sex) -> f32 {
        self.height[sex.index()]
    }

    /// Weight for the given sex
    #[inline]
    pub fn weight(&self, sex: Sex) -> f32 {
        self.weight[sex.index()]
    }
}

/// Race form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TESRace {
    /// Form ID
    pub form_id: u32,
    /// Editor ID (e.g., "NordRace")
    pub editor_id: String,
    /// Race data block
    pub data: RaceData,
}

impl TESRace {
    pub fn new(form_id: u32, editor_id: impl Into<String>, data: RaceData) -> Self {
        Self {
            form_id,
            editor_id: editor_id.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_sex_tables() {
        let data = RaceData {
            height: [1.03, 0.98],
            weight: [1.5, 1.25],
            ..Default::default()
        };

        assert_eq!(data.height(Sex::Male), 1.03);
        assert_eq!(data.height(Sex::Female), 0.98);
        assert_eq!(data.weight(Sex::Male), 1.5);
        assert_eq!(data.weight(Sex::Female), 1.25);
    }

    #[test]
    fn test_sex_index() {
        assert_eq!(Sex::Male.index(), 0);
        assert_eq!(Sex::Female.index(), 1);
    }
}
