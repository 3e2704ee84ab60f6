//! Race script functions
//!
//! Read-only accessors for [`TESRace`](fire_sdk::TESRace) records, exposed
//! to scripts as global functions of the plugin's script class:
//!
//! ```text
//! int      GetRaceSkillBonus(Race akRace, string asSkill)
//! string[] GetRaceSkills(Race akRace)
//! float    GetRaceMaleHeight(Race akRace)
//! float    GetRaceFemaleHeight(Race akRace)
//! ...
//! ```
//!
//! Every accessor checks its handle first. An empty handle is traced to the
//! calling stack and answered with a sentinel: `-1` for numbers, an empty
//! array for `GetRaceSkills`.

use std::sync::Arc;

use fire_engine::{ActorValueResolver, NativeFunction, RegisterFunction, StackId, TraceStack};
use fire_sdk::Sex;

use super::RegistrationTable;
use crate::handle::RaceHandle;

/// Returned by integer accessors for an empty handle or missing entry
pub const NOT_FOUND: i32 = -1;

/// Returned by float accessors for an empty handle
pub const NOT_FOUND_FLOAT: f32 = -1.0;

/// Bonus a race grants to the named skill
///
/// Scans the race's skill boosts in authored order and returns the first
/// match. Names the resolver doesn't know never match.
pub fn get_race_skill_bonus(
    vm: &dyn TraceStack,
    stack_id: StackId,
    race: RaceHandle<'_>,
    actor_value: &str,
    resolver: &dyn ActorValueResolver,
) -> i32 {
    let Some(race) = race.resolve(vm, stack_id) else {
        return NOT_FOUND;
    };

    let skill = resolver.lookup_id(actor_value);

    race.data
        .skill_boosts
        .iter()
        .find(|boost| !boost.skill.is_none() && boost.skill == skill)
        .map_or(NOT_FOUND, |boost| i32::from(boost.bonus))
}

/// Names of all skills a race boosts, in authored order
pub fn get_race_skills(
    vm: &dyn TraceStack,
    stack_id: StackId,
    race: RaceHandle<'_>,
    resolver: &dyn ActorValueResolver,
) -> Vec<String> {
    let Some(race) = race.resolve(vm, stack_id) else {
        return Vec::new();
    };

    race.data
        .skill_boosts
        .iter()
        .map(|boost| resolver.lookup_name(boost.skill))
        .collect()
}

/// Generates `get_race_<field>` float accessors
macro_rules! race_accessors {
    ($($(#[$meta:meta])* $field:ident => |$data:ident| $read:expr;)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                pub fn [<get_race_ $field>](
                    vm: &dyn TraceStack,
                    stack_id: StackId,
                    race: RaceHandle<'_>,
                ) -> f32 {
                    match race.resolve(vm, stack_id) {
                        Some(race) => {
                            let $data = &race.data;
                            $read
                        }
                        None => NOT_FOUND_FLOAT,
                    }
                }
            )*
        }
    };
}

race_accessors! {
    male_height => |data| data.height(Sex::Male);
    female_height => |data| data.height(Sex::Female);
    male_weight => |data| data.weight(Sex::Male);
    female_weight => |data| data.weight(Sex::Female);

    starting_health => |data| data.starting_health;
    starting_magicka => |data| data.starting_magicka;
    starting_stamina => |data| data.starting_stamina;

    /// Base carry weight, before actor value modifiers
    carry_weight => |data| data.base_carry_weight;
    /// Base mass used by the physics system
    mass => |data| data.base_mass;

    health_regen => |data| data.health_regen;
    magicka_regen => |data| data.magicka_regen;
    stamina_regen => |data| data.stamina_regen;

    unarmed_damage => |data| data.unarmed_damage;
    unarmed_reach => |data| data.unarmed_reach;
}

type FloatAccessor = fn(&dyn TraceStack, StackId, RaceHandle<'_>) -> f32;

/// Wrap a float accessor taking only the race
fn float_function(accessor: FloatAccessor) -> NativeFunction {
    NativeFunction::new(1, move |vm, stack_id, args| {
        Ok(accessor(vm, stack_id, args.race(0)?.into()).into())
    })
}

/// Build the registration table for all race functions
///
/// Order is fixed; scripts see the same set on every load.
pub fn race_functions(resolver: Arc<dyn ActorValueResolver>) -> RegistrationTable {
    let mut table = RegistrationTable::new();

    let bonus_resolver = Arc::clone(&resolver);
    table.add(
        "GetRaceSkillBonus",
        NativeFunction::new(2, move |vm, stack_id, args| {
            let race = args.race(0)?;
            let actor_value = args.string(1)?;
            Ok(get_race_skill_bonus(
                vm,
                stack_id,
                race.into(),
                actor_value,
                bonus_resolver.as_ref(),
            )
            .into())
        }),
    );
    table.add(
        "GetRaceSkills",
        NativeFunction::new(1, move |vm, stack_id, args| {
            let race = args.race(0)?;
            Ok(get_race_skills(vm, stack_id, race.into(), resolver.as_ref()).into())
        }),
    );

    table
        .add("GetRaceMaleHeight", float_function(get_race_male_height))
        .add("GetRaceMaleWeight", float_function(get_race_male_weight))
        .add("GetRaceFemaleHeight", float_function(get_race_female_height))
        .add("GetRaceFemaleWeight", float_function(get_race_female_weight));

    table
        .add("GetRaceStartingHealth", float_function(get_race_starting_health))
        .add("GetRaceStartingMagicka", float_function(get_race_starting_magicka))
        .add("GetRaceStartingStamina", float_function(get_race_starting_stamina));

    table
        .add("GetRaceCarryWeight", float_function(get_race_carry_weight))
        .add("GetRaceMass", float_function(get_race_mass));

    table
        .add("GetRaceHealthRegen", float_function(get_race_health_regen))
        .add("GetRaceMagickaRegen", float_function(get_race_magicka_regen))
        .add("GetRaceStaminaRegen", float_function(get_race_stamina_regen));

    table
        .add("GetRaceUnarmedDamage", float_function(get_race_unarmed_damage))
        .add("GetRaceUnarmedReach", float_function(get_race_unarmed_reach));

    table
}

/// Register all race functions under `class_name`
///
/// Returns false, registering nothing, if no VM is available.
pub fn register_funcs(
    vm: Option<&mut dyn RegisterFunction>,
    class_name: &str,
    resolver: Arc<dyn ActorValueResolver>,
) -> bool {
    let table = race_functions(resolver);

    match table.register(vm, class_name) {
        Ok(accepted) => {
            tracing::info!(
                "PapyrusRace - registered {}/{} functions under {}",
                accepted,
                table.len(),
                class_name
            );
            true
        }
        Err(e) => {
            tracing::info!("PapyrusRace - {}", e);
            false
        }
    }
}
