//! Per-frame roster update.

use crate::state::{Millis, Roster};
use crate::targeting::TargetingStrategy;

use super::damage::calculate_damage;
use super::event::{CombatEvent, CombatObserver};

/// Advances every live attacker in `attackers` by `elapsed` and resolves the
/// attacks whose cooldown has run out against `defenders`.
///
/// For each live attacker:
/// 1. The elapsed time is added to its attack timer.
/// 2. An attacker still below its interval does nothing else.
/// 3. Otherwise the timer resets to zero and a target is resolved. With no
///    target the swing is spent ([`CombatEvent::Idle`]); with one, the target
///    loses `max(1, attack - armor)` health.
///
/// A frame of any length yields at most one attack per attacker. Targets are
/// resolved fresh for every attacker, so a defender killed earlier in the same
/// call is not picked again.
pub fn tick_roster<S, O>(
    attackers: &mut Roster,
    defenders: &mut Roster,
    elapsed: Millis,
    strategy: &S,
    observer: &mut O,
) where
    S: TargetingStrategy + ?Sized,
    O: CombatObserver + ?Sized,
{
    for attacker in attackers.members_mut().iter_mut() {
        if !attacker.is_alive() {
            continue;
        }

        attacker.accumulate(elapsed);
        if !attacker.is_ready() {
            continue;
        }
        attacker.reset_attack_timer();

        let target = strategy
            .select_target(attacker, defenders.as_slice())
            .and_then(|index| defenders.members_mut().get_mut(index));
        let Some(target) = target else {
            observer.observe(CombatEvent::Idle {
                attacker: attacker.id,
            });
            continue;
        };

        let damage = calculate_damage(attacker.attack, target.armor);
        let lethal = target.take_damage(damage);

        observer.observe(CombatEvent::Hit {
            attacker: attacker.id,
            target: target.id,
            target_side: target.side,
            damage,
            health: target.health(),
            max_health: target.max_health(),
            alive: target.is_alive(),
        });
        if lethal {
            observer.observe(CombatEvent::Defeated {
                target: target.id,
                side: target.side,
                by: attacker.id,
            });
        }
    }
}
