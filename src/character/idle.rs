//! Actions available between fights.

use super::player::Player;
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;

/// Daily-quest training: trades a little HP for EXP.
pub fn train(player: &mut Player) -> Result<Vec<GameEvent>, Rejection> {
    if player.hp < TRAINING_MIN_HP {
        return Err(Rejection::TooExhausted);
    }
    let exp = TRAINING_BASE_EXP + player.level as u64;
    player.hp -= TRAINING_HP_COST;
    player.current_exp += exp;
    Ok(vec![GameEvent::Trained { exp }])
}

/// Recovers half of both pools, capped at the maximum.
pub fn rest(player: &mut Player) -> Vec<GameEvent> {
    let hp_before = player.hp;
    let mp_before = player.mp;
    player.heal(player.max_hp * REST_RECOVERY_PERCENT / 100);
    player.restore_mp(player.max_mp * REST_RECOVERY_PERCENT / 100);
    vec![GameEvent::Rested {
        hp: player.hp - hp_before,
        mp: player.mp - mp_before,
    }]
}
