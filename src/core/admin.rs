//! Administrator codes.

use super::events::GameEvent;
use super::rejection::Rejection;
use crate::character::player::Player;
use crate::character::skills::{self, Skill};
use crate::companions::types::{kamish, Companion};

/// What entering a code does.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminEffect {
    GrantGold(u64),
    GrantCompanion(Companion),
    GrantSkill(Skill),
}

/// Every recognised code and its effect.
pub fn admin_codes() -> Vec<(&'static str, AdminEffect)> {
    vec![
        ("1014", AdminEffect::GrantGold(50_000)),
        ("3237", AdminEffect::GrantCompanion(kamish())),
        ("6717", AdminEffect::GrantSkill(skills::iaido())),
    ]
}

pub fn redeem_code(player: &mut Player, code: &str) -> Result<Vec<GameEvent>, Rejection> {
    let code = code.trim();
    let effect = admin_codes()
        .into_iter()
        .find(|(known, _)| *known == code)
        .map(|(_, effect)| effect)
        .ok_or(Rejection::UnknownCode)?;

    let event = match effect {
        AdminEffect::GrantGold(amount) => {
            player.gold = player.gold.saturating_add(amount);
            GameEvent::AdminGold { amount }
        }
        AdminEffect::GrantCompanion(companion) => {
            if player.has_companion(&companion.id) {
                return Err(Rejection::AlreadyOwned(format!(
                    "{} is already in your shadow army.",
                    companion.name
                )));
            }
            let name = companion.name.clone();
            player.companions.push(companion);
            GameEvent::AdminCompanion { name }
        }
        AdminEffect::GrantSkill(skill) => {
            let name = skill.name.clone();
            if !player.learn_skill(skill) {
                return Err(Rejection::AlreadyOwned(format!(
                    "You already know {}.",
                    name
                )));
            }
            GameEvent::AdminSkill { name }
        }
    };
    tracing::info!(code, "admin code redeemed");
    Ok(vec![event])
}
