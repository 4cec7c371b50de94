//! Equipping gear and using consumables.

use super::items::Restore;
use crate::character::player::Player;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;

/// Find an inventory entry by equipment uid, falling back to catalog id.
fn find_entry(player: &Player, key: &str) -> Option<usize> {
    player
        .inventory
        .iter()
        .position(|entry| entry.uid.as_deref() == Some(key))
        .or_else(|| player.inventory.iter().position(|entry| entry.item.id == key))
}

/// Equip or unequip one piece of gear.
///
/// Equipping first unequips whatever else occupies the same slot, so at most
/// one item per slot is ever equipped.
pub fn toggle_equip(player: &mut Player, key: &str) -> Result<Vec<GameEvent>, Rejection> {
    let index = find_entry(player, key).ok_or(Rejection::ItemNotFound)?;
    let slot = player.inventory[index]
        .slot()
        .filter(|_| !player.inventory[index].item.is_consumable())
        .ok_or(Rejection::NotEquippable)?;

    if player.inventory[index].is_equipped {
        let entry = &mut player.inventory[index];
        entry.is_equipped = false;
        return Ok(vec![GameEvent::Unequipped {
            name: entry.item.name.clone(),
        }]);
    }

    let mut events = Vec::new();
    for (i, other) in player.inventory.iter_mut().enumerate() {
        if i != index && other.is_equipped && other.slot() == Some(slot) {
            other.is_equipped = false;
            events.push(GameEvent::Unequipped {
                name: other.item.name.clone(),
            });
        }
    }

    let entry = &mut player.inventory[index];
    entry.is_equipped = true;
    events.push(GameEvent::Equipped {
        name: entry.item.name.clone(),
    });
    Ok(events)
}

/// Use one consumable from a stack.
///
/// HP and MP potions are rejected when the pool is already full; the elixir
/// always restores both pools. The stack is removed when its count hits zero.
pub fn use_item(player: &mut Player, item_id: &str) -> Result<Vec<GameEvent>, Rejection> {
    let index = player
        .inventory
        .iter()
        .position(|entry| entry.item.id == item_id)
        .ok_or(Rejection::ItemNotFound)?;
    let item = player.inventory[index].item.clone();
    let restore = item.restore.ok_or(Rejection::NotUsable)?;

    let amount = match restore {
        Restore::Full => {
            let amount = player.max_hp.saturating_sub(player.hp);
            player.hp = player.max_hp;
            player.mp = player.max_mp;
            amount
        }
        Restore::Hp => {
            if player.hp >= player.max_hp {
                return Err(Rejection::HpAlreadyFull);
            }
            player.heal(item.effect_value);
            item.effect_value
        }
        Restore::Mp => {
            if player.mp >= player.max_mp {
                return Err(Rejection::MpAlreadyFull);
            }
            player.restore_mp(item.effect_value);
            item.effect_value
        }
    };

    let entry = &mut player.inventory[index];
    if entry.count > 1 {
        entry.count -= 1;
    } else {
        player.inventory.remove(index);
    }

    Ok(vec![GameEvent::ItemUsed {
        name: item.name,
        restore,
        amount,
    }])
}
