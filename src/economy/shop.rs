//! The shop catalog and purchasing.

use super::items::{EquipmentSlot, InventoryEntry, Item, ItemType, Restore};
use crate::character::player::Player;
use crate::core::constants::SHOP_UNLOCK_LEVEL;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;
use rand::Rng;

/// Every item the shop sells, cheapest first.
pub fn catalog() -> Vec<Item> {
    use EquipmentSlot::{Accessory, Body, Head};

    let weapon = |id: &str, name: &str, slot: EquipmentSlot, price: u64, value: u32| {
        Item::equipment(id, name, ItemType::Weapon, slot, price, value)
    };
    let armor = |id: &str, name: &str, slot: EquipmentSlot, price: u64, value: u32| {
        Item::equipment(id, name, ItemType::Armor, slot, price, value)
    };

    let mut items = vec![
        // Consumables
        Item::consumable("hp_potion_s", "Small HP Potion", Restore::Hp, 100, 50),
        Item::consumable("hp_potion_m", "Medium HP Potion", Restore::Hp, 300, 200),
        Item::consumable("hp_potion_l", "Large HP Potion", Restore::Hp, 800, 500),
        Item::consumable("hp_potion_x", "Huge HP Potion", Restore::Hp, 2000, 1000),
        Item::consumable("mp_potion_s", "Small MP Potion", Restore::Mp, 100, 30),
        Item::consumable("mp_potion_m", "Medium MP Potion", Restore::Mp, 300, 100),
        Item::consumable("mp_potion_l", "Large MP Potion", Restore::Mp, 800, 300),
        Item::consumable("elixir", "Elixir", Restore::Full, 5000, 9999),
        // Weapons
        weapon("iron_sword", "Iron Sword", EquipmentSlot::Weapon, 1000, 5),
        weapon("knight_dagger", "Knight's Dagger", EquipmentSlot::Weapon, 5000, 10),
        weapon("steel_dagger", "Fine Steel Dagger", EquipmentSlot::Weapon, 8000, 15),
        weapon("orc_axe", "Orc General's Axe", EquipmentSlot::Weapon, 15000, 25),
        weapon("knight_killer", "Knight Killer", EquipmentSlot::Weapon, 30000, 35),
        weapon("magic_sword", "Enchanted Longsword", EquipmentSlot::Weapon, 60000, 50),
        weapon("baruka_dagger", "Baruka's Dagger", EquipmentSlot::Weapon, 120000, 75),
        weapon("demon_longsword", "Demon King's Longsword", EquipmentSlot::Weapon, 250000, 120),
        weapon("kamish_wrath", "Kamish's Wrath", EquipmentSlot::Weapon, 1000000, 300),
        // Body armor
        armor("leather_armor", "Leather Armor", Body, 1500, 5),
        armor("hard_leather", "Hardened Leather Armor", Body, 3000, 10),
        armor("chainmail", "Chainmail", Body, 7500, 18),
        armor("plate_armor", "Plate Armor", Body, 25000, 30),
        armor("knight_heavy", "Knight Commander's Heavy Armor", Body, 50000, 45),
        armor("commander_coat", "Commander's Coat", Body, 100000, 60),
        armor("dragon_scale", "Dragon Scale Armor", Body, 500000, 150),
        // Head
        armor("high_orc_helm", "High Orc Helm", Head, 35000, 20),
        // Accessories: the ring counts toward attack, the necklace toward defense.
        weapon("ring_str", "Ring of Strength", Accessory, 20000, 10),
        armor("neck_def", "Guardian Necklace", Accessory, 20000, 15),
    ];
    // Stable sort keeps catalog order among equal prices.
    items.sort_by_key(|item| item.price);
    items
}

/// Look up a catalog item by id.
pub fn find_item(id: &str) -> Option<Item> {
    catalog().into_iter().find(|item| item.id == id)
}

/// Buy one unit of a catalog item.
///
/// Consumables stack by id; every equipment purchase becomes its own
/// unequipped inventory entry with a uid drawn from `rng`.
pub fn purchase(
    player: &mut Player,
    item_id: &str,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, Rejection> {
    if !player.shop_unlocked() {
        return Err(Rejection::ShopLocked {
            required: SHOP_UNLOCK_LEVEL,
        });
    }
    let item = find_item(item_id).ok_or(Rejection::UnknownItem)?;
    if player.gold < item.price {
        return Err(Rejection::InsufficientGold { needed: item.price });
    }

    player.gold -= item.price;
    let event = GameEvent::ItemPurchased {
        name: item.name.clone(),
        price: item.price,
    };

    if item.is_consumable() {
        match player
            .inventory
            .iter_mut()
            .find(|entry| entry.item.id == item.id)
        {
            Some(stack) => stack.count += 1,
            None => player.inventory.push(InventoryEntry::stack(item)),
        }
    } else {
        player.inventory.push(InventoryEntry::instance(item, rng));
    }

    Ok(vec![event])
}
