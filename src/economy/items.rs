use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Consumable,
    /// Adds its effect value to attack while equipped.
    Weapon,
    /// Adds its effect value to defense while equipped.
    Armor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Head,
    Body,
    Accessory,
}

impl EquipmentSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Head => "Head",
            EquipmentSlot::Body => "Body",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// What a consumable restores when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Restore {
    Hp,
    Mp,
    /// Full HP and MP regardless of effect value.
    Full,
}

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    pub slot: Option<EquipmentSlot>,
    pub restore: Option<Restore>,
    pub description: String,
    pub price: u64,
    /// Heal amount for consumables, stat bonus for equipment.
    pub effect_value: u32,
}

impl Item {
    pub fn consumable(id: &str, name: &str, restore: Restore, price: u64, effect_value: u32) -> Self {
        let description = match restore {
            Restore::Hp => format!("Restores {} HP.", effect_value),
            Restore::Mp => format!("Restores {} MP.", effect_value),
            Restore::Full => "Fully restores HP and MP.".to_string(),
        };
        Self {
            id: id.to_string(),
            name: name.to_string(),
            item_type: ItemType::Consumable,
            slot: None,
            restore: Some(restore),
            description,
            price,
            effect_value,
        }
    }

    pub fn equipment(
        id: &str,
        name: &str,
        item_type: ItemType,
        slot: EquipmentSlot,
        price: u64,
        effect_value: u32,
    ) -> Self {
        let description = match item_type {
            ItemType::Armor => format!("Defense +{}", effect_value),
            _ => format!("Attack +{}", effect_value),
        };
        Self {
            id: id.to_string(),
            name: name.to_string(),
            item_type,
            slot: Some(slot),
            restore: None,
            description,
            price,
            effect_value,
        }
    }

    pub fn is_consumable(&self) -> bool {
        self.item_type == ItemType::Consumable
    }
}

/// One inventory line: a consumable stack or a single equipment copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    /// Set for equipment only; unique per purchased copy.
    pub uid: Option<String>,
    pub count: u32,
    pub is_equipped: bool,
}

impl InventoryEntry {
    pub fn stack(item: Item) -> Self {
        Self {
            item,
            uid: None,
            count: 1,
            is_equipped: false,
        }
    }

    pub fn instance(item: Item, rng: &mut impl Rng) -> Self {
        Self {
            item,
            uid: Some(random_uuid(rng).to_string()),
            count: 1,
            is_equipped: false,
        }
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.item.slot
    }
}

/// A version-4 uuid whose bytes come from `rng`, so seeded games replay exactly.
pub fn random_uuid(rng: &mut impl Rng) -> uuid::Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Sum of effect values of equipped items of the given type.
pub fn equipped_bonus(inventory: &[InventoryEntry], item_type: ItemType) -> u32 {
    inventory
        .iter()
        .filter(|entry| entry.is_equipped && entry.item.item_type == item_type)
        .map(|entry| entry.item.effect_value)
        .sum()
}
