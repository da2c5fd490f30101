//! Path: native/cure_core/src/inventory.rs
//! Summary: 所持薬剤（最大 2 枠・取得順を保持）

use crate::consumable::ConsumableKind;
use crate::constants::INVENTORY_CAPACITY;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<ConsumableKind>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::with_capacity(INVENTORY_CAPACITY) }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= INVENTORY_CAPACITY
    }

    pub fn as_slice(&self) -> &[ConsumableKind] {
        &self.items
    }

    /// 空きがあれば末尾に追加して true。満杯なら何もしない。
    pub fn collect(&mut self, kind: ConsumableKind) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(kind);
        true
    }

    /// `slot` の薬剤を取り出す。空スロットは None。
    pub fn take(&mut self, slot: usize) -> Option<ConsumableKind> {
        (slot < self.items.len()).then(|| self.items.remove(slot))
    }

    /// 先頭 2 つを取得順のまま取り出す。2 つ未満なら何もしない。
    pub fn take_pair(&mut self) -> Option<(ConsumableKind, ConsumableKind)> {
        if self.items.len() < 2 {
            return None;
        }
        let pair = (self.items[0], self.items[1]);
        self.items.drain(0..2);
        Some(pair)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// "INSULIN | ADRENALINE" / "EMPTY"
    pub fn arsenal_label(&self) -> String {
        if self.items.is_empty() {
            return "EMPTY".to_string();
        }
        self.items
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
