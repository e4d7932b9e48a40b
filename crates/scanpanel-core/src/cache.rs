use crate::model::KeyAsset;

/// In-memory copy of the last fetch result. A fetch replaces the whole
/// list; nothing is ever merged in, and a delete on the remote side does
/// not touch it (the caller re-fetches to see the new state).
#[derive(Debug, Default)]
pub struct AssetCache {
    items: Vec<KeyAsset>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, items: Vec<KeyAsset>) {
        self.items = items;
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[KeyAsset] {
        &self.items
    }

    /// Every non-empty key, in fetch order.
    pub fn export_keys(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.key.is_empty())
            .map(|item| item.key.clone())
            .collect()
    }

    /// Newline-joined export, the bulk-copy payload.
    pub fn export_joined(&self) -> String {
        self.export_keys().join("\n")
    }
}
