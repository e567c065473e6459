use crate::mem::{Block, Kind};

use std::collections::HashMap;
use tokio_modbus::prelude::SlaveId;

/// The servable device context: one register block per enabled kind.
///
/// Built once at startup and never mutated afterwards; the server shares it
/// read-only across request handling.
#[derive(Debug, Default)]
pub struct Device {
    slave_id: SlaveId,
    blocks: HashMap<Kind, Block>,
}

impl Device {
    pub fn new(slave_id: SlaveId) -> Self {
        Self {
            slave_id,
            blocks: HashMap::new(),
        }
    }

    pub fn slave_id(&self) -> SlaveId {
        self.slave_id
    }

    pub fn insert(&mut self, kind: Kind, block: Block) {
        self.blocks.insert(kind, block);
    }

    /// Block for the given kind, `None` if the kind is not enabled.
    pub fn block(&self, kind: Kind) -> Option<&Block> {
        self.blocks.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
