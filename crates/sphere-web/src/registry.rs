//! Per-canvas bookkeeping so a canvas never carries two live spheres.
//!
//! Only std types appear here so the host test suite can include this file
//! directly.

use std::collections::HashMap;

pub trait Mounted: Clone {
    fn is_running(&self) -> bool;
    fn stop(&self);
}

/// Element ids a sphere was mounted on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountKey {
    pub canvas: String,
    pub region: String,
    pub tooltip: String,
}

impl MountKey {
    pub fn new(canvas: &str, region: &str, tooltip: &str) -> Self {
        Self {
            canvas: canvas.to_string(),
            region: region.to_string(),
            tooltip: tooltip.to_string(),
        }
    }
}

pub struct MountRegistry<H> {
    mounted: HashMap<String, (MountKey, H)>,
}

impl<H> Default for MountRegistry<H> {
    fn default() -> Self {
        Self {
            mounted: HashMap::new(),
        }
    }
}

impl<H: Mounted> MountRegistry<H> {
    /// The running handle mounted with exactly `key`, if any.
    ///
    /// Otherwise the canvas is freed for a new mount: a sphere still running
    /// on it with other region/tooltip ids is stopped and forgotten.
    pub fn claim(&mut self, key: &MountKey) -> Option<H> {
        if let Some((k, h)) = self.mounted.get(&key.canvas) {
            if k == key && h.is_running() {
                return Some(h.clone());
            }
        }
        if let Some((_, old)) = self.mounted.remove(&key.canvas) {
            if old.is_running() {
                old.stop();
            }
        }
        None
    }

    pub fn insert(&mut self, key: MountKey, handle: H) {
        self.mounted.insert(key.canvas.clone(), (key, handle));
    }

    pub fn running_count(&self) -> usize {
        self.mounted.values().filter(|(_, h)| h.is_running()).count()
    }
}
