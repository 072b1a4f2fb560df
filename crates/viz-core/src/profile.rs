//! Named dataset profiles for the cluster view.

use crate::error::{Result, VizError};
use fnv::FnvHashMap;

/// Tuning for one cluster dataset. Selecting a profile regenerates the point
/// set from scratch; nothing is blended between profiles.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetProfile {
    pub count: usize,
    pub size_range: (f32, f32),
    pub speed_scale: f32,
    pub cohesion_strength: f32,
    pub accent_probability: f32,
}

pub const MANAGER: DatasetProfile = DatasetProfile {
    count: 180,
    size_range: (1.2, 3.2),
    speed_scale: 0.002,
    cohesion_strength: 0.93,
    accent_probability: 0.02,
};

pub const ACQUISITION: DatasetProfile = DatasetProfile {
    count: 260,
    size_range: (1.0, 3.0),
    speed_scale: 0.004,
    cohesion_strength: 0.78,
    accent_probability: 0.06,
};

pub const RETENTION: DatasetProfile = DatasetProfile {
    count: 120,
    size_range: (1.8, 3.8),
    speed_scale: 0.0016,
    cohesion_strength: 0.96,
    accent_probability: 0.01,
};

pub const DEFAULT_PROFILE_KEY: &str = "manager";

/// Key -> profile lookup. Keys are the `data-key` values used by the page tabs.
#[derive(Clone, Debug)]
pub struct ProfileRegistry {
    profiles: FnvHashMap<String, DatasetProfile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        let mut reg = Self::empty();
        reg.insert("manager", MANAGER);
        reg.insert("acq", ACQUISITION);
        reg.insert("ret", RETENTION);
        reg
    }
}

impl ProfileRegistry {
    pub fn empty() -> Self {
        Self {
            profiles: FnvHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: &str, profile: DatasetProfile) {
        self.profiles.insert(key.to_owned(), profile);
    }

    pub fn get(&self, key: &str) -> Result<&DatasetProfile> {
        self.profiles
            .get(key)
            .ok_or_else(|| VizError::UnknownProfile(key.to_owned()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
