use std::collections::HashSet;

use crate::config::FeaturesConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlagKey {
    IsCommandMenuV2Enabled,
}

impl FeatureFlagKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsCommandMenuV2Enabled => "IS_COMMAND_MENU_V2_ENABLED",
        }
    }
}

/// Read-only flag lookup, polled on every top-bar projection.
pub trait FeatureFlagSource {
    fn is_enabled(&self, key: FeatureFlagKey) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticFeatureFlags {
    enabled: HashSet<FeatureFlagKey>,
}

impl StaticFeatureFlags {
    pub fn from_config(config: &FeaturesConfig) -> Self {
        let mut flags = Self::default();
        flags.set(FeatureFlagKey::IsCommandMenuV2Enabled, config.command_menu_v2);
        flags
    }

    pub fn set(&mut self, key: FeatureFlagKey, enabled: bool) {
        if enabled {
            self.enabled.insert(key);
        } else {
            self.enabled.remove(&key);
        }
    }
}

impl FeatureFlagSource for StaticFeatureFlags {
    fn is_enabled(&self, key: FeatureFlagKey) -> bool {
        self.enabled.contains(&key)
    }
}
