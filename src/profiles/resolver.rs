// Copyright 2024-2026 Teleskope Contributors
// SPDX-License-Identifier: Apache-2.0

//! Priority-ordered profile resolution.
//!
//! Sources are consulted in order and the first hit wins. The native table
//! always comes first; further sources (user overrides, profiles synthesized
//! from printer columns) slot in behind it. When nothing matches, the
//! generic Name / Namespace / Age profile is returned.

use std::sync::OnceLock;

use super::native::native_table;
use super::ResourceProfile;
use crate::resource::ResourceIdentity;

/// A layer of the resolution chain.
pub trait ProfileSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn lookup(&self, identity: &ResourceIdentity) -> Option<ResourceProfile>;
}

/// The hand-authored profile table.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProfiles;

impl ProfileSource for NativeProfiles {
    fn name(&self) -> &'static str {
        "native"
    }

    fn lookup(&self, identity: &ResourceIdentity) -> Option<ResourceProfile> {
        native_table().get(&identity.lookup_key()).cloned()
    }
}

/// Resolves identities to profiles through an ordered chain of sources.
pub struct ProfileResolver {
    sources: Vec<Box<dyn ProfileSource>>,
}

impl ProfileResolver {
    /// Resolver backed by the native table only.
    pub fn new() -> Self {
        Self {
            sources: vec![Box::new(NativeProfiles)],
        }
    }

    /// Append a lower-priority source behind the existing ones.
    pub fn with_source(mut self, source: impl ProfileSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolve `identity`, falling back to the generic profile.
    pub fn resolve(&self, identity: &ResourceIdentity) -> ResourceProfile {
        for source in &self.sources {
            if let Some(profile) = source.lookup(identity) {
                tracing::trace!(key = %identity, source = source.name(), "Resolved profile");
                return profile;
            }
        }
        tracing::debug!(key = %identity, "No profile registered, using generic fallback");
        metrics::counter!("teleskope_profile_fallbacks_total").increment(1);
        ResourceProfile::generic(identity.clone())
    }
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve against the process-wide default resolver.
pub fn resolve(identity: &ResourceIdentity) -> ResourceProfile {
    static DEFAULT: OnceLock<ProfileResolver> = OnceLock::new();
    DEFAULT.get_or_init(ProfileResolver::new).resolve(identity)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
