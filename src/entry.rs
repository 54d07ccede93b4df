// MIT/Apache2 License

use crate::{Slot, ENTRY_POINTS};
use rustc_hash::FxHashMap;
use std::{fmt, sync::LazyLock};

/// The three regions a dispatch table is partitioned into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Context management (`wgl*`) entry points.
    Context,
    /// Core drawing entry points.
    Core,
    /// Extension entry points that also occupy a fixed slot.
    Extension,
}

/// Identifies one fixed entry point.
///
/// The signature is kept as text for diagnostics only; the dispatcher never looks at it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntryPoint {
    name: &'static str,
    slot: Slot,
    requires: Option<&'static str>,
    signature: &'static str,
}

impl EntryPoint {
    #[inline]
    pub(crate) const fn new(
        name: &'static str,
        slot: Slot,
        requires: Option<&'static str>,
        signature: &'static str,
    ) -> Self {
        Self {
            name,
            slot,
            requires,
            signature,
        }
    }

    /// Get the name of this entry point.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the slot this entry point occupies.
    #[inline]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Get the region of the table this entry point lives in.
    #[inline]
    pub fn region(&self) -> Region {
        self.slot.region()
    }

    /// Get the extensions (or `GL_VERSION_x_y` tokens) that enable this entry point, if it is an
    /// extension.
    #[inline]
    pub fn requires(&self) -> Option<&'static str> {
        self.requires
    }

    /// Get a textual rendition of the signature.
    #[inline]
    pub fn signature(&self) -> &'static str {
        self.signature
    }
}

impl fmt::Display for EntryPoint {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (slot {})", self.name, self.slot.index())
    }
}

static BY_NAME: LazyLock<FxHashMap<&'static str, &'static EntryPoint>> =
    LazyLock::new(|| ENTRY_POINTS.iter().map(|entry| (entry.name, entry)).collect());

/// Find a fixed entry point by its exact name.
#[inline]
pub fn entry_point(name: &str) -> Option<&'static EntryPoint> {
    BY_NAME.get(name).copied()
}

impl Slot {
    /// Get the index of this slot in the table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the slot at the given index, if there is one.
    #[inline]
    pub fn from_index(index: usize) -> Option<Slot> {
        Slot::ALL.get(index).copied()
    }

    /// Get the region this slot belongs to.
    #[inline]
    pub fn region(self) -> Region {
        let index = self.index();
        if index < Slot::CONTEXT_COUNT {
            Region::Context
        } else if index < Slot::CONTEXT_COUNT + Slot::CORE_COUNT {
            Region::Core
        } else {
            Region::Extension
        }
    }

    /// Get the descriptor of the entry point in this slot.
    #[inline]
    pub fn entry(self) -> &'static EntryPoint {
        &ENTRY_POINTS[self.index()]
    }

    /// Get the name of the entry point in this slot.
    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_line_up_with_slots() {
        for (index, entry) in ENTRY_POINTS.iter().enumerate() {
            assert_eq!(entry.slot().index(), index, "{}", entry);
            assert_eq!(Slot::from_index(index), Some(entry.slot()));
        }
        assert_eq!(Slot::from_index(Slot::COUNT), None);
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(BY_NAME.len(), Slot::COUNT);
    }

    #[test]
    fn regions_are_contiguous() {
        let regions: Vec<Region> = Slot::ALL.iter().map(|slot| slot.region()).collect();
        let mut sorted = regions.clone();
        sorted.sort();
        assert_eq!(regions, sorted);

        assert_eq!(Slot::wglCopyContext.region(), Region::Context);
        assert_eq!(Slot::wglSwapBuffers.region(), Region::Context);
        assert_eq!(Slot::glAccum.region(), Region::Core);
        assert_eq!(Slot::glViewport.region(), Region::Core);
        assert_eq!(Slot::glActiveTexture.region(), Region::Extension);
        assert_eq!(Slot::wglSwapIntervalEXT.region(), Region::Extension);
    }

    #[test]
    fn only_extensions_carry_requirements() {
        for entry in ENTRY_POINTS.iter() {
            assert_eq!(
                entry.requires().is_some(),
                entry.region() == Region::Extension,
                "{}",
                entry
            );
        }
        assert_eq!(
            entry_point("glVertexAttribDivisorARB").and_then(|e| e.requires()),
            Some("GL_ARB_instanced_arrays")
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(entry_point("glClear").map(|e| e.slot()), Some(Slot::glClear));
        assert!(entry_point("glclear").is_none());
        assert!(entry_point("glClear ").is_none());
        let signature = Slot::glGetError.entry().signature();
        assert!(signature.starts_with("fn"), "{}", signature);
        assert!(signature.ends_with("GLenum"), "{}", signature);
    }
}
