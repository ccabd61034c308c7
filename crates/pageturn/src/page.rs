//! The page collection and per-page declarations.
//!
//! Pages form an ordered, fixed-length sequence resolved at initialization.
//! Each page receives a stable 1-based [`PageId`] and carries the entrance
//! animations declared on its content, the markup-attribute analogue.

use crate::animation::entrance::EntranceSpec;
use crate::error::ConfigurationError;

/// Stable 1-based identifier assigned to each page at initialization.
///
/// This is the handle reported through the `page_changed` signal, matching
/// the order the host supplied the pages in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(u32);

impl PageId {
    /// The 1-based numeric identifier.
    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

/// Host-supplied description of one page surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDescriptor {
    entrances: Vec<EntranceSpec>,
}

impl PageDescriptor {
    /// Creates a page with no declared entrance animations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entrance animation on this page's content.
    pub fn with_entrance(mut self, spec: EntranceSpec) -> Self {
        self.entrances.push(spec);
        self
    }

    /// The declared entrance animations, in declaration order.
    pub fn entrances(&self) -> &[EntranceSpec] {
        &self.entrances
    }
}

/// One page surface in the ordered stack.
#[derive(Debug)]
pub struct Page {
    id: PageId,
    entrances: Vec<EntranceSpec>,
    current: bool,
}

impl Page {
    /// The page's stable identifier.
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Whether this page is the one currently showing.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// The entrance animations declared on this page's content.
    pub fn entrances(&self) -> &[EntranceSpec] {
        &self.entrances
    }
}

/// Ordered, fixed-length collection of page surfaces.
#[derive(Debug)]
pub struct PageStack {
    pages: Vec<Page>,
}

impl PageStack {
    /// Builds the stack from host descriptors, assigning 1-based IDs in order.
    pub(crate) fn new(descriptors: Vec<PageDescriptor>) -> Result<Self, ConfigurationError> {
        if descriptors.is_empty() {
            return Err(ConfigurationError::NoPages);
        }

        let pages = descriptors
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| Page {
                id: PageId::from_index(index),
                entrances: descriptor.entrances,
                current: false,
            })
            .collect();

        Ok(Self { pages })
    }

    /// The number of pages; fixed after initialization.
    pub fn count(&self) -> usize {
        self.pages.len()
    }

    /// The page at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// The page currently marked as showing, if the initial display happened.
    pub fn current(&self) -> Option<&Page> {
        self.pages.iter().find(|page| page.current)
    }

    /// Marks `index` as the current page and unmarks every other page.
    pub(crate) fn set_current(&mut self, index: usize) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.current = i == index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::entrance::{EntranceEffect, EntranceSpec};

    #[test]
    fn test_ids_are_one_based_and_ordered() {
        let stack = PageStack::new(vec![PageDescriptor::new(); 3]).unwrap();
        assert_eq!(stack.count(), 3);
        assert_eq!(stack.get(0).unwrap().id().get(), 1);
        assert_eq!(stack.get(1).unwrap().id().get(), 2);
        assert_eq!(stack.get(2).unwrap().id().get(), 3);
    }

    #[test]
    fn test_empty_stack_rejected() {
        assert!(matches!(
            PageStack::new(Vec::new()),
            Err(ConfigurationError::NoPages)
        ));
    }

    #[test]
    fn test_current_marking_is_exclusive() {
        let mut stack = PageStack::new(vec![PageDescriptor::new(); 3]).unwrap();
        assert!(stack.current().is_none());

        stack.set_current(1);
        assert!(stack.get(1).unwrap().is_current());
        assert!(!stack.get(0).unwrap().is_current());

        stack.set_current(2);
        assert!(!stack.get(1).unwrap().is_current());
        assert_eq!(stack.current().unwrap().id().get(), 3);
    }

    #[test]
    fn test_descriptor_entrances_carried_over() {
        let descriptor = PageDescriptor::new()
            .with_entrance(EntranceSpec::new(EntranceEffect::named("fadeIn")))
            .with_entrance(EntranceSpec::new(EntranceEffect::FollowSlide));

        let stack = PageStack::new(vec![descriptor]).unwrap();
        assert_eq!(stack.get(0).unwrap().entrances().len(), 2);
    }
}
