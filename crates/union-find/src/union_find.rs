use crate::config::Config;
use crate::error::{Argument, UnionFindError};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// Union by rank over arbitrary hashable elements.
///
/// Every known element has exactly one parent entry and one rank entry. An
/// element that is its own parent is the representative of its class. The
/// rank entry of a non-root element is stale and never consulted again.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parents: FxHashMap<T, T>,
    ranks: FxHashMap<T, u32>,
    allow_find_return_none: bool,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parents: FxHashMap::default(),
            ranks: FxHashMap::default(),
            allow_find_return_none: false,
        }
    }
}

impl<T: Hash + Eq + Clone> UnionFind<T> {
    pub fn new(config: Config<T>) -> Result<Self, UnionFindError> {
        let Config {
            elements,
            allow_find_return_none,
        } = config;
        let mut uf = Self {
            allow_find_return_none,
            ..Self::default()
        };
        for element in elements {
            uf.insert(element.ok_or(UnionFindError::NullElement(Argument::Element))?);
        }
        log::debug!("created union-find with {} elements", uf.len());
        Ok(uf)
    }

    pub fn allows_find_return_none(&self) -> bool {
        self.allow_find_return_none
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Absent elements are never contained; this is the only operation that
    /// accepts them without failing.
    pub fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        element
            .into()
            .is_some_and(|element| self.parents.contains_key(element))
    }

    pub fn add(&mut self, element: impl Into<Option<T>>) -> Result<(), UnionFindError> {
        let element = element
            .into()
            .ok_or(UnionFindError::NullElement(Argument::Element))?;
        self.insert(element);
        Ok(())
    }

    fn insert(&mut self, element: T) {
        if self.parents.contains_key(&element) {
            return;
        }
        log::trace!("adding element #{}", self.parents.len());
        self.parents.insert(element.clone(), element.clone());
        self.ranks.insert(element, 0);
    }

    /// Returns the representative of the class containing `element`.
    ///
    /// An unknown element yields `Ok(None)` when the structure was built with
    /// [`Config::allow_find_return_none`], and an error otherwise.
    pub fn find<'a>(
        &self,
        element: impl Into<Option<&'a T>>,
    ) -> Result<Option<&T>, UnionFindError>
    where
        T: 'a,
    {
        let element = element
            .into()
            .ok_or(UnionFindError::NullElement(Argument::Element))?;
        match self.parents.get_key_value(element) {
            Some((element, _)) => Ok(Some(self.root(element))),
            None if self.allow_find_return_none => Ok(None),
            None => Err(UnionFindError::UnknownElement(Argument::Element)),
        }
    }

    // The caller guarantees `element` is known. No path compression.
    fn root<'s>(&'s self, element: &'s T) -> &'s T {
        let parent = &self.parents[element];
        if parent == element {
            element
        } else {
            self.root(parent)
        }
    }

    fn known<'a>(
        &self,
        element: Option<&'a T>,
        argument: Argument,
    ) -> Result<&'a T, UnionFindError> {
        let element = element.ok_or(UnionFindError::NullElement(argument))?;
        if self.parents.contains_key(element) {
            Ok(element)
        } else {
            Err(UnionFindError::UnknownElement(argument))
        }
    }

    /// Merges the classes of `first` and `second`.
    ///
    /// When both roots have the same rank the root of `first` survives and
    /// its rank grows by one. Both arguments are validated before anything
    /// is modified, whatever the `find` configuration says.
    pub fn union<'a>(
        &mut self,
        first: impl Into<Option<&'a T>>,
        second: impl Into<Option<&'a T>>,
    ) -> Result<(), UnionFindError>
    where
        T: 'a,
    {
        let first = self.known(first.into(), Argument::First)?;
        let second = self.known(second.into(), Argument::Second)?;
        if first == second {
            return Ok(());
        }
        let root_first = self.root(first).clone();
        let root_second = self.root(second).clone();
        if root_first == root_second {
            return Ok(());
        }
        let rank_first = self.ranks[&root_first];
        let rank_second = self.ranks[&root_second];
        match rank_first.cmp(&rank_second) {
            Ordering::Less => {
                log::trace!("attaching rank {rank_first} root under rank {rank_second} root");
                self.parents.insert(root_first, root_second);
            }
            Ordering::Greater => {
                log::trace!("attaching rank {rank_second} root under rank {rank_first} root");
                self.parents.insert(root_second, root_first);
            }
            Ordering::Equal => {
                log::trace!("merging two rank {rank_first} roots, first root survives");
                self.parents.insert(root_second, root_first.clone());
                self.ranks.insert(root_first, rank_first + 1);
            }
        }
        Ok(())
    }

    pub fn same_set<'a>(
        &self,
        first: impl Into<Option<&'a T>>,
        second: impl Into<Option<&'a T>>,
    ) -> Result<bool, UnionFindError>
    where
        T: 'a,
    {
        let first = self.known(first.into(), Argument::First)?;
        let second = self.known(second.into(), Argument::Second)?;
        Ok(first == second || self.root(first) == self.root(second))
    }

    pub fn parent(&self, element: &T) -> Option<&T> {
        self.parents.get(element)
    }

    pub fn rank(&self, element: &T) -> Option<u32> {
        self.ranks.get(element).copied()
    }

    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.parents.keys()
    }

    pub fn roots(&self) -> impl Iterator<Item = &T> + '_ {
        self.parents
            .iter()
            .filter(|(element, parent)| element == parent)
            .map(|(element, _)| element)
    }

    /// The current partition. Neither the classes nor their members come in
    /// any particular order.
    pub fn classes(&self) -> Vec<Vec<&T>> {
        self.parents
            .keys()
            .into_group_map_by(|element| self.root(*element))
            .into_values()
            .collect()
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for UnionFind<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for UnionFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut uf = Self::default();
        uf.extend(iter);
        uf
    }
}
