use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};

/// Elm-like command batch
/// Describes side effects to be run by the host after an update. The batch is
/// flat and keeps insertion order, so batching is associative and
/// `Cmd::none()` is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cmd<E> {
    effects: Vec<E>,
}

impl<E> Cmd<E> {
    /// Empty batch (do nothing)
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Batch holding exactly one effect
    pub fn single(effect: E) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    /// Combine multiple commands into one, keeping their order
    pub fn batch<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Cmd<E>>,
    {
        commands.into_iter().fold(Self::none(), Self::and)
    }

    /// Append `other` after `self`
    pub fn and(mut self, mut other: Cmd<E>) -> Self {
        self.effects.append(&mut other.effects);
        self
    }

    pub fn push(&mut self, effect: E) {
        self.effects.push(effect);
    }

    /// Re-tag every effect into another effect space
    pub fn map<F, T>(self, f: F) -> Cmd<T>
    where
        F: FnMut(E) -> T,
    {
        Cmd {
            effects: self.effects.into_iter().map(f).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.effects.iter()
    }

    pub fn into_effects(self) -> Vec<E> {
        self.effects
    }
}

impl<E> Default for Cmd<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> From<Vec<E>> for Cmd<E> {
    fn from(effects: Vec<E>) -> Self {
        Self { effects }
    }
}

impl<E> FromIterator<E> for Cmd<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Cmd<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.effects.extend(iter);
    }
}

impl<E> IntoIterator for Cmd<E> {
    type Item = E;
    type IntoIter = vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Cmd<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}
