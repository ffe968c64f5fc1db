//! Alternate slot ordering for triple results
//!
//! Some update functions are written as `(model, out, cmd)` rather than
//! `(model, cmd, out)`. [`Alternate`] names that shape and converts into
//! [`OutReturn`], so every triple operation also applies to it.

use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, out::OutReturn};

/// Triple result laid out as `(model, out, cmd)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate<M, O, E>(pub M, pub O, pub Cmd<E>);

impl<M, O, E> Alternate<M, O, E> {
    /// Swap the last two slots into `(model, cmd, out)`
    pub fn swap(self) -> (M, Cmd<E>, O) {
        let Alternate(model, out, cmd) = self;
        (model, cmd, out)
    }
}

impl<M, O, E> From<(M, O, Cmd<E>)> for Alternate<M, O, E> {
    fn from((model, out, cmd): (M, O, Cmd<E>)) -> Self {
        Alternate(model, out, cmd)
    }
}

impl<M, E, O> From<Alternate<M, O, E>> for OutReturn<M, E, O> {
    fn from(alt: Alternate<M, O, E>) -> Self {
        let Alternate(model, out, cmd) = alt;
        OutReturn::new(model, cmd, out)
    }
}

impl<M, E, O> From<OutReturn<M, E, O>> for Alternate<M, O, E> {
    fn from(ret: OutReturn<M, E, O>) -> Self {
        Alternate(ret.model, ret.out, ret.cmd)
    }
}

/// Adapt an update returning `(model, out, cmd)` into one returning
/// `(model, cmd, out)`
pub fn convert_ordering<Msg, M, E, O, F>(f: F) -> impl Fn(Msg, M) -> (M, Cmd<E>, O)
where
    F: Fn(Msg, M) -> (M, O, Cmd<E>),
{
    move |msg: Msg, model: M| Alternate::from(f(msg, model)).swap()
}
