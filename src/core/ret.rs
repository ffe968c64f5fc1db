//! Pair results: a model plus the commands produced while updating it

use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, out::OutReturn};

/// Result of an update function: the next model and the commands to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return<M, E> {
    pub model: M,
    pub cmd: Cmd<E>,
}

impl<M, E> Return<M, E> {
    pub fn new(model: M, cmd: Cmd<E>) -> Self {
        Self { model, cmd }
    }

    /// Model without any command
    pub fn just(model: M) -> Self {
        Self::new(model, Cmd::none())
    }

    /// Append a single command
    pub fn command(mut self, effect: E) -> Self {
        self.cmd.push(effect);
        self
    }

    /// Run another update-like step on the model
    ///
    /// Commands returned by `f` are batched after the commands already held,
    /// so chained steps keep call order.
    pub fn sequence<F, R, M2>(self, f: F) -> Return<M2, E>
    where
        F: FnOnce(M) -> R,
        R: Into<Return<M2, E>>,
    {
        let next = f(self.model).into();
        Return::new(next.model, self.cmd.and(next.cmd))
    }

    /// Shape-preserving form of [`Return::sequence`]
    pub fn map_chained<F, R>(self, f: F) -> Self
    where
        F: FnOnce(M) -> R,
        R: Into<Return<M, E>>,
    {
        self.sequence(f)
    }

    pub fn map_model<F, M2>(self, f: F) -> Return<M2, E>
    where
        F: FnOnce(M) -> M2,
    {
        Return::new(f(self.model), self.cmd)
    }

    pub fn map_cmd<F, E2>(self, f: F) -> Return<M, E2>
    where
        F: FnMut(E) -> E2,
    {
        Return::new(self.model, self.cmd.map(f))
    }

    /// Attach an out-message for the parent
    pub fn with_out<O>(self, out: O) -> OutReturn<M, E, O> {
        OutReturn::new(self.model, self.cmd, out)
    }

    pub fn into_parts(self) -> (M, Cmd<E>) {
        (self.model, self.cmd)
    }
}

impl<M, E> From<(M, Cmd<E>)> for Return<M, E> {
    fn from((model, cmd): (M, Cmd<E>)) -> Self {
        Self::new(model, cmd)
    }
}

impl<M, E> From<Return<M, E>> for (M, Cmd<E>) {
    fn from(ret: Return<M, E>) -> Self {
        ret.into_parts()
    }
}

/// Run a child update inside a parent model
///
/// `get` extracts the child model, `update` handles `msg` against it, and
/// `set` stores the updated child back into the parent. Child commands are
/// re-tagged into the parent's effect space with `tag`.
pub fn lift<P, S, CE, PE, Msg, R>(
    get: impl FnOnce(&P) -> S,
    set: impl FnOnce(S, P) -> P,
    tag: impl FnMut(CE) -> PE,
    update: impl FnOnce(Msg, S) -> R,
    msg: Msg,
    parent: P,
) -> Return<P, PE>
where
    R: Into<Return<S, CE>>,
{
    let child = update(msg, get(&parent)).into();
    Return::new(set(child.model, parent), child.cmd.map(tag))
}
