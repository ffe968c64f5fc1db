//! Triple results: a model, its commands, and an out-message for the parent
//!
//! Out-messages are how a child reports something to its parent without the
//! parent inspecting the child's model. They are never routed or re-tagged
//! automatically: the parent consumes them with one of the `resolve*`
//! functions or transforms them with [`OutReturn::map_out`].

use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, ret::Return};

/// Result of an update function that also reports to its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutReturn<M, E, O> {
    pub model: M,
    pub cmd: Cmd<E>,
    pub out: O,
}

impl<M, E, O> OutReturn<M, E, O> {
    pub fn new(model: M, cmd: Cmd<E>, out: O) -> Self {
        Self { model, cmd, out }
    }

    /// Consume the out-message with `handler`
    ///
    /// Commands from the handler run after the commands already held.
    pub fn resolve<F, R, M2>(self, handler: F) -> Return<M2, E>
    where
        F: FnOnce(O, M) -> R,
        R: Into<Return<M2, E>>,
    {
        let handled = handler(self.out, self.model).into();
        Return::new(handled.model, self.cmd.and(handled.cmd))
    }

    pub fn map_model<F, M2>(self, f: F) -> OutReturn<M2, E, O>
    where
        F: FnOnce(M) -> M2,
    {
        OutReturn::new(f(self.model), self.cmd, self.out)
    }

    pub fn map_cmd<F, E2>(self, f: F) -> OutReturn<M, E2, O>
    where
        F: FnMut(E) -> E2,
    {
        OutReturn::new(self.model, self.cmd.map(f), self.out)
    }

    pub fn map_out<F, O2>(self, f: F) -> OutReturn<M, E, O2>
    where
        F: FnOnce(O) -> O2,
    {
        OutReturn::new(self.model, self.cmd, f(self.out))
    }

    /// Chain another step driven by the current out-message
    ///
    /// The step's out-message replaces the current one; commands accumulate
    /// in call order.
    pub fn and_then<F, R>(self, f: F) -> Self
    where
        F: FnOnce(O, M) -> R,
        R: Into<OutReturn<M, E, O>>,
    {
        self.and_map(f)
    }

    /// Like [`OutReturn::and_then`], but the step may change the model and
    /// out-message types
    pub fn and_map<F, R, M2, O2>(self, f: F) -> OutReturn<M2, E, O2>
    where
        F: FnOnce(O, M) -> R,
        R: Into<OutReturn<M2, E, O2>>,
    {
        let next = f(self.out, self.model).into();
        OutReturn::new(next.model, self.cmd.and(next.cmd), next.out)
    }

    /// Drop the out-message
    pub fn into_return(self) -> Return<M, E> {
        Return::new(self.model, self.cmd)
    }

    pub fn into_parts(self) -> (M, Cmd<E>, O) {
        (self.model, self.cmd, self.out)
    }
}

impl<M, E, O> OutReturn<M, E, Option<O>> {
    /// Resolve an out-message that may be absent
    ///
    /// Without an out-message the model is kept and `default_cmd` is batched
    /// instead, so it is never lost.
    pub fn resolve_optional<F, R>(self, handler: F, default_cmd: Cmd<E>) -> Return<M, E>
    where
        F: FnOnce(O, M) -> R,
        R: Into<Return<M, E>>,
    {
        match self.out {
            Some(out) => OutReturn::new(self.model, self.cmd, out).resolve(handler),
            None => Return::new(self.model, self.cmd.and(default_cmd)),
        }
    }
}

impl<M, E, T, X> OutReturn<M, E, Result<T, X>> {
    /// Resolve a fallible out-message
    ///
    /// On `Err` the model is left as is; only the commands from `on_error`
    /// are added.
    pub fn resolve_fallible<F, R, G>(self, handler: F, on_error: G) -> Return<M, E>
    where
        F: FnOnce(T, M) -> R,
        R: Into<Return<M, E>>,
        G: FnOnce(X) -> Cmd<E>,
    {
        match self.out {
            Ok(value) => OutReturn::new(self.model, self.cmd, value).resolve(handler),
            Err(err) => Return::new(self.model, self.cmd.and(on_error(err))),
        }
    }
}

impl<M, E, X> OutReturn<M, E, Cmd<X>> {
    /// Run the commands carried in the out slot, re-tagged with `tag`
    ///
    /// The model is passed through untouched and never exposed to `tag`.
    pub fn resolve_effect_stream<F>(self, tag: F) -> Return<M, E>
    where
        F: FnMut(X) -> E,
    {
        Return::new(self.model, self.cmd.and(self.out.map(tag)))
    }
}

impl<M, E, O> From<(M, Cmd<E>, O)> for OutReturn<M, E, O> {
    fn from((model, cmd, out): (M, Cmd<E>, O)) -> Self {
        Self::new(model, cmd, out)
    }
}

impl<M, E, O> From<OutReturn<M, E, O>> for (M, Cmd<E>, O) {
    fn from(ret: OutReturn<M, E, O>) -> Self {
        ret.into_parts()
    }
}

/// Run a child update that reports to its parent inside a parent model
///
/// Same as [`lift`](crate::core::ret::lift), with the child's out-message
/// passed through unchanged.
pub fn lift_out<P, S, CE, PE, O, Msg, R>(
    get: impl FnOnce(&P) -> S,
    set: impl FnOnce(S, P) -> P,
    tag: impl FnMut(CE) -> PE,
    update: impl FnOnce(Msg, S) -> R,
    msg: Msg,
    parent: P,
) -> OutReturn<P, PE, O>
where
    R: Into<OutReturn<S, CE, O>>,
{
    let child = update(msg, get(&parent)).into();
    OutReturn::new(set(child.model, parent), child.cmd.map(tag), child.out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
    }

    #[test]
    fn test_and_then_example() {
        let start: OutReturn<Point, &str, &str> = OutReturn::new(Point { x: 1 }, Cmd::none(), "a");

        let ret = start.and_then(|out, _model| {
            assert_eq!(out, "a");
            (Point { x: 2 }, Cmd::single("e2"), "b")
        });

        assert_eq!(ret.model, Point { x: 2 });
        assert_eq!(ret.cmd.into_effects(), vec!["e2"]);
        assert_eq!(ret.out, "b");
    }

    #[test]
    fn test_and_then_accumulates_commands() {
        let ret = OutReturn::new(0, Cmd::single("first"), 1)
            .and_then(|out: i32, model: i32| (model + out, Cmd::single("second"), out * 2))
            .and_then(|out: i32, model: i32| (model + out, Cmd::single("third"), out * 2));

        assert_eq!(ret.model, 3);
        assert_eq!(ret.out, 4);
        assert_eq!(ret.cmd.into_effects(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_and_map_changes_types() {
        let ret: OutReturn<String, &str, bool> = OutReturn::new(5, Cmd::single("kept"), 'z')
            .and_map(|out: char, model: i32| {
                (format!("{model}{out}"), Cmd::single("added"), true)
            });

        assert_eq!(ret.model, "5z");
        assert!(ret.out);
        assert_eq!(ret.cmd.into_effects(), vec!["kept", "added"]);
    }

    #[test]
    fn test_resolve_folds_out_message() {
        let ret = OutReturn::new(10, Cmd::single("child"), 5)
            .resolve(|out: i32, model: i32| (model - out, Cmd::single("parent")));

        assert_eq!(ret.model, 5);
        assert_eq!(ret.cmd.into_effects(), vec!["child", "parent"]);
    }

    #[test]
    fn test_resolve_optional_absent_keeps_default() {
        let ret = OutReturn::new(1, Cmd::single("child"), None::<i32>).resolve_optional(
            |out: i32, model: i32| (model + out, Cmd::single("handled")),
            Cmd::single("default"),
        );

        assert_eq!(ret.model, 1);
        assert_eq!(ret.cmd.into_effects(), vec!["child", "default"]);
    }

    #[test]
    fn test_resolve_optional_present_uses_handler() {
        let ret = OutReturn::new(1, Cmd::single("child"), Some(2)).resolve_optional(
            |out: i32, model: i32| (model + out, Cmd::single("handled")),
            Cmd::single("default"),
        );

        assert_eq!(ret.model, 3);
        assert_eq!(ret.cmd.into_effects(), vec!["child", "handled"]);
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(1024)]
    fn test_resolve_fallible_error_keeps_model(#[case] model: i32) {
        let ret = OutReturn::new(model, Cmd::single("child".to_string()), Err::<i32, _>("boom"))
            .resolve_fallible(
                |value: i32, _model: i32| (value, Cmd::single("ok".to_string())),
                |err: &str| Cmd::single(format!("error: {err}")),
            );

        assert_eq!(ret.model, model);
        assert_eq!(
            ret.cmd.into_effects(),
            vec!["child".to_string(), "error: boom".to_string()]
        );
    }

    #[test]
    fn test_resolve_fallible_ok_uses_handler() {
        let ret = OutReturn::new(1, Cmd::none(), Ok::<i32, &str>(41)).resolve_fallible(
            |value: i32, model: i32| (model + value, Cmd::single("ok")),
            |_err: &str| Cmd::single("error"),
        );

        assert_eq!(ret.model, 42);
        assert_eq!(ret.cmd.into_effects(), vec!["ok"]);
    }

    #[test]
    fn test_resolve_effect_stream_tags_and_keeps_model() {
        #[derive(Debug, PartialEq)]
        enum Parent {
            Own,
            Child(u8),
        }

        let ret = OutReturn::new("model", Cmd::single(Parent::Own), Cmd::from(vec![1u8, 2]))
            .resolve_effect_stream(Parent::Child);

        assert_eq!(ret.model, "model");
        assert_eq!(
            ret.cmd.into_effects(),
            vec![Parent::Own, Parent::Child(1), Parent::Child(2)]
        );
    }

    #[test]
    fn test_structural_maps_touch_one_slot() {
        let base = OutReturn::new(2, Cmd::from(vec![1, 2]), "out");

        let by_model = base.clone().map_model(|m| m * 10);
        assert_eq!(by_model, OutReturn::new(20, Cmd::from(vec![1, 2]), "out"));

        let by_cmd = base.clone().map_cmd(|e| e + 100);
        assert_eq!(by_cmd, OutReturn::new(2, Cmd::from(vec![101, 102]), "out"));

        let by_out = base.map_out(str::len);
        assert_eq!(by_out, OutReturn::new(2, Cmd::from(vec![1, 2]), 3));
    }

    #[test]
    fn test_lift_out_propagates_out_unchanged() {
        #[derive(Debug, Clone, PartialEq)]
        struct Parent {
            name: &'static str,
            child: i32,
        }

        let parent = Parent {
            name: "p",
            child: 9,
        };

        let ret = lift_out(
            |p: &Parent| p.child,
            |child, p| Parent { child, ..p },
            |e: u8| u16::from(e) * 2,
            |msg: i32, child: i32| (child + msg, Cmd::single(3u8), "limit"),
            1,
            parent,
        );

        assert_eq!(
            ret.model,
            Parent {
                name: "p",
                child: 10
            }
        );
        assert_eq!(ret.cmd.into_effects(), vec![6u16]);
        assert_eq!(ret.out, "limit");
    }

    #[test]
    fn test_into_return_drops_out() {
        let ret = OutReturn::new(1, Cmd::single("e"), "dropped").into_return();
        assert_eq!(ret, Return::new(1, Cmd::single("e")));
    }
}
