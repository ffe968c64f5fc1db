use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::core::{cmd::Cmd, out::OutReturn, ret::Return};

/// Bounded counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub count: i64,
    pub step: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CounterMsg {
    Increment,
    Decrement,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterEffect {
    Log(String),
    Persist { count: i64 },
}

/// Notifications for the owner of the counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterOut {
    LimitReached(i64),
}

impl Counter {
    pub fn new(step: i64, limit: i64) -> Self {
        Self {
            count: 0,
            step,
            limit,
        }
    }
}

/// Elm-like update for [`Counter`]
///
/// The count saturates at `limit`; the step that hits the limit reports
/// [`CounterOut::LimitReached`].
pub fn update(
    msg: CounterMsg,
    mut counter: Counter,
) -> OutReturn<Counter, CounterEffect, Option<CounterOut>> {
    match msg {
        CounterMsg::Increment => {
            let before = counter.count;
            counter.count = counter.count.saturating_add(counter.step).min(counter.limit);
            let out = (before < counter.limit && counter.count == counter.limit)
                .then_some(CounterOut::LimitReached(counter.limit));
            let log = CounterEffect::Log(format!("incremented to {}", counter.count));
            Return::new(counter, Cmd::single(log)).with_out(out)
        }
        CounterMsg::Decrement => {
            counter.count = counter.count.saturating_sub(counter.step);
            let log = CounterEffect::Log(format!("decremented to {}", counter.count));
            Return::new(counter, Cmd::single(log)).with_out(None)
        }
        CounterMsg::Reset => {
            counter.count = 0;
            Return::new(counter, Cmd::single(CounterEffect::Log("reset".to_string())))
                .with_out(None)
        }
    }
}

/// Produce the commands that persist the counter
///
/// The persistence commands travel in the out slot so the owner decides how
/// to tag them.
pub fn sync(counter: Counter) -> OutReturn<Counter, CounterEffect, Cmd<CounterEffect>> {
    let persist = Cmd::single(CounterEffect::Persist {
        count: counter.count,
    });
    let log = CounterEffect::Log(format!("syncing {}", counter.count));
    OutReturn::new(counter, Cmd::single(log), persist)
}
