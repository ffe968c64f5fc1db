use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::core::{cmd::Cmd, out::lift_out, ret::Return};

use super::{
    counter::{self, Counter, CounterEffect, CounterMsg, CounterOut},
    title::{self, Title, TitleEffect, TitleError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Top-level model: a title and two counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: Title,
    pub left: Counter,
    pub right: Counter,
    pub renames: u32,
    pub syncs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DashboardMsg {
    Left(CounterMsg),
    Right(CounterMsg),
    Rename(String),
    Sync,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardEffect {
    Counter(Side, CounterEffect),
    Title(TitleEffect),
    Notify(String),
    /// Request a render from the host
    RequestRender,
}

impl Dashboard {
    pub fn new(step: i64, limit: i64, max_title_width: usize) -> Self {
        Self {
            title: Title::new("Dashboard", max_title_width),
            left: Counter::new(step, limit),
            right: Counter::new(step, limit),
            renames: 0,
            syncs: 0,
        }
    }

    pub fn counter(&self, side: Side) -> &Counter {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn with_counter(self, side: Side, counter: Counter) -> Self {
        match side {
            Side::Left => Self {
                left: counter,
                ..self
            },
            Side::Right => Self {
                right: counter,
                ..self
            },
        }
    }
}

/// Elm-like update function for [`Dashboard`]
pub fn update(msg: DashboardMsg, dashboard: Dashboard) -> Return<Dashboard, DashboardEffect> {
    match msg {
        DashboardMsg::Left(counter_msg) => update_counter(Side::Left, counter_msg, dashboard),
        DashboardMsg::Right(counter_msg) => update_counter(Side::Right, counter_msg, dashboard),
        DashboardMsg::Rename(text) => lift_out(
            |d: &Dashboard| d.title.clone(),
            |title, d| Dashboard { title, ..d },
            DashboardEffect::Title,
            title::update,
            text,
            dashboard,
        )
        .resolve_fallible(on_renamed, on_rename_failed),
        DashboardMsg::Sync => {
            let dashboard = Dashboard {
                syncs: dashboard.syncs + 1,
                ..dashboard
            };
            sync_counter(Side::Left, dashboard)
                .sequence(|d| sync_counter(Side::Right, d))
                .command(DashboardEffect::RequestRender)
        }
    }
}

fn update_counter(
    side: Side,
    msg: CounterMsg,
    dashboard: Dashboard,
) -> Return<Dashboard, DashboardEffect> {
    lift_out(
        |d: &Dashboard| d.counter(side).clone(),
        |counter, d| d.with_counter(side, counter),
        |effect: CounterEffect| DashboardEffect::Counter(side, effect),
        counter::update,
        msg,
        dashboard,
    )
    .resolve_optional(
        |out, d| on_counter_out(side, out, d),
        Cmd::single(DashboardEffect::RequestRender),
    )
}

fn on_counter_out(
    side: Side,
    out: CounterOut,
    dashboard: Dashboard,
) -> Return<Dashboard, DashboardEffect> {
    match out {
        CounterOut::LimitReached(limit) => Return::just(dashboard)
            .command(DashboardEffect::Notify(format!(
                "{side} counter reached {limit}"
            )))
            .command(DashboardEffect::RequestRender),
    }
}

fn on_renamed(text: String, dashboard: Dashboard) -> Return<Dashboard, DashboardEffect> {
    let dashboard = Dashboard {
        renames: dashboard.renames + 1,
        ..dashboard
    };
    Return::just(dashboard)
        .command(DashboardEffect::Notify(format!("renamed to {text}")))
        .command(DashboardEffect::RequestRender)
}

fn on_rename_failed(err: TitleError) -> Cmd<DashboardEffect> {
    Cmd::single(DashboardEffect::Notify(format!("rename rejected: {err}")))
}

fn sync_counter(side: Side, dashboard: Dashboard) -> Return<Dashboard, DashboardEffect> {
    let tag = move |effect: CounterEffect| DashboardEffect::Counter(side, effect);
    lift_out(
        |d: &Dashboard| d.counter(side).clone(),
        |counter, d| d.with_counter(side, counter),
        tag,
        |(), c: Counter| counter::sync(c),
        (),
        dashboard,
    )
    .resolve_effect_stream(tag)
}
