//! Replays a message script through the demo dashboard
//!
//! Every message is folded through [`dashboard::update`] and the resulting
//! model and command batch are recorded. Commands are reported, never run.

use color_eyre::eyre::WrapErr;
use derive_deref::Deref;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    core::cmd::Cmd,
    demo::dashboard::{self, Dashboard, DashboardEffect, DashboardMsg},
    Result,
};

/// Ordered list of messages to replay
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Deref)]
#[serde(transparent)]
pub struct Script(pub Vec<DashboardMsg>);

impl Script {
    /// Parse a json5 array of messages
    pub fn parse(source: &str) -> Result<Self> {
        json5::from_str(source).wrap_err("Failed to parse message script")
    }
}

/// State after one replayed message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub msg: DashboardMsg,
    pub model: Dashboard,
    pub effects: Cmd<DashboardEffect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub model: Dashboard,
    pub reports: Vec<StepReport>,
}

impl Outcome {
    /// All commands produced by the replay, in order
    pub fn effects(&self) -> Cmd<DashboardEffect> {
        Cmd::batch(self.reports.iter().map(|report| report.effects.clone()))
    }
}

pub fn replay(initial: Dashboard, script: &Script) -> Outcome {
    let mut model = initial;
    let mut reports = Vec::with_capacity(script.len());

    for (index, msg) in script.iter().enumerate() {
        let name: &'static str = msg.into();
        let ret = dashboard::update(msg.clone(), model);
        debug!(index, msg = name, effects = ret.cmd.len(), "replayed message");

        reports.push(StepReport {
            index,
            msg: msg.clone(),
            model: ret.model.clone(),
            effects: ret.cmd,
        });
        model = ret.model;
    }

    info!(
        steps = reports.len(),
        renames = model.renames,
        syncs = model.syncs,
        "replay finished"
    );
    Outcome { model, reports }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::demo::counter::CounterMsg;

    #[test]
    fn test_script_parse_json5() {
        let script = Script::parse(
            r#"[
                // comments and trailing commas are fine
                { left: "increment" },
                { rename: "Totals" },
                "sync",
            ]"#,
        )
        .unwrap();

        assert_eq!(
            *script,
            vec![
                DashboardMsg::Left(CounterMsg::Increment),
                DashboardMsg::Rename("Totals".to_string()),
                DashboardMsg::Sync,
            ]
        );
    }

    #[test]
    fn test_script_parse_error() {
        assert!(Script::parse(r#"[{ middle: "increment" }]"#).is_err());
    }

    #[test]
    fn test_replay_empty_script() {
        let initial = Dashboard::new(1, 3, 10);
        let outcome = replay(initial.clone(), &Script::default());

        assert_eq!(outcome.model, initial);
        assert!(outcome.reports.is_empty());
        assert!(outcome.effects().is_none());
    }

    #[test]
    fn test_replay_records_every_step() {
        let script = Script(vec![
            DashboardMsg::Left(CounterMsg::Increment),
            DashboardMsg::Left(CounterMsg::Increment),
        ]);
        let outcome = replay(Dashboard::new(1, 3, 10), &script);

        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.reports[0].model.left.count, 1);
        assert_eq!(outcome.reports[1].index, 1);
        assert_eq!(outcome.model.left.count, 2);
        assert_eq!(outcome.effects().len(), 4);
    }
}
