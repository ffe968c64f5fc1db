use pretty_assertions::assert_eq;

use nestea::{
    demo::{CounterEffect, Dashboard, DashboardEffect, Side},
    replay::{replay, Script},
    Cmd,
};

const SCRIPT: &str = r#"[
    { left: "increment" },
    { left: "increment" },
    { right: "decrement" },
    { rename: "Totals" },
    "sync",
]"#;

/// Full replay through every kind of out-message the dashboard handles
#[test]
fn test_replay_full_script() {
    let script = Script::parse(SCRIPT).unwrap();
    let outcome = replay(Dashboard::new(1, 2, 16), &script);

    assert_eq!(outcome.reports.len(), 5);
    assert_eq!(outcome.model.left.count, 2);
    assert_eq!(outcome.model.right.count, -1);
    assert_eq!(outcome.model.title.text, "Totals");
    assert_eq!(outcome.model.renames, 1);
    assert_eq!(outcome.model.syncs, 1);

    // Second increment hits the limit and is reported by the dashboard
    assert_eq!(
        outcome.reports[1].effects.clone().into_effects(),
        vec![
            DashboardEffect::Counter(
                Side::Left,
                CounterEffect::Log("incremented to 2".to_string())
            ),
            DashboardEffect::Notify("left counter reached 2".to_string()),
            DashboardEffect::RequestRender,
        ]
    );

    // Sync hands both persistence commands up, left first
    let persisted: Vec<_> = outcome.reports[4]
        .effects
        .iter()
        .filter(|effect| {
            matches!(
                effect,
                DashboardEffect::Counter(_, CounterEffect::Persist { .. })
            )
        })
        .cloned()
        .collect();
    assert_eq!(
        persisted,
        vec![
            DashboardEffect::Counter(Side::Left, CounterEffect::Persist { count: 2 }),
            DashboardEffect::Counter(Side::Right, CounterEffect::Persist { count: -1 }),
        ]
    );
}

#[test]
fn test_replay_rejected_rename_keeps_title() {
    let script = Script::parse(r#"[{ rename: "far too long for this title" }]"#).unwrap();
    let initial = Dashboard::new(1, 2, 8);
    let outcome = replay(initial.clone(), &script);

    assert_eq!(outcome.model, initial);
    assert_eq!(
        outcome.effects(),
        Cmd::single(DashboardEffect::Notify(
            "rename rejected: title is 27 columns wide (max 8)".to_string()
        ))
    );
}

#[test]
fn test_step_report_serialization() {
    let script = Script::parse(r#"["sync"]"#).unwrap();
    let outcome = replay(Dashboard::new(1, 2, 8), &script);

    let json = serde_json::to_value(&outcome.reports[0]).unwrap();
    assert_eq!(json["index"], 0);
    assert_eq!(json["msg"], "sync");
    assert_eq!(json["model"]["syncs"], 1);
    assert_eq!(json["effects"][1]["counter"][0], "left");
    assert_eq!(json["effects"][1]["counter"][1]["persist"]["count"], 0);
    assert_eq!(json["effects"][4], "request_render");
}
