use battler_kills::{
    Event,
    IdentityResolver,
    ReplayData,
    SideId,
    log::Log,
    parse_kills,
};
use battler_test_utils::{
    TestReplayBuilder,
    assert_deaths_eq,
    assert_kills_eq,
};

fn sample_replays() -> Vec<ReplayData> {
    Vec::from_iter([
        TestReplayBuilder::new()
            .with_player("Ash")
            .with_player("Gary")
            .poke("p1", "Gyarados")
            .poke("p2", "Skarmory")
            .switch("p1a", "Gyarados", "Gyarados")
            .switch("p2a", "Skarmory", "Skarmory")
            .use_move("p1a", "Gyarados", "Waterfall", ("p2a", "Skarmory"))
            .build(),
        TestReplayBuilder::new()
            .with_player("Ash")
            .with_player("Gary")
            .switch("p1a", "Gyarados", "Gyarados")
            .switch("p2a", "Skarmory", "Skarmory")
            .use_move("p1a", "Gyarados", "Waterfall", ("p2a", "Skarmory"))
            .faint("p2a", "Skarmory")
            .faint("p2a", "Skarmory")
            .faint("p1a", "Ghost")
            .faint("p2a", "Nobody")
            .build(),
        TestReplayBuilder::new()
            .with_player("Ash")
            .switch("p1a", "A", "Pikachu")
            .switch("p2a", "B", "Eevee")
            .damage_from("p1a", "A", "0 fnt", "brn")
            .faint("p1a", "A")
            .switch("p1a", "A", "Raichu")
            .use_move("p2a", "B", "Tackle", ("p1a", "A"))
            .faint("p1a", "A")
            .faint("p2a", "B")
            .build(),
        TestReplayBuilder::new()
            .with_player("Ash")
            .with_player("Gary")
            .line("|faint|p1a: Gyarados")
            .line("|faint|")
            .line("|move|p2a: Skarmory")
            .build(),
    ])
}

fn knockouts_resolved_to_side(data: &ReplayData, side: SideId) -> u64 {
    let log = Log::from_text(data.log.as_deref().unwrap_or_default()).unwrap();
    let mut identities = IdentityResolver::default();
    let mut knockouts = 0;
    for record in log.records() {
        match Event::classify(record) {
            Ok(Some(Event::Declare { side, species })) => identities.declare(side, &species),
            Ok(Some(Event::SwitchIn {
                side,
                nickname,
                species,
            })) => identities.switch_in(side, &nickname, &species),
            Ok(Some(Event::Faint { victim })) => {
                if identities.resolve(&victim).owner.side() == Some(side) {
                    knockouts += 1;
                }
            }
            _ => (),
        }
    }
    knockouts
}

#[test]
fn no_knockouts_means_empty_tables() {
    let report = parse_kills(&sample_replays()[0]);
    for side in SideId::ALL {
        assert!(report.side(side).kills.is_empty());
        assert!(report.side(side).deaths.is_empty());
    }
}

#[test]
fn deaths_never_exceed_knockouts_of_side() {
    for data in sample_replays() {
        let report = parse_kills(&data);
        for side in SideId::ALL {
            assert!(
                report.side(side).total_deaths() <= knockouts_resolved_to_side(&data, side),
                "{side} has more deaths than knockouts in {:?}",
                data.log
            );
        }
    }
}

#[test]
fn gyarados_knocks_out_skarmory_directly() {
    let report = parse_kills(
        &TestReplayBuilder::new()
            .with_player("A")
            .with_player("B")
            .poke("p1", "Gyarados")
            .poke("p2", "Skarmory")
            .switch("p1a", "Gyarados", "Gyarados")
            .switch("p2a", "Skarmory", "Skarmory")
            .use_move("p1a", "Gyarados", "Waterfall", ("p2a", "Skarmory"))
            .faint("p2a", "Skarmory")
            .build(),
    );
    assert_kills_eq(&report, SideId::One, &[("Gyarados", 1, 0)]);
    assert_deaths_eq(&report, SideId::Two, &[("Skarmory", 1)]);
    assert_eq!(report.side_by_name("A").map(|side| side.total_kills()), Some(1));
    assert_eq!(report.side_by_name("B").map(|side| side.total_deaths()), Some(1));
}

#[test]
fn skarmory_knocks_itself_out_passively() {
    let report = parse_kills(
        &TestReplayBuilder::new()
            .with_player("A")
            .with_player("B")
            .poke("p1", "Gyarados")
            .poke("p2", "Skarmory")
            .switch("p1a", "Gyarados", "Gyarados")
            .switch("p2a", "Skarmory", "Skarmory")
            .damage_from("p2a", "Skarmory", "0 fnt", "Sandstorm")
            .faint("p2a", "Skarmory")
            .build(),
    );
    assert_kills_eq(&report, SideId::One, &[]);
    assert_kills_eq(&report, SideId::Two, &[("Skarmory", 0, 1)]);
    assert_deaths_eq(&report, SideId::Two, &[("Skarmory", 1)]);
}

#[test]
fn nickname_reuse_keeps_earlier_attribution() {
    let report = parse_kills(&sample_replays()[2]);
    assert_kills_eq(&report, SideId::One, &[("Pikachu", 0, 1)]);
    assert_kills_eq(&report, SideId::Two, &[("Eevee", 2, 0)]);
    assert_deaths_eq(
        &report,
        SideId::One,
        &[("Pikachu", 1), ("Raichu", 1)],
    );
    assert_deaths_eq(&report, SideId::Two, &[("Eevee", 1)]);
    assert_eq!(report.players(), ["Ash", "Player 2"]);
}
