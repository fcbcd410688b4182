use stickfight_shared::*;
use stickfight_sim::scripts::{DancerFeed, RusherFeed};
use stickfight_sim::{run_match, IdleFeed};

#[test]
fn test_rusher_beats_idle() {
    let config = MatchConfig {
        p0_name: "rusher".into(),
        p1_name: "idle".into(),
        ..Default::default()
    };
    let mut p0 = RusherFeed::for_slot(0);
    let mut p1 = IdleFeed;

    let replay = run_match(&config, &mut p0, &mut p1);

    assert_eq!(
        replay.result.outcome,
        MatchOutcome::Player0Win,
        "Rusher should beat Idle. Got {:?} at tick {} with p0_health={} p1_health={}",
        replay.result.outcome,
        replay.result.final_tick,
        replay.result.stats.p0_health,
        replay.result.stats.p1_health,
    );
    assert_eq!(replay.result.reason, MatchEndReason::Knockout);
    assert_eq!(replay.result.stats.p1_health, 0);
    assert_eq!(replay.result.stats.p0_hits, 10);
}

#[test]
fn test_mirrored_rushers_draw_by_double_knockout() {
    let config = MatchConfig {
        p0_name: "rusher".into(),
        p1_name: "rusher".into(),
        ..Default::default()
    };
    let mut p0 = RusherFeed::for_slot(0);
    let mut p1 = RusherFeed::for_slot(1);

    let replay = run_match(&config, &mut p0, &mut p1);

    // Perfectly symmetric bout: both land their tenth hit the same tick.
    assert_eq!(replay.result.outcome, MatchOutcome::Draw);
    assert_eq!(replay.result.reason, MatchEndReason::Knockout);
    assert_eq!(replay.result.stats.p0_health, 0);
    assert_eq!(replay.result.stats.p1_health, 0);
    assert_eq!(replay.result.stats.p0_hits, replay.result.stats.p1_hits);
}

#[test]
fn test_idle_match_times_out_untouched() {
    let config = MatchConfig {
        max_ticks: 300,
        ..Default::default()
    };
    let mut p0 = IdleFeed;
    let mut p1 = IdleFeed;

    let replay = run_match(&config, &mut p0, &mut p1);

    assert_eq!(replay.result.outcome, MatchOutcome::Draw);
    assert_eq!(replay.result.reason, MatchEndReason::Timeout);
    assert_eq!(replay.result.final_tick, 300);
    assert_eq!(replay.result.stats.p0_health, MAX_HEALTH);
    assert_eq!(replay.result.stats.p1_health, MAX_HEALTH);

    for frame in &replay.frames {
        assert_eq!(frame.fighters[0].x, 150.0);
        assert_eq!(frame.fighters[1].x, 650.0);
        assert_eq!(frame.fighters[0].y, 300.0);
        assert!(!frame.fighters[0].attacking);
    }
}

#[test]
fn test_health_only_ever_decreases() {
    let config = MatchConfig {
        p0_name: "rusher".into(),
        p1_name: "rusher".into(),
        ..Default::default()
    };
    let mut p0 = RusherFeed::for_slot(0);
    let mut p1 = RusherFeed::for_slot(1);

    let replay = run_match(&config, &mut p0, &mut p1);

    let mut prev = [MAX_HEALTH, MAX_HEALTH];
    for frame in &replay.frames {
        for (i, fighter) in frame.fighters.iter().enumerate() {
            assert!(fighter.health <= MAX_HEALTH);
            assert!(
                fighter.health <= prev[i],
                "P{} health rose from {} to {} at tick {}",
                i,
                prev[i],
                fighter.health,
                frame.tick,
            );
            prev[i] = fighter.health;
        }
    }
}

#[test]
fn test_fighters_stay_inside_the_arena() {
    let config = MatchConfig::default();
    let mut p0 = RusherFeed::for_slot(0);
    let mut p1 = DancerFeed;

    let replay = run_match(&config, &mut p0, &mut p1);

    for frame in &replay.frames {
        for fighter in &frame.fighters {
            assert!(fighter.x >= HEAD_RADIUS);
            assert!(fighter.x <= DEFAULT_ARENA_WIDTH - HEAD_RADIUS);
            assert!(fighter.y >= HEAD_RADIUS);
            assert!(fighter.y <= DEFAULT_ARENA_HEIGHT - BODY_DEPTH);
        }
    }
}

#[test]
fn test_deterministic_replays() {
    let config = MatchConfig {
        p0_name: "rusher".into(),
        p1_name: "dancer".into(),
        ..Default::default()
    };

    let replay1 = {
        let mut p0 = RusherFeed::for_slot(0);
        let mut p1 = DancerFeed;
        run_match(&config, &mut p0, &mut p1)
    };

    let replay2 = {
        let mut p0 = RusherFeed::for_slot(0);
        let mut p1 = DancerFeed;
        run_match(&config, &mut p0, &mut p1)
    };

    assert_eq!(replay1.result.final_tick, replay2.result.final_tick);
    assert_eq!(replay1.result.outcome, replay2.result.outcome);
    assert_eq!(replay1.result.stats.p0_health, replay2.result.stats.p0_health);
    assert_eq!(replay1.result.stats.p1_health, replay2.result.stats.p1_health);
    assert_eq!(replay1.frames.len(), replay2.frames.len());

    for (a, b) in replay1.frames.iter().zip(replay2.frames.iter()) {
        for (fa, fb) in a.fighters.iter().zip(b.fighters.iter()) {
            assert_eq!(fa.x, fb.x);
            assert_eq!(fa.y, fb.y);
            assert_eq!(fa.health, fb.health);
        }
    }
}

#[test]
fn test_replay_serialization() {
    let config = MatchConfig {
        p0_name: "rusher".into(),
        p1_name: "idle".into(),
        max_ticks: 240,
        ..Default::default()
    };
    let mut p0 = RusherFeed::for_slot(0);
    let mut p1 = IdleFeed;

    let replay = run_match(&config, &mut p0, &mut p1);

    let json = serde_json::to_string(&replay).expect("replay should serialize");
    assert!(json.len() > 100);

    let replay2: Replay = serde_json::from_str(&json).expect("replay should deserialize");
    assert_eq!(replay.result.final_tick, replay2.result.final_tick);
    assert_eq!(replay.frames.len(), replay2.frames.len());
}
