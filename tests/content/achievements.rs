//! Achievement tests.
//!
//! Tests for requirement evaluation against live statistics.

use dungeon_content::AchievementTracker;
use dungeon_foundation::{Id, Identified};
use dungeon_stats::{
    BattleRecord, BattleStatisticsQuery, CauseOfDeath, CauseOfDeathKind, PartOfDay, Point,
    Statistics,
};

use crate::shipped_content;

fn goblin_kill(part_of_day: PartOfDay, cause: CauseOfDeath) -> BattleRecord {
    BattleRecord::new("GOBLIN", "Humanoid", cause, part_of_day)
}

fn unlocked_ids(tracker: &mut AchievementTracker, statistics: &Statistics) -> Vec<String> {
    let data = shipped_content();
    tracker
        .update(data.achievements(), statistics)
        .into_iter()
        .map(|achievement| achievement.id().to_string())
        .collect()
}

#[test]
fn empty_query_matches_every_battle() {
    let mut statistics = Statistics::new();
    statistics.battle.add_battle(goblin_kill(PartOfDay::Dawn, CauseOfDeath::unarmed()));
    statistics.battle.add_battle(BattleRecord::new(
        "RAT",
        "Beast",
        CauseOfDeath::new(CauseOfDeathKind::Weapon, "STICK"),
        PartOfDay::Night,
    ));
    assert_eq!(statistics.battle.count_matches(&BattleStatisticsQuery::default()), 2);
}

#[test]
fn id_query_counts_only_that_creature() {
    let mut statistics = Statistics::new();
    for _ in 0..3 {
        statistics.battle.add_battle(goblin_kill(PartOfDay::Night, CauseOfDeath::unarmed()));
    }
    statistics.battle.add_battle(BattleRecord::new(
        "RAT",
        "Beast",
        CauseOfDeath::unarmed(),
        PartOfDay::Night,
    ));
    let query = BattleStatisticsQuery::default().with_id("GOBLIN");
    assert_eq!(statistics.battle.count_matches(&query), 3);
    let query = query.with_part_of_day(PartOfDay::Dawn);
    assert_eq!(statistics.battle.count_matches(&query), 0);
}

#[test]
fn tracker_reports_each_unlock_once() {
    let mut tracker = AchievementTracker::new();
    let mut statistics = Statistics::new();

    assert_eq!(unlocked_ids(&mut tracker, &statistics), vec!["WELCOME"]);
    assert!(unlocked_ids(&mut tracker, &statistics).is_empty());

    let crypt = Id::new("CRYPT");
    statistics.record_kill(Point::new(0, 0), &crypt, goblin_kill(PartOfDay::Night, CauseOfDeath::unarmed()));
    assert_eq!(unlocked_ids(&mut tracker, &statistics), vec!["FIRST_BLOOD"]);
    assert!(unlocked_ids(&mut tracker, &statistics).is_empty());
    assert_eq!(tracker.unlocked_count(), 2);
}

#[test]
fn exploration_requirements_need_every_location() {
    let data = shipped_content();
    let wanderer = data.achievements().get("WANDERER").unwrap();
    let forest = Id::new("FOREST");
    let grassland = Id::new("GRASSLAND");

    let mut statistics = Statistics::new();
    for x in 0..3 {
        statistics.record_visit(Point::new(x, 0), &forest);
    }
    assert!(!wanderer.is_fulfilled(&statistics));

    statistics.record_visit(Point::new(0, 1), &grassland);
    statistics.record_visit(Point::new(0, 1), &grassland);
    assert!(!wanderer.is_fulfilled(&statistics));

    statistics.record_visit(Point::new(1, 1), &grassland);
    assert!(wanderer.is_fulfilled(&statistics));
}

#[test]
fn crypt_keeper_needs_kills_and_revisits() {
    let data = shipped_content();
    let keeper = data.achievements().get("CRYPT_KEEPER").unwrap();
    let crypt = Id::new("CRYPT");
    let mut statistics = Statistics::new();

    for _ in 0..3 {
        statistics.record_kill(
            Point::new(5, 5),
            &crypt,
            goblin_kill(PartOfDay::Midnight, CauseOfDeath::new(CauseOfDeathKind::Spell, "FIREBALL")),
        );
    }
    for _ in 0..4 {
        statistics.record_visit(Point::new(5, 5), &crypt);
    }
    assert!(!keeper.is_fulfilled(&statistics));
    statistics.record_visit(Point::new(5, 5), &crypt);
    assert!(keeper.is_fulfilled(&statistics));
}
