//! Session tests.

use dungeon_foundation::Id;
use dungeon_runtime::{CastOutcome, Session, SessionConfig};
use dungeon_stats::{BattleRecord, CauseOfDeath, CauseOfDeathKind, PartOfDay, Point};

use crate::shipped_content;

fn session() -> Session {
    Session::new(shipped_content(), &SessionConfig::default()).unwrap()
}

#[test]
fn book_teaches_its_skill() {
    let mut session = session();
    let tome = session.data().item_blueprints().get("TOME_OF_FIRE").unwrap();
    let skill = tome.skill().unwrap().clone();
    assert!(session.learn_skill(&skill).unwrap());

    let arguments = ["fire", "on", "rat"];
    match session.spell_book().parse_cast(&arguments) {
        CastOutcome::Cast { spell, target } => {
            assert_eq!(spell.magnitude(), 6);
            assert_eq!(target, &["rat"]);
        }
        other => panic!("expected a cast, got {other:?}"),
    }
}

#[test]
fn pyromaniac_after_ten_fireball_kills() {
    let mut session = session();
    assert_eq!(session.update_achievements(), vec![Id::new("WELCOME")]);

    let forest = Id::new("FOREST");
    let fireball = CauseOfDeath::new(CauseOfDeathKind::Spell, "FIREBALL");
    let mut unlocked = Vec::new();
    for x in 0..10 {
        let kill = BattleRecord::new("RAT", "Beast", fireball.clone(), PartOfDay::Afternoon);
        unlocked.extend(session.record_kill(Point::new(x, 0), &forest, kill));
    }
    assert_eq!(unlocked, vec![Id::new("FIRST_BLOOD"), Id::new("PYROMANIAC")]);
    assert_eq!(session.statistics().battle.battle_count(), 10);
}

#[test]
fn history_capacity_comes_from_config() {
    let config = SessionConfig::default().with_history_capacity(2);
    let mut session = Session::new(shipped_content(), &config).unwrap();
    for line in ["a", "b", "c"] {
        session.record_command(line);
    }
    assert_eq!(session.history().capacity(), 2);
    assert_eq!(session.history().get(0).map(String::as_str), Some("b"));
    assert_eq!(session.history().last().map(String::as_str), Some("c"));
}
