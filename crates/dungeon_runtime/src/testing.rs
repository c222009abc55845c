//! Small in-memory game used by the unit tests.

use dungeon_content::{ContentConfig, ContentLoader, GameData};
use dungeon_records::MemorySource;

pub(crate) fn source() -> MemorySource {
    MemorySource::new()
        .with_resource(
            "items.txt",
            "ID: CLUB\nTYPE: Weapon\nNAME: Club\nTAGS: WEAPON\nDAMAGE: 4\nWEIGHT: 1.5\nEND\n\
             ID: SCROLL\nTYPE: Book\nNAME: Fire Scroll\nTAGS: BOOK\nTEXT: Burn.\nSKILL: FIREBALL\nEND\n\
             ID: SCROLL_OF_REPAIR\nTYPE: Book\nNAME: Repair Scroll\nTAGS: BOOK\nTEXT: Mend.\nSKILL: REPAIR\nEND\n",
        )
        .with_resource(
            "creatures.txt",
            "ID: GOBLIN\nTYPE: Humanoid\nNAME: Goblin\nWEAPON: CLUB\nEND\n",
        )
        .with_resource(
            "locations.txt",
            "ID: CAVE\nTYPE: LAND\nNAME: Cave\nSYMBOL: C\nCOLOR: 90/90/90\n\
             INFO: A damp cave.\nSPAWNERS: GOBLIN/2/30\nITEMS: SCROLL/0.1\nBLOCKED_ENTRANCES: N\nEND\n",
        )
        .with_resource(
            "achievements.json",
            r#"{"achievements": [
                {"id": "WELCOME", "name": "Welcome", "info": "Start the game.", "text": "Hello."},
                {
                    "id": "FIRST_BLOOD",
                    "name": "First Blood",
                    "info": "Kill a creature.",
                    "text": "You killed something.",
                    "battleRequirements": [{"query": {}, "count": 1}]
                },
                {
                    "id": "SPELUNKER",
                    "name": "Spelunker",
                    "info": "Visit two caves.",
                    "text": "Dark in here.",
                    "explorationRequirements": {"visitedLocations": {"CAVE": 2}}
                }
            ]}"#,
        )
        .with_resource("license.json", r#"{"license": "Unlicense"}"#)
        .with_resource("tutorial.json", r#"{"tutorial": "Type help."}"#)
}

pub(crate) fn game_data() -> GameData {
    ContentLoader::new(source(), ContentConfig::default())
        .load_all()
        .unwrap()
}
