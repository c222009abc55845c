//! Scripted REPL sessions over the shipped content.

use dungeon_foundation::{Id, Result};
use dungeon_runtime::{LineEditor, ReadResult, Repl, Reply, Session, SessionConfig};

use crate::shipped_content;

struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| (*line).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    let session = Session::new(shipped_content(), &SessionConfig::default()).unwrap();
    Repl::with_editor(ScriptedEditor::new(lines), session).without_banner()
}

#[test]
fn scripted_game() {
    let mut repl = repl(&["learn fireball", "learn burning", "cast burn on rat", "spells", "quit"]);
    repl.run().unwrap();

    let book = repl.session().spell_book();
    assert!(book.knows(&Id::new("FIREBALL")));
    assert!(book.knows(&Id::new("BURNING_GROUND")));
    assert_eq!(repl.session().history().len(), 5);
}

#[test]
fn ambiguity_is_reported() {
    let mut repl = repl(&[]);
    repl.eval("learn fireball").unwrap();
    repl.eval("learn burning ground").unwrap();
    assert_eq!(
        repl.eval("cast b").unwrap(),
        Reply::Text("You cast Burning Ground.".to_string())
    );
    assert_eq!(
        repl.eval("item of").unwrap(),
        Reply::Text("Provided input is ambiguous in respect to item.".to_string())
    );
}

#[test]
fn history_is_bounded() {
    let config = SessionConfig::default().with_history_capacity(3);
    let session = Session::new(shipped_content(), &config).unwrap();
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[]), session).without_banner();
    for line in ["help", "license", "tutorial", "spells"] {
        repl.eval(line).unwrap();
    }
    assert_eq!(
        repl.eval("history").unwrap(),
        Reply::Text("  1  license\n  2  tutorial\n  3  spells".to_string())
    );
}
