//! The interactive command loop.
//!
//! Each input line is tokenized, its first word picks a command, and the
//! remaining words are resolved through the fuzzy matcher.

use std::fmt::Write as _;
use std::io::{self, Write};

use dungeon_content::{ItemBlueprint, LocationPreset};
use dungeon_foundation::{Error, Identified, Result, Selectable, Token};
use dungeon_parser::{InputTokenizer, MatchOutcome, find_best_complete_matches};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use crate::spellcaster::CastOutcome;

/// Command words, as offered for completion.
const COMMANDS: &[&str] = &[
    "achievements",
    "cast",
    "help",
    "history",
    "item",
    "learn",
    "license",
    "location",
    "quit",
    "spells",
    "tutorial",
];

const HELP: &str = "\
Commands:
  cast <spell> [on <target>]  cast a spell you know
  learn <skill>               learn a skill
  spells                      list the spells you know
  item <name>                 describe an item
  location <name>             describe a location
  achievements                list achievements
  history                     show recent commands
  license                     show the license
  tutorial                    show the tutorial
  help                        show this message
  quit                        leave the game";

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the player.
    Text(String),
    /// Nothing to show.
    Silent,
    /// The player asked to leave.
    Quit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(COMMANDS.iter().map(|c| (*c).to_string()).collect());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.announce_achievements();

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        match self.eval(trimmed) {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }
        self.announce_achievements();
        Ok(true)
    }

    /// Evaluates one command line.
    ///
    /// The line is remembered in the session history after it runs, so
    /// `history` lists the commands before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the command refers to content that does not exist.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let Some(command) = InputTokenizer::command(input) else {
            return Ok(Reply::Silent);
        };
        let arguments = command.arguments.as_slice();

        let reply = match command.verb.as_str() {
            "cast" => self.cast(arguments),
            "learn" => self.learn(arguments)?,
            "spells" => self.spells(),
            "item" => self.item(arguments),
            "location" => self.location(arguments),
            "achievements" => self.achievements(),
            "history" => self.history(),
            "license" => Reply::text(self.session.data().license()),
            "tutorial" => Reply::text(self.session.data().tutorial()),
            "help" => Reply::text(HELP),
            "quit" | "exit" => Reply::Quit,
            verb => Reply::text(format!(
                "I don't know how to '{verb}'. Type help for a list of commands."
            )),
        };
        self.session.record_command(input.trim());
        Ok(reply)
    }

    fn cast(&self, arguments: &[String]) -> Reply {
        match self.session.spell_book().parse_cast(arguments) {
            CastOutcome::NoArguments => Reply::text("Cast what?"),
            CastOutcome::NoMatch => Reply::text("That did not match any spell you know."),
            CastOutcome::Ambiguous(_) => {
                Reply::text("Provided input is ambiguous in respect to spell.")
            }
            CastOutcome::Cast { spell, target } if target.is_empty() => {
                Reply::text(format!("You cast {}.", spell.name()))
            }
            CastOutcome::Cast { spell, target } => {
                Reply::text(format!("You cast {} on {}.", spell.name(), target.join(" ")))
            }
        }
    }

    fn learn(&mut self, arguments: &[String]) -> Result<Reply> {
        if arguments.is_empty() {
            return Ok(Reply::text("Learn what?"));
        }
        let skills = self.session.data().skill_definitions();
        let id = match find_best_complete_matches(skills.values(), arguments).classify() {
            MatchOutcome::None => return Ok(Reply::text("That did not match any skill.")),
            MatchOutcome::Ambiguous(_) => {
                return Ok(Reply::text("Provided input is ambiguous in respect to skill."));
            }
            MatchOutcome::Unique(skill) => skill.id().clone(),
        };
        let name = skills
            .get(&id)
            .map(|skill| skill.name().to_string())
            .unwrap_or_default();
        if self.session.learn_skill(&id)? {
            Ok(Reply::text(format!("You learned {name}.")))
        } else {
            Ok(Reply::text(format!("You already know {name}.")))
        }
    }

    fn spells(&self) -> Reply {
        let book = self.session.spell_book();
        if book.is_empty() {
            return Reply::text("You know no spells.");
        }
        let mut text = String::from("You know:");
        for spell in book.spells() {
            let _ = write!(text, "\n  {} ({} mana)", spell.name(), spell.mana_cost());
        }
        Reply::Text(text)
    }

    fn item(&self, arguments: &[String]) -> Reply {
        let items = self.session.data().item_blueprints();
        match find_best_complete_matches(items.values(), arguments).classify() {
            MatchOutcome::None => Reply::text("That did not match any item."),
            MatchOutcome::Ambiguous(_) => {
                Reply::text("Provided input is ambiguous in respect to item.")
            }
            MatchOutcome::Unique(item) => Reply::Text(describe_item(item)),
        }
    }

    fn location(&self, arguments: &[String]) -> Reply {
        let locations = self.session.data().location_presets();
        match find_best_complete_matches(locations.values(), arguments).classify() {
            MatchOutcome::None => Reply::text("That did not match any location."),
            MatchOutcome::Ambiguous(_) => {
                Reply::text("Provided input is ambiguous in respect to location.")
            }
            MatchOutcome::Unique(location) => Reply::Text(describe_location(location)),
        }
    }

    fn achievements(&self) -> Reply {
        let achievements = self.session.data().achievements();
        if achievements.is_empty() {
            return Reply::text("There are no achievements.");
        }
        let tracker = self.session.tracker();
        let mut text = format!(
            "Unlocked {} of {} achievements:",
            tracker.unlocked_count(),
            achievements.len()
        );
        for achievement in achievements.values() {
            let mark = if tracker.is_unlocked(achievement.id()) { 'x' } else { ' ' };
            let _ = write!(text, "\n  [{mark}] {}: {}", achievement.name(), achievement.info());
        }
        Reply::Text(text)
    }

    fn history(&self) -> Reply {
        let history = self.session.history();
        if history.is_empty() {
            return Reply::Silent;
        }
        let mut text = String::new();
        for (index, line) in history.iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            let _ = write!(text, "{:>3}  {line}", index + 1);
        }
        Reply::Text(text)
    }

    fn announce_achievements(&mut self) {
        for id in self.session.update_achievements() {
            if let Some(achievement) = self.session.data().achievements().get(&id) {
                println!(
                    "\x1b[1;33mAchievement unlocked: {}\x1b[0m\n{}",
                    achievement.name(),
                    achievement.text()
                );
            }
        }
    }

    /// Prints an error message.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mDungeon v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type help for a list of commands. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

fn describe_item(item: &ItemBlueprint) -> String {
    let integrity = item.integrity();
    let mut text = format!("{} ({})", item.name(), item.item_type());
    let _ = write!(
        text,
        "\n  weight {:.1}, damage {}, hit rate {:.2}, integrity {}/{}",
        item.weight(),
        item.damage(),
        item.hit_rate(),
        integrity.current,
        integrity.maximum
    );
    if !item.tags().is_empty() {
        let tags: Vec<&str> = item.tags().iter().map(|tag| tag.as_token()).collect();
        let _ = write!(text, "\n  tags: {}", tags.join(", "));
    }
    if let Some(skill) = item.skill() {
        let _ = write!(text, "\n  teaches: {skill}");
    }
    if let Some(body) = item.text() {
        let _ = write!(text, "\n  \"{body}\"");
    }
    text
}

fn describe_location(location: &LocationPreset) -> String {
    let description = location.description();
    let mut text = format!(
        "{} ({}), drawn as '{}'",
        location.name(),
        location.kind().as_token(),
        description.symbol
    );
    if let Some(info) = &description.info {
        let _ = write!(text, "\n  {info}");
    }
    for spawner in location.spawners() {
        let _ = write!(
            text,
            "\n  spawns up to {} {} every {} turns",
            spawner.population, spawner.creature_id, spawner.delay
        );
    }
    for item in location.items() {
        let _ = write!(text, "\n  may hold {} ({:.0}%)", item.item_id, item.frequency * 100.0);
    }
    if !location.blocked_entrances().is_empty() {
        let blocked: Vec<&str> = location
            .blocked_entrances()
            .iter()
            .map(|direction| direction.as_token())
            .collect();
        let _ = write!(text, "\n  blocked from: {}", blocked.join(", "));
    }
    text
}
