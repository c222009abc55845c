//! Fuzzy matching of player tokens against named candidates.
//!
//! A candidate matches completely when every token is a prefix of a
//! distinct word of its singular name, or of one of its aliases. Among
//! complete matches, candidates whose matching name has the highest share
//! of matched words win: `fire` prefers `Fire` over `Fire Wall`.

use std::cmp::Ordering;
use std::collections::HashSet;

use dungeon_foundation::Selectable;

/// Candidates that matched a token list equally well, in pool order.
#[derive(Debug)]
pub struct Matches<'a, T> {
    matches: Vec<&'a T>,
}

impl<'a, T> Matches<'a, T> {
    /// Creates an empty result.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the match at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.matches.get(index).copied()
    }

    /// Iterates over the matches in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.matches.iter().copied()
    }
}

impl<'a, T: Selectable> Matches<'a, T> {
    /// Number of distinct singular names among the matches.
    #[must_use]
    pub fn different_names(&self) -> usize {
        self.matches
            .iter()
            .map(|candidate| candidate.name().singular())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Classifies the result as no match, a unique match or ambiguous.
    ///
    /// Matches sharing one name count as unique; the first is chosen.
    #[must_use]
    pub fn classify(&self) -> MatchOutcome<'a, T> {
        match (self.matches.first().copied(), self.different_names()) {
            (None, _) => MatchOutcome::None,
            (Some(first), 1) => MatchOutcome::Unique(first),
            _ => MatchOutcome::Ambiguous(self.matches.clone()),
        }
    }
}

impl<T> Clone for Matches<'_, T> {
    fn clone(&self) -> Self {
        Self {
            matches: self.matches.clone(),
        }
    }
}

/// The outcome of matching player input.
#[derive(Debug)]
pub enum MatchOutcome<'a, T> {
    /// Nothing matched.
    None,
    /// One name matched.
    Unique(&'a T),
    /// Several names matched equally well.
    Ambiguous(Vec<&'a T>),
}

impl<T> MatchOutcome<'_, T> {
    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if exactly one name matched.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }

    /// Returns true if several names matched.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }
}

/// Share of a name's words matched by the tokens.
#[derive(Clone, Copy, Debug)]
struct Score {
    matched: usize,
    words: usize,
}

impl Score {
    fn compare(self, other: Self) -> Ordering {
        // matched / words compared without division.
        (self.matched * other.words).cmp(&(other.matched * self.words))
    }
}

/// Finds the candidates that best match `tokens`.
///
/// Every token, compared case-insensitively, must be a prefix of a
/// distinct word of the candidate's singular name or of one alias. An empty
/// token list matches nothing.
///
/// # Example
///
/// ```
/// use dungeon_foundation::{Name, Selectable};
/// use dungeon_parser::find_best_complete_matches;
///
/// struct Spell(Name);
///
/// impl Selectable for Spell {
///     fn name(&self) -> &Name {
///         &self.0
///     }
/// }
///
/// let spells = [Spell(Name::new("Fireball")), Spell(Name::new("Firewall"))];
/// assert!(find_best_complete_matches(&spells, &["fire"]).classify().is_ambiguous());
/// assert!(find_best_complete_matches(&spells, &["fireb"]).classify().is_unique());
/// assert!(find_best_complete_matches(&spells, &["zzz"]).classify().is_none());
/// ```
pub fn find_best_complete_matches<'a, T, I, S>(candidates: I, tokens: &[S]) -> Matches<'a, T>
where
    T: Selectable + 'a,
    I: IntoIterator<Item = &'a T>,
    S: AsRef<str>,
{
    if tokens.is_empty() {
        return Matches::empty();
    }
    let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let mut best: Option<Score> = None;
    let mut matches = Vec::new();
    for candidate in candidates {
        let Some(score) = candidate_score(candidate, &tokens) else {
            continue;
        };
        match best.map(|current| score.compare(current)) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => matches.push(candidate),
            None | Some(Ordering::Greater) => {
                best = Some(score);
                matches.clear();
                matches.push(candidate);
            }
        }
    }
    Matches { matches }
}

/// Best score among the candidate's name and aliases, if any matches.
fn candidate_score<T: Selectable>(candidate: &T, tokens: &[String]) -> Option<Score> {
    std::iter::once(candidate.name().singular())
        .chain(candidate.aliases().iter().map(String::as_str))
        .filter_map(|name| name_score(name, tokens))
        .max_by(|a, b| a.compare(*b))
}

fn name_score(name: &str, tokens: &[String]) -> Option<Score> {
    let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
    if tokens.len() > words.len() || !assign_words(tokens, &words) {
        return None;
    }
    Some(Score {
        matched: tokens.len(),
        words: words.len(),
    })
}

/// Returns true if every token can be given its own word that it prefixes.
///
/// Augmenting-path matching, so the answer does not depend on token order.
fn assign_words(tokens: &[String], words: &[String]) -> bool {
    let mut owners: Vec<Option<usize>> = vec![None; words.len()];
    (0..tokens.len()).all(|token| {
        let mut visited = vec![false; words.len()];
        augment(token, tokens, words, &mut owners, &mut visited)
    })
}

fn augment(
    token: usize,
    tokens: &[String],
    words: &[String],
    owners: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for (slot, word) in words.iter().enumerate() {
        if visited[slot] || !word.starts_with(tokens[token].as_str()) {
            continue;
        }
        visited[slot] = true;
        let owner = owners[slot];
        let free = match owner {
            None => true,
            Some(owner) => augment(owner, tokens, words, owners, visited),
        };
        if free {
            owners[slot] = Some(token);
            return true;
        }
    }
    false
}
