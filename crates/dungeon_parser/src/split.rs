//! Splitting token lists on a separator word.

/// The tokens before and after the first occurrence of a separator.
#[derive(Debug, PartialEq, Eq)]
pub struct Split<'a, S> {
    before: &'a [S],
    after: &'a [S],
    separator_found: bool,
}

impl<'a, S: AsRef<str>> Split<'a, S> {
    /// Splits `tokens` on the first token equal to `separator`, ignoring case.
    ///
    /// Without a separator every token is in [`Split::before`].
    #[must_use]
    pub fn split_on(tokens: &'a [S], separator: &str) -> Self {
        match tokens
            .iter()
            .position(|token| token.as_ref().eq_ignore_ascii_case(separator))
        {
            Some(index) => Self {
                before: &tokens[..index],
                after: &tokens[index + 1..],
                separator_found: true,
            },
            None => Self {
                before: tokens,
                after: &[],
                separator_found: false,
            },
        }
    }

    /// Splits `tokens` on `on`, as in `cast fireball on goblin`.
    #[must_use]
    pub fn split_on_on(tokens: &'a [S]) -> Self {
        Self::split_on(tokens, "on")
    }
}

impl<'a, S> Split<'a, S> {
    /// Tokens before the separator.
    #[must_use]
    pub fn before(&self) -> &'a [S] {
        self.before
    }

    /// Tokens after the separator.
    #[must_use]
    pub fn after(&self) -> &'a [S] {
        self.after
    }

    /// Returns true if the separator was present.
    #[must_use]
    pub fn separator_found(&self) -> bool {
        self.separator_found
    }
}

impl<S> Clone for Split<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Split<'_, S> {}
