use crate::error::Result;

/// A word dictionary. Everything is case-insensitive and limited to the letters a-z;
/// anything else is an [`Error::InvalidCharacter`](crate::error::Error::InvalidCharacter).
pub trait Index {
    fn add(&mut self, word: &str) -> Result<()>;

    /// Whether `word` was added (and not deleted since).
    fn contains(&self, word: &str) -> Result<bool>;

    /// Whether some stored word starts with `prefix`. The empty prefix
    /// matches as long as anything is stored.
    fn contains_prefix(&self, prefix: &str) -> Result<bool>;

    /// Removes `word`, returning whether it was there.
    fn delete(&mut self, word: &str) -> Result<bool>;

    /// `word` itself if stored, otherwise the alphabetically first word under
    /// the longest prefix of `word` that the dictionary knows.
    fn suggest(&self, word: &str) -> Result<Option<String>>;

    fn add_all<'a, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item=&'a str>, Self: Sized {
        items.into_iter().try_for_each(|x| self.add(x))
    }
}
