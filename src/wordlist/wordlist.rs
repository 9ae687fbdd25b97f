use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{info, warn};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// A dictionary loaded from a word list.
#[derive(Default, Debug)]
pub struct Wordlist {
    trie: Trie,
}

/// How to pull words out of a word-list file. The default is one word per line.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Column separator, for lists that carry more than the word on each line.
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    /// Log and count bad lines instead of stopping at the first one.
    #[builder(default)]
    skip_invalid: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line.trim()),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column)
                .map(str::trim)
                .ok_or(Error::MissingColumn { line: line_no, column: self.word_column }),
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let mut wordlist = Wordlist::new();
        wordlist.load_file(path, format)?;
        Ok(wordlist)
    }

    /// Adds every word in the file, returning how many lines were added.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<usize> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), format)
    }

    /// Adds one word per line. Blank lines are skipped. Unless the format says
    /// to skip invalid lines, the first bad line stops the load; everything
    /// before it stays added.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<usize> {
        let start = Instant::now();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // An empty column is a blank record too.
            let word = match format.parse_line(&line, line_no) {
                Ok(word) if word.is_empty() => continue,
                parsed => parsed,
            };
            let added = word
                .and_then(|word| self.trie.add(word).map_err(|e| Error::MalformedLine {
                    line: line_no,
                    reason: e.to_string(),
                }));
            match added {
                Ok(()) => count += 1,
                Err(e) if format.skip_invalid => {
                    warn!("Skipping {}", e);
                    failures += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let elapsed = start.elapsed();
        info!("Read {} words in {:.3}s [{} failures], {} distinct words stored",
              count, elapsed.as_secs_f64(), failures, self.trie.len());
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn words(&self) -> Vec<String> {
        self.trie.words()
    }
}

impl Index for Wordlist {
    delegate! {
        to self.trie {
            fn add(&mut self, word: &str) -> Result<()>;
            fn contains(&self, word: &str) -> Result<bool>;
            fn contains_prefix(&self, prefix: &str) -> Result<bool>;
            fn delete(&mut self, word: &str) -> Result<bool>;
            fn suggest(&self, word: &str) -> Result<Option<String>>;
        }
    }
}

impl Display for Wordlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.trie, f)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::error::Error;
    use crate::wordlist::index::Index;
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    #[test]
    fn loads_one_word_per_line() {
        let mut wl = Wordlist::new();
        let count = wl.load_reader(Cursor::new("Time\n\n  year \r\nPEOPLE\ntime\n"),
                                   &FileFormat::default()).unwrap();
        assert_eq!(count, 4);
        assert_eq!(wl.len(), 3);
        assert_eq!(wl.words(), vec!["people", "time", "year"]);
    }

    #[test]
    fn loads_a_column() {
        let format = FileFormat::builder().delimiter(Some(',')).word_column(1).build();
        let mut wl = Wordlist::new();
        wl.load_reader(Cursor::new("1,apple,9\n2, Pear ,4\n"), &format).unwrap();
        assert!(wl.contains("apple").unwrap());
        assert!(wl.contains("pear").unwrap());
        assert!(wl.contains("1").is_err());
    }

    #[test]
    fn skips_empty_columns() {
        let format = FileFormat::builder().delimiter(Some(',')).word_column(1).build();
        let mut wl = Wordlist::new();
        assert_eq!(wl.load_reader(Cursor::new("1,ale,9\n2,,4\n3, ,2\n4,cat,1\n"), &format).unwrap(), 2);
        assert_eq!(wl.len(), 2);
        assert_eq!(wl.words(), vec!["ale", "cat"]);
        assert!(!wl.contains("").unwrap());
        assert_eq!(wl.suggest("xyz").unwrap().as_deref(), Some("ale"));
    }

    #[test]
    fn stops_at_first_bad_line_keeping_earlier_words() {
        let mut wl = Wordlist::new();
        let err = wl.load_reader(Cursor::new("cat\ndog\nit's\nzebra\n"), &FileFormat::default())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 3, .. }), "{:?}", err);
        assert!(wl.contains("cat").unwrap());
        assert!(wl.contains("dog").unwrap());
        assert!(!wl.contains("zebra").unwrap());
    }

    #[test]
    fn missing_column_is_reported_with_its_line() {
        let format = FileFormat::builder().delimiter(Some('\t')).word_column(2).build();
        let mut wl = Wordlist::new();
        let err = wl.load_reader(Cursor::new("a\tb\tcat\nx\ty\n"), &format).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { line: 2, column: 2 }), "{:?}", err);
        assert_eq!(wl.len(), 1);
    }

    #[test]
    fn skips_bad_lines_when_asked() {
        let format = FileFormat::builder().skip_invalid(true).build();
        let mut wl = Wordlist::new();
        let count = wl.load_reader(Cursor::new("cat\nit's\n42\nzebra\n"), &format).unwrap();
        assert_eq!(count, 2);
        assert_eq!(wl.words(), vec!["cat", "zebra"]);
    }

    #[test]
    fn delegates_to_the_trie() {
        let mut wl = Wordlist::new();
        wl.add_all(["cat", "cats", "cater"]).unwrap();
        assert!(wl.contains_prefix("cate").unwrap());
        assert!(wl.delete("cater").unwrap());
        assert!(!wl.contains_prefix("cate").unwrap());
        assert_eq!(wl.suggest("catz").unwrap().as_deref(), Some("cat"));
        assert_eq!(wl.to_string(), "c\n a\n  t*\n   s*\n");
    }
}
