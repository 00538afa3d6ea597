//! Name case formats

use serde::{Deserialize, Serialize};

/// Naming convention of parameter names
///
/// Conversion splits a name into words according to the source format and
/// joins them according to the target format, so `fooBar` in
/// [`LowerCamel`](CaseFormat::LowerCamel) becomes `foo_bar` in
/// [`LowerUnderscore`](CaseFormat::LowerUnderscore) and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFormat {
    /// `lowerCamel`
    LowerCamel,
    /// `UpperCamel`
    UpperCamel,
    /// `lower_underscore`
    LowerUnderscore,
    /// `UPPER_UNDERSCORE`
    UpperUnderscore,
    /// `lower-hyphen`
    LowerHyphen,
}

impl CaseFormat {
    /// Convert `name` from this format to `target`
    pub fn to(self, target: CaseFormat, name: &str) -> String {
        if self == target {
            return name.to_string();
        }
        target.join(&self.words(name))
    }

    fn words(self, name: &str) -> Vec<String> {
        match self {
            Self::LowerCamel | Self::UpperCamel => {
                let mut words = Vec::new();
                let mut current = String::new();
                for c in name.chars() {
                    if c.is_uppercase() && !current.is_empty() {
                        words.push(std::mem::take(&mut current));
                    }
                    current.push(c);
                }
                if !current.is_empty() || words.is_empty() {
                    words.push(current);
                }
                words
            }
            Self::LowerUnderscore | Self::UpperUnderscore => {
                name.split('_').map(str::to_string).collect()
            }
            Self::LowerHyphen => name.split('-').map(str::to_string).collect(),
        }
    }

    fn join(self, words: &[String]) -> String {
        match self {
            Self::LowerCamel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
                .collect(),
            Self::UpperCamel => words.iter().map(|w| capitalize(w)).collect(),
            Self::LowerUnderscore => lowercase(words).join("_"),
            Self::UpperUnderscore => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            Self::LowerHyphen => lowercase(words).join("-"),
        }
    }
}

fn lowercase(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
