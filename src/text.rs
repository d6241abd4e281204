//! Text transforms: transliteration, permalinks, snippets and tag removal.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Latin replacements for accented and special characters.
///
/// Entries are checked in order; a character listed under several
/// replacements takes the first one.
pub const LATIN_MAP: &[(&str, &[char])] = &[
    ("A", &['À', 'Á', 'Â', 'Ã', 'Å', 'Ą', 'Ā']),
    (
        "a",
        &[
            'à', 'á', 'â', 'ã', 'å', 'ą', 'ả', 'ạ', 'ă', 'ắ', 'ằ', 'ẳ', 'ẵ', 'ặ', 'ấ', 'ầ', 'ẩ',
            'ẫ', 'ậ', 'ā',
        ],
    ),
    ("AE", &['Ä', 'Æ', 'Ǽ']),
    ("ae", &['ä', 'æ', 'ǽ']),
    ("C", &['Ç', 'Č', 'Ć', 'Ĉ']),
    ("c", &['ç', 'č', 'ć', 'ĉ']),
    ("D", &['Ð']),
    ("d", &['đ']),
    ("E", &['È', 'É', 'Ê', 'Ẽ', 'Ę', 'Ė', 'Ē', 'Ë']),
    (
        "e",
        &['è', 'é', 'ę', 'ë', 'ė', 'ẻ', 'ẽ', 'ẹ', 'ê', 'ế', 'ề', 'ể', 'ễ', 'ệ', 'ē'],
    ),
    ("G", &['Ģ']),
    ("g", &['ģ']),
    ("I", &['Ì', 'Í', 'Î', 'Ï', 'Ĩ', 'Į', 'Ī']),
    ("i", &['ì', 'í', 'î', 'ï', 'ĩ', 'į', 'ỉ', 'ị', 'ī']),
    ("K", &['Ķ']),
    ("k", &['ķ']),
    ("L", &['Ļ']),
    ("l", &['ļ']),
    ("N", &['Ñ', 'Ń', 'Ņ']),
    ("n", &['ñ', 'ń', 'ņ']),
    ("O", &['Ò', 'Ó', 'Ô', 'Õ', 'Ø']),
    (
        "o",
        &[
            'ò', 'ó', 'õ', 'ỏ', 'ọ', 'ô', 'ố', 'ồ', 'ổ', 'ỗ', 'ộ', 'ơ', 'ớ', 'ờ', 'ở', 'ỡ', 'ợ',
            'ø',
        ],
    ),
    ("OE", &['Ö', 'Œ']),
    ("oe", &['ö', 'œ']),
    ("R", &['Ŗ']),
    ("r", &['ŗ']),
    ("S", &['Š']),
    ("s", &['š']),
    ("ss", &['ß']),
    ("U", &['Ù', 'Ú', 'Ũ', 'Ű', 'Ů', 'Ų', 'Ū', 'Û']),
    (
        "u",
        &['ų', 'ū', 'û', 'ú', 'ù', 'ű', 'ů', 'ủ', 'ũ', 'ụ', 'ư', 'ứ', 'ừ', 'ử', 'ữ', 'ự'],
    ),
    ("UE", &['Ü']),
    ("ue", &['ü']),
    ("x", &['×']),
    ("Y", &['Ý', 'Ÿ', 'Ŷ']),
    ("y", &['ý', 'ÿ', 'ŷ', 'ỳ', 'ỷ', 'ỹ', 'ỵ']),
    ("Z", &['Ž']),
    ("z", &['ž']),
];

static LATIN_LOOKUP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut lookup = HashMap::new();
    for (replacement, chars) in LATIN_MAP {
        for &c in *chars {
            lookup.entry(c).or_insert(*replacement);
        }
    }
    lookup
});

static NON_LATIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)[^a-z0-9.,|?!:;"'=+\-_]+"#).expect("non-latin regex should compile")
});

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("space regex should compile"));

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("dash regex should compile"));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex should compile"));

/// Replaces accented characters with latin ones and everything else outside
/// the latin alphabet, digits and `.,|?!:;"'=+-_` with a single space.
///
/// ```rust
/// use seqmerge::text::latinize;
///
/// assert_eq!(latinize("Hola señor, ¿cómo está?"), "Hola senor, como esta?");
/// ```
#[must_use]
pub fn latinize(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars() {
        match LATIN_LOOKUP.get(&c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }
    let spaced = NON_LATIN.replace_all(&folded, " ");
    SPACES.replace_all(&spaced, " ").into_owned()
}

/// Turns `s` into a lowercase, dash separated slug.
///
/// ```rust
/// use seqmerge::text::permalink;
///
/// assert_eq!(permalink("Hola señor, ¿cómo está?"), "hola-senor-como-esta");
/// ```
#[must_use]
pub fn permalink(s: &str) -> String {
    let lower = latinize(s).to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Shortens `s` to about `length` characters without cutting words.
///
/// Whitespace around `s` is ignored. A word that straddles the cut is kept
/// whole, and `…` marks that text was left out.
///
/// ```rust
/// use seqmerge::text::snip;
///
/// assert_eq!(snip("O Brother, Where Art Thou?", 13), "O Brother, Where…");
/// assert_eq!(snip("O Brother, Where Art Thou?", 100), "O Brother, Where Art Thou?");
/// ```
#[must_use]
pub fn snip(s: &str, length: usize) -> String {
    let text = s.trim();
    let Some((cut, _)) = text.char_indices().nth(length) else {
        return text.to_string();
    };
    let rest = &text[cut..];
    let word = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    if word == rest.len() {
        return text.to_string();
    }
    format!("{}…", text[..cut + word].trim_end())
}

/// Removes everything that looks like a markup tag.
///
/// ```rust
/// use seqmerge::text::strip_tags;
///
/// assert_eq!(strip_tags("<p>Think<br />different</p>"), "Thinkdifferent");
/// ```
#[must_use]
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

/// Removes tags from `s` in place.
pub fn strip_tags_in_place(s: &mut String) {
    if TAG.is_match(s) {
        *s = strip_tags(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("ÀÁÂÃÄÅ Ç Ð ÈÉÊË ÌÍÎÏ Ñ ÒÓÔÕÖØ ÙÚÛÜ Ý", "AAAAAEA C D EEEE IIII N OOOOOEO UUUUE Y" ; "uppercase diacritics")]
    #[test_case("àáâãäå ç èéêë ìíîï ñ òóôõöø ùúûü ý", "aaaaaea c eeee iiii n oooooeo uuuue y" ; "lowercase diacritics")]
    #[test_case("ÆǼ æǽ Œ œ", "AEAE aeae OE oe" ; "ligatures")]
    #[test_case(".,|?!:;\"'=+-_", ".,|?!:;\"'=+-_" ; "kept punctuation")]
    #[test_case("~÷≥≤˛`ˀð", " " ; "exotic chars")]
    #[test_case("Hola señor, ¿cómo está?", "Hola senor, como esta?" ; "normalized whitespace")]
    fn test_latinize(input: &str, expected: &str) {
        assert_eq!(latinize(input), expected);
    }

    #[test]
    fn test_latin_map_first_entry_wins() {
        assert_eq!(LATIN_LOOKUP.get(&'Ũ'), Some(&"U"));
        assert_eq!(LATIN_LOOKUP.get(&'ß'), Some(&"ss"));
    }

    #[test_case("HeLlo", "hello" ; "lowercase")]
    #[test_case("hey joe", "hey-joe" ; "whitespace")]
    #[test_case("hi~there", "hi-there" ; "special chars")]
    #[test_case(">duh", "duh" ; "no leading dash")]
    #[test_case("hi!", "hi" ; "no trailing dash")]
    #[test_case("Hola señor, ¿cómo está?", "hola-senor-como-esta" ; "adjacent specials")]
    fn test_permalink(input: &str, expected: &str) {
        assert_eq!(permalink(input), expected);
    }

    #[test_case("O Brother, Where Art Thou?", 13, "O Brother, Where…" ; "preserves words")]
    #[test_case("O Brother, Where Art Thou?", 100, "O Brother, Where Art Thou?" ; "fits")]
    #[test_case("O Brother, Where Art Thou?", 26, "O Brother, Where Art Thou?" ; "exact length")]
    #[test_case("O Brother,       Where Art Thou?", 11, "O Brother,…" ; "inner whitespace")]
    #[test_case("O Brother, Where Art Thou? ", 26, "O Brother, Where Art Thou?" ; "trailing whitespace")]
    #[test_case(" O Brother, Where Art Thou?", 26, "O Brother, Where Art Thou?" ; "leading whitespace")]
    #[test_case("O Brother (Or Sister), Where Art Thou?", 20, "O Brother (Or Sister…" ; "brackets")]
    #[test_case("Wonderful", 3, "Wonderful" ; "word reaches end")]
    fn test_snip(input: &str, length: usize, expected: &str) {
        assert_eq!(snip(input, length), expected);
    }

    #[test]
    fn test_strip_tags_lookalikes() {
        assert_eq!(strip_tags("small < large > small"), "small  small");
    }

    #[test]
    fn test_strip_tags_in_place() {
        let mut s = String::from("<p>Think<br />different</p>");
        strip_tags_in_place(&mut s);
        assert_eq!(s, "Thinkdifferent");
    }
}
