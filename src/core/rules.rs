// src/core/rules.rs

/// The two pure string transforms the resolution cascade relies on.
///
/// Both must be deterministic. A fallback norm only stays a fixed point on
/// a fresh engine for inputs where the transforms are idempotent; the
/// engine that produced it always answers it from memory.
pub trait TextRules {
    /// Cleans up an already-lowercased form: brackets, quotes, dashes,
    /// ligatures, inclusive-writing suffixes and repeated letters.
    fn canonicalize(&self, lowered: &str) -> String;

    /// Strips diacritics so that misspelled accents share one key.
    fn dediacritic(&self, form: &str) -> String;
}

/// Canonicalization rules for French text.
///
/// Repeated letters are collapsed after inclusive suffixes are folded, so
/// `canonicalize` is not idempotent when a collapse exposes a new suffix
/// (`a.eee` gives `a.e`, which then gives `a·e`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchRules;

/// Separator used for inclusive forms once canonicalized (`auteur·rices`).
const MIDDLE_DOT: char = '·';

/// An inclusive-writing suffix and what may follow it.
struct Suffix {
    text: &'static str,
    continuations: &'static [Suffix],
}

const PLURAL: Suffix = Suffix { text: "s", continuations: &[] };
const NON_BINARY: Suffix = Suffix { text: "x", continuations: &[PLURAL] };
const NUMBER: &[Suffix] = &[PLURAL, NON_BINARY];

// Order matters: the first suffix that matches is kept.
const FEMININE: &[Suffix] = &[
    Suffix { text: "e", continuations: NUMBER },
    Suffix { text: "te", continuations: NUMBER },
    Suffix { text: "euse", continuations: NUMBER },
    Suffix { text: "ese", continuations: NUMBER },
    Suffix { text: "ère", continuations: NUMBER },
    Suffix { text: "Ère", continuations: NUMBER },
    Suffix { text: "ice", continuations: NUMBER },
    Suffix { text: "rice", continuations: NUMBER },
    Suffix { text: "trice", continuations: NUMBER },
    Suffix { text: "ale", continuations: NUMBER },
    Suffix { text: "ne", continuations: NUMBER },
    Suffix { text: "ive", continuations: NUMBER },
    Suffix { text: "ve", continuations: NUMBER },
    Suffix { text: "esse", continuations: NUMBER },
    Suffix { text: "oresse", continuations: NUMBER },
    Suffix { text: "se", continuations: NUMBER },
    Suffix { text: "fe", continuations: NUMBER },
];

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == MIDDLE_DOT
}

/// Length of `suffix` (and any continuation) at the start of `s`, or `None`.
/// A separator that follows a complete suffix but leads nowhere is not
/// counted.
fn match_suffix(s: &[char], suffix: &Suffix, sep: char) -> Option<usize> {
    let len = suffix.text.chars().count();
    if s.len() < len || !s.iter().zip(suffix.text.chars()).all(|(&a, b)| a == b) {
        return None;
    }

    let (next, fallback) = match s.get(len) {
        None => return Some(len),
        Some(&c) if c == sep => (len + 1, Some(len)),
        Some(&c) if is_word_char(c) => (len, None),
        Some(_) => return Some(len),
    };

    suffix
        .continuations
        .iter()
        .find_map(|cont| match_suffix(&s[next..], cont, sep))
        .map(|matched| next + matched)
        .or(fallback)
}

/// Length of the inclusive suffix starting at the separator `s[0]`,
/// separator included.
fn inclusive_suffix_len(s: &[char]) -> Option<usize> {
    let (&sep, rest) = s.split_first()?;
    FEMININE
        .iter()
        .find_map(|suffix| match_suffix(rest, suffix, sep))
        .map(|matched| matched + 1)
}

/// Collapses every run of at least `min_run` identical characters to one.
fn collapse_runs(chars: &[char], min_run: usize) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        if run >= min_run {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(c).take(run));
        }
        i += run;
    }
    out
}

impl TextRules for FrenchRules {
    fn canonicalize(&self, lowered: &str) -> String {
        let chars: Vec<char> = lowered.chars().collect();
        let mut out: Vec<char> = Vec::with_capacity(chars.len() + 4);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match c {
                '(' | ')' | '[' | ']' | '{' | '}' => {}
                '‘' | '’' | '`' => out.push('\''),
                '«' | '»' | '“' | '”' => out.push('"'),
                '—' | '–' => out.push('-'),
                'œ' => out.extend(['o', 'e']),
                'æ' => out.extend(['a', 'e']),
                '-' | '.' | MIDDLE_DOT => {
                    if let Some(len) = inclusive_suffix_len(&chars[i..]) {
                        out.push(MIDDLE_DOT);
                        out.extend(
                            chars[i..i + len]
                                .iter()
                                .filter(|&&x| !matches!(x, '-' | '.' | MIDDLE_DOT | 'x')),
                        );
                        i += len;
                        continue;
                    }
                    out.push(c);
                }
                _ => out.push(c),
            }
            i += 1;
        }

        collapse_runs(&out, 3)
    }

    fn dediacritic(&self, form: &str) -> String {
        let chars: Vec<char> = form
            .chars()
            .map(|c| match c {
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'â' | 'à' | 'ä' => 'a',
                'î' | 'ï' => 'i',
                'ô' | 'ö' => 'o',
                'ù' | 'û' | 'ü' => 'u',
                other => other,
            })
            .collect();
        collapse_runs(&chars, 2)
    }
}
