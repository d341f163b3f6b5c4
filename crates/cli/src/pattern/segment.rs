// SPDX-License-Identifier: MIT

//! Per-component compilation into a coarse prefilter and a precise matcher.
//!
//! The prefilter is a name pattern the directory-listing layer can apply
//! cheaply; its only metacharacters are `*` and `?`. Bracket expressions
//! cannot be expressed there, so each one contributes a `?` to the prefilter
//! (over-matching, never under-matching) and a translated character class to
//! an anchored regex that is applied to the prefilter's survivors.

use regex::Regex;

use crate::error::{Error, Result};

/// One compiled pattern component.
#[derive(Debug, Clone)]
pub struct CompiledSegment {
    /// Coarse name filter: literals plus `*` and `?` only.
    pub prefilter: String,
    /// Anchored regex, present only when the prefilter alone cannot decide.
    pub precise: Option<Regex>,
}

impl CompiledSegment {
    /// The match-everything segment.
    pub fn wildcard() -> Self {
        Self {
            prefilter: "*".to_string(),
            precise: None,
        }
    }

    /// Compile one component's text.
    ///
    /// `case_insensitive` is the effective casing already resolved against
    /// the platform; it is baked into the precise regex. The prefilter
    /// carries no casing of its own — the listing layer applies the same
    /// flag when matching names.
    pub fn compile(segment: &str, case_insensitive: bool) -> Result<Self> {
        match segment {
            "" | "*" => return Ok(Self::wildcard()),
            "?" => {
                return Ok(Self {
                    prefilter: "?".to_string(),
                    precise: None,
                });
            }
            // Current/parent directory tokens pass through untouched.
            "." | ".." => {
                return Ok(Self {
                    prefilter: segment.to_string(),
                    precise: None,
                });
            }
            _ => {}
        }

        let chars: Vec<char> = segment.chars().collect();
        let mut prefilter = String::with_capacity(segment.len());
        let mut precise = String::with_capacity(segment.len() * 2);
        let mut literal = String::new();
        let mut needs_precise = false;

        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '*' => {
                    flush_literal(&mut literal, &mut prefilter, &mut precise);
                    // A run of stars is one sequence wildcard.
                    while i < chars.len() && chars[i] == '*' {
                        i += 1;
                    }
                    prefilter.push('*');
                    precise.push_str(".*");
                }
                '?' => {
                    flush_literal(&mut literal, &mut prefilter, &mut precise);
                    prefilter.push('?');
                    precise.push('.');
                    i += 1;
                }
                '[' => {
                    flush_literal(&mut literal, &mut prefilter, &mut precise);
                    let (class, consumed) = parse_bracket(&chars[i + 1..], segment)?;
                    needs_precise = true;
                    prefilter.push('?');
                    precise.push_str(&class);
                    i += 1 + consumed;
                }
                c => {
                    literal.push(c);
                    i += 1;
                }
            }
        }
        flush_literal(&mut literal, &mut prefilter, &mut precise);

        let precise = if needs_precise {
            let anchored = if case_insensitive {
                format!("(?i)^{precise}$")
            } else {
                format!("^{precise}$")
            };
            Some(Regex::new(&anchored)?)
        } else {
            None
        };

        Ok(Self { prefilter, precise })
    }

    /// Apply the precise matcher to one name that already passed the
    /// prefilter. Segments without a precise matcher accept everything the
    /// prefilter let through.
    pub fn matches_name(&self, name: &str) -> bool {
        match &self.precise {
            Some(re) => re.is_match(name),
            None => true,
        }
    }
}

fn flush_literal(literal: &mut String, prefilter: &mut String, precise: &mut String) {
    if literal.is_empty() {
        return;
    }
    prefilter.push_str(literal);
    precise.push_str(&regex::escape(literal));
    literal.clear();
}

/// Parse a bracket expression. `rest` starts just after the `[`; returns the
/// translated regex class and the number of chars consumed, including the
/// closing `]`.
fn parse_bracket(rest: &[char], segment: &str) -> Result<(String, usize)> {
    let mut i = 0;
    let mut negated = false;
    if rest.first() == Some(&'!') {
        negated = true;
        i = 1;
    }

    let mut body = String::new();
    let mut first = true;
    loop {
        let Some(&c) = rest.get(i) else {
            return Err(Error::UnterminatedBracket(segment.to_string()));
        };

        // `]` terminates the set, except as the very first member.
        if c == ']' && !first {
            i += 1;
            break;
        }
        first = false;

        // POSIX named class: [:name:]
        if c == '[' && rest.get(i + 1) == Some(&':') {
            let mut j = i + 2;
            let mut name = String::new();
            loop {
                match rest.get(j) {
                    None => return Err(Error::UnterminatedBracket(segment.to_string())),
                    Some(&':') if rest.get(j + 1) == Some(&']') => break,
                    Some(&ch) => {
                        name.push(ch);
                        j += 1;
                    }
                }
            }
            let atom = named_class(&name).ok_or_else(|| Error::UnknownClass {
                segment: segment.to_string(),
                class: name,
            })?;
            body.push_str(atom);
            i = j + 2;
            continue;
        }

        // Range c-end, unless the `-` is the last member before `]`.
        if rest.get(i + 1) == Some(&'-') && rest.get(i + 2).is_some_and(|&e| e != ']') {
            let end = rest[i + 2];
            push_class_char(&mut body, c);
            body.push('-');
            push_class_char(&mut body, end);
            i += 3;
            continue;
        }

        push_class_char(&mut body, c);
        i += 1;
    }

    if body.is_empty() && !negated {
        return Err(Error::EmptyBracket(segment.to_string()));
    }

    let class = if negated {
        format!("[^{body}]")
    } else {
        format!("[{body}]")
    };
    Ok((class, i))
}

/// Append one member char, escaped for a regex character class.
fn push_class_char(body: &mut String, c: char) {
    if matches!(c, '\\' | ']' | '[' | '^' | '-' | '&') {
        body.push('\\');
    }
    body.push(c);
}

/// Unicode-aware expansions for POSIX named classes.
fn named_class(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => r"\p{L}",
        "digit" => r"\p{Nd}",
        "alnum" => r"\p{L}\p{Nd}",
        "upper" => r"\p{Lu}",
        "lower" => r"\p{Ll}",
        "space" => r"\s",
        "blank" => r"\t\p{Zs}",
        "punct" => r"\p{P}",
        "cntrl" => r"\p{Cc}",
        "xdigit" => "0-9A-Fa-f",
        "graph" => r"[^\s\p{Cc}]",
        "print" => r"[^\p{Cc}]",
        _ => return None,
    })
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
