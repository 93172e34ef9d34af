//! Parameter-key filtering with SQL-LIKE `%` patterns.

use crate::{model::Params, projection::ProjectionSpec};

///
/// ParamKeyFilter
///
/// Include/exclude patterns applied to every parameter map the projection
/// selected. Inert on maps whose containing field was not selected; a
/// selected map that filters down to nothing stays an empty map, never
/// unpopulated.
///

#[derive(Clone, Debug, Default)]
pub struct ParamKeyFilter {
    include: Option<String>,
    exclude: Option<String>,
}

impl ParamKeyFilter {
    #[must_use]
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include: include.map(ToString::to_string),
            exclude: exclude.map(ToString::to_string),
        }
    }

    #[must_use]
    pub fn from_spec(spec: &ProjectionSpec) -> Self {
        Self::new(
            spec.include_param_key_pattern.as_deref(),
            spec.exclude_param_key_pattern.as_deref(),
        )
    }

    /// Keep include-matched keys, then drop exclude-matched ones. An absent
    /// include keeps everything; an absent exclude drops nothing.
    #[must_use]
    pub fn apply(&self, params: &Params) -> Params {
        params
            .iter()
            .filter(|(key, _)| {
                self.include
                    .as_deref()
                    .is_none_or(|pattern| like_match(pattern, key))
            })
            .filter(|(key, _)| {
                !self
                    .exclude
                    .as_deref()
                    .is_some_and(|pattern| like_match(pattern, key))
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Match `input` against a `%`-wildcard pattern. `%` matches any run of
/// characters including the empty one; everything else is a literal,
/// case-sensitive byte match.
#[must_use]
pub fn like_match(pattern: &str, input: &str) -> bool {
    let p = pattern.as_bytes();
    let s = input.as_bytes();

    let mut pi = 0;
    let mut si = 0;
    // Last `%` seen, and where its match attempt in `s` currently ends.
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while si < s.len() {
        if pi < p.len() {
            match p[pi] {
                b'%' => {
                    star = Some(pi);
                    mark = si;
                    pi += 1;
                    continue;
                }
                c if c == s[si] => {
                    pi += 1;
                    si += 1;
                    continue;
                }
                _ => {}
            }
        }
        match star {
            // Widen the most recent `%` by one character and retry.
            Some(star_pi) => {
                pi = star_pi + 1;
                mark += 1;
                si = mark;
            }
            None => return false,
        }
    }

    while pi < p.len() && p[pi] == b'%' {
        pi += 1;
    }
    pi == p.len()
}
