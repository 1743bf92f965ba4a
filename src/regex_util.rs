// Copyright (C) 2025 The holyland-phone Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use regex::Regex;

/// Eq of C fullMatch: the whole input has to be consumed by the pattern.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.find(s)
            .is_some_and(| matched | matched.start() == 0 && matched.end() == s.len())
    }
}

/// Compiles `pattern` anchored at both ends, so that alternations can't
/// settle for a shorter leftmost match.
pub fn compile_full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&fast_cat::concat_str!("^(?:", pattern, ")$"))
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{compile_full_match, RegexFullMatch};

    #[test]
    fn full_match_requires_whole_input() {
        let regex = Regex::new(r"\d{3}").unwrap();
        assert!(regex.full_match("123"));
        assert!(!regex.full_match("1234"));
        assert!(!regex.full_match("a123"));
    }

    #[test]
    fn anchored_alternation_prefers_whole_input() {
        let regex = compile_full_match(r"\d{2}|\d{4}").unwrap();
        assert!(regex.full_match("12"));
        assert!(regex.full_match("1234"));
        assert!(!regex.full_match("123"));
    }
}
