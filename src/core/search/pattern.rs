//! Safe compilation of user-supplied search patterns

use regex::RegexBuilder;

use crate::core::error::PatternError;

/// A successfully compiled search pattern, tagged with its mode
///
/// The wrapped matcher is stateless: matching and highlighting may scan any
/// number of fields and records with the same instance, in any order, without
/// resetting anything between scans.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: regex::Regex,
    case_sensitive: bool,
}

impl CompiledPattern {
    /// The underlying matcher
    pub fn regex(&self) -> &regex::Regex {
        &self.regex
    }

    /// Whether this pattern was compiled case-sensitively
    ///
    /// Text highlighted under one mode must not be mixed with a pattern
    /// compiled under the other; callers pair this flag with their display
    /// state to avoid that.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Test whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Compile a raw search pattern into a reusable matcher
///
/// Three outcomes, all returned as data:
///
/// - `Ok(None)`: empty or whitespace-only input; no filter is active
/// - `Ok(Some(compiled))`: a usable pattern
/// - `Err(PatternError)`: the pattern is syntactically invalid; the failure
///   is caught here and never propagates as a panic
pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Option<CompiledPattern>, PatternError> {
    if pattern.trim().is_empty() {
        return Ok(None);
    }

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| PatternError::new(pattern, &e))?;

    Ok(Some(CompiledPattern {
        regex,
        case_sensitive,
    }))
}
