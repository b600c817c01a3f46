//! Condition parsing cache

use crate::condition::ast::AstNode;
use crate::condition::parser;
use crate::error::Result;
use crate::stats::PlayerState;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Global condition cache with fast hashing (ahash)
static CONDITION_CACHE: Lazy<RwLock<AHashMap<String, AstNode>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(64);
    RwLock::new(map)
});

/// Get or parse a condition string, using cache for repeated conditions
#[inline]
pub fn get_or_parse(condition: &str) -> Result<AstNode> {
    // Fast path: check read lock first
    {
        let cache = CONDITION_CACHE.read();
        if let Some(ast) = cache.get(condition) {
            return Ok(ast.clone());
        }
    }

    let ast = parser::parse(condition)?;

    {
        let mut cache = CONDITION_CACHE.write();
        cache.insert(condition.to_string(), ast.clone());
    }

    Ok(ast)
}

/// Check a condition against a PlayerState, using cached AST.
/// An empty condition always holds.
#[inline]
pub fn check_condition(condition: &str, state: &PlayerState) -> Result<bool> {
    if condition.trim().is_empty() {
        return Ok(true);
    }

    let ast = get_or_parse(condition)?;
    Ok(crate::condition::evaluator::check(&ast, state))
}

/// Clear the condition cache
pub fn clear_cache() {
    let mut cache = CONDITION_CACHE.write();
    cache.clear();
}

/// Whether a condition string is already cached
pub fn is_cached(condition: &str) -> bool {
    let cache = CONDITION_CACHE.read();
    cache.contains_key(condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit() {
        let state = PlayerState::new(16, 1000, 70, 90, 20);
        let condition = "MNY>999 & AGE=16";

        let first = check_condition(condition, &state).unwrap();
        assert!(first);
        assert!(is_cached(condition));

        let second = check_condition(condition, &state).unwrap();
        assert!(second);
    }

    #[test]
    fn test_cached_ast_matches_fresh_parse() {
        let condition = "OPT?[tutor] | FIQ>=80";
        let cached = get_or_parse(condition).unwrap();
        assert_eq!(cached, parser::parse(condition).unwrap());
        assert_eq!(get_or_parse(condition).unwrap(), cached);
    }

    #[test]
    fn test_empty_condition() {
        let state = PlayerState::new(16, 1000, 70, 90, 20);
        assert!(check_condition("", &state).unwrap());
        assert!(check_condition("   ", &state).unwrap());
    }

    #[test]
    fn test_invalid_condition_is_not_cached() {
        assert!(get_or_parse("MNY").is_err());
        assert!(!is_cached("MNY"));
    }
}
