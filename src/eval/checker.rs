//! Correctness checking against expected outputs.

/// Compare realised outputs with the expected vector, position by position.
///
/// A length mismatch is never correct.
pub fn outputs_match(actual: &[bool], expected: &[bool]) -> bool {
    actual.len() == expected.len() && actual.iter().zip(expected).all(|(a, e)| a == e)
}

/// Positions where the realised output differs from the expected one.
///
/// Empty when the lengths differ; callers check [`outputs_match`] first.
pub fn mismatches(actual: &[bool], expected: &[bool]) -> Vec<usize> {
    if actual.len() != expected.len() {
        return Vec::new();
    }
    actual
        .iter()
        .zip(expected)
        .enumerate()
        .filter(|(_, (a, e))| a != e)
        .map(|(i, _)| i)
        .collect()
}
