//! Property-based test generators using proptest.
//!
//! Positions produced here are allowed to fall past the end of the buffer,
//! so operation sequences exercise the rejection paths too.

use crate::model::BufferOp;
use proptest::prelude::*;
use strbuf_core::GrowthPolicy;

/// Upper bound on positions and lengths drawn by the strategies.
const MAX_POSITION: usize = 64;

/// Strategy for arbitrary buffer content, interior NULs included.
pub fn content_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}

/// Strategy for content that is a valid C string body (no NUL bytes).
pub fn c_string_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 0..128)
}

/// Strategy for printable ASCII lines, without line terminators.
pub fn line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,40}").expect("Invalid regex")
}

/// Strategy for growth policies, including factors below the minimum.
pub fn growth_policy_strategy() -> impl Strategy<Value = GrowthPolicy> {
    (0usize..64, 0usize..5)
        .prop_map(|(min, factor)| GrowthPolicy::new().min_capacity(min).factor(factor))
}

/// Strategy for a single buffer operation.
pub fn buffer_op_strategy() -> impl Strategy<Value = BufferOp> {
    let position = 0..MAX_POSITION;
    let small = || prop::collection::vec(any::<u8>(), 0..16);
    prop_oneof![
        6 => any::<u8>().prop_map(BufferOp::Push),
        2 => Just(BufferOp::Pop),
        2 => small().prop_map(BufferOp::Append),
        3 => (position.clone(), any::<u8>()).prop_map(|(p, b)| BufferOp::Insert(p, b)),
        2 => (position.clone(), small()).prop_map(|(p, b)| BufferOp::InsertBytes(p, b)),
        2 => position.clone().prop_map(BufferOp::Erase),
        2 => (position.clone(), position.clone()).prop_map(|(a, b)| BufferOp::EraseRange(a, b)),
        1 => position.clone().prop_map(BufferOp::Resize),
        1 => (0..256usize).prop_map(BufferOp::Reserve),
        1 => small().prop_map(BufferOp::Assign),
        1 => Just(BufferOp::Clear),
        1 => Just(BufferOp::ShrinkToFit),
        1 => Just(BufferOp::TakeAndRestore),
        1 => Just(BufferOp::ReplaceWithCopy),
        1 => Just(BufferOp::SwapTwice),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<BufferOp>> {
    prop::collection::vec(buffer_op_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::run_ops;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn c_strings_have_no_nul(data in c_string_strategy()) {
            prop_assert!(!data.contains(&0));
        }

        #[test]
        fn lines_are_printable(line in line_strategy()) {
            prop_assert!(line.bytes().all(|b| (b' '..=b'~').contains(&b)));
        }

        #[test]
        fn policies_never_shrink(policy in growth_policy_strategy(), cur in 0usize..512, req in 0usize..512) {
            let next = policy.next_capacity(cur, req);
            prop_assert!(next >= req);
        }

        #[test]
        fn generated_sequences_match_model(ops in operation_sequence_strategy(0, 64)) {
            let result = run_ops(&ops);
            prop_assert!(result.is_ok(), "{}", result.unwrap_err());
        }
    }
}
