/// A generic LIFO stack container.
///
/// This module provides the `Stack` type used by the evaluator for its two
/// working stacks. The container is deliberately minimal: push, peek, pop,
/// and an emptiness check, with `Option` returns instead of panicking
/// preconditions.
pub mod stack;
