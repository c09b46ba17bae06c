//! Core data structures for the hex automaton.

pub mod grid;
