//! Unit tests for `contour_core` types.

mod diagnostic_tests;

mod behaviour;
