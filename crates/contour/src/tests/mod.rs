//! Unit tests for the `contour` facade.

mod support;

mod dispatch_tests;
