//! Unit tests for `contour_yaml` document compilation.


mod behaviour;
