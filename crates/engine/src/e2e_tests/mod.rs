//! Scenario tests.
//!
//! Each scenario drives several validators the way the game-state layer
//! does: feed telemetry, check the transition, complete, reward, audit.
//!
//! ```bash
//! cargo test -p questwalk-engine --lib e2e_tests
//! ```
