/*! Integration tests for dotted.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - path: Tests for the dot-notation path engine (flattening, access, mutation)
 * - filter: Tests for key/value projection, plucking, renaming and ordering
 * - sort: Tests for column sorts
 * - members: Tests for value membership and keyed de-duplication
 * - query: Tests for query string encoding
 * - random: Tests for random sampling
 * - value: Tests for the Value model (equality, serde, conversions)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotted=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod sort;
