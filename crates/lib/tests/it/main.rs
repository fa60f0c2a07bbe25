/*! Integration tests for flatkv.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - node: Tests for the Node value type and its JSON interchange
 * - codec: Tests for the flatten/unflatten codec and value encoding
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("flatkv=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod codec;
