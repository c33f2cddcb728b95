/*
 * Neural Field
 *
 * A drifting field of neon particles that shy away from the pointer and
 * link up with faint lines when they come close. Runs full-window as an
 * animated backdrop.
 *
 * Usage: neural-field [config.json]
 * Keys: H controls, D debug overlay, Space pause drift
 * Logging: RUST_LOG=neural_field=debug
 */

use neural_field::app::{exit, model, update};

fn main() {
    env_logger::init();

    nannou::app(model)
        .update(update)
        .exit(exit)
        .run();
}
