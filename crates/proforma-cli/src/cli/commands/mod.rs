//! Shell command definitions and handlers.

pub mod report;
pub mod revenue;
pub mod system;
pub mod vacancy;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command in display order.
pub fn register_all(registry: &mut CommandRegistry) {
    for entry in revenue::definitions() {
        registry.register(entry);
    }
    for entry in vacancy::definitions() {
        registry.register(entry);
    }
    for entry in report::definitions() {
        registry.register(entry);
    }
    for entry in system::definitions() {
        registry.register(entry);
    }
}
