pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups: [Vec<CommandEntry>; 3] = [
        transaction::definitions(),
        report::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}
