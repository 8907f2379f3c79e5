pub mod category;
pub mod config;
pub mod system;
pub mod transaction;
pub mod view;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        transaction::definitions(),
        category::definitions(),
        config::definitions(),
        view::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}
