use admin_logging::admin_info;
use qrcodes_core::Route;

/// Capability to move the host shell to another page.
pub trait Navigator {
    fn navigate(&mut self, target: &Route);
}

/// Reports navigation on the terminal; the creation and edit pages live
/// outside this binary.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, target: &Route) {
        admin_info!("Navigating to {}", target);
        println!("→ navigate to {target}");
    }
}
