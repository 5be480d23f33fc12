//! Run loop over the selected services
//!
//! One failing service never blocks scaffolding for the rest.

use crate::compose::{ComposeReport, Composer};
use crate::context::ProjectContext;
use bind_meta::{LanguageTarget, ServiceRegistry};
use tracing::warn;

/// Compose every selected service against the project context.
///
/// Errors are caught per service: the failure is logged, recorded as a
/// `Failed` report, and the loop moves on. There are no retries.
pub fn run_all(
    composer: &Composer,
    registry: &ServiceRegistry,
    services: &[String],
    language: LanguageTarget,
    ctx: &mut ProjectContext,
) -> Vec<ComposeReport> {
    let mut reports = Vec::with_capacity(services.len());
    for name in services {
        let descriptor = match registry.get(name) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!(service = %name, error = %e, "unknown service tag, continuing");
                reports.push(ComposeReport::failed(name, e.to_string()));
                continue;
            }
        };
        match composer.compose(descriptor, language, ctx) {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!(service = %name, error = %e, "composition failed, continuing");
                reports.push(ComposeReport::failed(name, e.to_string()));
            }
        }
    }
    reports
}
