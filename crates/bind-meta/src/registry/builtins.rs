//! Built-in service descriptors
//!
//! Single source of truth for the services the scaffolder knows how to
//! enable. Service filters, lookup, and composition all derive from this
//! table.

use crate::{InstrumentationFile, LanguageTarget, ServiceDescriptor};

/// Number of built-in services.
pub const BUILTIN_COUNT: usize = 11;

/// Returns descriptors for all built-in services.
pub fn builtin_descriptors() -> Vec<ServiceDescriptor> {
    vec![
        service(
            "cloudant",
            "cloudant",
            &["cloudant[0].username", "cloudant[0].password", "cloudant[0].url"],
        ),
        service(
            "object-storage",
            "Object-Storage",
            &[
                "Object-Storage[0].projectId",
                "Object-Storage[0].userId",
                "Object-Storage[0].password",
                "Object-Storage[0].region",
                "Object-Storage[0].auth_url",
            ],
        ),
        service(
            "cloud-object-storage",
            "cloud-object-storage",
            &[
                "cloud-object-storage[0].apikey",
                "cloud-object-storage[0].endpoints",
                "cloud-object-storage[0].resource_instance_id",
            ],
        ),
        service(
            "appid",
            "AppID",
            &[
                "AppID[0].clientId",
                "AppID[0].secret",
                "AppID[0].tenantId",
                "AppID[0].oauthServerUrl",
            ],
        ),
        service("mongodb", "compose-for-mongodb", &["compose-for-mongodb[0].uri"]),
        service(
            "postgresql",
            "compose-for-postgresql",
            &["compose-for-postgresql[0].uri"],
        ),
        service("redis", "compose-for-redis", &["compose-for-redis[0].uri"]),
        service(
            "push",
            "imfpush",
            &[
                "imfpush[0].appGuid",
                "imfpush[0].appSecret",
                "imfpush[0].clientSecret",
                "imfpush[0].url",
            ],
        ),
        service(
            "alert-notification",
            "AlertNotification",
            &[
                "AlertNotification[0].url",
                "AlertNotification[0].name",
                "AlertNotification[0].password",
            ],
        ),
        service(
            "watson-conversation",
            "conversation",
            &[
                "conversation[0].username",
                "conversation[0].password",
                "conversation[0].url",
            ],
        ),
        service(
            "watson-tone-analyzer",
            "tone_analyzer",
            &[
                "tone_analyzer[0].username",
                "tone_analyzer[0].password",
                "tone_analyzer[0].url",
            ],
        ),
    ]
}

/// Build one descriptor with the conventional template location
/// (`service-<name>`) and per-language instrumentation entries.
fn service(name: &str, bluemix_name: &str, paths: &[&str]) -> ServiceDescriptor {
    let location = format!("service-{name}");
    ServiceDescriptor::new(name, &location, bluemix_name)
        .with_config_paths(paths.iter().copied())
        .with_instrumentation(
            LanguageTarget::Node,
            vec![InstrumentationFile::new(
                "instrumentation.js",
                format!("{location}.js"),
            )],
        )
        .with_instrumentation(
            LanguageTarget::Python,
            vec![InstrumentationFile::new(
                "instrumentation.py",
                format!("{}.py", snake(&location)),
            )],
        )
        .with_instrumentation(
            LanguageTarget::Swift,
            vec![InstrumentationFile::new(
                "instrumentation.swift",
                format!("{}.swift", pascal(&location)),
            )],
        )
        .with_instrumentation(
            LanguageTarget::Java,
            vec![InstrumentationFile::new(
                "Instrumentation.java",
                format!("{}.java", pascal(&location)),
            )],
        )
}

fn snake(name: &str) -> String {
    name.replace('-', "_")
}

fn pascal(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
