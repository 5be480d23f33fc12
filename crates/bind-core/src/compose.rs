//! Artifact composer - per (service, language) orchestration
//!
//! Drives the resolver and manifest patcher for one service at a time and
//! registers the resulting artifacts with the project context.

use crate::context::{InstrumentationRef, ProjectContext, ReadMeRef};
use crate::template::TemplateEngine;
use crate::{Error, Result};
use bind_content::EnvBinding;
use bind_fs::TemplateStore;
use bind_meta::{LanguageTarget, ServiceDescriptor};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

const MAPPINGS_TEMPLATE: &str = "mappings.json";
const LOCAL_DEV_CONFIG_TEMPLATE: &str = "localdev-config.json.template";
const README_TEMPLATE: &str = "README.md";

/// How one service's composition ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ComposeOutcome {
    /// All applicable sub-steps ran
    Done,
    /// The service was not applicable to this project
    Skipped(String),
    /// Composition aborted partway; earlier services are unaffected
    Failed(String),
}

/// Report for one service's composition.
#[derive(Debug, Clone, Serialize)]
pub struct ComposeReport {
    pub service: String,
    pub outcome: ComposeOutcome,
    /// Sub-steps that registered an artifact
    pub actions: Vec<String>,
}

impl ComposeReport {
    pub fn done(service: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            service: service.into(),
            outcome: ComposeOutcome::Done,
            actions,
        }
    }

    pub fn skipped(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            outcome: ComposeOutcome::Skipped(reason.into()),
            actions: Vec::new(),
        }
    }

    pub fn failed(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            outcome: ComposeOutcome::Failed(message.into()),
            actions: Vec::new(),
        }
    }
}

/// Composes the artifact set for (service, language) pairs.
pub struct Composer {
    templates: TemplateStore,
    engine: TemplateEngine,
}

impl Composer {
    /// Create a composer reading templates from the given store.
    pub fn new(templates: TemplateStore) -> Self {
        Self {
            templates,
            engine: TemplateEngine::new(),
        }
    }

    /// Compose all artifacts for one service.
    ///
    /// A service is applicable when the binding set holds data under its
    /// bluemix name and the template store has a directory for the target
    /// language. Inapplicable services are reported as `Skipped`, not as
    /// errors. Each sub-step is individually skippable when its template
    /// file is absent.
    pub fn compose(
        &self,
        descriptor: &ServiceDescriptor,
        language: LanguageTarget,
        ctx: &mut ProjectContext,
    ) -> Result<ComposeReport> {
        let lang_dir = language.template_dir();

        if ctx.binding_for(&descriptor.bluemix_name).is_none() {
            debug!(service = %descriptor.name, "no binding data, skipping");
            return Ok(ComposeReport::skipped(&descriptor.name, "no binding data"));
        }
        if !self.templates.language_dir_exists(&descriptor.location, lang_dir) {
            debug!(
                service = %descriptor.name,
                language = %language,
                "no templates for language, skipping"
            );
            return Ok(ComposeReport::skipped(
                &descriptor.name,
                format!("no {language} templates"),
            ));
        }

        let resolved = bind_content::resolve(&descriptor.local_dev_config_paths, ctx.binding_set())?;

        let mut actions = Vec::new();
        self.compose_dependencies(descriptor, lang_dir, &resolved, ctx, &mut actions)?;
        self.compose_mappings(descriptor, lang_dir, ctx, &mut actions)?;
        self.compose_local_dev_config(descriptor, lang_dir, &resolved, ctx, &mut actions)?;
        self.compose_readme(descriptor, lang_dir, ctx, &mut actions);
        self.compose_instrumentation(descriptor, language, lang_dir, ctx, &mut actions);
        self.patch_deployment(descriptor, ctx, &mut actions)?;

        Ok(ComposeReport::done(&descriptor.name, actions))
    }

    fn compose_dependencies(
        &self,
        descriptor: &ServiceDescriptor,
        lang_dir: &str,
        resolved: &BTreeMap<String, Value>,
        ctx: &mut ProjectContext,
        actions: &mut Vec<String>,
    ) -> Result<()> {
        let Some(path) = self
            .templates
            .find_dependency_fragment(&descriptor.location, lang_dir)
        else {
            debug!(service = %descriptor.name, "no dependency fragment");
            return Ok(());
        };

        let raw = bind_fs::read_text(&path)?;
        let content = if TemplateStore::is_template(&path) {
            self.engine.expand(&raw, resolved)?
        } else {
            raw
        };
        ctx.add_dependencies(content);
        actions.push("dependencies".to_string());
        Ok(())
    }

    fn compose_mappings(
        &self,
        descriptor: &ServiceDescriptor,
        lang_dir: &str,
        ctx: &mut ProjectContext,
        actions: &mut Vec<String>,
    ) -> Result<()> {
        let Some(path) = self
            .templates
            .find(&descriptor.location, lang_dir, MAPPINGS_TEMPLATE)
        else {
            debug!(service = %descriptor.name, "no mappings table");
            return Ok(());
        };

        let raw = bind_fs::read_text(&path)?;
        let table: Map<String, Value> = serde_json::from_str(&raw)?;
        ctx.add_mappings(table);
        actions.push("mappings".to_string());
        Ok(())
    }

    fn compose_local_dev_config(
        &self,
        descriptor: &ServiceDescriptor,
        lang_dir: &str,
        resolved: &BTreeMap<String, Value>,
        ctx: &mut ProjectContext,
        actions: &mut Vec<String>,
    ) -> Result<()> {
        let Some(path) = self
            .templates
            .find(&descriptor.location, lang_dir, LOCAL_DEV_CONFIG_TEMPLATE)
        else {
            debug!(service = %descriptor.name, "no local-dev config template");
            return Ok(());
        };

        let raw = bind_fs::read_text(&path)?;
        let expanded = self.engine.expand(&raw, resolved)?;
        let config: Map<String, Value> = serde_json::from_str(&expanded)
            .map_err(|e| Error::config_expansion(&descriptor.name, e.to_string()))?;
        ctx.add_local_dev_config(config);
        actions.push("local-dev-config".to_string());
        Ok(())
    }

    fn compose_readme(
        &self,
        descriptor: &ServiceDescriptor,
        lang_dir: &str,
        ctx: &mut ProjectContext,
        actions: &mut Vec<String>,
    ) {
        let Some(path) = self
            .templates
            .find(&descriptor.location, lang_dir, README_TEMPLATE)
        else {
            debug!(service = %descriptor.name, "no README snippet");
            return;
        };

        ctx.add_readme(ReadMeRef {
            source_file_path: path,
            target_file_name: format!("README-{}.md", descriptor.location),
        });
        actions.push("readme".to_string());
    }

    fn compose_instrumentation(
        &self,
        descriptor: &ServiceDescriptor,
        language: LanguageTarget,
        lang_dir: &str,
        ctx: &mut ProjectContext,
        actions: &mut Vec<String>,
    ) {
        let mut registered = false;
        for file in descriptor.instrumentation_for(language) {
            let Some(path) = self
                .templates
                .find(&descriptor.location, lang_dir, &file.source_file)
            else {
                debug!(
                    service = %descriptor.name,
                    file = %file.source_file,
                    "instrumentation source missing"
                );
                continue;
            };
            ctx.add_instrumentation(InstrumentationRef {
                source_file_path: path,
                target_file_name: file.target_file.clone(),
                label: descriptor.name.clone(),
            });
            registered = true;
        }
        if registered {
            actions.push("instrumentation".to_string());
        }
    }

    fn patch_deployment(
        &self,
        descriptor: &ServiceDescriptor,
        ctx: &mut ProjectContext,
        actions: &mut Vec<String>,
    ) -> Result<()> {
        let binding = EnvBinding::for_service(&descriptor.name, &descriptor.name);
        if ctx.patch_manifest(binding)? {
            actions.push("deployment".to_string());
        } else {
            debug!(service = %descriptor.name, "no deployment manifest, skipping patch");
        }
        Ok(())
    }
}
