//! State shared by all writer functions during one export.

use super::config::ExportConfig;
use super::progress::{ExportPhase, ProgressSink};
use super::report::{ExportReport, ExportWarning};
use crate::document::{Document, Element};
use crate::error::Result;
use crate::scene::SceneSource;
use std::collections::HashSet;

/// Everything a writer needs: the document under construction, the scene,
/// the options, the progress sink, the warning report, and the ids that
/// have been written so far.
pub struct ExportContext<'a, S: SceneSource + ?Sized> {
    pub doc: Document,
    pub scene: &'a S,
    pub config: &'a ExportConfig,
    pub report: ExportReport,
    progress: &'a mut dyn ProgressSink,
    exported: HashSet<String>,
}

impl<'a, S: SceneSource + ?Sized> ExportContext<'a, S> {
    pub fn new(scene: &'a S, config: &'a ExportConfig, progress: &'a mut dyn ProgressSink) -> Self {
        let mut doc = Document::new();
        doc.set_precision(config.precision);
        doc.set_format(config.format());
        Self {
            doc,
            scene,
            config,
            report: ExportReport::default(),
            progress,
            exported: HashSet::new(),
        }
    }

    /// Record and log a degraded condition.
    pub fn warn(&mut self, warning: ExportWarning) {
        self.report.warn(warning);
    }

    /// Register an exported library id. Ids are not required to be unique,
    /// but a repeat is reported.
    pub fn register_id(&mut self, id: &str) {
        if !self.exported.insert(id.to_string()) {
            self.warn(ExportWarning::IdCollision { id: id.to_string() });
        }
    }

    /// Whether a library entry with this id has been written.
    pub fn is_exported(&self, id: &str) -> bool {
        self.exported.contains(id)
    }

    /// Report `done` of `total` items finished in a phase.
    pub fn progress(&mut self, phase: ExportPhase, done: usize, total: usize) {
        let fraction = if total == 0 {
            1.0
        } else {
            done as f32 / total as f32
        };
        self.progress.report(phase, fraction);
    }
}

/// Append children in order.
pub(crate) fn append_all(
    parent: &mut Element,
    children: impl IntoIterator<Item = Element>,
) -> Result<()> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}
