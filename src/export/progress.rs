//! Progress reporting.
//!
//! Purely observational: sinks never influence the export.

use std::fmt;

/// Sub-phases of an export, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportPhase {
    Meshes,
    Materials,
    Textures,
    Images,
    Lights,
    Cameras,
    Nodes,
}

impl ExportPhase {
    pub const ALL: [ExportPhase; 7] = [
        ExportPhase::Meshes,
        ExportPhase::Materials,
        ExportPhase::Textures,
        ExportPhase::Images,
        ExportPhase::Lights,
        ExportPhase::Cameras,
        ExportPhase::Nodes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportPhase::Meshes => "meshes",
            ExportPhase::Materials => "materials",
            ExportPhase::Textures => "textures",
            ExportPhase::Images => "images",
            ExportPhase::Lights => "lights",
            ExportPhase::Cameras => "cameras",
            ExportPhase::Nodes => "scene nodes",
        }
    }
}

impl fmt::Display for ExportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives the completed fraction (0.0 to 1.0) of each phase.
pub trait ProgressSink {
    fn report(&mut self, phase: ExportPhase, fraction: f32);
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _phase: ExportPhase, _fraction: f32) {}
}

/// Logs progress at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, phase: ExportPhase, fraction: f32) {
        tracing::debug!("Exporting {} {:.0}%", phase, fraction * 100.0);
    }
}

impl<F: FnMut(ExportPhase, f32)> ProgressSink for F {
    fn report(&mut self, phase: ExportPhase, fraction: f32) {
        self(phase, fraction)
    }
}
