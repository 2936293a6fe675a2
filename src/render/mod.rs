//! Render Module - backend-agnostic draw output
//!
//! The scene never talks to a graphics API. It describes each pass with a
//! `ViewPass` and each primitive with a `DrawCommand`, and hands them to a
//! `RenderSink` supplied by the backend.

pub mod draw_data;
pub mod draw_operations;

pub use draw_data::{DrawCommand, DrawUniform, MaterialData, Primitive, ViewPass, Viewport};
pub use draw_operations::{
    build_draw_command, build_draw_uniform, build_skybox_command, material_from_color,
    normal_matrix,
};

/// Receiver for render passes and draw commands
pub trait RenderSink {
    /// Start a pass; the following draws belong to it
    fn begin_pass(&mut self, pass: &ViewPass);

    fn submit(&mut self, command: &DrawCommand);
}

/// Sink that records everything, for tests and offline inspection
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub passes: Vec<ViewPass>,

    /// Commands tagged with the index of the pass they belong to
    pub commands: Vec<(usize, DrawCommand)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands submitted during one pass
    pub fn commands_in_pass(&self, pass: usize) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |(index, _)| *index == pass)
            .map(|(_, command)| command)
    }
}

impl RenderSink for DrawList {
    fn begin_pass(&mut self, pass: &ViewPass) {
        self.passes.push(*pass);
    }

    fn submit(&mut self, command: &DrawCommand) {
        let pass = self.passes.len().saturating_sub(1);
        self.commands.push((pass, *command));
    }
}
