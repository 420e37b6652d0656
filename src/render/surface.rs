//! Traits implemented by the presentation layer.

use super::command::RenderCommand;

/// Consumer of render commands.
///
/// Implementations process commands in emission order and are responsible
/// for honoring [`RenderCommand::Delay`] steps; the controller itself never
/// sleeps.
pub trait Renderer {
    fn render(&mut self, command: &RenderCommand);

    /// Process a whole batch in order.
    fn render_all(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            self.render(command);
        }
    }
}

/// Yes/no gate for destructive operations (statistics reset).
pub trait ConfirmPrompt {
    /// Return `true` to let the operation proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Renderer that records every command it receives.
///
/// Useful for tests and for presentation layers that batch their own
/// drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drop the recorded history.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, command: &RenderCommand) {
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::command::Screen;

    #[test]
    fn test_recording_renderer_keeps_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_all(&[
            RenderCommand::ShowScreen(Screen::Welcome),
            RenderCommand::ShowScreen(Screen::Game),
        ]);

        assert_eq!(renderer.commands().len(), 2);
        assert_eq!(
            renderer.commands()[1],
            RenderCommand::ShowScreen(Screen::Game)
        );

        renderer.clear();
        assert!(renderer.commands().is_empty());
    }
}
