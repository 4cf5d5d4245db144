use crate::scene::Scene;

/// Presentation layer that draws a [`Scene`]
///
/// Renderers see only the finished geometry; they never touch stars, planets
/// or the habitability model.
pub trait SceneRenderer {
    type Output;

    fn render(&self, scene: &Scene) -> Self::Output;
}
