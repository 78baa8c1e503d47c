/// 2D projection of vertex sequences for plotting
use crate::geometry::Vertex;

/// Drop the z coordinate, returning parallel x and y sequences in input
/// order. Render-order sorting is a separate, explicit step; see
/// [`sort_by_depth`].
pub fn project_to_plane(vertices: &[Vertex]) -> (Vec<f64>, Vec<f64>) {
    let xs = vertices.iter().map(|v| v.position.x).collect();
    let ys = vertices.iter().map(|v| v.position.y).collect();
    (xs, ys)
}

/// Stable sort by z ascending, so a plotter can draw far vertices first.
pub fn sort_by_depth(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut sorted = vertices.to_vec();
    sorted.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));
    sorted
}
