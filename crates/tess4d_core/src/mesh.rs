//! The tesseract mesh
//!
//! [`HypercubeMesh`] owns the 4D vertex buffer and everything derived from it:
//! the projected 3D positions, the per-vertex colors and texture coordinates,
//! the triangle list and the bounding box of the projected shape.

use tess4d_math::{Aabb3, Axis, RotationPlane, Vec4};

use crate::error::MeshError;
use crate::projection::{Projection, DEFAULT_LIGHT_DISTANCE};
use crate::rotation;
use crate::tables::{self, CORNER_COUNT, CUBE_COLORS, CUBE_COUNT, FACES, VERTEX_COUNT};

/// A tesseract as a renderable triangle mesh
///
/// Topology is fixed at construction. Rotations accumulate in the 4D vertex
/// buffer; the 3D buffer is always derived from it by [`project`](Self::project).
#[derive(Clone, Debug)]
pub struct HypercubeMesh {
    half_extent: Vec4,
    light_distance: f32,
    projection: Projection,
    corners: [Vec4; CORNER_COUNT],
    vertices_4d: Vec<Vec4>,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    bounds: Aabb3,
    positions_dirty: bool,
}

impl HypercubeMesh {
    /// Build a tesseract with the default light distance
    ///
    /// # Arguments
    /// * `half_extent` - Distance from the center to each cell along every axis
    pub fn new(half_extent: Vec4) -> Result<Self, MeshError> {
        Self::with_light_distance(half_extent, DEFAULT_LIGHT_DISTANCE)
    }

    /// Build a tesseract with the stereographic light at `light_distance` on +W
    ///
    /// The light must lie outside the sphere through the corners. Rotation
    /// keeps every vertex on that sphere, so the projection never divides by
    /// zero.
    pub fn with_light_distance(half_extent: Vec4, light_distance: f32) -> Result<Self, MeshError> {
        for axis in Axis::ALL {
            let value = half_extent[axis];
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::NonPositiveExtent { axis, value });
            }
        }
        if !light_distance.is_finite() || light_distance <= 0.0 {
            return Err(MeshError::InvalidLightDistance(light_distance));
        }
        let radius = half_extent.length();
        if light_distance <= radius {
            return Err(MeshError::LightInsideHypercube { light_distance, radius });
        }

        let mesh = Self::build(half_extent, light_distance, Projection::default());
        log::info!(
            "Built tesseract: half-extent {:?}, light distance {}, {} vertices, {} triangles",
            half_extent.to_array(),
            light_distance,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Set the projection mode and re-project
    pub fn with_projection(mut self, projection: Projection) -> Self {
        if self.projection != projection {
            self.projection = projection;
            self.project();
        }
        self
    }

    /// Assemble the mesh from already validated parameters
    fn build(half_extent: Vec4, light_distance: f32, projection: Projection) -> Self {
        let corners = tables::corners(half_extent);

        let vertices_4d: Vec<Vec4> = FACES.iter().flatten().map(|&corner| corners[corner]).collect();

        let colors = (0..VERTEX_COUNT)
            .map(|vertex| CUBE_COLORS[tables::cube_of_vertex(vertex)])
            .collect();

        let tex_coords = (0..VERTEX_COUNT)
            .map(|vertex| tables::TEX_COORD_CYCLE[vertex % tables::VERTICES_PER_FACE])
            .collect();

        let indices = (0..tables::FACE_COUNT)
            .flat_map(|face| tables::quad_to_triangles(tables::face_vertices(face)))
            .collect();

        let mut mesh = Self {
            half_extent,
            light_distance,
            projection,
            corners,
            vertices_4d,
            positions: vec![[0.0; 3]; VERTEX_COUNT],
            colors,
            tex_coords,
            indices,
            bounds: Aabb3::default(),
            positions_dirty: false,
        };
        mesh.project();
        mesh
    }

    /// Recompute the 3D positions from the 4D vertices
    ///
    /// Also refreshes the bounding box and marks the positions dirty.
    pub fn project(&mut self) {
        let mut clamped = 0usize;
        for (out, v) in self.positions.iter_mut().zip(&self.vertices_4d) {
            let (p, was_clamped) = self.projection.project_point(*v, self.light_distance);
            *out = p;
            clamped += was_clamped as usize;
        }
        if clamped > 0 {
            log::warn!(
                "Clamped stereographic projection for {} vertices (light distance {})",
                clamped,
                self.light_distance
            );
        }

        self.bounds = Aabb3::from_points(&self.positions).unwrap_or_default();
        self.positions_dirty = true;
    }

    /// Switch between stereographic and orthographic projection
    pub fn toggle_projection(&mut self) {
        self.projection = self.projection.toggled();
        log::debug!("Projection switched to {:?}", self.projection);
        self.project();
    }

    /// Rotate the whole shape by `angle_degrees` in `plane` and re-project
    ///
    /// Returns `false` for [`RotationPlane::None`], in which case nothing
    /// changes and the positions are not marked dirty.
    pub fn rotate(&mut self, angle_degrees: f32, plane: RotationPlane) -> bool {
        if !rotation::rotate_vertices(&mut self.vertices_4d, angle_degrees, plane) {
            return false;
        }
        self.project();
        true
    }

    /// Undo all accumulated rotation
    pub fn reset(&mut self) {
        for (v, &corner) in self.vertices_4d.iter_mut().zip(FACES.iter().flatten()) {
            *v = self.corners[corner];
        }
        log::debug!("Tesseract reset");
        self.project();
    }

    /// Return and clear the dirty flag on the 3D positions
    #[inline]
    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::take(&mut self.positions_dirty)
    }

    /// Projected 3D positions, one per vertex
    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// RGBA color per vertex
    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Texture coordinate per vertex
    #[inline]
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle list, three indices per triangle
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Current (rotated) 4D coordinates, one per vertex
    #[inline]
    pub fn vertices_4d(&self) -> &[Vec4] {
        &self.vertices_4d
    }

    /// The 16 unrotated corners
    #[inline]
    pub fn corners(&self) -> &[Vec4; CORNER_COUNT] {
        &self.corners
    }

    #[inline]
    pub fn cube_colors(&self) -> &[[f32; 4]; CUBE_COUNT] {
        &CUBE_COLORS
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    #[inline]
    pub fn light_distance(&self) -> f32 {
        self.light_distance
    }

    #[inline]
    pub fn half_extent(&self) -> Vec4 {
        self.half_extent
    }

    /// Bounding box of the current 3D positions
    #[inline]
    pub fn bounds(&self) -> Aabb3 {
        self.bounds
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices_4d.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Cube (cell) a vertex belongs to
    #[inline]
    pub fn cube_of_vertex(&self, vertex: usize) -> usize {
        tables::cube_of_vertex(vertex)
    }

    /// Face a vertex belongs to
    #[inline]
    pub fn face_of_vertex(&self, vertex: usize) -> usize {
        tables::face_of_vertex(vertex)
    }
}

impl Default for HypercubeMesh {
    /// Unit tesseract, light at 50, stereographic
    fn default() -> Self {
        Self::build(Vec4::ONE, DEFAULT_LIGHT_DISTANCE, Projection::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::INDEX_COUNT;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_shape() {
        let mesh = HypercubeMesh::default();
        assert_eq!(mesh.vertex_count(), VERTEX_COUNT);
        assert_eq!(mesh.triangle_count(), 96);
        assert_eq!(mesh.indices().len(), INDEX_COUNT);
        assert_eq!(mesh.positions().len(), VERTEX_COUNT);
        assert_eq!(mesh.projection(), Projection::Stereographic);
        assert_eq!(mesh.light_distance(), 50.0);
        assert_eq!(mesh.half_extent(), Vec4::ONE);
    }

    #[test]
    fn test_vertices_copy_corners() {
        let mesh = HypercubeMesh::new(Vec4::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        for (i, v) in mesh.vertices_4d().iter().enumerate() {
            let corner = FACES[mesh.face_of_vertex(i)][i % 4];
            assert_eq!(*v, mesh.corners()[corner]);
        }
    }

    #[test]
    fn test_colors_follow_cube() {
        let mesh = HypercubeMesh::default();
        for (i, color) in mesh.colors().iter().enumerate() {
            assert_eq!(*color, mesh.cube_colors()[mesh.cube_of_vertex(i)]);
        }
    }

    #[test]
    fn test_tex_coords_cycle() {
        let mesh = HypercubeMesh::default();
        assert_eq!(mesh.tex_coords()[0], [0.0, 0.0]);
        assert_eq!(mesh.tex_coords()[1], [1.0, 0.0]);
        assert_eq!(mesh.tex_coords()[2], [0.0, 1.0]);
        assert_eq!(mesh.tex_coords()[3], [1.0, 1.0]);
        assert_eq!(mesh.tex_coords()[4], [0.0, 0.0]);
    }

    #[test]
    fn test_first_face_indices() {
        let mesh = HypercubeMesh::default();
        assert_eq!(&mesh.indices()[..6], &[0, 1, 3, 1, 2, 3]);
        assert_eq!(&mesh.indices()[6..12], &[4, 5, 7, 5, 6, 7]);
    }

    #[test]
    fn test_construction_marks_dirty_once() {
        let mut mesh = HypercubeMesh::default();
        assert!(mesh.take_positions_dirty());
        assert!(!mesh.take_positions_dirty());
    }

    #[test]
    fn test_rotate_none_is_clean() {
        let mut mesh = HypercubeMesh::default();
        mesh.take_positions_dirty();
        assert!(!mesh.rotate(45.0, RotationPlane::None));
        assert!(!mesh.take_positions_dirty());
    }

    #[test]
    fn test_rotate_marks_dirty() {
        let mut mesh = HypercubeMesh::default();
        mesh.take_positions_dirty();
        assert!(mesh.rotate(10.0, RotationPlane::XW));
        assert!(mesh.take_positions_dirty());
    }

    #[test]
    fn test_with_projection() {
        let mesh = HypercubeMesh::default().with_projection(Projection::Orthographic);
        assert_eq!(mesh.projection(), Projection::Orthographic);
        for (p, v) in mesh.positions().iter().zip(mesh.vertices_4d()) {
            assert_eq!(*p, v.xyz());
        }
    }

    #[test]
    fn test_stereographic_scales_by_w() {
        let mesh = HypercubeMesh::default();
        for (p, v) in mesh.positions().iter().zip(mesh.vertices_4d()) {
            let s = 50.0 / (50.0 - v.w);
            assert!(approx_eq(p[0], v.x * s));
            assert!(approx_eq(p[1], v.y * s));
            assert!(approx_eq(p[2], v.z * s));
        }
    }

    #[test]
    fn test_reset_restores_corners() {
        let mut mesh = HypercubeMesh::default();
        let original = mesh.vertices_4d().to_vec();
        let positions = mesh.positions().to_vec();
        mesh.rotate(33.0, RotationPlane::XYZW);
        mesh.rotate(12.0, RotationPlane::YW);
        assert_ne!(mesh.vertices_4d(), &original[..]);

        mesh.reset();
        assert_eq!(mesh.vertices_4d(), &original[..]);
        assert_eq!(mesh.positions(), &positions[..]);
    }

    #[test]
    fn test_light_just_outside_is_accepted() {
        // Radius of the unit tesseract is 2
        assert!(HypercubeMesh::with_light_distance(Vec4::ONE, 2.001).is_ok());
        assert_eq!(
            HypercubeMesh::with_light_distance(Vec4::ONE, 2.0).unwrap_err(),
            MeshError::LightInsideHypercube { light_distance: 2.0, radius: 2.0 }
        );
    }
}
