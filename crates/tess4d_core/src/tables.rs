//! Combinatorial tables of the tesseract mesh
//!
//! A tesseract has 16 corners that make up 8 cubes, the same way a cube's
//! 8 corners make up 6 squares. Each cube gets one flat color, so faces can't
//! share vertices: every face owns 4 private vertex slots, giving
//! 8 cubes * 6 faces * 4 vertices = 192 vertices.
//!
//! Layout: cube `c` owns faces `6c..6c+6`, face `f` owns vertices `4f..4f+4`.

use tess4d_math::Vec4;

pub const CORNER_COUNT: usize = 16;
pub const CUBE_COUNT: usize = 8;
pub const FACES_PER_CUBE: usize = 6;
pub const VERTICES_PER_FACE: usize = 4;
pub const FACE_COUNT: usize = CUBE_COUNT * FACES_PER_CUBE;
pub const VERTEX_COUNT: usize = FACE_COUNT * VERTICES_PER_FACE;
pub const VERTICES_PER_CUBE: usize = FACES_PER_CUBE * VERTICES_PER_FACE;
pub const TRIANGLE_COUNT: usize = FACE_COUNT * 2;
pub const INDEX_COUNT: usize = TRIANGLE_COUNT * 3;

/// Sign pattern of each corner: bit 0 = x, bit 1 = y, bit 2 = z, bit 3 = w
const CORNER_SIGNS: [Vec4; CORNER_COUNT] = [
    Vec4::new(-1.0, -1.0, -1.0, -1.0), // 0  = 0b0000
    Vec4::new( 1.0, -1.0, -1.0, -1.0), // 1  = 0b0001
    Vec4::new(-1.0,  1.0, -1.0, -1.0), // 2  = 0b0010
    Vec4::new( 1.0,  1.0, -1.0, -1.0), // 3  = 0b0011
    Vec4::new(-1.0, -1.0,  1.0, -1.0), // 4  = 0b0100
    Vec4::new( 1.0, -1.0,  1.0, -1.0), // 5  = 0b0101
    Vec4::new(-1.0,  1.0,  1.0, -1.0), // 6  = 0b0110
    Vec4::new( 1.0,  1.0,  1.0, -1.0), // 7  = 0b0111
    Vec4::new(-1.0, -1.0, -1.0,  1.0), // 8  = 0b1000
    Vec4::new( 1.0, -1.0, -1.0,  1.0), // 9  = 0b1001
    Vec4::new(-1.0,  1.0, -1.0,  1.0), // 10 = 0b1010
    Vec4::new( 1.0,  1.0, -1.0,  1.0), // 11 = 0b1011
    Vec4::new(-1.0, -1.0,  1.0,  1.0), // 12 = 0b1100
    Vec4::new( 1.0, -1.0,  1.0,  1.0), // 13 = 0b1101
    Vec4::new(-1.0,  1.0,  1.0,  1.0), // 14 = 0b1110
    Vec4::new( 1.0,  1.0,  1.0,  1.0), // 15 = 0b1111
];

/// Corner indices of every face, in winding order
///
/// Consecutive corners of a face differ in exactly one coordinate. Faces wind
/// counter-clockwise seen from outside their cube, measured in the cube's own
/// 3-space with its free axes taken in `x, y, z, w` order. For the two W cells
/// that is ordinary outward facing in the projected XYZ space.
#[rustfmt::skip]
pub const FACES: [[usize; VERTICES_PER_FACE]; FACE_COUNT] = [
    // Cube 0 (w = -h)
    [ 6,  4,  5,  7], [ 2,  0,  4,  6], [ 3,  2,  6,  7], [ 1,  3,  7,  5], [ 0,  1,  5,  4], [ 0,  2,  3,  1],
    // Cube 1 (w = +h)
    [14, 12, 13, 15], [10,  8, 12, 14], [11, 10, 14, 15], [ 9, 11, 15, 13], [ 8,  9, 13, 12], [ 8, 10, 11,  9],
    // Cube 2 (z = +h)
    [ 6,  7,  5,  4], [14,  6,  4, 12], [15,  7,  6, 14], [13,  5,  7, 15], [12,  4,  5, 13], [12, 13, 15, 14],
    // Cube 3 (z = -h)
    [10,  8,  9, 11], [ 2,  0,  8, 10], [ 3,  2, 10, 11], [ 1,  3, 11,  9], [ 0,  1,  9,  8], [ 0,  2,  3,  1],
    // Cube 4 (x = -h)
    [ 6,  4, 12, 14], [ 2,  0,  4,  6], [10,  2,  6, 14], [ 8, 10, 14, 12], [ 0,  8, 12,  4], [ 0,  2, 10,  8],
    // Cube 5 (y = +h)
    [ 6, 14, 15,  7], [ 2, 10, 14,  6], [ 3,  2,  6,  7], [11,  3,  7, 15], [10, 11, 15, 14], [10,  2,  3, 11],
    // Cube 6 (x = +h)
    [15,  7,  5, 13], [11, 15, 13,  9], [ 3,  7, 15, 11], [ 1,  5,  7,  3], [ 9, 13,  5,  1], [ 9,  1,  3, 11],
    // Cube 7 (y = -h)
    [12, 13,  5,  4], [ 8, 12,  4,  0], [ 9, 13, 12,  8], [ 1,  5, 13,  9], [ 0,  4,  5,  1], [ 0,  1,  9,  8],
];

/// Flat RGBA color of each cube
pub const CUBE_COLORS: [[f32; 4]; CUBE_COUNT] = [
    [0.75, 0.75, 0.75, 1.0], // light gray
    [1.0, 0.0, 0.0, 1.0],    // red
    [0.0, 1.0, 0.0, 1.0],    // green
    [0.0, 0.0, 1.0, 1.0],    // blue
    [1.0, 1.0, 0.0, 1.0],    // yellow
    [1.0, 0.0, 1.0, 1.0],    // magenta
    [0.0, 1.0, 1.0, 1.0],    // cyan
    [0.25, 0.25, 0.25, 1.0], // dark gray
];

/// Texture coordinates given to the 4 vertices of every face
pub const TEX_COORD_CYCLE: [[f32; 2]; VERTICES_PER_FACE] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
];

/// The 16 corners of an origin-centered box with the given half-extent
pub fn corners(half_extent: Vec4) -> [Vec4; CORNER_COUNT] {
    CORNER_SIGNS.map(|signs| signs.component_mul(half_extent))
}

/// Split a quad `(v0, v1, v2, v3)` into triangles `(v0, v1, v3)` and `(v1, v2, v3)`
#[inline]
pub fn quad_to_triangles([v0, v1, v2, v3]: [u32; 4]) -> [u32; 6] {
    [v0, v1, v3, v1, v2, v3]
}

/// Vertex slots owned by a face
#[inline]
pub fn face_vertices(face: usize) -> [u32; VERTICES_PER_FACE] {
    let first = (face * VERTICES_PER_FACE) as u32;
    [first, first + 1, first + 2, first + 3]
}

/// Face that owns a vertex slot
#[inline]
pub fn face_of_vertex(vertex: usize) -> usize {
    vertex / VERTICES_PER_FACE
}

/// Cube that owns a vertex slot
#[inline]
pub fn cube_of_vertex(vertex: usize) -> usize {
    vertex / VERTICES_PER_CUBE
}
