//! Procedural generators for primitive solids
//!
//! Cube, pyramid, cone, cylinder, and UV sphere. Every generator maps its
//! dimensions, a center, and a material handle to a complete [`Mesh`] with a
//! single submesh. Winding is counter-clockwise seen from the outward normal
//! side on every non-degenerate triangle.
//!
//! Generators perform no input validation: a zero radius or negative height
//! produces degenerate but well-typed output, never an error.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use polyform_core::MaterialHandle;
use serde::{Deserialize, Serialize};

use crate::mesh::{Mesh, MeshBuilder};
use crate::vertex::Vertex;

/// Radial subdivision used for cones and cylinders built from a [`Shape`].
pub const DEFAULT_SIDES: u32 = 100;
/// Latitude band count used for spheres built from a [`Shape`].
pub const DEFAULT_STACKS: u32 = 100;
/// Longitude wedge count used for spheres built from a [`Shape`].
pub const DEFAULT_SLICES: u32 = 100;

/// Model dimensions used when a kind is first selected in a viewer.
const DEFAULT_EXTENT: f32 = 0.3;
const DEFAULT_RADIUS: f32 = 0.15;
const DEFAULT_HEIGHT: f32 = 0.3;

/// The closed set of primitive solids the generators cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Cylinder,
    Sphere,
    Cube,
    Cone,
    Pyramid,
}

impl ShapeKind {
    /// Every kind, in menu order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
    ];

    /// Human-readable name for selection UIs
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
            ShapeKind::Cone => "Cone",
            ShapeKind::Pyramid => "Pyramid",
        }
    }

    /// Icon asset shown next to the label
    pub fn icon_name(&self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube_outline",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::Cube
    }
}

/// A shape selection together with its geometric parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Cube { size: Vec3 },
    Pyramid { size: Vec3 },
    Cone { radius: f32, height: f32 },
    Cylinder { radius: f32, height: f32 },
    Sphere { radius: f32 },
}

impl Shape {
    /// The shape a kind starts out as when selected
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cube => Shape::Cube {
                size: Vec3::splat(DEFAULT_EXTENT),
            },
            ShapeKind::Pyramid => Shape::Pyramid {
                size: Vec3::splat(DEFAULT_EXTENT),
            },
            ShapeKind::Cone => Shape::Cone {
                radius: DEFAULT_RADIUS,
                height: DEFAULT_HEIGHT,
            },
            ShapeKind::Cylinder => Shape::Cylinder {
                radius: DEFAULT_RADIUS,
                height: DEFAULT_HEIGHT,
            },
            ShapeKind::Sphere => Shape::Sphere {
                radius: DEFAULT_RADIUS,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cube { .. } => ShapeKind::Cube,
            Shape::Pyramid { .. } => ShapeKind::Pyramid,
            Shape::Cone { .. } => ShapeKind::Cone,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    /// Generate the mesh for this shape at `center`, using the default
    /// subdivision counts.
    pub fn mesh(&self, center: Vec3, material: MaterialHandle) -> Mesh {
        match *self {
            Shape::Cube { size } => cube(size, center, material),
            Shape::Pyramid { size } => pyramid(size, center, material),
            Shape::Cone { radius, height } => {
                cone(radius, height, DEFAULT_SIDES, center, material)
            }
            Shape::Cylinder { radius, height } => {
                cylinder(radius, height, DEFAULT_SIDES, center, material)
            }
            Shape::Sphere { radius } => {
                sphere(radius, DEFAULT_STACKS, DEFAULT_SLICES, center, material)
            }
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::default_for(ShapeKind::default())
    }
}

/// Generate an axis-aligned cube.
///
/// Faces do not share vertices: each of the six faces gets its own four
/// vertices so per-face normals and the per-face UV square stay independent.
/// 24 vertices, 36 indices.
pub fn cube(size: Vec3, center: Vec3, material: MaterialHandle) -> Mesh {
    let corners = box_corners(center, size * 0.5);
    box_mesh(&corners, material)
}

/// Generate a square-base pyramid.
///
/// Shares the cube's 24-vertex topology with the four upper corners all
/// placed at the apex, collapsing the top face and the side faces' upper
/// edges into one point. Both top-face triangles and one triangle of each
/// side face are zero-area by construction; the visible result is a 4-sided
/// pyramid over a square base. Side normals stay the cube's axis normals.
pub fn pyramid(size: Vec3, center: Vec3, material: MaterialHandle) -> Mesh {
    let extents = size * 0.5;
    let apex = center + Vec3::new(0.0, extents.y, 0.0);
    let mut corners = box_corners(center, extents);
    for corner in corners.iter_mut().skip(4) {
        *corner = apex;
    }
    box_mesh(&corners, material)
}

/// Generate a cone with `sides` radial subdivisions.
///
/// The lateral surface converges to a single apex, so every upper-edge
/// sample is the apex point itself with an upward normal; of each side's
/// two lateral triangles only the first has area, the second joins two
/// apex samples. A top-cap fan is still emitted to keep the vertex layout
/// and index arithmetic identical to [`cylinder`]; its triangles are
/// zero-area by construction.
pub fn cone(
    radius: f32,
    height: f32,
    sides: u32,
    center: Vec3,
    material: MaterialHandle,
) -> Mesh {
    let half_height = height / 2.0;
    let apex = center + Vec3::new(0.0, half_height, 0.0);
    let apex_vertex = Vertex::new(apex, Vec3::Y, Vec2::new(0.5, 0.5));
    let ring = sides as usize + 1;
    let mut builder = MeshBuilder::with_capacity(ring * 4 + 2, sides as usize * 12);

    // Lower rim, one sample per side plus the seam duplicate.
    for side in 0..=sides {
        let theta = 2.0 * PI * side as f32 / sides as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let offset = Vec3::new(radius * cos_theta, -half_height, radius * sin_theta);
        let normal = Vec3::new(offset.x, 0.0, offset.z).normalize_or_zero();
        let uv = Vec2::new(side as f32 / sides as f32, 0.0);
        builder.vertex(Vertex::new(center + offset, normal, uv));
    }

    // Upper edge ring: every sample collapses onto the apex.
    for _ in 0..=sides {
        builder.vertex(apex_vertex);
    }

    // Bottom cap: center vertex then a ring of downward-facing rim copies.
    let lower_center = builder.vertex(Vertex::new(
        center + Vec3::new(0.0, -half_height, 0.0),
        -Vec3::Y,
        Vec2::new(0.5, 0.5),
    ));
    for side in 0..=sides {
        let theta = 2.0 * PI * side as f32 / sides as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let offset = Vec3::new(radius * cos_theta, -half_height, radius * sin_theta);
        let uv = Vec2::new((cos_theta + 1.0) / 2.0, (sin_theta + 1.0) / 2.0);
        builder.vertex(Vertex::new(center + offset, -Vec3::Y, uv));
    }

    // Top cap mirrors the bottom one but collapses onto the apex.
    let upper_center = builder.vertex(apex_vertex);
    for _ in 0..=sides {
        builder.vertex(apex_vertex);
    }

    rim_triangles(&mut builder, sides, lower_center, upper_center);
    builder.submesh(material);
    builder.build()
}

/// Generate a cylinder with `sides` radial subdivisions.
///
/// Two rims (radial normals) form the lateral surface; two cap rings with
/// axial normals plus dedicated center vertices form the cap fans. The
/// lateral quad per side interval splits into two triangles the same way
/// the cube splits its faces.
pub fn cylinder(
    radius: f32,
    height: f32,
    sides: u32,
    center: Vec3,
    material: MaterialHandle,
) -> Mesh {
    let half_height = height / 2.0;
    let ring = sides as usize + 1;
    let mut builder = MeshBuilder::with_capacity(ring * 4 + 2, sides as usize * 12);

    // Lower and upper rims with outward radial normals.
    for (y, v) in [(-half_height, 0.0), (half_height, 1.0)] {
        for side in 0..=sides {
            let theta = 2.0 * PI * side as f32 / sides as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let offset = Vec3::new(radius * cos_theta, y, radius * sin_theta);
            let normal = Vec3::new(offset.x, 0.0, offset.z).normalize_or_zero();
            let uv = Vec2::new(side as f32 / sides as f32, v);
            builder.vertex(Vertex::new(center + offset, normal, uv));
        }
    }

    // Cap center vertices and rings, normals along the axis.
    let mut centers = [0u32; 2];
    for (cap, (y, axis)) in [(-half_height, -Vec3::Y), (half_height, Vec3::Y)]
        .into_iter()
        .enumerate()
    {
        centers[cap] = builder.vertex(Vertex::new(
            center + Vec3::new(0.0, y, 0.0),
            axis,
            Vec2::new(0.5, 0.5),
        ));
        for side in 0..=sides {
            let theta = 2.0 * PI * side as f32 / sides as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let offset = Vec3::new(radius * cos_theta, y, radius * sin_theta);
            let uv = Vec2::new((cos_theta + 1.0) / 2.0, (sin_theta + 1.0) / 2.0);
            builder.vertex(Vertex::new(center + offset, axis, uv));
        }
    }

    rim_triangles(&mut builder, sides, centers[0], centers[1]);
    builder.submesh(material);
    builder.build()
}

/// Generate a UV sphere with `stacks` latitude bands and `slices` longitude
/// wedges.
///
/// The `slices`-th longitude sample wraps back to angle zero so the seam
/// closes on an identical value rather than a nearly-equal one. At the two
/// pole rows one edge of each quad lies exactly on the pole, so only the
/// quad's non-degenerate triangle is emitted there; every other stack emits
/// both.
pub fn sphere(
    radius: f32,
    stacks: u32,
    slices: u32,
    center: Vec3,
    material: MaterialHandle,
) -> Mesh {
    let vertex_count = (stacks as usize + 1) * (slices as usize + 1);
    let triangle_count = (2 * stacks).saturating_sub(2) as usize * slices as usize;
    let mut builder = MeshBuilder::with_capacity(vertex_count, triangle_count * 3);

    for stack in 0..=stacks {
        let phi = PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..=slices {
            let wrapped = if slice == slices { 0 } else { slice };
            let theta = 2.0 * PI * wrapped as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let direction = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            let uv = Vec2::new(
                1.0 - slice as f32 / slices as f32,
                1.0 - stack as f32 / stacks as f32,
            );
            builder.vertex(Vertex::new(
                center + direction * radius,
                direction.normalize_or_zero(),
                uv,
            ));
        }
    }

    let mut row = 0;
    for stack in 0..stacks {
        let top_cap = stack == 0;
        let bottom_cap = stack == stacks - 1;
        for slice in 0..slices {
            let next = slice + 1;
            if !top_cap {
                builder.triangle(row + slice, row + next, row + slice + slices + 1);
            }
            if !bottom_cap {
                builder.triangle(row + next, row + next + slices + 1, row + slice + slices + 1);
            }
        }
        row += slices + 1;
    }

    builder.submesh(material);
    builder.build()
}

/// Corner positions of an axis-aligned box: p0-p3 around the bottom face
/// starting at (-x, -y, +z), then p4-p7 directly above them.
fn box_corners(center: Vec3, extents: Vec3) -> [Vec3; 8] {
    [
        center + Vec3::new(-extents.x, -extents.y, extents.z),
        center + Vec3::new(extents.x, -extents.y, extents.z),
        center + Vec3::new(extents.x, -extents.y, -extents.z),
        center + Vec3::new(-extents.x, -extents.y, -extents.z),
        center + Vec3::new(-extents.x, extents.y, extents.z),
        center + Vec3::new(extents.x, extents.y, extents.z),
        center + Vec3::new(extents.x, extents.y, -extents.z),
        center + Vec3::new(-extents.x, extents.y, -extents.z),
    ]
}

/// Build the shared 24-vertex / 36-index box topology over eight corners.
///
/// Per face the four corners are listed top-left, top-right, bottom-right,
/// bottom-left in UV space, and the face splits into triangles (3, 1, 0)
/// and (3, 2, 1) in those local indices.
fn box_mesh(p: &[Vec3; 8], material: MaterialHandle) -> Mesh {
    let uv00 = Vec2::new(0.0, 0.0);
    let uv10 = Vec2::new(1.0, 0.0);
    let uv01 = Vec2::new(0.0, 1.0);
    let uv11 = Vec2::new(1.0, 1.0);

    let faces: [([usize; 4], Vec3); 6] = [
        ([0, 1, 2, 3], -Vec3::Y), // bottom
        ([7, 4, 0, 3], -Vec3::X), // left
        ([4, 5, 1, 0], Vec3::Z),  // front
        ([6, 7, 3, 2], -Vec3::Z), // back
        ([5, 6, 2, 1], Vec3::X),  // right
        ([7, 6, 5, 4], Vec3::Y),  // top
    ];

    let mut builder = MeshBuilder::with_capacity(24, 36);
    for (corners, normal) in faces {
        let base = builder.vertex_count();
        builder.vertex(Vertex::new(p[corners[0]], normal, uv01));
        builder.vertex(Vertex::new(p[corners[1]], normal, uv11));
        builder.vertex(Vertex::new(p[corners[2]], normal, uv10));
        builder.vertex(Vertex::new(p[corners[3]], normal, uv00));
        builder.triangle(base + 3, base + 1, base);
        builder.triangle(base + 3, base + 2, base + 1);
    }
    builder.submesh(material);
    builder.build()
}

/// Emit the side and cap triangles shared by the cone and cylinder layouts.
///
/// Expects the builder's vertex sequence to hold the lower rim at 0, the
/// upper ring at `sides + 1`, and a cap ring directly after each of the two
/// center vertices. Per side: two lateral triangles, one bottom-cap fan
/// triangle, one top-cap fan triangle.
fn rim_triangles(builder: &mut MeshBuilder, sides: u32, lower_center: u32, upper_center: u32) {
    for side in 0..sides {
        let bottom_right = side + 1;
        let top_left = side + sides + 1;
        let top_right = side + sides + 2;

        builder.triangle(side, top_right, bottom_right);
        builder.triangle(side, top_left, top_right);

        builder.triangle(lower_center, lower_center + side + 1, lower_center + side + 2);
        builder.triangle(upper_center, upper_center + side + 2, upper_center + side + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn material() -> MaterialHandle {
        MaterialHandle::new()
    }

    fn positions(mesh: &Mesh, tri: [u32; 3]) -> [Vec3; 3] {
        [
            mesh.vertices[tri[0] as usize].position,
            mesh.vertices[tri[1] as usize].position,
            mesh.vertices[tri[2] as usize].position,
        ]
    }

    fn triangle_area(mesh: &Mesh, tri: [u32; 3]) -> f32 {
        let [a, b, c] = positions(mesh, tri);
        (b - a).cross(c - a).length() * 0.5
    }

    fn assert_indices_in_bounds(mesh: &Mesh) {
        let count = mesh.vertices.len() as u32;
        for submesh in &mesh.submeshes {
            for &index in &submesh.indices {
                assert!(index < count, "index {index} out of {count} vertices");
            }
        }
    }

    fn assert_translation_invariant(build: impl Fn(Vec3) -> Mesh) {
        let delta = Vec3::new(1.5, -2.0, 0.75);
        let base = build(Vec3::ZERO);
        let moved = build(delta);
        assert_eq!(base.vertices.len(), moved.vertices.len());
        for (a, b) in base.vertices.iter().zip(&moved.vertices) {
            assert!((b.position - a.position - delta).length() < EPSILON);
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.uv, b.uv);
        }
        assert!(base.triangles().eq(moved.triangles()));
    }

    #[test]
    fn test_cube_unit_counts_and_coordinates() {
        let mesh = cube(Vec3::ONE, Vec3::ZERO, material());
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert_indices_in_bounds(&mesh);
        for vertex in &mesh.vertices {
            for coordinate in vertex.position.to_array() {
                assert!((coordinate.abs() - 0.5).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_cube_faces_wind_counter_clockwise() {
        let mesh = cube(Vec3::ONE, Vec3::ZERO, material());
        for tri in mesh.triangles() {
            let [a, b, c] = positions(&mesh, tri);
            let face_normal = mesh.vertices[tri[0] as usize].normal;
            let winding = (b - a).cross(c - a).normalize();
            assert!(winding.dot(face_normal) > 0.99);
        }
    }

    #[test]
    fn test_cube_triangles_have_positive_area() {
        let mesh = cube(Vec3::new(0.3, 0.3, 0.3), Vec3::ZERO, material());
        for tri in mesh.triangles() {
            assert!(triangle_area(&mesh, tri) > 0.0);
        }
    }

    #[test]
    fn test_pyramid_top_cap_is_exactly_degenerate() {
        let mesh = pyramid(Vec3::splat(0.3), Vec3::ZERO, material());
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_indices_in_bounds(&mesh);

        // Faces are emitted bottom, left, front, back, right, top. The
        // bottom face keeps both triangles; each side face keeps one (its
        // other joins two apex corners); the top face collapses entirely.
        for (i, tri) in mesh.triangles().enumerate() {
            let area = triangle_area(&mesh, tri);
            match i {
                0 | 1 | 3 | 5 | 7 | 9 => assert!(area > 0.0),
                _ => assert_eq!(area, 0.0),
            }
        }
    }

    #[test]
    fn test_pyramid_upper_corners_collapse_to_apex() {
        let center = Vec3::new(0.25, -1.0, 2.0);
        let mesh = pyramid(Vec3::splat(0.3), center, material());
        let apex = center + Vec3::new(0.0, 0.15, 0.0);
        let apex_count = mesh
            .vertices
            .iter()
            .filter(|v| v.position == apex)
            .count();
        // Two apex corners per side face plus the four of the top face.
        assert_eq!(apex_count, 12);
    }

    #[test]
    fn test_cone_counts_and_bounds() {
        let sides = 8;
        let mesh = cone(1.0, 2.0, sides, Vec3::ZERO, material());
        assert_eq!(mesh.vertices.len(), (sides as usize + 1) * 4 + 2);
        assert_eq!(mesh.index_count(), sides as usize * 12);
        assert_eq!(mesh.triangle_count(), sides as usize * 4);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn test_cone_apex_samples_are_exact() {
        let center = Vec3::new(0.5, 0.0, -0.25);
        let mesh = cone(1.0, 2.0, 8, center, material());
        let apex = center + Vec3::new(0.0, 1.0, 0.0);
        // Upper edge ring, top-cap center, and top-cap ring all sit on the
        // apex point itself.
        for vertex in mesh.vertices.iter().skip(9).take(9) {
            assert_eq!(vertex.position, apex);
            assert_eq!(vertex.normal, Vec3::Y);
        }
        for vertex in mesh.vertices.iter().skip(28) {
            assert_eq!(vertex.position, apex);
        }
    }

    #[test]
    fn test_cone_degenerate_triangles_are_exactly_zero() {
        let mesh = cone(0.15, 0.3, 8, Vec3::ZERO, material());
        // Per side the emission order is: two lateral triangles, one
        // bottom-cap triangle, one top-cap triangle. The second lateral
        // triangle joins two apex samples and the whole top fan sits on
        // the apex, so both are exactly degenerate.
        for (i, tri) in mesh.triangles().enumerate() {
            let area = triangle_area(&mesh, tri);
            match i % 4 {
                0 | 2 => assert!(area > 0.0),
                _ => assert_eq!(area, 0.0),
            }
        }
    }

    #[test]
    fn test_cylinder_counts_and_bounds() {
        let sides = 8;
        let mesh = cylinder(0.15, 0.3, sides, Vec3::ZERO, material());
        assert_eq!(mesh.vertices.len(), (sides as usize + 1) * 4 + 2);
        assert_eq!(mesh.index_count(), sides as usize * 12);
        assert_eq!(mesh.triangle_count(), sides as usize * 4);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn test_cylinder_triangles_have_positive_area() {
        let mesh = cylinder(0.15, 0.3, 8, Vec3::ZERO, material());
        for tri in mesh.triangles() {
            assert!(triangle_area(&mesh, tri) > 0.0);
        }
    }

    #[test]
    fn test_cylinder_lateral_winding_faces_outward() {
        let mesh = cylinder(0.15, 0.3, 8, Vec3::ZERO, material());
        for (i, tri) in mesh.triangles().enumerate() {
            if i % 4 > 1 {
                continue; // cap fans are checked by the cube-style cases
            }
            let [a, b, c] = positions(&mesh, tri);
            let centroid = (a + b + c) / 3.0;
            let outward = Vec3::new(centroid.x, 0.0, centroid.z);
            assert!((b - a).cross(c - a).dot(outward) > 0.0);
        }
    }

    #[test]
    fn test_sphere_vertex_count_and_unit_positions() {
        let mesh = sphere(1.0, 4, 4, Vec3::ZERO, material());
        assert_eq!(mesh.vertices.len(), 25);
        assert_indices_in_bounds(&mesh);
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - 1.0).abs() < EPSILON);
            assert!((vertex.normal.length() - 1.0).abs() < EPSILON);
            assert!((vertex.normal - vertex.position).length() < EPSILON);
        }
    }

    #[test]
    fn test_sphere_triangle_count_formula() {
        for n in [3u32, 4, 5, 8] {
            let mesh = sphere(1.0, n, n, Vec3::ZERO, material());
            assert_eq!(mesh.triangle_count(), (2 * n * (n - 1)) as usize);
        }
    }

    #[test]
    fn test_sphere_pole_rows_skip_degenerate_triangles() {
        let mesh = sphere(1.0, 4, 4, Vec3::ZERO, material());
        for tri in mesh.triangles() {
            let [a, b, c] = positions(&mesh, tri);
            assert_ne!(a, b);
            assert_ne!(b, c);
            assert_ne!(a, c);
            assert!(triangle_area(&mesh, tri) > 0.0);
        }
    }

    #[test]
    fn test_sphere_winding_faces_outward() {
        let center = Vec3::new(0.0, 3.0, 0.0);
        let mesh = sphere(1.0, 6, 6, center, material());
        for tri in mesh.triangles() {
            let [a, b, c] = positions(&mesh, tri);
            let outward = (a + b + c) / 3.0 - center;
            assert!((b - a).cross(c - a).dot(outward) > 0.0);
        }
    }

    #[test]
    fn test_center_translation_moves_positions_only() {
        let handle = material();
        assert_translation_invariant(|c| cube(Vec3::splat(0.3), c, handle));
        assert_translation_invariant(|c| pyramid(Vec3::splat(0.3), c, handle));
        assert_translation_invariant(|c| cone(0.15, 0.3, 8, c, handle));
        assert_translation_invariant(|c| cylinder(0.15, 0.3, 8, c, handle));
        assert_translation_invariant(|c| sphere(0.15, 8, 8, c, handle));
    }

    #[test]
    fn test_all_default_shapes_generate_valid_meshes() {
        for kind in ShapeKind::ALL {
            let shape = Shape::default_for(kind);
            assert_eq!(shape.kind(), kind);
            let handle = material();
            let mesh = shape.mesh(Vec3::new(0.0, 0.0, -0.5), handle);
            assert!(!mesh.vertices.is_empty());
            assert_eq!(mesh.submeshes.len(), 1);
            assert_eq!(mesh.submeshes[0].material, handle);
            assert_indices_in_bounds(&mesh);
        }
    }

    #[test]
    fn test_shape_kind_registry() {
        assert_eq!(ShapeKind::default(), ShapeKind::Cube);
        assert_eq!(ShapeKind::ALL.len(), 5);
        for kind in ShapeKind::ALL {
            assert!(!kind.label().is_empty());
            assert!(!kind.icon_name().is_empty());
        }
        assert_eq!(ShapeKind::Cube.icon_name(), "cube_outline");
    }
}
