use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tribounce::renderer::core::edge::{CpuEdgeBackend, SimdEdgeBackend};
use tribounce::renderer::core::math::MAX_COORDINATE;
use tribounce::*;

static CPU: CpuEdgeBackend = CpuEdgeBackend;

///
/// Todas las variantes, incluida la vectorizada sobre el backend escalar de carriles
///
fn all_rasterizers() -> Vec<Rasterizer> {
    let mut rasterizers: Vec<Rasterizer> = RasterStrategy::ALL.iter().map(|s| Rasterizer::new(*s)).collect();
    rasterizers.push(Rasterizer::with_backend(RasterStrategy::Vectorized, &CPU));
    if let Some(simd) = SimdEdgeBackend::detect() {
        let simd: &'static SimdEdgeBackend = Box::leak(Box::new(simd));
        rasterizers.push(Rasterizer::with_backend(RasterStrategy::Vectorized, simd));
    }
    rasterizers
}

fn random_triangle(rng: &mut StdRng, width: i32, height: i32) -> Triangle {
    // Vértices que pueden salirse del lienzo por cualquier lado
    let mut point = || Point2i::new(rng.gen_range(-width / 2..width * 3 / 2), rng.gen_range(-height / 2..height * 3 / 2));
    let (a, b, c) = (point(), point(), point());
    let color = Color::new(rng.gen(), rng.gen(), rng.gen());
    Triangle::new(a, b, c, color)
}

fn rasterize_one(rasterizer: &Rasterizer, triangle: &Triangle, width: usize, height: usize) -> Framebuffer {
    let mut framebuffer = Framebuffer::new(width, height).unwrap();
    rasterizer.rasterize(triangle, &mut framebuffer);
    framebuffer
}

#[test]
fn all_strategies_paint_identical_pixels() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let rasterizers = all_rasterizers();

    for _ in 0..400 {
        let width = rng.gen_range(1..70);
        let height = rng.gen_range(1..50);
        let triangle = random_triangle(&mut rng, width as i32, height as i32);

        let reference = rasterize_one(&rasterizers[0], &triangle, width, height);
        for rasterizer in &rasterizers[1..] {
            let framebuffer = rasterize_one(rasterizer, &triangle, width, height);
            assert_eq!(framebuffer, reference, "{:?} on {}x{} with {:?}", rasterizer, width, height, triangle);
        }
    }
}

#[test]
fn small_and_thin_triangles_are_equivalent() {
    let mut rng = StdRng::seed_from_u64(17);
    let rasterizers = all_rasterizers();

    for _ in 0..400 {
        let x = rng.gen_range(0..30);
        let y = rng.gen_range(0..30);
        let mut near = || Point2i::new(x + rng.gen_range(-3..4), y + rng.gen_range(-3..4));
        let triangle = Triangle::new(near(), near(), near(), Color::WHITE);

        let reference = rasterize_one(&rasterizers[0], &triangle, 32, 32);
        for rasterizer in &rasterizers[1..] {
            assert_eq!(rasterize_one(rasterizer, &triangle, 32, 32), reference, "{:?}", triangle);
        }
    }
}

#[test]
fn winding_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let triangle = random_triangle(&mut rng, 48, 32);
        for rasterizer in all_rasterizers() {
            assert_eq!(
                rasterize_one(&rasterizer, &triangle, 48, 32),
                rasterize_one(&rasterizer, &triangle.reversed(), 48, 32)
            );
        }
    }
}

#[test]
fn no_writes_outside_canvas() {
    // Una escritura fuera del lienzo haría fallar el índice del framebuffer
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let triangle = random_triangle(&mut rng, 24, 24);
        for rasterizer in all_rasterizers() {
            let framebuffer = rasterize_one(&rasterizer, &triangle, 24, 24);
            assert_eq!(framebuffer.len(), 24 * 24);

            for y in 0..24 {
                for x in 0..24 {
                    let color = framebuffer.get(x, y);
                    assert!(color == Color::BLACK || color == triangle.color);
                }
            }
        }
    }
}

#[test]
fn clipped_triangle_matches_unclipped_interior() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let triangle = random_triangle(&mut rng, 20, 20);

        // El mismo triángulo desplazado dentro de un lienzo mayor
        let [a, b, c] = triangle.vertices;
        let shift = |p: Point2i| Point2i::new(p.x + 20, p.y + 20);
        let shifted = Triangle::new(shift(a), shift(b), shift(c), triangle.color);

        for rasterizer in all_rasterizers() {
            let small = rasterize_one(&rasterizer, &triangle, 20, 20);
            let large = rasterize_one(&rasterizer, &shifted, 60, 60);
            for y in 0..20 {
                for x in 0..20 {
                    assert_eq!(small.get(x, y), large.get(x + 20, y + 20));
                }
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let batch: TriangleBatch = (0..50).map(|_| random_triangle(&mut rng, 64, 48)).collect();

    for strategy in RasterStrategy::ALL {
        let mut first = Framebuffer::new(64, 48).unwrap();
        let mut second = Framebuffer::new(64, 48).unwrap();
        render(&batch, &mut first, strategy);
        render(&batch, &mut second, strategy);
        assert_eq!(first, second);
    }
}

#[test]
fn batch_render_is_equivalent_across_strategies() {
    let mut rng = StdRng::seed_from_u64(1234);
    let batch: TriangleBatch = (0..80).map(|_| random_triangle(&mut rng, 96, 64)).collect();

    let mut reference = Framebuffer::new(96, 64).unwrap();
    render(&batch, &mut reference, RasterStrategy::RowMajor);

    for strategy in [RasterStrategy::Boustrophedon, RasterStrategy::Vectorized] {
        let mut framebuffer = Framebuffer::new(96, 64).unwrap();
        render(&batch, &mut framebuffer, strategy);
        assert_eq!(framebuffer, reference, "{}", strategy);
    }
}

#[test]
fn second_triangle_wins_on_overlap() {
    let first = Triangle::new(Point2i::new(0, 0), Point2i::new(20, 0), Point2i::new(0, 20), Color::new(1.0, 0.0, 0.0));
    let second = Triangle::new(Point2i::new(20, 20), Point2i::new(0, 20), Point2i::new(20, 0), Color::new(0.0, 1.0, 0.0));

    let mut only_first = Framebuffer::new(20, 20).unwrap();
    render(&vec![first].into(), &mut only_first, RasterStrategy::RowMajor);
    let mut only_second = Framebuffer::new(20, 20).unwrap();
    render(&vec![second].into(), &mut only_second, RasterStrategy::RowMajor);

    for strategy in RasterStrategy::ALL {
        let mut framebuffer = Framebuffer::new(20, 20).unwrap();
        render(&vec![first, second].into(), &mut framebuffer, strategy);

        let mut shared = 0;
        for y in 0..20 {
            for x in 0..20 {
                if only_first.get(x, y) != Color::BLACK && only_second.get(x, y) != Color::BLACK {
                    assert_eq!(framebuffer.get(x, y), second.color);
                    shared += 1;
                }
            }
        }
        // Comparten la diagonal
        assert!(shared > 0);
    }
}

#[test]
fn concrete_right_triangle() {
    let triangle = Triangle::new(Point2i::new(0, 0), Point2i::new(4, 0), Point2i::new(0, 4), Color::WHITE);
    let expected = [(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (0, 3)];

    for rasterizer in all_rasterizers() {
        let framebuffer = rasterize_one(&rasterizer, &triangle, 8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let expected_color = if expected.contains(&(x, y)) { Color::WHITE } else { Color::BLACK };
                assert_eq!(framebuffer.get(x, y), expected_color, "({}, {}) with {:?}", x, y, rasterizer);
            }
        }
    }
}

#[test]
fn collinear_vertices_paint_nothing_on_a_row() {
    let triangle = Triangle::new(Point2i::new(0, 0), Point2i::new(2, 0), Point2i::new(4, 0), Color::WHITE);
    for rasterizer in all_rasterizers() {
        let framebuffer = rasterize_one(&rasterizer, &triangle, 8, 8);
        assert!(framebuffer.pixels().iter().all(|c| *c == Color::BLACK));
    }
}

#[test]
fn diagonal_collinear_vertices_paint_a_line() {
    let triangle = Triangle::new(Point2i::new(0, 0), Point2i::new(2, 2), Point2i::new(4, 4), Color::WHITE);
    for rasterizer in all_rasterizers() {
        let framebuffer = rasterize_one(&rasterizer, &triangle, 8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let expected_color = if x == y && x < 4 { Color::WHITE } else { Color::BLACK };
                assert_eq!(framebuffer.get(x, y), expected_color, "({}, {}) with {:?}", x, y, rasterizer);
            }
        }
    }
}

#[test]
fn extreme_coordinates_stay_in_range() {
    // Con overflow-checks activo, un desbordamiento en las aristas entra en pánico
    let m = MAX_COORDINATE;
    let axis = [-m, 0, m];
    let points: Vec<Point2i> = axis.iter().flat_map(|&x| axis.iter().map(move |&y| Point2i::new(x, y))).collect();
    let canvases = [(m as usize, 1), (1, m as usize), (m as usize, 2)];
    let rasterizers = all_rasterizers();

    for &(width, height) in &canvases {
        for &a in &points {
            for &b in &points {
                for &c in &points {
                    let triangle = Triangle::new(a, b, c, Color::WHITE);
                    let reference = rasterize_one(&rasterizers[0], &triangle, width, height);
                    for rasterizer in &rasterizers[1..] {
                        assert_eq!(
                            rasterize_one(rasterizer, &triangle, width, height),
                            reference,
                            "{:?} on {}x{} with {:?}",
                            rasterizer,
                            width,
                            height,
                            triangle
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn saturated_vertices_cover_the_canvas() {
    let far = Point2i::from_vector(&Vector3::new(1.0e9, -1.0e9, 0.0));
    assert_eq!(far, Point2i::new(MAX_COORDINATE, -MAX_COORDINATE));

    let huge = Triangle::new(
        Point2i::from_vector(&Vector3::new(-1.0e9, 1.0e9, 0.0)),
        Point2i::from_vector(&Vector3::new(1.0e9, 1.0e9, 0.0)),
        Point2i::from_vector(&Vector3::new(1.0e9, -1.0e9, 0.0)),
        Color::WHITE,
    );
    let width = MAX_COORDINATE as usize;
    for rasterizer in all_rasterizers() {
        let framebuffer = rasterize_one(&rasterizer, &huge, width, 2);
        assert!(framebuffer.pixels().iter().all(|c| *c == Color::WHITE), "{:?}", rasterizer);
    }
}
