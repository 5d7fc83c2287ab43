use tacmap_view::prelude::*;

// ── fixtures ──────────────────────────────────────────────────────────────

const SURFACE: SurfaceSize = SurfaceSize::new(1000, 1000);

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

fn at(lat: i64, lon: i64) -> Position {
    Position::new(d(lat), d(lon))
}

fn square() -> GeoBox {
    GeoBox::new(d(0), d(10), d(0), d(10))
}

fn icon() -> Icon {
    Icon::new("cross", 20, 20)
}

/// 10 px per character, 10 px line height.
fn metrics() -> FixedMetrics {
    FixedMetrics::new(10.0, 10.0)
}

fn resources() -> DrawResources {
    DrawResources::new(FontId::default(), 12.0)
}

fn render<P: MapProvider>(view: &MapView<P>) -> Result<DrawList, RenderError> {
    let mut list = DrawList::new();
    let metrics = metrics();
    let mut painter = Painter::new(&mut list, &metrics);
    view.paint(&mut painter, SURFACE, &resources())?;
    Ok(list)
}

fn polygons(list: &DrawList) -> Vec<&tacmap_engine::scene::shapes::PolygonCmd> {
    list.commands()
        .filter_map(|c| match c {
            DrawCmd::Polygon(p) => Some(p),
            _ => None,
        })
        .collect()
}

fn texts_on(list: &DrawList, z: ZIndex) -> Vec<String> {
    list.items()
        .iter()
        .filter(|i| i.key.z == z)
        .filter_map(|i| match &i.cmd {
            DrawCmd::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect()
}

/// Provider whose store is unreachable.
struct Offline;

impl MapProvider for Offline {
    fn all_personnel(&self) -> ProviderResult<Vec<Personnel>> {
        Err(ProviderError::with_source(
            "personnel query",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db down"),
        ))
    }
    fn all_current_incidents(&self) -> ProviderResult<Vec<Incident>> {
        Ok(Vec::new())
    }
    fn latitude_start(&self) -> ProviderResult<Decimal> {
        Ok(d(0))
    }
    fn latitude_end(&self) -> ProviderResult<Decimal> {
        Ok(d(10))
    }
    fn longitude_start(&self) -> ProviderResult<Decimal> {
        Ok(d(0))
    }
    fn longitude_end(&self) -> ProviderResult<Decimal> {
        Ok(d(10))
    }
}

// ── projection end to end ─────────────────────────────────────────────────

#[test]
fn marker_apexes_land_on_projected_positions() {
    let provider = InMemoryProvider::new(square())
        .with_person("centre", Designation::Medical, at(5, 5), icon())
        .with_person("start", Designation::Security, at(0, 0), icon())
        .with_person("end", Designation::Medical, at(10, 10), icon());
    let list = render(&MapView::new(provider)).unwrap();

    let apexes: Vec<Vec2> = polygons(&list).iter().map(|p| p.points[0]).collect();
    assert_eq!(
        apexes,
        [Vec2::new(500.0, 500.0), Vec2::new(0.0, 0.0), Vec2::new(1000.0, 1000.0)]
    );
}

#[test]
fn view_projection_matches_free_function() {
    let view = MapView::new(InMemoryProvider::new(square()));
    for (lat, lon) in [(1, 9), (7, 3), (-2, 12)] {
        assert_eq!(
            view.map_coords(at(lat, lon), SURFACE).unwrap(),
            project(at(lat, lon), &square(), SURFACE).unwrap()
        );
    }
}

// ── frame structure ───────────────────────────────────────────────────────

#[test]
fn overlay_dims_the_whole_surface_first() {
    let list = render(&MapView::new(InMemoryProvider::new(square()))).unwrap();
    let Some(DrawCmd::Rect(rect)) = list.commands().next() else {
        panic!("first command should be the overlay");
    };
    assert_eq!(rect.rect, Rect::new(0.0, 0.0, 1000.0, 1000.0));
    assert_eq!(rect.color.to_srgb_u8(), [0, 0, 0, 100]);
}

#[test]
fn grid_has_ten_lines_each_way_with_labels() {
    let list = render(&MapView::new(InMemoryProvider::new(square()))).unwrap();

    let lines: Vec<_> = list
        .commands()
        .filter_map(|c| match c {
            DrawCmd::Line(l) => Some(l),
            _ => None,
        })
        .collect();
    let horizontal: Vec<f32> =
        lines.iter().filter(|l| l.is_horizontal()).map(|l| l.from.y).collect();
    let vertical: Vec<f32> =
        lines.iter().filter(|l| l.is_vertical()).map(|l| l.from.x).collect();

    let expected: Vec<f32> = (1..=10).map(|i| (i * 100) as f32).collect();
    assert_eq!(horizontal, expected);
    assert_eq!(vertical, expected);

    let labels = texts_on(&list, ZIndex::GRID);
    let rows: Vec<&str> = labels.iter().step_by(2).map(String::as_str).collect();
    let cols: Vec<&str> = labels.iter().skip(1).step_by(2).map(String::as_str).collect();
    assert_eq!(rows, ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
    assert_eq!(cols, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
}

#[test]
fn empty_provider_draws_overlay_and_grid_only() {
    let list = render(&MapView::new(InMemoryProvider::new(square()))).unwrap();
    // 1 overlay + 10 × (2 lines + 2 labels)
    assert_eq!(list.len(), 41);
    assert!(polygons(&list).is_empty());
}

// ── markers ───────────────────────────────────────────────────────────────

#[test]
fn callout_box_is_56_by_24_for_reference_sizes() {
    // "ABC" measures 30 × 10 with the fixture metrics.
    let provider =
        InMemoryProvider::new(square()).with_person("ABC", Designation::Medical, at(5, 5), icon());
    let list = render(&MapView::new(provider)).unwrap();

    let outline = &polygons(&list)[0].points;
    let bounds = Rect::bounding(outline).unwrap();
    assert_eq!(bounds.size, Vec2::new(56.0, 24.0 + 5.0));
    assert_eq!(outline[0], Vec2::new(500.0, 500.0));
}

#[test]
fn marker_is_polygon_then_icon_then_label() {
    let provider = InMemoryProvider::new(square())
        .with_person("A&&B", Designation::Security, at(5, 5), icon());
    let list = render(&MapView::new(provider)).unwrap();

    let markers: Vec<&DrawCmd> = list
        .items()
        .iter()
        .filter(|i| i.key.z == ZIndex::MARKERS)
        .map(|i| &i.cmd)
        .collect();
    assert_eq!(markers.iter().map(|c| c.kind()).collect::<Vec<_>>(), ["polygon", "image", "text"]);

    let DrawCmd::Polygon(poly) = markers[0] else { unreachable!() };
    assert_eq!(poly.fill, Some(Color::WHITE));
    assert_eq!(poly.stroke.map(|s| s.color), Some(Color::BLACK));

    let DrawCmd::Image(img) = markers[1] else { unreachable!() };
    assert_eq!(img.image, "cross");
    assert_eq!(img.size, Vec2::new(20.0, 20.0));

    let DrawCmd::Text(label) = markers[2] else { unreachable!() };
    assert_eq!(label.text, "A&B");
    assert_eq!(label.color, Color::BLACK);
}

#[test]
fn custom_palette_reaches_the_frame() {
    let red = Color::from_srgb_u8(255, 0, 0, 255);
    let dim = Color::from_srgb_u8(0, 0, 40, 160);
    let res = resources()
        .with_darken(dim)
        .with_marker_colors(Color::BLACK, red, Color::WHITE);
    let provider =
        InMemoryProvider::new(square()).with_person("ABC", Designation::Medical, at(5, 5), icon());

    let mut list = DrawList::new();
    let metrics = metrics();
    let mut painter = Painter::new(&mut list, &metrics);
    MapView::new(provider).paint(&mut painter, SURFACE, &res).unwrap();

    let cmds: Vec<&DrawCmd> = list.commands().collect();
    let DrawCmd::Rect(overlay) = cmds[0] else { panic!("overlay first") };
    assert_eq!(overlay.color, dim);

    let markers = &cmds[cmds.len() - 3..];
    let DrawCmd::Polygon(poly) = markers[0] else { unreachable!() };
    assert_eq!(poly.fill, Some(Color::BLACK));
    assert_eq!(poly.stroke.map(|s| s.color), Some(red));

    // Box spans x 472..528, y 471..495; the icon sits 2 px in, centred vertically.
    let DrawCmd::Image(img) = markers[1] else { unreachable!() };
    assert_eq!(img.dest_rect(), Rect::new(474.0, 473.0, 20.0, 20.0));

    let DrawCmd::Text(label) = markers[2] else { unreachable!() };
    assert_eq!(label.color, Color::WHITE);
}

#[test]
fn markers_follow_provider_order() {
    let provider = InMemoryProvider::new(square())
        .with_person("first", Designation::Medical, at(5, 5), icon())
        .with_person("second", Designation::Medical, at(5, 5), icon());
    let list = render(&MapView::new(provider)).unwrap();
    assert_eq!(texts_on(&list, ZIndex::MARKERS), ["first", "second"]);
}

#[test]
fn markers_are_clipped_to_the_surface() {
    let provider = InMemoryProvider::new(square())
        .with_person("offscreen", Designation::Medical, at(-5, 20), icon());
    let list = render(&MapView::new(provider)).unwrap();

    let marker = list.items().iter().find(|i| i.key.z == ZIndex::MARKERS).unwrap();
    assert_eq!(marker.clip_rect, Some(SURFACE.rect()));
    assert_eq!(polygons(&list)[0].points[0], Vec2::new(2000.0, -500.0));
    assert_eq!(list.clip_depth(), 0);
}

#[test]
fn marker_too_far_off_map_is_skipped() {
    let far = Position::new(d(5), Decimal::new(2_147_483_640, 2));
    let provider = InMemoryProvider::new(square())
        .with_person("far", Designation::Medical, far, icon())
        .with_person("near", Designation::Medical, at(5, 5), icon());
    let view = MapView::new(provider);

    assert_eq!(view.map_coords(far, SURFACE).unwrap(), PixelPoint::new(2_147_483_640, 500));
    let list = render(&view).unwrap();
    assert_eq!(texts_on(&list, ZIndex::MARKERS), ["near"]);
    assert_eq!(list.clip_depth(), 0);
}

// ── failures ──────────────────────────────────────────────────────────────

#[test]
fn provider_failure_propagates() {
    let mut list = DrawList::new();
    let metrics = metrics();
    let mut painter = Painter::new(&mut list, &metrics);

    let err = MapView::new(Offline).paint(&mut painter, SURFACE, &resources()).unwrap_err();
    assert!(matches!(err, RenderError::Provider(_)));
    assert!(err.to_string().contains("personnel query"));
    assert_eq!(list.clip_depth(), 0);
}

#[test]
fn degenerate_bounds_fail_the_frame() {
    let flat = GeoBox::new(d(3), d(3), d(0), d(10));
    let provider =
        InMemoryProvider::new(flat).with_person("x", Designation::Medical, at(3, 5), icon());

    let err = render(&MapView::new(provider)).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Projection(ProjectionError::DegenerateBounds { axis: Axis::Latitude })
    ));
}

#[test]
fn boxed_provider_renders_like_concrete_one() {
    let provider =
        InMemoryProvider::new(square()).with_person("M1", Designation::Medical, at(5, 5), icon());
    let boxed: Box<dyn MapProvider> = Box::new(provider.clone());

    let a = render(&MapView::new(provider)).unwrap();
    let b = render(&MapView::new(boxed)).unwrap();
    assert_eq!(a.items(), b.items());
}
