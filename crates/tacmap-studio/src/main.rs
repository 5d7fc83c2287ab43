use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tacmap_engine::logging::{LoggingConfig, init_logging};
use tacmap_view::prelude::*;

mod scenario;

use scenario::Scenario;

const DEFAULT_SURFACE: SurfaceSize = SurfaceSize::new(1280, 1280);
const LABEL_SIZE: f32 = 12.0;

const USAGE: &str = "usage: tacmap-studio <scenario.toml> [width height]";

fn main() -> Result<()> {
    init_logging(LoggingConfig::with_level(log::LevelFilter::Info));

    let (path, surface) = parse_args(std::env::args().skip(1))?;
    let (provider, config) = Scenario::load(&path)?.into_parts();
    log::info!(
        "loaded {} ({} personnel, {} incidents)",
        path.display(),
        provider.personnel.len(),
        provider.incidents.len()
    );

    let (metrics, font) = text_metrics();
    let resources = DrawResources::new(font, LABEL_SIZE);
    let view = MapView::new(provider).with_config(config);

    let mut draw_list = DrawList::new();
    let mut painter = Painter::new(&mut draw_list, metrics.as_ref());
    view.paint(&mut painter, surface, &resources).context("rendering frame")?;

    report(&view, surface, &draw_list)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(PathBuf, SurfaceSize)> {
    let Some(path) = args.next() else {
        bail!("{USAGE}");
    };
    let surface = match (args.next(), args.next()) {
        (None, _) => DEFAULT_SURFACE,
        (Some(w), Some(h)) => SurfaceSize::new(
            w.parse().with_context(|| format!("bad width '{w}'"))?,
            h.parse().with_context(|| format!("bad height '{h}'"))?,
        ),
        (Some(_), None) => bail!("{USAGE}"),
    };
    if surface.is_empty() {
        bail!("surface must be at least 1x1, got {}x{}", surface.width, surface.height);
    }
    Ok((PathBuf::from(path), surface))
}

/// Real glyph metrics when a system font is around, fixed-width otherwise.
fn text_metrics() -> (Box<dyn TextMeasure>, FontId) {
    let mut fonts = FontSystem::new();
    let loaded = load_font().and_then(|bytes| {
        fonts
            .load_font(&bytes)
            .inspect_err(|e| log::warn!("system font unusable: {e}"))
            .ok()
    });
    match loaded {
        Some(id) => (Box::new(fonts), id),
        None => {
            log::info!("no system font found; labels measured with fixed metrics");
            (Box::new(FixedMetrics::default()), FontId::default())
        }
    }
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

fn report(view: &MapView<InMemoryProvider>, surface: SurfaceSize, list: &DrawList) -> Result<()> {
    let Some(provider) = view.provider() else {
        return Ok(());
    };
    let bounds = provider.bounds()?;

    println!("surface {}x{}", surface.width, surface.height);
    println!();
    for person in provider.all_personnel()? {
        let at = view.map_coords(person.position, surface)?;
        let note = if bounds.contains(person.position) { "" } else { "  (off map)" };
        println!(
            "  {:<10} {:<24} ({:>5}, {:>5}){note}",
            person.designation,
            person.label(),
            at.x,
            at.y
        );
    }

    println!();
    for kind in Designation::ALL {
        let open = provider.incidents_by_type(kind)?.len();
        println!("  {:<10} incidents open: {open}", kind);
    }

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for cmd in list.commands() {
        *by_kind.entry(cmd.kind()).or_default() += 1;
    }
    println!();
    println!("draw list: {} commands", list.len());
    for (kind, n) in by_kind {
        println!("  {kind:<8} {n}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn surface_defaults_when_omitted() {
        let (path, surface) = parse_args(args(&["a.toml"])).unwrap();
        assert_eq!(path, PathBuf::from("a.toml"));
        assert_eq!(surface, DEFAULT_SURFACE);
    }

    #[test]
    fn explicit_surface_is_parsed() {
        let (_, surface) = parse_args(args(&["a.toml", "800", "600"])).unwrap();
        assert_eq!(surface, SurfaceSize::new(800, 600));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["a.toml", "800"])).is_err());
        assert!(parse_args(args(&["a.toml", "wide", "600"])).is_err());
        assert!(parse_args(args(&["a.toml", "0", "600"])).is_err());
    }

    #[test]
    fn shipped_scenario_renders() {
        let scenario = Scenario::parse(include_str!("../scenarios/showground.toml")).unwrap();
        let (provider, config) = scenario.into_parts();
        let view = MapView::new(provider).with_config(config);

        let mut list = DrawList::new();
        let metrics = FixedMetrics::default();
        let mut painter = Painter::new(&mut list, &metrics);
        let res = DrawResources::new(FontId::default(), LABEL_SIZE);
        view.paint(&mut painter, DEFAULT_SURFACE, &res).unwrap();

        // overlay + grid (41) + 3 commands per person
        assert_eq!(list.len(), 41 + 4 * 3);
    }
}
