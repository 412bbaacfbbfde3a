use anyhow::Result;
use geo::{LineString, Point};
use svg::{node::element, Document};

use crate::{config::CircleStyle, map::MapView};

/// Segments used to draw the circle overlay itself, as opposed to its polygon approximation.
const CIRCLE_OVERLAY_SEGMENTS: usize = 128;

pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewBox {
    pub fn around((x, y): (f64, f64), half_span: f64) -> Self {
        Self {
            min_x: x - half_span,
            min_y: y - half_span,
            max_x: x + half_span,
            max_y: y + half_span,
        }
    }

    pub fn include(&mut self, (x, y): (f64, f64)) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn add_margin(&mut self, margin: f64) {
        self.min_x -= margin;
        self.min_y -= margin;
        self.max_x += margin;
        self.max_y += margin;
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn get(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x - self.min_x, self.max_y - self.min_y)
    }
}

/// Longitude goes right, latitude goes up.
fn to_svg(p: Point) -> (f64, f64) {
    (p.x(), -p.y())
}

fn make_svg_path(ring: &LineString, view_box: &mut ViewBox) -> element::Path {
    let mut data = element::path::Data::new();

    for (i, p) in ring.points().enumerate() {
        let xy = to_svg(p);
        view_box.include(xy);

        data = if i == 0 { data.move_to(xy) } else { data.line_to(xy) };
    }

    data = data.close();

    element::Path::new()
        .set("d", data)
        .set("vector-effect", "non-scaling-stroke")
}

fn make_svg_circle(ring: &LineString, style: &CircleStyle, view_box: &mut ViewBox) -> element::Group {
    element::Group::new()
        .set("fill", style.fill_color.as_str())
        .set("fill-opacity", style.fill_opacity)
        .set("stroke", style.stroke_color.as_str())
        .set("stroke-opacity", style.stroke_opacity)
        .set("stroke-width", style.stroke_weight)
        .add(make_svg_path(ring, view_box))
}

fn make_svg_polygon(ring: &LineString, view_box: &mut ViewBox) -> element::Group {
    element::Group::new()
        .set("fill", "#4774AA22")
        .set("stroke", "#4774AAFF")
        .set("stroke-width", 1)
        .add(make_svg_path(ring, view_box))
}

fn make_svg_marker(position: Point, radius: f64, view_box: &mut ViewBox) -> element::Circle {
    let (cx, cy) = to_svg(position);
    view_box.include((cx, cy));

    element::Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", radius)
        .set("fill", "#EA4335FF")
        .set("stroke", "none")
}

/// Render the overlays currently shown by `view`.
pub fn make_svg(view: &MapView) -> Result<Document> {
    let half_span = 180.0 / 2f64.powi(view.zoom() as i32);
    let mut view_box = ViewBox::around(to_svg(view.center()), half_span);

    let mut doc = Document::new();

    if let Some(overlay) = view.circle() {
        let ring = overlay.circle.ring(CIRCLE_OVERLAY_SEGMENTS)?;
        doc = doc.add(make_svg_circle(&ring, &overlay.style, &mut view_box));
    }

    if let Some(feature) = view.polygon() {
        doc = doc.add(make_svg_polygon(feature.ring(), &mut view_box));
    }

    if let Some(marker) = view.marker() {
        let radius = half_span / 50.0;
        doc = doc.add(make_svg_marker(marker.position, radius, &mut view_box));
    }

    view_box.add_margin(view_box.width() / 50.0);

    Ok(doc.set("viewBox", view_box.get()))
}
