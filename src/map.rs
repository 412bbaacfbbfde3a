use anyhow::Result;
use geo::Point;
use log::{debug, info, warn};

use crate::{config::{CircleStyle, SessionConfig}, geocode::{GeocodeError, GeocodeResult, Geocoder}, geodesic::{GeoCircle, PolygonFeature}};


#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Point,
}

#[derive(Clone, Debug)]
pub struct CircleOverlay {
    pub circle: GeoCircle,
    pub style: CircleStyle,
}

#[derive(Clone, Debug)]
pub enum Overlay {
    Marker(Marker),
    Circle(CircleOverlay),
    Polygon(PolygonFeature),
}

impl Overlay {
    fn kind(&self) -> &'static str {
        match self {
            Overlay::Marker(_) => "marker",
            Overlay::Circle(_) => "circle",
            Overlay::Polygon(_) => "polygon",
        }
    }
}


/// What the map currently shows: a view center and at most one overlay of each kind.
#[derive(Clone, Debug)]
pub struct MapView {
    center: Point,
    zoom: u8,
    marker: Option<Marker>,
    circle: Option<CircleOverlay>,
    polygon: Option<PolygonFeature>,
}

impl MapView {
    pub fn new(center: Point, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            marker: None,
            circle: None,
            polygon: None,
        }
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Install `overlay`, removing the one of the same kind first. Returns the removed overlay.
    pub fn replace(&mut self, overlay: Overlay) -> Option<Overlay> {
        let kind = overlay.kind();

        let removed = match overlay {
            Overlay::Marker(m) => self.marker.replace(m).map(Overlay::Marker),
            Overlay::Circle(c) => self.circle.replace(c).map(Overlay::Circle),
            Overlay::Polygon(p) => self.polygon.replace(p).map(Overlay::Polygon),
        };

        if removed.is_some() {
            debug!("Removed the previous {kind}");
        }

        removed
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn circle(&self) -> Option<&CircleOverlay> {
        self.circle.as_ref()
    }

    pub fn polygon(&self) -> Option<&PolygonFeature> {
        self.polygon.as_ref()
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestSeq(u64);

/// An address lookup in flight. The radius is fixed when the lookup begins.
#[derive(Clone, Copy, Debug)]
pub struct Lookup {
    pub seq: RequestSeq,
    pub radius: f64,
}

#[derive(Clone, Debug)]
pub enum LookupOutcome {
    Shown(PolygonFeature),
    Failed(GeocodeError),
    /// A newer lookup was issued before this one completed.
    Stale,
}


pub struct MapSession {
    view: MapView,
    latest: u64,
    segments: Option<usize>,
    radius_scale: f64,
    style: CircleStyle,
}

impl MapSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            view: MapView::new(Point::new(0.0, 0.0), config.zoom),
            latest: 0,
            segments: config.segments,
            radius_scale: config.radius_scale,
            style: config.circle_style.clone(),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn begin_lookup(&mut self, slider: u32) -> Lookup {
        self.latest += 1;

        Lookup {
            seq: RequestSeq(self.latest),
            radius: slider as f64 * self.radius_scale,
        }
    }

    pub fn complete(&mut self, lookup: Lookup, result: Result<GeocodeResult, GeocodeError>) -> Result<LookupOutcome> {
        if lookup.seq != RequestSeq(self.latest) {
            warn!("Dropping the result of lookup {:?}, lookup {} superseded it", lookup.seq, self.latest);
            return Ok(LookupOutcome::Stale);
        }

        let found = match result {
            Ok(found) => found,
            Err(status) => {
                warn!("{} ({status})", status.user_message());
                return Ok(LookupOutcome::Failed(status));
            },
        };

        let circle = GeoCircle::new(found.location, lookup.radius)?;
        let feature = circle.clone().into_polygon(self.segments)?;

        info!("Found {} at {:?}, circling {} m", found.name, found.location.x_y(), circle.radius());

        self.view.set_center(found.location);
        self.view.replace(Overlay::Marker(Marker { position: found.location }));
        self.view.replace(Overlay::Circle(CircleOverlay { circle, style: self.style.clone() }));
        self.view.replace(Overlay::Polygon(feature.clone()));

        Ok(LookupOutcome::Shown(feature))
    }

    pub fn find(&mut self, geocoder: &impl Geocoder, address: &str, slider: u32) -> Result<LookupOutcome> {
        let lookup = self.begin_lookup(slider);
        self.complete(lookup, geocoder.geocode(address))
    }
}
