use crate::{
    event::PointPickingEvent,
    handler::{EventHandler, EventResponse},
};

/// State of a point picking session.
///
/// Picks come in pairs: every second pick is measured against the one before it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickContext {
    pick_count: usize,
    last_point: Option<[f32; 3]>,
    distances: Vec<f64>,
}

impl PickContext {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points picked so far.
    pub fn pick_count(&self) -> usize {
        self.pick_count
    }

    /// The most recently picked point.
    pub fn last_point(&self) -> Option<[f32; 3]> {
        self.last_point
    }

    /// All measured distances, oldest first.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Record a pick. Returns the distance to the previous pick when this pick closes a pair.
    pub fn record(&mut self, point: [f32; 3]) -> Option<f64> {
        let measured = match self.last_point {
            Some(last) if self.pick_count % 2 == 1 => Some(euclidean(&last, &point)),
            _ => None,
        };
        if let Some(d) = measured {
            self.distances.push(d);
        }
        self.last_point = Some(point);
        self.pick_count += 1;
        measured
    }
}

impl AsMut<PickContext> for PickContext {
    fn as_mut(&mut self) -> &mut PickContext {
        self
    }
}

fn euclidean(a: &[f32; 3], b: &[f32; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&p, &q)| {
            let d = p as f64 - q as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Measures the distance between pairs of picked points.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointDistanceHandler;

impl<C: AsMut<PickContext>> EventHandler<C> for PointDistanceHandler {
    fn on_point_picked(&mut self, ctx: &mut C, event: &PointPickingEvent) -> EventResponse {
        let [x, y, z] = event.point;
        log::info!("POINT CLICKED: {x} {y} {z}");
        if let Some(d) = ctx.as_mut().record(event.point) {
            log::info!("DISTANCE BETWEEN THE POINTS: {d}");
        }
        EventResponse::Handled
    }
}
