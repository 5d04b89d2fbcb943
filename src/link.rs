//! Distance links between two points, with tearing.

use crate::config::{ClothConfig, Correction};
use crate::float::Float;
use crate::point::Point;
use crate::render::RenderSink;

/// Index of a link in the cloth's link arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkId(pub(crate) usize);

impl LinkId {
    pub fn new(index: usize) -> Self {
        LinkId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of resolving one link.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Endpoints coincide; nothing to correct.
    Degenerate,
    /// At or under rest length; left alone.
    Slack,
    /// Stretched; endpoints pulled together.
    Corrected,
    /// Stretched past the tear distance: corrected once more, then detached
    /// from its owning point.
    Torn,
}

/// A distance constraint that resists stretching but not compression.
///
/// Owned by `p1`: it sits in `p1`'s link collection and nowhere else.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link<F: Float> {
    pub id: LinkId,
    pub p1: usize,
    pub p2: usize,
    pub rest_length: F,
}

impl<F: Float> Link<F> {
    pub fn new(id: LinkId, p1: usize, p2: usize, rest_length: F) -> Self {
        Link { id, p1, p2, rest_length }
    }

    /// Current distance between the endpoints.
    pub fn length(&self, points: &[Point<F>]) -> F {
        points[self.p1].pos.distance(points[self.p2].pos)
    }

    /// Pull the endpoints back toward `rest_length` if stretched.
    ///
    /// A link at or under rest length is slack and never tears, whatever the
    /// tear distance.
    pub fn resolve(&self, points: &mut [Point<F>], config: &ClothConfig<F>) -> Resolution {
        let delta = points[self.p1].pos - points[self.p2].pos;
        let dist = delta.length();

        if dist.is_near_zero(F::from_f32(1e-10)) {
            return Resolution::Degenerate;
        }
        if dist <= self.rest_length {
            return Resolution::Slack;
        }

        let diff = (self.rest_length - dist) / dist;

        let torn = dist > config.tear_distance;
        if torn {
            points[self.p1].detach(self.id);
        }

        let mul = match config.correction {
            Correction::Full => diff * F::half(),
            Correction::Eased => diff * F::half() * (F::one() - self.rest_length / dist),
        };
        let offset = delta.scale(mul);

        if !points[self.p1].is_pinned() {
            points[self.p1].pos += offset;
        }
        if !points[self.p2].is_pinned() {
            points[self.p2].pos -= offset;
        }

        if torn { Resolution::Torn } else { Resolution::Corrected }
    }

    pub fn draw<S: RenderSink<F>>(&self, points: &[Point<F>], sink: &mut S) {
        sink.segment(points[self.p1].pos, points[self.p2].pos);
    }
}
