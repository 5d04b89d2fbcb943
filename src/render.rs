//! Render handoff: the cloth describes its links as line segments.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Receives one batch of segments per frame.
///
/// `begin` and `end` bracket the batch so a host can open a single path and
/// stroke it once.
pub trait RenderSink<F: Float> {
    fn begin(&mut self) {}

    fn segment(&mut self, a: Vec2<F>, b: Vec2<F>);

    fn end(&mut self) {}
}

/// Sink that records segments, e.g. for handing to JS or for tests.
#[derive(Clone, Debug, Default)]
pub struct SegmentBuffer<F: Float> {
    segments: AllocVec<(Vec2<F>, Vec2<F>)>,
    batches: usize,
}

impl<F: Float> SegmentBuffer<F> {
    pub fn new() -> Self {
        SegmentBuffer { segments: AllocVec::new(), batches: 0 }
    }

    pub fn segments(&self) -> &[(Vec2<F>, Vec2<F>)] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Completed `begin`/`end` batches since creation.
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Returns flat [x1, y1, x2, y2, ...] per segment.
    pub fn flatten(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.segments.len() * 4);
        for (a, b) in &self.segments {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }
}

impl<F: Float> RenderSink<F> for SegmentBuffer<F> {
    /// Each batch replaces the previous frame's segments.
    fn begin(&mut self) {
        self.segments.clear();
    }

    fn segment(&mut self, a: Vec2<F>, b: Vec2<F>) {
        self.segments.push((a, b));
    }

    fn end(&mut self) {
        self.batches += 1;
    }
}
