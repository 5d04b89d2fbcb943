use tatter::{
    ClothConfig, ClothGrid, FrameDriver, GridConfig, NoOpStepObserver, PointerButton,
    PointerTracker, SegmentBuffer, Viewport,
};
use wasm_bindgen::prelude::*;

fn js_error(err: tatter::ClothError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothGrid<f32>,
    driver: FrameDriver<f32>,
    pointer: PointerTracker<f32>,
    segments: SegmentBuffer<f32>,
}

impl ClothDemo {
    fn build(width: f32, height: f32, config: ClothConfig<f32>) -> Result<ClothDemo, JsValue> {
        let cloth = ClothGrid::new(&GridConfig::default(), config, Viewport::new(width, height))
            .map_err(js_error)?;
        Ok(ClothDemo {
            cloth,
            driver: FrameDriver::measured(1.0 / 30.0).map_err(js_error)?,
            pointer: PointerTracker::new(),
            segments: SegmentBuffer::new(),
        })
    }
}

#[wasm_bindgen]
impl ClothDemo {
    /// Default cloth centered in a `width` x `height` canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<ClothDemo, JsValue> {
        ClothDemo::build(width, height, ClothConfig::new())
    }

    /// The heavier, quantized variant with mirrored bounds.
    pub fn classic(width: f32, height: f32) -> Result<ClothDemo, JsValue> {
        ClothDemo::build(width, height, ClothConfig::classic())
    }

    /// Canvas top-left in client coordinates (from `getBoundingClientRect`).
    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.pointer.set_origin(tatter::Vec2::new(left, top));
    }

    /// `which` is the 1-based mouse button code.
    pub fn pointer_down(&mut self, x: f32, y: f32, which: u32) {
        self.pointer.press(x, y, PointerButton::from_which(which));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    /// Returns true: call `preventDefault` on the contextmenu event.
    pub fn context_menu(&self) -> bool {
        self.pointer.context_menu()
    }

    /// Advance one animation frame; `elapsed` is seconds since the last one.
    pub fn update(&mut self, elapsed: f32) -> bool {
        self.driver.frame(
            &mut self.cloth,
            elapsed,
            self.pointer.state(),
            &mut self.segments,
            &mut NoOpStepObserver,
        )
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.cloth.set_viewport(Viewport::new(width, height)).map_err(js_error)
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Returns flat [x1, y1, x2, y2, ...] for every link drawn last frame.
    /// Stroke them as one path.
    pub fn segments(&self) -> Vec<f32> {
        self.segments.flatten()
    }

    pub fn link_count(&self) -> usize {
        self.cloth.link_count()
    }

    pub fn point_count(&self) -> usize {
        self.cloth.point_count()
    }
}
