//! Analog clock face composited from a background, three rotating hand
//! images and a foreground overlay.
//!
//! The widget never reads the system clock: an external timer sets `hour`,
//! `minute` and `second` and requests a repaint.

use anyhow::Result;
use log::{debug, warn};
use std::any::Any;
use std::f64::consts::PI;

use time_clock_core::{
    Bitmap, Canvas, ImageResolver, Rect, Value, Widget, WidgetError, WidgetId, WidgetTree,
};
use time_clock_types::clock::props;
use time_clock_types::{ClockFaceConfig, TIME_CLOCK_PROPERTIES, WIDGET_TYPE_TIME_CLOCK};

/// Distance of the second hand image from the top of the box, and of its
/// pivot from the box centre
const SECOND_HAND_INSET: f64 = 2.0;

/// One of the three rotating hands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// Where a hand image sits in the box before rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPlacement {
    /// Top-left corner of the unrotated image, relative to the box
    pub offset: (f64, f64),
    /// Rotation pivot, relative to the image's top-left corner
    pub anchor: (f64, f64),
}

impl HandPlacement {
    /// Pivot in box coordinates
    pub fn pivot(&self) -> (f64, f64) {
        (
            self.offset.0 + self.anchor.0,
            self.offset.1 + self.anchor.1,
        )
    }
}

impl Hand {
    /// Paint order
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Number of units in one revolution
    pub fn period(self) -> f64 {
        match self {
            Hand::Hour => 12.0,
            Hand::Minute | Hand::Second => 60.0,
        }
    }

    /// Clockwise rotation in radians, zero at 12 o'clock.
    ///
    /// Out-of-range values simply rotate past one revolution.
    pub fn rotation(self, value: i32) -> f64 {
        2.0 * PI * value as f64 / self.period()
    }

    /// Placement of a `bitmap_w x bitmap_h` hand image in `dst`.
    ///
    /// Hour and minute images point up with their pivot `bitmap_w / 2` above
    /// the bottom edge. Second hand images start `SECOND_HAND_INSET` below the
    /// top of the box. Either way the pivot lands on the box centre.
    pub fn placement(self, bitmap_w: f64, bitmap_h: f64, dst: Rect) -> HandPlacement {
        let dx = (dst.w - bitmap_w) / 2.0;
        match self {
            Hand::Hour | Hand::Minute => HandPlacement {
                offset: (dx, dst.h / 2.0 + bitmap_w / 2.0 - bitmap_h),
                anchor: (bitmap_w / 2.0, bitmap_h - bitmap_w / 2.0),
            },
            Hand::Second => HandPlacement {
                offset: (dx, SECOND_HAND_INSET),
                anchor: (bitmap_w / 2.0, dst.h / 2.0 - SECOND_HAND_INSET),
            },
        }
    }

    fn label(self) -> &'static str {
        match self {
            Hand::Hour => "hour hand",
            Hand::Minute => "minute hand",
            Hand::Second => "second hand",
        }
    }
}

/// Analog clock face widget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockFace {
    hour: i32,
    minute: i32,
    second: i32,
    bg_image: Option<String>,
    hour_image: Option<String>,
    minute_image: Option<String>,
    second_image: Option<String>,
    /// Foreground overlay
    image: Option<String>,
}

impl ClockFace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ClockFaceConfig) -> Self {
        let mut clock = Self::default();
        clock.apply_config(config);
        clock
    }

    pub fn apply_config(&mut self, config: &ClockFaceConfig) {
        self.hour = config.hour;
        self.minute = config.minute;
        self.second = config.second;
        self.bg_image = config.bg_image.clone();
        self.hour_image = config.hour_image.clone();
        self.minute_image = config.minute_image.clone();
        self.second_image = config.second_image.clone();
        self.image = config.image.clone();
    }

    pub fn to_config(&self) -> ClockFaceConfig {
        ClockFaceConfig {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            bg_image: self.bg_image.clone(),
            hour_image: self.hour_image.clone(),
            minute_image: self.minute_image.clone(),
            second_image: self.second_image.clone(),
            image: self.image.clone(),
        }
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn second(&self) -> i32 {
        self.second
    }

    pub fn bg_image(&self) -> Option<&str> {
        self.bg_image.as_deref()
    }

    pub fn hour_image(&self) -> Option<&str> {
        self.hour_image.as_deref()
    }

    pub fn minute_image(&self) -> Option<&str> {
        self.minute_image.as_deref()
    }

    pub fn second_image(&self) -> Option<&str> {
        self.second_image.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_hour(&mut self, hour: i32) {
        self.hour = hour;
    }

    pub fn set_minute(&mut self, minute: i32) {
        self.minute = minute;
    }

    pub fn set_second(&mut self, second: i32) {
        self.second = second;
    }

    pub fn set_bg_image(&mut self, name: Option<&str>) {
        self.bg_image = name.map(str::to_string);
    }

    pub fn set_hour_image(&mut self, name: Option<&str>) {
        self.hour_image = name.map(str::to_string);
    }

    pub fn set_minute_image(&mut self, name: Option<&str>) {
        self.minute_image = name.map(str::to_string);
    }

    pub fn set_second_image(&mut self, name: Option<&str>) {
        self.second_image = name.map(str::to_string);
    }

    pub fn set_image(&mut self, name: Option<&str>) {
        self.image = name.map(str::to_string);
    }

    fn hand_value(&self, hand: Hand) -> i32 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    fn hand_image(&self, hand: Hand) -> Option<&str> {
        match hand {
            Hand::Hour => self.hour_image(),
            Hand::Minute => self.minute_image(),
            Hand::Second => self.second_image(),
        }
    }

    fn draw_hand(
        &self,
        canvas: &mut dyn Canvas,
        hand: Hand,
        bitmap: &Bitmap,
        dst: Rect,
    ) -> Result<()> {
        let placement = hand.placement(bitmap.width(), bitmap.height(), dst);
        let (ox, oy) = canvas.origin();
        let (anchor_x, anchor_y) = placement.anchor;
        let full = Rect::from_size(bitmap.width(), bitmap.height());

        canvas.save()?;
        canvas.translate(
            ox + dst.x + placement.offset.0,
            oy + dst.y + placement.offset.1,
        );
        canvas.translate(anchor_x, anchor_y);
        canvas.rotate(hand.rotation(self.hand_value(hand)));
        canvas.translate(-anchor_x, -anchor_y);
        let drawn = canvas.draw_image(bitmap, full, full);
        canvas.restore()?;

        drawn
    }
}

/// Resolve one layer's image, logging and skipping failures
fn load_layer(images: &dyn ImageResolver, layer: &str, name: Option<&str>) -> Option<Bitmap> {
    let name = name?;
    match images.load(name) {
        Ok(bitmap) => Some(bitmap),
        Err(e) => {
            debug!("Skipping {} layer: {}", layer, e);
            None
        }
    }
}

fn draw_centered_layer(canvas: &mut dyn Canvas, layer: &str, bitmap: &Bitmap, dst: Rect) {
    if let Err(e) = canvas.draw_image_centered(bitmap, dst) {
        warn!("Failed to draw {} layer '{}': {}", layer, bitmap.name(), e);
    }
}

fn int_value(name: &str, value: &Value) -> Result<i32, WidgetError> {
    value
        .as_int()
        .ok_or_else(|| WidgetError::invalid(format!("{} expects an integer, got {}", name, value)))
}

fn image_value<'a>(name: &str, value: &'a Value) -> Result<Option<&'a str>, WidgetError> {
    match value {
        Value::Str(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        Value::Int(_) => Err(WidgetError::invalid(format!(
            "{} expects an image name, got {}",
            name, value
        ))),
    }
}

impl Widget for ClockFace {
    fn widget_type(&self) -> &str {
        WIDGET_TYPE_TIME_CLOCK
    }

    fn on_paint_self(
        &self,
        canvas: &mut dyn Canvas,
        bounds: Rect,
        images: &dyn ImageResolver,
    ) -> Result<(), WidgetError> {
        let dst = Rect::from_size(bounds.w, bounds.h);

        if let Some(bitmap) = load_layer(images, "background", self.bg_image()) {
            draw_centered_layer(canvas, "background", &bitmap, dst);
        }

        for hand in Hand::ALL {
            if let Some(bitmap) = load_layer(images, hand.label(), self.hand_image(hand)) {
                if let Err(e) = self.draw_hand(canvas, hand, &bitmap, dst) {
                    warn!("Failed to draw {} '{}': {}", hand.label(), bitmap.name(), e);
                }
            }
        }

        if let Some(bitmap) = load_layer(images, "overlay", self.image()) {
            draw_centered_layer(canvas, "overlay", &bitmap, dst);
        }

        Ok(())
    }

    fn get_prop(&self, name: &str) -> Result<Value, WidgetError> {
        let value = match name {
            props::HOUR => Value::Int(self.hour),
            props::MINUTE => Value::Int(self.minute),
            props::SECOND => Value::Int(self.second),
            props::HOUR_IMAGE => Value::from(self.hour_image()),
            props::MINUTE_IMAGE => Value::from(self.minute_image()),
            props::SECOND_IMAGE => Value::from(self.second_image()),
            props::BG_IMAGE => Value::from(self.bg_image()),
            props::IMAGE => Value::from(self.image()),
            _ => return Err(WidgetError::NotFound(name.to_string())),
        };
        Ok(value)
    }

    fn set_prop(&mut self, name: &str, value: &Value) -> Result<(), WidgetError> {
        match name {
            props::HOUR => self.set_hour(int_value(name, value)?),
            props::MINUTE => self.set_minute(int_value(name, value)?),
            props::SECOND => self.set_second(int_value(name, value)?),
            props::HOUR_IMAGE => self.set_hour_image(image_value(name, value)?),
            props::MINUTE_IMAGE => self.set_minute_image(image_value(name, value)?),
            props::SECOND_IMAGE => self.set_second_image(image_value(name, value)?),
            props::BG_IMAGE => self.set_bg_image(image_value(name, value)?),
            props::IMAGE => self.set_image(image_value(name, value)?),
            _ => return Err(WidgetError::NotFound(name.to_string())),
        }
        Ok(())
    }

    fn destroy(&mut self) {
        self.bg_image = None;
        self.hour_image = None;
        self.minute_image = None;
        self.second_image = None;
        self.image = None;
    }

    fn clone_properties(&self) -> &'static [&'static str] {
        TIME_CLOCK_PROPERTIES
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// Handle-level setters. Each fails with `InvalidArgument` when `id` is not a
// live clock face.

pub fn cast(tree: &WidgetTree, id: WidgetId) -> Result<&ClockFace, WidgetError> {
    tree.cast::<ClockFace>(id)
}

pub fn cast_mut(tree: &mut WidgetTree, id: WidgetId) -> Result<&mut ClockFace, WidgetError> {
    tree.cast_mut::<ClockFace>(id)
}

pub fn set_hour(tree: &mut WidgetTree, id: WidgetId, hour: i32) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_hour(hour);
    Ok(())
}

pub fn set_minute(tree: &mut WidgetTree, id: WidgetId, minute: i32) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_minute(minute);
    Ok(())
}

pub fn set_second(tree: &mut WidgetTree, id: WidgetId, second: i32) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_second(second);
    Ok(())
}

pub fn set_bg_image(
    tree: &mut WidgetTree,
    id: WidgetId,
    name: Option<&str>,
) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_bg_image(name);
    Ok(())
}

pub fn set_hour_image(
    tree: &mut WidgetTree,
    id: WidgetId,
    name: Option<&str>,
) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_hour_image(name);
    Ok(())
}

pub fn set_minute_image(
    tree: &mut WidgetTree,
    id: WidgetId,
    name: Option<&str>,
) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_minute_image(name);
    Ok(())
}

pub fn set_second_image(
    tree: &mut WidgetTree,
    id: WidgetId,
    name: Option<&str>,
) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_second_image(name);
    Ok(())
}

pub fn set_image(
    tree: &mut WidgetTree,
    id: WidgetId,
    name: Option<&str>,
) -> Result<(), WidgetError> {
    cast_mut(tree, id)?.set_image(name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time_clock_core::{MemoryImageResolver, Registry};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Centered(String, Rect),
        Save,
        Restore,
        Translate(f64, f64),
        Rotate(f64),
        Draw(String, Rect, Rect),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl RecordingCanvas {
        fn drawn(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Centered(name, _) | Op::Draw(name, _, _) => Some(name.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn draw_image_centered(&mut self, bitmap: &Bitmap, dst: Rect) -> Result<()> {
            self.ops.push(Op::Centered(bitmap.name().to_string(), dst));
            Ok(())
        }
        fn save(&mut self) -> Result<()> {
            self.ops.push(Op::Save);
            Ok(())
        }
        fn restore(&mut self) -> Result<()> {
            self.ops.push(Op::Restore);
            Ok(())
        }
        fn translate(&mut self, dx: f64, dy: f64) {
            self.ops.push(Op::Translate(dx, dy));
        }
        fn rotate(&mut self, radians: f64) {
            self.ops.push(Op::Rotate(radians));
        }
        fn draw_image(&mut self, bitmap: &Bitmap, src: Rect, dst: Rect) -> Result<()> {
            self.ops.push(Op::Draw(bitmap.name().to_string(), src, dst));
            Ok(())
        }
    }

    fn images() -> MemoryImageResolver {
        let mut images = MemoryImageResolver::new();
        for (name, w, h) in [
            ("bg", 200, 200),
            ("hour", 10, 60),
            ("minute", 8, 90),
            ("second", 4, 96),
            ("glass", 180, 180),
        ] {
            images.insert(Bitmap::blank(name, w, h).unwrap());
        }
        images
    }

    fn full_clock() -> ClockFace {
        let mut clock = ClockFace::new();
        clock.set_bg_image(Some("bg"));
        clock.set_hour_image(Some("hour"));
        clock.set_minute_image(Some("minute"));
        clock.set_second_image(Some("second"));
        clock.set_image(Some("glass"));
        clock
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn test_hour_rotation_endpoints() {
        assert_eq!(Hand::Hour.rotation(0), 0.0);
        assert_close(Hand::Hour.rotation(6), PI);
        assert_close(Hand::Hour.rotation(3), PI / 2.0);
        assert_close(Hand::Hour.rotation(12), 2.0 * PI);
    }

    #[test]
    fn test_minute_and_second_rotation() {
        for value in 0..60 {
            let expected = 2.0 * PI * value as f64 / 60.0;
            assert_close(Hand::Minute.rotation(value), expected);
            assert_close(Hand::Second.rotation(value), expected);
        }
        assert_close(Hand::Minute.rotation(15), PI / 2.0);
    }

    #[test]
    fn test_out_of_range_values_wrap_past_a_revolution() {
        assert_close(Hand::Hour.rotation(18), 3.0 * PI);
        assert_close(Hand::Second.rotation(-15), -PI / 2.0);
    }

    #[test]
    fn test_pivot_lands_on_box_centre() {
        let dst = Rect::from_size(200.0, 160.0);
        for (hand, w, h) in [
            (Hand::Hour, 10.0, 60.0),
            (Hand::Minute, 8.0, 90.0),
            (Hand::Second, 4.0, 96.0),
        ] {
            assert_eq!(hand.placement(w, h, dst).pivot(), (100.0, 80.0), "{:?}", hand);
        }
    }

    #[test]
    fn test_hour_hand_placement() {
        let placement = Hand::Hour.placement(10.0, 60.0, Rect::from_size(200.0, 200.0));
        assert_eq!(placement.offset, (95.0, 45.0));
        assert_eq!(placement.anchor, (5.0, 55.0));
    }

    #[test]
    fn test_second_hand_placement() {
        let placement = Hand::Second.placement(4.0, 96.0, Rect::from_size(200.0, 200.0));
        assert_eq!(placement.offset, (98.0, 2.0));
        assert_eq!(placement.anchor, (2.0, 98.0));
    }

    #[test]
    fn test_image_prop_round_trip() {
        let mut clock = ClockFace::new();
        for name in [
            props::BG_IMAGE,
            props::HOUR_IMAGE,
            props::MINUTE_IMAGE,
            props::SECOND_IMAGE,
            props::IMAGE,
        ] {
            let value = Value::from(format!("{}_v1", name));
            clock.set_prop(name, &value).unwrap();
            assert_eq!(clock.get_prop(name).unwrap(), value);

            clock.set_prop(name, &Value::Null).unwrap();
            assert_eq!(clock.get_prop(name).unwrap(), Value::Null);
        }
    }

    #[test]
    fn test_time_props_are_independent() {
        let mut clock = ClockFace::new();
        clock.set_prop(props::HOUR, &Value::Int(9)).unwrap();
        clock.set_prop(props::MINUTE, &Value::Int(41)).unwrap();
        clock.set_prop(props::SECOND, &Value::from("17")).unwrap();

        assert_eq!(clock.get_prop(props::HOUR).unwrap(), Value::Int(9));
        assert_eq!(clock.get_prop(props::MINUTE).unwrap(), Value::Int(41));
        assert_eq!(clock.get_prop(props::SECOND).unwrap(), Value::Int(17));
    }

    #[test]
    fn test_unknown_prop_not_found() {
        let mut clock = ClockFace::new();
        assert_eq!(
            clock.get_prop("repeat"),
            Err(WidgetError::NotFound("repeat".to_string()))
        );
        assert!(matches!(
            clock.set_prop("repeat", &Value::Int(1)),
            Err(WidgetError::NotFound(_))
        ));
    }

    #[test]
    fn test_wrong_value_kind_is_invalid() {
        let mut clock = ClockFace::new();
        assert!(matches!(
            clock.set_prop(props::HOUR, &Value::from("noon")),
            Err(WidgetError::InvalidArgument(_))
        ));
        assert!(matches!(
            clock.set_prop(props::BG_IMAGE, &Value::Int(3)),
            Err(WidgetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_paint_without_images_draws_nothing() {
        let clock = ClockFace::new();
        let mut canvas = RecordingCanvas::default();
        clock
            .on_paint_self(&mut canvas, Rect::from_size(200.0, 200.0), &images())
            .unwrap();
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_paint_layer_order() {
        let clock = full_clock();
        let mut canvas = RecordingCanvas::default();
        clock
            .on_paint_self(&mut canvas, Rect::from_size(200.0, 200.0), &images())
            .unwrap();

        assert_eq!(canvas.drawn(), vec!["bg", "hour", "minute", "second", "glass"]);
        assert_eq!(
            canvas.ops[0],
            Op::Centered("bg".to_string(), Rect::from_size(200.0, 200.0))
        );
    }

    #[test]
    fn test_missing_hour_image_skips_only_that_layer() {
        let mut clock = full_clock();
        clock.set_hour_image(Some("no_such_hand"));
        let mut canvas = RecordingCanvas::default();
        clock
            .on_paint_self(&mut canvas, Rect::from_size(200.0, 200.0), &images())
            .unwrap();

        assert_eq!(canvas.drawn(), vec!["bg", "minute", "second", "glass"]);
    }

    #[test]
    fn test_hand_transform_sequence() {
        let mut clock = ClockFace::new();
        clock.set_hour(3);
        clock.set_hour_image(Some("hour"));
        let mut canvas = RecordingCanvas::default();
        clock
            .on_paint_self(&mut canvas, Rect::from_size(200.0, 200.0), &images())
            .unwrap();

        let full = Rect::from_size(10.0, 60.0);
        assert_eq!(
            canvas.ops,
            vec![
                Op::Save,
                Op::Translate(95.0, 45.0),
                Op::Translate(5.0, 55.0),
                Op::Rotate(Hand::Hour.rotation(3)),
                Op::Translate(-5.0, -55.0),
                Op::Draw("hour".to_string(), full, full),
                Op::Restore,
            ]
        );
    }

    #[test]
    fn test_each_hand_is_isolated() {
        let clock = full_clock();
        let mut canvas = RecordingCanvas::default();
        clock
            .on_paint_self(&mut canvas, Rect::from_size(200.0, 200.0), &images())
            .unwrap();

        let mut depth = 0i32;
        for op in &canvas.ops {
            match op {
                Op::Save => depth += 1,
                Op::Restore => depth -= 1,
                Op::Draw(..) => assert_eq!(depth, 1),
                Op::Centered(..) => assert_eq!(depth, 0),
                _ => {}
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut clock = full_clock();
        clock.destroy();
        clock.destroy();

        assert_eq!(clock.bg_image(), None);
        assert_eq!(clock.hour_image(), None);
        assert_eq!(clock.minute_image(), None);
        assert_eq!(clock.second_image(), None);
        assert_eq!(clock.image(), None);
    }

    #[test]
    fn test_config_round_trip() {
        let mut clock = full_clock();
        clock.set_hour(10);
        clock.set_minute(8);
        clock.set_second(30);

        let config = clock.to_config();
        assert_eq!(ClockFace::from_config(&config), clock);
    }

    fn tree() -> WidgetTree {
        let mut registry = Registry::new();
        crate::register_all(&mut registry);
        WidgetTree::new(registry)
    }

    #[test]
    fn test_handle_setters() {
        let mut tree = tree();
        let id = tree
            .create(WIDGET_TYPE_TIME_CLOCK, 0.0, 0.0, 200.0, 200.0)
            .unwrap();

        set_hour(&mut tree, id, 4).unwrap();
        set_minute(&mut tree, id, 20).unwrap();
        set_bg_image(&mut tree, id, Some("bg")).unwrap();

        let clock = cast(&tree, id).unwrap();
        assert_eq!((clock.hour(), clock.minute()), (4, 20));
        assert_eq!(tree.get_prop(id, props::BG_IMAGE).unwrap(), Value::from("bg"));
    }

    #[test]
    fn test_stale_handle_is_invalid() {
        let mut tree = tree();
        let id = tree
            .create(WIDGET_TYPE_TIME_CLOCK, 0.0, 0.0, 200.0, 200.0)
            .unwrap();
        tree.destroy(id).unwrap();

        assert!(matches!(set_hour(&mut tree, id, 1), Err(WidgetError::InvalidArgument(_))));
        assert!(matches!(set_minute(&mut tree, id, 1), Err(WidgetError::InvalidArgument(_))));
        assert!(matches!(set_second(&mut tree, id, 1), Err(WidgetError::InvalidArgument(_))));
        assert!(matches!(
            set_bg_image(&mut tree, id, Some("bg")),
            Err(WidgetError::InvalidArgument(_))
        ));
        assert!(matches!(
            set_hour_image(&mut tree, id, None),
            Err(WidgetError::InvalidArgument(_))
        ));
        assert!(matches!(
            set_minute_image(&mut tree, id, None),
            Err(WidgetError::InvalidArgument(_))
        ));
        assert!(matches!(
            set_second_image(&mut tree, id, None),
            Err(WidgetError::InvalidArgument(_))
        ));
        assert!(matches!(set_image(&mut tree, id, None), Err(WidgetError::InvalidArgument(_))));
    }

    #[test]
    fn test_clone_widget_copies_face() {
        let mut tree = tree();
        let id = tree
            .create(WIDGET_TYPE_TIME_CLOCK, 10.0, 20.0, 200.0, 200.0)
            .unwrap();
        *cast_mut(&mut tree, id).unwrap() = full_clock();
        set_second(&mut tree, id, 42).unwrap();

        let copy = tree.clone_widget(id).unwrap();
        assert_eq!(cast(&tree, copy).unwrap(), cast(&tree, id).unwrap());
        assert_eq!(tree.bounds(copy).unwrap(), tree.bounds(id).unwrap());
    }

    #[test]
    fn test_tree_paint_offsets_by_layout_position() {
        let mut tree = tree();
        let id = tree
            .create(WIDGET_TYPE_TIME_CLOCK, 30.0, 40.0, 200.0, 200.0)
            .unwrap();
        set_bg_image(&mut tree, id, Some("bg")).unwrap();

        let mut canvas = RecordingCanvas::default();
        tree.paint(id, &mut canvas, &images()).unwrap();
        assert_eq!(
            canvas.ops,
            vec![
                Op::Save,
                Op::Translate(30.0, 40.0),
                Op::Centered("bg".to_string(), Rect::from_size(200.0, 200.0)),
                Op::Restore,
            ]
        );
    }
}
