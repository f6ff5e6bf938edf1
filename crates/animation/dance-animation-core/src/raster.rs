//! Stick-figure rasterizer: pose -> RGB pixel buffer.
//!
//! Primitives clip at the canvas edge; off-canvas geometry is never an error.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::pose::Pose;

/// Stroke and fill constants for the figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub background: [u8; 3],
    pub stroke: [u8; 3],
    pub line_width: u32,
    pub head_radius: u32,
    pub joint_radius: u32,
    /// Arms hang from this many pixels below the head anchor.
    pub shoulder_drop: i32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            stroke: [0, 0, 0],
            line_width: 2,
            head_radius: 15,
            joint_radius: 3,
            shoulder_drop: 5,
        }
    }
}

/// One rasterized instant: `width * height * 3` bytes, row-major RGB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// RGB at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }
}

/// Render `pose` on a `width` x `height` canvas with the default style.
pub fn render(pose: &Pose, width: u32, height: u32) -> Frame {
    render_with(pose, width, height, &RenderStyle::default())
}

/// Render `pose` with explicit stroke settings.
pub fn render_with(pose: &Pose, width: u32, height: u32, style: &RenderStyle) -> Frame {
    let mut image = RgbImage::from_pixel(width, height, Rgb(style.background));
    let ink = Rgb(style.stroke);
    let w = style.line_width;

    draw_line(&mut image, pose.head, pose.body, w, ink);
    draw_circle(&mut image, pose.head, style.head_radius, w, ink);

    let shoulder = pose.head.offset(0, style.shoulder_drop);
    for arm in pose.arms {
        draw_line(&mut image, shoulder, arm, w, ink);
        fill_circle(&mut image, shoulder, style.joint_radius, ink);
    }
    for leg in pose.legs {
        draw_line(&mut image, pose.body, leg, w, ink);
        fill_circle(&mut image, pose.body, style.joint_radius, ink);
    }

    Frame { image }
}

/// Render every pose in order. A pose equal to its predecessor reuses the
/// previous pixels, so hold frames are byte-identical copies.
pub fn render_all(poses: &[Pose], width: u32, height: u32, style: &RenderStyle) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::with_capacity(poses.len());
    let mut prev: Option<&Pose> = None;
    for pose in poses {
        let frame = match (prev, frames.last()) {
            (Some(p), Some(last)) if p == pose => last.clone(),
            _ => render_with(pose, width, height, style),
        };
        frames.push(frame);
        prev = Some(pose);
    }
    frames
}

#[inline]
fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line. Widths above one stack parallel passes across the minor
/// axis.
fn draw_line(img: &mut RgbImage, a: Point, b: Point, width: u32, color: Rgb<u8>) {
    let (x0, y0) = (i64::from(a.x), i64::from(a.y));
    let (x1, y1) = (i64::from(b.x), i64::from(b.y));
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let x_major = dx >= -dy;
    let w = i64::from(width.max(1));
    let lo = -(w - 1) / 2;
    let hi = lo + w - 1;

    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    loop {
        for o in lo..=hi {
            if x_major {
                put(img, x, y + o, color);
            } else {
                put(img, x + o, y, color);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Ring of outer radius `r` and thickness `width`.
fn draw_circle(img: &mut RgbImage, c: Point, r: u32, width: u32, color: Rgb<u8>) {
    let r = i64::from(r);
    let inner = (r - i64::from(width)).max(0);
    let (outer2, inner2) = (r * r, inner * inner);
    for dy in -r..=r {
        for dx in -r..=r {
            let d2 = dx * dx + dy * dy;
            if d2 <= outer2 && (d2 > inner2 || inner == 0) {
                put(img, i64::from(c.x) + dx, i64::from(c.y) + dy, color);
            }
        }
    }
}

fn fill_circle(img: &mut RgbImage, c: Point, r: u32, color: Rgb<u8>) {
    let r = i64::from(r);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(img, i64::from(c.x) + dx, i64::from(c.y) + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: [u8; 3] = [0, 0, 0];
    const PAPER: [u8; 3] = [255, 255, 255];

    fn standing() -> Pose {
        Pose {
            head: Point::new(200, 200),
            body: Point::new(200, 240),
            arms: [Point::new(170, 200), Point::new(230, 200)],
            legs: [Point::new(190, 270), Point::new(210, 270)],
        }
    }

    #[test]
    fn buffer_is_rgb_of_canvas_size() {
        let f = render(&standing(), 400, 300);
        assert_eq!((f.width(), f.height()), (400, 300));
        assert_eq!(f.as_bytes().len(), 400 * 300 * 3);
    }

    #[test]
    fn draws_spine_head_and_joints() {
        let f = render(&standing(), 400, 400);
        // spine between head and body
        assert_eq!(f.pixel(200, 225), Some(INK));
        // head ring top, hollow center away from the spine
        assert_eq!(f.pixel(200, 185), Some(INK));
        assert_eq!(f.pixel(193, 197), Some(PAPER));
        // shoulder joint and hip joint
        assert_eq!(f.pixel(202, 205), Some(INK));
        assert_eq!(f.pixel(198, 242), Some(INK));
        // foot endpoints
        assert_eq!(f.pixel(190, 270), Some(INK));
        assert_eq!(f.pixel(210, 270), Some(INK));
        // background corner
        assert_eq!(f.pixel(0, 0), Some(PAPER));
        assert_eq!(f.pixel(400, 0), None);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render(&standing(), 400, 400);
        let b = render(&standing(), 400, 400);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn off_canvas_geometry_is_clipped() {
        let pose = standing().translated(-210, -250);
        let f = render(&pose, 64, 64);
        assert_eq!(f.as_bytes().len(), 64 * 64 * 3);
        let far = standing().translated(5000, 5000);
        let g = render(&far, 64, 64);
        assert!(g.as_bytes().iter().all(|b| *b == 255));
    }

    #[test]
    fn custom_colors_apply() {
        let style = RenderStyle {
            background: [10, 20, 30],
            stroke: [200, 0, 0],
            ..RenderStyle::default()
        };
        let f = render_with(&standing(), 400, 400, &style);
        assert_eq!(f.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(f.pixel(200, 225), Some([200, 0, 0]));
    }

    #[test]
    fn repeated_poses_share_pixels() {
        let p = standing();
        let q = p.translated(3, 0);
        let frames = render_all(&[p, p, q, q], 400, 400, &RenderStyle::default());
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], frames[1]);
        assert_ne!(frames[1], frames[2]);
        assert_eq!(frames[2].as_bytes(), render(&q, 400, 400).as_bytes());
    }
}
