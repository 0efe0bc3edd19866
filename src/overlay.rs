//! Debug rendering of classified hands.
//!
//! Draws each hand's skeleton in its gesture color on a black canvas the size
//! of the detector frame.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};

use crate::models::Gesture;
use crate::recognition::landmarks::{FrameSize, HAND_CONNECTIONS, HandLandmarks, PROMINENT_LANDMARKS};

const BONE_THICKNESS: i32 = 3;
const JOINT_RADIUS: i32 = 6;
const TIP_RADIUS: i32 = 9;
const OUTLINE: Rgb<u8> = Rgb([255, 255, 255]);

pub fn render_overlay(size: FrameSize, hands: &[(HandLandmarks, Gesture)]) -> RgbImage {
    let mut canvas = RgbImage::new(size.width.max(1), size.height.max(1));

    for (landmarks, gesture) in hands {
        let color = Rgb(<[u8; 3]>::from(gesture.display_color()));

        for (start, end) in HAND_CONNECTIONS {
            let a = landmarks[start];
            let b = landmarks[end];
            for offset in 0..BONE_THICKNESS {
                let d = (offset - BONE_THICKNESS / 2) as f32;
                draw_line_segment_mut(&mut canvas, (a.x + d, a.y), (b.x + d, b.y), color);
            }
        }

        for (i, point) in landmarks.iter().enumerate() {
            let center = (point.x as i32, point.y as i32);
            let radius = if PROMINENT_LANDMARKS.contains(&i) { TIP_RADIUS } else { JOINT_RADIUS };
            draw_hollow_circle_mut(&mut canvas, center, radius + 2, OUTLINE);
            draw_filled_circle_mut(&mut canvas, center, radius, color);
        }
    }

    canvas
}
