//! Axis-aligned bounding-box overlap tests.
//!
//! Entities are center-positioned boxes; overlap is strict, so boxes that
//! merely touch edges do not collide.

use glam::Vec2;

/// Overlap test for two center+extents AABBs.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    (a_pos.x - b_pos.x).abs() * 2.0 < a_size.x + b_size.x
        && (a_pos.y - b_pos.y).abs() * 2.0 < a_size.y + b_size.y
}
