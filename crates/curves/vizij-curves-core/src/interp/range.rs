//! Bracket search over ascending key times.

use crate::keyframe::Keyframe;

/// Bracketing keys for a query time and the normalized position between them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyRange {
    pub left: usize,
    pub right: usize,
    /// Position in [0, 1] from `left` to `right`.
    pub t: f32,
}

impl KeyRange {
    #[inline]
    const fn at(index: usize) -> Self {
        Self {
            left: index,
            right: index,
            t: 0.0,
        }
    }

    /// True when both ends are the same key.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }
}

/// Find the keys surrounding `time` with a single ascending pass.
///
/// - Before the first key (or NaN) clamps to the first key, `t = 0`.
/// - At or after the last key collapses both ends to the last key, `t = 0`.
/// - An exact hit on a key makes it the left end with `t = 0`.
/// - Empty and single-key input yields `(0, 0, 0)`.
pub fn find_range_containing_offset<V>(keys: &[Keyframe<V>], time: f32) -> KeyRange {
    let n = keys.len();
    if n < 2 || time.is_nan() || time < keys[0].time {
        return KeyRange::at(0);
    }
    let last = n - 1;
    if time >= keys[last].time {
        return KeyRange::at(last);
    }
    for i in 0..last {
        let right_time = keys[i + 1].time;
        if time < right_time {
            let left_time = keys[i].time;
            let t = (time - left_time) / (right_time - left_time);
            return KeyRange {
                left: i,
                right: i + 1,
                t: t.clamp(0.0, 1.0),
            };
        }
    }
    KeyRange::at(last)
}
